mod agent;

pub use agent::ISequentialAgent;

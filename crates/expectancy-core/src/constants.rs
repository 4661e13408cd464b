/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of partners each subject interacts with in the public-goods game.
pub const GROUP_PARTNERS: usize = 3;

/// Default trailing window for the two-party agent.
pub const DEFAULT_DYADIC_DEPTH: usize = 400;

/// Default trailing window for the group agent.
pub const DEFAULT_GROUP_DEPTH: usize = 20;

/// Default decay. 1.0 disables recency discounting.
pub const DEFAULT_DECAY: f64 = 1.0;

/// Total stake split in one ultimatum round.
pub const DEFAULT_STAKE: f64 = 10.0;

/// Phase tag of the punishment experiment rows in the public-goods data.
pub const DEFAULT_PGG_PHASE: &str = "P-experiment";

use crate::constants;

pub const DEFAULT_DYADIC_DECAY: f64 = constants::DEFAULT_DECAY;
pub const DEFAULT_DYADIC_DEPTH: usize = constants::DEFAULT_DYADIC_DEPTH;
pub const DEFAULT_RESET_ON_BLOCK: bool = true;
pub const DEFAULT_STAKE: f64 = constants::DEFAULT_STAKE;

pub const DEFAULT_GROUP_DECAY: f64 = constants::DEFAULT_DECAY;
pub const DEFAULT_GROUP_DEPTH: usize = constants::DEFAULT_GROUP_DEPTH;
pub const DEFAULT_GROUP_PHASE: &str = constants::DEFAULT_PGG_PHASE;

pub const DEFAULT_SWEEP_START: f64 = 0.01;
pub const DEFAULT_SWEEP_END: f64 = 0.99;
pub const DEFAULT_SWEEP_STEPS: usize = 99;

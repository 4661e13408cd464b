/// Invalid estimator or pipeline configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("decay must lie in (0, 1], got {value}")]
    InvalidDecay { value: f64 },

    #[error("depth must be at least 1, got {value}")]
    InvalidDepth { value: usize },

    #[error("invalid decay sweep: {reason}")]
    InvalidSweep { reason: String },

    #[error("failed to parse config: {message}")]
    Parse { message: String },
}

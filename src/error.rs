use thiserror::Error;

/// Errors raised while loading a [`ReachConfig`](crate::core::ReachConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("bubble cursor radii must be positive, got min {min} and max {max}")]
    NonPositiveRadius { min: f32, max: f32 },

    #[error("bubble cursor min radius {min} exceeds max radius {max}")]
    InvertedRadius { min: f32, max: f32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

use thiserror::Error;

/// Errors raised while loading interaction settings.
///
/// The state machines themselves never fail: out-of-range input is clamped
/// and missing page parts turn operations into no-ops.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

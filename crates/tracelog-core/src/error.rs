//! Error types
//!
//! Only setup paths return these. Logging calls never fail.

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from setting up the logging subsystem
#[derive(Error, Debug)]
pub enum TraceLogError {
    #[error("Global logger registry is already initialized")]
    AlreadyInitialized,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TraceLogResult<T> = Result<T, TraceLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidValue {
            key: "sink".to_string(),
            value: "syslog".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for sink: syslog");

        let wrapped: TraceLogError = err.into();
        assert!(wrapped.to_string().starts_with("Configuration error:"));
    }
}

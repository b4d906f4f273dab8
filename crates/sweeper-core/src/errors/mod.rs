use std::error::Error;

// Re-export ConfigError from sweeper-config so callers have one error root
pub use sweeper_config::ConfigError;

/// Base trait for all application errors
pub trait SweeperError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SweeperResult<T> = Result<T, Box<dyn SweeperError>>;

impl SweeperError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidConfiguration { .. }
                | ConfigError::InvalidEndpoint { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweeper_result() {
        let _result: SweeperResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_error_codes() {
        let error = ConfigError::InvalidConfiguration {
            message: "project_id is required".to_string(),
        };
        assert_eq!(error.error_code(), "INVALID_CONFIGURATION");
        assert!(error.is_user_error());

        let error = ConfigError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}

//! Structured logging helpers for application errors.

use tracing::{error, warn};

use crate::errors::SweeperError;

/// Log an application error at the level its classification asks for.
///
/// User errors (bad configuration, bad input) go to `warn!`; everything
/// else is an internal failure and goes to `error!`.
pub fn log_app_error(err: &dyn SweeperError) {
    if err.is_user_error() {
        warn!(
            event = "core.app_error",
            code = err.error_code(),
            error = %err
        );
    } else {
        error!(
            event = "core.app_error",
            code = err.error_code(),
            error = %err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn log_app_error_does_not_panic() {
        let user_error = ConfigError::InvalidConfiguration {
            message: "missing project".to_string(),
        };
        log_app_error(&user_error);

        let internal_error = ConfigError::IoError {
            source: std::io::Error::other("disk on fire"),
        };
        log_app_error(&internal_error);
    }
}

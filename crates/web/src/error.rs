// =============================================================================
// Interactive Studios Web - Error Types
// =============================================================================

use thiserror::Error;

/// Errors surfaced by the site shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for SiteError {
    fn from(err: log::SetLoggerError) -> Self {
        SiteError::Logger(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SiteError::UnknownRoute("/blog".to_string()).to_string(),
            "Unknown route: /blog"
        );
        assert_eq!(
            SiteError::Logger("already set".to_string()).to_string(),
            "Logger error: already set"
        );
    }
}

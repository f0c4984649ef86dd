//! Error types for the facade

pub type Result<T> = std::result::Result<T, FacadeError>;

/// Errors surfaced by the facade itself.
///
/// Logging calls never fail: malformed arguments degrade per the documented
/// rules and backend failures stay the backend's concern. The only fallible
/// operations are configuration-level ones.
#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    /// Severity string did not match any known level
    #[error("invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// The process-wide default provider was already installed
    #[error("default logger provider already installed")]
    DefaultProviderInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FacadeError::InvalidSeverity("verbose".to_string());
        assert_eq!(err.to_string(), "invalid severity: 'verbose'");

        let err = FacadeError::DefaultProviderInstalled;
        assert_eq!(err.to_string(), "default logger provider already installed");
    }
}

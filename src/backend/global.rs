//! Process-wide default logger provider
//!
//! Construction options may omit a provider; the facade then falls back to
//! the provider installed here, or to the no-op provider when none has been
//! installed.

use parking_lot::RwLock;
use std::sync::Arc;

use super::noop::NoopLoggerProvider;
use super::provider::LoggerProvider;
use crate::core::error::{FacadeError, Result};

static DEFAULT_PROVIDER: RwLock<Option<Arc<dyn LoggerProvider>>> = RwLock::new(None);

/// Install the process-wide default provider.
///
/// Fails if a default provider was already installed; the first installation
/// wins for the lifetime of the process.
pub fn set_default_provider(provider: Arc<dyn LoggerProvider>) -> Result<()> {
    let mut slot = DEFAULT_PROVIDER.write();
    if slot.is_some() {
        return Err(FacadeError::DefaultProviderInstalled);
    }
    *slot = Some(provider);
    Ok(())
}

/// The current default provider, or the no-op provider when none is set.
pub fn default_provider() -> Arc<dyn LoggerProvider> {
    DEFAULT_PROVIDER
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(NoopLoggerProvider::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::provider::{EnabledParams, InstrumentationScope};
    use crate::core::context::Context;
    use crate::core::severity::Severity;

    // Single test for the install-once contract: the default-provider slot is
    // process-wide state, so all assertions live in one test.
    #[test]
    fn test_default_provider_lifecycle() {
        // Unset slot falls back to the no-op provider
        let provider = default_provider();
        let logger = provider.logger(InstrumentationScope::new("test"));
        assert!(!logger.enabled(
            &Context::new(),
            &EnabledParams::severity(Severity::Error)
        ));

        assert!(set_default_provider(Arc::new(NoopLoggerProvider::new())).is_ok());

        // Second installation is rejected
        let err = set_default_provider(Arc::new(NoopLoggerProvider::new())).unwrap_err();
        assert!(matches!(err, FacadeError::DefaultProviderInstalled));
    }
}

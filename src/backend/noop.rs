//! No-op backend used when no provider is installed

use std::sync::Arc;

use super::provider::{BackendLogger, EnabledParams, InstrumentationScope, LoggerProvider};
use crate::core::context::Context;
use crate::core::record::Record;

/// Provider that manufactures loggers which discard everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLoggerProvider;

impl NoopLoggerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for NoopLoggerProvider {
    fn logger(&self, _scope: InstrumentationScope) -> Arc<dyn BackendLogger> {
        Arc::new(NoopLogger)
    }
}

/// Logger handle that drops records and reports everything disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl BackendLogger for NoopLogger {
    fn emit(&self, _cx: &Context, _record: Record) {}

    fn enabled(&self, _cx: &Context, _params: &EnabledParams) -> bool {
        false
    }
}

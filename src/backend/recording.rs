//! In-memory recording backend
//!
//! Captures every emitted record (with its correlation context) and every
//! instrumentation scope requested from the provider, so tests and examples
//! can assert on exactly what a facade logger hands to its backend. An
//! optional enabled-function simulates backend-side severity filtering.

use parking_lot::RwLock;
use std::sync::Arc;

use super::provider::{BackendLogger, EnabledParams, InstrumentationScope, LoggerProvider};
use crate::core::context::Context;
use crate::core::record::Record;

/// Backend-side enabled decision used by [`RecordingProvider::with_enabled_fn`].
pub type EnabledFn = Arc<dyn Fn(&Context, &EnabledParams) -> bool + Send + Sync>;

/// One captured emission: the record plus the context it was emitted with.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub context: Context,
    pub record: Record,
}

#[derive(Default)]
struct Inner {
    scopes: RwLock<Vec<InstrumentationScope>>,
    captured: RwLock<Vec<CapturedRecord>>,
    enabled_fn: Option<EnabledFn>,
}

/// Provider that hands out recording logger handles sharing one capture store.
#[derive(Clone, Default)]
pub struct RecordingProvider {
    inner: Arc<Inner>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose loggers answer enabled-checks with `f`.
    pub fn with_enabled_fn(f: EnabledFn) -> Self {
        Self {
            inner: Arc::new(Inner {
                enabled_fn: Some(f),
                ..Inner::default()
            }),
        }
    }

    /// All captured emissions, in emission order
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.inner.captured.read().clone()
    }

    /// Instrumentation scopes requested from this provider, in request order
    pub fn scopes(&self) -> Vec<InstrumentationScope> {
        self.inner.scopes.read().clone()
    }

    pub fn record_count(&self) -> usize {
        self.inner.captured.read().len()
    }

    /// Discard all captured emissions (requested scopes are kept)
    pub fn reset(&self) {
        self.inner.captured.write().clear();
    }
}

impl LoggerProvider for RecordingProvider {
    fn logger(&self, scope: InstrumentationScope) -> Arc<dyn BackendLogger> {
        self.inner.scopes.write().push(scope);
        Arc::new(RecordingLogger {
            inner: Arc::clone(&self.inner),
        })
    }
}

struct RecordingLogger {
    inner: Arc<Inner>,
}

impl BackendLogger for RecordingLogger {
    fn emit(&self, cx: &Context, record: Record) {
        self.inner.captured.write().push(CapturedRecord {
            context: cx.clone(),
            record,
        });
    }

    fn enabled(&self, cx: &Context, params: &EnabledParams) -> bool {
        match &self.inner.enabled_fn {
            Some(f) => f(cx, params),
            None => true,
        }
    }
}

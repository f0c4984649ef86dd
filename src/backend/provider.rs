//! Backend collaborator contract
//!
//! The facade delegates all transmission, storage, and filtering to an
//! external backend. The contract is small: a [`LoggerProvider`] manufactures
//! named logger handles, and each [`BackendLogger`] handle can emit a record
//! and answer enabled-checks.

use std::sync::Arc;

use crate::core::context::Context;
use crate::core::record::Record;
use crate::core::severity::Severity;
use crate::core::value::KeyValue;

/// Identity of a logger as requested from a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentationScope {
    /// Logger namespace, typically the instrumented crate or module path
    pub name: String,

    /// Free-form version string
    pub version: Option<String>,

    /// Fixed attributes describing the logger's identity
    pub attributes: Vec<KeyValue>,
}

impl InstrumentationScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            attributes: Vec::new(),
        }
    }
}

/// Parameters of an enabled-check.
#[derive(Debug, Clone, PartialEq)]
pub struct EnabledParams {
    pub severity: Severity,

    /// Set for event-specific checks
    pub event_name: Option<String>,
}

impl EnabledParams {
    pub fn severity(severity: Severity) -> Self {
        Self {
            severity,
            event_name: None,
        }
    }

    pub fn event(severity: Severity, name: impl Into<String>) -> Self {
        Self {
            severity,
            event_name: Some(name.into()),
        }
    }
}

/// Manufactures named backend logger handles.
pub trait LoggerProvider: Send + Sync {
    fn logger(&self, scope: InstrumentationScope) -> Arc<dyn BackendLogger>;
}

/// One backend logger handle.
///
/// Shared (never exclusively owned) by every facade logger derived from it;
/// implementations must be safe to call concurrently.
pub trait BackendLogger: Send + Sync {
    /// Emit a record together with the caller-supplied correlation context.
    fn emit(&self, cx: &Context, record: Record);

    /// Report whether a record with the given parameters would be processed.
    /// Must be cheap and side-effect-free.
    fn enabled(&self, cx: &Context, params: &EnabledParams) -> bool;
}

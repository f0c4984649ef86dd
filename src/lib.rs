//! # Rust Log Facade
//!
//! An ergonomic structured-logging frontend over a severity-leveled,
//! attribute-based backend. The facade offers a small, consistent surface —
//! leveled messages, semantic events, enabled-checks, and pre-bound
//! contextual attributes — and translates every call into the backend's
//! canonical record shape.
//!
//! ## Features
//!
//! - **Dual encoding**: alternating key/value arguments (`args![...]`) or
//!   pre-typed attributes (`KeyValue`), normalized into one record shape
//! - **Immutable composition**: `with`/`with_attr` bind attributes and return
//!   a new logger; the receiver is never mutated
//! - **Enabled checks**: cheap severity (and event-name) queries to skip
//!   expensive argument construction
//! - **Pluggable backends**: a narrow provider contract, with no-op and
//!   recording implementations bundled
//!
//! ## Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use std::sync::Arc;
//!
//! let provider = RecordingProvider::new();
//! let base = Logger::builder()
//!     .provider(Arc::new(provider.clone()))
//!     .name("my::service")
//!     .build();
//!
//! let logger = base.with(&args!["service", "auth"]);
//! logger.info(&Context::new(), "user created", &args!["user_id", 12345]);
//!
//! let record = &provider.records()[0].record;
//! assert_eq!(record.attributes.len(), 2);
//! ```

pub mod backend;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::args;
    pub use crate::backend::{
        BackendLogger, CapturedRecord, EnabledParams, InstrumentationScope, LoggerProvider,
        NoopLoggerProvider, RecordingProvider,
    };
    pub use crate::core::{
        encode_args, normalize, Arg, Context, FacadeError, KeyValue, Logger, LoggerOptions,
        Record, Result, Severity, TracingContext, Value,
    };
}

pub use crate::backend::{
    default_provider, set_default_provider, BackendLogger, CapturedRecord, EnabledFn,
    EnabledParams, InstrumentationScope, LoggerProvider, NoopLogger, NoopLoggerProvider,
    RecordingProvider,
};
pub use crate::core::{
    encode_args, normalize, Arg, Context, FacadeError, KeyValue, Logger, LoggerOptions, Record,
    Result, Severity, TracingContext, Value,
};

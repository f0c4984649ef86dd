//! Backend provider contract and bundled implementations

pub mod global;
pub mod noop;
pub mod provider;
pub mod recording;

pub use global::{default_provider, set_default_provider};
pub use noop::{NoopLogger, NoopLoggerProvider};
pub use provider::{BackendLogger, EnabledParams, InstrumentationScope, LoggerProvider};
pub use recording::{CapturedRecord, EnabledFn, RecordingProvider};

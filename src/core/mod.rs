//! Core facade types

pub mod args;
pub mod caller;
pub mod context;
pub mod error;
pub mod logger;
pub mod record;
pub mod severity;
pub mod value;

pub use args::{encode_args, normalize, Arg};
pub use context::{Context, TracingContext};
pub use error::{FacadeError, Result};
pub use logger::{Logger, LoggerOptions};
pub use record::Record;
pub use severity::Severity;
pub use value::{KeyValue, Value};

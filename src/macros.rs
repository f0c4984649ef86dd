//! Logging macros for ergonomic call shapes.
//!
//! [`args!`] builds the alternating key/value argument sequence accepted by
//! the argument-based logging methods. The leveled macros (`trace!` through
//! `error!`) format a message `println!`-style and log it without call
//! attributes.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{args, info};
//!
//! let logger = Logger::builder().name("example").build();
//! let cx = Context::new();
//!
//! // Alternating key/value arguments
//! logger.info(&cx, "server started", &args!["port", 8080, "tls", true]);
//!
//! // Formatted message
//! let port = 8080;
//! info!(logger, &cx, "listening on port {}", port);
//! ```

/// Build an array of [`Arg`](crate::core::Arg) values from an alternating
/// key/value sequence.
///
/// Each element is converted with `Arg::from`, so string keys and scalar
/// values can be written directly:
///
/// ```
/// use rust_log_facade::args;
///
/// let args = args!["user_id", 12345, "active", true];
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::core::Arg; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::core::Arg::from($value)),+]
    };
}

/// Log a formatted message at an explicit severity.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::builder().name("example").build();
/// # let cx = Context::new();
/// use rust_log_facade::log;
/// log!(logger, &cx, Severity::Info, "processed {} items", 100);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $cx:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($cx, $severity, format!($($arg)+), &[])
    };
}

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $cx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $cx, $crate::core::Severity::Trace, $($arg)+)
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $cx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $cx, $crate::core::Severity::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::builder().name("example").build();
/// # let cx = Context::new();
/// use rust_log_facade::info;
/// info!(logger, &cx, "application started");
/// info!(logger, &cx, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $cx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $cx, $crate::core::Severity::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $cx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $cx, $crate::core::Severity::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $cx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $cx, $crate::core::Severity::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::backend::recording::RecordingProvider;
    use crate::core::{Context, Logger, Severity};
    use std::sync::Arc;

    fn recording_logger() -> (RecordingProvider, Logger) {
        let provider = RecordingProvider::new();
        let logger = Logger::builder()
            .provider(Arc::new(provider.clone()))
            .name("macros")
            .build();
        (provider, logger)
    }

    #[test]
    fn test_args_macro() {
        let args = args!["key", "value", "n", 42];
        assert_eq!(args.len(), 4);

        let empty = args![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_log_macro() {
        let (provider, logger) = recording_logger();
        let cx = Context::new();
        log!(logger, &cx, Severity::Info, "formatted: {}", 42);

        let record = &provider.records()[0].record;
        assert_eq!(record.body.as_deref(), Some("formatted: 42"));
        assert_eq!(record.severity, Severity::Info);
    }

    #[test]
    fn test_leveled_macros() {
        let (provider, logger) = recording_logger();
        let cx = Context::new();
        trace!(logger, &cx, "t");
        debug!(logger, &cx, "d");
        info!(logger, &cx, "i {}", 1);
        warn!(logger, &cx, "w");
        error!(logger, &cx, "e: {}", "failed");

        let severities: Vec<_> = provider
            .records()
            .iter()
            .map(|c| c.record.severity)
            .collect();
        assert_eq!(
            severities,
            vec![
                Severity::Trace,
                Severity::Debug,
                Severity::Info,
                Severity::Warn,
                Severity::Error,
            ]
        );
    }
}

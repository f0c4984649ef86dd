//! Facade logger implementation

use std::sync::Arc;

use super::args::{encode_args, Arg};
use super::caller;
use super::context::Context;
use super::record::Record;
use super::severity::Severity;
use super::value::KeyValue;
use crate::backend::global::default_provider;
use crate::backend::provider::{
    BackendLogger, EnabledParams, InstrumentationScope, LoggerProvider,
};

/// Configuration consumed once when constructing a [`Logger`].
///
/// # Example
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::Arc;
///
/// let provider = RecordingProvider::new();
/// let logger = Logger::builder()
///     .provider(Arc::new(provider.clone()))
///     .name("my::service")
///     .version("1.2.3")
///     .build();
///
/// logger.info(&Context::new(), "started", &args!["port", 8080]);
/// assert_eq!(provider.record_count(), 1);
/// ```
#[derive(Default)]
pub struct LoggerOptions {
    provider: Option<Arc<dyn LoggerProvider>>,
    name: Option<String>,
    version: Option<String>,
    attributes: Vec<KeyValue>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend provider to request the logger handle from.
    ///
    /// When unset, the process-wide default provider is used.
    #[must_use = "builder methods return a new value"]
    pub fn provider(mut self, provider: Arc<dyn LoggerProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Logger namespace, typically the instrumented crate or module path.
    ///
    /// When unset, the name is derived from the construction call site.
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Free-form version string
    #[must_use = "builder methods return a new value"]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Fixed attributes describing the logger's identity
    #[must_use = "builder methods return a new value"]
    pub fn attributes(mut self, attributes: Vec<KeyValue>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Resolve the provider and name, request a backend handle, and wrap it.
    pub fn build(self) -> Logger {
        let provider = self.provider.unwrap_or_else(default_provider);
        let name = self.name.unwrap_or_else(caller::calling_namespace);

        let backend = provider.logger(InstrumentationScope {
            name,
            version: self.version,
            attributes: self.attributes,
        });

        Logger {
            backend,
            attrs: Arc::from(Vec::new()),
        }
    }
}

/// Structured-logging frontend over a backend logger handle.
///
/// A `Logger` is an immutable value: its identity (backend handle) is fixed
/// at construction, and attribute binding via [`Logger::with`] or
/// [`Logger::with_attr`] produces a new `Logger` rather than mutating the
/// receiver. Cloning and cross-thread sharing are cheap; the backend handle
/// is shared, never exclusively owned.
///
/// Two method families cover each operation:
/// - argument-based (`info`, `warn`, `event`, `with`, ...) taking alternating
///   key/value [`Arg`] sequences, conveniently built with [`crate::args!`];
/// - attribute-based (`info_attr`, `event_attr`, `with_attr`, ...) taking
///   pre-typed [`KeyValue`] attributes — the lower-overhead path when the
///   call site already has typed values.
#[derive(Clone)]
pub struct Logger {
    backend: Arc<dyn BackendLogger>,
    attrs: Arc<[KeyValue]>,
}

impl Logger {
    /// Create a logger with all-default options: the process-wide default
    /// provider and a caller-derived name.
    #[must_use]
    pub fn new() -> Self {
        LoggerOptions::new().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    ///
    /// let logger = Logger::builder().name("my::module").build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerOptions {
        LoggerOptions::new()
    }

    /// Attributes bound to this logger, oldest first
    pub fn bound_attributes(&self) -> &[KeyValue] {
        &self.attrs
    }

    // ------------------------------------------------------------------
    // Message logging
    // ------------------------------------------------------------------

    /// Log a message at the given severity with alternating key/value
    /// arguments.
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    ///
    /// let logger = Logger::new();
    /// logger.log(&Context::new(), Severity::Info2, "cache warmed", &args!["entries", 1024]);
    /// ```
    pub fn log(&self, cx: &Context, severity: Severity, msg: impl Into<String>, args: &[Arg]) {
        self.emit(cx, Record::message(severity, msg), encode_args(args));
    }

    #[inline]
    pub fn trace(&self, cx: &Context, msg: impl Into<String>, args: &[Arg]) {
        self.log(cx, Severity::Trace, msg, args);
    }

    #[inline]
    pub fn debug(&self, cx: &Context, msg: impl Into<String>, args: &[Arg]) {
        self.log(cx, Severity::Debug, msg, args);
    }

    #[inline]
    pub fn info(&self, cx: &Context, msg: impl Into<String>, args: &[Arg]) {
        self.log(cx, Severity::Info, msg, args);
    }

    #[inline]
    pub fn warn(&self, cx: &Context, msg: impl Into<String>, args: &[Arg]) {
        self.log(cx, Severity::Warn, msg, args);
    }

    #[inline]
    pub fn error(&self, cx: &Context, msg: impl Into<String>, args: &[Arg]) {
        self.log(cx, Severity::Error, msg, args);
    }

    /// Log a message at the given severity with pre-typed attributes
    pub fn log_attr(
        &self,
        cx: &Context,
        severity: Severity,
        msg: impl Into<String>,
        attrs: &[KeyValue],
    ) {
        self.emit(cx, Record::message(severity, msg), attrs.to_vec());
    }

    #[inline]
    pub fn trace_attr(&self, cx: &Context, msg: impl Into<String>, attrs: &[KeyValue]) {
        self.log_attr(cx, Severity::Trace, msg, attrs);
    }

    #[inline]
    pub fn debug_attr(&self, cx: &Context, msg: impl Into<String>, attrs: &[KeyValue]) {
        self.log_attr(cx, Severity::Debug, msg, attrs);
    }

    #[inline]
    pub fn info_attr(&self, cx: &Context, msg: impl Into<String>, attrs: &[KeyValue]) {
        self.log_attr(cx, Severity::Info, msg, attrs);
    }

    #[inline]
    pub fn warn_attr(&self, cx: &Context, msg: impl Into<String>, attrs: &[KeyValue]) {
        self.log_attr(cx, Severity::Warn, msg, attrs);
    }

    #[inline]
    pub fn error_attr(&self, cx: &Context, msg: impl Into<String>, attrs: &[KeyValue]) {
        self.log_attr(cx, Severity::Error, msg, attrs);
    }

    // ------------------------------------------------------------------
    // Event logging
    // ------------------------------------------------------------------

    /// Log a semantic event at the given severity with alternating key/value
    /// arguments.
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    ///
    /// let logger = Logger::new();
    /// logger.log_event(&Context::new(), Severity::Warn, "rate.limit.exceeded",
    ///     &args!["client_ip", "192.168.1.100"]);
    /// ```
    pub fn log_event(
        &self,
        cx: &Context,
        severity: Severity,
        name: impl Into<String>,
        args: &[Arg],
    ) {
        self.emit(cx, Record::event(severity, name), encode_args(args));
    }

    /// Log a semantic event at Info severity.
    ///
    /// Compatibility form predating the leveled event methods; equivalent to
    /// [`Logger::info_event`].
    pub fn event(&self, cx: &Context, name: impl Into<String>, args: &[Arg]) {
        self.log_event(cx, Severity::Info, name, args);
    }

    #[inline]
    pub fn trace_event(&self, cx: &Context, name: impl Into<String>, args: &[Arg]) {
        self.log_event(cx, Severity::Trace, name, args);
    }

    #[inline]
    pub fn debug_event(&self, cx: &Context, name: impl Into<String>, args: &[Arg]) {
        self.log_event(cx, Severity::Debug, name, args);
    }

    #[inline]
    pub fn info_event(&self, cx: &Context, name: impl Into<String>, args: &[Arg]) {
        self.log_event(cx, Severity::Info, name, args);
    }

    #[inline]
    pub fn warn_event(&self, cx: &Context, name: impl Into<String>, args: &[Arg]) {
        self.log_event(cx, Severity::Warn, name, args);
    }

    #[inline]
    pub fn error_event(&self, cx: &Context, name: impl Into<String>, args: &[Arg]) {
        self.log_event(cx, Severity::Error, name, args);
    }

    /// Log a semantic event at the given severity with pre-typed attributes
    pub fn log_event_attr(
        &self,
        cx: &Context,
        severity: Severity,
        name: impl Into<String>,
        attrs: &[KeyValue],
    ) {
        self.emit(cx, Record::event(severity, name), attrs.to_vec());
    }

    /// Log a semantic event at Info severity with pre-typed attributes.
    ///
    /// Compatibility form; equivalent to [`Logger::info_event_attr`].
    pub fn event_attr(&self, cx: &Context, name: impl Into<String>, attrs: &[KeyValue]) {
        self.log_event_attr(cx, Severity::Info, name, attrs);
    }

    #[inline]
    pub fn trace_event_attr(&self, cx: &Context, name: impl Into<String>, attrs: &[KeyValue]) {
        self.log_event_attr(cx, Severity::Trace, name, attrs);
    }

    #[inline]
    pub fn debug_event_attr(&self, cx: &Context, name: impl Into<String>, attrs: &[KeyValue]) {
        self.log_event_attr(cx, Severity::Debug, name, attrs);
    }

    #[inline]
    pub fn info_event_attr(&self, cx: &Context, name: impl Into<String>, attrs: &[KeyValue]) {
        self.log_event_attr(cx, Severity::Info, name, attrs);
    }

    #[inline]
    pub fn warn_event_attr(&self, cx: &Context, name: impl Into<String>, attrs: &[KeyValue]) {
        self.log_event_attr(cx, Severity::Warn, name, attrs);
    }

    #[inline]
    pub fn error_event_attr(&self, cx: &Context, name: impl Into<String>, attrs: &[KeyValue]) {
        self.log_event_attr(cx, Severity::Error, name, attrs);
    }

    // ------------------------------------------------------------------
    // Enabled checks
    // ------------------------------------------------------------------

    /// Report whether a record at `severity` would be processed.
    ///
    /// Cheap and side-effect-free; call it before constructing expensive
    /// arguments.
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    ///
    /// let logger = Logger::new();
    /// let cx = Context::new();
    /// if logger.debug_enabled(&cx) {
    ///     let dump = "expensive state dump";
    ///     logger.debug(&cx, "state", &args!["dump", dump]);
    /// }
    /// ```
    pub fn enabled(&self, cx: &Context, severity: Severity) -> bool {
        self.backend.enabled(cx, &EnabledParams::severity(severity))
    }

    #[inline]
    pub fn trace_enabled(&self, cx: &Context) -> bool {
        self.enabled(cx, Severity::Trace)
    }

    #[inline]
    pub fn debug_enabled(&self, cx: &Context) -> bool {
        self.enabled(cx, Severity::Debug)
    }

    #[inline]
    pub fn info_enabled(&self, cx: &Context) -> bool {
        self.enabled(cx, Severity::Info)
    }

    #[inline]
    pub fn warn_enabled(&self, cx: &Context) -> bool {
        self.enabled(cx, Severity::Warn)
    }

    #[inline]
    pub fn error_enabled(&self, cx: &Context) -> bool {
        self.enabled(cx, Severity::Error)
    }

    /// Report whether an event with the given severity and name would be
    /// processed.
    pub fn event_enabled(&self, cx: &Context, severity: Severity, name: impl Into<String>) -> bool {
        self.backend.enabled(cx, &EnabledParams::event(severity, name))
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    /// Return a new logger with the encoded arguments appended to the
    /// pre-bound attribute list. The receiver is unmodified.
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    ///
    /// let base = Logger::new();
    /// let service = base.with(&args!["service", "auth", "version", "1.0"]);
    /// service.info(&Context::new(), "user created", &args!["user_id", 12345]);
    /// ```
    #[must_use]
    pub fn with(&self, args: &[Arg]) -> Logger {
        self.compose(encode_args(args))
    }

    /// Return a new logger with the given pre-typed attributes appended to
    /// the pre-bound attribute list. The receiver is unmodified.
    ///
    /// Prefer this over [`Logger::with`] when typed values are already at
    /// hand; it skips argument encoding.
    #[must_use]
    pub fn with_attr(&self, attrs: &[KeyValue]) -> Logger {
        self.compose(attrs.to_vec())
    }

    fn compose(&self, new_attrs: Vec<KeyValue>) -> Logger {
        let mut combined = Vec::with_capacity(self.attrs.len() + new_attrs.len());
        combined.extend(self.attrs.iter().cloned());
        combined.extend(new_attrs);

        Logger {
            backend: Arc::clone(&self.backend),
            attrs: Arc::from(combined),
        }
    }

    /// Assemble the final record (pre-bound attributes first, then call
    /// attributes) and hand it to the backend.
    fn emit(&self, cx: &Context, mut record: Record, call_attrs: Vec<KeyValue>) {
        record.add_attributes(self.attrs.iter().cloned());
        record.add_attributes(call_attrs);
        self.backend.emit(cx, record);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

//! Named logger facade implementation

use super::{
    arg::LogArg,
    formatter::MessageFormatter,
    marker::Marker,
    policy::LevelPolicy,
    record::LogRecord,
    severity::Severity,
    sink::Sink,
};
use std::error::Error;
use std::sync::Arc;

/// The per-name logging facade.
///
/// Adapters own no mutable state: just an immutable name plus shared
/// handles to the policy and sink, so instances are freely shareable
/// across threads. One instance exists per name; the registry enforces
/// that.
///
/// Every entry point degrades gracefully on malformed input (unexpanded
/// placeholders are emitted verbatim) and never interrupts the caller's
/// control flow with an error of its own. Only a panicking sink
/// propagates.
pub struct LoggerAdapter {
    name: String,
    policy: Arc<LevelPolicy>,
    sink: Arc<dyn Sink>,
}

impl LoggerAdapter {
    /// Only the registry constructs adapters; callers go through
    /// `LoggerRegistry::get` so identity-by-name holds.
    pub(crate) fn new(
        name: impl Into<String>,
        policy: Arc<LevelPolicy>,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            name: name.into(),
            policy,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exposes the enablement check so callers can guard expensive
    /// message construction themselves.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.policy.is_enabled(severity)
    }

    /// Emit `message` verbatim at `severity`.
    pub fn log(&self, severity: Severity, message: &str) {
        if self.is_enabled(severity) {
            self.emit(LogRecord::new(severity, &self.name, message));
        }
    }

    /// Render `template` against `args` and emit the result.
    ///
    /// The enablement check runs before formatting, so a disabled level
    /// never pays for substitution. A trailing error-kind argument with
    /// no placeholder of its own becomes the record's throwable.
    pub fn log_fmt(&self, severity: Severity, template: &str, args: Vec<LogArg>) {
        if !self.is_enabled(severity) {
            return;
        }
        let formatted = MessageFormatter::format(template, args);
        let mut record = LogRecord::new(severity, &self.name, formatted.message);
        if let Some(throwable) = formatted.throwable {
            record = record.with_throwable(throwable);
        }
        self.emit(record);
    }

    /// Emit `message` with an explicit throwable, bypassing formatting.
    pub fn log_err(
        &self,
        severity: Severity,
        message: &str,
        error: impl Error + Send + Sync + 'static,
    ) {
        if self.is_enabled(severity) {
            self.emit(
                LogRecord::new(severity, &self.name, message).with_throwable(Arc::new(error)),
            );
        }
    }

    /// Marker-taking variant of [`log`](Self::log). The marker is
    /// accepted and discarded; this facade has no marker semantics.
    pub fn log_marked(&self, _marker: &Marker, severity: Severity, message: &str) {
        self.log(severity, message);
    }

    /// Marker-taking variant of [`log_fmt`](Self::log_fmt).
    pub fn log_fmt_marked(
        &self,
        _marker: &Marker,
        severity: Severity,
        template: &str,
        args: Vec<LogArg>,
    ) {
        self.log_fmt(severity, template, args);
    }

    /// Marker-taking variant of [`log_err`](Self::log_err).
    pub fn log_err_marked(
        &self,
        _marker: &Marker,
        severity: Severity,
        message: &str,
        error: impl Error + Send + Sync + 'static,
    ) {
        self.log_err(severity, message, error);
    }

    fn emit(&self, record: LogRecord) {
        self.sink.emit(&record);
    }

    // Per-severity convenience wrappers.

    #[inline]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Severity::Trace)
    }

    #[inline]
    pub fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }

    #[inline]
    pub fn trace_fmt(&self, template: &str, args: Vec<LogArg>) {
        self.log_fmt(Severity::Trace, template, args);
    }

    #[inline]
    pub fn trace_err(&self, message: &str, error: impl Error + Send + Sync + 'static) {
        self.log_err(Severity::Trace, message, error);
    }

    #[inline]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Severity::Debug)
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn debug_fmt(&self, template: &str, args: Vec<LogArg>) {
        self.log_fmt(Severity::Debug, template, args);
    }

    #[inline]
    pub fn debug_err(&self, message: &str, error: impl Error + Send + Sync + 'static) {
        self.log_err(Severity::Debug, message, error);
    }

    #[inline]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Severity::Info)
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn info_fmt(&self, template: &str, args: Vec<LogArg>) {
        self.log_fmt(Severity::Info, template, args);
    }

    #[inline]
    pub fn info_err(&self, message: &str, error: impl Error + Send + Sync + 'static) {
        self.log_err(Severity::Info, message, error);
    }

    #[inline]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Severity::Warn)
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    #[inline]
    pub fn warn_fmt(&self, template: &str, args: Vec<LogArg>) {
        self.log_fmt(Severity::Warn, template, args);
    }

    #[inline]
    pub fn warn_err(&self, message: &str, error: impl Error + Send + Sync + 'static) {
        self.log_err(Severity::Warn, message, error);
    }

    #[inline]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Severity::Error)
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn error_fmt(&self, template: &str, args: Vec<LogArg>) {
        self.log_fmt(Severity::Error, template, args);
    }

    #[inline]
    pub fn error_err(&self, message: &str, error: impl Error + Send + Sync + 'static) {
        self.log_err(Severity::Error, message, error);
    }
}

//! Emission record handed to sinks

use crate::core::arg::Throwable;
use crate::core::severity::Severity;

/// One enabled log call, rendered and ready for emission.
///
/// Records are built per call and consumed by the sink immediately; the
/// core never queues or retains them.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    /// Routing key: the name of the adapter that produced the record.
    pub tag: String,
    pub message: String,
    pub throwable: Option<Throwable>,
}

impl LogRecord {
    pub fn new(severity: Severity, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            tag: tag.into(),
            message: message.into(),
            throwable: None,
        }
    }

    pub fn with_throwable(mut self, throwable: Throwable) -> Self {
        self.throwable = Some(throwable);
        self
    }

    /// Sink priority integer for this record's severity.
    pub fn priority(&self) -> i32 {
        self.severity.priority()
    }
}

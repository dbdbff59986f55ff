//! Sink trait for log emission destinations

use super::record::LogRecord;

/// The injected emission backend.
///
/// The facade treats `emit` as infallible; a sink that panics propagates
/// to the logging caller unmodified. Level filtering beyond readiness is
/// the sink's own business.
pub trait Sink: Send + Sync {
    /// Whether the sink is currently willing to accept records. The
    /// enablement check gates formatting on this, so an unready sink
    /// costs callers nothing.
    fn ready(&self) -> bool;

    fn emit(&self, record: &LogRecord);
}

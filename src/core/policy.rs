//! Enablement policy: decides whether a severity proceeds to formatting

use super::severity::Severity;
use super::sink::Sink;
use std::sync::Arc;

/// Maps severities to a go/no-go emission decision.
///
/// The default policy does not filter by severity at all: every level is
/// eligible whenever the sink reports ready, and dropping unwanted
/// levels is left to the sink. Duplicating the sink's filtering here
/// would let the two disagree.
pub struct LevelPolicy {
    sink: Arc<dyn Sink>,
    min_severity: Option<Severity>,
}

impl LevelPolicy {
    /// Reference behavior: enabled for every severity while the sink is
    /// ready.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            min_severity: None,
        }
    }

    /// Opt-in extension: additionally require `severity >= floor`.
    pub fn with_min_severity(sink: Arc<dyn Sink>, floor: Severity) -> Self {
        Self {
            sink,
            min_severity: Some(floor),
        }
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        if !self.sink.ready() {
            return false;
        }
        match self.min_severity {
            Some(floor) => severity >= floor,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::LogRecord;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct ToggleSink {
        ready: AtomicBool,
    }

    impl Sink for ToggleSink {
        fn ready(&self) -> bool {
            self.ready.load(Ordering::Relaxed)
        }

        fn emit(&self, _record: &LogRecord) {}
    }

    fn sink(ready: bool) -> Arc<ToggleSink> {
        Arc::new(ToggleSink {
            ready: AtomicBool::new(ready),
        })
    }

    #[test]
    fn test_default_policy_follows_sink_readiness() {
        let policy = LevelPolicy::new(sink(true));
        for severity in Severity::ALL {
            assert!(policy.is_enabled(severity));
        }

        let policy = LevelPolicy::new(sink(false));
        for severity in Severity::ALL {
            assert!(!policy.is_enabled(severity));
        }
    }

    #[test]
    fn test_min_severity_floor() {
        let policy = LevelPolicy::with_min_severity(sink(true), Severity::Warn);
        assert!(!policy.is_enabled(Severity::Trace));
        assert!(!policy.is_enabled(Severity::Info));
        assert!(policy.is_enabled(Severity::Warn));
        assert!(policy.is_enabled(Severity::Error));
    }

    #[test]
    fn test_floor_does_not_override_unready_sink() {
        let policy = LevelPolicy::with_min_severity(sink(false), Severity::Trace);
        assert!(!policy.is_enabled(Severity::Error));
    }
}

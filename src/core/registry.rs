//! Process-wide cache of named logger adapters

use super::{adapter::LoggerAdapter, policy::LevelPolicy, sink::Sink};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Absent logger names normalize to this sentinel instead of erroring.
/// Historical compatibility behavior; do not change.
const ANONYMOUS_TAG: &str = "null";

/// Name → adapter cache with at-most-one-instance-per-name semantics.
///
/// The map only grows: the set of distinct logger names is bounded by
/// the call sites in a compiled program, so eviction buys nothing.
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<LoggerAdapter>>>,
    policy: Arc<LevelPolicy>,
    sink: Arc<dyn Sink>,
}

impl LoggerRegistry {
    pub fn new(policy: Arc<LevelPolicy>, sink: Arc<dyn Sink>) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            policy,
            sink,
        }
    }

    /// Return the adapter for `name`, creating it on first request.
    ///
    /// Identical names always yield the same instance, including under
    /// concurrent first requests: the read lock covers the common hit
    /// path, and the write-locked `or_insert_with` makes competing
    /// creators converge on a single winner.
    pub fn get(&self, name: Option<&str>) -> Arc<LoggerAdapter> {
        let tag = name.unwrap_or(ANONYMOUS_TAG);

        if let Some(logger) = self.loggers.read().get(tag) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        Arc::clone(loggers.entry(tag.to_string()).or_insert_with(|| {
            Arc::new(LoggerAdapter::new(
                tag,
                Arc::clone(&self.policy),
                Arc::clone(&self.sink),
            ))
        }))
    }

    /// Number of distinct adapters created so far.
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

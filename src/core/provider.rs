//! Bootstrap wiring for the facade
//!
//! A provider owns one registry bound to one policy and sink. Tests
//! construct isolated providers around a capture sink; applications may
//! additionally `install()` one provider process-wide and reach it by
//! name-based lookup.

use super::{
    adapter::LoggerAdapter,
    error::{FacadeError, Result},
    policy::LevelPolicy,
    registry::LoggerRegistry,
    sink::Sink,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// API shape version callers can assert compatibility against.
pub const REQUESTED_API_VERSION: &str = "2.0.99";

static GLOBAL_PROVIDER: OnceCell<ServiceProvider> = OnceCell::new();

pub struct ServiceProvider {
    registry: Arc<LoggerRegistry>,
}

impl ServiceProvider {
    /// Wire a registry and default policy to `sink`.
    pub fn initialize(sink: Arc<dyn Sink>) -> Self {
        let policy = Arc::new(LevelPolicy::new(Arc::clone(&sink)));
        Self::with_policy(sink, policy)
    }

    /// Wire with a caller-supplied policy (e.g. a severity floor).
    pub fn with_policy(sink: Arc<dyn Sink>, policy: Arc<LevelPolicy>) -> Self {
        Self {
            registry: Arc::new(LoggerRegistry::new(policy, sink)),
        }
    }

    pub fn registry(&self) -> &Arc<LoggerRegistry> {
        &self.registry
    }

    /// Name-based logger lookup through this provider's registry.
    pub fn logger(&self, name: Option<&str>) -> Arc<LoggerAdapter> {
        self.registry.get(name)
    }

    pub fn api_version(&self) -> &'static str {
        REQUESTED_API_VERSION
    }

    /// Publish this provider as the process-wide singleton. At most one
    /// install succeeds for the process lifetime.
    pub fn install(self) -> Result<()> {
        GLOBAL_PROVIDER
            .set(self)
            .map_err(|_| FacadeError::ProviderAlreadyInitialized)
    }

    pub fn global() -> Option<&'static ServiceProvider> {
        GLOBAL_PROVIDER.get()
    }
}

/// Look up a logger through the installed process-wide provider.
pub fn logger(name: Option<&str>) -> Result<Arc<LoggerAdapter>> {
    ServiceProvider::global()
        .map(|provider| provider.logger(name))
        .ok_or(FacadeError::ProviderNotInitialized)
}

//! Core facade types and traits

pub mod adapter;
pub mod arg;
pub mod error;
pub mod formatter;
pub mod marker;
pub mod policy;
pub mod provider;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;

pub use adapter::LoggerAdapter;
pub use arg::{LogArg, Throwable};
pub use error::{FacadeError, Result};
pub use formatter::{FormattedMessage, MessageFormatter};
pub use marker::Marker;
pub use policy::LevelPolicy;
pub use provider::{ServiceProvider, REQUESTED_API_VERSION};
pub use record::LogRecord;
pub use registry::LoggerRegistry;
pub use severity::Severity;
pub use sink::Sink;

//! # Rust Logging Facade
//!
//! A pluggable logging facade: ordered severities, parameterized calls
//! with lazy message formatting, a concurrency-safe cache of named
//! logger adapters, and emission delegated to an injectable sink.
//!
//! ## Features
//!
//! - **Lazy Formatting**: enablement is checked before any message
//!   construction, so disabled levels cost next to nothing
//! - **Identity by Name**: one adapter per name, process-wide, under
//!   concurrent access
//! - **Pluggable Sinks**: console, test capture, or anything that
//!   implements the `Sink` trait
//! - **Thread Safe**: adapters are immutable and freely shareable

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FacadeError, FormattedMessage, LevelPolicy, LogArg, LogRecord, LoggerAdapter,
        LoggerRegistry, Marker, MessageFormatter, Result, ServiceProvider, Severity, Sink,
        Throwable, REQUESTED_API_VERSION,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::CaptureSink;
}

pub use crate::core::{
    FacadeError, FormattedMessage, LevelPolicy, LogArg, LogRecord, LoggerAdapter, LoggerRegistry,
    Marker, MessageFormatter, Result, ServiceProvider, Severity, Sink, Throwable,
    REQUESTED_API_VERSION,
};
#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::sinks::CaptureSink;

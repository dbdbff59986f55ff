//! Bundled sink implementations

pub mod capture;
#[cfg(feature = "console")]
pub mod console;

pub use capture::CaptureSink;
#[cfg(feature = "console")]
pub use console::ConsoleSink;

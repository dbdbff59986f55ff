//! Logging macros for ergonomic parameterized calls.
//!
//! Each macro checks enablement before capturing any arguments, so a
//! disabled level pays neither argument rendering nor the argument
//! vector allocation.
//!
//! # Examples
//!
//! ```
//! use rust_logging_facade::prelude::*;
//! use rust_logging_facade::info;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let provider = ServiceProvider::initialize(sink);
//! let logger = provider.logger(Some("server"));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With positional arguments
//! let port = 8080;
//! info!(logger, "Listening on port {}", port);
//! ```

/// Log a templated message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # use std::sync::Arc;
/// # let provider = ServiceProvider::initialize(Arc::new(CaptureSink::new()));
/// # let logger = provider.logger(Some("demo"));
/// use rust_logging_facade::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        if $logger.is_enabled($severity) {
            $logger.log_fmt(
                $severity,
                $template,
                vec![$($crate::core::LogArg::value(&$arg)),*],
            );
        }
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # use std::sync::Arc;
/// # let provider = ServiceProvider::initialize(Arc::new(CaptureSink::new()));
/// # let logger = provider.logger(Some("demo"));
/// use rust_logging_facade::trace;
/// trace!(logger, "Entering calculate()");
/// trace!(logger, "Value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # use std::sync::Arc;
/// # let provider = ServiceProvider::initialize(Arc::new(CaptureSink::new()));
/// # let logger = provider.logger(Some("demo"));
/// use rust_logging_facade::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # use std::sync::Arc;
/// # let provider = ServiceProvider::initialize(Arc::new(CaptureSink::new()));
/// # let logger = provider.logger(Some("demo"));
/// use rust_logging_facade::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Info, $($arg)+)
    };
}

/// Log a warn-level message.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # use std::sync::Arc;
/// # let provider = ServiceProvider::initialize(Arc::new(CaptureSink::new()));
/// # let logger = provider.logger(Some("demo"));
/// use rust_logging_facade::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # use std::sync::Arc;
/// # let provider = ServiceProvider::initialize(Arc::new(CaptureSink::new()));
/// # let logger = provider.logger(Some("demo"));
/// use rust_logging_facade::error;
/// error!(logger, "Code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ServiceProvider, Severity};
    use crate::sinks::CaptureSink;
    use std::sync::Arc;

    #[test]
    fn test_log_macro() {
        let sink = Arc::new(CaptureSink::new());
        let provider = ServiceProvider::initialize(sink.clone());
        let logger = provider.logger(Some("macros"));

        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted: {}", 42);

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].message, "Formatted: 42");
    }

    #[test]
    fn test_severity_macros() {
        let sink = Arc::new(CaptureSink::new());
        let provider = ServiceProvider::initialize(sink.clone());
        let logger = provider.logger(Some("macros"));

        trace!(logger, "t {}", 1);
        debug!(logger, "d {}", 2);
        info!(logger, "i {}", 3);
        warn!(logger, "w {}", 4);
        error!(logger, "e {}", 5);

        let records = sink.records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].severity, Severity::Trace);
        assert_eq!(records[4].severity, Severity::Error);
        assert_eq!(records[4].message, "e 5");
    }

    #[test]
    fn test_disabled_macro_skips_argument_capture() {
        use std::fmt;
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingDisplay<'a>(&'a AtomicUsize);

        impl fmt::Display for CountingDisplay<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fetch_add(1, Ordering::Relaxed);
                write!(f, "rendered")
            }
        }

        let renders = AtomicUsize::new(0);
        let sink = Arc::new(CaptureSink::unready());
        let provider = ServiceProvider::initialize(sink.clone());
        let logger = provider.logger(Some("macros"));

        info!(logger, "value: {}", CountingDisplay(&renders));

        assert_eq!(renders.load(Ordering::Relaxed), 0);
        assert_eq!(sink.emit_count(), 0);
    }
}

//! Tagged positional arguments for parameterized logging calls
//!
//! Each argument is classified at the call boundary as either a plain
//! value or an error-kind value. The formatter uses the tag to decide
//! whether a trailing argument is a throwable, so no runtime type
//! inspection is needed downstream.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an error object accompanying a log record.
pub type Throwable = Arc<dyn Error + Send + Sync + 'static>;

#[derive(Clone)]
pub enum LogArg {
    Value(String),
    Error(Throwable),
}

impl LogArg {
    /// Capture a plain value via its `Display` rendering.
    pub fn value(v: impl fmt::Display) -> Self {
        LogArg::Value(v.to_string())
    }

    /// Capture an error-kind value.
    pub fn error(e: impl Error + Send + Sync + 'static) -> Self {
        LogArg::Error(Arc::new(e))
    }

    /// Wrap an already-shared throwable.
    pub fn throwable(e: Throwable) -> Self {
        LogArg::Error(e)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogArg::Error(_))
    }

    /// Text used when the argument is substituted into a template.
    pub(crate) fn render_into(&self, out: &mut String) {
        use std::fmt::Write;
        match self {
            LogArg::Value(v) => out.push_str(v),
            // Errors that end up inlined (not extracted as the trailing
            // throwable) substitute via their Display form.
            LogArg::Error(e) => {
                let _ = write!(out, "{}", e);
            }
        }
    }
}

impl fmt::Debug for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            LogArg::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
        }
    }
}

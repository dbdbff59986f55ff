//! Message formatting with `{}` placeholder substitution
//!
//! Mirrors the classic facade formatting contract: placeholders are
//! filled left to right, unmatched placeholders stay verbatim, and a
//! trailing error-kind argument that has no placeholder of its own is
//! extracted as the record's throwable instead of being inlined.

use crate::core::arg::{LogArg, Throwable};

const PLACEHOLDER: &str = "{}";

/// Result of rendering a template against its arguments.
#[derive(Debug, Clone)]
pub struct FormattedMessage {
    pub message: String,
    pub throwable: Option<Throwable>,
}

pub struct MessageFormatter;

impl MessageFormatter {
    /// Render `template`, substituting `{}` placeholders from `args`.
    ///
    /// Tolerant by contract: placeholders beyond the argument count are
    /// left unexpanded, surplus arguments are ignored, and no input can
    /// make this fail. Callers are expected to have passed the
    /// enablement check before building `args`.
    pub fn format(template: &str, args: Vec<LogArg>) -> FormattedMessage {
        let placeholders = template.matches(PLACEHOLDER).count();
        let mut args = args;

        // Last-argument-is-throwable heuristic: exactly one more
        // argument than placeholders, and that argument is error-kind.
        let extract = args.len() == placeholders + 1
            && args.last().is_some_and(LogArg::is_error);
        let throwable = if extract {
            match args.pop() {
                Some(LogArg::Error(e)) => Some(e),
                _ => None,
            }
        } else {
            None
        };

        let mut message = String::with_capacity(template.len() + 16 * args.len());
        let mut rest = template;
        let mut values = args.into_iter();

        while let Some(pos) = rest.find(PLACEHOLDER) {
            match values.next() {
                Some(arg) => {
                    message.push_str(&rest[..pos]);
                    arg.render_into(&mut message);
                }
                // Out of arguments: keep the placeholder verbatim.
                None => message.push_str(&rest[..pos + PLACEHOLDER.len()]),
            }
            rest = &rest[pos + PLACEHOLDER.len()..];
        }
        message.push_str(rest);

        FormattedMessage { message, throwable }
    }
}

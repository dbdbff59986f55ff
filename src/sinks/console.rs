//! Console sink implementation

use crate::core::{LogRecord, Severity, Sink};
use chrono::Utc;
use colored::Colorize;

/// Writes records to the terminal. Always ready; `Error` records go to
/// stderr, everything else to stdout.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", record.severity.to_str())
                .color(record.severity.color_code())
                .to_string()
        } else {
            format!("{:5}", record.severity.to_str())
        };

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");

        let mut line = format!(
            "[{}] [{}] {} - {}",
            timestamp, level_str, record.tag, record.message
        );

        if let Some(ref throwable) = record.throwable {
            line.push_str(&format!("\n    caused by: {}", throwable));
        }

        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn ready(&self) -> bool {
        true
    }

    fn emit(&self, record: &LogRecord) {
        let line = self.format_line(record);
        match record.severity {
            Severity::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

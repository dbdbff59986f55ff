//! Marker arguments: accepted for call-site compatibility, discarded

use std::fmt;

/// Contextual tag some callers attach to log calls. This facade has no
/// marker-based filtering; marker-taking entry points accept one and
/// drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

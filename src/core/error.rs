//! Error types for the logging facade
//!
//! The logging path itself never returns errors; these cover severity
//! parsing and provider bootstrap misuse.

pub type Result<T> = std::result::Result<T, FacadeError>;

#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    /// Unrecognized severity name
    #[error("Invalid severity: '{value}'")]
    InvalidSeverity { value: String },

    /// A provider has already been installed process-wide
    #[error("Service provider already initialized")]
    ProviderAlreadyInitialized,

    /// No provider has been installed yet
    #[error("Service provider not initialized")]
    ProviderNotInitialized,
}

impl FacadeError {
    /// Create an invalid severity error
    pub fn invalid_severity(value: impl Into<String>) -> Self {
        FacadeError::InvalidSeverity {
            value: value.into(),
        }
    }
}

//! Error types for option normalization

/// Result type for option handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while normalizing raw options.
///
/// Every variant is a pure validation failure; normalization is
/// fail-fast and never produces a partial `Options` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required text field or selection is absent or blank
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The permission set resolved to empty
    #[error("At least one permission must be selected")]
    EmptyPermissions,

    /// A string did not parse as a known enum value
    #[error("Unrecognized {field}: '{value}'")]
    Unrecognized { field: &'static str, value: String },
}

impl Error {
    /// Create a `MissingField` error for the given field name
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an `Unrecognized` error for the given field and value
    pub fn unrecognized(field: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized {
            field,
            value: value.into(),
        }
    }
}

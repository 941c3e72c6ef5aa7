//! Error types for validating layout input

use thiserror::Error;

/// Errors raised while validating a page before layout.
///
/// Layout itself never fails; these guard the inputs handed to it.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Two annotations on one page share an identifier
    #[error("duplicate annotation identifier '{id}'")]
    DuplicateIdentifier { id: String },

    /// Empty identifier
    #[error("annotation #{index} has an empty identifier")]
    EmptyIdentifier { index: usize },

    /// A tuning value outside its usable range
    #[error("invalid setting '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Page dimensions that cannot hold anything
    #[error("invalid page size {width}x{height}: {reason}")]
    InvalidPage {
        width: f64,
        height: f64,
        reason: String,
    },
}

impl LayoutError {
    /// Create a duplicate identifier error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateIdentifier { id: id.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(width: f64, height: f64, reason: impl Into<String>) -> Self {
        Self::InvalidPage {
            width,
            height,
            reason: reason.into(),
        }
    }
}

//! Error types for the OmicsDI converter
//!
//! Every variant is fatal for a conversion run. Optional fields that are
//! absent are not errors and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for OmicsDI operations
pub type Result<T> = std::result::Result<T, OmicsError>;

/// Main error type for OmicsDI conversion
#[derive(Error, Debug)]
pub enum OmicsError {
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML: {0}")]
    Xml(String),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("Unknown source database: '{0}'")]
    UnknownDatabase(String),

    #[error("Unknown date type '{date_type}' in entry '{entry}'")]
    UnknownDateType { entry: String, date_type: String },

    #[error("Unknown cross-reference database '{dbname}' in entry '{entry}'")]
    UnknownCrossReference { entry: String, dbname: String },

    #[error("Invalid date '{value}' in entry '{entry}'")]
    InvalidDate { entry: String, value: String },

    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid mapping file: {0}")]
    Mappings(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl OmicsError {
    /// Create an I/O error bound to the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing attribute error
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}

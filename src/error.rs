//! Error types for the dxfwriter library

use std::io;
use thiserror::Error;

/// Main error type for dxfwriter operations
///
/// Errors only occur while a document is being configured or built.
/// Emitting and rendering a built document never fails, apart from the
/// I/O of the sink it is written to.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while writing the rendered text
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unrecognized insertion units code
    #[error("The {0} is not a valid Units.")]
    InvalidUnits(i16),

    /// Layer referenced by name does not exist
    #[error("The {0} layer doesn't exist.")]
    LayerNotFound(String),

    /// Block referenced by name does not exist
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// An entry with the same name already exists in a table
    #[error("Entry '{name}' already exists in table {table}")]
    DuplicateEntry { table: &'static str, name: String },

    /// Header variable maintained by the document itself
    #[error("Header variable {0} is managed by the document")]
    ManagedVariable(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxfwriter operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DxfError::InvalidUnits(99).to_string(),
            "The 99 is not a valid Units."
        );
        assert_eq!(
            DxfError::LayerNotFound("Walls".to_string()).to_string(),
            "The Walls layer doesn't exist."
        );
    }

    #[test]
    fn test_duplicate_entry_error() {
        let err = DxfError::DuplicateEntry {
            table: "LAYER",
            name: "0".to_string(),
        };
        assert!(err.to_string().contains("LAYER"));
        assert!(err.to_string().contains("'0'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}

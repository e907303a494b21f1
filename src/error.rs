//! Custom error types for shoestock
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for shoestock operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The inventory file does not exist yet
    #[error("The inventory file was not found: {0}")]
    FileNotFound(String),

    /// Numeric coercion failures (file fields or prompt input)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Selection over an empty inventory (re-stock / highest quantity)
    #[error("The inventory is empty")]
    EmptyInventory,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization errors (audit log)
    #[error("JSON error: {0}")]
    Json(String),
}

impl InventoryError {
    /// Create a "not found" error for shoes
    pub fn shoe_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Shoe",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is the missing-inventory-file condition
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for shoestock operations
pub type InventoryResult<T> = Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InventoryError::Parse("bad quantity".into());
        assert_eq!(err.to_string(), "Parse error: bad quantity");
    }

    #[test]
    fn test_not_found_error() {
        let err = InventoryError::shoe_not_found("SKU404");
        assert_eq!(err.to_string(), "Shoe not found: SKU404");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_inventory_display() {
        assert_eq!(
            InventoryError::EmptyInventory.to_string(),
            "The inventory is empty"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let inv_err: InventoryError = io_err.into();
        assert!(matches!(inv_err, InventoryError::Io(_)));
    }
}

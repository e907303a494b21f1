//! Path management for shoestock
//!
//! Resolves where the inventory file and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `SHOESTOCK_DATA_DIR` environment variable (if set)
//! 2. The current working directory (the inventory file lives next to
//!    wherever the program is launched)

use std::path::PathBuf;

use crate::error::{InventoryError, InventoryResult};

/// Manages all paths used by shoestock
#[derive(Debug, Clone)]
pub struct InventoryPaths {
    /// Base directory for all shoestock data
    base_dir: PathBuf,
}

impl InventoryPaths {
    /// Create a new InventoryPaths instance
    ///
    /// Path resolution:
    /// 1. `SHOESTOCK_DATA_DIR` env var (explicit override)
    /// 2. The current working directory
    pub fn new() -> Self {
        let base_dir = match std::env::var("SHOESTOCK_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => PathBuf::from("."),
        };

        Self { base_dir }
    }

    /// Create InventoryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the inventory file
    pub fn inventory_file(&self) -> PathBuf {
        self.base_dir.join("inventory.txt")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> InventoryResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            InventoryError::Storage(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

impl Default for InventoryPaths {
    fn default() -> Self {
        Self::new()
    }
}

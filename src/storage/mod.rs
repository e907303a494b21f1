//! Storage layer for shoestock
//!
//! Provides the line-oriented inventory file store and the audit log,
//! coordinated over the resolved data paths.

pub mod file_io;
pub mod shoes;

pub use shoes::{ShoeRepository, FILE_HEADER};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::InventoryPaths;
use crate::error::InventoryResult;
use crate::models::Shoe;

/// Main storage coordinator that provides access to the shoe repository
/// and the audit log
pub struct Storage {
    paths: InventoryPaths,
    pub shoes: ShoeRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: InventoryPaths) -> InventoryResult<Self> {
        // Ensure the data directory exists
        paths.ensure_directories()?;

        Ok(Self {
            shoes: ShoeRepository::new(paths.inventory_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &InventoryPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> InventoryResult<()> {
        self.shoes.load()
    }

    /// Record a capture in the audit log
    ///
    /// Audit writes are best-effort: the inventory mutation has already
    /// succeeded, so a logging failure is reported on stderr and swallowed.
    pub fn log_create(&self, shoe: &Shoe) {
        if let Err(e) = self.audit.log(&AuditEntry::create(shoe)) {
            eprintln!("warning: failed to write audit log: {}", e);
        }
    }

    /// Record a re-stock in the audit log (best-effort, see [`Storage::log_create`])
    pub fn log_update(&self, shoe: &Shoe) {
        if let Err(e) = self.audit.log(&AuditEntry::update(shoe)) {
            eprintln!("warning: failed to write audit log: {}", e);
        }
    }

    /// Access the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }
}

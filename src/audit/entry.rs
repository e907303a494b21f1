//! Audit entry data structures
//!
//! Defines the structure of audit log entries for inventory mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Shoe;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Shoe was captured into the inventory
    Create,
    /// Shoe quantity was changed by a re-stock
    Update,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the inventory with a snapshot of the record
/// after the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Code of the affected shoe
    pub code: String,

    /// Product name of the affected shoe
    pub product: String,

    /// JSON snapshot of the record after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Build an entry for a newly captured shoe
    pub fn create(shoe: &Shoe) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            code: shoe.code.clone(),
            product: shoe.product.clone(),
            after: serde_json::to_value(shoe).ok(),
        }
    }

    /// Build an entry for a re-stocked shoe
    pub fn update(shoe: &Shoe) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            code: shoe.code.clone(),
            product: shoe.product.clone(),
            after: serde_json::to_value(shoe).ok(),
        }
    }
}

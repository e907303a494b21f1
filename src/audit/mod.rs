//! Audit logging system for shoestock
//!
//! Records create and update operations on the inventory with an
//! after-snapshot of the affected record, in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single audit log entry with timestamp, operation,
//!   shoe identification, and the record snapshot.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

//! shoestock - Terminal-based shoe inventory management
//!
//! This library provides the core functionality for the shoestock
//! application: a single-user console tool for keeping a shoe store's
//! inventory in a flat delimited text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the inventory file and audit log
//! - `error`: Custom error types
//! - `models`: The shoe record type
//! - `storage`: Line-oriented text file storage layer
//! - `services`: Business logic layer (the six inventory operations)
//! - `display`: Terminal table and report formatting
//! - `audit`: Append-only audit log of inventory mutations
//! - `cli`: The interactive numbered menu
//!
//! # Example
//!
//! ```rust,ignore
//! use shoestock::config::InventoryPaths;
//! use shoestock::storage::Storage;
//!
//! let paths = InventoryPaths::new();
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::InventoryError;

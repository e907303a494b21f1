//! Core data models for shoestock
//!
//! This module contains the data structures that represent the inventory
//! domain. There is a single entity: the shoe line item.

pub mod shoe;

pub use shoe::Shoe;

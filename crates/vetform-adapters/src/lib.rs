//! Infrastructure adapters for Vetform.
//!
//! This crate implements the ports defined in
//! `vetform-core::application::ports`. It contains all file I/O; the core
//! stays pure.

pub mod catalog;
pub mod form_file;

// Re-export commonly used adapters
pub use catalog::{BuiltinCatalog, FileCatalog};

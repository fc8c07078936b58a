//! Storage adapters for Revdex.
//!
//! This crate implements the repository ports defined in
//! `revdex_core::application::ports`. Two adapters are provided:
//!
//! - [`MemoryStore`]: thread-safe in-process tables, gone at exit
//! - [`JsonStore`]: the same tables persisted to a JSON file
//!
//! Both honour the atomic-create contract: a pokemon row and its join rows
//! either all become visible or none do.

pub mod json;
pub mod memory;

mod seed;
mod tables;

// Re-export commonly used adapters
pub use json::JsonStore;
pub use memory::MemoryStore;

//! Storage implementations that do not need a database.
//!
//! `MemoryStore` backs both store traits with one shared relation, which
//! makes it a drop-in fake for tests and local runs.

pub mod memory;

pub use memory::MemoryStore;

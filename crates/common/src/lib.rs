//! Shared building blocks used by the server binary and its crates.

pub mod types;
pub mod utils;

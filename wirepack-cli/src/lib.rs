//! Library entry for wirepack-cli used by integration tests and embedding.

pub mod commands;
pub mod layout;

// Re-export commands for convenience
pub use commands::*;

pub use layout::{packet_size, parse_layout, Field};

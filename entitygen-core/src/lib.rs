//! Core utilities for the entitygen TypeScript declaration generator.
//!
//! This crate provides the identifier casing helpers and the file writing
//! primitives shared by the code model, the generators and the CLI.

mod file;
mod utils;

// File operations
pub use file::GeneratedFile;
// String utilities
pub use utils::{to_dash_words, to_lower_camel};

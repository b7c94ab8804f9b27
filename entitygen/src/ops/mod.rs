//! Core operations.
//!
//! This module contains the logic behind the entitygen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;

pub use generate::{GenerateOptions, generate, select_roots};
pub use list::list;

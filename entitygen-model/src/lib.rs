//! Code model for entitygen.
//!
//! A code model is a snapshot of the type declarations of a C# solution:
//! source files with their `using` imports and enclosing namespaces, and the
//! classes and enums each file declares. Generators only read it through the
//! [`CodeModel`] trait; [`Workspace`] is the in-memory implementation loaded
//! from a `model.toml` (or `model.json`) snapshot.
//!
//! This crate also owns the `entitygen.toml` configuration file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod code_model;
mod config;
mod error;
mod source;
mod types;
mod workspace;

pub use code_model::{CodeModel, FileScope};
pub use config::{Config, EnumValueCase, FileNaming, GenerateConfig, ModelConfig, UnresolvedMember};
pub use error::{Error, Result};
pub use source::{SourceFile, SourceFilter};
pub use types::{Access, DeclarationKind, Member, MemberKind, TypeDecl, TypeRef};
pub use workspace::Workspace;

//! TypeScript declaration generator for entitygen.
//!
//! Turns the classes and enums of a code model into TypeScript `export
//! interface` / `export enum` files, one file per declaration, following
//! every referenced declaration so the output directory is self-contained.
//!
//! # Usage
//!
//! ```ignore
//! use entitygen_codegen_typescript::Generator;
//! use entitygen_model::Workspace;
//!
//! let workspace = Workspace::from_file("model.toml")?;
//! let root = workspace.require_type("Shop.Dto.Order")?;
//!
//! let result = Generator::new(&workspace).generate(root, Path::new("ClientApp/models"))?;
//! for path in &result.written {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! # Generated Output
//!
//! For a class `Shop.Dto.Order` with a `Customer` property the generator
//! writes `order.ts`:
//!
//! ```text
//! import { customer } from './customer'
//!
//! export interface order {
//!     customer: customer;
//! }
//! ```
//!
//! and `customer.ts` next to it.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builder;
mod code_file;
mod dependency;
mod emitter;
mod error;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use code_file::CodeFile;
pub use dependency::{DependencyGraph, ResolvedDependency};
pub use emitter::{ClassEmitter, Emitter, EnumEmitter, Rendered, UnresolvedType};
pub use error::{Error, Result};
pub use generator::{GenerateResult, Generator, GeneratorOptions, RenderedFile};
pub use naming::TsNaming;
pub use type_mapper::{MemberContext, Resolved, TsType, TypeMapper, strip_typeof};

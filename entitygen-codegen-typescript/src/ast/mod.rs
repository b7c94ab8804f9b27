//! TypeScript AST builders for the declarations entitygen emits.
//!
//! These provide a small API for constructing TypeScript syntax,
//! which is then rendered via [`CodeBuilder`](crate::CodeBuilder).

mod enums;
mod imports;
mod interface;

pub use enums::Enum;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};

//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use list::{ListReport, ListedFile};
pub use output::{Report, TerminalOutput};

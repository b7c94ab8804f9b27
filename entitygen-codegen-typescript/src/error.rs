use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot generate '{full_name}': {kind} declarations are not supported")]
    #[diagnostic(
        code(entitygen::unsupported_kind),
        help("only classes and enums can be generated; remove the reference or change its type")
    )]
    UnsupportedDeclarationKind { full_name: String, kind: String },

    #[error("'{first}' and '{second}' would both be written to '{file_name}'")]
    #[diagnostic(
        code(entitygen::file_name_collision),
        help("declarations with the same simple name cannot be generated into one directory")
    )]
    FileNameCollision {
        file_name: String,
        first: String,
        second: String,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(entitygen::write_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }
}

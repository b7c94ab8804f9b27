use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for code model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(entitygen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}")]
    #[diagnostic(code(entitygen::parse_error))]
    Parse {
        what: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse {what}")]
    #[diagnostic(code(entitygen::parse_error))]
    Json {
        what: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("type '{full_name}' is declared more than once")]
    #[diagnostic(
        code(entitygen::duplicate_type),
        help("first declared in '{first_file}', again in '{second_file}'")
    )]
    DuplicateType {
        full_name: String,
        first_file: String,
        second_file: String,
    },

    #[error("unknown type '{full_name}'")]
    #[diagnostic(
        code(entitygen::unknown_type),
        help("pass the fully qualified name, e.g. 'MyApp.Dto.{full_name}'")
    )]
    UnknownType { full_name: String },

    #[error("no source file matches '{path}'")]
    #[diagnostic(
        code(entitygen::unknown_file),
        help("run 'entitygen list --all' to see the files of the code model")
    )]
    UnknownFile { path: String },

    #[error("'{path}' declares no class or enum")]
    #[diagnostic(code(entitygen::no_main_type))]
    NoMainType { path: String },
}

impl Error {
    /// Create a TOML parse error with source context
    pub fn parse(
        what: &'static str,
        source: toml::de::Error,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            what,
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a JSON parse error with source context
    pub fn json(
        what: &'static str,
        source: serde_json::Error,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Json {
            what,
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

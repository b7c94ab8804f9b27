//! `entitygen.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, SourceFilter};

/// Root of `entitygen.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Code model snapshot, relative to the working directory.
    pub path: Option<PathBuf>,
}

/// `[generate]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Destination directory.
    pub output: Option<PathBuf>,
    /// Extension of generated files, without the dot.
    pub extension: String,
    /// Spaces per indentation level; 0 indents with tabs.
    pub indent: u8,
    /// Offer only files ending in `dto_suffix` as roots.
    pub use_dto_suffix: bool,
    pub dto_suffix: String,
    pub source_extension: String,
    /// Attribute that pulls in the type of an `object` property.
    pub attribute: String,
    pub enum_values: EnumValueCase,
    pub unresolved: UnresolvedMember,
    pub file_naming: FileNaming,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: None,
            extension: "ts".to_string(),
            indent: 4,
            use_dto_suffix: true,
            dto_suffix: "DTO.cs".to_string(),
            source_extension: ".cs".to_string(),
            attribute: "DataEntityGenerator".to_string(),
            enum_values: EnumValueCase::default(),
            unresolved: UnresolvedMember::default(),
            file_naming: FileNaming::default(),
        }
    }
}

impl GenerateConfig {
    /// Source listing filter; `all` lists every source file.
    pub fn source_filter(&self, all: bool) -> SourceFilter {
        if self.use_dto_suffix && !all {
            SourceFilter::new(&self.dto_suffix)
        } else {
            SourceFilter::new(&self.source_extension)
        }
    }
}

/// How enum value names are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnumValueCase {
    #[default]
    Preserve,
    LowerCamel,
}

/// What happens to a property whose type cannot be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedMember {
    /// Keep the property without a type annotation.
    #[default]
    Omit,
    /// Annotate the property as `any`.
    Any,
    /// Leave the property out.
    Skip,
}

/// How generated file names are derived from type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileNaming {
    /// `OrderLine` -> `orderLine.ts`
    #[default]
    Camel,
    /// `OrderLine` -> `order-line.ts`
    Dashed,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "entitygen.toml")
    }
}

impl Config {
    /// Parse an `entitygen.toml` file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse("configuration", e, content, filename))
    }
}

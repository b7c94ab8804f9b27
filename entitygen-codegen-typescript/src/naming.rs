//! TypeScript naming conventions for generated declarations.

use entitygen_core::{to_dash_words, to_lower_camel};
use entitygen_model::{EnumValueCase, FileNaming, TypeDecl};

/// Names used in generated files.
///
/// Type and member names are the source names with a lower-cased first
/// character. File stems follow the configured [`FileNaming`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TsNaming {
    pub files: FileNaming,
    pub enum_values: EnumValueCase,
}

impl TsNaming {
    /// Name of the exported interface or enum.
    pub fn type_name(&self, decl: &TypeDecl) -> String {
        to_lower_camel(&decl.name)
    }

    /// File stem, also the module specifier used by importing siblings.
    pub fn file_stem(&self, decl: &TypeDecl) -> String {
        match self.files {
            FileNaming::Camel => to_lower_camel(&decl.name),
            FileNaming::Dashed => to_dash_words(&decl.name).to_lowercase(),
        }
    }

    /// Name of an interface property.
    pub fn member_name(&self, name: &str) -> String {
        to_lower_camel(name)
    }

    /// Name of an enum value.
    pub fn enum_value(&self, name: &str) -> String {
        match self.enum_values {
            EnumValueCase::Preserve => name.to_string(),
            EnumValueCase::LowerCamel => to_lower_camel(name),
        }
    }
}

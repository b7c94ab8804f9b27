//! Source files and the candidate file listing.

use serde::Deserialize;

use crate::{DeclarationKind, TypeDecl};

/// A source file of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceFile {
    /// Path relative to the solution root.
    pub path: String,
    /// `using` directives, in source order.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Enclosing namespaces, outermost first.
    #[serde(default)]
    pub namespaces: Vec<String>,
    /// Declarations, in source order.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            namespaces: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn import(mut self, namespace: impl Into<String>) -> Self {
        self.imports.push(namespace.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    pub fn declare(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.path)
    }

    /// The first class or enum declared in the file.
    pub fn main_type(&self) -> Option<&TypeDecl> {
        self.types
            .iter()
            .find(|t| matches!(t.kind, DeclarationKind::Class | DeclarationKind::Enum))
    }
}

/// Which files are offered as generation roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    suffix: String,
}

impl SourceFilter {
    /// Accept files whose name ends with `suffix` (e.g. `DTO.cs` or `.cs`).
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn matches(&self, file: &SourceFile) -> bool {
        file.file_name().ends_with(&self.suffix)
    }
}

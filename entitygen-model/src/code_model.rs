//! The read-only view generators have of a code model.

use crate::{TypeDecl, TypeRef};

/// Using imports and enclosing namespaces of one source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileScope<'a> {
    pub imports: &'a [String],
    pub namespaces: &'a [String],
}

impl<'a> FileScope<'a> {
    /// Scopes a short type name may live in: imports first, then namespaces.
    pub fn scopes(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.imports
            .iter()
            .chain(self.namespaces.iter())
            .map(String::as_str)
    }
}

/// Lookup operations the generators need from a code model.
///
/// Implement this trait to feed declarations from another source (an IDE
/// plugin, a compiler API, a test fixture).
pub trait CodeModel {
    /// Find a declaration by its fully qualified name.
    fn find_type(&self, full_name: &str) -> Option<&TypeDecl>;

    /// Reference to a declaration, usable where a member type is expected.
    fn type_ref(&self, decl: &TypeDecl) -> TypeRef {
        TypeRef::named(decl.full_name.clone())
    }

    /// Scope of the source file at `path`; empty when the file is unknown.
    fn file_scope(&self, path: &str) -> FileScope<'_>;
}

//! Declarations discovered while mapping member types.

use entitygen_model::TypeDecl;
use indexmap::IndexMap;

/// A declaration referenced by the one being rendered.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDependency<'a> {
    pub decl: &'a TypeDecl,
    /// Referenced by name in the rendered body, so the file must import it.
    /// False when it was only pulled in through an attribute and the member
    /// itself is typed `any`.
    pub needs_import: bool,
}

/// Dependencies keyed by fully qualified name, in discovery order.
///
/// Registering or merging an existing name replaces its entry
/// (last write wins) while keeping its original position.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph<'a> {
    entries: IndexMap<String, ResolvedDependency<'a>>,
}

impl<'a> DependencyGraph<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, decl: &'a TypeDecl, needs_import: bool) {
        self.entries.insert(
            decl.full_name.clone(),
            ResolvedDependency { decl, needs_import },
        );
    }

    /// Fold another graph into this one.
    pub fn merge(&mut self, other: DependencyGraph<'a>) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, full_name: &str) -> Option<&ResolvedDependency<'a>> {
        self.entries.get(full_name)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.entries.contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedDependency<'a>> {
        self.entries.values()
    }

    /// Dependencies the rendered file has to import.
    pub fn imports(&self) -> impl Iterator<Item = &'a TypeDecl> + '_ {
        self.entries
            .values()
            .filter(|dep| dep.needs_import)
            .map(|dep| dep.decl)
    }
}

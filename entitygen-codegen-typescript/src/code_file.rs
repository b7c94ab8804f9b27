//! CodeFile abstraction for structured TypeScript file generation.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

/// A TypeScript file: an import section followed by body declarations.
///
/// Imports are rendered first, in the order they were added, then a blank
/// line, then each body element separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::sibling("customer").named("customer"))
///     .add(Interface::new("order").field("customer", "customer"))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add pre-rendered body fragments.
    pub fn add_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.push(fragments);
        self
    }

    /// Render the file with 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::FOUR)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

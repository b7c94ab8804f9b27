//! TypeScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// A named import from a sibling module: `import { a, b } from './mod'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import from a file in the same directory (`./<stem>`).
    pub fn sibling(stem: &str) -> Self {
        Self::new(format!("./{stem}"))
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn names(&self) -> &[String] {
        &self.named
    }

    /// Build the import statement.
    pub fn build(&self) -> String {
        if self.named.is_empty() {
            format!("import '{}'", self.from)
        } else {
            format!("import {{ {} }} from '{}'", self.named.join(", "), self.from)
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_import() {
        let i = Import::sibling("customer").named("customer").build();
        assert_eq!(i, "import { customer } from './customer'");
    }

    #[test]
    fn test_named_imports() {
        let i = Import::new("./shared").named("money").named("address").build();
        assert_eq!(i, "import { money, address } from './shared'");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import './polyfill'");
    }
}

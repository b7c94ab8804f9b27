//! TypeScript interface builder.

use crate::builder::{CodeFragment, Renderable};

/// A property of an interface.
///
/// A field without a type is written without an annotation (`name;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    fn to_line(&self) -> String {
        match &self.ty {
            Some(ty) => format!("{}: {};", self.name, ty),
            None => format!("{};", self.name),
        }
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a typed field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            ))];
        }
        vec![CodeFragment::block(
            format!("export interface {} {{", self.name),
            self.fields
                .iter()
                .map(|f| CodeFragment::Line(f.to_line()))
                .collect(),
            "}",
        )]
    }
}

//! TypeScript enum builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for exported TypeScript enums without explicit values.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.values.is_empty() {
            return vec![CodeFragment::Line(format!("export enum {} {{}}", self.name))];
        }
        let last = self.values.len() - 1;
        let body = self
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if i == last {
                    CodeFragment::Line(value.clone())
                } else {
                    CodeFragment::Line(format!("{value},"))
                }
            })
            .collect();
        vec![CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            "}",
        )]
    }
}

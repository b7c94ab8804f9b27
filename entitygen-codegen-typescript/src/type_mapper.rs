//! Mapping of C# type references to TypeScript type expressions.

use std::{fmt, sync::LazyLock};

use entitygen_core::to_lower_camel;
use entitygen_model::{CodeModel, Member, MemberKind, TypeDecl, TypeRef};
use regex::Regex;

use crate::dependency::DependencyGraph;

/// The universal base type; only properties of this type may use the
/// attribute override.
const OBJECT_TYPE: &str = "System.Object";

/// Generic types rendered as `Array<T>`.
const ARRAY_CONTAINERS: &[&str] = &[
    "System.Collections.Generic.List",
    "System.Collections.Generic.IEnumerable",
];

static GENERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9.]+)<([\s\S]+?)>").expect("valid generic type pattern")
});

static TYPEOF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^typeof.*\((.*)\)$").expect("valid typeof pattern"));

/// TypeScript primitive for a C# primitive type.
///
/// Integral and floating point types all become `number`.
fn primitive(full_name: &str) -> Option<&'static str> {
    match full_name {
        "System.String" => Some("string"),
        "System.Int16" | "System.Int32" | "System.Int64" | "System.UInt16" | "System.UInt32"
        | "System.UInt64" | "System.Single" | "System.Double" | "System.Decimal"
        | "System.Byte" | "System.SByte" | "System.Char" => Some("number"),
        "System.Boolean" => Some("boolean"),
        _ => None,
    }
}

/// Strip a `typeof(...)` wrapper from an attribute argument.
///
/// `typeof(Invoice)` becomes `Invoice`; any other text is returned trimmed
/// but otherwise unchanged.
pub fn strip_typeof(argument: &str) -> String {
    TYPEOF.replace(argument.trim(), "$1").trim().to_string()
}

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Primitive(&'static str),
    Array(Box<TsType>),
    /// A generated sibling declaration.
    Named(String),
    /// `any`; used for properties whose real type comes from an attribute.
    Any,
    /// No mapping; renders as the empty string.
    Unresolved,
}

impl TsType {
    pub fn array(element: TsType) -> Self {
        TsType::Array(Box::new(element))
    }

    /// False when the type or any array element is [`TsType::Unresolved`].
    pub fn is_resolved(&self) -> bool {
        match self {
            TsType::Unresolved => false,
            TsType::Array(element) => element.is_resolved(),
            _ => true,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Primitive(name) => f.write_str(name),
            TsType::Array(element) => write!(f, "Array<{element}>"),
            TsType::Named(name) => f.write_str(name),
            TsType::Any => f.write_str("any"),
            TsType::Unresolved => Ok(()),
        }
    }
}

/// A mapped type together with the declarations found while mapping it.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub ty: TsType,
    pub dependencies: DependencyGraph<'a>,
}

impl<'a> Resolved<'a> {
    fn new(ty: TsType) -> Self {
        Self {
            ty,
            dependencies: DependencyGraph::new(),
        }
    }

    fn unresolved() -> Self {
        Self::new(TsType::Unresolved)
    }

    fn with_dependency(mut self, decl: &'a TypeDecl, needs_import: bool) -> Self {
        self.dependencies.register(decl, needs_import);
        self
    }

    fn map(self, f: impl FnOnce(TsType) -> TsType) -> Self {
        Self {
            ty: f(self.ty),
            dependencies: self.dependencies,
        }
    }
}

/// The member whose type is being mapped, and the file declaring it.
#[derive(Debug, Clone, Copy)]
pub struct MemberContext<'m> {
    pub member: &'m Member,
    pub file: &'m str,
}

/// Maps type references against a code model.
///
/// Mapping never fails: anything it cannot map is [`TsType::Unresolved`].
pub struct TypeMapper<'a, M: CodeModel> {
    model: &'a M,
    attribute: String,
}

impl<'a, M: CodeModel> TypeMapper<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self {
            model,
            attribute: "DataEntityGenerator".to_string(),
        }
    }

    /// Use a different attribute name for the `object` override.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Map a member of `owner`.
    pub fn resolve_member(&self, owner: &TypeDecl, member: &Member) -> Resolved<'a> {
        match &member.ty {
            Some(ty) => self.resolve(
                ty,
                Some(MemberContext {
                    member,
                    file: &owner.file,
                }),
            ),
            None => Resolved::unresolved(),
        }
    }

    /// Map a type reference, in order: primitives, arrays, list containers,
    /// the attribute override of `object` properties, declared types.
    pub fn resolve(&self, ty: &TypeRef, member: Option<MemberContext<'_>>) -> Resolved<'a> {
        let full_name = ty.full_name.as_str();

        if let Some(keyword) = primitive(full_name) {
            return Resolved::new(TsType::Primitive(keyword));
        }

        if ty.is_array() {
            return match ty.element() {
                Some(element) => self.resolve(&element, None).map(TsType::array),
                None => Resolved::unresolved(),
            };
        }

        if let Some(captures) = GENERIC.captures(full_name) {
            let (outer, inner) = (&captures[1], &captures[2]);
            if ARRAY_CONTAINERS.contains(&outer) {
                let element = self.resolve_element(inner.trim());
                if !element.ty.is_resolved() {
                    return element;
                }
                return element.map(TsType::array);
            }
        }

        if full_name == OBJECT_TYPE {
            if let Some(resolved) = member.and_then(|ctx| self.resolve_attribute_override(ctx)) {
                return resolved;
            }
        }

        match self.model.find_type(full_name) {
            Some(decl) => Resolved::new(TsType::Named(to_lower_camel(&decl.name)))
                .with_dependency(decl, true),
            None => {
                tracing::trace!(type_name = full_name, "no mapping for type");
                Resolved::unresolved()
            }
        }
    }

    /// Map the argument of a list container, looked up by exact name.
    fn resolve_element(&self, full_name: &str) -> Resolved<'a> {
        if let Some(decl) = self.model.find_type(full_name) {
            return self.resolve(&self.model.type_ref(decl), None);
        }
        match primitive(full_name) {
            Some(keyword) => Resolved::new(TsType::Primitive(keyword)),
            None => Resolved::unresolved(),
        }
    }

    /// Pull in the type named by the override attribute of an `object`
    /// property, searching the imports and namespaces of its file.
    fn resolve_attribute_override(&self, ctx: MemberContext<'_>) -> Option<Resolved<'a>> {
        if ctx.member.kind != MemberKind::Property {
            return None;
        }
        let argument = ctx.member.attribute(&self.attribute)?.first()?;
        let type_name = strip_typeof(argument);

        let decl = self
            .model
            .file_scope(ctx.file)
            .scopes()
            .find_map(|scope| self.model.find_type(&format!("{scope}.{type_name}")))?;

        tracing::trace!(
            member = %ctx.member.name,
            dependency = %decl.full_name,
            "attribute override"
        );
        Some(Resolved::new(TsType::Any).with_dependency(decl, false))
    }
}

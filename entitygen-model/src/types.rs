//! Declarations, members and type references of the code model.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Category of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DeclarationKind {
    /// Class-like declaration, rendered as an interface.
    Class,
    /// Enumeration, rendered as an enum.
    Enum,
    /// Anything else (struct, interface, delegate, ...), kept verbatim.
    Unsupported(String),
}

impl DeclarationKind {
    pub fn as_str(&self) -> &str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Unsupported(kind) => kind,
        }
    }
}

impl From<String> for DeclarationKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "class" => DeclarationKind::Class,
            "enum" => DeclarationKind::Enum,
            _ => DeclarationKind::Unsupported(kind),
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

/// What a member is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    #[default]
    Property,
    Field,
    /// A value of an enum declaration.
    #[serde(alias = "value", alias = "variable")]
    EnumValue,
    Method,
}

/// A possibly generic, possibly array type expression.
///
/// In a snapshot a type reference is either a bare string
/// (`"System.Int32[]"`) or a table with an explicit `element_type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTypeRef")]
pub struct TypeRef {
    /// Dotted name, may contain `<...>` generic syntax or a trailing `[]`.
    pub full_name: String,
    /// Element type for arrays.
    pub element_type: Option<Box<TypeRef>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeRef {
    Name(String),
    Full {
        full_name: String,
        #[serde(default)]
        element_type: Option<Box<TypeRef>>,
    },
}

impl From<RawTypeRef> for TypeRef {
    fn from(raw: RawTypeRef) -> Self {
        match raw {
            RawTypeRef::Name(full_name) => TypeRef::named(full_name),
            RawTypeRef::Full {
                full_name,
                element_type,
            } => TypeRef {
                full_name,
                element_type,
            },
        }
    }
}

impl TypeRef {
    /// A non-array type reference.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            element_type: None,
        }
    }

    /// An array of `element`, named with the `[]` suffix.
    pub fn array_of(element: TypeRef) -> Self {
        Self {
            full_name: format!("{}[]", element.full_name),
            element_type: Some(Box::new(element)),
        }
    }

    pub fn is_array(&self) -> bool {
        self.full_name.contains("[]")
    }

    /// Element type of an array.
    ///
    /// Falls back to the name with its last `[]` removed when the snapshot
    /// did not record the element type explicitly.
    pub fn element(&self) -> Option<TypeRef> {
        if let Some(element) = &self.element_type {
            return Some((**element).clone());
        }
        self.full_name.strip_suffix("[]").map(TypeRef::named)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// A field, property or enum value of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub name: String,
    /// Declared type; enum values have none.
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub kind: MemberKind,
    /// Properties without a getter never reach the output.
    #[serde(default = "default_true")]
    pub has_getter: bool,
    /// Attribute name to its constructor argument texts, in source order.
    #[serde(default)]
    pub attributes: IndexMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Member {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            ty: None,
            access: Access::Public,
            kind,
            has_getter: true,
            attributes: IndexMap::new(),
        }
    }

    /// A public property with a getter.
    pub fn property(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Property).with_type(TypeRef::named(ty))
    }

    /// An enum value.
    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::EnumValue)
    }

    pub fn with_type(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Mark a property as set-only.
    pub fn without_getter(mut self) -> Self {
        self.has_getter = false;
        self
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.attributes
            .insert(name.into(), args.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_public(&self) -> bool {
        self.access == Access::Public
    }

    /// Public property that can be read.
    pub fn is_readable_property(&self) -> bool {
        self.kind == MemberKind::Property && self.is_public() && self.has_getter
    }

    /// Arguments of the attribute with exactly this name.
    pub fn attribute(&self, name: &str) -> Option<&[String]> {
        self.attributes.get(name).map(Vec::as_slice)
    }
}

/// A class or enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDecl {
    /// Fully qualified name, unique within a model.
    pub full_name: String,
    /// Simple name; derived from `full_name` when omitted.
    #[serde(default)]
    pub name: String,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub members: Vec<Member>,
    /// Path of the declaring source file, filled in when the model is built.
    #[serde(skip)]
    pub file: String,
}

impl TypeDecl {
    pub fn new(full_name: impl Into<String>, kind: DeclarationKind) -> Self {
        let full_name = full_name.into();
        Self {
            name: simple_name(&full_name).to_string(),
            full_name,
            kind,
            members: Vec::new(),
            file: String::new(),
        }
    }

    pub fn class(full_name: impl Into<String>) -> Self {
        Self::new(full_name, DeclarationKind::Class)
    }

    pub fn enumeration(full_name: impl Into<String>) -> Self {
        Self::new(full_name, DeclarationKind::Enum)
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Enum values in declaration order.
    pub fn enum_values(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::EnumValue)
    }

    /// Public readable properties in declaration order.
    pub fn public_properties(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_readable_property())
    }
}

/// Last segment of a dotted name, ignoring any generic arguments.
pub(crate) fn simple_name(full_name: &str) -> &str {
    let base = full_name.split('<').next().unwrap_or(full_name);
    base.rsplit('.').next().unwrap_or(base)
}

//! Per-kind rendering of declarations into TypeScript bodies.

use std::fmt;

use entitygen_model::{CodeModel, DeclarationKind, TypeDecl, UnresolvedMember};

use crate::{
    Error, Result,
    ast::{Enum, Interface, InterfaceField},
    builder::{CodeFragment, Renderable},
    dependency::DependencyGraph,
    naming::TsNaming,
    type_mapper::{TsType, TypeMapper},
};

/// A property whose type could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedType {
    /// Full name of the declaring type.
    pub owner: String,
    pub member: String,
    /// Source type name, empty when the member had no type.
    pub type_name: String,
}

impl fmt::Display for UnresolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.owner, self.member, self.type_name)
    }
}

/// Body of one declaration and everything it referenced.
#[derive(Debug, Clone)]
pub struct Rendered<'a> {
    pub body: Vec<CodeFragment>,
    pub dependencies: DependencyGraph<'a>,
    pub unresolved: Vec<UnresolvedType>,
}

/// Renders classes as `export interface` declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassEmitter {
    pub naming: TsNaming,
    pub unresolved: UnresolvedMember,
}

impl ClassEmitter {
    pub fn render<'a, M: CodeModel>(
        &self,
        decl: &TypeDecl,
        mapper: &TypeMapper<'a, M>,
    ) -> Rendered<'a> {
        let mut interface = Interface::new(self.naming.type_name(decl));
        let mut dependencies = DependencyGraph::new();
        let mut unresolved = Vec::new();

        for member in decl.public_properties() {
            let resolved = mapper.resolve_member(decl, member);
            dependencies.merge(resolved.dependencies);

            let name = self.naming.member_name(&member.name);
            if resolved.ty.is_resolved() {
                interface = interface.field(name, resolved.ty.to_string());
                continue;
            }

            let type_name = member
                .ty
                .as_ref()
                .map(|ty| ty.full_name.clone())
                .unwrap_or_default();
            tracing::warn!(
                owner = %decl.full_name,
                member = %member.name,
                type_name = %type_name,
                "unresolved member type"
            );
            unresolved.push(UnresolvedType {
                owner: decl.full_name.clone(),
                member: member.name.clone(),
                type_name,
            });

            interface = match self.unresolved {
                UnresolvedMember::Omit => interface.field_with(InterfaceField::untyped(name)),
                UnresolvedMember::Any => interface.field(name, TsType::Any.to_string()),
                UnresolvedMember::Skip => interface,
            };
        }

        Rendered {
            body: interface.to_fragments(),
            dependencies,
            unresolved,
        }
    }
}

/// Renders enums as `export enum` declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumEmitter {
    pub naming: TsNaming,
}

impl EnumEmitter {
    pub fn render<'a>(&self, decl: &TypeDecl) -> Rendered<'a> {
        let ignored = decl.members.len() - decl.enum_values().count();
        if ignored > 0 {
            tracing::warn!(
                owner = %decl.full_name,
                ignored,
                "enum members that are not values are ignored"
            );
        }

        let values = decl
            .enum_values()
            .map(|member| self.naming.enum_value(&member.name));
        Rendered {
            body: Enum::new(self.naming.type_name(decl))
                .values(values)
                .to_fragments(),
            dependencies: DependencyGraph::new(),
            unresolved: Vec::new(),
        }
    }
}

/// Emitter for a supported declaration kind.
#[derive(Debug, Clone, Copy)]
pub enum Emitter {
    Class(ClassEmitter),
    Enum(EnumEmitter),
}

impl Emitter {
    /// Pick the emitter for `decl`.
    ///
    /// Fails with [`Error::UnsupportedDeclarationKind`] for anything that is
    /// not a class or an enum.
    pub fn for_decl(
        decl: &TypeDecl,
        naming: TsNaming,
        unresolved: UnresolvedMember,
    ) -> Result<Self> {
        match &decl.kind {
            DeclarationKind::Class => Ok(Self::Class(ClassEmitter { naming, unresolved })),
            DeclarationKind::Enum => Ok(Self::Enum(EnumEmitter { naming })),
            DeclarationKind::Unsupported(kind) => {
                Err(Box::new(Error::UnsupportedDeclarationKind {
                    full_name: decl.full_name.clone(),
                    kind: kind.clone(),
                }))
            }
        }
    }

    pub fn render<'a, M: CodeModel>(
        &self,
        decl: &TypeDecl,
        mapper: &TypeMapper<'a, M>,
    ) -> Rendered<'a> {
        match self {
            Self::Class(emitter) => emitter.render(decl, mapper),
            Self::Enum(emitter) => emitter.render(decl),
        }
    }
}

#[cfg(test)]
mod tests {
    use entitygen_model::{Access, EnumValueCase, Member, SourceFile, Workspace};

    use super::*;
    use crate::builder::{CodeBuilder, Indent};

    fn body(rendered: &Rendered<'_>) -> String {
        let mut builder = CodeBuilder::new(Indent::FOUR);
        for fragment in &rendered.body {
            builder.apply_fragment(fragment.clone());
        }
        builder.build()
    }

    fn workspace() -> Workspace {
        Workspace::new(vec![
            SourceFile::new("Shop/OrderDTO.cs")
                .namespace("Shop")
                .declare(TypeDecl::class("Shop.Order").members([
                    Member::property("Id", "System.Int32"),
                    Member::property("Secret", "System.String").with_access(Access::Private),
                    Member::property("Customer", "Shop.Customer"),
                    Member::property("WriteOnly", "System.String").without_getter(),
                    Member::property("Widget", "Vendor.Widget"),
                    Member::property("Lines", "Shop.Line[]"),
                ]))
                .declare(TypeDecl::class("Shop.Customer"))
                .declare(TypeDecl::class("Shop.Line"))
                .declare(
                    TypeDecl::enumeration("Shop.Status")
                        .members([Member::enum_value("Active"), Member::enum_value("Inactive")]),
                )
                .declare(TypeDecl::new("Shop.Money", DeclarationKind::from("struct".to_string()))),
        ])
        .unwrap()
    }

    fn render_class(ws: &Workspace, unresolved: UnresolvedMember) -> Rendered<'_> {
        let order = ws.find_type("Shop.Order").unwrap();
        let emitter = ClassEmitter {
            naming: TsNaming::default(),
            unresolved,
        };
        emitter.render(order, &TypeMapper::new(ws))
    }

    #[test]
    fn test_class_renders_public_readable_properties_in_order() {
        let ws = workspace();
        let rendered = render_class(&ws, UnresolvedMember::Omit);

        assert_eq!(
            body(&rendered),
            "export interface order {\n    \
             id: number;\n    \
             customer: customer;\n    \
             widget;\n    \
             lines: Array<line>;\n\
             }\n"
        );
    }

    #[test]
    fn test_class_collects_dependencies() {
        let ws = workspace();
        let rendered = render_class(&ws, UnresolvedMember::Omit);

        let deps: Vec<_> = rendered
            .dependencies
            .iter()
            .map(|d| d.decl.full_name.as_str())
            .collect();
        assert_eq!(deps, ["Shop.Customer", "Shop.Line"]);
    }

    #[test]
    fn test_unresolved_members_are_reported() {
        let ws = workspace();
        let rendered = render_class(&ws, UnresolvedMember::Omit);

        assert_eq!(
            rendered.unresolved,
            [UnresolvedType {
                owner: "Shop.Order".to_string(),
                member: "Widget".to_string(),
                type_name: "Vendor.Widget".to_string(),
            }]
        );
        assert_eq!(rendered.unresolved[0].to_string(), "Shop.Order.Widget: Vendor.Widget");
    }

    #[test]
    fn test_unresolved_as_any() {
        let ws = workspace();
        let rendered = render_class(&ws, UnresolvedMember::Any);
        assert!(body(&rendered).contains("    widget: any;\n"));
    }

    #[test]
    fn test_unresolved_skipped() {
        let ws = workspace();
        let rendered = render_class(&ws, UnresolvedMember::Skip);
        assert!(!body(&rendered).contains("widget"));
        assert_eq!(rendered.unresolved.len(), 1);
    }

    #[test]
    fn test_array_of_unknown_element_is_reported() {
        let ws = workspace();
        let decl =
            TypeDecl::class("Shop.Order").member(Member::property("Gadgets", "Vendor.Gadget[]"));

        let rendered = ClassEmitter::default().render(&decl, &TypeMapper::new(&ws));

        assert!(body(&rendered).contains("    gadgets;\n"));
        assert_eq!(rendered.unresolved[0].type_name, "Vendor.Gadget[]");
    }

    #[test]
    fn test_enum_values_with_commas() {
        let ws = workspace();
        let status = ws.find_type("Shop.Status").unwrap();
        let rendered = EnumEmitter::default().render(status);

        assert_eq!(
            body(&rendered),
            "export enum status {\n    Active,\n    Inactive\n}\n"
        );
        assert!(rendered.dependencies.is_empty());
    }

    #[test]
    fn test_enum_values_lower_camel() {
        let ws = workspace();
        let status = ws.find_type("Shop.Status").unwrap();
        let emitter = EnumEmitter {
            naming: TsNaming {
                enum_values: EnumValueCase::LowerCamel,
                ..TsNaming::default()
            },
        };
        assert!(body(&emitter.render(status)).contains("    active,\n    inactive\n"));
    }

    #[test]
    fn test_for_decl_dispatches_by_kind() {
        let ws = workspace();
        let naming = TsNaming::default();
        let omit = UnresolvedMember::Omit;

        let class = Emitter::for_decl(ws.find_type("Shop.Order").unwrap(), naming, omit);
        assert!(matches!(class, Ok(Emitter::Class(_))));

        let enumeration = Emitter::for_decl(ws.find_type("Shop.Status").unwrap(), naming, omit);
        assert!(matches!(enumeration, Ok(Emitter::Enum(_))));
    }

    #[test]
    fn test_for_decl_rejects_unsupported_kind() {
        let ws = workspace();
        let money = ws.find_type("Shop.Money").unwrap();

        let err = Emitter::for_decl(money, TsNaming::default(), UnresolvedMember::Omit).unwrap_err();
        match *err {
            Error::UnsupportedDeclarationKind { full_name, kind } => {
                assert_eq!(full_name, "Shop.Money");
                assert_eq!(kind, "struct");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

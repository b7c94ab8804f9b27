//! Integration tests that write generated declarations to a directory.

use std::fs;

use entitygen_codegen_typescript::{Error, Generator};
use entitygen_model::{CodeModel, DeclarationKind, Member, SourceFile, TypeDecl, Workspace};
use tempfile::TempDir;

fn workspace(types: Vec<TypeDecl>) -> Workspace {
    let file = types
        .into_iter()
        .fold(SourceFile::new("Shop/ModelsDTO.cs").namespace("Shop"), |file, decl| {
            file.declare(decl)
        });
    Workspace::new(vec![file]).expect("Failed to build workspace")
}

#[test]
fn test_order_imports_customer() {
    let ws = workspace(vec![
        TypeDecl::class("Shop.Order").member(Member::property("Customer", "Shop.Customer")),
        TypeDecl::class("Shop.Customer").member(Member::property("Name", "System.String")),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&ws)
        .generate(ws.find_type("Shop.Order").unwrap(), temp_dir.path())
        .expect("Generation failed");

    let order = fs::read_to_string(temp_dir.path().join("order.ts")).unwrap();
    assert!(order.starts_with("import { customer } from './customer'\n\n"));
    assert!(order.contains("    customer: customer;\n"));

    let customer = fs::read_to_string(temp_dir.path().join("customer.ts")).unwrap();
    assert_eq!(customer, "export interface customer {\n    name: string;\n}\n");

    assert_eq!(
        result.written,
        [
            temp_dir.path().join("order.ts"),
            temp_dir.path().join("customer.ts")
        ]
    );
}

#[test]
fn test_mutual_references_terminate() {
    let ws = workspace(vec![
        TypeDecl::class("Shop.A").member(Member::property("B", "Shop.B")),
        TypeDecl::class("Shop.B").member(Member::property("A", "Shop.A")),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&ws)
        .generate(ws.find_type("Shop.A").unwrap(), temp_dir.path())
        .expect("Generation failed");

    assert_eq!(result.written.len(), 2);
    let a = fs::read_to_string(temp_dir.path().join("a.ts")).unwrap();
    let b = fs::read_to_string(temp_dir.path().join("b.ts")).unwrap();
    assert!(a.contains("import { b } from './b'"));
    assert!(b.contains("import { a } from './a'"));
}

#[test]
fn test_self_reference_renders_once() {
    let ws = workspace(vec![
        TypeDecl::class("Shop.Category")
            .member(Member::property("Parent", "Shop.Category"))
            .member(Member::property("Children", "Shop.Category[]")),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&ws)
        .generate(ws.find_type("Shop.Category").unwrap(), temp_dir.path())
        .expect("Generation failed");

    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].imports.is_empty());
    let category = fs::read_to_string(temp_dir.path().join("category.ts")).unwrap();
    assert!(category.starts_with("export interface category {\n"));
    assert!(category.contains("    children: Array<category>;\n"));
}

#[test]
fn test_same_simple_name_in_two_namespaces_fails() {
    let ws = workspace(vec![
        TypeDecl::class("Shop.Order").members([
            Member::property("Buyer", "Shop.Customer"),
            Member::property("Account", "Shop.Sales.Customer"),
        ]),
        TypeDecl::class("Shop.Customer").member(Member::property("Name", "System.String")),
        TypeDecl::class("Shop.Sales.Customer").member(Member::property("Region", "System.String")),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let err = Generator::new(&ws)
        .generate(ws.find_type("Shop.Order").unwrap(), temp_dir.path())
        .unwrap_err();

    match *err {
        Error::FileNameCollision {
            file_name,
            first,
            second,
        } => {
            assert_eq!(file_name, "customer.ts");
            assert_eq!(first, "Shop.Customer");
            assert_eq!(second, "Shop.Sales.Customer");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let order = fs::read_to_string(temp_dir.path().join("order.ts")).unwrap();
    assert_eq!(order.matches("import { customer } from './customer'").count(), 1);
    let customer = fs::read_to_string(temp_dir.path().join("customer.ts")).unwrap();
    assert!(customer.contains("    name: string;\n"));
}

#[test]
fn test_enum_file_content() {
    let ws = workspace(vec![
        TypeDecl::enumeration("Shop.Status")
            .members([Member::enum_value("Active"), Member::enum_value("Inactive")]),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("out");

    Generator::new(&ws)
        .generate(ws.find_type("Shop.Status").unwrap(), &out)
        .expect("Generation failed");

    let status = fs::read_to_string(out.join("status.ts")).unwrap();
    assert_eq!(status, "export enum status {\n    Active,\n    Inactive\n}\n");
}

#[test]
fn test_existing_file_is_truncated() {
    let ws = workspace(vec![TypeDecl::class("Shop.Empty")]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty.ts");
    fs::write(&path, "// a much longer file that used to live here\n".repeat(10)).unwrap();

    Generator::new(&ws)
        .generate(ws.find_type("Shop.Empty").unwrap(), temp_dir.path())
        .expect("Generation failed");

    assert_eq!(fs::read_to_string(&path).unwrap(), "export interface empty {}\n");
}

#[test]
fn test_unsupported_dependency_fails_run_and_keeps_earlier_files() {
    let ws = workspace(vec![
        TypeDecl::class("Shop.Order").member(Member::property("Total", "Shop.Money")),
        TypeDecl::new("Shop.Money", DeclarationKind::from("struct".to_string())),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let err = Generator::new(&ws)
        .generate(ws.find_type("Shop.Order").unwrap(), temp_dir.path())
        .unwrap_err();

    assert!(matches!(
        *err,
        Error::UnsupportedDeclarationKind { ref full_name, ref kind }
            if full_name == "Shop.Money" && kind == "struct"
    ));
    assert!(temp_dir.path().join("order.ts").exists());
    assert!(!temp_dir.path().join("money.ts").exists());
}

#[test]
fn test_unsupported_root_writes_nothing() {
    let ws = workspace(vec![TypeDecl::new(
        "Shop.IRepository",
        DeclarationKind::from("interface".to_string()),
    )]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&ws).generate(
        ws.find_type("Shop.IRepository").unwrap(),
        temp_dir.path(),
    );

    assert!(result.is_err());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_attribute_dependency_is_written_but_not_imported() {
    let ws = Workspace::new(vec![
        SourceFile::new("Shop/Dto/EnvelopeDTO.cs")
            .import("Shop.Billing")
            .namespace("Shop.Dto")
            .declare(
                TypeDecl::class("Shop.Dto.Envelope").member(
                    Member::property("Body", "System.Object")
                        .with_attribute("DataEntityGenerator", ["typeof(Invoice)"]),
                ),
            ),
        SourceFile::new("Shop/Billing/Invoice.cs").declare(
            TypeDecl::class("Shop.Billing.Invoice").member(Member::property("Total", "System.Decimal")),
        ),
    ])
    .unwrap();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&ws)
        .generate(ws.find_type("Shop.Dto.Envelope").unwrap(), temp_dir.path())
        .expect("Generation failed");

    let envelope = fs::read_to_string(temp_dir.path().join("envelope.ts")).unwrap();
    assert_eq!(envelope, "export interface envelope {\n    body: any;\n}\n");
    assert!(temp_dir.path().join("invoice.ts").exists());
    assert_eq!(result.dependencies, [("Shop.Billing.Invoice".to_string(), false)]);
}

#[test]
fn test_generate_all_shares_dependencies() {
    let ws = workspace(vec![
        TypeDecl::class("Shop.Order").member(Member::property("Customer", "Shop.Customer")),
        TypeDecl::class("Shop.Invoice").member(Member::property("Customer", "Shop.Customer")),
        TypeDecl::class("Shop.Customer"),
    ]);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roots = [
        ws.find_type("Shop.Order").unwrap(),
        ws.find_type("Shop.Invoice").unwrap(),
    ];

    let result = Generator::new(&ws)
        .generate_all(&roots, temp_dir.path())
        .expect("Generation failed");

    let names: Vec<_> = result.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, ["order.ts", "customer.ts", "invoice.ts"]);
}

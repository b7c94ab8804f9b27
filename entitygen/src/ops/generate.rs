//! Generate operation - TypeScript files for the selected roots.

use std::path::Path;

use entitygen_codegen_typescript::{Generator, GeneratorOptions};
use entitygen_model::{SourceFilter, TypeDecl, Workspace};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Destination directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub generator: GeneratorOptions,
}

/// Resolve the roots of a run.
///
/// Files select their main type and type names are looked up directly.
/// Without either, every file accepted by `filter` contributes its main
/// type, skipping files that declare no class or enum.
pub fn select_roots<'a>(
    workspace: &'a Workspace,
    files: &[String],
    types: &[String],
    filter: &SourceFilter,
) -> entitygen_model::Result<Vec<&'a TypeDecl>> {
    if files.is_empty() && types.is_empty() {
        return Ok(workspace
            .source_files(filter)
            .into_iter()
            .filter_map(|file| file.main_type())
            .collect());
    }

    let mut roots = Vec::with_capacity(files.len() + types.len());
    for path in files {
        roots.push(workspace.main_type_of(path)?);
    }
    for full_name in types {
        roots.push(workspace.require_type(full_name)?);
    }
    Ok(roots)
}

/// Execute the generate operation.
pub fn generate<'a>(
    workspace: &'a Workspace,
    roots: &[&'a TypeDecl],
    opts: GenerateOptions,
) -> entitygen_codegen_typescript::Result<GenerateReport> {
    let generator = Generator::new(workspace).with_options(opts.generator);

    let run = if opts.dry_run {
        generator.preview(roots)?
    } else {
        generator.generate_all(roots, opts.output_dir)?
    };

    let result = if opts.dry_run {
        GenerationResult::Preview(
            run.files
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.file_name,
                    content: f.content,
                })
                .collect(),
        )
    } else {
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: run.written,
        })
    };

    Ok(GenerateReport {
        roots: roots.iter().map(|decl| decl.full_name.clone()).collect(),
        unresolved: run.unresolved.iter().map(ToString::to_string).collect(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use entitygen_model::Error;
    use tempfile::TempDir;

    use super::*;

    const MODEL: &str = r#"
        [[files]]
        path = "Dto/OrderDTO.cs"
        namespaces = ["Shop"]

        [[files.types]]
        full_name = "Shop.Order"
        kind = "class"

        [[files.types.members]]
        name = "Customer"
        type = "Shop.Customer"

        [[files.types.members]]
        name = "Note"
        type = "Vendor.Note"

        [[files]]
        path = "Dto/CustomerDTO.cs"

        [[files.types]]
        full_name = "Shop.Customer"
        kind = "class"

        [[files]]
        path = "Dto/IRepositoryDTO.cs"

        [[files.types]]
        full_name = "Shop.IRepository"
        kind = "interface"

        [[files]]
        path = "Util/Clock.cs"

        [[files.types]]
        full_name = "Shop.Clock"
        kind = "class"
    "#;

    fn workspace() -> Workspace {
        Workspace::from_str(MODEL).unwrap()
    }

    #[test]
    fn test_select_roots_defaults_to_filtered_files() {
        let ws = workspace();
        let roots = select_roots(&ws, &[], &[], &SourceFilter::new("DTO.cs")).unwrap();

        let names: Vec<_> = roots.iter().map(|d| d.full_name.as_str()).collect();
        assert_eq!(names, ["Shop.Customer", "Shop.Order"]);
    }

    #[test]
    fn test_select_roots_by_file_and_type() {
        let ws = workspace();
        let roots = select_roots(
            &ws,
            &["OrderDTO.cs".to_string()],
            &["Shop.Clock".to_string()],
            &SourceFilter::new("DTO.cs"),
        )
        .unwrap();

        let names: Vec<_> = roots.iter().map(|d| d.full_name.as_str()).collect();
        assert_eq!(names, ["Shop.Order", "Shop.Clock"]);
    }

    #[test]
    fn test_select_roots_rejects_unknown_type() {
        let ws = workspace();
        let err = select_roots(
            &ws,
            &[],
            &["Shop.Missing".to_string()],
            &SourceFilter::new("DTO.cs"),
        )
        .unwrap_err();
        assert!(matches!(*err, Error::UnknownType { .. }));
    }

    #[test]
    fn test_select_roots_rejects_file_without_main_type() {
        let ws = workspace();
        let err = select_roots(
            &ws,
            &["IRepositoryDTO.cs".to_string()],
            &[],
            &SourceFilter::new("DTO.cs"),
        )
        .unwrap_err();
        assert!(matches!(*err, Error::NoMainType { .. }));
    }

    #[test]
    fn test_generate_writes_files() {
        let ws = workspace();
        let temp_dir = TempDir::new().unwrap();
        let order = ws.require_type("Shop.Order").unwrap();

        let report = generate(
            &ws,
            &[order],
            GenerateOptions {
                output_dir: temp_dir.path(),
                dry_run: false,
                generator: GeneratorOptions::default(),
            },
        )
        .unwrap();

        match &report.result {
            GenerationResult::Written(written) => {
                assert_eq!(
                    written.files,
                    [
                        temp_dir.path().join("order.ts"),
                        temp_dir.path().join("customer.ts")
                    ]
                );
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert_eq!(report.roots, ["Shop.Order"]);
        assert_eq!(report.unresolved, ["Shop.Order.Note: Vendor.Note"]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let ws = workspace();
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("models");
        let order = ws.require_type("Shop.Order").unwrap();

        let report = generate(
            &ws,
            &[order],
            GenerateOptions {
                output_dir: &out,
                dry_run: true,
                generator: GeneratorOptions::default(),
            },
        )
        .unwrap();

        match &report.result {
            GenerationResult::Preview(files) => {
                let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
                assert_eq!(paths, ["order.ts", "customer.ts"]);
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
        assert!(!out.exists());
    }
}

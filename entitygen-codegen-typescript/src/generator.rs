//! Generation runs: render roots and everything they reference.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use entitygen_core::GeneratedFile;
use entitygen_model::{CodeModel, GenerateConfig, TypeDecl, UnresolvedMember};

use crate::{
    Error, Result,
    ast::Import,
    builder::Indent,
    code_file::CodeFile,
    dependency::DependencyGraph,
    emitter::{Emitter, Rendered, UnresolvedType},
    naming::TsNaming,
    type_mapper::TypeMapper,
};

/// Output settings of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Extension of generated files, without the dot.
    pub extension: String,
    pub indent: Indent,
    /// Attribute that pulls in the type of an `object` property.
    pub attribute: String,
    pub naming: TsNaming,
    pub unresolved: UnresolvedMember,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from(&GenerateConfig::default())
    }
}

impl From<&GenerateConfig> for GeneratorOptions {
    fn from(config: &GenerateConfig) -> Self {
        Self {
            extension: config.extension.trim_start_matches('.').to_string(),
            indent: Indent::from_width(config.indent),
            attribute: config.attribute.clone(),
            naming: TsNaming {
                files: config.file_naming,
                enum_values: config.enum_values,
            },
            unresolved: config.unresolved,
        }
    }
}

/// A generated TypeScript file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Full name of the declaration the file was rendered from.
    pub full_name: String,
    /// File name inside the destination directory.
    pub file_name: String,
    pub content: String,
    /// Names imported from sibling files, in import order.
    pub imports: Vec<String>,
}

impl GeneratedFile for RenderedFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Files in render order.
    pub files: Vec<RenderedFile>,
    /// Paths written to disk; empty for previews.
    pub written: Vec<PathBuf>,
    /// Every dependency discovered during the run with its `needs_import`
    /// flag, in discovery order.
    pub dependencies: Vec<(String, bool)>,
    pub unresolved: Vec<UnresolvedType>,
}

/// Generates TypeScript declaration files from a code model.
pub struct Generator<'a, M: CodeModel> {
    model: &'a M,
    options: GeneratorOptions,
}

impl<'a, M: CodeModel> Generator<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self {
            model,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn mapper(&self) -> TypeMapper<'a, M> {
        TypeMapper::new(self.model).with_attribute(self.options.attribute.clone())
    }

    /// Render a single declaration without following its dependencies.
    pub fn render_file(&self, decl: &TypeDecl) -> Result<RenderedFile> {
        let (file, _) = self.render(decl, &self.mapper())?;
        Ok(file)
    }

    /// Render `roots` and their dependencies without touching the disk.
    pub fn preview(&self, roots: &[&'a TypeDecl]) -> Result<GenerateResult> {
        self.run(roots, None)
    }

    /// Generate `root` and every declaration it references into `dest`.
    pub fn generate(&self, root: &'a TypeDecl, dest: &Path) -> Result<GenerateResult> {
        self.generate_all(&[root], dest)
    }

    /// Generate several roots in one run; a declaration shared between roots
    /// is written once.
    ///
    /// Stops at the first error. Files written before it stay on disk.
    pub fn generate_all(&self, roots: &[&'a TypeDecl], dest: &Path) -> Result<GenerateResult> {
        self.run(roots, Some(dest))
    }

    fn render(
        &self,
        decl: &TypeDecl,
        mapper: &TypeMapper<'a, M>,
    ) -> Result<(RenderedFile, Rendered<'a>)> {
        let emitter = Emitter::for_decl(decl, self.options.naming, self.options.unresolved)?;
        let rendered = emitter.render(decl, mapper);

        let naming = &self.options.naming;
        let mut imports: Vec<Import> = Vec::new();
        for dep in rendered.dependencies.imports() {
            if dep.full_name == decl.full_name {
                continue;
            }
            let import = Import::sibling(&naming.file_stem(dep)).named(naming.type_name(dep));
            if !imports.contains(&import) {
                imports.push(import);
            }
        }
        let import_names = imports
            .iter()
            .flat_map(|import| import.names().iter().cloned())
            .collect();
        let content = CodeFile::new()
            .imports(imports)
            .add_fragments(rendered.body.clone())
            .render_with_indent(self.options.indent);

        let file = RenderedFile {
            full_name: decl.full_name.clone(),
            file_name: format!("{}.{}", naming.file_stem(decl), self.options.extension),
            content,
            imports: import_names,
        };
        Ok((file, rendered))
    }

    fn run(&self, roots: &[&'a TypeDecl], dest: Option<&Path>) -> Result<GenerateResult> {
        let mapper = self.mapper();
        let mut rendered_names: HashSet<&'a str> = HashSet::new();
        let mut file_owners: HashMap<String, &'a str> = HashMap::new();
        let mut closure = DependencyGraph::new();
        let mut result = GenerateResult::default();

        // Depth first, children in discovery order.
        let mut pending: Vec<&'a TypeDecl> = roots.iter().rev().copied().collect();
        while let Some(decl) = pending.pop() {
            if !rendered_names.insert(decl.full_name.as_str()) {
                tracing::debug!(type_name = %decl.full_name, "already rendered");
                continue;
            }

            let (file, rendered) = self.render(decl, &mapper)?;
            tracing::debug!(type_name = %decl.full_name, file = %file.file_name, "rendered");

            let owner = file_owners.insert(file.file_name.clone(), decl.full_name.as_str());
            if let Some(first) = owner {
                return Err(Box::new(Error::FileNameCollision {
                    file_name: file.file_name,
                    first: first.to_string(),
                    second: decl.full_name.clone(),
                }));
            }

            if let Some(dest) = dest {
                let path = file
                    .write(dest)
                    .map_err(|source| Error::io(file.path(dest), source))?;
                tracing::debug!(path = %path.display(), "wrote file");
                result.written.push(path);
            }

            let children: Vec<&'a TypeDecl> =
                rendered.dependencies.iter().map(|dep| dep.decl).collect();
            pending.extend(children.into_iter().rev());

            closure.merge(rendered.dependencies);
            result.unresolved.extend(rendered.unresolved);
            result.files.push(file);
        }

        result.dependencies = closure
            .iter()
            .map(|dep| (dep.decl.full_name.clone(), dep.needs_import))
            .collect();
        Ok(result)
    }
}

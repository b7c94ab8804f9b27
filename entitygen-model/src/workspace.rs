//! In-memory code model loaded from a snapshot file.

use std::{collections::HashMap, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    CodeModel, DeclarationKind, Error, FileScope, MemberKind, Result, SourceFile, SourceFilter,
    TypeDecl, types::simple_name,
};

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    files: Vec<SourceFile>,
}

/// All source files of a solution, indexed by declared type name.
#[derive(Debug, Default)]
pub struct Workspace {
    files: Vec<SourceFile>,
    /// Full name -> (file index, type index).
    index: HashMap<String, (usize, usize)>,
}

impl FromStr for Workspace {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "model.toml")
    }
}

impl Workspace {
    /// Build a workspace, recording each declaration's file and rejecting
    /// duplicate full names.
    ///
    /// Untyped members of an enum whose kind was left at the default are
    /// read as enum values.
    pub fn new(mut files: Vec<SourceFile>) -> Result<Self> {
        for file in files.iter_mut() {
            for decl in file.types.iter_mut() {
                decl.file = file.path.clone();
                if decl.name.is_empty() {
                    decl.name = simple_name(&decl.full_name).to_string();
                }
                if decl.kind == DeclarationKind::Enum {
                    for member in decl.members.iter_mut() {
                        if member.kind == MemberKind::Property && member.ty.is_none() {
                            member.kind = MemberKind::EnumValue;
                        }
                    }
                }
            }
        }

        let mut index: HashMap<String, (usize, usize)> = HashMap::new();
        for (file_idx, file) in files.iter().enumerate() {
            for (type_idx, decl) in file.types.iter().enumerate() {
                if let Some(&(first_idx, _)) = index.get(&decl.full_name) {
                    return Err(Box::new(Error::DuplicateType {
                        full_name: decl.full_name.clone(),
                        first_file: files[first_idx].path.clone(),
                        second_file: file.path.clone(),
                    }));
                }
                index.insert(decl.full_name.clone(), (file_idx, type_idx));
            }
        }

        Ok(Self { files, index })
    }

    /// Load a snapshot; `.json` files are read as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content, &filename)
        } else {
            Self::from_toml_str(&content, &filename)
        }
    }

    /// Parse a TOML snapshot with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let snapshot: Snapshot = toml::from_str(content)
            .map_err(|e| Error::parse("code model", e, content, filename))?;
        Self::new(snapshot.files)
    }

    /// Parse a JSON snapshot with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)
            .map_err(|e| Error::json("code model", e, content, filename))?;
        Self::new(snapshot.files)
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Every declaration, file by file in source order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.files.iter().flat_map(|f| f.types.iter())
    }

    /// Candidate root files accepted by `filter`, ordered by file name.
    pub fn source_files(&self, filter: &SourceFilter) -> Vec<&SourceFile> {
        let mut files: Vec<&SourceFile> =
            self.files.iter().filter(|f| filter.matches(f)).collect();
        files.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        files
    }

    /// Find a file by its path, or by its bare file name.
    pub fn find_file(&self, path: &str) -> Option<&SourceFile> {
        let wanted = path.replace('\\', "/");
        self.files
            .iter()
            .find(|f| f.path.replace('\\', "/") == wanted)
            .or_else(|| self.files.iter().find(|f| f.file_name() == wanted))
    }

    /// The main type of the file at `path`.
    pub fn main_type_of(&self, path: &str) -> Result<&TypeDecl> {
        let file = self.find_file(path).ok_or_else(|| {
            Box::new(Error::UnknownFile {
                path: path.to_string(),
            })
        })?;
        file.main_type().ok_or_else(|| {
            Box::new(Error::NoMainType {
                path: file.path.clone(),
            })
        })
    }

    /// Like [`CodeModel::find_type`], failing for unknown names.
    pub fn require_type(&self, full_name: &str) -> Result<&TypeDecl> {
        self.find_type(full_name).ok_or_else(|| {
            Box::new(Error::UnknownType {
                full_name: full_name.to_string(),
            })
        })
    }
}

impl CodeModel for Workspace {
    fn find_type(&self, full_name: &str) -> Option<&TypeDecl> {
        let &(file_idx, type_idx) = self.index.get(full_name)?;
        self.files.get(file_idx)?.types.get(type_idx)
    }

    fn file_scope(&self, path: &str) -> FileScope<'_> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| FileScope {
                imports: &f.imports,
                namespaces: &f.namespaces,
            })
            .unwrap_or_default()
    }
}

//! List operation - candidate source files.

use entitygen_model::{SourceFilter, Workspace};

use crate::reports::{ListReport, ListedFile};

/// Collect the source files accepted by `filter` with their main type.
pub fn list(workspace: &Workspace, filter: &SourceFilter) -> ListReport {
    let files = workspace
        .source_files(filter)
        .into_iter()
        .map(|file| ListedFile {
            path: file.path.clone(),
            main_type: file
                .main_type()
                .map(|decl| format!("{} ({})", decl.full_name, decl.kind)),
        })
        .collect();

    ListReport {
        suffix: filter.suffix().to_string(),
        files,
    }
}

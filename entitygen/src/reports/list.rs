//! List command report data structures.

use super::output::{Output, Report};

/// Candidate source files of a code model.
#[derive(Debug)]
pub struct ListReport {
    /// File name suffix the listing was filtered by.
    pub suffix: String,
    pub files: Vec<ListedFile>,
}

#[derive(Debug)]
pub struct ListedFile {
    pub path: String,
    /// Full name and kind of the file's main type.
    pub main_type: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.files.is_empty() {
            out.preformatted(&format!("No source files ending in '{}'", self.suffix));
            return;
        }

        out.section(&format!("Source files ({})", self.files.len()));
        for file in &self.files {
            match &file.main_type {
                Some(main_type) => out.list_item(&format!("{} -> {}", file.path, main_type)),
                None => out.list_item(&format!("{} (no class or enum)", file.path)),
            }
        }
    }
}

use std::path::PathBuf;

use clap::Args;
use entitygen_codegen_typescript::GeneratorOptions;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Source file whose main type is generated (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<String>,

    /// Fully qualified type to generate (repeatable)
    #[arg(short, long = "type", value_name = "FULL_NAME")]
    pub types: Vec<String>,

    /// Output directory (overrides [generate] output, defaults to the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Without --file or --type, generate every source file instead of only DTO files
    #[arg(long)]
    pub all: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.project.config();
        let workspace = self.project.workspace(&config);
        let settings = &config.generate;

        let roots = ops::select_roots(
            &workspace,
            &self.files,
            &self.types,
            &settings.source_filter(self.all),
        )
        .unwrap_or_exit();

        let output_dir = self
            .output
            .clone()
            .or_else(|| settings.output.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let report = ops::generate(
            &workspace,
            &roots,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                generator: GeneratorOptions::from(settings),
            },
        )
        .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// List every source file, not only DTO files
    #[arg(long)]
    pub all: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.project.config();
        let workspace = self.project.workspace(&config);

        let report = ops::list(&workspace, &config.generate.source_filter(self.all));
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

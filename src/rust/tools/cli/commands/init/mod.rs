use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::platform::config::{AppConfig, write_default_json};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct InitCommand {
    /// Directory to write practime.json into (current directory if not specified)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing practime.json
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

impl InitCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let target = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };

        logger.action(format!("Writing default config to '{}'...", target.display()));

        let written = write_default_json(&target, &AppConfig::default(), self.force)
            .inspect_err(|e| logger.error(format!("{:#}", e)))?;

        logger.success(format!("Config written to '{}'", written.display()));
        Ok(())
    }
}

use anyhow::{Context, Result};
use clap::Args;

use super::{PracticeArgs, load_config, validate_input, wants_json};
use crate::engine::practice::{PracticeResult, step_schedule};
use crate::tools::cli::io::{render_schedule, render_summary};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct CalcCommand {
    #[command(flatten)]
    pub practice: PracticeArgs,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also list every tempo step
    #[arg(long, default_value_t = false)]
    pub schedule: bool,
}

impl CalcCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let config = load_config(ctx)?;
        let raw = self.practice.resolve(&config);
        logger.debug(format!("Resolved input: {:?}", raw));

        let params = validate_input(ctx, &raw)?;
        let result = PracticeResult::from_parameters(&params);

        if wants_json(self.json, &config) {
            let json = serde_json::to_string_pretty(&result).context("serialize result")?;
            println!("{}", json);
            return Ok(());
        }

        let precision = config.report_precision();
        logger.action("Practice time");
        for line in render_summary(&result, precision) {
            println!("   {}", line);
        }

        if self.schedule || config.report.show_schedule {
            logger.info(format!("{} tempo step(s)", result.step_count + 1));
            for line in render_schedule(&step_schedule(&params), precision) {
                println!("   {}", line);
            }
        }

        Ok(())
    }
}

use anyhow::{Context, Result};
use clap::Args;

use super::{PracticeArgs, load_config, validate_input, wants_json};
use crate::engine::practice::step_schedule;
use crate::tools::cli::io::render_schedule;
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct ScheduleCommand {
    #[command(flatten)]
    pub practice: PracticeArgs,

    /// Print the schedule as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl ScheduleCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let config = load_config(ctx)?;
        let params = validate_input(ctx, &self.practice.resolve(&config))?;
        let schedule = step_schedule(&params);

        if wants_json(self.json, &config) {
            let json = serde_json::to_string_pretty(&schedule).context("serialize schedule")?;
            println!("{}", json);
            return Ok(());
        }

        logger.action(format!("{} tempo step(s)", schedule.len()));
        for line in render_schedule(&schedule, config.report_precision()) {
            println!("   {}", line);
        }
        Ok(())
    }
}

use anyhow::{Context, Result};
use clap::Args;

use super::{PracticeArgs, load_config, wants_json};
use crate::engine::practice::sweep_step_sizes;
use crate::tools::cli::io::render_sweep;
use crate::tools::cli::state::CliContext;
use crate::tools::logger::LogLevel;

#[derive(Debug, Clone, Args)]
pub struct SweepCommand {
    #[command(flatten)]
    pub practice: PracticeArgs,

    /// Step sizes to compare (e.g., "1 2 5 10")
    #[arg(long, value_delimiter = ' ', num_args = 1.., required = true)]
    pub steps: Vec<f64>,

    /// Print the sweep as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl SweepCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();
        let config = load_config(ctx)?;
        let base = self.practice.resolve(&config);

        let points = sweep_step_sizes(&base, &self.steps);

        if wants_json(self.json, &config) {
            let json = serde_json::to_string_pretty(&points).context("serialize sweep")?;
            println!("{}", json);
            return Ok(());
        }

        logger.action(format!(
            "Comparing {} step size(s) from {} to {} BPM",
            points.len(),
            base.start_tempo,
            base.end_tempo
        ));
        for line in render_sweep(&points, config.report_precision()) {
            println!("   {}", line);
        }

        let rejected: Vec<String> = points
            .iter()
            .filter(|p| p.result().is_none())
            .map(|p| format!("step {}", p.step_size))
            .collect();
        if !rejected.is_empty() {
            logger.log_with_details(
                LogLevel::Warning,
                format!("{} step size(s) were rejected", rejected.len()),
                rejected,
            );
        }
        Ok(())
    }
}

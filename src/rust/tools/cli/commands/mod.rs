pub mod calc;
pub mod init;
pub mod schedule;
pub mod sweep;

use anyhow::Result;
use clap::Args;

use crate::engine::practice::{PracticeParameters, RawPracticeInput};
use crate::platform::config::{AppConfig, ReportFormat};
use crate::tools::cli::state::CliContext;

/// Ladder values; anything left out falls back to the `[practice]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct PracticeArgs {
    /// Starting tempo in BPM
    #[arg(short = 'a', long = "start")]
    pub start_tempo: Option<f64>,

    /// Target tempo in BPM
    #[arg(short = 'b', long = "end")]
    pub end_tempo: Option<f64>,

    /// Tempo increment in BPM
    #[arg(short = 's', long = "step")]
    pub step_size: Option<f64>,

    /// Beats in one phrase
    #[arg(long = "beats")]
    pub beats_per_phrase: Option<f64>,

    /// Phrase repetitions at each tempo
    #[arg(short = 'r', long = "reps")]
    pub repetitions: Option<f64>,

    /// Passes through the whole ladder
    #[arg(short = 'n', long = "sets")]
    pub sets: Option<f64>,
}

impl PracticeArgs {
    pub fn resolve(&self, config: &AppConfig) -> RawPracticeInput {
        let defaults = config.practice.to_raw();
        RawPracticeInput {
            start_tempo: self.start_tempo.unwrap_or(defaults.start_tempo),
            end_tempo: self.end_tempo.unwrap_or(defaults.end_tempo),
            step_size: self.step_size.unwrap_or(defaults.step_size),
            beats_per_phrase: self.beats_per_phrase.unwrap_or(defaults.beats_per_phrase),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            sets: self.sets.unwrap_or(defaults.sets),
        }
    }
}

pub(crate) fn load_config(ctx: &CliContext) -> Result<AppConfig> {
    let current_dir = std::env::current_dir()?;
    let config = AppConfig::load(&current_dir)?;
    ctx.logger()
        .debug(format!("Loaded config from {}", current_dir.display()));
    Ok(config)
}

pub(crate) fn wants_json(flag: bool, config: &AppConfig) -> bool {
    flag || config.report.format == ReportFormat::Json
}

/// Validate and log the failure the way every command reports it.
pub(crate) fn validate_input(
    ctx: &CliContext,
    raw: &RawPracticeInput,
) -> Result<PracticeParameters> {
    raw.validate().map_err(|e| {
        ctx.logger()
            .error(format!("Invalid practice input [{}]: {}", e.kind(), e));
        anyhow::Error::new(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = AppConfig::default();
        let args = PracticeArgs {
            start_tempo: Some(80.0),
            sets: Some(2.0),
            ..Default::default()
        };
        let raw = args.resolve(&config);
        assert_eq!(raw.start_tempo, 80.0);
        assert_eq!(raw.sets, 2.0);
        assert_eq!(raw.end_tempo, config.practice.end_tempo);
        assert_eq!(raw.step_size, config.practice.step_size);
    }
}

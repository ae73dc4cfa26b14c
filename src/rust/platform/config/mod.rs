#![cfg(feature = "cli")]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::practice::RawPracticeInput;

pub const JSON_CONFIG: &str = "practime.json";
pub const TOML_CONFIG: &str = "practime.toml";
pub const DOT_CONFIG: &str = ".practime";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub practice: PracticeSection,
    pub report: ReportSection,
}

/// Default ladder used when the command line leaves a value out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSection {
    pub start_tempo: f64,
    pub end_tempo: f64,
    pub step_size: f64,
    pub beats_per_phrase: u32,
    pub repetitions: u32,
    pub sets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub format: ReportFormat,
    /// Digits after the decimal point for seconds and percentages.
    pub precision: usize,
    pub show_schedule: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

impl Default for PracticeSection {
    fn default() -> Self {
        Self {
            start_tempo: 60.0,
            end_tempo: 120.0,
            step_size: 5.0,
            beats_per_phrase: 4,
            repetitions: 4,
            sets: 1,
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            precision: 2,
            show_schedule: false,
        }
    }
}

impl PracticeSection {
    pub fn to_raw(&self) -> RawPracticeInput {
        RawPracticeInput {
            start_tempo: self.start_tempo,
            end_tempo: self.end_tempo,
            step_size: self.step_size,
            beats_per_phrase: self.beats_per_phrase as f64,
            repetitions: self.repetitions as f64,
            sets: self.sets as f64,
        }
    }
}

impl AppConfig {
    /// Load the project config from `root`.
    ///
    /// No config file means defaults. Several candidates trigger a prompt
    /// when stdin is a terminal, otherwise toml > json > dotfile wins.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let candidates = find_candidates(root.as_ref());

        match candidates.len() {
            0 => Ok(AppConfig::default()),
            1 => load_config_by_path(&candidates[0]),
            _ => {
                let selected = select_config_interactive(&candidates)
                    .unwrap_or_else(|| pick_config_priority(&candidates));
                load_config_by_path(&selected)
            }
        }
    }

    pub fn report_precision(&self) -> usize {
        self.report.precision.min(12)
    }
}

fn find_candidates(root: &Path) -> Vec<PathBuf> {
    [JSON_CONFIG, DOT_CONFIG, TOML_CONFIG]
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.exists())
        .collect()
}

fn load_json(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&file)
        .with_context(|| format!("invalid JSON config: {}", path.display()))?;
    Ok(config)
}

fn load_toml(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str(&file)
        .with_context(|| format!("invalid TOML config: {}", path.display()))?;
    Ok(config)
}

fn load_config_by_path(path: &Path) -> Result<AppConfig> {
    // The dotfile carries no extension; sniff the content instead
    if path.file_name().and_then(|s| s.to_str()) == Some(DOT_CONFIG) {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let trimmed = raw.trim_start();
        if trimmed.starts_with('{') {
            return serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON config: {}", path.display()));
        }
        return toml::from_str(&raw)
            .with_context(|| format!("invalid TOML config: {}", path.display()));
    }

    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("json") => load_json(path),
        Some("toml") => load_toml(path),
        _ => load_json(path).or_else(|_| load_toml(path)),
    }
}

fn pick_config_priority(candidates: &[PathBuf]) -> PathBuf {
    for pref in [TOML_CONFIG, JSON_CONFIG, DOT_CONFIG] {
        if let Some(found) = candidates.iter().find(|p| {
            p.file_name()
                .and_then(|s| s.to_str())
                .map(|n| n.eq_ignore_ascii_case(pref))
                .unwrap_or(false)
        }) {
            return found.clone();
        }
    }
    candidates[0].clone()
}

fn select_config_interactive(candidates: &[PathBuf]) -> Option<PathBuf> {
    if !atty::is(atty::Stream::Stdin) {
        return None;
    }
    let options: Vec<String> = candidates
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();
    inquire::Select::new("Multiple config files found; select one:", options)
        .prompt()
        .ok()
        .map(PathBuf::from)
}

/// Write `config` as pretty JSON to `<root>/practime.json`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_json(root: &Path, config: &AppConfig, force: bool) -> Result<PathBuf> {
    let path = root.join(JSON_CONFIG);
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    fs::create_dir_all(root)
        .with_context(|| format!("failed to create config directory: {}", root.display()))?;

    let json = serde_json::to_string_pretty(config).context("serialize default config")?;
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create config file: {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("unable to write config file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!dir.path().join(JSON_CONFIG).exists());
    }

    #[test]
    fn test_load_partial_toml() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(TOML_CONFIG),
            "[practice]\nstart_tempo = 80\nsets = 3\n\n[report]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.practice.start_tempo, 80.0);
        assert_eq!(config.practice.sets, 3);
        assert_eq!(config.practice.end_tempo, 120.0);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.precision, 2);
    }

    #[test]
    fn test_dotfile_content_sniffing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DOT_CONFIG);

        fs::write(&path, r#"{ "practice": { "step_size": 2.5 } }"#).unwrap();
        assert_eq!(load_config_by_path(&path).unwrap().practice.step_size, 2.5);

        fs::write(&path, "[practice]\nstep_size = 7.5\n").unwrap();
        assert_eq!(load_config_by_path(&path).unwrap().practice.step_size, 7.5);
    }

    #[test]
    fn test_priority_prefers_toml() {
        let candidates = vec![
            PathBuf::from("/p/practime.json"),
            PathBuf::from("/p/.practime"),
            PathBuf::from("/p/practime.toml"),
        ];
        assert_eq!(
            pick_config_priority(&candidates),
            PathBuf::from("/p/practime.toml")
        );
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(JSON_CONFIG), "{ not json").unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(JSON_CONFIG));
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = write_default_json(dir.path(), &AppConfig::default(), false).unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());

        assert!(write_default_json(dir.path(), &AppConfig::default(), false).is_err());
        assert_eq!(
            write_default_json(dir.path(), &AppConfig::default(), true).unwrap(),
            path
        );
    }
}

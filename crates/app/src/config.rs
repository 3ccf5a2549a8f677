use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "guide.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after all layers are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub initial_stage: Option<String>,
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_stage: None,
            log_level: "info".into(),
            format: OutputFormat::Text,
        }
    }
}

/// Shape of `guide.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub catalog_path: Option<PathBuf>,
    pub initial_stage: Option<String>,
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub stage: Option<String>,
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    pub fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.catalog_path {
            self.catalog_path = Some(v);
        }
        if let Some(v) = file.initial_stage {
            self.initial_stage = Some(v);
        }
        if let Some(v) = file.log_level {
            self.log_level = v;
        }
        if let Some(v) = file.format {
            self.format = v;
        }
    }

    /// Apply `GUIDE_*` variables through `lookup` so tests need not touch
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `GUIDE_FORMAT` names an unknown output format.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(v) = lookup("GUIDE_CATALOG").filter(|v| !v.trim().is_empty()) {
            self.catalog_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("GUIDE_STAGE").filter(|v| !v.trim().is_empty()) {
            self.initial_stage = Some(v);
        }
        if let Some(v) = lookup("GUIDE_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_level = v;
        }
        if let Some(v) = lookup("GUIDE_FORMAT").filter(|v| !v.trim().is_empty()) {
            self.format = <OutputFormat as ValueEnum>::from_str(v.trim(), true)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid GUIDE_FORMAT value {v:?}"))?;
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(v) = &cli.catalog {
            self.catalog_path = Some(v.clone());
        }
        if let Some(v) = &cli.stage {
            self.initial_stage = Some(v.clone());
        }
        if let Some(v) = &cli.log_level {
            self.log_level = v.clone();
        }
        if let Some(v) = cli.format {
            self.format = v;
        }
    }
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

/// Resolve settings: defaults, then config file, then environment, then CLI.
///
/// An explicit `--config` path must exist; the default `guide.toml` is
/// optional.
pub fn load_settings(cli: &CliOverrides) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match &cli.config {
        Some(path) => settings.apply_file(read_file_settings(path)?),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                settings.apply_file(read_file_settings(default_path)?);
            }
        }
    }

    settings.apply_env(|key| std::env::var(key).ok())?;
    settings.apply_cli(cli);
    Ok(settings)
}

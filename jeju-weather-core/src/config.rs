use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::analysis::gemini::DEFAULT_MODEL;
use crate::generator::DEFAULT_DRY_DAY_PROBABILITY;

/// Credentials and model selection for the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub api_key: String,

    /// Model identifier; `gemini-2.5-flash` when absent.
    pub model: Option<String>,
}

/// Generator tuning.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Probability that a precipitation day is forced to zero.
    pub dry_day_probability: Option<f64>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// [analysis]
    /// api_key = "..."
    /// model = "gemini-2.5-flash"
    pub analysis: Option<AnalysisConfig>,

    /// [generator]
    /// dry_day_probability = 0.6
    pub generator: Option<GeneratorConfig>,
}

impl Config {
    pub fn analysis_api_key(&self) -> Option<&str> {
        self.analysis.as_ref().map(|a| a.api_key.as_str())
    }

    pub fn analysis_model(&self) -> &str {
        self.analysis
            .as_ref()
            .and_then(|a| a.model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
    }

    pub fn is_analysis_configured(&self) -> bool {
        self.analysis_api_key().is_some()
    }

    /// Set/replace the analysis credentials; a `None` model keeps any
    /// previously configured one.
    pub fn set_analysis(&mut self, api_key: String, model: Option<String>) {
        match &mut self.analysis {
            Some(analysis) => {
                analysis.api_key = api_key;
                if model.is_some() {
                    analysis.model = model;
                }
            }
            None => self.analysis = Some(AnalysisConfig { api_key, model }),
        }
    }

    pub fn dry_day_probability(&self) -> f64 {
        self.generator
            .as_ref()
            .and_then(|g| g.dry_day_probability)
            .unwrap_or(DEFAULT_DRY_DAY_PROBABILITY)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "jeju-weather", "jeju-weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

//! Configuration settings for the simulator

use crate::life::{Lifeform, RulePreset, RuleSet, DEFAULT_TRACE_DEPTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub rule: RuleConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: u64,
    pub trace_depth: usize,
}

/// Rule selection: a named preset, optionally overridden by custom birth
/// and survival digit strings.
///
/// Custom edits start from a copy of the preset's definition, so editing
/// one run's rule never touches the preset table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub preset: RulePreset,
    pub birth: Option<String>,
    pub survival: Option<String>,
}

impl RuleConfig {
    /// Resolve the active rule set.
    ///
    /// A failed parse of either custom string rejects the whole rule; the
    /// caller keeps whatever rule it already had.
    pub fn resolve(&self) -> Result<RuleSet> {
        let base = self.preset.rule_set();
        let birth = match &self.birth {
            Some(text) => text.clone(),
            None => base.birth_string(),
        };
        let survival = match &self.survival {
            Some(text) => text.clone(),
            None => base.survival_string(),
        };
        RuleSet::parse(&birth, &survival)
            .with_context(|| format!("Invalid rule B{}/S{}", birth, survival))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub lifeform: Option<Lifeform>,
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub trace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 40,
                cols: 60,
                generations: 50,
                trace_depth: DEFAULT_TRACE_DEPTH,
            },
            rule: RuleConfig {
                preset: RulePreset::GameOfLife,
                birth: None,
                survival: None,
            },
            input: InputConfig {
                lifeform: Some(Lifeform::GosperGliderGun),
                pattern_file: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                trace: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.rows == 0 || self.simulation.cols == 0 {
            anyhow::bail!("Grid dimensions must be positive");
        }

        if self.simulation.trace_depth == 0 {
            anyhow::bail!("Trace depth must be at least 1");
        }

        self.rule.resolve()?;

        if let Some(pattern_file) = &self.input.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(preset) = cli_overrides.preset {
            self.rule.preset = preset;
            self.rule.birth = None;
            self.rule.survival = None;
        }
        if let Some(lifeform) = cli_overrides.lifeform {
            self.input.lifeform = Some(lifeform);
            self.input.pattern_file = None;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
            self.input.lifeform = None;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<u64>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub preset: Option<RulePreset>,
    pub lifeform: Option<Lifeform>,
    pub pattern_file: Option<PathBuf>,
}

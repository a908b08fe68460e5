//! Configuration loading for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vita_extractor::ParserConfig;

/// CLI configuration file.
///
/// ```toml
/// preset = "english"        # or "german" (default)
///
/// [settings]
/// color = false
/// format = "json"
///
/// [parser]                  # full ParserConfig, replaces the preset
/// strategy = "specialized"
/// ...
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Built-in catalog to start from
    #[serde(default)]
    pub preset: Preset,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Explicit parser configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserConfig>,
}

/// Built-in heading catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// German consultant profiles
    #[default]
    German,
    /// English headings and date tokens
    English,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the given file, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parser configuration: the explicit table, else the preset.
    pub fn parser_config(&self, preset: Option<Preset>) -> Result<ParserConfig> {
        let config = match (&self.parser, preset.unwrap_or(self.preset)) {
            (Some(parser), _) => parser.clone(),
            (None, Preset::German) => ParserConfig::default(),
            (None, Preset::English) => ParserConfig::english(),
        };
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Json,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Json
}

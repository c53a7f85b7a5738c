// Rust guideline compliant 2026-02-06

//! Configuration management for the JDK issue tools.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "jdki.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name.
    ///
    /// # Errors
    ///
    /// Returns an error for names other than json, table or plain.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(Error::InvalidConfig(format!(
                "output format must be json, table, or plain, got {value}"
            ))),
        }
    }
}

/// How HTML reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Compiled template engine over the bundled template.
    #[default]
    Template,
    /// Literal `{{ name }}` substitution over a template text.
    Placeholder,
}

impl RenderStrategy {
    /// Parses a strategy name.
    ///
    /// # Errors
    ///
    /// Returns an error for names other than template or placeholder.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "template" => Ok(RenderStrategy::Template),
            "placeholder" => Ok(RenderStrategy::Placeholder),
            _ => Err(Error::InvalidConfig(format!(
                "render strategy must be template or placeholder, got {value}"
            ))),
        }
    }
}

/// Configuration for the JDK issue tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Issue files used when a command is given none.
    #[serde(default)]
    pub default_files: Vec<PathBuf>,

    /// Priorities counted as high priority.
    #[serde(default = "default_high_priorities")]
    pub high_priorities: Vec<String>,

    /// Label for blank values in search statistics and groups.
    #[serde(default = "default_unspecified_label")]
    pub unspecified_label: String,

    /// Report title override.
    #[serde(default)]
    pub report_title: Option<String>,

    /// Report summary override.
    #[serde(default)]
    pub report_summary: Option<String>,

    /// Report rendering strategy.
    #[serde(default)]
    pub render_strategy: RenderStrategy,

    /// Template file for the placeholder strategy.
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Directory holding downloaded tracker XML, one sub-directory per issue.
    #[serde(default = "default_issues_dir")]
    pub issues_dir: PathBuf,
}

fn default_high_priorities() -> Vec<String> {
    vec!["P1".to_string(), "P2".to_string()]
}

fn default_unspecified_label() -> String {
    "not specified".to_string()
}

fn default_issues_dir() -> PathBuf {
    PathBuf::from("jdk_issues")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_files: Vec::new(),
            high_priorities: default_high_priorities(),
            unspecified_label: default_unspecified_label(),
            report_title: None,
            report_summary: None,
            render_strategy: RenderStrategy::default(),
            template_path: None,
            output_format: OutputFormat::default(),
            issues_dir: default_issues_dir(),
        }
    }
}

impl Config {
    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The configuration file, if it exists
    /// 3. Environment variables with `JDKI_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `JDKI_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `JDKI_RENDER_STRATEGY` - Report strategy (template/placeholder)
    /// - `JDKI_ISSUES_DIR` - Tracker XML directory
    /// - `JDKI_UNSPECIFIED_LABEL` - Label for blank values
    /// - `JDKI_HIGH_PRIORITIES` - Comma-separated high priority labels
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("JDKI_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val)?;
        }

        if let Ok(val) = std::env::var("JDKI_RENDER_STRATEGY") {
            self.render_strategy = RenderStrategy::parse(&val)?;
        }

        if let Ok(val) = std::env::var("JDKI_ISSUES_DIR") {
            self.issues_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("JDKI_UNSPECIFIED_LABEL") {
            self.unspecified_label = val;
        }

        if let Ok(val) = std::env::var("JDKI_HIGH_PRIORITIES") {
            self.high_priorities = val
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - high_priorities is empty
    /// - unspecified_label is blank
    fn validate(&self) -> Result<()> {
        if self.high_priorities.is_empty() {
            return Err(Error::InvalidConfig(
                "high_priorities must name at least one priority".to_string(),
            ));
        }

        if self.unspecified_label.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "unspecified_label cannot be blank".to_string(),
            ));
        }

        Ok(())
    }

}

//! Configuration file support.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::EngineChoice;
use crate::export::{EngineKind, EnginePreference, EngineProbe};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Document title used instead of the first heading
    pub title: Option<String>,

    /// Footer line for print documents
    pub footer_title: Option<String>,

    /// Theme name or path to a CSS file
    pub theme: Option<String>,

    /// Preferred PDF engine (wkhtmltopdf, weasyprint, chromium, or auto)
    pub pdf_engine: Option<String>,

    /// Explicit program paths per engine name
    #[serde(default)]
    pub engines: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/mdexport/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdexport")
            .join("config.toml")
    }

    /// Resolve the document title, with CLI argument taking precedence.
    ///
    /// `None` means the exporter derives it from the document.
    pub fn title<'a>(&'a self, cli_title: Option<&'a str>) -> Option<&'a str> {
        cli_title.or(self.title.as_deref())
    }

    /// Resolve the footer line, with CLI argument taking precedence.
    pub fn footer_title<'a>(&'a self, cli_footer: Option<&'a str>) -> Option<&'a str> {
        cli_footer.or(self.footer_title.as_deref())
    }

    /// Resolve the theme, with CLI argument taking precedence.
    pub fn theme<'a>(&'a self, cli_theme: Option<&'a str>) -> Option<&'a str> {
        cli_theme.or(self.theme.as_deref())
    }

    /// Resolve the engine preference.
    ///
    /// Precedence order:
    /// 1. CLI `--engine` argument
    /// 2. Config file `pdf_engine` setting
    /// 3. Auto-detection
    pub fn engine_preference(&self, cli_engine: Option<EngineChoice>) -> Result<EnginePreference> {
        if let Some(choice) = cli_engine {
            return Ok(choice.into());
        }

        match self.pdf_engine.as_deref() {
            None => Ok(EnginePreference::Auto),
            Some(name) if name.eq_ignore_ascii_case("auto") => Ok(EnginePreference::Auto),
            Some(name) => EngineKind::from_name(name)
                .map(EnginePreference::Only)
                .ok_or_else(|| anyhow!("unknown pdf_engine in config: '{}'", name)),
        }
    }

    /// Build an engine probe over `PATH` with the configured program paths.
    pub fn engine_probe(&self) -> Result<EngineProbe> {
        self.apply_engine_overrides(EngineProbe::from_env())
    }

    /// Apply the `[engines]` table to an existing probe.
    pub fn apply_engine_overrides(&self, mut probe: EngineProbe) -> Result<EngineProbe> {
        for (name, program) in &self.engines {
            let kind = EngineKind::from_name(name)
                .ok_or_else(|| anyhow!("unknown engine in [engines] config: '{}'", name))?;
            probe = probe.with_override(kind, program);
        }
        Ok(probe)
    }
}

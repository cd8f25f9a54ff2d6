//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::feedback::TierTable;

/// Top-level transdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Default sentence bank path.
    #[serde(default = "default_bank")]
    pub bank: PathBuf,
    /// Feedback tiers, validated on load.
    #[serde(default)]
    pub tiers: TierTable,
}

fn default_bank() -> PathBuf {
    PathBuf::from("translations.json")
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            bank: default_bank(),
            tiers: TierTable::default(),
        }
    }
}

impl DrillConfig {
    /// Parse a TOML config string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DrillConfig = toml::from_str(content).context("invalid config TOML")?;
        Ok(config)
    }
}

/// Resolve `${VAR}` references and a leading `~/` in a path setting.
///
/// Substituted values are inserted verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);

    if let Some(tail) = result.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            result = format!("{home}/{tail}");
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `transdrill.toml` in the current directory
/// 2. `~/.config/transdrill/config.toml`
///
/// `TRANSDRILL_BANK` overrides the bank path.
pub fn load_config() -> Result<DrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("transdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = DrillConfig::from_toml_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), tiers = config.tiers.tiers().len(), "loaded config");
            config
        }
        None => DrillConfig::default(),
    };

    if let Ok(bank) = std::env::var("TRANSDRILL_BANK") {
        config.bank = PathBuf::from(bank);
    }

    config.bank = PathBuf::from(resolve_env_vars(&config.bank.to_string_lossy()));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("transdrill"))
}

//! Generator configuration stored in `santa.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::core::matcher::{MAX_ROUNDS, MatchLimits, RETRY_MAX};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "santa.toml";

/// Santa configuration (TOML).
///
/// Missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SantaConfig {
    /// Random draws per participant before it is skipped for the round.
    pub retry_max: u32,

    /// Full matching rounds before giving up. `0` retries forever.
    pub max_rounds: u32,

    /// Fixed RNG seed for reproducible assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SantaConfig {
    fn default() -> Self {
        Self {
            retry_max: RETRY_MAX,
            max_rounds: MAX_ROUNDS,
            seed: None,
        }
    }
}

impl SantaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.retry_max == 0 {
            return Err(anyhow!("retry_max must be > 0"));
        }
        Ok(())
    }

    pub fn limits(&self) -> MatchLimits {
        MatchLimits {
            retry_max: self.retry_max,
            max_rounds: self.max_rounds,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SantaConfig::default()`.
pub fn load_config(path: &Path) -> Result<SantaConfig> {
    if !path.exists() {
        let cfg = SantaConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SantaConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SantaConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config to `path` for `santa init`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<SantaConfig> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let cfg = SantaConfig::default();
    write_config(path, &cfg)?;
    Ok(cfg)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

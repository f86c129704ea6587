//! Config file loading for rosterctl
//!
//! The config file is optional; a missing file means defaults. Database path
//! resolution order: `--db` flag (clap folds in `ROSTERCTL_DB`), then the
//! config file, then `~/.rosterctl/roster.db`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk configuration, read from ~/.rosterctl/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl RosterConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rosterctl").join("config.toml"))
    }

    /// Load the config file if present; a missing file is an empty config.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("failed to parse config file (invalid TOML)")
    }
}

pub fn resolve_db_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let config = RosterConfig::load()?;
    if let Some(database) = config.database {
        return Ok(database.path);
    }

    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".rosterctl").join("roster.db"))
}

//! Run configuration for the `blockfall` binary, read from the environment.
//!
//! | Variable              | Meaning                                  | Default          |
//! |-----------------------|------------------------------------------|------------------|
//! | `BLOCKFALL_SEED`      | shape randomizer seed (u32)              | wall clock       |
//! | `BLOCKFALL_LOG`       | log file path; unset disables logging    | unset            |
//! | `BLOCKFALL_LOG_LEVEL` | `env_logger` filter directive            | `info`           |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::types::GameConfig;

pub const SEED_ENV: &str = "BLOCKFALL_SEED";
pub const LOG_PATH_ENV: &str = "BLOCKFALL_LOG";
pub const LOG_LEVEL_ENV: &str = "BLOCKFALL_LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
    pub game: GameConfig,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get(SEED_ENV) {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("{SEED_ENV}={raw:?} is not a u32"))?,
            None => clock_seed(),
        };
        let log_path = get(LOG_PATH_ENV).map(PathBuf::from);
        let log_level = get(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            seed,
            log_path,
            log_level,
            game: GameConfig::default(),
        })
    }
}

/// Low 32 bits of the wall clock in milliseconds
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

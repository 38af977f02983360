//! Logging setup for the binary.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so records go to a file or nowhere.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::RunConfig;

/// Install the global logger. Returns false when no log file is configured.
pub fn init(config: &RunConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        log::set_max_level(LevelFilter::Off);
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_level)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(true)
}

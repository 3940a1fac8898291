//! Configuration file discovery

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stride_app::AppConfig;
use tracing::debug;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "stride.toml";

/// Resolve the configuration to use
///
/// An explicit path must exist. Without one, `stride.toml` in `dir` is used
/// when present, otherwise the built-in defaults.
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file {} not found", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let candidate: PathBuf = dir.join(CONFIG_FILE);
            if !candidate.exists() {
                debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    debug!("Loading config from {}", path.display());
    let config = AppConfig::from_path(&path)?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

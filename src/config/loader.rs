//! Configuration file loading.
//!
//! There is no implicit config location: a file is read only when the
//! user names one with `--config` or `RTCHECK_CONFIG`. A named file that is
//! missing or malformed stops the run, since silently falling back to the
//! defaults would audit against thresholds the user did not ask for.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::schema::AuditConfig;
use crate::error::{Result, RtcheckError};

/// Parse configuration from YAML text.
pub fn parse_config(content: &str, path: &Path) -> Result<AuditConfig> {
    if content.trim().is_empty() {
        return Ok(AuditConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| RtcheckError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a configuration file.
pub fn load_config_file(path: &Path) -> Result<AuditConfig> {
    if !path.exists() {
        return Err(RtcheckError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    parse_config(&content, path)
}

/// Build the configuration for a run.
///
/// Starts from the named file (or defaults) and applies the host root
/// override last, so `--root` always wins over a `host_root` in the file.
pub fn load_config(path: Option<&Path>, root_override: Option<PathBuf>) -> Result<AuditConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_config_file(path)?
        }
        None => AuditConfig::default(),
    };

    if let Some(root) = root_override {
        config.host_root = root;
    }

    Ok(config)
}

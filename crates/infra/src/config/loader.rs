//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `REELGRID_CLIENT_ID`: OAuth client identifier (required)
//! - `REELGRID_CLIENT_SECRET`: OAuth client secret (required)
//! - `REELGRID_BASE_URL`: API base URL (optional)
//! - `REELGRID_TIMEOUT_SECS`: Request timeout in seconds (optional)
//! - `REELGRID_USER_AGENT`: User agent override (optional)
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `reelgrid.{json,toml}` in the
//! working directory, its parents (two levels) and next to the executable.

use std::path::{Path, PathBuf};

use reelgrid_domain::{ClientConfig, ReelgridError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file. Either
/// way the result is validated before it is returned.
///
/// # Errors
/// Returns `ReelgridError::Config` if configuration cannot be loaded from
/// either source, the file format is invalid, or validation fails.
pub fn load() -> Result<ClientConfig> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment configuration incomplete, trying file");
            load_from_file(None)?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// The client credentials are required; base URL, timeout and user agent
/// fall back to their defaults when unset.
///
/// # Errors
/// Returns `ReelgridError::Config` if a required variable is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<ClientConfig> {
    let client_id = env_var("REELGRID_CLIENT_ID")?;
    let client_secret = env_var("REELGRID_CLIENT_SECRET")?;

    let mut config = ClientConfig::new(client_id, client_secret);
    if let Ok(base_url) = std::env::var("REELGRID_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    if let Ok(raw) = std::env::var("REELGRID_TIMEOUT_SECS") {
        let timeout = raw
            .parse::<u64>()
            .map_err(|e| ReelgridError::Config(format!("invalid timeout: {e}")))?;
        config = config.with_timeout_secs(timeout);
    }
    if let Ok(agent) = std::env::var("REELGRID_USER_AGENT") {
        config.user_agent = agent;
    }
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports both JSON
/// and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ReelgridError::Config` if no file is found, the file cannot be
/// read, or the contents do not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ReelgridError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ReelgridError::Config("no config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ReelgridError::Config(format!("failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, detecting the format from the
/// file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ReelgridError::Config(format!("invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ReelgridError::Config(format!("invalid JSON format: {e}"))),
        _ => Err(ReelgridError::Config(format!("unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file, returning the
/// first one that exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.json", "config.toml", "reelgrid.json", "reelgrid.toml"];
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for dir in [cwd.clone(), cwd.join(".."), cwd.join("../..")] {
            candidates.extend(names.iter().map(|name| dir.join(name)));
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(names.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ReelgridError::Config(format!("missing required environment variable: {key}"))
    })
}

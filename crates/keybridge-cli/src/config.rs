//! TOML-based configuration for the keybridge tool.
//!
//! Resolution order for the config file:
//! 1. the path given as first command-line argument,
//! 2. the `KEYBRIDGE_CONFIG` environment variable,
//! 3. `$XDG_CONFIG_HOME/keybridge/config.toml` (or `~/.config/keybridge/config.toml`).
//!
//! A missing file is not an error: the defaults below apply.
//! `keybridge --init [path]` writes them out with [`init_config`].
//!
//! ```toml
//! [keyboard]
//! key_map = "en_US"
//!
//! [logging]
//! level = "info"
//!
//! [output]
//! pretty = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "KEYBRIDGE_CONFIG";

/// Why a config file could not be located, read or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("no config directory: set KEYBRIDGE_CONFIG or HOME")]
    NoPlatformConfigDir,

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote keyboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    /// Character map matching the layout configured on the remote device.
    #[serde(default = "default_key_map")]
    pub key_map: String,
}

/// `tracing` settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Action output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print each JSON action. The output is then a stream of
    /// multi-line JSON values instead of one action per line.
    #[serde(default)]
    pub pretty: bool,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

fn default_key_map() -> String {
    keybridge_core::charmap::EN_US.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            key_map: default_key_map(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Locating, loading and saving ──────────────────────────────────────────────

/// Resolves the config file path from an explicit argument, the environment,
/// or the platform default.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if neither an explicit path
/// nor a home directory is available.
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or(ConfigError::NoPlatformConfigDir)?;
    Ok(base.join("keybridge").join("config.toml"))
}

/// Reads the config at `path`. A file that does not exist yields the defaults.
///
/// # Errors
///
/// [`ConfigError::Io`] if the file exists but cannot be read,
/// [`ConfigError::Parse`] if it is not a valid config.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `config` to `path`, creating missing parent directories.
///
/// # Errors
///
/// [`ConfigError::Io`] on any file-system failure, [`ConfigError::Serialize`]
/// if encoding fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let encoded = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, encoded).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the default config to `path` unless a file is already there.
///
/// Returns `true` if a file was created.
///
/// # Errors
///
/// Same as [`save_config_to`].
pub fn init_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    save_config_to(path, &AppConfig::default())?;
    Ok(true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Bootstrap configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error; the service starts on defaults. A
//! malformed file is.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable naming the remote store base URL
pub const ENV_STORE_URL: &str = "JRNL_STORE_URL";
/// Environment variable carrying the remote store access token
pub const ENV_STORE_TOKEN: &str = "JRNL_STORE_TOKEN";
/// Environment variable overriding the HTTP listen port
pub const ENV_PORT: &str = "JRNL_PORT";
/// Environment variable overriding the default log directive
pub const ENV_LOG_LEVEL: &str = "JRNL_LOG_LEVEL";

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 5780;
/// Default remote call timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of `jrnl-api.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,

    /// HTTP listen port
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote document store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL, e.g. `https://store.example.com/v1`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request (optional)
    #[serde(default)]
    pub api_token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub store_url: Option<String>,
    pub api_token: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Effective settings after all tiers have been applied
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub store_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub port: u16,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub log_level: String,
}

/// Platform config file location: `<config_dir>/jrnl/jrnl-api.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jrnl").join("jrnl-api.toml"))
}

/// Load the TOML file, falling back to defaults when it does not exist
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            );
            return Ok(TomlConfig::default());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Merge command line, environment, TOML and defaults into one config
///
/// The store URL has no compiled default; failing to find it anywhere is a
/// configuration error.
pub fn resolve(overrides: &ConfigOverrides, toml_config: &TomlConfig) -> Result<ServiceConfig> {
    let store_url = first_set(
        overrides.store_url.clone(),
        ENV_STORE_URL,
        toml_config.store.base_url.clone(),
    )
    .ok_or_else(|| {
        Error::Config(format!(
            "Remote store URL not configured. Please configure using one of:\n\
             1. Command line: --store-url https://...\n\
             2. Environment: {}=https://...\n\
             3. TOML config: [store] base_url = \"https://...\"",
            ENV_STORE_URL
        ))
    })?;

    if !(store_url.starts_with("http://") || store_url.starts_with("https://")) {
        return Err(Error::Config(format!(
            "Remote store URL must be http(s): {}",
            store_url
        )));
    }

    let api_token = first_set(
        overrides.api_token.clone(),
        ENV_STORE_TOKEN,
        toml_config.store.api_token.clone(),
    );

    let port = match overrides.port {
        Some(port) => port,
        None => match std::env::var(ENV_PORT) {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("Invalid {} {:?}: {}", ENV_PORT, raw, e)))?,
            Err(_) => toml_config.port.unwrap_or(DEFAULT_PORT),
        },
    };

    Ok(ServiceConfig {
        store_url: store_url.trim_end_matches('/').to_string(),
        api_token,
        timeout: Duration::from_secs(toml_config.store.timeout_secs),
        port,
        log_level: first_set(
            overrides.log_level.clone(),
            ENV_LOG_LEVEL,
            Some(toml_config.logging.level.clone()),
        )
        .unwrap_or_else(default_log_level),
    })
}

/// First non-blank value in CLI → ENV → TOML order
fn first_set(cli: Option<String>, env_var_name: &str, toml: Option<String>) -> Option<String> {
    let non_blank = |v: &String| !v.trim().is_empty();

    if let Some(value) = cli.filter(non_blank) {
        return Some(value);
    }
    if let Some(value) = std::env::var(env_var_name).ok().filter(non_blank) {
        return Some(value);
    }
    toml.filter(non_blank)
}

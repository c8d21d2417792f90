use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

struct Defaults {}

impl Defaults {
    fn router_port() -> u16 {
        3000
    }

    fn tls() -> bool {
        false
    }

    fn base_url() -> String {
        String::from("https://www.peeringdb.com/api")
    }

    fn timeout_secs() -> u64 {
        10
    }

    // PeeringDB throttles anonymous clients, so stay sequential unless asked
    fn concurrency() -> usize {
        1
    }

    fn output_directory() -> PathBuf {
        PathBuf::from(".")
    }

    fn registry() -> RegistryConfigSpec {
        RegistryConfigSpec {
            base_url: Self::base_url(),
            api_key_file: None,
            timeout_secs: Self::timeout_secs(),
            concurrency: Self::concurrency(),
        }
    }

    fn output() -> OutputConfigSpec {
        OutputConfigSpec {
            directory: Self::output_directory(),
        }
    }
}

/// Config (toml) representation of the router to reconcile
#[derive(Clone, Debug, Deserialize)]
pub(super) struct RouterConfigSpec {
    pub(super) address: String,
    pub(super) username: String,
    // Password is kept out of the config file itself
    pub(super) password_file: PathBuf,
    // Junos REST API port
    #[serde(default = "Defaults::router_port")]
    pub(super) port: u16,
    #[serde(default = "Defaults::tls")]
    pub(super) tls: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RegistryConfigSpec {
    #[serde(default = "Defaults::base_url")]
    pub(super) base_url: String,
    pub(super) api_key_file: Option<PathBuf>,
    // Per-request timeout
    #[serde(default = "Defaults::timeout_secs")]
    pub(super) timeout_secs: u64,
    // Max registry requests in flight
    #[serde(default = "Defaults::concurrency")]
    pub(super) concurrency: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct OutputConfigSpec {
    #[serde(default = "Defaults::output_directory")]
    pub(super) directory: PathBuf,
}

#[derive(Debug, Deserialize)]
pub(super) struct RunConfigSpec {
    pub(super) router: RouterConfigSpec,
    #[serde(default = "Defaults::registry")]
    pub(super) registry: RegistryConfigSpec,
    #[serde(default = "Defaults::output")]
    pub(super) output: OutputConfigSpec,
}

impl RunConfigSpec {
    pub(super) fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_to_string(path)?;
        Self::parse(&contents)
    }

    pub(super) fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: RunConfigSpec = toml::from_str(contents)?;
        if config.registry.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "registry.concurrency".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.registry.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "registry.timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(config)
    }
}

/// Read a secret file, dropping the trailing newline
pub(super) fn read_secret(path: &Path) -> Result<String, ConfigError> {
    let secret = read_to_string(path)?;
    Ok(secret.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn read_to_string(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

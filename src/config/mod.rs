mod file;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Parse a TOML config file and return a RunConfig
///
/// Secret files referenced by the config are read here, once.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
    let spec = file::RunConfigSpec::from_file(path.as_ref())?;
    RunConfig::from_spec(spec)
}

#[derive(Debug)]
pub struct RunConfig {
    pub router: RouterConfig,
    pub registry: RegistryConfig,
    pub output: OutputConfig,
}

pub struct RouterConfig {
    pub address: String,
    pub username: String,
    pub password: String,
    pub port: u16,
    pub tls: bool,
}

impl RouterConfig {
    pub fn base_url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.address, self.port)
    }
}

impl fmt::Debug for RouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RouterConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .finish()
    }
}

#[derive(Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub concurrency: usize,
}

impl fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl RunConfig {
    fn from_spec(spec: file::RunConfigSpec) -> Result<Self, ConfigError> {
        let api_key = match &spec.registry.api_key_file {
            Some(path) => Some(file::read_secret(path)?),
            None => None,
        };
        Ok(Self {
            router: RouterConfig {
                password: file::read_secret(&spec.router.password_file)?,
                address: spec.router.address,
                username: spec.router.username,
                port: spec.router.port,
                tls: spec.router.tls,
            },
            registry: RegistryConfig {
                base_url: spec.registry.base_url,
                api_key,
                timeout_secs: spec.registry.timeout_secs,
                concurrency: spec.registry.concurrency,
            },
            output: OutputConfig {
                directory: spec.output.directory,
            },
        })
    }
}

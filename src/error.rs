//! Error types for max-prefix reconciliation.
//!
//! Structural problems with the configuration document are fatal. Registry
//! lookups and group resolution fail per peer and are recovered by the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::family::Family;

/// Configuration document does not have the expected shape
#[derive(Debug, Error, PartialEq)]
#[error("Malformed configuration at '{path}': {reason}")]
pub struct MalformedConfigError {
    /// Dotted path to the offending node (e.g. `group[2].peer-as`)
    pub path: String,
    pub reason: String,
}

impl MalformedConfigError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A single ASN's registry fetch failed
#[derive(Debug, Error)]
pub enum RegistryLookupError {
    /// Registry has no record for this ASN
    #[error("AS{0} not found in registry")]
    NotFound(u32),
    /// Registry answered with a non-success status
    #[error("Registry returned HTTP {status} for AS{asn}")]
    Status { asn: u32, status: u16 },
    #[error("Unable to decode registry response for AS{asn}: {reason}")]
    Decode { asn: u32, reason: String },
    #[error("Registry request for AS{asn} failed: {source}")]
    Transport {
        asn: u32,
        #[source]
        source: reqwest::Error,
    },
}

impl RegistryLookupError {
    pub fn asn(&self) -> u32 {
        use RegistryLookupError::*;
        match self {
            NotFound(asn) => *asn,
            Status { asn, .. } | Decode { asn, .. } | Transport { asn, .. } => *asn,
        }
    }
}

/// A mismatch could not be traced back to a configuration group
#[derive(Debug, Error, PartialEq)]
#[error("No group with peer-as {asn} configures {family} unicast")]
pub struct GroupResolutionGap {
    pub asn: u32,
    pub family: Family,
}

/// The registry HTTP client could not be built
#[derive(Debug, Error)]
pub enum RegistryClientError {
    #[error("Invalid value for registry.api_key_file: key is not a valid header value")]
    InvalidApiKey,
    #[error("Unable to build registry client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Retrieving the configuration document failed
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Configuration document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Router request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Router returned HTTP {0}")]
    Status(u16),
}

/// Run configuration (TOML) could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Writing command files failed
#[derive(Debug, Error)]
#[error("Unable to write {path}: {source}")]
pub struct OutputError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

mod file;
mod rest;

pub use file::FileSource;
pub use rest::JunosRest;

use serde_json::Value;

use crate::error::SourceError;

/// Somewhere a `protocols bgp` configuration document can be read from
#[async_trait::async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch(&self) -> Result<Value, SourceError>;

    /// Where the document came from, for logging
    fn describe(&self) -> String;
}

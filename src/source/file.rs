use std::path::PathBuf;

use log::debug;
use serde_json::Value;

use super::ConfigSource;
use crate::error::SourceError;

/// A saved document, e.g. `show configuration protocols bgp | display json`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ConfigSource for FileSource {
    async fn fetch(&self) -> Result<Value, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!("Read {} bytes from {}", contents.len(), self.path.display());
        Ok(serde_json::from_str(&contents)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_file() {
        let source = FileSource::new("./fixtures/bgp-attribute-style.json");
        let document = source.fetch().await.unwrap();
        assert!(document.get("configuration").is_some());
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let source = FileSource::new("./fixtures/nope.json");
        assert!(matches!(source.fetch().await, Err(SourceError::Io { .. })));
    }
}

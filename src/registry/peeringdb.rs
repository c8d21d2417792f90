use std::time::Duration;

use log::trace;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;

use super::Registry;
use crate::config::RegistryConfig;
use crate::error::{RegistryClientError, RegistryLookupError};
use crate::models::AnnouncedLimits;

const USER_AGENT: &str = concat!("maxpfx/", env!("CARGO_PKG_VERSION"));

/// PeeringDB `net` API client
#[derive(Debug, Clone)]
pub struct PeeringDb {
    http: reqwest::Client,
    base_url: String,
}

impl PeeringDb {
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryClientError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            // Do not log the key, not even in the error
            let mut value = HeaderValue::from_str(&format!("Api-Key {}", key))
                .map_err(|_| RegistryClientError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn build_net_url(&self) -> String {
        format!("{}/net", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl Registry for PeeringDb {
    async fn lookup(&self, asn: u32) -> Result<AnnouncedLimits, RegistryLookupError> {
        let resp = self
            .http
            .get(self.build_net_url())
            .query(&[("asn", asn)])
            .send()
            .await
            .map_err(|source| RegistryLookupError::Transport { asn, source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RegistryLookupError::Status {
                asn,
                status: status.as_u16(),
            });
        }
        let body = resp
            .text()
            .await
            .map_err(|source| RegistryLookupError::Transport { asn, source })?;
        trace!("PeeringDB response for AS{}: {}", asn, body);
        parse_net_response(asn, &body)
    }
}

#[derive(Debug, Deserialize)]
struct NetResponse {
    #[serde(default)]
    data: Vec<NetRecord>,
}

#[derive(Debug, Deserialize)]
struct NetRecord {
    // Networks that never filled these in come back as null
    info_prefixes4: Option<u32>,
    info_prefixes6: Option<u32>,
}

pub(super) fn parse_net_response(
    asn: u32,
    body: &str,
) -> Result<AnnouncedLimits, RegistryLookupError> {
    let response: NetResponse =
        serde_json::from_str(body).map_err(|err| RegistryLookupError::Decode {
            asn,
            reason: err.to_string(),
        })?;
    let record = response
        .data
        .into_iter()
        .next()
        .ok_or(RegistryLookupError::NotFound(asn))?;
    Ok(AnnouncedLimits {
        v4: record.info_prefixes4.unwrap_or(0),
        v6: record.info_prefixes6.unwrap_or(0),
    })
}

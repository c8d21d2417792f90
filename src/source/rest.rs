use std::time::Duration;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use super::ConfigSource;
use crate::config::RouterConfig;
use crate::error::SourceError;

// Only the committed `protocols bgp` hierarchy is needed
const GET_BGP_CONFIG: &str = "<get-configuration database=\"committed\">\
<configuration><protocols><bgp/></protocols></configuration>\
</get-configuration>";

const TIMEOUT: Duration = Duration::from_secs(30);

/// Junos REST API (`system services rest`) client
pub struct JunosRest<'a> {
    http: reqwest::Client,
    router: &'a RouterConfig,
}

impl<'a> JunosRest<'a> {
    pub fn new(router: &'a RouterConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self { http, router })
    }

    fn rpc_url(&self) -> String {
        format!("{}/rpc", self.router.base_url())
    }
}

#[async_trait::async_trait]
impl<'a> ConfigSource for JunosRest<'a> {
    async fn fetch(&self) -> Result<Value, SourceError> {
        debug!("Requesting BGP configuration from {}", self.rpc_url());
        let resp = self
            .http
            .post(self.rpc_url())
            .basic_auth(&self.router.username, Some(&self.router.password))
            .header(CONTENT_TYPE, "application/xml")
            .header(ACCEPT, "application/json")
            .body(GET_BGP_CONFIG)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.router.address.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url() {
        let router = RouterConfig {
            address: "192.0.2.1".to_string(),
            username: "netconf".to_string(),
            password: "secret".to_string(),
            port: 3000,
            tls: false,
        };
        let source = JunosRest::new(&router).unwrap();
        assert_eq!(source.rpc_url(), "http://192.0.2.1:3000/rpc");
        assert_eq!(source.describe(), "192.0.2.1");
    }
}

//! HTTP client wrapper - REST binding of the remote table

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;

use crate::config::ServiceConfig;
use crate::constants::INTEGRATION_HEADER;
use crate::frame::FrameConfig;
use crate::models::{AuthType, Dish};
use crate::network::error::SyncError;
use crate::network::table::RemoteTable;

/// Table service reached over HTTP
pub struct HttpTable {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpTable {
    pub fn new(config: ServiceConfig) -> Self {
        HttpTable {
            client: create_client(config.timeout()),
            config,
        }
    }

    /// Attach integration id, accept header and credentials
    fn authorize(&self, req_builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req_builder = req_builder
            .header(INTEGRATION_HEADER, &self.config.integration_id)
            .header("Accept", "application/json");

        match &self.config.auth {
            AuthType::Bearer { token } => req_builder.header("Authorization", format!("Bearer {}", token)),
            AuthType::Basic { username, password } => {
                let credentials = format!("{}:{}", username, password);
                let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
                req_builder.header("Authorization", format!("Basic {}", encoded))
            }
            AuthType::None => req_builder,
        }
    }
}

/// `{endpoint}/tables/{table}/rows`, with `table` as a single encoded segment
fn rows_url(endpoint: &str, table: &str) -> Result<reqwest::Url, SyncError> {
    let mut url = reqwest::Url::parse(endpoint).map_err(|e| SyncError::Endpoint(format!("{endpoint}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| SyncError::Endpoint(format!("{endpoint}: not a base URL")))?
        .pop_if_empty()
        .extend(["tables", table, "rows"]);
    Ok(url)
}

/// Read the body, turning non-2xx statuses into errors
async fn read_body(resp: reqwest::Response) -> Result<String, SyncError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(SyncError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[async_trait]
impl RemoteTable for HttpTable {
    async fn fetch(&self, config: &FrameConfig) -> Result<Vec<Dish>, SyncError> {
        let url = rows_url(&self.config.endpoint, &config.table_name)?;
        tracing::debug!(url = %url, limit = config.limit, offset = config.offset, "Pulling rows");

        let resp = self
            .authorize(self.client.get(url))
            .query(&[("limit", config.limit), ("offset", config.offset)])
            .send()
            .await?;
        let body = read_body(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn insert(&self, table: &str, dish: &Dish) -> Result<(), SyncError> {
        let url = rows_url(&self.config.endpoint, table)?;
        tracing::debug!(url = %url, title = ?dish.title, "Pushing row");

        let resp = self.authorize(self.client.post(url)).json(dish).send().await?;
        read_body(resp).await?;
        Ok(())
    }
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

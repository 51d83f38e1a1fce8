use async_trait::async_trait;
use reqwest::Url;

use crate::error::NetworkOrParseError;
use crate::models::response::HealthStatus;

pub const LOCAL_SERVER_URL: &str = "http://localhost:5000/";

/// Anything the status view can ask for a [`HealthStatus`].
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<HealthStatus, NetworkOrParseError>;
}

#[derive(Debug, Clone)]
pub struct StatusClient {
    url: Url,
    client: reqwest::Client,
}

impl StatusClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Client for the server on its default local address.
    pub fn local() -> anyhow::Result<Self> {
        Ok(Self::new(Url::parse(LOCAL_SERVER_URL)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn fetch_status(&self) -> Result<HealthStatus, NetworkOrParseError> {
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetworkOrParseError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

use crate::error::{HandlerError, Result};
use reqwest::{Client, StatusCode};

/// Looks up the caller's public IP with a single plain-text GET.
#[derive(Debug, Clone)]
pub struct IpClient {
    client: Client,
    endpoint: String,
}

impl IpClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HandlerError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the response body exactly as received.
    ///
    /// Anything other than a `200` is rejected before the body is read, and
    /// an empty body counts as a missing IP rather than a valid answer.
    pub async fn fetch_ip(&self) -> Result<String> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(HandlerError::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(HandlerError::unexpected_status(status.as_u16()));
        }

        let ip = resp.text().await.map_err(HandlerError::BodyRead)?;
        if ip.is_empty() {
            return Err(HandlerError::EmptyIp);
        }
        Ok(ip)
    }
}

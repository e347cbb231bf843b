use lambda_http::http::{StatusCode, header::CONTENT_TYPE};
use lambda_http::{Body, Request, RequestExt, Response};

use crate::client::IpClient;
use crate::config::HandlerConfig;
use crate::error::Result;
use crate::greeting::{Greeting, resolve_name};

/// Answers each request with a greeting and the caller's public IP.
///
/// Holds no per-invocation state, so one instance serves every event the
/// runtime hands to this process.
#[derive(Debug, Clone)]
pub struct GreetingHandler {
    client: IpClient,
}

impl GreetingHandler {
    pub fn new(config: HandlerConfig) -> Result<Self> {
        Ok(Self {
            client: IpClient::new(config.endpoint)?,
        })
    }

    #[tracing::instrument(
        name = "greeting",
        skip_all,
        fields(method = %request.method(), path = %request.uri().path())
    )]
    pub async fn handle(&self, request: &Request) -> Result<Response<Body>> {
        let ip = match self.client.fetch_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                tracing::error!(endpoint = self.client.endpoint(), error = %e, "IP lookup failed");
                return Err(e);
            }
        };

        let params = request.query_string_parameters_ref();
        let name = resolve_name(params.and_then(|p| p.first("name")));
        tracing::debug!(name, "building greeting");

        let body = Greeting::new(name, ip).to_json()?;
        let resp = Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))?;
        Ok(resp)
    }
}

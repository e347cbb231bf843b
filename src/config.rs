/// Where the caller's IP is looked up. Changing it takes a rebuild.
pub const DEFAULT_HTTP_GET_ADDRESS: &str = "https://checkip.amazonaws.com";

/// Name used when the request carries none.
pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub endpoint: String,
}

impl HandlerConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_HTTP_GET_ADDRESS)
    }
}

use crate::client::create_http_client;
use crate::error::Result;
use crate::rest::RequestSpec;
use reqwest::blocking::Client;
use url::Url;

/// Status and body text of an HTTP exchange, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Create a RawResponse from a status code and body text
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport performs the network I/O for a fully assembled request.
///
/// Implementations return `Err(ShipperError::Transport)` only when no HTTP
/// response was obtained. Any response, whatever its status, is returned as
/// a [`RawResponse`]; status interpretation happens in the requestor.
pub trait Transport: Send + Sync {
    /// Send the request and return whatever the server answered
    fn execute(&self, request: &RequestSpec) -> Result<RawResponse>;
}

/// Default transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default client settings
    pub fn new() -> Result<Self> {
        Ok(ReqwestTransport {
            client: create_http_client()?,
        })
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &RequestSpec) -> Result<RawResponse> {
        let mut url = Url::parse(&request.url)?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let mut builder = self.client.request(request.method.clone(), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(302, "").is_success());
        assert!(!RawResponse::new(500, "oops").is_success());
    }
}

use crate::client::Config;
use crate::error::{Result, ShipperError};
use crate::response::{Param, Response};
use crate::transport::{ReqwestTransport, Transport};
use reqwest::Method;
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Request headers, by name
pub type Headers = BTreeMap<String, String>;

/// Client marker sent with every request
pub const USER_AGENT: &str = concat!("Shipper/", env!("CARGO_PKG_VERSION"));

/// A fully resolved HTTP request, ready for a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Endpoint URL without query string
    pub url: String,
    /// Flattened, not yet percent-encoded, query pairs
    pub query: Vec<(String, String)>,
    /// Merged headers
    pub headers: Headers,
    /// JSON payload, only present for a non-empty body
    pub body: Option<String>,
}

impl RequestSpec {
    /// Get the first query value for a key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a non-empty `apiKey` ends up in the query
    pub fn has_api_key(&self) -> bool {
        self.query_value("apiKey").is_some_and(|key| !key.is_empty())
    }
}

/// Requestor merges configuration with per-call parameters and sends the
/// result through its transport.
#[derive(Clone)]
pub struct Requestor {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Requestor {
    /// Create a requestor using the default reqwest transport
    pub fn new(config: Config) -> Result<Self> {
        Ok(Requestor {
            config,
            transport: Arc::new(ReqwestTransport::new()?),
        })
    }

    /// Create a requestor on top of a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Requestor { config, transport }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configuration for modification
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Default headers overlaid with the caller's; the caller wins on collision.
    /// Header names compare case-insensitively.
    pub fn build_headers(&self, headers: &Headers) -> Headers {
        let mut merged = Headers::new();
        merged.insert("User-Agent".to_string(), USER_AGENT.to_string());
        for (name, value) in headers {
            merged.retain(|k, _| !k.eq_ignore_ascii_case(name));
            merged.insert(name.clone(), value.clone());
        }
        merged
    }

    /// `apiKey` overlaid with the caller's query; the caller wins on collision
    pub fn build_query(&self, query: &Param) -> Param {
        let mut merged = Param::new();
        merged.insert(
            "apiKey".to_string(),
            Value::String(self.config.api_key.as_str().to_string()),
        );
        merged.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// The caller's body fields
    pub fn build_body(&self, body: &Param) -> Param {
        let mut merged = Param::new();
        merged.extend(body.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Resolve a request without sending it
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &Param,
        body: &Param,
        headers: &Headers,
    ) -> Result<RequestSpec> {
        if !path.starts_with('/') {
            return Err(ShipperError::RequestBuild(format!(
                "endpoint path must start with '/': {}",
                path
            )));
        }

        let body = self.build_body(body);
        let body = if body.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&body)?)
        };

        Ok(RequestSpec {
            method,
            url: self.config.endpoint_url(path),
            query: flatten_query(&self.build_query(query)),
            headers: self.build_headers(headers),
            body,
        })
    }

    /// Send a request and return the response body verbatim.
    ///
    /// Non-2xx answers become [`ShipperError::HttpStatus`]; failures that
    /// produced no answer at all become [`ShipperError::Transport`].
    pub fn send_request(
        &self,
        method: Method,
        path: &str,
        query: &Param,
        body: &Param,
        headers: &Headers,
    ) -> Result<String> {
        let request = self.build_request(method, path, query, body, headers)?;

        if !request.has_api_key() {
            tracing::warn!(path, "sending request without an API key");
        }

        let start = Instant::now();
        let response = self.transport.execute(&request).map_err(|e| {
            tracing::debug!(method = %request.method, path, error = %e, "request failed");
            e
        })?;

        tracing::debug!(
            method = %request.method,
            path,
            status = response.status,
            elapsed = ?start.elapsed(),
            "request completed"
        );

        if !response.is_success() {
            return Err(ShipperError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    /// Send a request and decode the JSON response
    pub fn call(
        &self,
        method: Method,
        path: &str,
        query: &Param,
        body: &Param,
        headers: &Headers,
    ) -> Result<Response> {
        let text = self.send_request(method, path, query, body, headers)?;
        Response::from_text(&text)
    }
}

impl std::fmt::Debug for Requestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requestor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Flatten a query mapping into pairs the way the API expects:
/// booleans as `1`/`0`, `null` omitted, sequences and mappings as
/// `key[index]` / `key[name]` entries. Keys are emitted in sorted order.
pub fn flatten_query(query: &Param) -> Vec<(String, String)> {
    let mut keys: Vec<&String> = query.keys().collect();
    keys.sort();

    let mut pairs = Vec::new();
    for key in keys {
        push_pairs(key.clone(), &query[key], &mut pairs);
    }
    pairs
}

fn push_pairs(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((prefix, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((prefix, format_number(n))),
        Value::String(s) => pairs.push((prefix, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(format!("{}[{}]", prefix, index), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                push_pairs(format!("{}[{}]", prefix, key), item, pairs);
            }
        }
    }
}

fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

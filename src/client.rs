use crate::apikey::ApiKey;
use crate::error::{Result, ShipperError};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Root of the sandbox API
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.shipper.id/public/v1";

/// Root of the production API
pub const PRODUCTION_BASE_URL: &str = "https://api.shipper.id/prod/public/v1";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "SHIPPER_API_KEY";

/// Environment variable switching to production (`1` or `true`)
pub const ENV_PRODUCTION: &str = "SHIPPER_PRODUCTION";

/// Create the default HTTP client for API requests
pub fn create_http_client() -> Result<Client> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

/// Configuration for the Shipper API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API key sent as the `apiKey` query parameter
    pub api_key: ApiKey,
    /// API root every endpoint path is appended to
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: ApiKey::default(),
            base_url: SANDBOX_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a new sandbox configuration with the given API key
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Config {
            api_key: api_key.into(),
            ..Config::default()
        }
    }

    /// Build a configuration from `SHIPPER_API_KEY` and `SHIPPER_PRODUCTION`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ShipperError::Config(format!("{} is not set", ENV_API_KEY)))?;

        let production = match lookup(ENV_PRODUCTION).as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ShipperError::Config(format!(
                    "{} must be 0, 1, true or false, got {:?}",
                    ENV_PRODUCTION, other
                )))
            }
        };

        Ok(Config::new(api_key).with_production_mode(production))
    }

    /// Set production mode (builder form of [`Config::set_production_mode`])
    pub fn with_production_mode(mut self, enabled: bool) -> Self {
        self.set_production_mode(enabled);
        self
    }

    /// Use a custom API root, e.g. a local mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Store the API key used by every subsequent request
    pub fn set_api_key(&mut self, api_key: impl Into<ApiKey>) {
        self.api_key = api_key.into();
    }

    /// Switch to the production API root.
    ///
    /// Passing `false` leaves the current base URL untouched: it does not
    /// go back to the sandbox. Use [`Config::set_sandbox_mode`] for that.
    pub fn set_production_mode(&mut self, enabled: bool) {
        if enabled {
            self.base_url = PRODUCTION_BASE_URL.to_string();
        }
    }

    /// Switch back to the sandbox API root
    pub fn set_sandbox_mode(&mut self) {
        self.base_url = SANDBOX_BASE_URL.to_string();
    }

    /// Whether requests go to the production API root
    pub fn is_production(&self) -> bool {
        self.base_url == PRODUCTION_BASE_URL
    }

    /// Get the full URL for an endpoint path such as `/orders/domestics`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

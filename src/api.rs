use crate::apikey::ApiKey;
use crate::client::Config;
use crate::error::Result;
use crate::resources::{Awb, Location, Orders, Pickup, Rates, Tracking};
use crate::rest::Requestor;
use crate::transport::Transport;
use std::sync::Arc;

/// Client for the Shipper API.
///
/// Configure it once, then borrow endpoint groups from it. Configuration
/// setters take `&mut self`, so they cannot race with requests in flight.
#[derive(Debug, Clone)]
pub struct Shipper {
    requestor: Requestor,
}

impl Shipper {
    /// Create a client using the default HTTP transport
    pub fn new(config: Config) -> Result<Self> {
        Ok(Shipper {
            requestor: Requestor::new(config)?,
        })
    }

    /// Create a client configured from `SHIPPER_API_KEY` / `SHIPPER_PRODUCTION`
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Shipper {
            requestor: Requestor::with_transport(config, transport),
        }
    }

    /// Store the API key used by every subsequent request
    pub fn set_api_key(&mut self, api_key: impl Into<ApiKey>) -> &mut Self {
        self.requestor.config_mut().set_api_key(api_key);
        self
    }

    /// Switch to the production API. `false` leaves the base URL untouched.
    pub fn set_production_mode(&mut self, enabled: bool) -> &mut Self {
        self.requestor.config_mut().set_production_mode(enabled);
        self
    }

    /// Switch back to the sandbox API
    pub fn set_sandbox_mode(&mut self) -> &mut Self {
        self.requestor.config_mut().set_sandbox_mode();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        self.requestor.config()
    }

    /// Get the underlying requestor, for endpoints not covered by this crate
    pub fn requestor(&self) -> &Requestor {
        &self.requestor
    }

    /// Air waybill endpoints
    pub fn awb(&self) -> Awb<'_> {
        Awb::new(&self.requestor)
    }

    /// Location lookup endpoints
    pub fn location(&self) -> Location<'_> {
        Location::new(&self.requestor)
    }

    /// Order endpoints
    pub fn orders(&self) -> Orders<'_> {
        Orders::new(&self.requestor)
    }

    /// Pickup endpoints
    pub fn pickup(&self) -> Pickup<'_> {
        Pickup::new(&self.requestor)
    }

    /// Rate quote endpoints
    pub fn rates(&self) -> Rates<'_> {
        Rates::new(&self.requestor)
    }

    /// Tracking endpoints
    pub fn tracking(&self) -> Tracking<'_> {
        Tracking::new(&self.requestor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

    #[test]
    fn test_shipper_creation() {
        let shipper = Shipper::new(Config::new("key")).unwrap();
        assert_eq!(shipper.config().base_url, SANDBOX_BASE_URL);
        assert_eq!(shipper.config().api_key.as_str(), "key");
    }

    #[test]
    fn test_shipper_configuration_setters() {
        let mut shipper = Shipper::new(Config::default()).unwrap();
        shipper.set_api_key("abc").set_production_mode(true);
        assert_eq!(shipper.config().api_key.as_str(), "abc");
        assert_eq!(shipper.config().base_url, PRODUCTION_BASE_URL);

        shipper.set_production_mode(false);
        assert_eq!(shipper.config().base_url, PRODUCTION_BASE_URL);

        shipper.set_sandbox_mode();
        assert_eq!(shipper.config().base_url, SANDBOX_BASE_URL);
    }
}

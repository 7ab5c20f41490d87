//! # shipper - Shipper logistics API client for Rust
//!
//! A blocking client for the [Shipper](https://shipper.id) REST API: rate
//! quotes, order creation, pickups, tracking and location lookup.
//!
//! ## Features
//!
//! - Parameters are validated against each operation's schema before any
//!   network call: missing keys and wrongly typed values are rejected
//! - The API key is injected into every request as the `apiKey` query parameter
//! - Sandbox and production API roots
//! - Responses are returned as untyped JSON with path-based access
//! - Pluggable [`Transport`] for testing
//!
//! ## Basic Usage
//!
//! ```no_run
//! use shipper::{json, params, Config, Shipper};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = Shipper::new(Config::new("my-api-key"))?;
//!     client.set_production_mode(false);
//!
//!     let rates = client.rates().get_domestic_rates(&params(json!({
//!         "o": 4773, "d": 4773,
//!         "l": 10, "w": 10, "h": 10,
//!         "wt": 1.5, "v": 100000,
//!     })))?;
//!
//!     println!("status: {:?}", rates.status());
//!     println!("first rate: {:?}", rates.get("data/rates/logistic/regular/0"));
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! ```
//! use shipper::{json, params, Config, Shipper, ShipperError};
//!
//! let client = Shipper::new(Config::new("my-api-key"))?;
//! let err = client
//!     .orders()
//!     .update_order("5b3a", &params(json!({"l": 1, "w": 1, "h": 1})))
//!     .unwrap_err();
//!
//! assert!(matches!(err, ShipperError::MissingParameter { ref name } if name == "wt"));
//! # Ok::<(), ShipperError>(())
//! ```

pub mod api;
pub mod apikey;
pub mod client;
pub mod error;
pub mod resources;
pub mod response;
pub mod rest;
pub mod time;
pub mod transport;
pub mod validator;

// Re-export main types for convenience
pub use api::Shipper;
pub use apikey::ApiKey;
pub use client::{Config, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use error::{Result, ShipperError};
pub use response::{params, Param, Response};
pub use rest::{Headers, RequestSpec, Requestor};
pub use time::PickupTime;
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use validator::{Schema, ValueKind};

// Re-export serde_json for convenience
pub use serde_json::json;

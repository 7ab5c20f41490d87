//! Endpoint groups of the Shipper API.
//!
//! Each group borrows the client's [`Requestor`](crate::rest::Requestor),
//! validates parameters against its declared schemas, and returns the decoded
//! JSON [`Response`](crate::response::Response).

pub mod awb;
pub mod location;
pub mod order;
pub mod pickup;
pub mod rates;
pub mod tracking;

pub use awb::Awb;
pub use location::Location;
pub use order::Orders;
pub use pickup::Pickup;
pub use rates::Rates;
pub use tracking::Tracking;

use crate::response::Param;
use crate::rest::Headers;
use serde_json::Value;

/// Headers for endpoints that take a JSON body
pub(crate) fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// Single-entry query
pub(crate) fn query(key: &str, value: impl Into<Value>) -> Param {
    let mut query = Param::new();
    query.insert(key.to_string(), value.into());
    query
}

/// Percent-encode a caller-supplied path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

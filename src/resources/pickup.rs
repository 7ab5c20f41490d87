use super::{json_headers, query};
use crate::error::Result;
use crate::response::{Param, Response};
use crate::rest::{Headers, Requestor};
use crate::validator::{Schema, ARRAY, INTEGER, STRING};
use reqwest::Method;

const CREATE: Schema = Schema::new(
    &["orderIds", "datePickup", "agentId"],
    &[("orderIds", ARRAY), ("datePickup", STRING), ("agentId", INTEGER)],
);

const CANCEL: Schema = Schema::new(&["orderIds"], &[("orderIds", ARRAY)]);

/// Pickup requests and pickup agents
#[derive(Debug, Clone, Copy)]
pub struct Pickup<'a> {
    requestor: &'a Requestor,
}

impl<'a> Pickup<'a> {
    pub(crate) fn new(requestor: &'a Requestor) -> Self {
        Pickup { requestor }
    }

    /// Assign an agent and activate orders.
    ///
    /// `datePickup` takes the `YYYY-MM-DD HH:MM:SS` format; see
    /// [`PickupTime`](crate::PickupTime).
    pub fn create_pickup(&self, params: &Param) -> Result<Response> {
        CREATE.validate(params)?;
        self.requestor
            .call(Method::POST, "/pickup", &Param::new(), params, &json_headers())
    }

    /// Cancel a pickup request
    pub fn cancel_pickup(&self, params: &Param) -> Result<Response> {
        CANCEL.validate(params)?;
        self.requestor
            .call(Method::PUT, "/pickup/cancel", &Param::new(), params, &json_headers())
    }

    /// List pickup agents serving an origin suburb
    pub fn get_agents(&self, suburb_id: i64) -> Result<Response> {
        self.requestor.call(
            Method::GET,
            "/agents",
            &query("suburbId", suburb_id),
            &Param::new(),
            &Headers::new(),
        )
    }
}

use crate::error::Result;
use crate::response::{Param, Response};
use crate::rest::{Headers, Requestor};
use reqwest::Method;

/// Shipment tracking
#[derive(Debug, Clone, Copy)]
pub struct Tracking<'a> {
    requestor: &'a Requestor,
}

impl<'a> Tracking<'a> {
    pub(crate) fn new(requestor: &'a Requestor) -> Self {
        Tracking { requestor }
    }

    /// List every tracking status the logistics partners can report
    pub fn get_all_status(&self) -> Result<Response> {
        self.requestor.call(
            Method::GET,
            "/logistics/status",
            &Param::new(),
            &Param::new(),
            &Headers::new(),
        )
    }
}

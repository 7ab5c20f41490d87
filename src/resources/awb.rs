use crate::error::Result;
use crate::response::{Param, Response};
use crate::rest::{Headers, Requestor};
use crate::validator::{Schema, STRING};
use reqwest::Method;

const GENERATE: Schema = Schema::new(&["eid", "oid"], &[("eid", STRING), ("oid", STRING)]);

/// Air waybill numbers
#[derive(Debug, Clone, Copy)]
pub struct Awb<'a> {
    requestor: &'a Requestor,
}

impl<'a> Awb<'a> {
    pub(crate) fn new(requestor: &'a Requestor) -> Self {
        Awb { requestor }
    }

    /// Generate the AWB number from the logistics partner when it was not
    /// generated at order time.
    ///
    /// Requires `eid` (logistics partner order id) and `oid` (Shipper order id).
    pub fn generate(&self, params: &Param) -> Result<Response> {
        GENERATE.validate(params)?;

        self.requestor.call(
            Method::GET,
            "/awbs/generate",
            params,
            &Param::new(),
            &Headers::new(),
        )
    }
}

use crate::error::Result;
use crate::response::{Param, Response};
use crate::rest::{Headers, Requestor};
use crate::validator::{Schema, INTEGER, NUMERIC, STRING};
use reqwest::Method;

const REQUIRED: &[&str] = &["o", "d", "l", "w", "h", "wt", "v"];

const DOMESTIC: Schema = Schema::new(
    REQUIRED,
    &[
        ("o", INTEGER),
        ("d", INTEGER),
        ("l", NUMERIC),
        ("w", NUMERIC),
        ("h", NUMERIC),
        ("wt", NUMERIC),
        ("v", INTEGER),
        ("type", INTEGER),
        ("cod", INTEGER),
        ("order", INTEGER),
        ("originCoord", STRING),
        ("destinationCoord", STRING),
    ],
);

const INTERNATIONAL: Schema = Schema::new(
    REQUIRED,
    &[
        ("o", INTEGER),
        ("d", INTEGER),
        ("l", NUMERIC),
        ("w", NUMERIC),
        ("h", NUMERIC),
        ("wt", NUMERIC),
        ("v", INTEGER),
        ("type", INTEGER),
        ("order", INTEGER),
    ],
);

/// Shipping rate quotes.
///
/// Parameters travel in the query string: `o`/`d` are origin and destination
/// area ids, `l`/`w`/`h` package dimensions in cm, `wt` weight in kg and `v`
/// the declared item value.
#[derive(Debug, Clone, Copy)]
pub struct Rates<'a> {
    requestor: &'a Requestor,
}

impl<'a> Rates<'a> {
    pub(crate) fn new(requestor: &'a Requestor) -> Self {
        Rates { requestor }
    }

    /// Get domestic rates
    pub fn get_domestic_rates(&self, params: &Param) -> Result<Response> {
        DOMESTIC.validate(params)?;
        self.requestor
            .call(Method::GET, "/domesticRates", params, &Param::new(), &Headers::new())
    }

    /// Get international rates
    pub fn get_international_rates(&self, params: &Param) -> Result<Response> {
        INTERNATIONAL.validate(params)?;
        self.requestor
            .call(Method::GET, "/intlRates", params, &Param::new(), &Headers::new())
    }
}

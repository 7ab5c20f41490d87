use super::{json_headers, query, segment};
use crate::error::Result;
use crate::response::{Param, Response};
use crate::rest::{Headers, Requestor};
use crate::validator::{Schema, INTEGER, NUMERIC, STRING, STRING_OR_ARRAY};
use reqwest::Method;

const CREATE_DOMESTIC: Schema = Schema::new(
    &[
        "o",
        "d",
        "l",
        "w",
        "h",
        "wt",
        "v",
        "rateID",
        "consigneeName",
        "consigneePhoneNumber",
        "originAddress",
        "originDirection",
        "destinationAddress",
        "destinationDirection",
        "itemName",
        "contents",
        "packageType",
    ],
    &[
        ("o", INTEGER),
        ("d", INTEGER),
        ("l", NUMERIC),
        ("w", NUMERIC),
        ("h", NUMERIC),
        ("wt", NUMERIC),
        ("v", INTEGER),
        ("rateID", INTEGER),
        ("consigneeName", STRING),
        ("consigneePhoneNumber", STRING),
        ("consignerName", STRING),
        ("consignerPhoneNumber", STRING),
        ("originAddress", STRING),
        ("originDirection", STRING),
        ("destinationAddress", STRING),
        ("destinationDirection", STRING),
        ("itemName", STRING_OR_ARRAY),
        ("contents", STRING),
        ("useInsurance", INTEGER),
        ("externalID", STRING),
        ("paymentType", STRING),
        ("packageType", INTEGER),
        ("cod", INTEGER),
        ("originCoord", STRING),
        ("destinationCoord", STRING),
    ],
);

const CREATE_INTERNATIONAL: Schema = Schema::new(
    &[
        "o",
        "d",
        "l",
        "w",
        "h",
        "wt",
        "v",
        "rateID",
        "consigneeName",
        "consigneePhoneNumber",
        "originAddress",
        "destinationAddress",
        "itemName",
        "contents",
        "packageType",
    ],
    &[
        ("o", INTEGER),
        ("d", INTEGER),
        ("l", NUMERIC),
        ("w", NUMERIC),
        ("h", NUMERIC),
        ("wt", NUMERIC),
        ("v", INTEGER),
        ("rateID", INTEGER),
        ("consigneeName", STRING),
        ("consigneePhoneNumber", STRING),
        ("consignerName", STRING),
        ("consignerPhoneNumber", STRING),
        ("originAddress", STRING),
        ("originDirection", STRING),
        ("destinationAddress", STRING),
        ("destinationDirection", STRING),
        ("destinationArea", STRING),
        ("destinationSuburb", STRING),
        ("destinationCity", STRING),
        ("destinationProvince", STRING),
        ("destinationPostcode", STRING),
        ("itemName", STRING_OR_ARRAY),
        ("contents", STRING),
        ("useInsurance", INTEGER),
        ("externalID", STRING),
        ("paymentType", STRING),
        ("packageType", INTEGER),
    ],
);

const ACTIVATE: Schema = Schema::new(&["active"], &[("active", INTEGER), ("agentId", INTEGER)]);

const UPDATE: Schema = Schema::new(
    &["l", "w", "h", "wt"],
    &[("l", NUMERIC), ("w", NUMERIC), ("h", NUMERIC), ("wt", NUMERIC)],
);

/// Order creation and lifecycle
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    requestor: &'a Requestor,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(requestor: &'a Requestor) -> Self {
        Orders { requestor }
    }

    fn send_json(&self, method: Method, path: &str, body: &Param) -> Result<Response> {
        self.requestor
            .call(method, path, &Param::new(), body, &json_headers())
    }

    /// Create a domestic order
    pub fn create_domestic_order(&self, params: &Param) -> Result<Response> {
        CREATE_DOMESTIC.validate(params)?;
        self.send_json(Method::POST, "/orders/domestics", params)
    }

    /// Create an international order
    pub fn create_international_order(&self, params: &Param) -> Result<Response> {
        CREATE_INTERNATIONAL.validate(params)?;
        self.send_json(Method::POST, "/orders/internationals", params)
    }

    /// Look up the tracking id of an order
    pub fn get_tracking_id(&self, order_id: &str) -> Result<Response> {
        self.requestor.call(
            Method::GET,
            "/orders",
            &query("id", order_id),
            &Param::new(),
            &Headers::new(),
        )
    }

    /// Activate (`active: 1`, starts the pickup process) or deactivate (`active: 0`) an order
    pub fn activate_order(&self, order_id: &str, params: &Param) -> Result<Response> {
        ACTIVATE.validate(params)?;
        self.send_json(Method::PUT, &format!("/activations/{}", segment(order_id)), params)
    }

    /// Get an order's detail
    pub fn get_order_detail(&self, order_id: &str) -> Result<Response> {
        self.requestor.call(
            Method::GET,
            &format!("/orders/{}", segment(order_id)),
            &Param::new(),
            &Param::new(),
            &Headers::new(),
        )
    }

    /// Update the package dimensions and weight of an order
    pub fn update_order(&self, order_id: &str, params: &Param) -> Result<Response> {
        UPDATE.validate(params)?;
        self.send_json(Method::PUT, &format!("/orders/{}", segment(order_id)), params)
    }

    /// Cancel an order
    pub fn cancel_order(&self, order_id: &str) -> Result<Response> {
        self.send_json(
            Method::PUT,
            &format!("/orders/{}/cancel", segment(order_id)),
            &Param::new(),
        )
    }
}

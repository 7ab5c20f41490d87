use super::{query, segment};
use crate::error::Result;
use crate::response::{Param, Response};
use crate::rest::{Headers, Requestor};
use reqwest::Method;

/// Countries, provinces, cities, suburbs and areas served by Shipper
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    requestor: &'a Requestor,
}

impl<'a> Location<'a> {
    pub(crate) fn new(requestor: &'a Requestor) -> Self {
        Location { requestor }
    }

    fn get(&self, path: &str, query: &Param) -> Result<Response> {
        self.requestor
            .call(Method::GET, path, query, &Param::new(), &Headers::new())
    }

    /// List countries for international shipping
    pub fn get_countries(&self) -> Result<Response> {
        self.get("/countries", &Param::new())
    }

    /// List all provinces in Indonesia
    pub fn get_provinces(&self) -> Result<Response> {
        self.get("/provinces", &Param::new())
    }

    /// List cities of a province
    pub fn get_cities(&self, province_id: i64) -> Result<Response> {
        self.get("/cities", &query("province", province_id))
    }

    /// List cities where Shipper provides pickup service
    pub fn get_origin_cities(&self) -> Result<Response> {
        self.get("/cities", &query("origin", "all"))
    }

    /// List suburbs of a city
    pub fn get_suburbs(&self, city_id: i64) -> Result<Response> {
        self.get("/suburbs", &query("city", city_id))
    }

    /// List areas of a suburb
    pub fn get_areas(&self, suburb_id: i64) -> Result<Response> {
        self.get("/areas", &query("suburb", suburb_id))
    }

    /// Find every area, suburb and city whose name (or postcode) contains `substring`
    pub fn search_location(&self, substring: &str) -> Result<Response> {
        self.get(&format!("/details/{}", segment(substring)), &Param::new())
    }
}

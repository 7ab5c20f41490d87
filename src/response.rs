use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Param is the parameter set passed to an API operation.
pub type Param = std::collections::HashMap<String, Value>;

/// Build a [`Param`] from a JSON object, e.g. `params(json!({"o": 1}))`.
///
/// Anything other than an object yields an empty parameter set.
pub fn params(value: Value) -> Param {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => Param::new(),
    }
}

/// Response wraps the decoded JSON body returned by the API.
///
/// No schema is imposed: Shipper answers with an envelope such as
/// `{"status": "success", "data": {...}}` and the content of `data`
/// differs per endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response(Value);

impl Response {
    /// Decode a raw response body. A blank body decodes to `null`.
    pub fn from_text(text: &str) -> Result<Self, crate::error::ShipperError> {
        if text.trim().is_empty() {
            return Ok(Response(Value::Null));
        }
        Ok(Response(serde_json::from_str(text)?))
    }

    /// Get the raw decoded value
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Consume the response and return the decoded value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Get the `status` field of the response envelope
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Check if the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status() == Some("success")
    }

    /// Deserialize the whole response into the provided type
    pub fn apply<T>(&self) -> Result<T, crate::error::ShipperError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.0.clone()).map_err(|e| e.into())
    }

    /// Get a value by a slash-separated path.
    /// For example, "data/rows/0/name" walks objects by key and arrays by index.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }
}

impl From<Value> for Response {
    fn from(value: Value) -> Self {
        Response(value)
    }
}

impl From<Response> for Value {
    fn from(response: Response) -> Self {
        response.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_decoding() {
        let response = Response::from_text(
            r#"{
                "status": "success",
                "data": {"statuses": [{"id": 1, "name": "Order received"}]}
            }"#,
        )
        .unwrap();
        assert!(response.is_success());
        assert_eq!(response.status(), Some("success"));
    }

    #[test]
    fn test_response_get() {
        let response = Response::from(json!({
            "status": "success",
            "data": {"rows": [{"name": "Jakarta"}, {"name": "Bandung"}]}
        }));

        assert_eq!(response.get_string("data/rows/1/name"), Some("Bandung".to_string()));
        assert_eq!(response.get(""), Some(response.raw()));
        assert!(response.get("data/rows/9").is_none());
        assert!(response.get("data/rows/x").is_none());
        assert!(response.get("status/deeper").is_none());
    }

    #[test]
    fn test_response_blank_body() {
        let response = Response::from_text("  \n").unwrap();
        assert_eq!(response.raw(), &Value::Null);
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_invalid_json() {
        assert!(Response::from_text("<html>").is_err());
    }

    #[test]
    fn test_response_apply() {
        #[derive(Deserialize)]
        struct Envelope {
            status: String,
            data: Data,
        }

        #[derive(Deserialize)]
        struct Data {
            id: String,
        }

        let response = Response::from(json!({"status": "success", "data": {"id": "5b3a"}}));
        let envelope: Envelope = response.apply().unwrap();
        assert_eq!(envelope.status, "success");
        assert_eq!(envelope.data.id, "5b3a");
    }

    #[test]
    fn test_params_from_object() {
        let p = params(json!({"o": 1, "d": "x"}));
        assert_eq!(p.len(), 2);
        assert_eq!(p["o"], json!(1));
        assert!(params(json!([1, 2])).is_empty());
    }
}

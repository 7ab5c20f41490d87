use std::fmt;

/// ApiKey holds the secret key issued by Shipper.
///
/// The key travels as the `apiKey` query parameter on every request. Its
/// `Debug` output is masked so it never ends up in logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new ApiKey
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    /// Check whether a key has been configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        ApiKey::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        ApiKey(key)
    }
}

// Implement Debug manually to avoid exposing the secret key
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(<unset>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apikey_debug_is_masked() {
        let key = ApiKey::new("super-secret");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey(<redacted>)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_apikey_empty() {
        let key = ApiKey::default();
        assert!(key.is_empty());
        assert_eq!(format!("{:?}", key), "ApiKey(<unset>)");
        assert_eq!(key.as_str(), "");
    }

    #[test]
    fn test_apikey_conversions() {
        let key: ApiKey = "abc".into();
        assert_eq!(key.as_ref(), "abc");
        assert_eq!(ApiKey::from("abc".to_string()), key);
    }
}

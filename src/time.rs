use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// Wire format of the `datePickup` parameter
pub const PICKUP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pickup date and time, in the local time of the pickup location.
///
/// Serializes to the `YYYY-MM-DD HH:MM:SS` string the pickup endpoints expect
/// and converts into a parameter value:
///
/// ```
/// use shipper::PickupTime;
///
/// let at = PickupTime::parse("2024-03-01 10:30:00")?;
/// let value: serde_json::Value = at.into();
/// assert_eq!(value, "2024-03-01 10:30:00");
/// # Ok::<(), chrono::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickupTime(pub NaiveDateTime);

impl PickupTime {
    /// Create a new PickupTime from a naive date and time
    pub fn new(at: NaiveDateTime) -> Self {
        PickupTime(at)
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, PICKUP_FORMAT).map(PickupTime)
    }

    /// Get the formatted `datePickup` string
    pub fn format(&self) -> String {
        self.0.format(PICKUP_FORMAT).to_string()
    }
}

impl Deref for PickupTime {
    type Target = NaiveDateTime;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NaiveDateTime> for PickupTime {
    fn from(at: NaiveDateTime) -> Self {
        PickupTime(at)
    }
}

/// Zoned times keep their wall-clock value in their own zone
impl<Tz: TimeZone> From<DateTime<Tz>> for PickupTime {
    fn from(at: DateTime<Tz>) -> Self {
        PickupTime(at.naive_local())
    }
}

impl From<PickupTime> for Value {
    fn from(at: PickupTime) -> Self {
        Value::String(at.format())
    }
}

impl fmt::Display for PickupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PICKUP_FORMAT))
    }
}

impl Serialize for PickupTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for PickupTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PickupTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_pickup_time_format() {
        let at = PickupTime::new(sample());
        assert_eq!(at.format(), "2024-03-01 09:05:00");
        assert_eq!(at.to_string(), "2024-03-01 09:05:00");
    }

    #[test]
    fn test_pickup_time_serialization() {
        let at = PickupTime::new(sample());
        let json = serde_json::to_string(&at).unwrap();
        assert_eq!(json, r#""2024-03-01 09:05:00""#);

        let back: PickupTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, at);
    }

    #[test]
    fn test_pickup_time_rejects_other_formats() {
        assert!(PickupTime::parse("2024-03-01T09:05:00Z").is_err());
        assert!(serde_json::from_str::<PickupTime>(r#""01/03/2024""#).is_err());
    }

    #[test]
    fn test_pickup_time_keeps_wall_clock() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        let zoned = jakarta.from_local_datetime(&sample()).unwrap();
        assert_eq!(PickupTime::from(zoned).format(), "2024-03-01 09:05:00");

        let utc = Utc.from_utc_datetime(&sample());
        assert_eq!(PickupTime::from(utc).format(), "2024-03-01 09:05:00");
    }

    #[test]
    fn test_pickup_time_into_value() {
        let value: Value = PickupTime::new(sample()).into();
        assert_eq!(value, Value::String("2024-03-01 09:05:00".to_string()));
    }
}

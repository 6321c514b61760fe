use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One sample returned by the grow-box controller.
///
/// Field names match the device's JSON response verbatim. Any field may be
/// absent in a given cycle (a probe can fail to answer without the whole
/// request failing), and the device is free to add fields this frontend does
/// not track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Water reservoir temperature (DS18x20), degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_t: Option<f64>,

    /// Probe 0 relative humidity (DHT22), percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dht0_h: Option<f64>,

    /// Probe 0 air temperature (DHT22), degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dht0_t: Option<f64>,

    /// Probe 1 relative humidity (DHT22), percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dht1_h: Option<f64>,

    /// Probe 1 air temperature (DHT22), degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dht1_t: Option<f64>,
}

impl Reading {
    /// Get the value for a tracked field, if the device reported it.
    pub fn get(&self, field: SensorField) -> Option<f64> {
        match field {
            SensorField::WaterTemp => self.water_t,
            SensorField::Dht0Humidity => self.dht0_h,
            SensorField::Dht0Temp => self.dht0_t,
            SensorField::Dht1Humidity => self.dht1_h,
            SensorField::Dht1Temp => self.dht1_t,
        }
    }

    /// True if the device reported none of the tracked fields.
    pub fn is_empty(&self) -> bool {
        SensorField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Decode a reading from a JSON response body.
pub fn decode_reading(bytes: &[u8]) -> Result<Reading> {
    Ok(serde_json::from_slice(bytes)?)
}

/// The five tracked sensor fields, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorField {
    WaterTemp,
    Dht0Humidity,
    Dht0Temp,
    Dht1Humidity,
    Dht1Temp,
}

impl SensorField {
    /// All tracked fields, in the order they are plotted.
    pub const ALL: [SensorField; 5] = [
        SensorField::WaterTemp,
        SensorField::Dht0Humidity,
        SensorField::Dht0Temp,
        SensorField::Dht1Humidity,
        SensorField::Dht1Temp,
    ];

    /// The wire name of this field in the device's JSON response.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorField::WaterTemp => "water_t",
            SensorField::Dht0Humidity => "dht0_h",
            SensorField::Dht0Temp => "dht0_t",
            SensorField::Dht1Humidity => "dht1_h",
            SensorField::Dht1Temp => "dht1_t",
        }
    }

    /// Human-readable label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            SensorField::WaterTemp => "Water °C",
            SensorField::Dht0Humidity => "Probe 0 %RH",
            SensorField::Dht0Temp => "Probe 0 °C",
            SensorField::Dht1Humidity => "Probe 1 %RH",
            SensorField::Dht1Temp => "Probe 1 °C",
        }
    }
}

impl std::fmt::Display for SensorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_reading() {
        let body = br#"{"water_t":21.5,"dht0_h":55.0,"dht0_t":24.1,"dht1_h":60.2,"dht1_t":23.0}"#;
        let reading = decode_reading(body).unwrap();

        assert_eq!(reading.water_t, Some(21.5));
        assert_eq!(reading.dht0_h, Some(55.0));
        assert_eq!(reading.dht0_t, Some(24.1));
        assert_eq!(reading.dht1_h, Some(60.2));
        assert_eq!(reading.dht1_t, Some(23.0));
        assert!(!reading.is_empty());
    }

    #[test]
    fn test_decode_partial_reading() {
        let reading = decode_reading(br#"{"water_t":21.5}"#).unwrap();

        assert_eq!(reading.water_t, Some(21.5));
        assert_eq!(reading.dht0_h, None);
        assert_eq!(reading.dht0_t, None);
        assert_eq!(reading.dht1_h, None);
        assert_eq!(reading.dht1_t, None);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let reading = decode_reading(br#"{"dht0_t":24.0,"uptime":12345}"#).unwrap();
        assert_eq!(reading.dht0_t, Some(24.0));
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(decode_reading(b"<html>not json</html>").is_err());
    }

    #[test]
    fn test_empty_object_is_empty_reading() {
        let reading = decode_reading(b"{}").unwrap();
        assert!(reading.is_empty());
    }

    #[test]
    fn test_get_matches_wire_fields() {
        let reading = decode_reading(br#"{"dht1_h":61.0}"#).unwrap();

        assert_eq!(reading.get(SensorField::Dht1Humidity), Some(61.0));
        assert_eq!(reading.get(SensorField::WaterTemp), None);
    }

    #[test]
    fn test_field_wire_names() {
        assert_eq!(SensorField::WaterTemp.as_str(), "water_t");
        assert_eq!(SensorField::Dht0Humidity.as_str(), "dht0_h");
        assert_eq!(SensorField::Dht0Temp.as_str(), "dht0_t");
        assert_eq!(SensorField::Dht1Humidity.as_str(), "dht1_h");
        assert_eq!(SensorField::Dht1Temp.as_str(), "dht1_t");
    }
}

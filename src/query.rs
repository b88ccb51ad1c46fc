//! Query Vector
//!
//! Caller-supplied farm/soil measurements for nearest-match lookup. Parsing
//! is lenient: each field accepts a JSON number or a numeric string, and
//! anything missing or unparseable becomes 0.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::record::{as_f64, Attribute};

/// The seven measured conditions used to find the best-matching record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVector {
    #[serde(deserialize_with = "lenient_f64")]
    pub nitrogen: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub phosphorus: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub potassium: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub temperature: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub humidity: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub ph: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub rainfall: f64,
}

impl QueryVector {
    /// Build from a raw JSON payload. A non-object payload or malformed
    /// fields collapse to zeros rather than erroring.
    pub fn from_value(payload: &Value) -> Self {
        let field = |key: &str| payload.get(key).and_then(as_f64).unwrap_or(0.0);
        Self {
            nitrogen: field("nitrogen"),
            phosphorus: field("phosphorus"),
            potassium: field("potassium"),
            temperature: field("temperature"),
            humidity: field("humidity"),
            ph: field("ph"),
            rainfall: field("rainfall"),
        }
    }

    /// Value of the query field paired with a record attribute.
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Nitrogen => self.nitrogen,
            Attribute::Phosphorus => self.phosphorus,
            Attribute::Potassium => self.potassium,
            Attribute::Temperature => self.temperature,
            Attribute::Humidity => self.humidity,
            Attribute::Ph => self.ph,
            Attribute::Rainfall => self.rainfall,
        }
    }
}

/// Accept a number or numeric string; default to 0 on anything else.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).unwrap_or(0.0))
}

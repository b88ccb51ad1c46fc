//! Crop Criteria Search
//!
//! In-memory filtering of crop profiles by categorical criteria (soil type,
//! climate, season, water requirement) and point-in-range containment for
//! temperature and pH. Filters are conjunctive; an unset filter matches
//! everything. Profile fields may be scalars or lists on either side, and a
//! profile missing a filtered field does not match that filter.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{json_type_name, ShapeError};
use crate::record::{as_f64, field_range};

/// Search criteria for the crop catalog. Request payloads send each
/// categorical criterion as either a single string or a list of strings;
/// empty strings mean "unset".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CropFilters {
    #[serde(rename = "soilType", alias = "soil_type", deserialize_with = "one_or_many")]
    pub soil_type: Vec<String>,

    #[serde(deserialize_with = "one_or_many")]
    pub climate: Vec<String>,

    #[serde(deserialize_with = "one_or_many")]
    pub season: Vec<String>,

    #[serde(
        rename = "waterRequirement",
        alias = "water_requirement",
        deserialize_with = "optional_string"
    )]
    pub water_requirement: Option<String>,

    #[serde(deserialize_with = "optional_f64")]
    pub temperature: Option<f64>,

    #[serde(deserialize_with = "optional_f64")]
    pub ph: Option<f64>,
}

impl CropFilters {
    /// True when no criterion is set, so every profile matches.
    pub fn is_empty(&self) -> bool {
        self.soil_type.is_empty()
            && self.climate.is_empty()
            && self.season.is_empty()
            && self.water_requirement.is_none()
            && self.temperature.is_none()
            && self.ph.is_none()
    }

    /// Conjunction of all set criteria against one crop profile.
    pub fn matches(&self, crop: &Value) -> bool {
        intersects(first_present(crop, &["soilType", "soil_type"]), &self.soil_type)
            && intersects(crop.get("climate"), &self.climate)
            && intersects(crop.get("season"), &self.season)
            && self.water_matches(crop)
            && range_contains(crop, &["temperatureRange", "temperature_range"], self.temperature)
            && range_contains(crop, &["phRange", "ph_range"], self.ph)
    }

    fn water_matches(&self, crop: &Value) -> bool {
        let Some(wanted) = &self.water_requirement else {
            return true;
        };
        first_present(crop, &["waterRequirement", "water_requirement"])
            .and_then(Value::as_str)
            .is_some_and(|have| have.eq_ignore_ascii_case(wanted))
    }
}

/// Matching crops with their count, the shape the catalog endpoint returns.
#[derive(Debug, Clone, Serialize)]
pub struct CropSearchResults {
    pub count: usize,
    pub crops: Vec<Value>,
}

/// Filter a slice of crop profiles, borrowing the matches.
pub fn filter_crops<'a>(filters: &CropFilters, crops: &'a [Value]) -> Vec<&'a Value> {
    crops.iter().filter(|crop| filters.matches(crop)).collect()
}

/// Boundary entry point taking the raw catalog payload.
pub fn search_crops(filters: &CropFilters, payload: &Value) -> Result<CropSearchResults, ShapeError> {
    let records = payload.as_array().ok_or(ShapeError::NotAnArray {
        kind: json_type_name(payload),
    })?;

    let crops: Vec<Value> = records
        .iter()
        .filter(|crop| filters.matches(crop))
        .cloned()
        .collect();

    Ok(CropSearchResults {
        count: crops.len(),
        crops,
    })
}

// ============================================================================
// Matching helpers
// ============================================================================

fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(*key))
}

/// Case-insensitive intersection between a profile field (string or list of
/// strings) and the requested values. An empty request matches everything;
/// an absent field matches nothing once the criterion is set.
fn intersects(field: Option<&Value>, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    let Some(field) = field else {
        return false;
    };

    let have: Vec<&str> = match field {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => return false,
    };

    wanted
        .iter()
        .any(|w| have.iter().any(|h| h.eq_ignore_ascii_case(w)))
}

/// Inclusive containment of a requested point in the profile's `{min, max}`
/// range, tried across the range-field aliases.
fn range_contains(crop: &Value, keys: &[&str], wanted: Option<f64>) -> bool {
    let Some(point) = wanted else {
        return true;
    };
    for key in keys {
        if let Some((min, max)) = field_range(crop, key) {
            return min <= point && point <= max;
        }
    }
    false
}

// ============================================================================
// Lenient deserializers
// ============================================================================

/// Accept a single string or a list of strings; blanks are dropped.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Accept a non-blank string, treat anything else as unset.
fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Accept a number or numeric string, treat anything else as unset.
fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value))
}

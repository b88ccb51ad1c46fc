//! Loose-Document Access Layer
//!
//! Reference records arrive from the document store with inconsistent field
//! names: the same logical attribute may be spelled `nitrogen` or `N`, a label
//! may live under `label`, `crop`, `name`, or `crop_name`, and temperature/pH
//! may be a scalar or a `{min, max}` range. Each logical attribute therefore
//! owns an ordered alias table, tried in priority order; the first defined
//! numeric value wins.
//!
//! Values may be JSON numbers or numeric strings. Anything else counts as
//! absent, never as zero.

use serde_json::Value;

/// Label aliases, in resolution order.
pub const LABEL_ALIASES: &[&str] = &["label", "crop", "name", "crop_name"];

/// The seven numeric growing-condition attributes a reference record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl Attribute {
    /// All attributes, in the order they are compared.
    pub const ALL: [Attribute; 7] = [
        Attribute::Nitrogen,
        Attribute::Phosphorus,
        Attribute::Potassium,
        Attribute::Temperature,
        Attribute::Humidity,
        Attribute::Ph,
        Attribute::Rainfall,
    ];

    /// Canonical name, as used on the query side.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Nitrogen => "nitrogen",
            Attribute::Phosphorus => "phosphorus",
            Attribute::Potassium => "potassium",
            Attribute::Temperature => "temperature",
            Attribute::Humidity => "humidity",
            Attribute::Ph => "ph",
            Attribute::Rainfall => "rainfall",
        }
    }

    /// Scalar field aliases, in resolution order.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Attribute::Nitrogen => &["nitrogen", "N", "n"],
            Attribute::Phosphorus => &["phosphorus", "P", "p"],
            Attribute::Potassium => &["potassium", "K", "k"],
            Attribute::Temperature => &["temperature", "temp"],
            Attribute::Humidity => &["humidity"],
            Attribute::Ph => &["ph"],
            Attribute::Rainfall => &["rainfall"],
        }
    }

    /// Range-object aliases. A `{min, max}` range takes priority over the
    /// scalar form and is averaged before differencing. Only temperature and
    /// pH have range representations in upstream data.
    pub fn range_aliases(&self) -> &'static [&'static str] {
        match self {
            Attribute::Temperature => &["temperatureRange", "temperature_range"],
            Attribute::Ph => &["phRange", "ph_range"],
            _ => &[],
        }
    }
}

/// Coerce a JSON value to f64: numbers pass through, numeric strings are
/// parsed after trimming. Everything else is absent.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Numeric field lookup on a record.
pub fn field_f64(record: &Value, key: &str) -> Option<f64> {
    record.get(key).and_then(as_f64)
}

/// Range lookup: the field must be an object with numeric `min` and `max`.
pub fn field_range(record: &Value, key: &str) -> Option<(f64, f64)> {
    let range = record.get(key)?;
    let min = range.get("min").and_then(as_f64)?;
    let max = range.get("max").and_then(as_f64)?;
    Some((min, max))
}

/// Resolve one logical attribute on a record.
///
/// Tries the range aliases first (averaging the bounds), then the scalar
/// aliases. A malformed range object falls through to the scalar form.
/// Returns `None` when no alias yields a numeric value.
pub fn resolve_attribute(record: &Value, attribute: Attribute) -> Option<f64> {
    for key in attribute.range_aliases() {
        if let Some((min, max)) = field_range(record, key) {
            return Some((min + max) / 2.0);
        }
    }
    for key in attribute.aliases() {
        if let Some(value) = field_f64(record, key) {
            return Some(value);
        }
    }
    None
}

/// Resolve a record's display label across the label aliases.
pub fn resolve_label(record: &Value) -> Option<&str> {
    LABEL_ALIASES
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_as_f64_coercion() {
        assert_eq!(as_f64(&json!(6.5)), Some(6.5));
        assert_eq!(as_f64(&json!("6.5")), Some(6.5));
        assert_eq!(as_f64(&json!(" 42 ")), Some(42.0));
        assert_eq!(as_f64(&json!("not a number")), None);
        assert_eq!(as_f64(&json!(null)), None);
        assert_eq!(as_f64(&json!(true)), None);
        assert_eq!(as_f64(&json!([1.0])), None);
    }

    #[test]
    fn test_scalar_alias_order() {
        // Canonical name wins over the short alias
        let record = json!({ "nitrogen": 90, "N": 10 });
        assert_eq!(resolve_attribute(&record, Attribute::Nitrogen), Some(90.0));

        // Short alias is picked up when the canonical name is absent
        let record = json!({ "N": 10 });
        assert_eq!(resolve_attribute(&record, Attribute::Nitrogen), Some(10.0));
    }

    #[test]
    fn test_range_preferred_over_scalar() {
        let record = json!({
            "temperatureRange": { "min": 18, "max": 24 },
            "temperature": 35,
        });
        assert_relative_eq!(
            resolve_attribute(&record, Attribute::Temperature).unwrap(),
            21.0
        );
    }

    #[test]
    fn test_malformed_range_falls_back_to_scalar() {
        let record = json!({
            "phRange": { "min": "low", "max": 7.0 },
            "ph": 6.5,
        });
        assert_eq!(resolve_attribute(&record, Attribute::Ph), Some(6.5));
    }

    #[test]
    fn test_missing_attribute_is_absent() {
        let record = json!({ "name": "rice" });
        assert_eq!(resolve_attribute(&record, Attribute::Rainfall), None);
    }

    #[test]
    fn test_label_aliases() {
        assert_eq!(resolve_label(&json!({ "label": "rice" })), Some("rice"));
        assert_eq!(resolve_label(&json!({ "crop": "maize" })), Some("maize"));
        assert_eq!(resolve_label(&json!({ "name": "wheat" })), Some("wheat"));
        assert_eq!(
            resolve_label(&json!({ "crop_name": "cotton" })),
            Some("cotton")
        );
        // Resolution order: `label` beats `name`
        assert_eq!(
            resolve_label(&json!({ "name": "wheat", "label": "rice" })),
            Some("rice")
        );
        assert_eq!(resolve_label(&json!({ "id": 7 })), None);
    }
}

//! Nearest-Match Recommender
//!
//! Single-pass scan over labeled reference records, selecting the one closest
//! to the query by normalized absolute-difference distance: the sum of |query
//! field - record field| over every attribute the record actually carries,
//! divided by the number of attributes compared.
//!
//! Records with zero comparable fields never enter the running minimum, so a
//! label-only stub cannot win on a vacuous distance. Ties keep the first
//! record in iteration order.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{json_type_name, ShapeError};
use crate::query::QueryVector;
use crate::record::{resolve_attribute, resolve_label, Attribute};

/// Label returned when the winning record carries no resolvable label.
pub const UNKNOWN_CROP_LABEL: &str = "Unknown Crop";

/// Caller-facing text for an empty or fully-excluded candidate set.
pub const NO_MATCH_MESSAGE: &str = "No crop found";

/// A selected record with its distance diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Display label resolved from the winning record.
    pub label: String,

    /// Normalized distance: sum of absolute differences / fields compared.
    pub distance: f64,

    /// How many of the seven attributes the winning record carried.
    pub fields_compared: usize,
}

/// Outcome of a recommendation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// The closest record by normalized distance.
    Match(MatchResult),

    /// Candidate set was empty, or no record had any comparable field.
    NotFound,
}

impl Recommendation {
    /// The label callers render, `"No crop found"` when nothing matched.
    pub fn crop_label(&self) -> &str {
        match self {
            Recommendation::Match(result) => &result.label,
            Recommendation::NotFound => NO_MATCH_MESSAGE,
        }
    }

    /// The response envelope upstream handlers return verbatim.
    pub fn to_envelope(&self) -> Value {
        json!({ "crop": self.crop_label() })
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Recommendation::Match(_))
    }
}

/// Normalized distance of one candidate from the query, with the number of
/// fields compared. `None` when the candidate has no comparable fields.
fn candidate_distance(query: &QueryVector, candidate: &Value) -> Option<(f64, usize)> {
    let mut sum_of_abs_differences = 0.0;
    let mut fields_compared = 0usize;

    for attribute in Attribute::ALL {
        if let Some(value) = resolve_attribute(candidate, attribute) {
            sum_of_abs_differences += (query.get(attribute) - value).abs();
            fields_compared += 1;
        }
    }

    if fields_compared == 0 {
        None
    } else {
        Some((sum_of_abs_differences / fields_compared as f64, fields_compared))
    }
}

/// Scan `candidates` and return the nearest match.
///
/// A malformed candidate is skipped, never fatal: missing attributes are
/// excluded from its distance, and a candidate with no attributes at all is
/// excluded from selection entirely.
pub fn nearest_match(query: &QueryVector, candidates: &[Value]) -> Recommendation {
    let mut best: Option<(f64, usize, &Value)> = None;
    let mut excluded = 0usize;

    for candidate in candidates {
        match candidate_distance(query, candidate) {
            Some((distance, fields_compared)) => {
                // Strict < keeps the first candidate on ties
                let closer = match best {
                    Some((best_distance, _, _)) => distance < best_distance,
                    None => true,
                };
                if closer {
                    best = Some((distance, fields_compared, candidate));
                }
            }
            None => excluded += 1,
        }
    }

    if excluded > 0 {
        debug!(excluded, "candidates with no comparable fields excluded");
    }

    match best {
        Some((distance, fields_compared, candidate)) => {
            let label = resolve_label(candidate)
                .unwrap_or(UNKNOWN_CROP_LABEL)
                .to_string();
            debug!(%label, distance, fields_compared, "nearest candidate selected");
            Recommendation::Match(MatchResult {
                label,
                distance,
                fields_compared,
            })
        }
        None => Recommendation::NotFound,
    }
}

/// Boundary entry point taking the raw candidate payload.
///
/// An empty array is an ordinary [`Recommendation::NotFound`]; a payload that
/// is not an array is a [`ShapeError`], kept distinct so callers can tell a
/// broken collaborator response from a genuine no-match.
pub fn recommend(query: &QueryVector, candidates: &Value) -> Result<Recommendation, ShapeError> {
    let records = candidates.as_array().ok_or(ShapeError::NotAnArray {
        kind: json_type_name(candidates),
    })?;
    Ok(nearest_match(query, records))
}

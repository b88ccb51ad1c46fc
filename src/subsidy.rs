//! Subsidy Listing Search
//!
//! Keyword and category filtering over subsidy records imported from
//! spreadsheet-shaped documents, so field names are even less consistent than
//! the crop catalog: titles live under `title` or `name`, descriptions under
//! `description` or `short_description`, and the category may appear under
//! any of `category`, `category_name`, `cat`, the joined tags, or `group`.
//! Matching is lowercase substring on both axes, composed as a conjunction.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{json_type_name, ShapeError};

/// Category values that disable category filtering.
pub const CATEGORY_WILDCARDS: &[&str] = &["", "all", "all categories"];

const TITLE_ALIASES: &[&str] = &["title", "name"];
const DESCRIPTION_ALIASES: &[&str] = &["description", "short_description"];
const CATEGORY_ALIASES: &[&str] = &["category", "category_name", "cat"];

/// Listing query: free-text search term plus a category name. Both default
/// to empty, which matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubsidyQuery {
    pub search: String,
    pub category: String,
}

/// Filter a slice of subsidy records, borrowing the matches.
pub fn filter_subsidies<'a>(query: &SubsidyQuery, items: &'a [Value]) -> Vec<&'a Value> {
    let term = query.search.trim().to_lowercase();
    let category = query.category.trim().to_lowercase();
    let category_active = !CATEGORY_WILDCARDS.contains(&category.as_str());

    items
        .iter()
        .filter(|item| {
            (term.is_empty() || matches_term(item, &term))
                && (!category_active || matches_category(item, &category))
        })
        .collect()
}

/// Boundary entry point taking the raw listing payload (the document's
/// `data` array). Returns owned matches for the response body.
pub fn search_subsidies(query: &SubsidyQuery, payload: &Value) -> Result<Vec<Value>, ShapeError> {
    let records = payload.as_array().ok_or(ShapeError::NotAnArray {
        kind: json_type_name(payload),
    })?;
    Ok(filter_subsidies(query, records)
        .into_iter()
        .cloned()
        .collect())
}

// ============================================================================
// Matching helpers
// ============================================================================

fn first_string<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| record.get(*key).and_then(Value::as_str))
}

/// Tags joined with spaces, the shared keyword pool for both filters.
fn joined_tags(record: &Value) -> String {
    match record.get("tags") {
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

/// Search-term match over title, description, and keywords.
fn matches_term(item: &Value, term: &str) -> bool {
    let title = first_string(item, TITLE_ALIASES).unwrap_or_default().to_lowercase();
    let description = first_string(item, DESCRIPTION_ALIASES)
        .unwrap_or_default()
        .to_lowercase();
    let keywords = joined_tags(item).to_lowercase();

    title.contains(term) || description.contains(term) || keywords.contains(term)
}

/// Category match across every field the category might be stored under.
/// Imported sheets sometimes carry numeric category codes, so numbers are
/// stringified before comparing.
fn matches_category(item: &Value, category: &str) -> bool {
    let mut candidates: Vec<String> = Vec::new();

    for key in CATEGORY_ALIASES {
        match item.get(*key) {
            Some(Value::String(s)) => candidates.push(s.clone()),
            Some(Value::Number(n)) => candidates.push(n.to_string()),
            _ => {}
        }
    }
    candidates.push(joined_tags(item));
    if let Some(group) = item.get("group").and_then(Value::as_str) {
        candidates.push(group.to_string());
    }

    candidates
        .iter()
        .filter(|candidate| !candidate.is_empty())
        .any(|candidate| candidate.to_lowercase().contains(category))
}

// Catalog Integration Tests
//
// Purpose: exercise crop criteria search and subsidy listing search over
// realistic document-store payloads.
// Run with: cargo test --test catalog_integration_tests

use crop_recommender_rust::{search_crops, search_subsidies, CropFilters, SubsidyQuery};
use serde_json::{json, Value};

// Helper: a small crop catalog in the stored document shape
fn crop_catalog() -> Value {
    json!([
        {
            "name": "Rice",
            "description": "Staple cereal for wet lowland cultivation",
            "soilType": ["clay", "loamy"],
            "climate": ["tropical", "subtropical"],
            "season": ["monsoon"],
            "waterRequirement": "high",
            "temperatureRange": { "min": 20, "max": 35 },
            "phRange": { "min": 5.5, "max": 7.0 },
            "yield": "2-3 tonnes/ha",
        },
        {
            "name": "Wheat",
            "description": "Winter cereal for temperate plains",
            "soilType": ["loamy"],
            "climate": ["temperate"],
            "season": ["winter"],
            "waterRequirement": "medium",
            "temperatureRange": { "min": 10, "max": 25 },
            "phRange": { "min": 6.0, "max": 7.5 },
        },
        {
            "name": "Millet",
            "description": "Drought-hardy coarse grain",
            "soilType": "sandy",
            "climate": ["arid"],
            "season": ["summer"],
            "waterRequirement": "low",
            "temperatureRange": { "min": 25, "max": 40 },
            "phRange": { "min": 5.5, "max": 8.0 },
        },
    ])
}

// Helper: a subsidy listing in the imported-sheet shape
fn subsidy_listing() -> Value {
    json!([
        {
            "title": "Drip Irrigation Subsidy",
            "description": "Support for micro-irrigation equipment purchase",
            "tags": ["water", "equipment"],
            "category": "Irrigation",
        },
        {
            "name": "Seed Distribution Scheme",
            "short_description": "Certified seeds at reduced rates",
            "cat": "Inputs",
        },
        {
            "title": "Solar Pump Grant",
            "tags": ["energy", "water"],
            "group": "Renewable Energy",
        },
    ])
}

// =========================================================================
// Section 1: Crop criteria search
// =========================================================================

#[test]
fn test_no_filters_returns_whole_catalog() {
    let results = search_crops(&CropFilters::default(), &crop_catalog()).unwrap();
    assert_eq!(results.count, 3);
    assert_eq!(results.crops.len(), 3);
}

#[test]
fn test_request_shaped_filters() {
    // The request body as the search form sends it: scalars plus blanks
    let filters: CropFilters = serde_json::from_value(json!({
        "soilType": "loamy",
        "climate": "",
        "season": "",
        "waterRequirement": "",
        "temperature": "",
        "ph": "",
    }))
    .unwrap();

    let results = search_crops(&filters, &crop_catalog()).unwrap();
    assert_eq!(results.count, 2);
    let names: Vec<&str> = results
        .crops
        .iter()
        .filter_map(|crop| crop["name"].as_str())
        .collect();
    assert_eq!(names, ["Rice", "Wheat"]);
}

#[test]
fn test_point_in_range_criteria() {
    let filters: CropFilters = serde_json::from_value(json!({
        "temperature": 30,
        "ph": 6.0,
    }))
    .unwrap();

    let results = search_crops(&filters, &crop_catalog()).unwrap();
    let names: Vec<&str> = results
        .crops
        .iter()
        .filter_map(|crop| crop["name"].as_str())
        .collect();
    assert_eq!(names, ["Rice", "Millet"]);
}

#[test]
fn test_scalar_profile_field_matches_list_filter() {
    // Millet stores soilType as a bare string rather than a list
    let filters: CropFilters =
        serde_json::from_value(json!({ "soilType": ["sandy", "silty"] })).unwrap();

    let results = search_crops(&filters, &crop_catalog()).unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.crops[0]["name"], "Millet");
}

#[test]
fn test_conjunction_narrows_to_nothing() {
    let filters: CropFilters = serde_json::from_value(json!({
        "season": "winter",
        "waterRequirement": "high",
    }))
    .unwrap();

    let results = search_crops(&filters, &crop_catalog()).unwrap();
    assert_eq!(results.count, 0);
}

// =========================================================================
// Section 2: Subsidy listing search
// =========================================================================

#[test]
fn test_subsidy_defaults_list_everything() {
    let matched = search_subsidies(&SubsidyQuery::default(), &subsidy_listing()).unwrap();
    assert_eq!(matched.len(), 3);
}

#[test]
fn test_subsidy_keyword_search() {
    let query = SubsidyQuery {
        search: "irrigation".into(),
        ..Default::default()
    };
    let matched = search_subsidies(&query, &subsidy_listing()).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["title"], "Drip Irrigation Subsidy");
}

#[test]
fn test_subsidy_category_across_aliases() {
    for (category, expected_title_field, expected) in [
        ("irrigation", "title", "Drip Irrigation Subsidy"),
        ("inputs", "name", "Seed Distribution Scheme"),
        ("renewable energy", "title", "Solar Pump Grant"),
    ] {
        let query = SubsidyQuery {
            category: category.into(),
            ..Default::default()
        };
        let matched = search_subsidies(&query, &subsidy_listing()).unwrap();
        assert_eq!(matched.len(), 1, "category {category:?}");
        assert_eq!(matched[0][expected_title_field], expected);
    }
}

#[test]
fn test_subsidy_all_categories_passthrough() {
    let query = SubsidyQuery {
        category: "All Categories".into(),
        ..Default::default()
    };
    let matched = search_subsidies(&query, &subsidy_listing()).unwrap();
    assert_eq!(matched.len(), 3);
}

#[test]
fn test_subsidy_search_and_category_compose() {
    let query = SubsidyQuery {
        search: "water".into(),
        category: "irrigation".into(),
    };
    let matched = search_subsidies(&query, &subsidy_listing()).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["title"], "Drip Irrigation Subsidy");
}

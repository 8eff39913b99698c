use serde_json::{json, Value};

use soulfriend_instruments::config::QuestionnaireConfig;
use soulfriend_instruments::error::ConfigError;
use soulfriend_instruments::load;

/// Minimal valid two-item, single-subscale definition the tests mutate.
fn base() -> Value {
    json!({
        "scale": "TEST",
        "version": "1.0",
        "items": [
            { "id": 1, "text": "câu hỏi một" },
            { "id": 2, "text": "câu hỏi hai" }
        ],
        "options": [
            { "value": 0, "label": "không" },
            { "value": 1, "label": "thỉnh thoảng" },
            { "value": 2, "label": "thường xuyên" }
        ],
        "scoring": {
            "subscales": [
                {
                    "name": "Mood",
                    "severity_levels": [
                        { "key": "low", "label": "Thấp", "min": 0, "max": 2, "color": "#2ecc71", "description": "thấp" },
                        { "key": "high", "label": "Cao", "min": 3, "max": 4, "color": "#e74c3c", "description": "cao" }
                    ]
                }
            ]
        },
        "recommendations": {
            "low": { "title": "t", "message": "m", "suggestions": [] },
            "high": { "title": "t", "message": "m", "suggestions": [] }
        }
    })
}

fn parse(value: Value) -> Result<QuestionnaireConfig, ConfigError> {
    QuestionnaireConfig::from_json(&value.to_string())
}

#[test]
fn base_definition_is_valid() {
    assert!(parse(base()).is_ok());
}

#[test]
fn unknown_scale_is_rejected() {
    assert!(matches!(load("MMPI-2"), Err(ConfigError::UnknownScale(_))));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        QuestionnaireConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_required_key_is_a_parse_error() {
    let mut value = base();
    value.as_object_mut().unwrap().remove("scoring");
    assert!(matches!(parse(value), Err(ConfigError::Parse(_))));
}

#[test]
fn band_gap_is_rejected() {
    let mut value = base();
    // Leave score 3 uncovered: low ends at 2, high starts at 4.
    value["scoring"]["subscales"][0]["severity_levels"][1]["min"] = json!(4);
    assert!(matches!(
        parse(value),
        Err(ConfigError::BandGap { found: 4, expected: 3, .. })
    ));
}

#[test]
fn overlapping_bands_are_rejected() {
    let mut value = base();
    value["scoring"]["subscales"][0]["severity_levels"][1]["min"] = json!(2);
    assert!(matches!(parse(value), Err(ConfigError::BandGap { .. })));
}

#[test]
fn bands_must_cover_the_achievable_maximum() {
    let mut value = base();
    // Two items x max option 2 = 4, so stopping at 3 leaves a hole.
    value["scoring"]["subscales"][0]["severity_levels"][1]["max"] = json!(3);
    assert!(matches!(
        parse(value),
        Err(ConfigError::BandCeiling { found: 3, expected: 4, .. })
    ));
}

#[test]
fn extreme_band_and_multiplier_values_do_not_overflow() {
    // A band ending at u32::MAX must come back as a BandCeiling mismatch,
    // not an arithmetic panic.
    let mut value = base();
    value["scoring"]["subscales"][0]["severity_levels"][1]["max"] = json!(u32::MAX);
    assert!(matches!(parse(value), Err(ConfigError::BandCeiling { .. })));

    // Likewise a multiplier that pushes the achievable maximum past u32.
    let mut value = base();
    value["scoring"]["subscales"][0]["multiplier"] = json!(u32::MAX);
    assert!(matches!(parse(value), Err(ConfigError::BandCeiling { .. })));
}

#[test]
fn inverted_band_is_rejected() {
    let mut value = base();
    value["scoring"]["subscales"][0]["severity_levels"][0]["max"] = json!(0);
    value["scoring"]["subscales"][0]["severity_levels"][0]["min"] = json!(2);
    assert!(matches!(parse(value), Err(ConfigError::InvertedBand { .. })));
}

#[test]
fn empty_band_set_is_rejected() {
    let mut value = base();
    value["scoring"]["subscales"][0]["severity_levels"] = json!([]);
    assert!(matches!(parse(value), Err(ConfigError::EmptyBands { .. })));
}

#[test]
fn non_contiguous_options_are_rejected() {
    let mut value = base();
    value["options"][2]["value"] = json!(5);
    assert!(matches!(
        parse(value),
        Err(ConfigError::NonContiguousOptions { .. })
    ));
}

#[test]
fn duplicate_item_ids_are_rejected() {
    let mut value = base();
    value["items"][1]["id"] = json!(1);
    assert!(matches!(
        parse(value),
        Err(ConfigError::DuplicateItemId { id: 1, .. })
    ));
}

#[test]
fn item_with_unknown_subscale_is_rejected() {
    let mut value = base();
    value["items"][0]["subscale"] = json!("Sleep");
    assert!(matches!(
        parse(value),
        Err(ConfigError::UnknownSubscale { id: 1, .. })
    ));
}

#[test]
fn multi_subscale_items_must_name_their_subscale() {
    let mut value = base();
    let second = json!({
        "name": "Sleep",
        "severity_levels": [
            { "key": "low", "label": "Thấp", "min": 0, "max": 0, "color": "#2ecc71", "description": "thấp" }
        ]
    });
    value["scoring"]["subscales"].as_array_mut().unwrap().push(second);
    assert!(matches!(
        parse(value),
        Err(ConfigError::MissingItemSubscale { id: 1, .. })
    ));
}

#[test]
fn every_band_key_needs_a_recommendation() {
    let mut value = base();
    value["recommendations"].as_object_mut().unwrap().remove("high");
    assert!(matches!(
        parse(value),
        Err(ConfigError::MissingRecommendation { .. })
    ));
}

#[test]
fn risk_probe_must_reference_a_real_item() {
    let mut value = base();
    value["suicide_risk_assessment"] = json!({ "item_id": 42, "levels": { "1": "nguy cơ" } });
    assert!(matches!(
        parse(value),
        Err(ConfigError::UnknownRiskItem { item_id: 42, .. })
    ));
}

#[test]
fn emergency_threshold_requires_contacts() {
    let mut value = base();
    value["scoring"]["emergency_threshold"] = json!(4);
    assert!(matches!(
        parse(value),
        Err(ConfigError::ThresholdWithoutContacts { .. })
    ));
}

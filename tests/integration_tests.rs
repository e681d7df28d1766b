//! Integration tests for the tab generator
//!
//! Tests the full pipeline from pitch-estimate JSON to tab text.

use pretty_assertions::assert_eq;
use tabgen::{generate_tab, generate_tab_from_json, PitchEstimate, TabConfig, TabError};

fn config(yaml: &str) -> TabConfig {
    TabConfig::from_yaml(yaml).unwrap()
}

fn estimates(notes: &[&str]) -> Vec<PitchEstimate> {
    notes.iter().map(|n| PitchEstimate::from_note(*n)).collect()
}

#[test]
fn test_short_phrase_without_bar() {
    let json = r#"[{"note":"E4"},{"note":"F4"},{"note":"Unknown"}]"#;
    let tab = generate_tab_from_json(json, &config("notes-per-measure: 4\nmeasures-per-line: 4")).unwrap();
    assert_eq!(tab, "E|---\nA|---\nD|---\nG|---\nB|---\ne|01-");
}

#[test]
fn test_demo_melody() {
    let notes = estimates(&["E4", "F4", "G4", "A4", "B4", "C5", "Unknown"]);
    let tab = generate_tab(&notes, &TabConfig::default());
    assert_eq!(tab.lines().last(), Some("e|013578-"));
    assert_eq!(tab.lines().next(), Some("E|-------"));
}

#[test]
fn test_simulated_guitar_frequencies() {
    // Open strings followed by A4 and E5, as a frequency-only pitch source reports them
    let json = r#"{"pitch_estimates": [
        {"start_time": 0.0, "end_time": 5.0, "estimated_frequency": 82.41},
        {"start_time": 5.0, "end_time": 10.0, "estimated_frequency": 110.0},
        {"start_time": 10.0, "end_time": 15.0, "estimated_frequency": 146.83},
        {"start_time": 15.0, "end_time": 20.0, "estimated_frequency": 196.0},
        {"start_time": 20.0, "end_time": 25.0, "estimated_frequency": 246.94},
        {"start_time": 25.0, "end_time": 30.0, "estimated_frequency": 329.63},
        {"start_time": 30.0, "end_time": 35.0, "estimated_frequency": 440.0},
        {"start_time": 35.0, "end_time": 40.0, "estimated_frequency": 659.25},
        {"start_time": 40.0, "end_time": 45.0, "estimated_frequency": 60.0}
    ]}"#;
    let tab = generate_tab_from_json(json, &TabConfig::default()).unwrap();
    let expected = "\
E|0-------|-
A|-0------|-
D|--0-----|-
G|---0----|-
B|----0---|-
e|-----0512|-";
    assert_eq!(tab, expected);
}

#[test]
fn test_wrapped_lines_stay_grouped_per_string() {
    let notes = estimates(&["E2", "A2", "D3", "G3", "B3", "E4", "Unknown", "E2"]);
    let tab = generate_tab(&notes, &config("notes-per-measure: 2\nmeasures-per-line: 2"));
    let expected = "\
E|0-|--|
E|--|-0
A|-0|--|
A|--|--
D|--|0-|
D|--|--
G|--|-0|
G|--|--
B|--|--|
B|0-|--
e|--|--|
e|-0|--";
    assert_eq!(tab, expected);
}

#[test]
fn test_no_empty_line_after_final_wrap() {
    let notes = estimates(&["Unknown"; 8]);
    let tab = generate_tab(&notes, &config("notes-per-measure: 2\nmeasures-per-line: 2"));
    assert_eq!(tab.lines().count(), 12);
    assert!(tab.lines().all(|line| line.len() > 2));
    assert!(!tab.ends_with('|'));
}

#[test]
fn test_drop_d_tuning() {
    let notes = estimates(&["D2", "E2"]);
    let tab = generate_tab(&notes, &config("tuning: [D2, A2, D3, G3, B3, E4]"));
    assert_eq!(tab, "D|02\nA|--\nd|--\nG|--\nB|--\nE|--");
}

#[test]
fn test_mixed_phrase_renders_exactly() {
    let notes = estimates(&["C4", "G#3", "Unknown", "B5", "E2", "C2", "F#4", "A#3", "D4"]);
    let config = config("notes-per-measure: 3\nmeasures-per-line: 2");
    let expected = "\
E|---|-0-|
E|---
A|---|---|
A|---
D|---|---|
D|---
G|-1-|---|
G|-3-
B|1--|---|
B|--3
e|---|19--|
e|2--";
    assert_eq!(generate_tab(&notes, &config), expected);
    assert_eq!(generate_tab(&notes, &config), expected);
}

#[test]
fn test_bad_input_is_error() {
    let err = generate_tab_from_json("{", &TabConfig::default()).unwrap_err();
    assert!(matches!(err, TabError::InputError(_)));
}

#[test]
fn test_bad_config_is_error() {
    assert!(TabConfig::from_yaml("notes-per-measure: 0").is_err());
    assert!(TabConfig::from_yaml("measures-per-line: 0").is_err());
    assert!(TabConfig::from_yaml("max-fret: -3").is_err());
    assert!(TabConfig::from_yaml("tuning: [40, 45, 50, 55, 59]").is_err());
}

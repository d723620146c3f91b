//! Share payload and saved-card behavior.

mod common;
use common::{body_request, goal_request};

use fortunecast::export;
use fortunecast::fortune::cast;
use tempfile::tempdir;

#[test]
fn share_payload_has_the_feed_card_fields() {
    let result = cast(&body_request("김준휘", "1999-11-02", "175", "68.5")).unwrap();
    let json = export::share_json(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["advice", "name", "overall", "scores", "tone"]);

    let scores = value["scores"].as_object().unwrap();
    let mut score_keys: Vec<&str> = scores.keys().map(|k| k.as_str()).collect();
    score_keys.sort_unstable();
    assert_eq!(score_keys, ["health", "love", "money", "work"]);

    assert_eq!(value["name"], "김준휘");
    assert_eq!(value["tone"], "Recovery");
    assert_eq!(value["scores"]["work"], 61);
    assert_eq!(value["overall"], 54);
}

#[test]
fn goal_readings_share_the_same_payload_shape() {
    let result = cast(&goal_request("Kim", "1999-11-02", "run a marathon")).unwrap();
    let json = export::share_json(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // The feed card never carries the outlook; that lives on the full card.
    assert!(value.get("outlook").is_none());
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["advice", "name", "overall", "scores", "tone"]);
}

#[test]
fn share_text_names_the_tone_and_overall() {
    let result = cast(&body_request("김준휘", "1999-11-02", "175", "68.5")).unwrap();
    let text = export::share_text(&result);
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("김준휘"));
    assert!(text.contains("Recovery"));
    assert!(text.contains("54/100"));
    assert!(text.contains(result.advice));
}

#[test]
fn saved_card_is_byte_identical_to_the_copy_text() {
    let tmp = tempdir().unwrap();
    let base = tmp.path().to_str().unwrap();
    let result = cast(&goal_request("Lee", "1998-07-09", "write a novel")).unwrap();

    let path = export::save_card(&result, None, base).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, export::full_text(&result));
    assert!(written.contains("write a novel"));
    assert!(!written.contains('\x1b'));
}

#[test]
fn korean_names_stay_out_of_the_filesystem() {
    let tmp = tempdir().unwrap();
    let base = tmp.path().to_str().unwrap();
    let result = cast(&body_request("김준휘", "1999-11-02", "175", "68.5")).unwrap();

    let path = export::save_card(&result, None, base).unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.is_ascii(), "filename not ASCII: {}", file_name);
    assert!(file_name.starts_with("%EA%B9%80%EC%A4%80%ED%9C%98-"));
}

//! Integration tests for the JSON command protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use modchain_gui_lib::command::{execute_json, execute_json_batch, CommandError};
use modchain_gui_lib::harness::TestHarness;

#[test]
fn test_command_batch_workflow() {
    let mut h = TestHarness::new();

    let batch = r#"[
        {"command": "set_control", "control": "width", "value_cm": 90},
        {"command": "select", "index": 0},
        {"command": "set_control", "control": "width", "value_cm": 50},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h.session, batch).unwrap();
    assert_eq!(responses.len(), 4);
    assert!(responses.iter().all(|r| r.success));

    assert_eq!(responses[0].data.as_ref().unwrap()["appended"], 1);
    assert_eq!(responses[1].data.as_ref().unwrap()["selected"], 0);

    let snapshot = responses[3].data.as_ref().unwrap();
    let modules = snapshot["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(snapshot["selected_index"], 0);
    assert_eq!(snapshot["controls_cm"], serde_json::json!([50, 60, 60]));
    let x1 = modules[1]["position"][0].as_f64().unwrap();
    assert!((x1 - 0.8).abs() < 1e-9);
}

#[test]
fn test_command_select_then_resize_tail() {
    let mut h = TestHarness::new();
    h.execute_json(r#"{"command": "set_control", "control": "width", "value_cm": 90}"#)
        .unwrap();

    let resp = h.execute_json(r#"{"command": "select", "index": 1}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.selected_index(), Some(1));

    let resp = h
        .execute_json(r#"{"command": "set_control", "control": "height", "value_cm": 40}"#)
        .unwrap();
    assert!(resp.success);
    assert_eq!(h.dims(1).unwrap().height, 0.4);
    assert_eq!(h.dims(0).unwrap().height, 0.6);
}

#[test]
fn test_command_select_out_of_range_keeps_selection() {
    let mut h = TestHarness::new();
    let resp = h.execute_json(r#"{"command": "select", "index": 3}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(h.selected_index(), Some(0));
}

#[test]
fn test_command_pick_at_far_corner_misses() {
    let mut h = TestHarness::new();
    let before = h.snapshot();
    let resp = h
        .execute_json(r#"{"command": "pick_at", "x": -0.99, "y": 0.99}"#)
        .unwrap();
    assert!(resp.success);
    assert!(resp.data.unwrap()["selected"].is_null());
    assert_eq!(h.snapshot(), before);
}

#[test]
fn test_command_batch_rejects_malformed() {
    let mut h = TestHarness::new();
    let err = execute_json_batch(&mut h.session, r#"[{"command": "set_control"}]"#).unwrap_err();
    assert!(matches!(err, CommandError::InvalidJson(_)));
    // Nothing ran
    assert_eq!(h.module_count(), 1);
}

#[test]
fn test_command_unknown_control_rejected() {
    let mut h = TestHarness::new();
    let result = execute_json(
        &mut h.session,
        r#"{"command": "set_control", "control": "length", "value_cm": 10}"#,
    );
    assert!(result.is_err());
}

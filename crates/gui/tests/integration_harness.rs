//! Integration tests for TestHarness.
//!
//! Drives a headless session the way a user does: slider moves and clicks.

use modchain_gui_lib::coordinator::ResizeOutcome;
use modchain_gui_lib::harness::TestHarness;
use shared::{Dimensions, HIGHLIGHT_COLOR, W_MAX};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_position(h: &TestHarness, index: usize, expected: [f64; 3]) {
    let pos = h.position(index).unwrap();
    for axis in 0..3 {
        assert!(
            approx(pos[axis], expected[axis]),
            "module {index}: position {pos:?}, expected {expected:?}"
        );
    }
}

#[test]
fn test_harness_split_at_ninety() {
    let mut h = TestHarness::new();
    let out = h.set_width_cm(90.0);

    assert_eq!(out, ResizeOutcome::Split { index: 0, appended: 1 });
    assert_eq!(h.module_count(), 2);
    assert_eq!(h.dims(0).unwrap().width, W_MAX);
    assert_eq!(h.dims(1), Some(Dimensions::new(W_MAX, 0.6, 0.6)));
    assert_position(&h, 0, [0.3, 0.3, 0.3]);
    assert_position(&h, 1, [0.9, 0.3, 0.3]);
}

#[test]
fn test_harness_shrink_inner_module_moves_tail() {
    let mut h = TestHarness::new();
    h.set_width_cm(90.0);

    assert_eq!(h.pick(0), Some(0));
    assert_eq!(h.controls_cm()[0], 60);

    let out = h.set_width_cm(50.0);
    assert_eq!(out, ResizeOutcome::Resized { index: 0 });
    assert_eq!(h.module_count(), 2);
    assert!(approx(h.dims(0).unwrap().width, 0.5));
    assert_position(&h, 0, [0.25, 0.3, 0.3]);
    assert_position(&h, 1, [0.8, 0.3, 0.3]);
}

#[test]
fn test_harness_pick_miss_changes_nothing() {
    let mut h = TestHarness::new();
    h.set_width_cm(90.0);
    h.pick(1);
    let before = h.snapshot();

    assert_eq!(h.pick_nothing(), None);
    assert_eq!(h.snapshot(), before);
}

#[test]
fn test_harness_split_only_at_tail() {
    let mut h = TestHarness::new();
    h.set_width_cm(90.0);
    h.pick(0);

    let out = h.set_width_cm(120.0);
    assert_eq!(out, ResizeOutcome::Resized { index: 0 });
    assert_eq!(h.module_count(), 2);
    assert_eq!(h.dims(0).unwrap().width, W_MAX);
    // The slider keeps the requested value; the module does not
    assert_eq!(h.controls_cm()[0], 120);
}

#[test]
fn test_harness_tail_keeps_growing() {
    let mut h = TestHarness::new();
    h.set_width_cm(90.0);
    h.pick(1);
    h.set_width_cm(75.0);
    h.pick(2);
    h.set_width_cm(61.0);

    assert_eq!(h.module_count(), 4);
    let total = h.snapshot().total_width;
    assert!(approx(total, 2.4));
    assert_position(&h, 3, [2.1, 0.3, 0.3]);
}

#[test]
fn test_harness_split_carries_cross_section() {
    let mut h = TestHarness::new();
    h.set_height_cm(80.0);
    h.set_depth_cm(45.0);
    h.set_width_cm(70.0);

    assert_eq!(h.module_count(), 2);
    assert_eq!(h.dims(1), Some(Dimensions::new(W_MAX, 0.8, 0.45)));
    assert_position(&h, 1, [0.9, 0.4, 0.225]);
}

#[test]
fn test_harness_selection_repaint() {
    let mut h = TestHarness::new();
    h.set_width_cm(90.0);
    let originals: Vec<_> = h.snapshot().modules.iter().map(|m| m.original_color).collect();

    h.pick(1);
    assert_eq!(h.displayed_color(1), Some(HIGHLIGHT_COLOR));
    assert_eq!(h.displayed_color(0), Some(originals[0]));

    h.pick(0);
    assert_eq!(h.displayed_color(0), Some(HIGHLIGHT_COLOR));
    assert_eq!(h.displayed_color(1), Some(originals[1]));
}

#[test]
fn test_harness_pick_syncs_controls() {
    let mut h = TestHarness::new();
    h.set_height_cm(35.0);
    h.set_width_cm(90.0);
    h.pick(1);
    assert_eq!(h.controls_cm(), [60, 35, 60]);

    h.set_depth_cm(20.0);
    h.pick(0);
    assert_eq!(h.controls_cm(), [60, 35, 60]);
    h.pick(1);
    assert_eq!(h.controls_cm(), [60, 35, 20]);
}

#[test]
fn test_harness_fractional_width_truncates() {
    let mut h = TestHarness::new();
    assert_eq!(h.set_width_cm(60.9), ResizeOutcome::Resized { index: 0 });
    assert_eq!(h.module_count(), 1);
    assert_eq!(h.controls_cm()[0], 60);
}

#[test]
fn test_harness_pick_at_screen_center_hits_module() {
    let mut h = TestHarness::new();
    h.session
        .scene
        .camera
        .look_at_from(glam::Vec3::new(0.3, 0.3, 5.0), glam::Vec3::new(0.3, 0.3, 0.3));
    assert_eq!(h.pick_at([0.0, 0.0]), Some(0));
    assert_eq!(h.displayed_color(0), Some(HIGHLIGHT_COLOR));
}

#[test]
fn test_harness_range_change_keeps_sliders_on_model() {
    use modchain_gui_lib::state::settings::{ControlSettings, RangeCm};

    let mut h = TestHarness::new();
    let mut ranges = ControlSettings::default();
    ranges.width = RangeCm::new(10, 30);
    assert!(h.session.apply_control_ranges(&ranges).is_err());
    assert_eq!(h.controls_cm()[0], 60);

    h.set_height_cm(80.0);
    assert_eq!(h.dims(0), Some(Dimensions::new(W_MAX, 0.8, 0.6)));
    assert_eq!(h.controls_cm(), [60, 80, 60]);
}

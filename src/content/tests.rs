//! Content domain: tests for tuning loading and validation.

use std::path::Path;

use super::{load_movement_tuning, parse_single, validate_tuning};
use crate::movement::MovementTuning;

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning: MovementTuning =
        parse_single("inline", "(move_speed: 9.5, coyote_time: 0.2)").expect("valid RON");

    assert_eq!(tuning.move_speed, 9.5);
    assert_eq!(tuning.coyote_time, 0.2);
    assert_eq!(tuning.jump_force, MovementTuning::default().jump_force);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<MovementTuning>("broken.ron", "(move_speed: )").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_movement_tuning(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_loads_and_validates() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let tuning = load_movement_tuning(&base).expect("shipped tuning loads");

    assert!(validate_tuning(&tuning).is_empty());
    assert!(tuning.move_speed > 0.0);
}

#[test]
fn test_validation_reports_bad_fields() {
    let tuning = MovementTuning {
        wall_slide_bonus: -1.0,
        apex_time: f32::INFINITY,
        ..MovementTuning::default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["apex_time", "wall_slide_bonus"]);
    assert!(errors[0].to_string().contains("not a finite number"));
    assert!(errors[1].to_string().contains("negative"));

    assert!(validate_tuning(&tuning.sanitized()).is_empty());
}

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

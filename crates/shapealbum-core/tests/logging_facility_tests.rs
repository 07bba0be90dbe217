#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use shapealbum_core::logging_facility::test_capture::init_test_capture;
use shapealbum_core::{log_op_end, log_op_error, log_op_start};
use shapealbum_core::{AlbumError, CommandInterpreter};
use shapealbum_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_APPLIED, FIELD_BATCH_ID, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_LINE_NUMBER, FIELD_SHAPE_COUNT, FIELD_SHAPE_NAME,
    FIELD_SHAPE_TYPE, FIELD_SNAPSHOT_COUNT, FIELD_SNAPSHOT_ID,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = AlbumError::UnknownShape {
        name: "R".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_UNKNOWN_SHAPE"));
    assert_eq!(events[0].field(FIELD_ERR_KIND), Some("UnknownShape"));
}

#[test]
fn test_album_boundary_logs_start_and_end() {
    let capture = init_test_capture();
    let mut album = common::fixed_album();
    let name = "logging_boundary_shape_4";

    album.add_shape(name, "rectangle").unwrap();

    let count = |event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("add_shape")
                && e.event.as_deref() == Some(event)
                && e.field(FIELD_SHAPE_NAME) == Some(name)
        })
    };
    assert_eq!(count(EVENT_START), 1);
    assert_eq!(count(EVENT_END), 1);

    let typed = capture.count_events(|e| {
        e.op.as_deref() == Some("add_shape")
            && e.field(FIELD_SHAPE_NAME) == Some(name)
            && e.field(FIELD_SHAPE_TYPE) == Some("rectangle")
    });
    assert_eq!(typed, 1, "only the start event carries the type label");
}

#[test]
fn test_album_boundary_logs_error_once() {
    let capture = init_test_capture();
    let mut album = common::fixed_album();
    let name = "logging_missing_shape_5";

    let _ = album.move_shape(name, 1.0, 1.0);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("move_shape")
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_SHAPE_NAME) == Some(name)
    });
    assert_eq!(starts, 1);

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("move_shape")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_SHAPE_NAME) == Some(name)
            && e.field(FIELD_ERR_CODE) == Some("ERR_UNKNOWN_SHAPE")
    });
    assert_eq!(errors, 1);
}

#[test]
fn test_batch_halt_logs_line_number() {
    let capture = init_test_capture();
    let mut album = common::fixed_album();

    let lines = ["snapshot", "remove logging_ghost_6"];
    let outcome = CommandInterpreter::run(&mut album, lines);
    assert!(!outcome.is_completed());

    let halted: Vec<_> = capture
        .events_for_op("run_batch")
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_END_ERROR)
                && e.field(FIELD_ERR_CODE) == Some("ERR_BATCH_HALTED")
                && e.field(FIELD_LINE_NUMBER) == Some("2")
        })
        .collect();
    assert!(!halted.is_empty());
    assert!(halted.iter().all(|e| e.field(FIELD_BATCH_ID).is_some()));
    assert!(halted.iter().any(|e| e.field(FIELD_APPLIED) == Some("1")));
}

#[test]
fn test_take_snapshot_end_carries_id() {
    let capture = init_test_capture();
    let mut album = common::fixed_album();

    let id = album.take_snapshot("logging_snapshot_7");

    let ended = capture.count_events(|e| {
        e.op.as_deref() == Some("take_snapshot")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_SNAPSHOT_ID) == Some(id.as_str())
    });
    assert!(ended >= 1);
}

#[test]
fn test_reset_start_carries_counts() {
    let capture = init_test_capture();
    let mut album = common::fixed_album();
    for name in ["A", "B", "C", "D", "E", "F", "G"] {
        album.add_shape(name, "oval").unwrap();
    }
    for _ in 0..5 {
        album.take_snapshot("logging_reset_8");
    }

    album.reset();

    let started = capture.count_events(|e| {
        e.op.as_deref() == Some("reset")
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_SHAPE_COUNT) == Some("7")
            && e.field(FIELD_SNAPSHOT_COUNT) == Some("5")
    });
    assert!(started >= 1);
}

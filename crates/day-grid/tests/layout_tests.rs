//! End-to-end tests for `layout_day` — core scenarios, geometry, and
//! configuration failure modes.

use chrono::NaiveDate;
use day_grid::{layout_day, LayoutConfig, LayoutError, RawEvent, RejectReason};

fn raw(id: &str, start: &str, end: Option<&str>) -> RawEvent {
    RawEvent {
        id: id.to_string(),
        title: format!("Event {}", id),
        start: start.to_string(),
        end: end.map(str::to_string),
        category: Default::default(),
        venue_name: "The Venue".to_string(),
    }
}

fn config() -> LayoutConfig {
    LayoutConfig::for_day(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
}

#[test]
fn three_overlapping_events_share_three_columns() {
    // 09:00-10:00, 09:30-10:30, 09:45-11:00 — all mutually overlapping.
    let events = vec![
        raw("a", "2026-03-14T09:00:00", Some("2026-03-14T10:00:00")),
        raw("b", "2026-03-14T09:30:00", Some("2026-03-14T10:30:00")),
        raw("c", "2026-03-14T09:45:00", Some("2026-03-14T11:00:00")),
    ];
    let layout = layout_day(&events, &config()).unwrap();

    assert_eq!(layout.positioned.len(), 3);
    assert!(layout.positioned.iter().all(|e| e.column_count == 3));

    let mut indices: Vec<usize> = layout.positioned.iter().map(|e| e.column_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2], "three distinct columns");

    // Columns partition the grid width minus gutters.
    let expected_width = (360.0 - 2.0 * 4.0) / 3.0;
    for event in &layout.positioned {
        assert!((event.width - expected_width).abs() < 1e-9);
    }
}

#[test]
fn back_to_back_events_both_get_full_width() {
    // 09:00-10:00 and 10:00-11:00 — touching, not overlapping.
    let events = vec![
        raw("a", "2026-03-14T09:00:00", Some("2026-03-14T10:00:00")),
        raw("b", "2026-03-14T10:00:00", Some("2026-03-14T11:00:00")),
    ];
    let layout = layout_day(&events, &config()).unwrap();

    for event in &layout.positioned {
        assert_eq!(event.column_count, 1, "event {} shares with nobody", event.id);
        assert_eq!(event.column_index, 0);
        assert_eq!(event.left, 0.0);
        assert_eq!(event.width, 360.0);
    }
}

#[test]
fn missing_end_defaults_to_ninety_minutes() {
    let events = vec![raw("a", "2026-03-14T14:00:00", None)];
    let layout = layout_day(&events, &config()).unwrap();

    let event = &layout.positioned[0];
    assert_eq!(event.end_minute - event.start_minute, 90);
}

#[test]
fn malformed_start_is_rejected_not_positioned() {
    let events = vec![
        raw("good", "2026-03-14T09:00:00", None),
        raw("bad", "not-a-date", None),
    ];
    let layout = layout_day(&events, &config()).unwrap();

    assert_eq!(layout.positioned.len(), 1);
    assert_eq!(layout.positioned[0].id, "good");
    assert_eq!(layout.rejected.len(), 1);
    assert_eq!(layout.rejected[0].id, "bad");
    assert_eq!(layout.rejected[0].reason, RejectReason::InvalidTimestamp);
}

#[test]
fn empty_input_yields_empty_layout_with_full_height() {
    let layout = layout_day(&[], &config()).unwrap();

    assert!(layout.positioned.is_empty());
    assert!(layout.rejected.is_empty());
    assert_eq!(layout.content_height_px, 24.0 * 80.0);
}

#[test]
fn duplicate_id_rejects_the_second_occurrence() {
    let events = vec![
        raw("e1", "2026-03-14T09:00:00", None),
        raw("e1", "2026-03-14T15:00:00", None),
    ];
    let layout = layout_day(&events, &config()).unwrap();

    assert_eq!(layout.positioned.len(), 1);
    assert_eq!(layout.positioned[0].start_minute, 9 * 60);
    assert_eq!(layout.rejected.len(), 1);
    assert_eq!(layout.rejected[0].reason, RejectReason::DuplicateId);
}

#[test]
fn vertical_geometry_scales_with_hour_height() {
    let events = vec![raw("a", "2026-03-14T09:00:00", Some("2026-03-14T10:30:00"))];
    let layout = layout_day(&events, &config()).unwrap();

    let event = &layout.positioned[0];
    assert_eq!(event.top, 9.0 * 80.0);
    assert_eq!(event.height, 1.5 * 80.0);
}

#[test]
fn short_events_are_floored_at_min_height() {
    let events = vec![raw("a", "2026-03-14T09:00:00", Some("2026-03-14T09:10:00"))];
    let layout = layout_day(&events, &config()).unwrap();

    assert_eq!(
        layout.positioned[0].height, 40.0,
        "10-minute event renders at the minimum height"
    );
}

#[test]
fn narrowed_window_shifts_the_origin() {
    let config = LayoutConfig {
        day_start_hour: 8,
        day_end_hour: 20,
        hour_height_px: 100.0,
        ..config()
    };
    let events = vec![raw("a", "2026-03-14T09:00:00", Some("2026-03-14T10:00:00"))];
    let layout = layout_day(&events, &config).unwrap();

    assert_eq!(layout.content_height_px, 12.0 * 100.0);
    assert_eq!(layout.positioned[0].top, 100.0, "one hour below the origin");
}

#[test]
fn positioned_is_sorted_by_start_minute() {
    let events = vec![
        raw("late", "2026-03-14T20:00:00", None),
        raw("early", "2026-03-14T08:00:00", None),
        raw("mid", "2026-03-14T12:00:00", None),
    ];
    let layout = layout_day(&events, &config()).unwrap();

    let starts: Vec<i64> = layout.positioned.iter().map(|e| e.start_minute).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

#[test]
fn early_cluster_does_not_narrow_unrelated_later_events() {
    // A crowded morning must not steal width from a lone evening event —
    // column state never crosses cluster boundaries.
    let events = vec![
        raw("m1", "2026-03-14T09:00:00", Some("2026-03-14T10:00:00")),
        raw("m2", "2026-03-14T09:15:00", Some("2026-03-14T10:15:00")),
        raw("m3", "2026-03-14T09:30:00", Some("2026-03-14T10:30:00")),
        raw("eve", "2026-03-14T20:00:00", Some("2026-03-14T21:00:00")),
    ];
    let layout = layout_day(&events, &config()).unwrap();

    let evening = layout
        .positioned
        .iter()
        .find(|e| e.id == "eve")
        .expect("evening event is positioned");
    assert_eq!(evening.column_count, 1);
    assert_eq!(evening.width, 360.0);
}

#[test]
fn zero_hour_height_is_a_fatal_config_error() {
    let config = LayoutConfig {
        hour_height_px: 0.0,
        ..config()
    };
    let err = layout_day(&[], &config).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveDimension { .. }));
}

#[test]
fn empty_hour_window_is_a_fatal_config_error() {
    let config = LayoutConfig {
        day_start_hour: 20,
        day_end_hour: 8,
        ..config()
    };
    let err = layout_day(&[], &config).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::HourRange { start: 20, end: 8 }
    ));
}

#[test]
fn negative_gutter_is_a_fatal_config_error() {
    let config = LayoutConfig {
        column_gutter_px: -1.0,
        ..config()
    };
    assert!(layout_day(&[], &config).is_err());
}

#[test]
fn non_positive_default_duration_is_a_fatal_config_error() {
    let config = LayoutConfig {
        default_duration_minutes: 0,
        ..config()
    };
    let err = layout_day(&[], &config).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveDuration(0)));
}

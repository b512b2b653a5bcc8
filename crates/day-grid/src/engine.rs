//! Layout orchestration — the single entry point the rendering layer calls.
//!
//! `layout_day` wires the pipeline together:
//! normalize → sort → cluster → assign columns per cluster → map geometry.
//! Every stage is a pure transformation; the engine holds no state between
//! calls and the caller owns the returned data outright.

use crate::cluster::split_clusters;
use crate::columns::assign_columns;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::geometry::{content_height, map_frame};
use crate::normalize::normalize_events;
use crate::types::{DayLayout, PositionedEvent, RawEvent};

/// Lay out one day's events as non-overlapping rectangles on the day grid.
///
/// Concurrent events are packed into side-by-side columns; independent
/// groups of events each spread across the full grid width. Malformed
/// events are downgraded to `rejected` entries and never abort the call.
/// `positioned` comes back sorted by `start_minute`.
///
/// # Errors
/// Returns a [`LayoutError`](crate::LayoutError) only for an invalid
/// configuration (empty hour window, non-positive dimensions) — that is a
/// setup bug and fails fast, unlike bad event data.
pub fn layout_day(events: &[RawEvent], config: &LayoutConfig) -> Result<DayLayout> {
    config.validate()?;

    let (mut normalized, rejected) = normalize_events(events, config);

    // Deterministic order regardless of input permutation: ties on the
    // interval are broken by id.
    normalized.sort_by(|a, b| {
        (a.start_minute, a.end_minute, a.id.as_str())
            .cmp(&(b.start_minute, b.end_minute, b.id.as_str()))
    });

    let mut positioned = Vec::with_capacity(normalized.len());
    for range in split_clusters(&normalized) {
        let cluster = &normalized[range.clone()];
        let assignment = assign_columns(cluster);

        for (event, &column_index) in cluster.iter().zip(&assignment.indices) {
            let frame = map_frame(
                event.start_minute,
                event.end_minute,
                column_index,
                assignment.count,
                config,
            );
            positioned.push(PositionedEvent {
                id: event.id.clone(),
                title: event.title.clone(),
                category: event.category,
                venue_name: event.venue_name.clone(),
                start_minute: event.start_minute,
                end_minute: event.end_minute,
                column_index,
                column_count: assignment.count,
                top: frame.top,
                height: frame.height,
                left: frame.left,
                width: frame.width,
            });
        }
    }

    Ok(DayLayout {
        positioned,
        rejected,
        content_height_px: content_height(config),
    })
}

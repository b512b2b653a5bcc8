//! Time normalization — raw feed events to minute offsets on the day grid.
//!
//! Each event is validated and its wall-clock times are converted to minute
//! offsets from the grid origin (`reference_day` at `day_start_hour`).
//! Events that fail validation are reported, not propagated as errors, so a
//! single bad record never takes down the whole day.

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime};
use std::collections::HashSet;

use crate::config::LayoutConfig;
use crate::types::{NormalizedEvent, RawEvent, RejectReason, RejectedEvent};

/// Parse an event timestamp into a naive wall-clock datetime.
///
/// Accepts RFC 3339 (e.g., `"2026-03-14T19:00:00-07:00"`, in which case the
/// written local clock is used as-is — events arrive pre-normalized to the
/// display timezone) and bare naive datetimes with or without seconds.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Normalize raw events into minute-offset intervals, splitting off rejects.
///
/// Validation order per event (deterministic, order-stable):
/// 1. blank `id` or `title` → `MissingRequiredField`
/// 2. `id` seen earlier in the input → `DuplicateId` (first occurrence wins)
/// 3. unparseable `start` → `InvalidTimestamp`
///
/// `end` is used only when it parses and is strictly after `start`;
/// otherwise the configured default duration applies. Both offsets are
/// clipped to the visible window, and an interval that clips to zero length
/// is bumped to one minute so it still renders downstream.
pub fn normalize_events(
    events: &[RawEvent],
    config: &LayoutConfig,
) -> (Vec<NormalizedEvent>, Vec<RejectedEvent>) {
    let origin = config.reference_day.and_time(NaiveTime::MIN)
        + Duration::hours(config.day_start_hour as i64);
    let day_minutes = config.day_minutes();

    let mut normalized = Vec::with_capacity(events.len());
    let mut rejected = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(events.len());

    for event in events {
        if event.id.trim().is_empty() || event.title.trim().is_empty() {
            rejected.push(RejectedEvent {
                id: event.id.clone(),
                reason: RejectReason::MissingRequiredField,
            });
            continue;
        }
        if !seen_ids.insert(event.id.as_str()) {
            rejected.push(RejectedEvent {
                id: event.id.clone(),
                reason: RejectReason::DuplicateId,
            });
            continue;
        }
        let Some(start) = parse_timestamp(&event.start) else {
            rejected.push(RejectedEvent {
                id: event.id.clone(),
                reason: RejectReason::InvalidTimestamp,
            });
            continue;
        };

        let start_minute = (start - origin).num_minutes();
        let end_minute = event
            .end
            .as_deref()
            .and_then(parse_timestamp)
            .filter(|end| *end > start)
            .map(|end| (end - origin).num_minutes())
            .unwrap_or(start_minute + config.default_duration_minutes);

        // Clip to the visible window; keep at least one minute so the event
        // still shows as a sliver at the grid edge instead of vanishing.
        let start_minute = start_minute.clamp(0, day_minutes);
        let mut end_minute = end_minute.clamp(0, day_minutes);
        if end_minute <= start_minute {
            end_minute = start_minute + 1;
        }

        normalized.push(NormalizedEvent {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category,
            venue_name: event.venue_name.clone(),
            start_minute,
            end_minute,
        });
    }

    (normalized, rejected)
}

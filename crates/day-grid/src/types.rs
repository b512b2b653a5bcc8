//! Data model for the day-view layout pipeline.
//!
//! Events flow through three shapes: [`RawEvent`] (caller input, timestamps
//! still strings), [`NormalizedEvent`] (minute offsets on the day grid), and
//! [`PositionedEvent`] (minute offsets plus pixel geometry). Events that fail
//! validation exit the pipeline early as [`RejectedEvent`]s.

use serde::{Deserialize, Serialize};

/// Category of a discovered event, as tagged by the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Music,
    Sports,
    Arts,
    Food,
    Nightlife,
    Community,
    #[default]
    Other,
}

/// An event as delivered by the feed, before any validation.
///
/// `start` and `end` are timestamp strings (RFC 3339, or a bare local
/// datetime like `"2026-03-14T19:00:00"`). They are kept as strings here so
/// that parse failures can be reported per event instead of failing the
/// whole batch at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    /// Optional explicit end. When absent (or not strictly after `start`),
    /// the configured default duration applies.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub venue_name: String,
}

/// An event whose times have been resolved to minute offsets on the day grid.
///
/// `start_minute` and `end_minute` are minutes since the grid origin
/// (`reference_day` at `day_start_hour`), clipped to the visible window.
/// The interval is half-open: `[start_minute, end_minute)`, with
/// `end_minute > start_minute` guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub id: String,
    pub title: String,
    pub category: EventCategory,
    pub venue_name: String,
    pub start_minute: i64,
    pub end_minute: i64,
}

/// A fully laid-out event: minute offsets plus the pixel rectangle the
/// renderer should draw.
///
/// `column_index` is this event's lane within its overlap cluster;
/// `column_count` is the cluster-wide lane count (identical for every event
/// in the same cluster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub id: String,
    pub title: String,
    pub category: EventCategory,
    pub venue_name: String,
    pub start_minute: i64,
    pub end_minute: i64,
    pub column_index: usize,
    pub column_count: usize,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

/// Why an event was excluded from the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The start timestamp did not parse.
    InvalidTimestamp,
    /// `id` or `title` was missing (empty or whitespace-only).
    MissingRequiredField,
    /// Another event with the same `id` appeared earlier in the input.
    /// The first occurrence wins; this one is dropped.
    DuplicateId,
}

/// An event excluded from the layout, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedEvent {
    pub id: String,
    pub reason: RejectReason,
}

/// The result of laying out one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    /// Positioned rectangles, sorted by `start_minute`.
    pub positioned: Vec<PositionedEvent>,
    /// Events excluded from the layout, in input order.
    pub rejected: Vec<RejectedEvent>,
    /// Total pixel height of the day grid; sizes the scroll container.
    pub content_height_px: f64,
}

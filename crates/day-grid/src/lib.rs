//! # day-grid
//!
//! Day-view event layout engine for calendar-style grids.
//!
//! Given a day's time-stamped events, computes non-overlapping pixel
//! rectangles so concurrent events render as side-by-side columns on a
//! vertical time grid, the way Google Calendar or Outlook draw a day.
//! The engine is a pure, synchronous function: no I/O, no shared state,
//! fresh output on every call — safe to invoke per render frame and from
//! any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use day_grid::{layout_day, LayoutConfig, RawEvent};
//!
//! let events = vec![RawEvent {
//!     id: "e1".into(),
//!     title: "Evening show".into(),
//!     start: "2026-03-14T19:00:00".into(),
//!     end: Some("2026-03-14T21:00:00".into()),
//!     category: Default::default(),
//!     venue_name: "Main Hall".into(),
//! }];
//!
//! let config = LayoutConfig::for_day(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
//! let layout = layout_day(&events, &config).unwrap();
//! assert_eq!(layout.positioned.len(), 1);
//! assert_eq!(layout.positioned[0].column_count, 1);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] — `layout_day` orchestration (the public entry point)
//! - [`normalize`] — timestamps → minute offsets, per-event validation
//! - [`cluster`] — partition events into independent overlap clusters
//! - [`columns`] — greedy interval coloring within a cluster
//! - [`geometry`] — minute intervals → pixel rectangles
//! - [`config`] — explicit layout configuration
//! - [`error`] — error types (configuration failures only)
//! - [`types`] — event data model

pub mod cluster;
pub mod columns;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod types;

pub use config::LayoutConfig;
pub use engine::layout_day;
pub use error::LayoutError;
pub use types::{
    DayLayout, EventCategory, NormalizedEvent, PositionedEvent, RawEvent, RejectReason,
    RejectedEvent,
};

//! Geometry mapping — minute intervals and column slots to pixel rectangles.
//!
//! Pure arithmetic: given the same inputs the same rectangle comes out,
//! independent of rendering order.

use crate::config::LayoutConfig;

/// A pixel rectangle on the day grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventFrame {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

/// Map one event's minute interval and column slot to its pixel rectangle.
///
/// The cluster's columns partition the horizontal span `[0, grid_width_px]`
/// equally, with a fixed gutter between adjacent columns. Height is floored
/// at `min_event_height_px` so very short events stay visible and tappable.
pub fn map_frame(
    start_minute: i64,
    end_minute: i64,
    column_index: usize,
    column_count: usize,
    config: &LayoutConfig,
) -> EventFrame {
    let top = start_minute as f64 / 60.0 * config.hour_height_px;
    let raw_height = (end_minute - start_minute) as f64 / 60.0 * config.hour_height_px;
    let height = raw_height.max(config.min_event_height_px);

    let gutter_total = (column_count as f64 - 1.0) * config.column_gutter_px;
    let width = (config.grid_width_px - gutter_total) / column_count as f64;
    let left = column_index as f64 * (width + config.column_gutter_px);

    EventFrame {
        top,
        height,
        left,
        width,
    }
}

/// Total pixel height of the visible day window.
pub fn content_height(config: &LayoutConfig) -> f64 {
    (config.day_end_hour - config.day_start_hour) as f64 * config.hour_height_px
}

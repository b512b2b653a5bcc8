//! Layout configuration.
//!
//! Everything the engine needs is passed in explicitly through
//! [`LayoutConfig`] — no global defaults, no hidden state — so the engine
//! stays trivially testable and reusable outside any particular UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Configuration for one day-grid layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// The calendar day being rendered. Event minute offsets are computed
    /// relative to this day at `day_start_hour`.
    pub reference_day: NaiveDate,
    /// First visible hour of the grid (0–23).
    pub day_start_hour: u32,
    /// Hour at which the grid ends (1–24, exclusive of rendering).
    pub day_end_hour: u32,
    /// Pixel height of one hour row.
    pub hour_height_px: f64,
    /// Floor on rendered event height, so short events stay tappable.
    pub min_event_height_px: f64,
    /// Fixed spacing between adjacent columns.
    pub column_gutter_px: f64,
    /// Duration applied when an event has no usable end time.
    pub default_duration_minutes: i64,
    /// Horizontal span of the day grid. Every overlap cluster distributes
    /// its columns across this full width independently.
    pub grid_width_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reference_day: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            day_start_hour: 0,
            day_end_hour: 24,
            hour_height_px: 80.0,
            min_event_height_px: 40.0,
            column_gutter_px: 4.0,
            default_duration_minutes: 90,
            grid_width_px: 360.0,
        }
    }
}

impl LayoutConfig {
    /// A default config for the given day.
    pub fn for_day(reference_day: NaiveDate) -> Self {
        Self {
            reference_day,
            ..Self::default()
        }
    }

    /// Number of minutes the visible window spans.
    pub fn day_minutes(&self) -> i64 {
        (self.day_end_hour as i64 - self.day_start_hour as i64) * 60
    }

    /// Validate the configuration, failing fast on programmer error.
    ///
    /// # Errors
    /// Returns `LayoutError::HourRange` when the hour window is empty or
    /// extends past 24, `NonPositiveDimension`/`NegativeDimension` for bad
    /// pixel values, and `NonPositiveDuration` for a non-positive default
    /// duration.
    pub fn validate(&self) -> Result<()> {
        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            return Err(LayoutError::HourRange {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }
        for (name, value) in [
            ("hour_height_px", self.hour_height_px),
            ("grid_width_px", self.grid_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::NonPositiveDimension { name, value });
            }
        }
        for (name, value) in [
            ("min_event_height_px", self.min_event_height_px),
            ("column_gutter_px", self.column_gutter_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::NegativeDimension { name, value });
            }
        }
        if self.default_duration_minutes <= 0 {
            return Err(LayoutError::NonPositiveDuration(
                self.default_duration_minutes,
            ));
        }
        Ok(())
    }
}

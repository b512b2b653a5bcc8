//! Error types for day-grid layout operations.
//!
//! Only configuration problems surface as errors — they indicate a setup bug
//! and fail fast. Malformed *event* data never errors; those events are
//! reported as [`RejectedEvent`](crate::types::RejectedEvent)s in the result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid hour range: day_start_hour={start}, day_end_hour={end} (need start < end <= 24)")]
    HourRange { start: u32, end: u32 },

    #[error("invalid configuration: {name} must be a positive finite number, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("invalid configuration: {name} must not be negative or non-finite, got {value}")]
    NegativeDimension { name: &'static str, value: f64 },

    #[error("invalid configuration: default_duration_minutes must be positive, got {0}")]
    NonPositiveDuration(i64),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

//! WASM bindings for day-grid.
//!
//! Exposes the layout engine to a JavaScript rendering layer via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings:
//! the caller passes the raw event array and a (possibly partial) config
//! object, and receives the full `DayLayout` back as JSON.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/day-grid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/day_grid_wasm.wasm
//! ```

use chrono::NaiveDate;
use day_grid::{LayoutConfig, RawEvent};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Partial config as sent from JavaScript; missing keys take the library
/// defaults so the JS side only specifies what it overrides.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ConfigInput {
    reference_day: Option<String>,
    day_start_hour: Option<u32>,
    day_end_hour: Option<u32>,
    hour_height_px: Option<f64>,
    min_event_height_px: Option<f64>,
    column_gutter_px: Option<f64>,
    default_duration_minutes: Option<i64>,
    grid_width_px: Option<f64>,
}

impl ConfigInput {
    fn into_layout_config(self) -> Result<LayoutConfig, String> {
        let mut config = LayoutConfig::default();
        if let Some(day) = self.reference_day {
            config.reference_day = day
                .parse::<NaiveDate>()
                .map_err(|e| format!("Invalid reference_day '{}': {}", day, e))?;
        }
        if let Some(v) = self.day_start_hour {
            config.day_start_hour = v;
        }
        if let Some(v) = self.day_end_hour {
            config.day_end_hour = v;
        }
        if let Some(v) = self.hour_height_px {
            config.hour_height_px = v;
        }
        if let Some(v) = self.min_event_height_px {
            config.min_event_height_px = v;
        }
        if let Some(v) = self.column_gutter_px {
            config.column_gutter_px = v;
        }
        if let Some(v) = self.default_duration_minutes {
            config.default_duration_minutes = v;
        }
        if let Some(v) = self.grid_width_px {
            config.grid_width_px = v;
        }
        Ok(config)
    }
}

/// JsValue-free core of [`layout_day`], also exercised by native tests.
fn layout_day_json(events_json: &str, config_json: &str) -> Result<String, String> {
    let events: Vec<RawEvent> =
        serde_json::from_str(events_json).map_err(|e| format!("Invalid events JSON: {}", e))?;

    let config_input: ConfigInput =
        serde_json::from_str(config_json).map_err(|e| format!("Invalid config JSON: {}", e))?;
    let config = config_input.into_layout_config()?;

    let layout = day_grid::layout_day(&events, &config).map_err(|e| e.to_string())?;

    serde_json::to_string(&layout).map_err(|e| format!("Serialization error: {}", e))
}

/// Lay out one day's events; returns the `DayLayout` as a JSON string.
///
/// `events_json` is a JSON array of raw events (`id`, `title`, `start`,
/// optional `end`, `category`, `venue_name`). `config_json` is a JSON
/// object with any subset of the config keys; pass `"{}"` for defaults.
///
/// Malformed events come back in the `rejected` array; only unparseable
/// input JSON or an invalid configuration produces an error.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(events_json: &str, config_json: &str) -> Result<String, JsValue> {
    layout_day_json(events_json, config_json).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_overrides_defaults() {
        let input: ConfigInput =
            serde_json::from_str(r#"{"hour_height_px": 60.0, "reference_day": "2026-03-14"}"#)
                .unwrap();
        let config = input.into_layout_config().unwrap();

        assert_eq!(config.hour_height_px, 60.0);
        assert_eq!(config.grid_width_px, 360.0, "unset keys keep defaults");
        assert_eq!(
            config.reference_day,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }

    #[test]
    fn layout_roundtrips_through_json() {
        let events = r#"[{
            "id": "e1",
            "title": "Evening Show",
            "start": "2026-03-14T19:00:00",
            "end": "2026-03-14T21:00:00",
            "category": "music",
            "venue_name": "Main Hall"
        }]"#;
        let config = r#"{"reference_day": "2026-03-14"}"#;

        let out = layout_day_json(events, config).unwrap();
        let layout: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(layout["positioned"].as_array().unwrap().len(), 1);
        assert_eq!(layout["positioned"][0]["column_count"], 1);
        assert_eq!(layout["content_height_px"], 1920.0);
    }

    #[test]
    fn bad_events_json_is_an_error() {
        let err = layout_day_json("not json", "{}").unwrap_err();
        assert!(err.contains("Invalid events JSON"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let config = r#"{"day_start_hour": 22, "day_end_hour": 8}"#;
        let err = layout_day_json("[]", config).unwrap_err();
        assert!(err.contains("invalid hour range"));
    }
}

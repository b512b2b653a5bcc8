//! `daygrid` CLI — run the day-view layout engine from the command line.
//!
//! Handy for debugging render pipelines: feed it the JSON event list a
//! screen would receive and inspect the rectangles the engine produces.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a day of events (stdin → stdout, pretty JSON)
//! cat events.json | daygrid layout --day 2026-03-14
//!
//! # From file to file, with a narrowed visible window
//! daygrid layout -i events.json -o layout.json --day 2026-03-14 \
//!   --day-start 8 --day-end 22
//!
//! # Human-readable digest: counts, clusters, peak columns
//! daygrid summary -i events.json --day 2026-03-14
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use day_grid::{layout_day, DayLayout, LayoutConfig, RawEvent};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "daygrid", version, about = "Day-view event layout engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out events and print the positioned rectangles as JSON
    Layout {
        /// Input JSON file with an array of events (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print a human-readable layout digest
    Summary {
        /// Input JSON file with an array of events (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// The day being rendered, as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    day: Option<NaiveDate>,

    /// First visible hour of the grid
    #[arg(long, default_value_t = 0)]
    day_start: u32,

    /// Hour at which the grid ends
    #[arg(long, default_value_t = 24)]
    day_end: u32,

    /// Pixel height of one hour row
    #[arg(long, default_value_t = 80.0)]
    hour_height: f64,

    /// Minimum rendered event height in pixels
    #[arg(long, default_value_t = 40.0)]
    min_event_height: f64,

    /// Spacing between adjacent columns in pixels
    #[arg(long, default_value_t = 4.0)]
    gutter: f64,

    /// Duration in minutes for events without an end time
    #[arg(long, default_value_t = 90)]
    default_duration: i64,

    /// Horizontal span of the day grid in pixels
    #[arg(long, default_value_t = 360.0)]
    grid_width: f64,
}

impl ConfigArgs {
    fn to_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            reference_day: self
                .day
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            day_start_hour: self.day_start,
            day_end_hour: self.day_end,
            hour_height_px: self.hour_height,
            min_event_height_px: self.min_event_height,
            column_gutter_px: self.gutter,
            default_duration_minutes: self.default_duration,
            grid_width_px: self.grid_width,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            input,
            output,
            config,
        } => {
            let layout = run_layout(input.as_deref(), &config)?;
            let pretty = serde_json::to_string_pretty(&layout)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Summary { input, config } => {
            let layout = run_layout(input.as_deref(), &config)?;
            print!("{}", summarize(&layout));
        }
    }

    Ok(())
}

fn run_layout(input: Option<&str>, config: &ConfigArgs) -> Result<DayLayout> {
    let json = read_input(input)?;
    let events: Vec<RawEvent> =
        serde_json::from_str(&json).context("Failed to parse the events JSON")?;
    layout_day(&events, &config.to_layout_config()).context("Invalid layout configuration")
}

/// Build the digest printed by `daygrid summary`.
fn summarize(layout: &DayLayout) -> String {
    // Positioned events are sorted by start, so clusters are contiguous
    // runs under the same sweep the engine uses.
    let mut clusters = 0usize;
    let mut peak_columns = 0usize;
    let mut cluster_end = i64::MIN;
    for event in &layout.positioned {
        if clusters == 0 || event.start_minute >= cluster_end {
            clusters += 1;
            cluster_end = event.end_minute;
        } else {
            cluster_end = cluster_end.max(event.end_minute);
        }
        peak_columns = peak_columns.max(event.column_count);
    }

    let mut out = String::new();
    out.push_str(&format!("Positioned:     {}\n", layout.positioned.len()));
    out.push_str(&format!("Rejected:       {}\n", layout.rejected.len()));
    for rejected in &layout.rejected {
        out.push_str(&format!("  - {} ({:?})\n", rejected.id, rejected.reason));
    }
    out.push_str(&format!("Clusters:       {}\n", clusters));
    out.push_str(&format!("Peak columns:   {}\n", peak_columns));
    out.push_str(&format!(
        "Content height: {:.1} px\n",
        layout.content_height_px
    ));
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

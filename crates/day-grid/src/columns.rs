//! Column assignment — greedy interval coloring within one overlap cluster.
//!
//! Each event takes the lowest-indexed column whose last occupant has
//! already ended. Greedy assignment on start-sorted intervals uses exactly
//! as many columns as the cluster's peak instantaneous concurrency, which
//! is the minimum possible.

use crate::types::NormalizedEvent;

/// Per-cluster column assignment result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Column index for each event, parallel to the input slice.
    pub indices: Vec<usize>,
    /// Number of columns the cluster needs. Applied uniformly to every
    /// event in the cluster, even ones that only ever had one neighbor —
    /// column count is a cluster-wide property.
    pub count: usize,
}

/// Assign columns to one cluster's events, pre-sorted by
/// `(start_minute, end_minute)`.
///
/// `column_ends[i]` tracks when the last event placed in column `i` ends.
/// A column is free for an event when its occupant ends at or before the
/// event starts (touching is not a conflict).
pub fn assign_columns(cluster: &[NormalizedEvent]) -> ColumnAssignment {
    let mut column_ends: Vec<i64> = Vec::new();
    let mut indices = Vec::with_capacity(cluster.len());

    for event in cluster {
        let column = column_ends
            .iter()
            .position(|&end| end <= event.start_minute);
        match column {
            Some(i) => {
                column_ends[i] = event.end_minute;
                indices.push(i);
            }
            None => {
                indices.push(column_ends.len());
                column_ends.push(event.end_minute);
            }
        }
    }

    ColumnAssignment {
        indices,
        count: column_ends.len(),
    }
}

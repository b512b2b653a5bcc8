//! Overlap clustering — partition a day's events into independent groups.
//!
//! A cluster is a maximal set of events whose `[start_minute, end_minute)`
//! intervals are transitively connected by pairwise overlap. Events in
//! different clusters never contend for horizontal space, so each cluster
//! gets the full grid width to itself. Computing clusters first (instead of
//! threading one column list through the whole day) is what keeps an
//! early-morning pileup from narrowing unrelated evening events.
//!
//! Adjacent events (one ends exactly when the next starts) do NOT overlap
//! and land in separate clusters.

use std::ops::Range;

use crate::types::NormalizedEvent;

/// Split events, pre-sorted by `(start_minute, end_minute)`, into maximal
/// overlap clusters.
///
/// Returns index ranges into the input slice — on a sorted slice each
/// connected component of the interval-overlap graph is contiguous, so a
/// range captures it exactly. The ranges are non-empty, disjoint, and cover
/// the whole slice.
pub fn split_clusters(sorted: &[NormalizedEvent]) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    if sorted.is_empty() {
        return clusters;
    }

    let mut cluster_start = 0;
    let mut cluster_end = sorted[0].end_minute;

    for (i, event) in sorted.iter().enumerate().skip(1) {
        // Strict `<`: touching intervals (end == next start) are disjoint.
        if event.start_minute < cluster_end {
            cluster_end = cluster_end.max(event.end_minute);
        } else {
            clusters.push(cluster_start..i);
            cluster_start = i;
            cluster_end = event.end_minute;
        }
    }
    clusters.push(cluster_start..sorted.len());

    clusters
}

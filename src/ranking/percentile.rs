use std::cmp::Ordering;

use crate::income::interpolate::round1;

/// Percentile of `target` among `values`: the share strictly below it, in
/// `[0, 100]`, one decimal place. Ties do not count in the target's favor.
///
/// Sorts once and binary-searches for the strictly-below count, so regions
/// with thousands of tracts stay O(n log n) rather than pairwise O(n²).
/// Returns `0.0` for an empty slice.
pub fn percentile_rank(values: &mut [f64], target: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let below = values.partition_point(|&v| v < target);
    round1(100.0 * below as f64 / values.len() as f64)
}

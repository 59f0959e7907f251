//! Snap resolution: nearest grid circle within a tolerance.

use glam::DVec2;

use crate::grid::GridValueSet;
use crate::log::debug;

/// Default snap tolerance, in the same normalized units as the
/// reflection-coefficient plane (the chart's outer boundary has radius 1).
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Snap `point` to the nearest constant-resistance circle or
/// constant-reactance arc of `grid`, or return it unchanged if no circle is
/// within `tolerance`.
///
/// The scan is a plain linear pass over [`GridValueSet::candidates`] —
/// O(N) with N = 255 for the generated grid, bounded and allocation-free.
/// Both comparisons are strict, so among equidistant candidates the first
/// one in candidate order wins; combined with the fixed order this makes
/// the result bit-reproducible for a given input.
///
/// Pure and stateless: safe to call from any number of threads sharing one
/// grid.
pub fn snap_to_grid(point: DVec2, grid: &GridValueSet, tolerance: f64) -> DVec2 {
    let mut best = point;
    let mut best_offset = f64::INFINITY;

    for circle in grid.candidates() {
        let offset = circle.offset_of(point);
        if offset < best_offset && offset < tolerance {
            best = circle.project(point);
            best_offset = offset;
        }
    }

    if best_offset.is_finite() {
        debug!(
            from = ?point,
            to = ?best,
            offset = best_offset,
            "snapped to grid circle"
        );
    }
    best
}

//! Axis labels for grid-aligned circles.
//!
//! A circle whose center sits on the real axis is a constant-resistance
//! circle and its value can be read back from the center abscissa; one whose
//! center sits on the `Re = 1` vertical is a constant-reactance arc. Both
//! inversions divide by a quantity that can be zero, so each is guarded and
//! the degenerate case is "no label", never an infinity.

use glam::{DVec2, dvec2};

/// How close a center coordinate must be to an axis before we treat the
/// circle as belonging to that family.
const AXIS_EPS: f64 = 0.1;

/// Derive the grid label for a circle centered at `center`, if any.
///
/// - center on the real axis: `r = cx / (1 - cx)`; `None` at `cx = 1`
///   (guarded division) or when the derived resistance is negative.
/// - center on the `Re = 1` vertical: `x = ±1/|cy|`; `None` at `cy = 0`
///   (guarded division).
/// - anywhere else: `None` — the circle is not part of either family.
pub fn axis_label(center: DVec2) -> Option<String> {
    if center.y.abs() < AXIS_EPS {
        let denom = 1.0 - center.x;
        if denom == 0.0 {
            return None;
        }
        let r = center.x / denom;
        if r < 0.0 {
            return None;
        }
        Some(format!("r = {r:.2}"))
    } else if (center.x - 1.0).abs() < AXIS_EPS {
        if center.y == 0.0 {
            return None;
        }
        let x = 1.0 / center.y.abs();
        let sign = if center.y > 0.0 { '+' } else { '-' };
        Some(format!("x = {sign}{x:.2}"))
    } else {
        None
    }
}

/// Where to anchor a circle's label: just outside the circle on the right,
/// level with the center.
pub fn label_anchor(center: DVec2, radius: f64) -> DVec2 {
    dvec2(center.x + radius * 1.1, center.y)
}

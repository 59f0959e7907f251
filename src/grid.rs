//! Canonical Smith chart grid: value generation and circle geometry.
//!
//! Every constant-resistance circle and constant-reactance arc of the chart
//! is described in the normalized reflection-coefficient plane (the unit
//! disc). A resistance `r` maps to the circle with center `(r/(1+r), 0)` and
//! radius `1/(1+r)`; a reactance magnitude `x` with sign `s` maps to the
//! circle with center `(1, s/x)` and radius `1/x`.

use glam::{DVec2, dvec2};

use crate::log::warn;
use crate::types::{ArcSign, Reactance, Resistance};

/// One linearly spaced run of grid values.
///
/// `closed` bands include `hi` itself; open bands stop one step short, so
/// the next band can start exactly at `hi` without duplicating it.
struct Band {
    count: usize,
    lo: f64,
    hi: f64,
    closed: bool,
}

impl Band {
    const fn open(count: usize, lo: f64, hi: f64) -> Band {
        Band { count, lo, hi, closed: false }
    }

    const fn closed(count: usize, lo: f64, hi: f64) -> Band {
        Band { count, lo, hi, closed: true }
    }

    /// Append this band's values. Open bands step by `(hi-lo)/count`; closed
    /// bands step by `(hi-lo)/(count-1)` and emit `hi` exactly as the last
    /// value so the grid's upper bound is not subject to rounding.
    fn fill(&self, out: &mut Vec<f64>) {
        let div = if self.closed { self.count - 1 } else { self.count };
        let step = (self.hi - self.lo) / div as f64;
        for i in 0..self.count {
            if self.closed && i == self.count - 1 {
                out.push(self.hi);
            } else {
                out.push(self.lo + step * i as f64);
            }
        }
    }
}

/// The fixed density schedule: finer near the chart center where the visual
/// grid is densest, coarser toward 20. 85 values total. The exact bands are
/// load-bearing; changing them changes which circles a drag snaps to.
const BANDS: [Band; 7] = [
    Band::open(20, 0.01, 0.2),
    Band::open(15, 0.2, 0.5),
    Band::open(10, 0.5, 1.0),
    Band::open(10, 1.0, 2.0),
    Band::open(15, 2.0, 5.0),
    Band::open(10, 5.0, 10.0),
    Band::closed(5, 10.0, 20.0),
];

/// A grid circle in the reflection-coefficient plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCircle {
    pub center: DVec2,
    pub radius: f64,
}

impl GridCircle {
    /// Perpendicular distance from `point` to the circle itself (not to its
    /// center): `| |point - center| - radius |`.
    #[inline]
    pub fn offset_of(&self, point: DVec2) -> f64 {
        (point.distance(self.center) - self.radius).abs()
    }

    /// Nearest point on the circle: project `point` along the ray from the
    /// center through it. A point at the exact center projects to angle 0.
    pub fn project(&self, point: DVec2) -> DVec2 {
        let d = point - self.center;
        let theta = d.y.atan2(d.x);
        self.center + dvec2(theta.cos(), theta.sin()) * self.radius
    }
}

impl Resistance {
    /// The constant-resistance circle for this value.
    ///
    /// Well-defined for every non-negative resistance; `r = 0` yields the
    /// outer unit circle (center origin, radius 1).
    pub fn circle(self) -> GridCircle {
        let r = self.raw();
        GridCircle {
            center: dvec2(r / (1.0 + r), 0.0),
            radius: 1.0 / (1.0 + r),
        }
    }
}

impl Reactance {
    /// The constant-reactance circle for this magnitude and sign, or `None`
    /// for a zero magnitude (the degenerate infinite-radius real axis).
    /// `try_new` already rejects zero; this guard covers unchecked values.
    pub fn circle(self, sign: ArcSign) -> Option<GridCircle> {
        let x = self.raw();
        if x == 0.0 {
            return None;
        }
        Some(GridCircle {
            center: dvec2(1.0, sign.signum() / x),
            radius: 1.0 / x,
        })
    }
}

/// The immutable set of grid values the snap resolver searches.
///
/// Generated once per process (or per test) and shared; regeneration is
/// wasteful but never incorrect since [`GridValueSet::generate`] is pure.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GridValueSet {
    resistances: Vec<Resistance>,
    reactances: Vec<Reactance>,
}

impl GridValueSet {
    /// Generate the canonical grid: 85 resistance values from the fixed
    /// band schedule, and the identical 85 values reused as reactance
    /// magnitudes (the chart draws both families at the same density).
    pub fn generate() -> GridValueSet {
        let mut raw = Vec::with_capacity(BANDS.iter().map(|b| b.count).sum());
        for band in &BANDS {
            band.fill(&mut raw);
        }
        let resistances = raw.iter().copied().map(Resistance::new).collect();
        let reactances = raw.into_iter().map(Reactance::new).collect();
        GridValueSet { resistances, reactances }
    }

    /// Build a grid from explicit values, e.g. a reduced set for a coarse
    /// chart. Order is preserved and determines snap tie-breaking.
    pub fn from_values(resistances: Vec<Resistance>, reactances: Vec<Reactance>) -> GridValueSet {
        GridValueSet { resistances, reactances }
    }

    /// Resistance values in generation order.
    pub fn resistances(&self) -> &[Resistance] {
        &self.resistances
    }

    /// Reactance magnitudes in generation order.
    pub fn reactances(&self) -> &[Reactance] {
        &self.reactances
    }

    /// Every candidate circle in snap order: resistance circles first (in
    /// generation order), then for each reactance magnitude the positive
    /// arc followed by the negative one. The resolver's tie-break rule is
    /// "first candidate at the minimum distance wins", so this order is
    /// part of the observable behavior.
    pub fn candidates(&self) -> impl Iterator<Item = GridCircle> + '_ {
        let resistance = self.resistances.iter().map(|r| r.circle());
        let reactance = self.reactances.iter().flat_map(|x| {
            ArcSign::BOTH.into_iter().filter_map(move |sign| {
                let circle = x.circle(sign);
                if circle.is_none() {
                    warn!(magnitude = x.raw(), "skipping degenerate reactance arc");
                }
                circle
            })
        });
        resistance.chain(reactance)
    }
}

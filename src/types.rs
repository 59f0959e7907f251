//! Strongly-typed chart values (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` resistance/reactance in domain logic
//! - Illegal grid values unrepresentable outside the crate
//! - Geometry derived from these types lives in [`crate::grid`]

use std::fmt;

use thiserror::Error;

/// Error type for invalid chart values
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

/// Normalized resistance: the real part of `z = Z / Z0`.
///
/// Invariant: non-negative. `Resistance(0)` is the outer unit circle of the
/// chart; the generated grid never contains it (its minimum is 0.01) but
/// callers building custom grids may.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Resistance(f64);

impl Resistance {
    /// Create a Resistance (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub(crate) const fn new(val: f64) -> Resistance {
        Resistance(val)
    }

    /// Create a Resistance with validation (rejects NaN/infinite/negative)
    #[inline]
    pub fn try_new(val: f64) -> Result<Resistance, ValueError> {
        if val.is_nan() {
            Err(ValueError::NaN)
        } else if val.is_infinite() {
            Err(ValueError::Infinite)
        } else if val < 0.0 {
            Err(ValueError::Negative)
        } else {
            Ok(Resistance(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized reactance magnitude: the imaginary part of `z = Z / Z0`,
/// always paired with an [`ArcSign`] to name one of the two arcs.
///
/// Invariant: strictly positive. A zero magnitude is the degenerate
/// infinite-radius real axis and is rejected here; the snap resolver still
/// skips it defensively should an unchecked value ever carry one.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Reactance(f64);

impl Reactance {
    /// Create a Reactance (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub(crate) const fn new(val: f64) -> Reactance {
        Reactance(val)
    }

    /// Create a Reactance with validation (rejects NaN/infinite/zero/negative)
    #[inline]
    pub fn try_new(val: f64) -> Result<Reactance, ValueError> {
        if val.is_nan() {
            Err(ValueError::NaN)
        } else if val.is_infinite() {
            Err(ValueError::Infinite)
        } else if val == 0.0 {
            Err(ValueError::Zero)
        } else if val < 0.0 {
            Err(ValueError::Negative)
        } else {
            Ok(Reactance(val))
        }
    }

    /// Get the raw magnitude (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Reactance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sign of a reactance arc: inductive (above the real axis) or capacitive
/// (below it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcSign {
    Positive,
    Negative,
}

impl ArcSign {
    /// Both signs, in the order the snap resolver visits them.
    pub const BOTH: [ArcSign; 2] = [ArcSign::Positive, ArcSign::Negative];

    /// `+1.0` or `-1.0`
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            ArcSign::Positive => 1.0,
            ArcSign::Negative => -1.0,
        }
    }
}

impl fmt::Display for ArcSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcSign::Positive => write!(f, "+"),
            ArcSign::Negative => write!(f, "-"),
        }
    }
}

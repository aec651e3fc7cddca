//! # Intervals
//!
//! Two flavours of real intervals, both requiring `low < high`:
//!
//! - [`ClosedInterval`] – `[low, high]`, able to **clip** (saturate) any value into its bounds,
//! - [`RightOpenInterval`] – `[low, high[`, able to **reduce** any value modulo its size.
//!
//! Coordinate types use them to validate their angular domains, and the catalogue loader uses
//! them to repair marginal source data.

use std::fmt;

use crate::sky_errors::SkyError;

/// Common behaviour of the two interval flavours.
pub trait Interval: fmt::Display {
    fn low(&self) -> f64;

    fn high(&self) -> f64;

    fn size(&self) -> f64 {
        self.high() - self.low()
    }

    /// Membership test, following the semantics of the implementing flavour.
    fn contains(&self, v: f64) -> bool;

    /// Return `v` unchanged when it belongs to the interval.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::ValueOutOfInterval`] if `v` is not contained (NaN included).
    fn check(&self, v: f64) -> Result<f64, SkyError> {
        if self.contains(v) {
            Ok(v)
        } else {
            Err(SkyError::ValueOutOfInterval {
                value: v,
                interval: self.to_string(),
            })
        }
    }
}

fn check_bounds(low: f64, high: f64) -> Result<(), SkyError> {
    if low < high {
        Ok(())
    } else {
        Err(SkyError::InvalidIntervalBounds { low, high })
    }
}

fn check_size(size: f64) -> Result<f64, SkyError> {
    if size > 0.0 {
        Ok(size / 2.0)
    } else {
        Err(SkyError::InvalidIntervalSize(size))
    }
}

/// A closed interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Build `[low, high]`.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::InvalidIntervalBounds`] unless `low < high`.
    pub fn of(low: f64, high: f64) -> Result<Self, SkyError> {
        check_bounds(low, high)?;
        Ok(ClosedInterval { low, high })
    }

    /// Build `[-size/2, size/2]`.
    pub fn symmetric(size: f64) -> Result<Self, SkyError> {
        let half = check_size(size)?;
        Ok(ClosedInterval {
            low: -half,
            high: half,
        })
    }

    /// Crate-internal constructor for intervals whose bounds are known to be ordered.
    pub(crate) const fn new_unchecked(low: f64, high: f64) -> Self {
        ClosedInterval { low, high }
    }

    /// Saturate `v` to the bounds of the interval. Never fails.
    pub fn clip(&self, v: f64) -> f64 {
        if v <= self.low {
            self.low
        } else {
            v.min(self.high)
        }
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        v >= self.low && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// A right-open interval `[low, high[`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// Build `[low, high[`.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::InvalidIntervalBounds`] unless `low < high`.
    pub fn of(low: f64, high: f64) -> Result<Self, SkyError> {
        check_bounds(low, high)?;
        Ok(RightOpenInterval { low, high })
    }

    /// Build `[-size/2, size/2[`.
    pub fn symmetric(size: f64) -> Result<Self, SkyError> {
        let half = check_size(size)?;
        Ok(RightOpenInterval {
            low: -half,
            high: half,
        })
    }

    pub(crate) const fn new_unchecked(low: f64, high: f64) -> Self {
        RightOpenInterval { low, high }
    }

    /// Reduce `v` into the interval: `low + ((v - low) mod size)`.
    ///
    /// The modulo is a true (floored) modulo, so negative offsets wrap from the top of the
    /// interval. The remainder itself is exact and never negative; only the final rounding may
    /// land on `high`, in which case `low` is returned.
    pub fn reduce(&self, v: f64) -> f64 {
        let x = v - self.low;
        let reduced = self.low + x.rem_euclid(self.size());
        if reduced >= self.high {
            self.low
        } else {
            reduced
        }
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        v >= self.low && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}[", self.low, self.high)
    }
}

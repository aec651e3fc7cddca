//! # Angle conversions
//!
//! Angles are plain `f64` radians throughout the crate; this module provides the conversions
//! from and to degrees, hours, arcseconds and sexagesimal (DMS) notation, and the reduction
//! of any angle into `[0, 2π[`.

use crate::constants::{ArcSec, Degree, Hour, Radian, DPI, RADEG, RADH, RADSEC, SEXAGESIMAL_BASE};
use crate::math::interval::RightOpenInterval;
use crate::sky_errors::SkyError;

/// One full turn, in radians.
pub const TAU: Radian = DPI;

const NORMALIZATION_INTERVAL: RightOpenInterval = RightOpenInterval::new_unchecked(0.0, TAU);

/// Reduce `rad` into `[0, 2π[`.
pub fn normalize_positive(rad: Radian) -> Radian {
    NORMALIZATION_INTERVAL.reduce(rad)
}

pub fn of_arcsec(sec: ArcSec) -> Radian {
    sec * RADSEC
}

/// Convert a sexagesimal angle `deg° min' sec"` into radians.
///
/// Errors
/// ----------
/// * [`SkyError::InvalidDms`] if `deg < 0`, or if `min` or `sec` is outside `[0, 60[`.
pub fn of_dms(deg: i32, min: i32, sec: f64) -> Result<Radian, SkyError> {
    let min_ok = (0..SEXAGESIMAL_BASE as i32).contains(&min);
    let sec_ok = (0.0..SEXAGESIMAL_BASE).contains(&sec);
    if deg < 0 || !min_ok || !sec_ok {
        return Err(SkyError::InvalidDms { deg, min, sec });
    }
    let arcsec = (deg as f64 * SEXAGESIMAL_BASE + min as f64) * SEXAGESIMAL_BASE + sec;
    Ok(of_arcsec(arcsec))
}

pub fn of_deg(deg: Degree) -> Radian {
    deg * RADEG
}

pub fn to_deg(rad: Radian) -> Degree {
    rad / RADEG
}

pub fn of_hr(hr: Hour) -> Radian {
    hr * RADH
}

pub fn to_hr(rad: Radian) -> Hour {
    rad / RADH
}

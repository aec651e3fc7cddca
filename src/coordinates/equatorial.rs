use std::fmt;

use crate::constants::{Degree, Hour, Radian};
use crate::coordinates::{debug_check_domain, FULL_TURN, HALF_TURN};
use crate::math::angle;
use crate::math::interval::Interval;
use crate::sky_errors::SkyError;

/// Equatorial coordinates (right ascension, declination), in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    ra: Radian,
    dec: Radian,
}

impl EquatorialCoordinates {
    /// Errors
    /// ----------
    /// * [`SkyError::ValueOutOfInterval`] unless `ra ∈ [0, 2π[` and `dec ∈ [-π/2, π/2]`.
    pub fn of(ra: Radian, dec: Radian) -> Result<Self, SkyError> {
        FULL_TURN.check(ra)?;
        HALF_TURN.check(dec)?;
        Ok(EquatorialCoordinates { ra, dec })
    }

    pub(crate) fn from_reduced(ra: Radian, dec: Radian) -> Self {
        debug_check_domain(ra, dec);
        EquatorialCoordinates { ra, dec }
    }

    /// Position with NaN components, for evaluations that have no defined direction.
    pub(crate) const fn undefined() -> Self {
        EquatorialCoordinates {
            ra: f64::NAN,
            dec: f64::NAN,
        }
    }

    pub fn ra(&self) -> Radian {
        self.ra
    }

    pub fn ra_deg(&self) -> Degree {
        angle::to_deg(self.ra)
    }

    pub fn ra_hr(&self) -> Hour {
        angle::to_hr(self.ra)
    }

    pub fn dec(&self) -> Radian {
        self.dec
    }

    pub fn dec_deg(&self) -> Degree {
        angle::to_deg(self.dec)
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra = {:.4}h, dec = {:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

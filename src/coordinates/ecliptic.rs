use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::{debug_check_domain, FULL_TURN, HALF_TURN};
use crate::math::angle;
use crate::math::interval::Interval;
use crate::sky_errors::SkyError;

/// Ecliptic coordinates (longitude, latitude), in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoordinates {
    lon: Radian,
    lat: Radian,
}

impl EclipticCoordinates {
    /// Errors
    /// ----------
    /// * [`SkyError::ValueOutOfInterval`] unless `lon ∈ [0, 2π[` and `lat ∈ [-π/2, π/2]`.
    pub fn of(lon: Radian, lat: Radian) -> Result<Self, SkyError> {
        FULL_TURN.check(lon)?;
        HALF_TURN.check(lat)?;
        Ok(EclipticCoordinates { lon, lat })
    }

    pub(crate) fn from_reduced(lon: Radian, lat: Radian) -> Self {
        debug_check_domain(lon, lat);
        EclipticCoordinates { lon, lat }
    }

    pub fn lon(&self) -> Radian {
        self.lon
    }

    pub fn lon_deg(&self) -> Degree {
        angle::to_deg(self.lon)
    }

    pub fn lat(&self) -> Radian {
        self.lat
    }

    pub fn lat_deg(&self) -> Degree {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ = {:.4}°, β = {:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

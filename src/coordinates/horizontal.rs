use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::{debug_check_domain, FULL_TURN, HALF_TURN};
use crate::math::angle::{self, TAU};
use crate::math::interval::{ClosedInterval, Interval, RightOpenInterval};
use crate::sky_errors::SkyError;

const AZ_DEG_INTERVAL: RightOpenInterval = RightOpenInterval::new_unchecked(0.0, 360.0);
const ALT_DEG_INTERVAL: ClosedInterval = ClosedInterval::new_unchecked(-90.0, 90.0);

/// Horizontal (local) coordinates: azimuth measured from north towards east, altitude above
/// the horizon. Both in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    az: Radian,
    alt: Radian,
}

impl HorizontalCoordinates {
    /// Errors
    /// ----------
    /// * [`SkyError::ValueOutOfInterval`] unless `az ∈ [0, 2π[` and `alt ∈ [-π/2, π/2]`.
    pub fn of(az: Radian, alt: Radian) -> Result<Self, SkyError> {
        FULL_TURN.check(az)?;
        HALF_TURN.check(alt)?;
        Ok(HorizontalCoordinates { az, alt })
    }

    /// Same as [`HorizontalCoordinates::of`] with angles in degrees (`az ∈ [0°, 360°[`).
    pub fn of_deg(az_deg: Degree, alt_deg: Degree) -> Result<Self, SkyError> {
        AZ_DEG_INTERVAL.check(az_deg)?;
        ALT_DEG_INTERVAL.check(alt_deg)?;
        let az = angle::of_deg(az_deg);
        // 359.9999999999999° may round up to 2π once converted
        Ok(HorizontalCoordinates {
            az: if az >= TAU { 0.0 } else { az },
            alt: angle::of_deg(alt_deg),
        })
    }

    pub(crate) fn from_reduced(az: Radian, alt: Radian) -> Self {
        debug_check_domain(az, alt);
        HorizontalCoordinates { az, alt }
    }

    pub fn az(&self) -> Radian {
        self.az
    }

    pub fn az_deg(&self) -> Degree {
        angle::to_deg(self.az)
    }

    pub fn alt(&self) -> Radian {
        self.alt
    }

    pub fn alt_deg(&self) -> Degree {
        angle::to_deg(self.alt)
    }

    /// Name of the octant the azimuth points to, built from the four cardinal names.
    ///
    /// The azimuth is rounded to the nearest eighth of a turn; for `("N", "E", "S", "W")` the
    /// result is one of `N, NE, E, SE, S, SW, W, NW`.
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        let octant = (self.az / TAU * 8.0).round() as usize % 8;
        match octant {
            0 => n.to_string(),
            1 => format!("{n}{e}"),
            2 => e.to_string(),
            3 => format!("{s}{e}"),
            4 => s.to_string(),
            5 => format!("{s}{w}"),
            6 => w.to_string(),
            _ => format!("{n}{w}"),
        }
    }

    /// Great-circle angular distance to `that`, in radians.
    pub fn angular_distance_to(&self, that: &HorizontalCoordinates) -> Radian {
        let cos_distance = self.alt.sin() * that.alt.sin()
            + self.alt.cos() * that.alt.cos() * (self.az - that.az).cos();
        cos_distance.clamp(-1.0, 1.0).acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az = {:.4}°, alt = {:.4}°)", self.az_deg(), self.alt_deg())
    }
}

//! # Frame conversions
//!
//! Pure conversions between the celestial frames, each one built **once per instant**
//! (and per observer location for the horizontal one) and then applied to many points:
//!
//! ```text
//! Ecliptic --(obliquity ε at the instant)--> Equatorial --(local sidereal time, latitude φ)--> Horizontal
//! ```
//!
//! The trigonometric terms that only depend on the instant are precomputed at construction,
//! so [`EclipticToEquatorialConversion::apply`] and [`EquatorialToHorizontalConversion::apply`]
//! only evaluate the per-point terms.

use std::fmt;

use hifitime::Epoch;

use crate::constants::Radian;
use crate::coordinates::{
    EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};
use crate::earth_orientation::obliquity;
use crate::math::angle;
use crate::time::{local_sidereal_time, RefEpoch};

/// Ecliptic → equatorial rotation about the equinox axis, valid for one instant.
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorialConversion {
    sin_epsilon: f64,
    cos_epsilon: f64,
}

impl EclipticToEquatorialConversion {
    /// Build the conversion valid at `when`, evaluating the obliquity once.
    pub fn new(when: &Epoch) -> Self {
        Self::from_obliquity(obliquity(RefEpoch::J2000.julian_centuries_until(when)))
    }

    pub fn from_obliquity(epsilon: Radian) -> Self {
        let (sin_epsilon, cos_epsilon) = epsilon.sin_cos();
        EclipticToEquatorialConversion {
            sin_epsilon,
            cos_epsilon,
        }
    }

    /// Convert an ecliptic position; the right ascension is normalized to `[0, 2π[`.
    ///
    /// ```text
    /// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)
    /// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
    /// ```
    pub fn apply(&self, ecl: &EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lambda, cos_lambda) = ecl.lon().sin_cos();
        let (sin_beta, cos_beta) = ecl.lat().sin_cos();

        let ra = (sin_lambda * self.cos_epsilon - ecl.lat().tan() * self.sin_epsilon)
            .atan2(cos_lambda);
        let dec = (sin_beta * self.cos_epsilon + cos_beta * self.sin_epsilon * sin_lambda)
            .clamp(-1.0, 1.0)
            .asin();

        EquatorialCoordinates::from_reduced(angle::normalize_positive(ra), dec)
    }
}

/// Equatorial → horizontal conversion for one instant and one observer location.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontalConversion {
    local_sidereal_time: Radian,
    sin_phi: f64,
    cos_phi: f64,
}

impl EquatorialToHorizontalConversion {
    pub fn new(when: &Epoch, where_: &GeographicCoordinates) -> Self {
        Self::from_sidereal_time(local_sidereal_time(when, where_), where_.lat())
    }

    /// Build the conversion from an already known local sidereal time and observer latitude.
    pub fn from_sidereal_time(local_sidereal_time: Radian, latitude: Radian) -> Self {
        let (sin_phi, cos_phi) = latitude.sin_cos();
        EquatorialToHorizontalConversion {
            local_sidereal_time,
            sin_phi,
            cos_phi,
        }
    }

    pub fn local_sidereal_time(&self) -> Radian {
        self.local_sidereal_time
    }

    /// Convert an equatorial position through its hour angle `H = LST − α`.
    ///
    /// ```text
    /// h = asin(sin δ·sin φ + cos δ·cos φ·cos H)
    /// A = atan2(−cos δ·cos φ·sin H, sin δ − sin φ·sin h)
    /// ```
    /// The azimuth is normalized to `[0, 2π[`.
    pub fn apply(&self, equ: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal_time - equ.ra();
        let (sin_h_angle, cos_h_angle) = hour_angle.sin_cos();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();

        let sin_alt =
            (sin_dec * self.sin_phi + cos_dec * self.cos_phi * cos_h_angle).clamp(-1.0, 1.0);
        let alt = sin_alt.asin();
        let az = (-cos_dec * self.cos_phi * sin_h_angle).atan2(sin_dec - self.sin_phi * sin_alt);

        HorizontalCoordinates::from_reduced(angle::normalize_positive(az), alt)
    }
}

impl fmt::Display for EquatorialToHorizontalConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EquatorialToHorizontal(lst = {:.4}h, φ = {:.4}°)",
            angle::to_hr(self.local_sidereal_time),
            angle::to_deg(self.sin_phi.atan2(self.cos_phi))
        )
    }
}

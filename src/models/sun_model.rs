use crate::celestial::Sun;
use crate::constants::TROPICAL_YEAR;
use crate::conversion::EclipticToEquatorialConversion;
use crate::coordinates::EclipticCoordinates;
use crate::math::angle;

use super::CelestialObjectModel;

/// Eccentricity of the Earth/Sun orbit.
const ECCENTRICITY: f64 = 0.016705;
/// Angular size of the Sun at a distance of one semi-major axis, in degrees.
const ANGULAR_SIZE_AT_ONE_AU_DEG: f64 = 0.533128;
/// Ecliptic longitude of the Sun at J2010, in degrees.
const LONGITUDE_AT_J2010_DEG: f64 = 279.557208;
/// Ecliptic longitude of the Sun at perigee, in degrees.
const LONGITUDE_AT_PERIGEE_DEG: f64 = 283.112438;

/// Apparent motion of the Sun around the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunModel;

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    /// ```text
    /// M = 2π/365.242191·D + εg − ϖg
    /// ν = M + 2e·sin M
    /// λ = ν + ϖg,   β = 0
    /// θ = θ0·(1 + e·cos ν)/(1 − e²)
    /// ```
    fn at(&self, days_since_j2010: f64, ecl_to_equ: &EclipticToEquatorialConversion) -> Sun {
        let perigee = angle::of_deg(LONGITUDE_AT_PERIGEE_DEG);
        let mean_anomaly = angle::normalize_positive(
            angle::TAU / TROPICAL_YEAR * days_since_j2010 + angle::of_deg(LONGITUDE_AT_J2010_DEG)
                - perigee,
        );
        let true_anomaly = mean_anomaly + 2.0 * ECCENTRICITY * mean_anomaly.sin();

        let ecliptic_lon = angle::normalize_positive(true_anomaly + perigee);
        let ecliptic_pos = EclipticCoordinates::from_reduced(ecliptic_lon, 0.0);
        let angular_size = angle::of_deg(ANGULAR_SIZE_AT_ONE_AU_DEG)
            * (1.0 + ECCENTRICITY * true_anomaly.cos())
            / (1.0 - ECCENTRICITY * ECCENTRICITY);

        Sun::from_model(
            ecliptic_pos,
            ecl_to_equ.apply(&ecliptic_pos),
            angular_size,
            mean_anomaly,
        )
    }
}

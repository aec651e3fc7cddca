use crate::celestial::{Moon, MoonPhase};
use crate::conversion::EclipticToEquatorialConversion;
use crate::coordinates::EclipticCoordinates;
use crate::math::angle;

use super::{CelestialObjectModel, SunModel};

/// Mean longitude of the Moon at J2010, in degrees.
const MEAN_LONGITUDE_AT_J2010_DEG: f64 = 91.929336;
/// Mean longitude of the perigee at J2010, in degrees.
const PERIGEE_AT_J2010_DEG: f64 = 130.143076;
/// Longitude of the ascending node at J2010, in degrees.
const NODE_AT_J2010_DEG: f64 = 291.682547;
/// Inclination of the orbit on the ecliptic, in degrees.
const INCLINATION_DEG: f64 = 5.145396;
const ECCENTRICITY: f64 = 0.0549;
/// Angular size at a distance of one semi-major axis, in degrees.
const ANGULAR_SIZE_DEG: f64 = 0.5181;

/// Daily motions, in degrees per day.
const MEAN_LONGITUDE_RATE_DEG: f64 = 13.1763966;
const PERIGEE_RATE_DEG: f64 = 0.1114041;
const NODE_RATE_DEG: f64 = 0.0529539;

/// Amplitudes of the periodic terms, in degrees.
const EVECTION_DEG: f64 = 1.2739;
const ANNUAL_EQUATION_DEG: f64 = 0.1858;
const THIRD_CORRECTION_DEG: f64 = 0.37;
const EQUATION_OF_CENTER_DEG: f64 = 6.2886;
const FOURTH_CORRECTION_DEG: f64 = 0.214;
const VARIATION_DEG: f64 = 0.6583;
const NODE_CORRECTION_DEG: f64 = 0.16;

/// Motion of the Moon around the Earth, perturbed by the Sun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoonModel;

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    fn at(&self, days_since_j2010: f64, ecl_to_equ: &EclipticToEquatorialConversion) -> Moon {
        let d = days_since_j2010;
        let sun = SunModel.at(d, ecl_to_equ);
        let sun_lon = sun.ecliptic_pos().lon();
        let sin_sun_anomaly = sun.mean_anomaly().sin();

        // Orbital longitude
        let mean_lon = angle::of_deg(MEAN_LONGITUDE_RATE_DEG) * d
            + angle::of_deg(MEAN_LONGITUDE_AT_J2010_DEG);
        let mean_anomaly =
            mean_lon - angle::of_deg(PERIGEE_RATE_DEG) * d - angle::of_deg(PERIGEE_AT_J2010_DEG);

        let evection =
            angle::of_deg(EVECTION_DEG) * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
        let annual_equation = angle::of_deg(ANNUAL_EQUATION_DEG) * sin_sun_anomaly;
        let third_correction = angle::of_deg(THIRD_CORRECTION_DEG) * sin_sun_anomaly;

        let corrected_anomaly = mean_anomaly + evection - annual_equation - third_correction;
        let center_equation = angle::of_deg(EQUATION_OF_CENTER_DEG) * corrected_anomaly.sin();
        let fourth_correction =
            angle::of_deg(FOURTH_CORRECTION_DEG) * (2.0 * corrected_anomaly).sin();

        let corrected_lon =
            mean_lon + evection + center_equation - annual_equation + fourth_correction;
        let variation = angle::of_deg(VARIATION_DEG) * (2.0 * (corrected_lon - sun_lon)).sin();
        let true_lon = corrected_lon + variation;

        // Ecliptic position
        let mean_node = angle::of_deg(NODE_AT_J2010_DEG) - angle::of_deg(NODE_RATE_DEG) * d;
        let node = mean_node - angle::of_deg(NODE_CORRECTION_DEG) * sin_sun_anomaly;
        let (sin_inclination, cos_inclination) = angle::of_deg(INCLINATION_DEG).sin_cos();
        let (sin_arg, cos_arg) = (true_lon - node).sin_cos();

        let lon = (sin_arg * cos_inclination).atan2(cos_arg) + node;
        let lat = (sin_arg * sin_inclination).asin();
        let ecliptic_pos = EclipticCoordinates::from_reduced(angle::normalize_positive(lon), lat);

        // Phase and size
        let elongation = true_lon - sun_lon;
        let phase = (1.0 - elongation.cos()) / 2.0;

        let distance = (1.0 - ECCENTRICITY * ECCENTRICITY)
            / (1.0 + ECCENTRICITY * (corrected_anomaly + center_equation).cos());
        let angular_size = angle::of_deg(ANGULAR_SIZE_DEG) / distance;

        Moon::from_model(
            ecl_to_equ.apply(&ecliptic_pos),
            angular_size,
            0.0,
            phase,
            MoonPhase::from_elongation(elongation),
        )
    }
}

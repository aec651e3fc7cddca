use crate::celestial::Planet;
use crate::constants::{ArcSec, Degree, Radian, TROPICAL_YEAR};
use crate::conversion::EclipticToEquatorialConversion;
use crate::coordinates::EclipticCoordinates;
use crate::math::angle;

use super::CelestialObjectModel;

/// Orbital elements of a planet at epoch J2010.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Orbital period, in tropical years
    pub period: f64,
    pub lon_at_j2010: Degree,
    pub lon_at_perigee: Degree,
    pub eccentricity: f64,
    /// Semi-major axis, in AU
    pub semi_major_axis: f64,
    pub inclination: Degree,
    pub lon_ascending_node: Degree,
    /// Angular size seen from a distance of 1 AU
    pub angular_size_at_one_au: ArcSec,
    /// Magnitude seen from a distance of 1 AU
    pub magnitude_at_one_au: f64,
}

/// Heliocentric state of a planet in its orbit.
struct HeliocentricPosition {
    radius: f64,
    lon: Radian,
}

impl OrbitalElements {
    /// Heliocentric distance and longitude in the orbital plane.
    ///
    /// ```text
    /// M = 2π/365.242191·D/Tp + ε − ϖ
    /// ν = M + 2e·sin M
    /// r = a(1 − e²)/(1 + e·cos ν),   l = ν + ϖ
    /// ```
    fn heliocentric(&self, days_since_j2010: f64) -> HeliocentricPosition {
        let perigee = angle::of_deg(self.lon_at_perigee);
        let mean_anomaly = angle::TAU / TROPICAL_YEAR * (days_since_j2010 / self.period)
            + angle::of_deg(self.lon_at_j2010)
            - perigee;
        let true_anomaly = mean_anomaly + 2.0 * self.eccentricity * mean_anomaly.sin();

        HeliocentricPosition {
            radius: self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
                / (1.0 + self.eccentricity * true_anomaly.cos()),
            lon: true_anomaly + perigee,
        }
    }
}

/// The eight planets of the solar system, Earth included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetModel {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetModel {
    pub const ALL: [PlanetModel; 8] = [
        PlanetModel::Mercury,
        PlanetModel::Venus,
        PlanetModel::Earth,
        PlanetModel::Mars,
        PlanetModel::Jupiter,
        PlanetModel::Saturn,
        PlanetModel::Uranus,
        PlanetModel::Neptune,
    ];

    /// Every planet visible from the Earth, in the order of [`PlanetModel::ALL`].
    pub fn observable() -> impl Iterator<Item = PlanetModel> {
        Self::ALL
            .into_iter()
            .filter(|planet| *planet != PlanetModel::Earth)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetModel::Mercury => "Mercury",
            PlanetModel::Venus => "Venus",
            PlanetModel::Earth => "Earth",
            PlanetModel::Mars => "Mars",
            PlanetModel::Jupiter => "Jupiter",
            PlanetModel::Saturn => "Saturn",
            PlanetModel::Uranus => "Uranus",
            PlanetModel::Neptune => "Neptune",
        }
    }

    /// Orbiting closer to the Sun than the Earth does.
    pub fn is_inferior(&self) -> bool {
        matches!(self, PlanetModel::Mercury | PlanetModel::Venus)
    }

    pub fn elements(&self) -> OrbitalElements {
        let (period, lon_at_j2010, lon_at_perigee, eccentricity, semi_major_axis) = match self {
            PlanetModel::Mercury => (0.24085, 75.5671, 77.612, 0.205627, 0.387098),
            PlanetModel::Venus => (0.615207, 272.30044, 131.54, 0.006812, 0.723329),
            PlanetModel::Earth => (0.999996, 99.556772, 103.2055, 0.016671, 0.999985),
            PlanetModel::Mars => (1.880765, 109.09646, 336.217, 0.093348, 1.523689),
            PlanetModel::Jupiter => (11.857911, 337.917132, 14.6633, 0.048907, 5.20278),
            PlanetModel::Saturn => (29.310579, 172.398316, 89.567, 0.053853, 9.51134),
            PlanetModel::Uranus => (84.039492, 356.135400, 172.884833, 0.046321, 19.21814),
            PlanetModel::Neptune => (165.84539, 326.895127, 23.07, 0.010483, 30.1985),
        };
        let (inclination, lon_ascending_node, angular_size_at_one_au, magnitude_at_one_au) =
            match self {
                PlanetModel::Mercury => (7.0051, 48.449, 6.74, -0.42),
                PlanetModel::Venus => (3.3947, 76.769, 16.92, -4.40),
                PlanetModel::Earth => (0.0, 0.0, 0.0, 0.0),
                PlanetModel::Mars => (1.8497, 49.632, 9.36, -1.52),
                PlanetModel::Jupiter => (1.3035, 100.595, 196.74, -9.40),
                PlanetModel::Saturn => (2.4873, 113.752, 165.60, -8.88),
                PlanetModel::Uranus => (0.773059, 73.926961, 65.80, -7.19),
                PlanetModel::Neptune => (1.7673, 131.879, 62.20, -6.87),
            };
        OrbitalElements {
            period,
            lon_at_j2010,
            lon_at_perigee,
            eccentricity,
            semi_major_axis,
            inclination,
            lon_ascending_node,
            angular_size_at_one_au,
            magnitude_at_one_au,
        }
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    /// Geocentric position of the planet, from its heliocentric position projected on the
    /// ecliptic and the heliocentric position of the Earth.
    ///
    /// Evaluating [`PlanetModel::Earth`] is meaningless since its distance to the observer is
    /// zero: the returned planet has NaN position, angular size and magnitude. Callers enumerate
    /// [`PlanetModel::observable`] instead.
    fn at(&self, days_since_j2010: f64, ecl_to_equ: &EclipticToEquatorialConversion) -> Planet {
        if *self == PlanetModel::Earth {
            return Planet::undefined(self.name());
        }
        let elements = self.elements();
        let node = angle::of_deg(elements.lon_ascending_node);
        let (sin_inclination, cos_inclination) = angle::of_deg(elements.inclination).sin_cos();

        let planet = elements.heliocentric(days_since_j2010);
        let (sin_from_node, cos_from_node) = (planet.lon - node).sin_cos();
        let helio_lat = (sin_from_node * sin_inclination).asin();
        let cos_helio_lat = helio_lat.cos();

        // Projection on the ecliptic plane
        let proj_radius = planet.radius * cos_helio_lat;
        let proj_lon = (sin_from_node * cos_inclination).atan2(cos_from_node) + node;

        let earth = PlanetModel::Earth.elements().heliocentric(days_since_j2010);
        let earth_to_planet = proj_lon - earth.lon;

        let geo_lon = if self.is_inferior() {
            let (sin_d, cos_d) = (-earth_to_planet).sin_cos();
            std::f64::consts::PI
                + earth.lon
                + (proj_radius * sin_d).atan2(earth.radius - proj_radius * cos_d)
        } else {
            let (sin_d, cos_d) = earth_to_planet.sin_cos();
            proj_lon + (earth.radius * sin_d).atan2(proj_radius - earth.radius * cos_d)
        };
        let geo_lat = (proj_radius * helio_lat.tan() * (geo_lon - proj_lon).sin()
            / (earth.radius * earth_to_planet.sin()))
        .atan();

        let distance = (earth.radius * earth.radius + planet.radius * planet.radius
            - 2.0 * earth.radius * planet.radius * (planet.lon - earth.lon).cos() * cos_helio_lat)
            .sqrt();
        let angular_size = angle::of_arcsec(elements.angular_size_at_one_au) / distance;

        let illuminated = (1.0 + (geo_lon - planet.lon).cos()) / 2.0;
        let magnitude = elements.magnitude_at_one_au
            + 5.0 * (planet.radius * distance / illuminated.sqrt()).log10();

        let ecliptic_pos =
            EclipticCoordinates::from_reduced(angle::normalize_positive(geo_lon), geo_lat);
        Planet::from_model(
            self.name(),
            ecl_to_equ.apply(&ecliptic_pos),
            angular_size,
            magnitude,
        )
    }
}

#[cfg(test)]
mod planet_model_test {
    use super::*;
    use crate::celestial::CelestialObject;
    use crate::time::RefEpoch;
    use approx::assert_relative_eq;
    use hifitime::Epoch;

    fn at_2003_11_22(model: PlanetModel) -> Planet {
        let when = Epoch::from_gregorian_utc_at_midnight(2003, 11, 22);
        let days = RefEpoch::J2010.days_until(&when);
        assert_relative_eq!(days, -2231., epsilon = 1e-9);
        model.at(days, &EclipticToEquatorialConversion::new(&when))
    }

    #[test]
    fn test_jupiter() {
        let jupiter = at_2003_11_22(PlanetModel::Jupiter);
        assert_eq!(jupiter.name(), "Jupiter");
        assert_relative_eq!(jupiter.equatorial_pos().ra_hr(), 11.18715493470968, epsilon = 1e-8);
        assert_relative_eq!(jupiter.equatorial_pos().dec_deg(), 6.3566355066857465, epsilon = 1e-8);
        assert_relative_eq!(jupiter.angular_size(), 0.00017022493483172488, epsilon = 1e-12);
        assert_relative_eq!(jupiter.magnitude(), -1.988565955277834, epsilon = 1e-8);
    }

    #[test]
    fn test_mercury() {
        let mercury = at_2003_11_22(PlanetModel::Mercury);
        assert_relative_eq!(mercury.equatorial_pos().ra_hr(), 16.82007456589715, epsilon = 1e-8);
        assert_relative_eq!(
            mercury.equatorial_pos().dec_deg(),
            -24.500872462861217,
            epsilon = 1e-8
        );
        assert_relative_eq!(mercury.angular_size(), 2.46106708342995e-05, epsilon = 1e-12);
        assert_relative_eq!(mercury.magnitude(), -1.4377152607028776, epsilon = 1e-8);
    }

    #[test]
    fn test_saturn() {
        let saturn = at_2003_11_22(PlanetModel::Saturn);
        assert_relative_eq!(saturn.equatorial_pos().ra_hr(), 6.903571135191819, epsilon = 1e-8);
        assert_relative_eq!(saturn.equatorial_pos().dec_deg(), 22.124540583837238, epsilon = 1e-8);
        assert_relative_eq!(saturn.magnitude(), 0.4785565453188081, epsilon = 1e-8);
    }

    #[test]
    fn test_observable_planets() {
        let observable: Vec<_> = PlanetModel::observable().collect();
        assert_eq!(observable.len(), 7);
        assert!(!observable.contains(&PlanetModel::Earth));
        assert_eq!(observable[0], PlanetModel::Mercury);
        assert_eq!(observable[2], PlanetModel::Mars);
        assert_eq!(PlanetModel::ALL.len(), 8);
    }

    #[test]
    fn test_earth_is_undefined() {
        let earth = at_2003_11_22(PlanetModel::Earth);
        assert_eq!(earth.name(), "Earth");
        assert!(earth.equatorial_pos().ra().is_nan());
        assert!(earth.equatorial_pos().dec().is_nan());
        assert!(earth.angular_size().is_nan());
        assert!(earth.magnitude().is_nan());
    }

    #[test]
    fn test_elements_table() {
        let earth = PlanetModel::Earth.elements();
        assert_eq!(earth.semi_major_axis, 0.999985);
        assert_eq!(earth.angular_size_at_one_au, 0.);
        assert_eq!(PlanetModel::Neptune.elements().period, 165.84539);
        assert!(PlanetModel::Venus.is_inferior());
        assert!(!PlanetModel::Mars.is_inferior());
    }
}

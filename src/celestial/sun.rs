use std::fmt;

use crate::constants::Radian;
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};

use super::{CelestialBody, CelestialObject};

const SUN_NAME: &str = "Sun";
const SUN_MAGNITUDE: f64 = -26.7;

/// The Sun at one instant. Besides the shared data it keeps its ecliptic position and its mean
/// anomaly, which the Moon model reuses.
#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    body: CelestialBody,
    ecliptic_pos: EclipticCoordinates,
    mean_anomaly: Radian,
}

impl Sun {
    pub(crate) fn from_model(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        mean_anomaly: Radian,
    ) -> Self {
        Sun {
            body: CelestialBody::from_model(SUN_NAME, equatorial_pos, angular_size, SUN_MAGNITUDE),
            ecliptic_pos,
            mean_anomaly,
        }
    }

    pub fn ecliptic_pos(&self) -> &EclipticCoordinates {
        &self.ecliptic_pos
    }

    pub fn mean_anomaly(&self) -> Radian {
        self.mean_anomaly
    }
}

impl CelestialObject for Sun {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

use std::fmt;

use crate::constants::Radian;
use crate::coordinates::EquatorialCoordinates;
use crate::sky_errors::SkyError;

use super::{CelestialBody, CelestialObject};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    body: CelestialBody,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Result<Self, SkyError> {
        Ok(Planet {
            body: CelestialBody::new(name, equatorial_pos, angular_size, magnitude)?,
        })
    }

    pub(crate) fn from_model(
        name: &str,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Self {
        Planet {
            body: CelestialBody::from_model(name, equatorial_pos, angular_size, magnitude),
        }
    }

    pub(crate) fn undefined(name: &str) -> Self {
        Planet {
            body: CelestialBody::undefined(name),
        }
    }
}

impl CelestialObject for Planet {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

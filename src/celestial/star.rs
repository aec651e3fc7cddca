use std::fmt;

use crate::coordinates::EquatorialCoordinates;
use crate::math::interval::{ClosedInterval, Interval};
use crate::sky_errors::SkyError;

use super::{CelestialBody, CelestialObject};

const COLOR_INDEX_INTERVAL: ClosedInterval = ClosedInterval::new_unchecked(-0.5, 5.5);

/// A catalogue star. Stars are point sources: their angular size is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    body: CelestialBody,
    hipparcos_id: u32,
    color_index: f64,
}

impl Star {
    /// Arguments
    /// -----------------
    /// * `hipparcos_id`: catalogue number, `>= 0` (0 when the star has none)
    /// * `name`: non-empty display name
    /// * `equatorial_pos`: J2000 position
    /// * `magnitude`: apparent magnitude
    /// * `color_index`: B−V color index in `[-0.5, 5.5]`
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::NegativeCatalogueId`] if the identifier is negative,
    /// * [`SkyError::InvalidCatalogueId`] if it does not fit a `u32`,
    /// * [`SkyError::ColorIndexOutOfRange`] if the color index is outside `[-0.5, 5.5]`,
    /// * [`SkyError::EmptyName`] if `name` is empty.
    pub fn new(
        hipparcos_id: i64,
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> Result<Self, SkyError> {
        if hipparcos_id < 0 {
            return Err(SkyError::NegativeCatalogueId(hipparcos_id));
        }
        let hipparcos_id = u32::try_from(hipparcos_id)
            .map_err(|_| SkyError::InvalidCatalogueId(hipparcos_id.to_string()))?;
        if !COLOR_INDEX_INTERVAL.contains(color_index) {
            return Err(SkyError::ColorIndexOutOfRange(color_index));
        }
        Ok(Star {
            body: CelestialBody::new(name, equatorial_pos, 0.0, magnitude)?,
            hipparcos_id,
            color_index,
        })
    }

    pub fn hipparcos_id(&self) -> u32 {
        self.hipparcos_id
    }

    pub fn color_index(&self) -> f64 {
        self.color_index
    }

    /// Approximate surface temperature in Kelvin, from the Ballesteros formula.
    pub fn color_temperature(&self) -> u32 {
        let c = 0.92 * self.color_index;
        (4600.0 * (1.0 / (c + 1.7) + 1.0 / (c + 0.62))).floor() as u32
    }
}

impl CelestialObject for Star {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

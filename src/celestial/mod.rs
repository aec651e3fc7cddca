//! # Celestial objects
//!
//! Immutable snapshots of the objects displayed in the sky, valid for **one evaluation
//! instant**: they are rebuilt for every new [`ObservedSky`](crate::observed_sky::ObservedSky)
//! and never mutated.
//!
//! Every object shares a [`CelestialBody`] (name, equatorial position, angular size, magnitude)
//! and exposes it through the [`CelestialObject`] trait:
//!
//! - [`Sun`] – adds its ecliptic position and mean anomaly,
//! - [`Moon`] – adds its illuminated fraction and [`MoonPhase`],
//! - [`Planet`] – nothing beyond the shared data,
//! - [`Star`] – adds its catalogue identifier and color temperature.
//!
//! [`SkyObject`] is a borrowed view over any of them, as returned by nearest-object queries.

mod moon;
mod planet;
mod star;
mod sun;

pub use moon::{Moon, MoonPhase};
pub use planet::Planet;
pub use star::Star;
pub use sun::Sun;

use std::fmt;

use crate::constants::Radian;
use crate::coordinates::EquatorialCoordinates;
use crate::sky_errors::SkyError;

/// Data shared by every celestial object.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    name: String,
    equatorial_pos: EquatorialCoordinates,
    angular_size: Radian,
    magnitude: f64,
}

impl CelestialBody {
    /// Arguments
    /// -----------------
    /// * `name`: non-empty display name
    /// * `equatorial_pos`: position at the evaluation instant
    /// * `angular_size`: apparent diameter in radians, `>= 0`
    /// * `magnitude`: apparent magnitude
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::EmptyName`] if `name` is empty,
    /// * [`SkyError::NegativeAngularSize`] if `angular_size` is negative or NaN.
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Result<Self, SkyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SkyError::EmptyName);
        }
        if !(angular_size >= 0.0) {
            return Err(SkyError::NegativeAngularSize(angular_size));
        }
        Ok(CelestialBody {
            name,
            equatorial_pos,
            angular_size,
            magnitude,
        })
    }

    /// Constructor for values produced by the orbital models, whose outputs are in range by
    /// construction.
    pub(crate) fn from_model(
        name: &str,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Self {
        debug_assert!(!name.is_empty());
        debug_assert!(angular_size >= 0.0, "negative angular size {angular_size}");
        CelestialBody {
            name: name.to_string(),
            equatorial_pos,
            angular_size,
            magnitude,
        }
    }

    /// Body whose position, angular size and magnitude are all NaN.
    pub(crate) fn undefined(name: &str) -> Self {
        CelestialBody {
            name: name.to_string(),
            equatorial_pos: EquatorialCoordinates::undefined(),
            angular_size: f64::NAN,
            magnitude: f64::NAN,
        }
    }
}

/// Common read access to every celestial object.
pub trait CelestialObject {
    fn body(&self) -> &CelestialBody;

    fn name(&self) -> &str {
        &self.body().name
    }

    fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.body().equatorial_pos
    }

    fn angular_size(&self) -> Radian {
        self.body().angular_size
    }

    fn magnitude(&self) -> f64 {
        self.body().magnitude
    }

    /// Short descriptive text, shown to the user next to the object.
    fn info(&self) -> String {
        self.name().to_string()
    }
}

/// Borrowed view over any celestial object of a snapshot.
#[derive(Debug, Clone, Copy)]
pub enum SkyObject<'a> {
    Sun(&'a Sun),
    Moon(&'a Moon),
    Planet(&'a Planet),
    Star(&'a Star),
}

impl SkyObject<'_> {
    fn inner(&self) -> &dyn CelestialObject {
        match self {
            SkyObject::Sun(sun) => *sun,
            SkyObject::Moon(moon) => *moon,
            SkyObject::Planet(planet) => *planet,
            SkyObject::Star(star) => *star,
        }
    }
}

impl CelestialObject for SkyObject<'_> {
    fn body(&self) -> &CelestialBody {
        self.inner().body()
    }

    fn info(&self) -> String {
        self.inner().info()
    }
}

impl fmt::Display for SkyObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

//! # Analytic models of the solar system bodies
//!
//! Every model is a stateless value evaluated at a day offset from
//! [`RefEpoch::J2010`](crate::time::RefEpoch::J2010), together with the
//! [`EclipticToEquatorialConversion`] valid at the same instant. Evaluation is total for any
//! finite day offset and returns a fully-formed celestial object.
//!
//! - [`SunModel`]: mean anomaly with a first order equation of center,
//! - [`MoonModel`]: five perturbation terms applied on top of the mean longitude,
//! - [`PlanetModel`]: Keplerian elements at J2010 ([`OrbitalElements`]) seen from the Earth.
//!
//! The models are low-order approximations, accurate to a fraction of a degree over a few
//! decades around 2010.

mod moon_model;
mod planet_model;
mod sun_model;

pub use moon_model::MoonModel;
pub use planet_model::{OrbitalElements, PlanetModel};
pub use sun_model::SunModel;

use crate::conversion::EclipticToEquatorialConversion;

/// A model computing the state of one celestial object at a given instant.
pub trait CelestialObjectModel {
    type Object;

    /// Arguments
    /// -----------------
    /// * `days_since_j2010`: days elapsed since J2010 (negative before)
    /// * `ecl_to_equ`: ecliptic to equatorial conversion valid at the same instant
    ///
    /// Return
    /// ----------
    /// * The object as seen from the Earth at that instant.
    fn at(&self, days_since_j2010: f64, ecl_to_equ: &EclipticToEquatorialConversion)
        -> Self::Object;
}

//! # Coordinate systems
//!
//! Immutable, domain-validated value types for the frames used along the observation chain:
//!
//! | Type | Longitude-like | Latitude-like |
//! |---|---|---|
//! | [`GeographicCoordinates`] | longitude ∈ [-180°, 180°[ | latitude ∈ [-90°, 90°] |
//! | [`EquatorialCoordinates`] | right ascension ∈ [0, 2π[ | declination ∈ [-π/2, π/2] |
//! | [`EclipticCoordinates`] | longitude ∈ [0, 2π[ | latitude ∈ [-π/2, π/2] |
//! | [`HorizontalCoordinates`] | azimuth ∈ [0, 2π[ | altitude ∈ [-π/2, π/2] |
//!
//! plus the unconstrained plane point [`CartesianCoordinates`] produced by the
//! [`StereographicProjection`](crate::projection::StereographicProjection).
//!
//! Every public constructor validates its domain and fails with
//! [`SkyError::ValueOutOfInterval`](crate::sky_errors::SkyError::ValueOutOfInterval) instead of
//! wrapping silently. Conversions that produce already-reduced angles go through crate-private
//! constructors.

mod cartesian;
mod ecliptic;
mod equatorial;
mod geographic;
mod horizontal;

pub use cartesian::CartesianCoordinates;
pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;

use crate::constants::Radian;
use crate::math::angle::TAU;
use crate::math::interval::{ClosedInterval, RightOpenInterval};

/// Domain of every longitude-like angle in radians: `[0, 2π[`.
pub(crate) const FULL_TURN: RightOpenInterval = RightOpenInterval::new_unchecked(0.0, TAU);

/// Domain of every latitude-like angle in radians: `[-π/2, π/2]`.
pub(crate) const HALF_TURN: ClosedInterval = ClosedInterval::new_unchecked(-TAU / 4.0, TAU / 4.0);

pub(crate) fn debug_check_domain(lon: Radian, lat: Radian) {
    use crate::math::interval::Interval;
    debug_assert!(FULL_TURN.contains(lon), "longitude {lon} outside [0, 2π[");
    debug_assert!(HALF_TURN.contains(lat), "latitude {lat} outside [-π/2, π/2]");
}

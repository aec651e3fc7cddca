use crate::constants::{Radian, RADSEC};
use crate::math::polynomial::horner;

/// Coefficients (arcseconds, highest degree first) of the mean obliquity polynomial.
///
/// The constant term is 23° 26' 21.45".
const OBLIQUITY_COEFFICIENTS: [f64; 4] = [0.00181, -0.0006, -46.815, 84_381.45];

/// Compute the mean obliquity of the ecliptic.
///
/// Arguments
/// ---------
/// * `julian_centuries`: Julian centuries elapsed since J2000.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// ```text
/// ε(T) = 0.00181"·T³ − 0.0006"·T² − 46.815"·T + 23° 26' 21.45"
/// ```
/// evaluated with Horner's method.
pub fn obliquity(julian_centuries: f64) -> Radian {
    horner(&OBLIQUITY_COEFFICIENTS, julian_centuries) * RADSEC
}

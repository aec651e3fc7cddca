//! # Stereographic projection
//!
//! Conformal mapping of the observer's celestial sphere onto a plane tangent at a chosen
//! horizontal center point `(λ₀, φ₁)`. The center maps to the origin; the point diametrically
//! opposed to it maps to infinity.
//!
//! ```text
//! d = 1 / (1 + sin φ·sin φ₁ + cos φ·cos φ₁·cos Δλ)        Δλ = λ − λ₀
//! x = d·cos φ·sin Δλ
//! y = d·(sin φ·cos φ₁ − cos φ·sin φ₁·cos Δλ)
//! ```
//!
//! Parallels of constant altitude map to circles which are only centered on the origin when the
//! projection center is the zenith, hence [`StereographicProjection::circle_center_for_parallel`]
//! and [`StereographicProjection::circle_radius_for_parallel`].

use std::fmt;

use crate::constants::Radian;
use crate::coordinates::{CartesianCoordinates, HorizontalCoordinates};
use crate::math::angle;

#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    sin_phi1: f64,
    cos_phi1: f64,
}

impl StereographicProjection {
    pub fn new(center: HorizontalCoordinates) -> Self {
        let (sin_phi1, cos_phi1) = center.alt().sin_cos();
        StereographicProjection {
            center,
            sin_phi1,
            cos_phi1,
        }
    }

    pub fn center(&self) -> &HorizontalCoordinates {
        &self.center
    }

    /// Center of the circle onto which the parallel of altitude `parallel.alt()` is projected.
    pub fn circle_center_for_parallel(
        &self,
        parallel: &HorizontalCoordinates,
    ) -> CartesianCoordinates {
        let cy = self.cos_phi1 / (parallel.alt().sin() + self.sin_phi1);
        CartesianCoordinates::of(0.0, cy)
    }

    /// Radius of the circle onto which the parallel of altitude `parallel.alt()` is projected.
    ///
    /// The value is signed: it is negative when the parallel encloses the antipode of the center.
    pub fn circle_radius_for_parallel(&self, parallel: &HorizontalCoordinates) -> f64 {
        let phi = parallel.alt();
        phi.cos() / (phi.sin() + self.sin_phi1)
    }

    /// Planar diameter of an object of angular size `rad` seen at the projection center.
    pub fn apply_to_angle(&self, rad: Radian) -> f64 {
        2.0 * (rad / 4.0).tan()
    }

    pub fn apply(&self, azalt: &HorizontalCoordinates) -> CartesianCoordinates {
        let (sin_phi, cos_phi) = azalt.alt().sin_cos();
        let (sin_dlambda, cos_dlambda) = (azalt.az() - self.center.az()).sin_cos();

        let d = 1.0 / (1.0 + sin_phi * self.sin_phi1 + cos_phi * self.cos_phi1 * cos_dlambda);
        let x = d * cos_phi * sin_dlambda;
        let y = d * (sin_phi * self.cos_phi1 - cos_phi * self.sin_phi1 * cos_dlambda);

        CartesianCoordinates::of(x, y)
    }

    /// Exact inverse of [`StereographicProjection::apply`].
    ///
    /// The origin maps back to the projection center directly (the general formula divides by
    /// the distance to the origin).
    pub fn inverse_apply(&self, xy: &CartesianCoordinates) -> HorizontalCoordinates {
        let (x, y) = (xy.x(), xy.y());
        if x == 0.0 && y == 0.0 {
            return self.center;
        }

        let rho_square = x * x + y * y;
        let rho = rho_square.sqrt();
        let sin_c = 2.0 * rho / (rho_square + 1.0);
        let cos_c = (1.0 - rho_square) / (rho_square + 1.0);

        let lambda = (x * sin_c).atan2(rho * self.cos_phi1 * cos_c - y * self.sin_phi1 * sin_c)
            + self.center.az();
        let phi = (cos_c * self.sin_phi1 + y * sin_c * self.cos_phi1 / rho)
            .clamp(-1.0, 1.0)
            .asin();

        HorizontalCoordinates::from_reduced(angle::normalize_positive(lambda), phi)
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StereographicProjection centered at (az = {:.4}, alt = {:.4})",
            self.center.az(),
            self.center.alt()
        )
    }
}

#[cfg(test)]
mod projection_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn projection_deg(az: f64, alt: f64) -> StereographicProjection {
        StereographicProjection::new(HorizontalCoordinates::of_deg(az, alt).unwrap())
    }

    #[test]
    fn test_apply() {
        let projection = projection_deg(45., 45.);
        let p = projection.apply(&HorizontalCoordinates::of_deg(45., 30.).unwrap());
        assert_relative_eq!(p.x(), 0., epsilon = 1e-15);
        assert_relative_eq!(p.y(), -0.13165249758739583, epsilon = 1e-12);

        let projection = projection_deg(180., 15.);
        let p = projection.apply(&HorizontalCoordinates::of_deg(150., 40.).unwrap());
        assert_relative_eq!(p.x(), -0.2119453628712186, epsilon = 1e-12);
        assert_relative_eq!(p.y(), 0.24855431938802144, epsilon = 1e-12);

        let origin = projection.apply(projection.center());
        assert_relative_eq!(origin.x(), 0., epsilon = 1e-15);
        assert_relative_eq!(origin.y(), 0., epsilon = 1e-15);
    }

    #[test]
    fn test_round_trip() {
        for (c_az, c_alt) in [(0., 0.), (180., 15.), (45., 45.), (300., -60.), (10., 89.)] {
            let projection = projection_deg(c_az, c_alt);
            for i in 0..24 {
                for j in -8..=8 {
                    let az = angle::of_deg(i as f64 * 15. + 1.);
                    let alt = angle::of_deg(j as f64 * 10.);
                    let h = HorizontalCoordinates::of(az, alt).unwrap();
                    // The antipode of the center is sent to infinity
                    if h.angular_distance_to(projection.center()) > PI - 1e-3 {
                        continue;
                    }
                    let back = projection.inverse_apply(&projection.apply(&h));
                    assert_relative_eq!(back.alt(), alt, epsilon = 1e-9);
                    if alt.abs() < FRAC_PI_2 - 1e-6 {
                        let d_az = (back.az() - az + PI).rem_euclid(2. * PI) - PI;
                        assert!(d_az.abs() < 1e-9, "az {az} came back as {}", back.az());
                    }
                }
            }
        }
    }

    #[test]
    fn test_inverse_apply_origin() {
        let projection = projection_deg(123., 12.);
        let center = projection.inverse_apply(&CartesianCoordinates::of(0., 0.));
        assert_eq!(center, *projection.center());
    }

    #[test]
    fn test_apply_to_angle() {
        let projection = projection_deg(0., 0.);
        assert_relative_eq!(
            projection.apply_to_angle(angle::of_deg(0.5)),
            2. * (angle::of_deg(0.5) / 4.).tan()
        );
        assert_eq!(projection.apply_to_angle(0.), 0.);
        // A field of view of 180° spans a plane width of 2·tan(π/4) = 2
        assert_relative_eq!(projection.apply_to_angle(PI), 2., epsilon = 1e-15);
    }

    #[test]
    fn test_parallel_circles() {
        let projection = projection_deg(45., 45.);
        let parallel = HorizontalCoordinates::of_deg(0., 27.).unwrap();
        let center = projection.circle_center_for_parallel(&parallel);
        let radius = projection.circle_radius_for_parallel(&parallel);

        assert_eq!(center.x(), 0.);
        assert_relative_eq!(
            center.y(),
            angle::of_deg(45.).cos() / (angle::of_deg(27.).sin() + angle::of_deg(45.).sin())
        );

        for i in 0..36 {
            let on_parallel = HorizontalCoordinates::of_deg(i as f64 * 10., 27.).unwrap();
            let p = projection.apply(&on_parallel);
            assert_relative_eq!(
                p.distance_to(center.x(), center.y()),
                radius.abs(),
                epsilon = 1e-12
            );
        }
    }
}

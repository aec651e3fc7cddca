use std::fmt;

use crate::constants::{Degree, Radian};
use crate::math::angle;
use crate::math::interval::{ClosedInterval, Interval, RightOpenInterval};
use crate::sky_errors::SkyError;

const LON_DEG_INTERVAL: RightOpenInterval = RightOpenInterval::new_unchecked(-180.0, 180.0);
const LAT_DEG_INTERVAL: ClosedInterval = ClosedInterval::new_unchecked(-90.0, 90.0);

/// Position of an observer on Earth (east-positive longitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicCoordinates {
    lon: Radian,
    lat: Radian,
}

impl GeographicCoordinates {
    /// Build geographic coordinates from degrees.
    ///
    /// Arguments
    /// -----------------
    /// * `lon_deg`: longitude in `[-180°, 180°[`
    /// * `lat_deg`: latitude in `[-90°, 90°]`
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::ValueOutOfInterval`] if either angle is outside its domain.
    pub fn of_deg(lon_deg: Degree, lat_deg: Degree) -> Result<Self, SkyError> {
        LON_DEG_INTERVAL.check(lon_deg)?;
        LAT_DEG_INTERVAL.check(lat_deg)?;
        Ok(GeographicCoordinates {
            lon: angle::of_deg(lon_deg),
            lat: angle::of_deg(lat_deg),
        })
    }

    pub fn is_valid_lon_deg(lon_deg: Degree) -> bool {
        LON_DEG_INTERVAL.contains(lon_deg)
    }

    pub fn is_valid_lat_deg(lat_deg: Degree) -> bool {
        LAT_DEG_INTERVAL.contains(lat_deg)
    }

    pub fn lon(&self) -> Radian {
        self.lon
    }

    pub fn lon_deg(&self) -> Degree {
        angle::to_deg(self.lon)
    }

    pub fn lat(&self) -> Radian {
        self.lat
    }

    pub fn lat_deg(&self) -> Degree {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon = {:.4}°, lat = {:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod geographic_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_of_deg() {
        let epfl = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        assert_relative_eq!(epfl.lon_deg(), 6.57, epsilon = 1e-12);
        assert_relative_eq!(epfl.lat_deg(), 46.52, epsilon = 1e-12);
        assert_relative_eq!(epfl.lon(), 0.11466813185602746, epsilon = 1e-14);
        assert_eq!(epfl.to_string(), "(lon = 6.5700°, lat = 46.5200°)");
    }

    #[test]
    fn test_domain() {
        assert!(GeographicCoordinates::of_deg(-180., 90.).is_ok());
        assert!(GeographicCoordinates::of_deg(180., 0.).is_err());
        assert!(GeographicCoordinates::of_deg(0., 90.5).is_err());
        assert!(GeographicCoordinates::of_deg(0., -90.5).is_err());
        assert!(GeographicCoordinates::is_valid_lon_deg(179.99));
        assert!(!GeographicCoordinates::is_valid_lon_deg(180.));
        assert!(GeographicCoordinates::is_valid_lat_deg(-90.));
        assert!(!GeographicCoordinates::is_valid_lat_deg(f64::NAN));
    }
}

//! # Reference epochs and sidereal time
//!
//! Instants are [`hifitime::Epoch`] values. Elapsed time is always measured on the UTC Modified
//! Julian Date scale (leap seconds ignored), which is the resolution the analytic models of
//! [`crate::models`] are built for.

use std::str::FromStr;

use hifitime::Epoch;

use crate::constants::{Radian, DAYS_PER_JULIAN_CENTURY, HOURS_PER_DAY, MJD, T2000, T2010};
use crate::coordinates::GeographicCoordinates;
use crate::math::angle;
use crate::math::polynomial::horner;
use crate::sky_errors::SkyError;

/// Greenwich sidereal time at 0h UT, in hours, as a polynomial in Julian centuries since J2000.
const GST0_COEFFICIENTS: [f64; 3] = [0.000025862, 2400.051336, 6.697374558];

/// Ratio between a sidereal hour and a solar hour.
const SIDEREAL_RATE: f64 = 1.002737909;

/// Astronomical reference epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefEpoch {
    /// 2000-01-01 12:00 UTC
    J2000,
    /// 2009-12-31 00:00 UTC (the "J2010" of practical astronomy tables)
    J2010,
}

impl RefEpoch {
    pub fn mjd(&self) -> MJD {
        match self {
            RefEpoch::J2000 => T2000,
            RefEpoch::J2010 => T2010,
        }
    }

    pub fn epoch(&self) -> Epoch {
        Epoch::from_mjd_utc(self.mjd())
    }

    /// Number of days from this epoch until `when` (negative if `when` is earlier).
    pub fn days_until(&self, when: &Epoch) -> f64 {
        when.to_mjd_utc_days() - self.mjd()
    }

    /// Number of Julian centuries (36525 days) from this epoch until `when`.
    pub fn julian_centuries_until(&self, when: &Epoch) -> f64 {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }
}

/// Parse an instant such as `"2020-02-17T20:15:00 UTC"`.
///
/// Errors
/// ----------
/// * [`SkyError::InvalidEpoch`] carrying the underlying parser message.
pub fn epoch_from_str(s: &str) -> Result<Epoch, SkyError> {
    Epoch::from_str(s.trim()).map_err(|e| SkyError::InvalidEpoch(format!("{s}: {e}")))
}

/// Greenwich sidereal time at `when`, in radians, normalized to `[0, 2π[`.
///
/// The sidereal time at 0h UT of the current UTC day is obtained from a quadratic
/// polynomial in Julian centuries since J2000; the hours elapsed since 0h UT are then
/// added, scaled by the sidereal rate.
pub fn greenwich_sidereal_time(when: &Epoch) -> Radian {
    let mjd = when.to_mjd_utc_days();
    let day_start = mjd.floor();
    let t = (day_start - T2000) / DAYS_PER_JULIAN_CENTURY;
    let hours_since_day_start = (mjd - day_start) * HOURS_PER_DAY;

    let s0 = horner(&GST0_COEFFICIENTS, t);
    let s1 = SIDEREAL_RATE * hours_since_day_start;

    angle::normalize_positive(angle::of_hr(s0 + s1))
}

/// Local sidereal time at `when` for an observer at `where_`, in radians, in `[0, 2π[`.
pub fn local_sidereal_time(when: &Epoch, where_: &GeographicCoordinates) -> Radian {
    angle::normalize_positive(greenwich_sidereal_time(when) + where_.lon())
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_epoch_dates() {
        let j2000 = Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0);
        assert_relative_eq!(RefEpoch::J2000.days_until(&j2000), 0., epsilon = 1e-9);

        let j2010 = Epoch::from_gregorian_utc_at_midnight(2009, 12, 31);
        assert_relative_eq!(RefEpoch::J2010.days_until(&j2010), 0., epsilon = 1e-9);
        assert_relative_eq!(RefEpoch::J2010.epoch().to_mjd_utc_days(), T2010, epsilon = 1e-9);
    }

    #[test]
    fn test_days_until() {
        let d = Epoch::from_gregorian_utc_hms(2000, 1, 3, 0, 0, 0);
        assert_relative_eq!(RefEpoch::J2000.days_until(&d), 1.5, epsilon = 1e-9);

        let d = Epoch::from_gregorian_utc_at_midnight(2010, 1, 1);
        assert_relative_eq!(RefEpoch::J2010.days_until(&d), 1., epsilon = 1e-9);

        let before = Epoch::from_gregorian_utc_at_midnight(2009, 12, 30);
        assert_relative_eq!(RefEpoch::J2010.days_until(&before), -1., epsilon = 1e-9);
    }

    #[test]
    fn test_julian_centuries_until() {
        let d = Epoch::from_gregorian_utc_hms(2100, 1, 1, 12, 0, 0);
        assert_relative_eq!(RefEpoch::J2000.julian_centuries_until(&d), 1., epsilon = 1e-12);

        let d = Epoch::from_gregorian_utc(2000, 1, 1, 0, 0, 0, 0);
        assert_relative_eq!(
            RefEpoch::J2000.julian_centuries_until(&d),
            -0.5 / 36525.,
            epsilon = 1e-13
        );
    }

    #[test]
    fn test_greenwich_sidereal_time() {
        let when = Epoch::from_gregorian_utc(1980, 4, 22, 14, 36, 51, 670_000_000);
        let gst = greenwich_sidereal_time(&when);
        assert_relative_eq!(gst, 1.2221107819644388, epsilon = 1e-8);
        assert_relative_eq!(angle::to_hr(gst), 4.668119, epsilon = 1e-6);
    }

    #[test]
    fn test_local_sidereal_time() {
        let when = Epoch::from_gregorian_utc_hms(2004, 9, 23, 11, 0, 0);
        let where_ = GeographicCoordinates::of_deg(-30., 0.).unwrap();
        assert_relative_eq!(
            local_sidereal_time(&when, &where_),
            2.4021411811201108,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_epoch_from_str() {
        let when = epoch_from_str("2010-01-01T00:00:00 UTC").unwrap();
        assert_relative_eq!(RefEpoch::J2010.days_until(&when), 1., epsilon = 1e-9);
        assert!(matches!(
            epoch_from_str("not a date"),
            Err(SkyError::InvalidEpoch(_))
        ));
    }
}

use std::fmt;

use crate::constants::Radian;
use crate::coordinates::EquatorialCoordinates;
use crate::math::angle;
use crate::math::interval::{ClosedInterval, Interval};
use crate::sky_errors::SkyError;

use super::{CelestialBody, CelestialObject};

const MOON_NAME: &str = "Moon";
const PHASE_INTERVAL: ClosedInterval = ClosedInterval::new_unchecked(0.0, 1.0);

/// The eight named phases of a lunation, in order from new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Phase whose octant contains the elongation `elongation = λmoon − λsun` (any real value,
    /// reduced to `[0, 2π[` first). Octants are centered on multiples of π/4, so an elongation
    /// slightly below 2π is still a new moon.
    pub fn from_elongation(elongation: Radian) -> Self {
        let octant = (angle::normalize_positive(elongation) / angle::TAU * 8.0).round() as usize;
        MoonPhase::ALL[octant % 8]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "new moon",
            MoonPhase::WaxingCrescent => "waxing crescent",
            MoonPhase::FirstQuarter => "first quarter",
            MoonPhase::WaxingGibbous => "waxing gibbous",
            MoonPhase::FullMoon => "full moon",
            MoonPhase::WaningGibbous => "waning gibbous",
            MoonPhase::LastQuarter => "last quarter",
            MoonPhase::WaningCrescent => "waning crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The Moon at one instant, with its illuminated fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    body: CelestialBody,
    phase: f64,
    phase_name: MoonPhase,
}

impl Moon {
    /// Errors
    /// ----------
    /// * [`SkyError::PhaseOutOfRange`] if `phase` is outside `[0, 1]`,
    /// * [`SkyError::NegativeAngularSize`] if `angular_size` is negative.
    pub fn new(
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
        phase: f64,
        phase_name: MoonPhase,
    ) -> Result<Self, SkyError> {
        if !PHASE_INTERVAL.contains(phase) {
            return Err(SkyError::PhaseOutOfRange(phase));
        }
        Ok(Moon {
            body: CelestialBody::new(MOON_NAME, equatorial_pos, angular_size, magnitude)?,
            phase,
            phase_name,
        })
    }

    pub(crate) fn from_model(
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
        phase: f64,
        phase_name: MoonPhase,
    ) -> Self {
        debug_assert!(PHASE_INTERVAL.contains(phase), "phase {phase}");
        Moon {
            body: CelestialBody::from_model(MOON_NAME, equatorial_pos, angular_size, magnitude),
            phase,
            phase_name,
        }
    }

    /// Illuminated fraction of the disc, in `[0, 1]`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn phase_name(&self) -> MoonPhase {
        self.phase_name
    }
}

impl CelestialObject for Moon {
    fn body(&self) -> &CelestialBody {
        &self.body
    }

    fn info(&self) -> String {
        format!("{} ({:.1}%)", self.name(), self.phase * 100.0)
    }
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

#[cfg(test)]
mod moon_test {
    use super::*;

    fn pos() -> EquatorialCoordinates {
        EquatorialCoordinates::of(0.55, 0.1).unwrap()
    }

    #[test]
    fn test_info() {
        let moon = Moon::new(pos(), 0.0087, -4., 0.3752, MoonPhase::WaxingCrescent).unwrap();
        assert_eq!(moon.info(), "Moon (37.5%)");
        assert_eq!(moon.to_string(), "Moon (37.5%)");
        assert_eq!(moon.name(), "Moon");

        let full = Moon::new(pos(), 0.0087, -4., 1., MoonPhase::FullMoon).unwrap();
        assert_eq!(full.info(), "Moon (100.0%)");
    }

    #[test]
    fn test_phase_bounds() {
        assert!(Moon::new(pos(), 0., 0., 0., MoonPhase::NewMoon).is_ok());
        assert_eq!(
            Moon::new(pos(), 0., 0., 1.01, MoonPhase::FullMoon),
            Err(SkyError::PhaseOutOfRange(1.01))
        );
        assert_eq!(
            Moon::new(pos(), 0., 0., -0.01, MoonPhase::NewMoon),
            Err(SkyError::PhaseOutOfRange(-0.01))
        );
    }

    #[test]
    fn test_phase_from_elongation() {
        use std::f64::consts::PI;
        assert_eq!(MoonPhase::from_elongation(0.), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_elongation(2. * PI - 0.1), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_elongation(-0.1), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_elongation(PI / 4.), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_elongation(PI / 2.), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_elongation(PI + 0.2), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_elongation(1.5 * PI), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_elongation(1.75 * PI), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::FullMoon.to_string(), "full moon");
    }
}

//! # Sky configuration
//!
//! The external inputs of a sky snapshot, in user units, as read from JSON:
//!
//! ```json
//! {
//!   "observer": { "lon_deg": 6.57, "lat_deg": 46.52 },
//!   "view": { "center_az_deg": 180.0, "center_alt_deg": 15.0, "field_of_view_deg": 100.0 },
//!   "when": "2020-02-17T20:15:00 UTC"
//! }
//! ```
//!
//! Every field is optional and falls back to its default. Values are only validated when they
//! are turned into domain types.

use hifitime::Epoch;
use serde::Deserialize;

use crate::constants::Degree;
use crate::coordinates::{GeographicCoordinates, HorizontalCoordinates};
use crate::math::angle;
use crate::math::interval::{ClosedInterval, RightOpenInterval};
use crate::projection::StereographicProjection;
use crate::sky_errors::SkyError;
use crate::time::{epoch_from_str, RefEpoch};

const CENTER_ALT_DEG_INTERVAL: ClosedInterval = ClosedInterval::new_unchecked(5.0, 90.0);
const FIELD_OF_VIEW_DEG_INTERVAL: ClosedInterval = ClosedInterval::new_unchecked(30.0, 150.0);
const AZ_DEG_INTERVAL: RightOpenInterval = RightOpenInterval::new_unchecked(0.0, 360.0);

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverLocation {
    pub lon_deg: Degree,
    pub lat_deg: Degree,
}

impl Default for ObserverLocation {
    fn default() -> Self {
        ObserverLocation {
            lon_deg: 6.57,
            lat_deg: 46.52,
        }
    }
}

impl ObserverLocation {
    /// Errors
    /// ----------
    /// * [`SkyError::InvalidConfig`] if the longitude or the latitude is out of range.
    pub fn coordinates(&self) -> Result<GeographicCoordinates, SkyError> {
        GeographicCoordinates::of_deg(self.lon_deg, self.lat_deg)
            .map_err(|e| SkyError::InvalidConfig(format!("observer location: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewingParameters {
    pub center_az_deg: Degree,
    pub center_alt_deg: Degree,
    pub field_of_view_deg: Degree,
}

impl Default for ViewingParameters {
    fn default() -> Self {
        ViewingParameters {
            center_az_deg: 180.0,
            center_alt_deg: 15.0,
            field_of_view_deg: 100.0,
        }
    }
}

impl ViewingParameters {
    /// Projection center, azimuth reduced into `[0°, 360°[` and altitude clipped into `[5°, 90°]`.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::InvalidConfig`] if a value is not a finite number.
    pub fn center(&self) -> Result<HorizontalCoordinates, SkyError> {
        HorizontalCoordinates::of_deg(
            AZ_DEG_INTERVAL.reduce(self.center_az_deg),
            CENTER_ALT_DEG_INTERVAL.clip(self.center_alt_deg),
        )
        .map_err(|e| SkyError::InvalidConfig(format!("view center: {e}")))
    }

    /// Field of view clipped into `[30°, 150°]`.
    pub fn field_of_view_deg(&self) -> Degree {
        FIELD_OF_VIEW_DEG_INTERVAL.clip(self.field_of_view_deg)
    }

    pub fn projection(&self) -> Result<StereographicProjection, SkyError> {
        Ok(StereographicProjection::new(self.center()?))
    }

    /// Width, in the projection plane, spanned by the field of view.
    pub fn plane_width(&self) -> Result<f64, SkyError> {
        Ok(self
            .projection()?
            .apply_to_angle(angle::of_deg(self.field_of_view_deg())))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub observer: ObserverLocation,
    pub view: ViewingParameters,
    /// Instant in any format accepted by [`hifitime::Epoch`]; J2010 when absent.
    pub when: Option<String>,
}

impl SkyConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SkyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn epoch(&self) -> Result<Epoch, SkyError> {
        match &self.when {
            Some(when) => epoch_from_str(when),
            None => Ok(RefEpoch::J2010.epoch()),
        }
    }
}

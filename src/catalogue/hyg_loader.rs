use std::io::Read;

use log::{debug, warn};
use serde::Deserialize;

use crate::celestial::Star;
use crate::coordinates::{EquatorialCoordinates, FULL_TURN, HALF_TURN};
use crate::sky_errors::SkyError;

use super::{Loader, StarCatalogueBuilder};

const DEFAULT_BAYER: &str = "?";

/// Columns of the HYG database used by the loader; the others are ignored.
///
/// Every column but the position may be empty.
#[derive(Debug, Deserialize, PartialEq)]
struct HygRecord {
    hip: Option<i64>,
    proper: Option<String>,
    mag: Option<f64>,
    ci: Option<f64>,
    rarad: f64,
    decrad: f64,
    bayer: Option<String>,
    con: Option<String>,
}

impl HygRecord {
    /// Proper name, else Bayer designation followed by the constellation.
    fn display_name(&self) -> String {
        match &self.proper {
            Some(proper) => proper.clone(),
            None => format!(
                "{} {}",
                self.bayer.as_deref().unwrap_or(DEFAULT_BAYER),
                self.con.as_deref().unwrap_or_default()
            ),
        }
    }

    fn equatorial_pos(&self) -> Result<EquatorialCoordinates, SkyError> {
        let ra = FULL_TURN.reduce(self.rarad);
        if ra != self.rarad {
            warn!("HYG record {:?}: right ascension {} reduced to {ra}", self.hip, self.rarad);
        }
        let dec = HALF_TURN.clip(self.decrad);
        if dec != self.decrad {
            warn!("HYG record {:?}: declination {} clipped to {dec}", self.hip, self.decrad);
        }
        EquatorialCoordinates::of(ra, dec)
    }

    fn into_star(self) -> Result<Star, SkyError> {
        Star::new(
            self.hip.unwrap_or(0),
            self.display_name(),
            self.equatorial_pos()?,
            self.mag.unwrap_or(0.0),
            self.ci.unwrap_or(0.0),
        )
    }
}

/// Loader for the star table of the [HYG database](https://github.com/astronexus/HYG-Database)
/// (CSV with a header line, version 3 column names).
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl Loader for HygDatabaseLoader {
    fn load<R: Read>(&self, input: R, builder: &mut StarCatalogueBuilder) -> Result<(), SkyError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut count = 0usize;
        for record in csv_reader.deserialize::<HygRecord>() {
            builder.add_star(record?.into_star()?);
            count += 1;
        }
        debug!("HYG loader: {count} stars read");
        Ok(())
    }
}

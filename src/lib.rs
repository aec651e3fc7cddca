//! # Skychart
//!
//! Computation core of a planetarium: for an observer location and an instant, compute where the
//! stars of a catalogue, the Sun, the Moon and the planets appear in the sky, and project them onto
//! a plane for display.
//!
//! ## Pipeline
//!
//! ```text
//! instant + location ──► conversions (ecliptic → equatorial → horizontal)
//!                              │
//! analytic models ─────────────┤
//! star catalogue ──────────────┴──► stereographic projection ──► ObservedSky
//! ```
//!
//! - [`models`] evaluate the Sun, the Moon and the planets from their orbital elements,
//! - [`catalogue`] loads the stars and asterisms from the HYG database and asterism tables,
//! - [`observed_sky::ObservedSky`] assembles a snapshot and answers nearest-object queries.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::sync::Arc;
//!
//! use skychart::catalogue::{AsterismLoader, HygDatabaseLoader, StarCatalogueBuilder};
//! use skychart::config::SkyConfig;
//! use skychart::observed_sky::ObservedSky;
//!
//! let config = SkyConfig::from_json_str(r#"{ "when": "2020-02-17T20:15:00 UTC" }"#)?;
//! let catalogue = StarCatalogueBuilder::new()
//!     .load_from(File::open("hygdata_v3.csv")?, &HygDatabaseLoader)?
//!     .load_from(File::open("asterisms.txt")?, &AsterismLoader)?
//!     .build()?;
//!
//! let sky = ObservedSky::new(
//!     &config.epoch()?,
//!     &config.observer.coordinates()?,
//!     config.view.projection()?,
//!     Arc::new(catalogue),
//! );
//! println!("{} is at {}", sky.moon(), sky.moon_position());
//! # Ok::<(), skychart::sky_errors::SkyError>(())
//! ```

pub mod catalogue;
pub mod celestial;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod earth_orientation;
pub mod math;
pub mod models;
pub mod observed_sky;
pub mod projection;
pub mod sky_errors;
pub mod time;

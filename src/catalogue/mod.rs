//! # Star catalogue
//!
//! An immutable set of [`Star`](crate::celestial::Star)s plus the [`Asterism`]s drawn between
//! them. A catalogue is assembled in two phases:
//!
//! 1. a [`StarCatalogueBuilder`] accumulates stars and asterisms, usually fed by [`Loader`]s
//!    run in sequence (a star table first, then an asterism table referencing it),
//! 2. [`StarCatalogueBuilder::build`] validates the references and freezes the result into a
//!    [`StarCatalogue`], where every asterism is resolved to indices into the star list.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use skychart::catalogue::{AsterismLoader, HygDatabaseLoader, StarCatalogueBuilder};
//!
//! let catalogue = StarCatalogueBuilder::new()
//!     .load_from(File::open("hygdata_v3.csv")?, &HygDatabaseLoader)?
//!     .load_from(File::open("asterisms.txt")?, &AsterismLoader)?
//!     .build()?;
//! # Ok::<(), skychart::sky_errors::SkyError>(())
//! ```

mod asterism;
mod asterism_loader;
mod hyg_loader;
mod star_catalogue;

pub use asterism::Asterism;
pub use asterism_loader::AsterismLoader;
pub use hyg_loader::HygDatabaseLoader;
pub use star_catalogue::{StarCatalogue, StarCatalogueBuilder};

use std::io::Read;

use crate::sky_errors::SkyError;

/// Reads one external table and feeds its content to a catalogue builder.
pub trait Loader {
    /// Errors
    /// ----------
    /// * Input failures are returned unchanged; the builder may then hold a partial load and
    ///   should be discarded.
    fn load<R: Read>(&self, input: R, builder: &mut StarCatalogueBuilder) -> Result<(), SkyError>;
}

use std::fs::File;
use std::sync::Arc;

use camino::Utf8Path;
use skychart::catalogue::{AsterismLoader, HygDatabaseLoader, StarCatalogue, StarCatalogueBuilder};
use skychart::celestial::{CelestialObject, Star};

pub const HYG_EXCERPT: &str = "tests/data/hyg_excerpt.csv";
pub const ASTERISMS: &str = "tests/data/asterisms.txt";

pub fn load_catalogue() -> Arc<StarCatalogue> {
    let stars = File::open(Utf8Path::new(HYG_EXCERPT)).unwrap();
    let asterisms = File::open(Utf8Path::new(ASTERISMS)).unwrap();
    let catalogue = StarCatalogueBuilder::new()
        .load_from(stars, &HygDatabaseLoader)
        .unwrap()
        .load_from(asterisms, &AsterismLoader)
        .unwrap()
        .build()
        .unwrap();
    Arc::new(catalogue)
}

pub fn star_index(catalogue: &StarCatalogue, name: &str) -> usize {
    catalogue
        .stars()
        .iter()
        .position(|star: &Arc<Star>| star.name() == name)
        .unwrap_or_else(|| panic!("{name} is not in the catalogue"))
}

//! # Observed sky
//!
//! One snapshot of the sky for an instant, an observer location and a projection.
//!
//! At construction every solar system body is evaluated and every object (Sun, Moon, the seven
//! planets other than the Earth, every catalogue star) is projected once onto the plane. Planar
//! positions of planets and stars are stored flattened as `[x0, y0, x1, y1, …]`, index-aligned
//! with [`ObservedSky::planets`] and [`ObservedSky::stars`].

use std::sync::Arc;

use hifitime::Epoch;
use itertools::Itertools;
use log::debug;

use crate::catalogue::{Asterism, StarCatalogue};
use crate::celestial::{CelestialObject, Moon, Planet, SkyObject, Star, Sun};
use crate::conversion::{EclipticToEquatorialConversion, EquatorialToHorizontalConversion};
use crate::coordinates::{CartesianCoordinates, GeographicCoordinates, HorizontalCoordinates};
use crate::models::{CelestialObjectModel, MoonModel, PlanetModel, SunModel};
use crate::projection::StereographicProjection;
use crate::sky_errors::SkyError;
use crate::time::RefEpoch;

#[derive(Debug, Clone)]
pub struct ObservedSky {
    projection: StereographicProjection,
    catalogue: Arc<StarCatalogue>,
    equ_to_hor: EquatorialToHorizontalConversion,
    sun: Sun,
    sun_position: CartesianCoordinates,
    moon: Moon,
    moon_position: CartesianCoordinates,
    planets: Vec<Planet>,
    planet_positions: Vec<f64>,
    star_positions: Vec<f64>,
}

impl ObservedSky {
    /// Arguments
    /// -----------------
    /// * `when`: observation instant
    /// * `where_`: observer location on the Earth
    /// * `projection`: projection of the horizontal sphere onto the plane
    /// * `catalogue`: stars and asterisms to display
    pub fn new(
        when: &Epoch,
        where_: &GeographicCoordinates,
        projection: StereographicProjection,
        catalogue: Arc<StarCatalogue>,
    ) -> Self {
        let days_since_j2010 = RefEpoch::J2010.days_until(when);
        let ecl_to_equ = EclipticToEquatorialConversion::new(when);
        let equ_to_hor = EquatorialToHorizontalConversion::new(when, where_);

        let project = |object: &dyn CelestialObject| {
            projection.apply(&equ_to_hor.apply(object.equatorial_pos()))
        };

        let sun = SunModel.at(days_since_j2010, &ecl_to_equ);
        let sun_position = project(&sun);
        let moon = MoonModel.at(days_since_j2010, &ecl_to_equ);
        let moon_position = project(&moon);

        let planets: Vec<Planet> = PlanetModel::observable()
            .map(|model| model.at(days_since_j2010, &ecl_to_equ))
            .collect();
        let planet_positions = flatten_positions(planets.iter().map(|p| project(p)));
        let star_positions =
            flatten_positions(catalogue.stars().iter().map(|s| project(&**s)));

        debug!(
            "Observed sky at {when} from {where_}: {} planets, {} stars",
            planets.len(),
            catalogue.stars().len()
        );

        ObservedSky {
            projection,
            catalogue,
            equ_to_hor,
            sun,
            sun_position,
            moon,
            moon_position,
            planets,
            planet_positions,
            star_positions,
        }
    }

    pub fn projection(&self) -> &StereographicProjection {
        &self.projection
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> CartesianCoordinates {
        self.sun_position
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> CartesianCoordinates {
        self.moon_position
    }

    /// Every planet but the Earth, in the order of [`PlanetModel::observable`].
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet_positions(&self) -> &[f64] {
        &self.planet_positions
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        self.catalogue.stars()
    }

    pub fn star_positions(&self) -> &[f64] {
        &self.star_positions
    }

    pub fn asterisms(&self) -> &[Asterism] {
        self.catalogue.asterisms()
    }

    /// See [`StarCatalogue::asterism_indices`].
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], SkyError> {
        self.catalogue.asterism_indices(asterism)
    }

    /// Horizontal position of `object` for the instant and location of this snapshot.
    pub fn horizontal_of(&self, object: &dyn CelestialObject) -> HorizontalCoordinates {
        self.equ_to_hor.apply(object.equatorial_pos())
    }

    /// The object whose projected position is the closest to `point`, provided it lies within
    /// `max_distance` of it.
    ///
    /// The scan visits the Sun and the Moon (the Moon only wins if strictly closer), then the
    /// planets, then the stars; on equal distances the object visited first is kept.
    pub fn object_closest_to(
        &self,
        point: &CartesianCoordinates,
        max_distance: f64,
    ) -> Option<SkyObject<'_>> {
        let sun_distance = self.sun_position.distance_to(point.x(), point.y());
        let moon_distance = self.moon_position.distance_to(point.x(), point.y());
        let (mut closest, mut min_distance) = if moon_distance < sun_distance {
            (SkyObject::Moon(&self.moon), moon_distance)
        } else {
            (SkyObject::Sun(&self.sun), sun_distance)
        };

        if let Some((i, d)) = nearest_position(&self.planet_positions, point) {
            if d < min_distance {
                closest = SkyObject::Planet(&self.planets[i]);
                min_distance = d;
            }
        }
        if let Some((i, d)) = nearest_position(&self.star_positions, point) {
            if d < min_distance {
                closest = SkyObject::Star(&self.catalogue.stars()[i]);
                min_distance = d;
            }
        }

        (min_distance <= max_distance).then_some(closest)
    }
}

fn flatten_positions(positions: impl Iterator<Item = CartesianCoordinates>) -> Vec<f64> {
    positions.flat_map(|p| [p.x(), p.y()]).collect()
}

/// Index and distance of the first of the closest positions of a flattened array to `point`.
fn nearest_position(flattened: &[f64], point: &CartesianCoordinates) -> Option<(usize, f64)> {
    flattened
        .iter()
        .tuples()
        .map(|(&x, &y)| point.distance_to(x, y))
        .enumerate()
        .fold(None, |best, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })
}

#[cfg(test)]
mod observed_sky_test {
    use super::*;
    use crate::catalogue::StarCatalogueBuilder;
    use crate::coordinates::EquatorialCoordinates;

    fn empty_catalogue() -> Arc<StarCatalogue> {
        Arc::new(StarCatalogueBuilder::new().build().unwrap())
    }

    fn sky(catalogue: Arc<StarCatalogue>) -> ObservedSky {
        let when = Epoch::from_gregorian_utc_hms(2020, 2, 17, 20, 15, 0);
        let where_ = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(180., 45.).unwrap());
        ObservedSky::new(&when, &where_, projection, catalogue)
    }

    #[test]
    fn test_closest_to_moon() {
        let sky = sky(empty_catalogue());
        let at_moon = sky.moon_position();

        match sky.object_closest_to(&at_moon, 0.) {
            Some(SkyObject::Moon(moon)) => assert_eq!(moon, sky.moon()),
            other => panic!("expected the Moon, got {other:?}"),
        }
        assert!(sky.object_closest_to(&at_moon, -1.).is_none());

        let far_away = CartesianCoordinates::of(1e6, 1e6);
        assert!(sky.object_closest_to(&far_away, 0.1).is_none());
    }

    #[test]
    fn test_closest_to_sun() {
        let sky = sky(empty_catalogue());
        let found = sky.object_closest_to(&sky.sun_position(), 1e-12).unwrap();
        assert_eq!(found.name(), "Sun");
    }

    #[test]
    fn test_planets_without_earth() {
        let sky = sky(empty_catalogue());
        assert_eq!(sky.planets().len(), 7);
        assert!(sky.planets().iter().all(|p| p.name() != "Earth"));
        assert_eq!(sky.planet_positions().len(), 14);

        let mars = &sky.planets()[2];
        assert_eq!(mars.name(), "Mars");
        let at_mars =
            CartesianCoordinates::of(sky.planet_positions()[4], sky.planet_positions()[5]);
        let found = sky.object_closest_to(&at_mars, 0.).unwrap();
        assert_eq!(found.name(), "Mars");
    }

    #[test]
    fn test_star_positions() {
        let mut builder = StarCatalogueBuilder::new();
        for (id, ra) in [(1, 0.5), (2, 2.5), (3, 4.5)] {
            let pos = EquatorialCoordinates::of(ra, 0.3).unwrap();
            builder.add_star(Star::new(id, format!("star {id}"), pos, 2., 0.).unwrap());
        }
        builder.add_asterism_by_ids(&[3, 2]).unwrap();
        let sky = sky(Arc::new(builder.build().unwrap()));

        assert_eq!(sky.star_positions().len(), 6);
        for (i, star) in sky.stars().iter().enumerate() {
            let expected = sky.projection().apply(&sky.horizontal_of(&**star));
            assert_eq!(sky.star_positions()[2 * i], expected.x());
            assert_eq!(sky.star_positions()[2 * i + 1], expected.y());

            let found = sky.object_closest_to(&expected, 0.).unwrap();
            assert_eq!(found.name(), star.name());
        }

        let asterism = &sky.asterisms()[0];
        assert_eq!(sky.asterism_indices(asterism).unwrap(), &[2, 1]);
    }

    #[test]
    fn test_nearest_position_keeps_first() {
        let flattened = [1., 0., 0., 1., 1., 0.];
        let origin = CartesianCoordinates::of(0., 0.);
        assert_eq!(nearest_position(&flattened, &origin), Some((0, 1.)));
        assert_eq!(nearest_position(&[], &origin), None);
    }
}

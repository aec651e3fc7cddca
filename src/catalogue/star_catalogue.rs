use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use log::debug;

use crate::celestial::Star;
use crate::sky_errors::SkyError;

use super::{Asterism, Loader};

/// Identity of an asterism: the addresses of its member stars, in order.
type MemberKey = Vec<usize>;

fn member_key(asterism: &Asterism) -> MemberKey {
    asterism
        .stars()
        .iter()
        .map(|star| Arc::as_ptr(star) as usize)
        .collect()
}

/// Immutable list of stars and asterisms, each asterism resolved to indices into the star list.
#[derive(Debug, Clone)]
pub struct StarCatalogue {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
    asterism_indices: HashMap<MemberKey, Vec<usize>>,
}

impl StarCatalogue {
    /// Arguments
    /// -----------------
    /// * `stars`: the catalogue stars, in display order
    /// * `asterisms`: groups of stars, every member being one of `stars`
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::AsterismStarNotInCatalogue`] if an asterism references a star which is not
    ///   (the same value as) one of `stars`.
    pub fn new(stars: Vec<Arc<Star>>, asterisms: Vec<Asterism>) -> Result<Self, SkyError> {
        let index_of: HashMap<*const Star, usize> = stars
            .iter()
            .enumerate()
            .map(|(i, star)| (Arc::as_ptr(star), i))
            .collect();

        let asterism_indices = asterisms
            .iter()
            .map(|asterism| {
                let indices = asterism
                    .stars()
                    .iter()
                    .map(|star| {
                        index_of
                            .get(&Arc::as_ptr(star))
                            .copied()
                            .ok_or(SkyError::AsterismStarNotInCatalogue)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, SkyError>((member_key(asterism), indices))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(StarCatalogue {
            stars,
            asterisms,
            asterism_indices,
        })
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Indices into [`StarCatalogue::stars`] of the members of `asterism`, in asterism order.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::UnknownAsterism`] if `asterism` was not registered in this catalogue.
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], SkyError> {
        self.asterism_indices
            .get(&member_key(asterism))
            .map(Vec::as_slice)
            .ok_or(SkyError::UnknownAsterism)
    }
}

/// Accumulates stars and asterisms before freezing them into a [`StarCatalogue`].
#[derive(Debug, Default)]
pub struct StarCatalogueBuilder {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
    by_hipparcos_id: HashMap<u32, Arc<Star>>,
    unresolved_ids: Vec<i64>,
}

impl StarCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_star(&mut self, star: Star) -> &mut Self {
        let star = Arc::new(star);
        self.by_hipparcos_id.insert(star.hipparcos_id(), Arc::clone(&star));
        self.stars.push(star);
        self
    }

    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// Add an asterism whose members are given by catalogue identifier, resolved against the
    /// stars added so far. When two stars share an identifier the last one added wins.
    ///
    /// An identifier matching no star is recorded, and reported by
    /// [`StarCatalogueBuilder::build`]; the asterism is then dropped.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::EmptyAsterism`] if `ids` is empty.
    pub fn add_asterism_by_ids(&mut self, ids: &[i64]) -> Result<&mut Self, SkyError> {
        if ids.is_empty() {
            return Err(SkyError::EmptyAsterism);
        }

        let mut members = Vec::with_capacity(ids.len());
        for &id in ids {
            match u32::try_from(id)
                .ok()
                .and_then(|hip| self.by_hipparcos_id.get(&hip))
            {
                Some(star) => members.push(Arc::clone(star)),
                None => {
                    self.unresolved_ids.push(id);
                    return Ok(self);
                }
            }
        }
        Ok(self.add_asterism(Asterism::new(members)?))
    }

    /// Run `loader` over `input`, feeding this builder.
    pub fn load_from<R: Read, L: Loader>(
        &mut self,
        input: R,
        loader: &L,
    ) -> Result<&mut Self, SkyError> {
        loader.load(input, self)?;
        Ok(self)
    }

    /// Stars added so far, in insertion order.
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Asterisms added so far, in insertion order.
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Freeze the accumulated content.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::UnknownCatalogueId`] for the first asterism member identifier that matched
    ///   no star,
    /// * [`SkyError::AsterismStarNotInCatalogue`] if an asterism added directly references a
    ///   star which was never added to this builder.
    pub fn build(&self) -> Result<StarCatalogue, SkyError> {
        if let Some(&id) = self.unresolved_ids.first() {
            return Err(SkyError::UnknownCatalogueId(id));
        }
        let catalogue = StarCatalogue::new(self.stars.clone(), self.asterisms.clone())?;
        debug!(
            "Star catalogue built with {} stars and {} asterisms",
            catalogue.stars.len(),
            catalogue.asterisms.len()
        );
        Ok(catalogue)
    }
}

#[cfg(test)]
mod star_catalogue_test {
    use super::*;
    use crate::coordinates::EquatorialCoordinates;

    fn star(id: i64) -> Star {
        let pos = EquatorialCoordinates::of(0.1 * id as f64, 0.).unwrap();
        Star::new(id, format!("star {id}"), pos, 1., 0.5).unwrap()
    }

    #[test]
    fn test_build_with_ids() {
        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(star(1)).add_star(star(7)).add_star(star(3));
        builder.add_asterism_by_ids(&[3, 1]).unwrap();
        let catalogue = builder.build().unwrap();

        assert_eq!(catalogue.stars().len(), 3);
        assert_eq!(catalogue.asterisms().len(), 1);
        let asterism = &catalogue.asterisms()[0];
        assert_eq!(catalogue.asterism_indices(asterism).unwrap(), &[2, 0]);
    }

    #[test]
    fn test_unknown_id() {
        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(star(1));
        builder.add_asterism_by_ids(&[1, 2]).unwrap();
        assert_eq!(builder.build().unwrap_err(), SkyError::UnknownCatalogueId(2));

        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(star(1));
        builder.add_asterism_by_ids(&[-4]).unwrap();
        assert_eq!(builder.build().unwrap_err(), SkyError::UnknownCatalogueId(-4));

        assert_eq!(
            StarCatalogueBuilder::new().add_asterism_by_ids(&[]).unwrap_err(),
            SkyError::EmptyAsterism
        );
    }

    #[test]
    fn test_foreign_star() {
        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(star(1));
        let foreign = Asterism::new(vec![Arc::new(star(1))]).unwrap();
        builder.add_asterism(foreign);
        assert_eq!(
            builder.build().unwrap_err(),
            SkyError::AsterismStarNotInCatalogue
        );
    }

    #[test]
    fn test_asterism_lookup_by_identity() {
        let mut builder = StarCatalogueBuilder::new();
        for id in 1..=50 {
            builder.add_star(star(id));
        }
        for id in 1..50 {
            builder.add_asterism_by_ids(&[id, id + 1]).unwrap();
        }
        let catalogue = builder.build().unwrap();

        for (i, asterism) in catalogue.asterisms().iter().enumerate() {
            // A copy shares the same members, hence the same identity
            let copy = asterism.clone();
            assert_eq!(catalogue.asterism_indices(&copy).unwrap(), &[i, i + 1]);
        }

        let reversed = Asterism::new(
            catalogue.asterisms()[0]
                .stars()
                .iter()
                .rev()
                .cloned()
                .collect(),
        )
        .unwrap();
        assert_eq!(
            catalogue.asterism_indices(&reversed).unwrap_err(),
            SkyError::UnknownAsterism
        );
    }

    #[test]
    fn test_unknown_asterism() {
        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(star(1));
        let catalogue = builder.build().unwrap();
        let other = Asterism::new(vec![Arc::clone(&catalogue.stars()[0])]).unwrap();
        assert_eq!(
            catalogue.asterism_indices(&other).unwrap_err(),
            SkyError::UnknownAsterism
        );
    }

    #[test]
    fn test_builder_views() {
        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(star(5));
        let member = Arc::clone(&builder.stars()[0]);
        builder.add_asterism(Asterism::new(vec![member]).unwrap());
        assert_eq!(builder.stars()[0].hipparcos_id(), 5);
        assert_eq!(builder.asterisms().len(), 1);
        assert!(builder.build().is_ok());
    }
}

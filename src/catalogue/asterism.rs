use std::sync::Arc;

use crate::celestial::Star;
use crate::sky_errors::SkyError;

/// An ordered, non-empty group of catalogue stars, typically one line of a constellation figure.
///
/// Members are shared with the catalogue: two asterisms are the same when they reference the
/// same star values, not merely equal ones.
#[derive(Debug, Clone)]
pub struct Asterism {
    stars: Vec<Arc<Star>>,
}

impl Asterism {
    /// Errors
    /// ----------
    /// * [`SkyError::EmptyAsterism`] if `stars` is empty.
    pub fn new(stars: Vec<Arc<Star>>) -> Result<Self, SkyError> {
        if stars.is_empty() {
            return Err(SkyError::EmptyAsterism);
        }
        Ok(Asterism { stars })
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Whether both asterisms reference exactly the same stars, in the same order.
    pub fn is_same(&self, other: &Asterism) -> bool {
        self.stars.len() == other.stars.len()
            && self
                .stars
                .iter()
                .zip(&other.stars)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

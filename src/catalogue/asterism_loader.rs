use std::io::{BufRead, BufReader, Read};

use log::debug;

use crate::sky_errors::SkyError;

use super::{Loader, StarCatalogueBuilder};

/// Loader for asterism tables: one asterism per line, given as the comma separated
/// catalogue identifiers of its stars. Blank lines are skipped.
///
/// Identifiers are resolved against the stars already in the builder, so this loader runs after
/// the star table loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

fn parse_ids(line: &str) -> Result<Vec<i64>, SkyError> {
    line.split(',')
        .map(str::trim)
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SkyError::InvalidCatalogueId(token.to_string()))
        })
        .collect()
}

impl Loader for AsterismLoader {
    fn load<R: Read>(&self, input: R, builder: &mut StarCatalogueBuilder) -> Result<(), SkyError> {
        let mut count = 0usize;
        for line in BufReader::new(input).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            builder.add_asterism_by_ids(&parse_ids(&line)?)?;
            count += 1;
        }
        debug!("Asterism loader: {count} asterisms read");
        Ok(())
    }
}

#[cfg(test)]
mod asterism_loader_test {
    use super::*;
    use crate::celestial::Star;
    use crate::coordinates::EquatorialCoordinates;

    fn builder_with(ids: &[i64]) -> StarCatalogueBuilder {
        let mut builder = StarCatalogueBuilder::new();
        for &id in ids {
            let pos = EquatorialCoordinates::of(0., 0.).unwrap();
            builder.add_star(Star::new(id, "s", pos, 0., 0.).unwrap());
        }
        builder
    }

    #[test]
    fn test_single_star_asterism() {
        let mut builder = builder_with(&[1]);
        builder.load_from("1".as_bytes(), &AsterismLoader).unwrap();
        let catalogue = builder.build().unwrap();
        assert_eq!(catalogue.asterisms().len(), 1);
        assert_eq!(
            catalogue.asterism_indices(&catalogue.asterisms()[0]).unwrap(),
            &[0]
        );
    }

    #[test]
    fn test_unknown_star_fails_at_build() {
        let mut builder = builder_with(&[1]);
        builder.load_from("1,2".as_bytes(), &AsterismLoader).unwrap();
        assert_eq!(builder.build().unwrap_err(), SkyError::UnknownCatalogueId(2));
    }

    #[test]
    fn test_several_lines() {
        let mut builder = builder_with(&[10, 20, 30]);
        builder
            .load_from("10, 20,30\n\n30,10\n".as_bytes(), &AsterismLoader)
            .unwrap();
        let catalogue = builder.build().unwrap();
        let indices: Vec<_> = catalogue
            .asterisms()
            .iter()
            .map(|a| catalogue.asterism_indices(a).unwrap().to_vec())
            .collect();
        assert_eq!(indices, vec![vec![0, 1, 2], vec![2, 0]]);
    }

    #[test]
    fn test_malformed_line() {
        let mut builder = builder_with(&[1]);
        assert_eq!(
            builder
                .load_from("1,x".as_bytes(), &AsterismLoader)
                .unwrap_err(),
            SkyError::InvalidCatalogueId("x".into())
        );
    }
}

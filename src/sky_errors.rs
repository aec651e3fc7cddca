use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyError {
    #[error("Value {value} is outside of the interval {interval}")]
    ValueOutOfInterval { value: f64, interval: String },

    #[error("Invalid interval bounds: low ({low}) must be strictly lower than high ({high})")]
    InvalidIntervalBounds { low: f64, high: f64 },

    #[error("Invalid interval size: {0} (must be strictly positive)")]
    InvalidIntervalSize(f64),

    #[error("The leading coefficient of a polynomial cannot be zero")]
    ZeroLeadingCoefficient,

    #[error("Invalid sexagesimal angle: {deg}° {min}' {sec}\"")]
    InvalidDms { deg: i32, min: i32, sec: f64 },

    #[error("A celestial object name cannot be empty")]
    EmptyName,

    #[error("Negative angular size: {0}")]
    NegativeAngularSize(f64),

    #[error("Moon phase out of [0, 1]: {0}")]
    PhaseOutOfRange(f64),

    #[error("Negative catalogue identifier: {0}")]
    NegativeCatalogueId(i64),

    #[error("Color index out of [-0.5, 5.5]: {0}")]
    ColorIndexOutOfRange(f64),

    #[error("An asterism must contain at least one star")]
    EmptyAsterism,

    #[error("Asterism references a star absent from the catalogue")]
    AsterismStarNotInCatalogue,

    #[error("No star with catalogue identifier {0} has been loaded")]
    UnknownCatalogueId(i64),

    #[error("Asterism not registered in this catalogue")]
    UnknownAsterism,

    #[error("Invalid catalogue identifier: {0}")]
    InvalidCatalogueId(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the csv parsing: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Error during the json parsing: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for SkyError {
    fn eq(&self, other: &Self) -> bool {
        use SkyError::*;
        match (self, other) {
            (
                ValueOutOfInterval {
                    value: a,
                    interval: ia,
                },
                ValueOutOfInterval {
                    value: b,
                    interval: ib,
                },
            ) => a == b && ia == ib,
            (
                InvalidIntervalBounds { low: la, high: ha },
                InvalidIntervalBounds { low: lb, high: hb },
            ) => la == lb && ha == hb,
            (InvalidIntervalSize(a), InvalidIntervalSize(b)) => a == b,
            (
                InvalidDms {
                    deg: da,
                    min: ma,
                    sec: sa,
                },
                InvalidDms {
                    deg: db,
                    min: mb,
                    sec: sb,
                },
            ) => da == db && ma == mb && sa == sb,
            (NegativeAngularSize(a), NegativeAngularSize(b)) => a == b,
            (PhaseOutOfRange(a), PhaseOutOfRange(b)) => a == b,
            (NegativeCatalogueId(a), NegativeCatalogueId(b)) => a == b,
            (ColorIndexOutOfRange(a), ColorIndexOutOfRange(b)) => a == b,
            (UnknownCatalogueId(a), UnknownCatalogueId(b)) => a == b,
            (InvalidCatalogueId(a), InvalidCatalogueId(b)) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,

            // Wrapped errors are not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            (ZeroLeadingCoefficient, ZeroLeadingCoefficient) => true,
            (EmptyName, EmptyName) => true,
            (EmptyAsterism, EmptyAsterism) => true,
            (AsterismStarNotInCatalogue, AsterismStarNotInCatalogue) => true,
            (UnknownAsterism, UnknownAsterism) => true,

            _ => false,
        }
    }
}

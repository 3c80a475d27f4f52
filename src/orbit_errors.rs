use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum OrbitError {
    #[error("Invalid orbital elements: {0}")]
    InvalidElements(String),

    #[error("Degenerate orbit geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Unknown distance unit: {0} (expected \"AU\" or \"km\")")]
    InvalidUnit(String),

    #[error("Orbit has no reference epoch; set one with `with_reference_epoch`")]
    MissingReferenceEpoch,
}

impl PartialEq for OrbitError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitError::*;
        match (self, other) {
            // Messages carry formatted numbers: same variant is enough
            (InvalidElements(_), InvalidElements(_)) => true,
            (DegenerateGeometry(_), DegenerateGeometry(_)) => true,

            (InvalidUnit(a), InvalidUnit(b)) => a == b,
            (MissingReferenceEpoch, MissingReferenceEpoch) => true,

            _ => false,
        }
    }
}

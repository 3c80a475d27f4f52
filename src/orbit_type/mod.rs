//! # Orbital element representations
//!
//! This module defines the element sets accepted and produced by the crate:
//!
//! - [`ElementRecord`]: the **construction input**, `(a, e, i, Ω, ω)` plus an
//!   [`Anomaly`] that is either the mean anomaly at epoch or the true anomaly.
//!   The semi-major axis is still expressed in the unit chosen by
//!   [`crate::config::OrbitConfig`].
//! - [`keplerian_element`](crate::orbit_type::keplerian_element): the
//!   **normalized** element set stored by an orbit: meters, angles in
//!   `[0, 2π)`, both anomalies resolved.
//! - [`state_vector`](crate::orbit_type::state_vector): inertial Cartesian
//!   position/velocity and the conversions to and from Keplerian elements.
//!
//! ## Loose records
//!
//! Element tables coming from the simulation layer use short, inconsistent
//! keys. [`ElementRecord`] deserializes any of them and resolves the naming
//! once, at ingestion:
//!
//! | element | accepted keys |
//! |---|---|
//! | semi-major axis | `a` |
//! | eccentricity | `e`, `ecc` |
//! | inclination | `i`, `inc` |
//! | longitude of ascending node | `o`, `raan` |
//! | argument of periapsis | `w`, `argp` |
//! | anomaly | `m` (mean) and/or `nu` (true) |
//!
//! When both `m` and `nu` are present the mean anomaly wins and the true
//! anomaly is derived again from it.
//!
//! ```rust
//! use adalian_orbit::orbit_type::{Anomaly, ElementRecord};
//!
//! let record: ElementRecord = serde_json::from_str(
//!     r#"{ "a": 2.192, "e": 0.325, "i": 0.0024, "o": 3.41, "w": 5.28, "m": 0.948 }"#,
//! ).unwrap();
//!
//! assert_eq!(record.anomaly, Anomaly::Mean(0.948));
//! ```
use serde::Deserialize;

use crate::{constants::Radian, orbit_errors::OrbitError};

/// Normalized Keplerian elements (meters, radians in `[0, 2π)`).
pub mod keplerian_element;

/// Inertial state vectors and the element ↔ state conversions.
pub mod state_vector;

/// Angular position of the body on its orbit at the element epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anomaly {
    /// Mean anomaly `M` (radians).
    Mean(Radian),
    /// True anomaly `ν` (radians).
    True(Radian),
}

/// Orbital elements as supplied by the caller.
///
/// Units
/// -----
/// * `semi_major_axis`: unit given by [`crate::config::OrbitConfig::units`].
/// * `eccentricity`: unitless, must lie in `[0, 1)`.
/// * angles: radians, any real value (normalized at construction).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawElementRecord")]
pub struct ElementRecord {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub anomaly: Anomaly,
}

impl ElementRecord {
    /// Record whose position on the orbit is given by the mean anomaly at epoch.
    pub fn with_mean_anomaly(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: Radian,
        ascending_node_longitude: Radian,
        periapsis_argument: Radian,
        mean_anomaly: Radian,
    ) -> Self {
        ElementRecord {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            anomaly: Anomaly::Mean(mean_anomaly),
        }
    }

    /// Record whose position on the orbit is given by the true anomaly at epoch.
    pub fn with_true_anomaly(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: Radian,
        ascending_node_longitude: Radian,
        periapsis_argument: Radian,
        true_anomaly: Radian,
    ) -> Self {
        ElementRecord {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            anomaly: Anomaly::True(true_anomaly),
        }
    }
}

/// Wire form of [`ElementRecord`], accepting every key spelling in use.
#[derive(Debug, Deserialize)]
struct RawElementRecord {
    a: f64,
    #[serde(alias = "ecc")]
    e: f64,
    #[serde(alias = "inc")]
    i: f64,
    #[serde(alias = "raan")]
    o: f64,
    #[serde(alias = "argp")]
    w: f64,
    #[serde(default)]
    m: Option<f64>,
    #[serde(default)]
    nu: Option<f64>,
}

impl TryFrom<RawElementRecord> for ElementRecord {
    type Error = OrbitError;

    fn try_from(raw: RawElementRecord) -> Result<Self, Self::Error> {
        let anomaly = match (raw.m, raw.nu) {
            (Some(m), _) => Anomaly::Mean(m),
            (None, Some(nu)) => Anomaly::True(nu),
            (None, None) => {
                return Err(OrbitError::InvalidElements(
                    "record carries neither a mean anomaly `m` nor a true anomaly `nu`".into(),
                ))
            }
        };

        Ok(ElementRecord {
            semi_major_axis: raw.a,
            eccentricity: raw.e,
            inclination: raw.i,
            ascending_node_longitude: raw.o,
            periapsis_argument: raw.w,
            anomaly,
        })
    }
}

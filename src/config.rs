//! # Orbit construction settings
//!
//! [`OrbitConfig`] carries everything an [`crate::orbit::Orbit`] needs beyond
//! its elements: the unit in which the semi-major axis is given, and the
//! gravitational parameter of the central body.
//!
//! The default configuration reads distances in astronomical units and orbits
//! Adalia ([`ADALIA_GM`]). Any other central body can be modeled by overriding
//! the gravitational parameter.
//!
//! ```rust
//! use adalian_orbit::config::{DistanceUnit, OrbitConfig};
//!
//! let config = OrbitConfig::default()
//!     .with_units(DistanceUnit::Km)
//!     .with_gravitational_parameter(1.327_124_400_18e20);
//!
//! assert_eq!(config.units.to_meters(1.0), 1_000.0);
//! ```
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{GravParam, Meter, ADALIA_GM, AU, KM},
    orbit_errors::OrbitError,
};

/// Length unit in which the semi-major axis of an element record is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "AU", alias = "au")]
    Au,
    #[serde(rename = "km", alias = "KM")]
    Km,
}

impl DistanceUnit {
    /// Number of meters in one unit.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Au => AU,
            DistanceUnit::Km => KM,
        }
    }

    /// Convert a length expressed in this unit to meters.
    pub fn to_meters(&self, value: f64) -> Meter {
        value * self.meters_per_unit()
    }
}

impl FromStr for DistanceUnit {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AU" | "au" => Ok(DistanceUnit::Au),
            "km" | "KM" => Ok(DistanceUnit::Km),
            other => Err(OrbitError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Au => write!(f, "AU"),
            DistanceUnit::Km => write!(f, "km"),
        }
    }
}

/// Settings used when building an orbit.
///
/// Fields
/// ------
/// * `units` – unit of the semi-major axis in element records (default AU).
/// * `gravitational_parameter` – μ of the central body in m³/s² (default Adalia).
///
/// Missing fields fall back to their defaults when deserializing, so
/// `{"units": "km"}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub units: DistanceUnit,
    pub gravitational_parameter: GravParam,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        OrbitConfig {
            units: DistanceUnit::Au,
            gravitational_parameter: ADALIA_GM,
        }
    }
}

impl OrbitConfig {
    pub fn with_units(mut self, units: DistanceUnit) -> Self {
        self.units = units;
        self
    }

    pub fn with_gravitational_parameter(mut self, mu: GravParam) -> Self {
        self.gravitational_parameter = mu;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), OrbitError> {
        let mu = self.gravitational_parameter;
        if !(mu.is_finite() && mu > 0.0) {
            return Err(OrbitError::InvalidElements(format!(
                "gravitational parameter must be finite and positive, got {mu}"
            )));
        }
        Ok(())
    }
}

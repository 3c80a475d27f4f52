//! # Keplerian orbital elements
//!
//! This module defines [`KeplerianElements`], the **normalized** classical
//! element set held by every [`crate::orbit::Orbit`].
//!
//! ## What are Keplerian elements?
//!
//! 1. **a** – Semi-major axis (meters)
//! 2. **e** – Eccentricity (unitless, `0 ≤ e < 1`)
//! 3. **i** – Inclination (radians, `[0, π]`)
//! 4. **Ω** – Longitude of ascending node (radians, `[0, 2π)`)
//! 5. **ω** – Argument of periapsis (radians, `[0, 2π)`)
//! 6. **M** – Mean anomaly at epoch (radians, `[0, 2π)`)
//!
//! plus the true anomaly **ν** at epoch, derived from `M` and `e` (or the
//! reverse when the record supplied `ν`). Both anomalies are always
//! consistent with each other.
//!
//! ## Normalization
//!
//! - Angles are reduced into `[0, 2π)` with [`principal_angle`] before any
//!   trigonometric use, so large inputs do not lose precision downstream.
//! - An inclination that lands in `(π, 2π)` describes the same orbital plane
//!   traversed from the other side: it is folded back to `2π − i` and both Ω
//!   and ω are shifted by π, which leaves every inertial position unchanged.
//! - The semi-major axis is converted to meters from the record's unit.
//!
//! ## Domain
//!
//! Only closed orbits are representable: construction fails with
//! [`OrbitError::InvalidElements`] when `e ∉ [0, 1)`, `a ≤ 0`, or any field is
//! not finite. Values are rejected, never clamped.
use std::{f64::consts::PI, fmt};

use crate::{
    config::DistanceUnit,
    constants::{GravParam, Meter, Radian, Second, AU, DPI, RADEG},
    kepler::{principal_angle, true_to_mean, KeplerSolver},
    orbit_errors::OrbitError,
    orbit_type::{Anomaly, ElementRecord},
};

/// Keplerian orbital elements (osculating, two-body), normalized.
///
/// Units
/// -----
/// * `semi_major_axis`: meters.
/// * `eccentricity`: unitless.
/// * `inclination`: radians in `[0, π]`.
/// * `ascending_node_longitude`: radians (Ω) in `[0, 2π)`.
/// * `periapsis_argument`: radians (ω) in `[0, 2π)`.
/// * `mean_anomaly`: radians (M) at epoch, in `[0, 2π)`.
/// * `true_anomaly`: radians (ν) at epoch, in `[0, 2π)`.
///
/// See also
/// --------
/// * [`ElementRecord`] – Caller-facing input form.
/// * [`crate::orbit_type::state_vector::StateVector`] – Cartesian counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianElements {
    pub semi_major_axis: Meter,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
    pub true_anomaly: Radian,
}

impl KeplerianElements {
    /// Validate and normalize an element record.
    ///
    /// Arguments
    /// ---------
    /// * `record` – Elements as supplied by the caller.
    /// * `units` – Unit of `record.semi_major_axis`.
    /// * `solver` – Solver used when the record gives the mean anomaly.
    ///
    /// Return
    /// ------
    /// * Normalized elements with both anomalies resolved.
    ///
    /// Errors
    /// ------
    /// * [`OrbitError::InvalidElements`] if a field is not finite, `a ≤ 0`
    ///   or `e ∉ [0, 1)`.
    pub fn from_record(
        record: &ElementRecord,
        units: DistanceUnit,
        solver: &KeplerSolver,
    ) -> Result<Self, OrbitError> {
        let anomaly_value = match record.anomaly {
            Anomaly::Mean(m) => m,
            Anomaly::True(nu) => nu,
        };
        let fields = [
            ("semi-major axis", record.semi_major_axis),
            ("eccentricity", record.eccentricity),
            ("inclination", record.inclination),
            ("ascending node longitude", record.ascending_node_longitude),
            ("periapsis argument", record.periapsis_argument),
            ("anomaly", anomaly_value),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrbitError::InvalidElements(format!(
                "{name} must be finite, got {value}"
            )));
        }

        let semi_major_axis = units.to_meters(record.semi_major_axis);
        let eccentricity = record.eccentricity;
        check_domain(semi_major_axis, eccentricity)?;

        let (inclination, ascending_node_longitude, periapsis_argument) = normalize_plane(
            record.inclination,
            record.ascending_node_longitude,
            record.periapsis_argument,
        );

        let (mean_anomaly, true_anomaly) = match record.anomaly {
            Anomaly::Mean(m) => {
                let mean_anomaly = principal_angle(m);
                let solution = solver.solve(mean_anomaly, eccentricity);
                (mean_anomaly, solution.true_anomaly)
            }
            Anomaly::True(nu) => {
                let true_anomaly = principal_angle(nu);
                (true_to_mean(true_anomaly, eccentricity), true_anomaly)
            }
        };

        Ok(KeplerianElements {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            mean_anomaly,
            true_anomaly,
        })
    }

    /// Semi-latus rectum `p = a(1 − e²)` (meters).
    pub fn semi_latus_rectum(&self) -> Meter {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Distance to the central body at true anomaly `ν` (meters).
    pub fn radius_at(&self, true_anomaly: Radian) -> Meter {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos())
    }

    /// Periapsis distance `q = a(1 − e)` (meters).
    pub fn periapsis_distance(&self) -> Meter {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance `Q = a(1 + e)` (meters).
    pub fn apoapsis_distance(&self) -> Meter {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Mean motion `n = sqrt(μ / a³)` (rad/s).
    pub fn mean_motion(&self, mu: GravParam) -> f64 {
        (mu / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Orbital period `T = 2π / n` (seconds).
    pub fn period(&self, mu: GravParam) -> Second {
        DPI / self.mean_motion(mu)
    }
}

pub(crate) fn check_domain(semi_major_axis: Meter, eccentricity: f64) -> Result<(), OrbitError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbitError::InvalidElements(format!(
            "eccentricity must lie in [0, 1), got {eccentricity}"
        )));
    }
    if semi_major_axis <= 0.0 || semi_major_axis.is_nan() {
        return Err(OrbitError::InvalidElements(format!(
            "semi-major axis must be positive, got {semi_major_axis} m"
        )));
    }
    Ok(())
}

/// Reduce `(i, Ω, ω)` so that `i ∈ [0, π]` and the node/periapsis angles lie in `[0, 2π)`.
fn normalize_plane(
    inclination: Radian,
    ascending_node_longitude: Radian,
    periapsis_argument: Radian,
) -> (Radian, Radian, Radian) {
    let inc = principal_angle(inclination);
    if inc > PI {
        // R_z(Ω)·R_x(−i)·R_z(ω) = R_z(Ω + π)·R_x(i)·R_z(ω + π)
        (
            DPI - inc,
            principal_angle(ascending_node_longitude + PI),
            principal_angle(periapsis_argument + PI),
        )
    } else {
        (
            inc,
            principal_angle(ascending_node_longitude),
            principal_angle(periapsis_argument),
        )
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.3} m ({:.6} AU)",
            self.semi_major_axis,
            self.semi_major_axis / AU
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination / RADEG
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude / RADEG
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument / RADEG
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6} rad ({:.6}°)",
            self.mean_anomaly,
            self.mean_anomaly / RADEG
        )?;
        writeln!(
            f,
            "  ν   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly / RADEG
        )
    }
}

//! # Inertial state vectors
//!
//! Conversions between [`KeplerianElements`] and an inertial Cartesian state
//! `(r, v)`, in meters and meters per second. The two directions are inverse of
//! each other up to floating-point precision.
//!
//! ## Elements → state
//!
//! ```text
//! p = a(1 − e²)           r = p / (1 + e·cos ν)
//! r_pf = (r cos ν, r sin ν, 0)
//! v_pf = sqrt(μ/p) · (−sin ν, e + cos ν, 0)
//! (r, v) = R_z(Ω)·R_x(i)·R_z(ω) · (r_pf, v_pf)
//! ```
//!
//! ## State → elements
//!
//! ```text
//! h = r × v               e⃗ = (v × h)/μ − r/|r|
//! 1/a = 2/|r| − |v|²/μ     n = ẑ × h
//! i = atan2(|h_xy|, h_z)  Ω = atan2(n_y, n_x)
//! ω = ∠(n, e⃗) about h      ν = ∠(e⃗, r) about h
//! ```
//!
//! Angles measured "about h" take their sine from the cross product projected
//! on the orbit normal. For ν that projection has the sign of the radial
//! velocity `r·v`, for ω the sign of `e_z`: the usual quadrant tests, without
//! the loss of precision `acos` suffers near 0 and π.
//!
//! In the reference plane `n` vanishes. Ω is then set to 0 and ω measured
//! from the inertial X axis, so the periapsis direction is preserved.
use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::{
    constants::{GravParam, Radian},
    kepler::{principal_angle, true_to_mean},
    orbit_errors::OrbitError,
    orbit_type::keplerian_element::{check_domain, KeplerianElements},
    ref_system::perifocal_to_inertial,
};

/// Relative threshold under which angular momentum, node or eccentricity
/// vectors are treated as zero.
const DEGENERACY_EPS: f64 = 1e-11;

/// Inertial position (m) and velocity (m/s) of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl StateVector {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        StateVector { position, velocity }
    }

    /// Osculating Keplerian elements of this state around a body of parameter `mu`.
    ///
    /// Arguments
    /// ---------
    /// * `mu` – Gravitational parameter of the central body (m³/s²).
    ///
    /// Return
    /// ------
    /// * Normalized [`KeplerianElements`], the mean anomaly derived from ν.
    ///
    /// Errors
    /// ------
    /// * [`OrbitError::InvalidElements`] – non-finite input, or an unbound
    ///   state (`e ≥ 1`, non-negative energy).
    /// * [`OrbitError::DegenerateGeometry`] – zero angular momentum (radial
    ///   motion) or circular orbit (periapsis undefined).
    ///
    /// Equatorial orbits (i = 0 or π) have no node line; they come back with
    /// Ω = 0 and ω holding the longitude of periapsis.
    pub fn to_keplerian(&self, mu: GravParam) -> Result<KeplerianElements, OrbitError> {
        let r = self.position;
        let v = self.velocity;

        if !(r.iter().chain(v.iter()).all(|x| x.is_finite())) {
            return Err(OrbitError::InvalidElements(format!(
                "state vector must be finite, got r = {r:?}, v = {v:?}"
            )));
        }

        let r_norm = r.norm();
        if r_norm == 0.0 {
            return Err(OrbitError::DegenerateGeometry(
                "position coincides with the central body".into(),
            ));
        }

        let angular_momentum = r.cross(&v);
        let h_norm = angular_momentum.norm();
        if h_norm <= DEGENERACY_EPS * r_norm * v.norm() {
            return Err(OrbitError::DegenerateGeometry(
                "angular momentum vanishes, the trajectory is radial".into(),
            ));
        }
        let h_unit = angular_momentum / h_norm;

        let reciprocal_sma = 2.0 / r_norm - v.norm_squared() / mu;
        if reciprocal_sma <= 0.0 {
            return Err(OrbitError::InvalidElements(format!(
                "state is not bound to the central body (1/a = {reciprocal_sma} 1/m)"
            )));
        }
        let semi_major_axis = 1.0 / reciprocal_sma;

        let eccentricity_vector = v.cross(&angular_momentum) / mu - r / r_norm;
        let eccentricity = eccentricity_vector.norm();
        check_domain(semi_major_axis, eccentricity)?;
        if eccentricity < DEGENERACY_EPS {
            return Err(OrbitError::DegenerateGeometry(
                "circular orbit, the argument of periapsis is undefined".into(),
            ));
        }

        let node = Vector3::z().cross(&angular_momentum);
        let (inclination, ascending_node_longitude, periapsis_argument) =
            if node.norm() < DEGENERACY_EPS * h_norm {
                equatorial_orientation(&eccentricity_vector, angular_momentum.z)
            } else {
                (
                    angular_momentum.xy().norm().atan2(angular_momentum.z),
                    principal_angle(node.y.atan2(node.x)),
                    angle_about(&node, &eccentricity_vector, &h_unit),
                )
            };
        let true_anomaly = angle_about(&eccentricity_vector, &r, &h_unit);

        Ok(KeplerianElements {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            mean_anomaly: true_to_mean(true_anomaly, eccentricity),
            true_anomaly,
        })
    }
}

/// Orientation `(i, Ω, ω)` of an orbit lying in the reference plane.
///
/// The node line is undefined there: Ω is pinned to 0 and ω carries the
/// longitude of periapsis. For a retrograde orbit (`h_z < 0`, i = π) the
/// plane is seen from below, which mirrors the sense of ω.
fn equatorial_orientation(
    eccentricity_vector: &Vector3<f64>,
    h_z: f64,
) -> (Radian, Radian, Radian) {
    let periapsis_longitude = eccentricity_vector.y.atan2(eccentricity_vector.x);
    if h_z > 0.0 {
        (0.0, 0.0, principal_angle(periapsis_longitude))
    } else {
        (PI, 0.0, principal_angle(-periapsis_longitude))
    }
}

/// Angle from `from` to `to`, measured counter-clockwise about `normal`, in `[0, 2π)`.
fn angle_about(from: &Vector3<f64>, to: &Vector3<f64>, normal: &Vector3<f64>) -> Radian {
    let sin_part = from.cross(to).dot(normal);
    let cos_part = from.dot(to);
    principal_angle(sin_part.atan2(cos_part))
}

impl KeplerianElements {
    /// Inertial state of the body when it sits at true anomaly `ν`.
    ///
    /// Arguments
    /// ---------
    /// * `true_anomaly` – ν (radians).
    /// * `mu` – Gravitational parameter of the central body (m³/s²).
    ///
    /// Return
    /// ------
    /// * [`StateVector`] with position in meters and velocity in m/s.
    pub fn state_at_true_anomaly(&self, true_anomaly: Radian, mu: GravParam) -> StateVector {
        let p = self.semi_latus_rectum();
        let (sin_nu, cos_nu) = true_anomaly.sin_cos();
        let radius = p / (1.0 + self.eccentricity * cos_nu);

        let position_pf = Vector3::new(radius * cos_nu, radius * sin_nu, 0.0);
        let speed_scale = (mu / p).sqrt();
        let velocity_pf = Vector3::new(
            -speed_scale * sin_nu,
            speed_scale * (self.eccentricity + cos_nu),
            0.0,
        );

        let rot = perifocal_to_inertial(
            self.ascending_node_longitude,
            self.inclination,
            self.periapsis_argument,
        );

        StateVector {
            position: rot * position_pf,
            velocity: rot * velocity_pf,
        }
    }

    /// Inertial state at the element epoch.
    pub fn to_state_vector(&self, mu: GravParam) -> StateVector {
        self.state_at_true_anomaly(self.true_anomaly, mu)
    }
}

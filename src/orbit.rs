//! # Orbit model
//!
//! An [`Orbit`] owns a normalized element set, the gravitational parameter of
//! its central body and the Kepler solver settings. It is built once, from an
//! [`ElementRecord`] or from an inertial state, and then answers any number of
//! position queries without ever mutating.
//!
//! ## Time queries
//!
//! Every query is expressed relative to the element epoch:
//!
//! ```text
//! n = sqrt(μ / a³)
//! M(Δt) = (M₀ + n·Δt) mod 2π
//! M → E → ν → perifocal (r, v) → inertial (r, v)
//! ```
//!
//! [`Orbit::position_at_time`] and [`Orbit::state_at_time`] take `Δt` in
//! seconds. When a reference epoch is attached with
//! [`Orbit::with_reference_epoch`], absolute [`hifitime::Epoch`] queries are
//! available through [`Orbit::state_at_epoch`].
//!
//! ## Example
//!
//! ```rust
//! use adalian_orbit::{config::OrbitConfig, orbit::Orbit, orbit_type::ElementRecord};
//!
//! let record = ElementRecord::with_mean_anomaly(
//!     2.192,
//!     0.325,
//!     0.002443460952792061,
//!     3.4108969571725183,
//!     5.283809777487633,
//!     0.9480628496833199,
//! );
//! let orbit = Orbit::new(&record, &OrbitConfig::default()).unwrap();
//!
//! let position = orbit.position_at_time(0.0);
//! assert!((position.x + 192699041645.188).abs() < 1e4);
//! ```
use hifitime::{Duration, Epoch};
use log::debug;
use nalgebra::Vector3;

use crate::{
    config::OrbitConfig,
    constants::{GravParam, Radian, Second},
    kepler::{principal_angle, Convergence, KeplerSolver},
    orbit_errors::OrbitError,
    orbit_type::{keplerian_element::KeplerianElements, state_vector::StateVector, ElementRecord},
};

/// A closed two-body orbit around a central mass.
///
/// Immutable after construction; every query borrows `&self`, so a single
/// orbit can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    elements: KeplerianElements,
    gravitational_parameter: GravParam,
    solver: KeplerSolver,
    reference_epoch: Option<Epoch>,
}

/// Body state returned by a time query.
///
/// Units
/// -----
/// * `elapsed`: seconds since the element epoch.
/// * `position`: meters, inertial frame.
/// * `velocity`: meters per second, inertial frame.
/// * anomalies: radians in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub elapsed: Second,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub mean_anomaly: Radian,
    pub eccentric_anomaly: Radian,
    pub true_anomaly: Radian,
    pub convergence: Convergence,
}

impl OrbitState {
    pub fn state_vector(&self) -> StateVector {
        StateVector::new(self.position, self.velocity)
    }
}

impl Orbit {
    /// Build an orbit from an element record.
    ///
    /// Arguments
    /// ---------
    /// * `record` – Elements, with the semi-major axis in `config.units`.
    /// * `config` – Distance unit and gravitational parameter.
    ///
    /// Return
    /// ------
    /// * An orbit whose elements are in meters and normalized radians, with
    ///   both the mean and the true anomaly at epoch resolved.
    ///
    /// Errors
    /// ------
    /// * [`OrbitError::InvalidElements`] if `e ∉ [0, 1)`, `a ≤ 0`, a field is
    ///   not finite or the gravitational parameter is not positive.
    pub fn new(record: &ElementRecord, config: &OrbitConfig) -> Result<Self, OrbitError> {
        config.validate()?;
        let solver = KeplerSolver::default();
        let elements = KeplerianElements::from_record(record, config.units, &solver)?;

        debug!(
            "orbit built from elements: a = {} m, e = {}, M0 = {}, nu0 = {}",
            elements.semi_major_axis,
            elements.eccentricity,
            elements.mean_anomaly,
            elements.true_anomaly
        );

        Ok(Orbit {
            elements,
            gravitational_parameter: config.gravitational_parameter,
            solver,
            reference_epoch: None,
        })
    }

    /// Build an orbit from an inertial position (m) and velocity (m/s).
    ///
    /// The distance unit of `config` does not apply here: state vectors are
    /// always SI. Only the gravitational parameter is read.
    ///
    /// Errors
    /// ------
    /// * [`OrbitError::DegenerateGeometry`] for radial or circular states.
    /// * [`OrbitError::InvalidElements`] for unbound or non-finite states.
    pub fn from_state_vectors(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        config: &OrbitConfig,
    ) -> Result<Self, OrbitError> {
        Orbit::from_state(&StateVector::new(position, velocity), config)
    }

    /// Same as [`Orbit::from_state_vectors`], from a [`StateVector`].
    pub fn from_state(state: &StateVector, config: &OrbitConfig) -> Result<Self, OrbitError> {
        config.validate()?;
        let elements = state.to_keplerian(config.gravitational_parameter)?;

        debug!(
            "orbit built from state vectors: |r| = {} m, |v| = {} m/s, a = {} m, e = {}",
            state.position.norm(),
            state.velocity.norm(),
            elements.semi_major_axis,
            elements.eccentricity
        );

        Ok(Orbit {
            elements,
            gravitational_parameter: config.gravitational_parameter,
            solver: KeplerSolver::default(),
            reference_epoch: None,
        })
    }

    /// Replace the Kepler solver settings.
    ///
    /// Constructors resolve the epoch true anomaly with the default solver.
    /// It is derived again here from the epoch mean anomaly, so
    /// [`Orbit::elements`] and every later query share the same settings.
    pub fn with_solver(mut self, solver: KeplerSolver) -> Self {
        let solution = solver.solve(self.elements.mean_anomaly, self.elements.eccentricity);
        self.elements.true_anomaly = solution.true_anomaly;
        self.solver = solver;
        self
    }

    /// Attach the absolute epoch at which the elements hold.
    pub fn with_reference_epoch(mut self, epoch: Epoch) -> Self {
        self.reference_epoch = Some(epoch);
        self
    }

    /// Normalized elements at epoch, including the true anomaly.
    pub fn elements(&self) -> &KeplerianElements {
        &self.elements
    }

    pub fn gravitational_parameter(&self) -> GravParam {
        self.gravitational_parameter
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    pub fn reference_epoch(&self) -> Option<Epoch> {
        self.reference_epoch
    }

    /// Mean motion `n` (rad/s).
    pub fn mean_motion(&self) -> f64 {
        self.elements.mean_motion(self.gravitational_parameter)
    }

    /// Orbital period (seconds).
    pub fn period(&self) -> Second {
        self.elements.period(self.gravitational_parameter)
    }

    /// Mean anomaly `Δt` seconds after the element epoch, in `[0, 2π)`.
    ///
    /// `Δt` may be negative. The epoch mean anomaly is returned untouched for
    /// `Δt = 0`, so a zero anomaly at epoch stays exactly zero.
    pub fn mean_anomaly_at_time(&self, dt: Second) -> Radian {
        if dt == 0.0 {
            return self.elements.mean_anomaly;
        }
        principal_angle(self.elements.mean_anomaly + self.mean_motion() * dt)
    }

    /// Inertial position (meters) `Δt` seconds after the element epoch.
    pub fn position_at_time(&self, dt: Second) -> Vector3<f64> {
        self.state_at_time(dt).position
    }

    /// Full body state `Δt` seconds after the element epoch.
    ///
    /// The returned [`OrbitState::convergence`] tells whether the Kepler
    /// solve met its tolerance; a capped solve still yields a usable estimate.
    pub fn state_at_time(&self, dt: Second) -> OrbitState {
        let mean_anomaly = self.mean_anomaly_at_time(dt);
        let solution = self
            .solver
            .solve(mean_anomaly, self.elements.eccentricity);
        let state = self
            .elements
            .state_at_true_anomaly(solution.true_anomaly, self.gravitational_parameter);

        OrbitState {
            elapsed: dt,
            position: state.position,
            velocity: state.velocity,
            mean_anomaly,
            eccentric_anomaly: solution.eccentric_anomaly,
            true_anomaly: solution.true_anomaly,
            convergence: solution.convergence,
        }
    }

    /// Body state after a [`hifitime::Duration`] from the element epoch.
    pub fn state_after(&self, elapsed: Duration) -> OrbitState {
        self.state_at_time(elapsed.to_seconds())
    }

    /// Body state at an absolute epoch.
    ///
    /// Errors
    /// ------
    /// * [`OrbitError::MissingReferenceEpoch`] if no reference epoch was attached.
    pub fn state_at_epoch(&self, epoch: Epoch) -> Result<OrbitState, OrbitError> {
        let reference = self
            .reference_epoch
            .ok_or(OrbitError::MissingReferenceEpoch)?;
        Ok(self.state_after(epoch - reference))
    }
}

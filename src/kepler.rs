//! # Kepler equation and anomaly relations
//!
//! Bounded Newton–Raphson solver for the elliptic Kepler equation
//! `E − e·sin(E) = M`, together with the closed-form relations between the
//! mean (`M`), eccentric (`E`) and true (`ν`) anomalies.
//!
//! The solver never fails: when the iteration cap is exhausted it returns its
//! best estimate tagged with [`Convergence::IterationCapReached`], so callers can
//! tell a converged result from a best-effort one.
use std::f64::consts::PI;

use log::warn;

use crate::constants::{Radian, DPI};

/// Default stopping threshold on the Newton correction (radians).
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default bound on the number of Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Above this eccentricity the iteration starts from `E₀ = π` instead of `E₀ = M`.
///
/// Seeding at `M` overshoots into divergence for small `M` once `e` gets close
/// to 1, while `E₀ = π` converges for every `M` on the whole elliptic range.
const HIGH_ECCENTRICITY_SEED: f64 = 0.8;

/// Returns the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    let r = a.rem_euclid(DPI);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Returns the principal difference `a − b` between two angles, in `[-π, π]`.
pub fn angle_diff(a: Radian, b: Radian) -> Radian {
    let mut diff = principal_angle(a) - principal_angle(b);

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// Outcome of the iterative solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The last Newton correction fell below the tolerance.
    Converged { iterations: usize },
    /// The iteration cap was exhausted; the returned anomaly is a best estimate.
    IterationCapReached { iterations: usize },
}

impl Convergence {
    pub fn is_converged(&self) -> bool {
        matches!(self, Convergence::Converged { .. })
    }

    pub fn iterations(&self) -> usize {
        match *self {
            Convergence::Converged { iterations } => iterations,
            Convergence::IterationCapReached { iterations } => iterations,
        }
    }
}

/// Eccentric and true anomaly for a given mean anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly `E` in `[0, 2π)`.
    pub eccentric_anomaly: Radian,
    /// True anomaly `ν` in `[0, 2π)`.
    pub true_anomaly: Radian,
    pub convergence: Convergence,
}

/// Newton–Raphson solver for the elliptic Kepler equation.
///
/// Fields
/// ------
/// * `tolerance` – stop once `|ΔE|` drops below this value (radians).
/// * `max_iterations` – hard bound on the number of Newton steps.
///
/// The default configuration (1e-12 rad, 30 iterations) is enough to keep
/// positions of ~1e11 m orbits accurate well below the millimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    /// Solve `E − e·sin(E) = M` and derive the matching true anomaly.
    ///
    /// Arguments
    /// ---------
    /// * `mean_anomaly` – `M` in radians, any real value (reduced to `[0, 2π)` first).
    /// * `eccentricity` – `e`, expected in `[0, 1)`.
    ///
    /// Return
    /// ------
    /// * A [`KeplerSolution`]. A mean anomaly of exactly zero short-circuits to
    ///   `E = ν = 0` without iterating, so no floating residue leaks into the
    ///   degenerate case.
    pub fn solve(&self, mean_anomaly: Radian, eccentricity: f64) -> KeplerSolution {
        let m = principal_angle(mean_anomaly);

        if m == 0.0 {
            return KeplerSolution {
                eccentric_anomaly: 0.0,
                true_anomaly: 0.0,
                convergence: Convergence::Converged { iterations: 0 },
            };
        }

        let mut ecc_anom = if eccentricity < HIGH_ECCENTRICITY_SEED {
            m
        } else {
            PI
        };

        let mut convergence = Convergence::IterationCapReached {
            iterations: self.max_iterations,
        };

        for iteration in 1..=self.max_iterations {
            let fun = ecc_anom - eccentricity * ecc_anom.sin() - m;
            let funp = 1.0 - eccentricity * ecc_anom.cos();

            let delta = fun / funp;
            ecc_anom -= delta;

            if delta.abs() < self.tolerance {
                convergence = Convergence::Converged {
                    iterations: iteration,
                };
                break;
            }
        }

        if !convergence.is_converged() {
            warn!(
                "Kepler solver reached its cap of {} iterations (M = {m}, e = {eccentricity}); \
                 returning best estimate E = {ecc_anom}",
                self.max_iterations
            );
        }

        let eccentric_anomaly = principal_angle(ecc_anom);
        KeplerSolution {
            eccentric_anomaly,
            true_anomaly: eccentric_to_true(eccentric_anomaly, eccentricity),
            convergence,
        }
    }
}

/// True anomaly from eccentric anomaly (half-angle relation), in `[0, 2π)`.
///
/// `tan(ν/2) = sqrt((1+e)/(1−e))·tan(E/2)`, evaluated with `atan2` so the
/// quadrant of `E` carries over to `ν`.
pub fn eccentric_to_true(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = 0.5 * eccentric_anomaly;
    let nu = 2.0
        * ((1.0 + eccentricity).sqrt() * half.sin())
            .atan2((1.0 - eccentricity).sqrt() * half.cos());
    principal_angle(nu)
}

/// Eccentric anomaly from true anomaly, in `[0, 2π)`.
pub fn true_to_eccentric(true_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = 0.5 * true_anomaly;
    let ecc_anom = 2.0
        * ((1.0 - eccentricity).sqrt() * half.sin())
            .atan2((1.0 + eccentricity).sqrt() * half.cos());
    principal_angle(ecc_anom)
}

/// Mean anomaly from eccentric anomaly (Kepler's equation), in `[0, 2π)`.
pub fn eccentric_to_mean(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    principal_angle(eccentric_anomaly - eccentricity * eccentric_anomaly.sin())
}

/// Mean anomaly from true anomaly, in `[0, 2π)`. Closed form, no iteration.
pub fn true_to_mean(true_anomaly: Radian, eccentricity: f64) -> Radian {
    eccentric_to_mean(true_to_eccentric(true_anomaly, eccentricity), eccentricity)
}

/// True anomaly from mean anomaly with the default solver settings.
pub fn mean_to_true(mean_anomaly: Radian, eccentricity: f64) -> KeplerSolution {
    KeplerSolver::default().solve(mean_anomaly, eccentricity)
}

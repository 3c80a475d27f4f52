//! # Perifocal → inertial frame rotation
//!
//! The perifocal frame has its X axis toward periapsis, its Z axis along the
//! orbit normal and its Y axis completing the right-handed triad in the orbital
//! plane. Bringing a perifocal vector into the inertial frame takes three
//! successive rotations: by `−ω` about the orbit normal, by `−i` about the line
//! of nodes and by `−Ω` about the inertial Z axis. Expressed as active
//! rotations applied to the vector, that is
//!
//! ```text
//! x_inertial = R_z(Ω) · R_x(i) · R_z(ω) · x_perifocal
//! ```
//!
//! Everything here is a pure linear map: non-finite angles or coordinates give
//! non-finite results, they are never sanitized.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;

/// Principal axis of a single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// The matrix is an **active rotation** of a vector by `alpha` in the direct
/// (counter-clockwise) sense, so the rotated vector is `x' = R · x`. It is the
/// same matrix as a change of basis by `−alpha`.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
///
/// # Remarks
///
/// * Built through [`nalgebra::Rotation3::from_axis_angle`], so the result is
///   orthonormal and `R.transpose() == R.inverse()`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Direction-cosine matrix from the perifocal frame to the inertial frame.
///
/// Closed form of `R_z(Ω) · R_x(i) · R_z(ω)`; the columns are the perifocal
/// unit vectors `P` (toward periapsis), `Q` and `W` (orbit normal) expressed in
/// inertial coordinates.
///
/// Arguments
/// ---------
/// * `ascending_node_longitude` – Ω (radians).
/// * `inclination` – i (radians).
/// * `periapsis_argument` – ω (radians).
pub fn perifocal_to_inertial(
    ascending_node_longitude: Radian,
    inclination: Radian,
    periapsis_argument: Radian,
) -> Matrix3<f64> {
    let (sin_o, cos_o) = ascending_node_longitude.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_w, cos_w) = periapsis_argument.sin_cos();

    Matrix3::new(
        cos_o * cos_w - sin_o * sin_w * cos_i,
        -cos_o * sin_w - sin_o * cos_w * cos_i,
        sin_o * sin_i,
        sin_o * cos_w + cos_o * sin_w * cos_i,
        -sin_o * sin_w + cos_o * cos_w * cos_i,
        -cos_o * sin_i,
        sin_w * sin_i,
        cos_w * sin_i,
        cos_i,
    )
}

/// Same matrix as [`perifocal_to_inertial`], assembled from the three
/// elementary rotations in application order (ω, then i, then Ω).
pub fn perifocal_to_inertial_sequence(
    ascending_node_longitude: Radian,
    inclination: Radian,
    periapsis_argument: Radian,
) -> Matrix3<f64> {
    let in_plane = rotmt(periapsis_argument, Axis::Z);
    let tilt = rotmt(inclination, Axis::X);
    let node = rotmt(ascending_node_longitude, Axis::Z);

    node * tilt * in_plane
}

#[cfg(test)]
mod ref_system_test {

    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-15;

    #[test]
    fn test_rotmt_axes() {
        let rz = rotmt(FRAC_PI_2, Axis::Z);
        let x = rz * Vector3::x();
        assert_abs_diff_eq!(x, Vector3::y(), epsilon = TOLERANCE);

        let rx = rotmt(FRAC_PI_2, Axis::X);
        let y = rx * Vector3::y();
        assert_abs_diff_eq!(y, Vector3::z(), epsilon = TOLERANCE);

        let ry = rotmt(FRAC_PI_2, Axis::Y);
        let z = ry * Vector3::z();
        assert_abs_diff_eq!(z, Vector3::x(), epsilon = TOLERANCE);
    }

    #[test]
    fn test_closed_form_matches_sequence() {
        let cases = [
            (0.0, 0.0, 0.0),
            (3.4108969571725183, 0.002443460952792061, 5.283809777487633),
            (4.47519873503866, 0.0921533845053006, 6.1028927954485725),
            (1.0, PI - 0.2, 2.5),
            (-7.5, 1.2, 40.0),
        ];

        for (raan, inc, argp) in cases {
            let dcm = perifocal_to_inertial(raan, inc, argp);
            let seq = perifocal_to_inertial_sequence(raan, inc, argp);
            assert_abs_diff_eq!(dcm, seq, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_dcm_is_orthonormal() {
        let dcm = perifocal_to_inertial(0.7, 1.1, 2.3);
        assert_abs_diff_eq!(dcm * dcm.transpose(), Matrix3::identity(), epsilon = 1e-15);
        assert_abs_diff_eq!(dcm.determinant(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_orbit_normal_and_node() {
        let raan = 0.9;
        let inc = 0.4;
        let dcm = perifocal_to_inertial(raan, inc, 0.0);

        // With ω = 0 periapsis lies on the ascending node
        let node = dcm * Vector3::x();
        assert_abs_diff_eq!(
            node,
            Vector3::new(raan.cos(), raan.sin(), 0.0),
            epsilon = TOLERANCE
        );

        // The orbit normal tilts by i away from the inertial Z axis
        let normal = dcm * Vector3::z();
        assert_abs_diff_eq!(normal.z, inc.cos(), epsilon = TOLERANCE);
    }

    #[test]
    fn test_equatorial_orbit_is_plane_rotation() {
        let dcm = perifocal_to_inertial(1.0, 0.0, 0.5);
        assert_abs_diff_eq!(dcm, rotmt(1.5, Axis::Z), epsilon = 1e-15);
    }

    #[test]
    fn test_non_finite_angles_propagate() {
        let dcm = perifocal_to_inertial(f64::NAN, 0.1, 0.2);
        let v = dcm * Vector3::new(1.0, 1.0, 0.0);
        assert!(v.x.is_nan() && v.y.is_nan());
    }
}

use approx::{assert_abs_diff_eq, assert_relative_eq};
use adalian_orbit::kepler::angle_diff;
use adalian_orbit::orbit_type::keplerian_element::KeplerianElements;
use nalgebra::Vector3;

pub const REFERENCE_POSITION: [f64; 3] = [-192699041645.188, -223423094198.8061, 400973733.18174685];
pub const REFERENCE_VELOCITY: [f64; 3] =
    [10641.777646952463, -17626.86516323293, 48.436547164921816];

pub fn reference_position() -> Vector3<f64> {
    Vector3::from(REFERENCE_POSITION)
}

pub fn reference_velocity() -> Vector3<f64> {
    Vector3::from(REFERENCE_VELOCITY)
}

/// Relative comparison of two inertial vectors, scaled by the expected norm.
pub fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, max_relative: f64) {
    let gap = (actual - expected).norm();
    assert!(
        gap <= max_relative * expected.norm(),
        "vectors differ by {gap} (relative {}): {actual:?} vs {expected:?}",
        gap / expected.norm()
    );
}

/// Shape elements compared relatively, angles compared modulo 2π.
pub fn assert_orbit_close(actual: &KeplerianElements, expected: &KeplerianElements, epsilon: f64) {
    assert_relative_eq!(
        actual.semi_major_axis,
        expected.semi_major_axis,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.inclination,
        expected.inclination,
        max_relative = epsilon
    );
    assert_abs_diff_eq!(
        angle_diff(
            actual.ascending_node_longitude,
            expected.ascending_node_longitude
        ),
        0.0,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(
        angle_diff(actual.periapsis_argument, expected.periapsis_argument),
        0.0,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(
        angle_diff(actual.mean_anomaly, expected.mean_anomaly),
        0.0,
        epsilon = epsilon
    );
}

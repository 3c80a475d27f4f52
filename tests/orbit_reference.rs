use approx::assert_relative_eq;

use adalian_orbit::config::{DistanceUnit, OrbitConfig};
use adalian_orbit::constants::{AU, SECONDS_PER_DAY};
use adalian_orbit::orbit::Orbit;
use adalian_orbit::orbit_errors::OrbitError;
use adalian_orbit::orbit_type::ElementRecord;

mod common;
use common::{assert_orbit_close, assert_vector_close, reference_position, reference_velocity};

fn reference_record() -> ElementRecord {
    ElementRecord::with_mean_anomaly(
        2.192,
        0.325,
        0.002443460952792061,
        3.4108969571725183,
        5.283809777487633,
        0.9480628496833199,
    )
}

#[test]
fn test_position_from_elements() {
    let orbit = Orbit::new(&reference_record(), &OrbitConfig::default()).unwrap();
    assert_vector_close(&orbit.position_at_time(0.0), &reference_position(), 1e-7);
}

#[test]
fn test_velocity_from_elements() {
    let orbit = Orbit::new(&reference_record(), &OrbitConfig::default()).unwrap();
    let state = orbit.state_at_time(0.0);
    assert_vector_close(&state.velocity, &reference_velocity(), 1e-7);
}

#[test]
fn test_elements_from_state_vectors() {
    let config = OrbitConfig::default();
    let from_state =
        Orbit::from_state_vectors(reference_position(), reference_velocity(), &config).unwrap();
    let from_record = Orbit::new(&reference_record(), &config).unwrap();

    assert_orbit_close(from_state.elements(), from_record.elements(), 1e-7);
    assert_relative_eq!(
        from_state.elements().semi_major_axis / AU,
        2.192,
        max_relative = 1e-7
    );
}

#[test]
fn test_position_from_state_vectors() {
    let orbit = Orbit::from_state_vectors(
        reference_position(),
        reference_velocity(),
        &OrbitConfig::default(),
    )
    .unwrap();

    let state = orbit.state_at_time(0.0);
    assert_vector_close(&state.position, &reference_position(), 1e-7);
    assert_vector_close(&state.velocity, &reference_velocity(), 1e-7);
}

#[test]
fn test_zero_mean_anomaly_gives_zero_true_anomaly() {
    let record: ElementRecord = serde_json::from_str(
        r#"{
            "a": 385513712.79389995,
            "argp": 6.1028927954485725,
            "ecc": 0.171,
            "inc": 0.0921533845053006,
            "m": 0,
            "raan": 4.47519873503866
        }"#,
    )
    .unwrap();

    let config = OrbitConfig::default().with_units(DistanceUnit::Km);
    let orbit = Orbit::new(&record, &config).unwrap();

    assert_eq!(orbit.elements().mean_anomaly, 0.0);
    assert_eq!(orbit.elements().true_anomaly, 0.0);
    assert_relative_eq!(
        orbit.elements().semi_major_axis,
        385513712.79389995e3,
        max_relative = 1e-15
    );
}

#[test]
fn test_au_and_km_agree() {
    let mut km_record = reference_record();
    km_record.semi_major_axis = 2.192 * AU / 1_000.0;

    let au = Orbit::new(&reference_record(), &OrbitConfig::default()).unwrap();
    let km = Orbit::new(
        &km_record,
        &OrbitConfig::default().with_units(DistanceUnit::Km),
    )
    .unwrap();

    for dt in [0.0, 10.0 * SECONDS_PER_DAY, 500.0 * SECONDS_PER_DAY] {
        assert_vector_close(&km.position_at_time(dt), &au.position_at_time(dt), 1e-7);
    }
}

#[test]
fn test_position_is_periodic() {
    let orbit = Orbit::new(&reference_record(), &OrbitConfig::default()).unwrap();
    let period = orbit.period();

    for dt in [0.0, 37.5 * SECONDS_PER_DAY, -210.0 * SECONDS_PER_DAY, 3.3e7] {
        assert_vector_close(
            &orbit.position_at_time(dt + period),
            &orbit.position_at_time(dt),
            1e-7,
        );
    }
}

#[test]
fn test_round_trip_through_state_vectors() {
    let config = OrbitConfig::default();
    let records = [
        reference_record(),
        ElementRecord::with_mean_anomaly(1.0, 0.05, 0.3, 0.2, 4.0, 5.5),
        ElementRecord::with_mean_anomaly(5.2, 0.6, 2.9, 6.0, 0.1, 3.0),
        ElementRecord::with_true_anomaly(0.8, 0.9, 1.2, 3.1, 2.2, 1.0),
    ];

    for record in &records {
        let orbit = Orbit::new(record, &config).unwrap();
        let state = orbit.state_at_time(0.0);
        let back = Orbit::from_state(&state.state_vector(), &config).unwrap();
        assert_orbit_close(back.elements(), orbit.elements(), 1e-7);
    }
}

#[test]
fn test_eccentricity_boundaries() {
    let config = OrbitConfig::default();

    for e in [0.0, 1e-12, 0.99] {
        let record = ElementRecord::with_mean_anomaly(1.5, e, 0.2, 1.0, 2.0, 0.01);
        let orbit = Orbit::new(&record, &config).unwrap();

        for k in 0..50 {
            let dt = k as f64 * orbit.period() / 50.0;
            let state = orbit.state_at_time(dt);
            assert!(state.convergence.is_converged(), "e = {e}, dt = {dt}");
            assert!(state.position.iter().all(|x| x.is_finite()));

            let r = state.position.norm();
            assert!(r >= orbit.elements().periapsis_distance() * (1.0 - 1e-12));
            assert!(r <= orbit.elements().apoapsis_distance() * (1.0 + 1e-12));
        }
    }
}

#[test]
fn test_unbound_or_invalid_elements_are_rejected() {
    let config = OrbitConfig::default();

    for e in [1.0, 1.2, -0.1] {
        let record = ElementRecord::with_mean_anomaly(1.5, e, 0.2, 1.0, 2.0, 0.5);
        assert!(matches!(
            Orbit::new(&record, &config),
            Err(OrbitError::InvalidElements(_))
        ));
    }

    let record = ElementRecord::with_mean_anomaly(-1.5, 0.2, 0.2, 1.0, 2.0, 0.5);
    assert!(matches!(
        Orbit::new(&record, &config),
        Err(OrbitError::InvalidElements(_))
    ));

    let record = ElementRecord::with_mean_anomaly(1.5, 0.2, 0.2, f64::NAN, 2.0, 0.5);
    assert!(matches!(
        Orbit::new(&record, &config),
        Err(OrbitError::InvalidElements(_))
    ));
}

#[test]
fn test_equatorial_orbits_close_through_state_vectors() {
    let config = OrbitConfig::default();

    for inclination in [0.0, std::f64::consts::PI] {
        let record = ElementRecord::with_mean_anomaly(2.192, 0.325, inclination, 3.41, 5.28, 0.948);
        let orbit = Orbit::new(&record, &config).unwrap();
        let state = orbit.state_at_time(0.0);

        let rebuilt = Orbit::from_state_vectors(state.position, state.velocity, &config).unwrap();
        assert_eq!(rebuilt.elements().ascending_node_longitude, 0.0);

        for dt in [0.0, 45.0 * SECONDS_PER_DAY, -300.0 * SECONDS_PER_DAY] {
            assert_vector_close(
                &rebuilt.position_at_time(dt),
                &orbit.position_at_time(dt),
                1e-7,
            );
        }
    }
}

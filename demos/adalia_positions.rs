//! Print the positions of a few Adalian asteroids over one year.
//!
//! ```text
//! RUST_LOG=debug cargo run --example adalia_positions
//! ```
use adalian_orbit::config::OrbitConfig;
use adalian_orbit::constants::{AU, SECONDS_PER_DAY};
use adalian_orbit::orbit::Orbit;
use adalian_orbit::orbit_errors::OrbitError;
use adalian_orbit::orbit_type::ElementRecord;
use hifitime::{Duration, Epoch, TimeScale};

const ASTEROIDS: &str = r#"[
    { "a": 2.192, "e": 0.325, "i": 0.002443460952792061,
      "o": 3.4108969571725183, "w": 5.283809777487633, "m": 0.9480628496833199 },
    { "a": 2.577, "ecc": 0.171, "inc": 0.0921533845053006,
      "raan": 4.47519873503866, "argp": 6.1028927954485725, "m": 0 },
    { "a": 3.1, "e": 0.08, "i": 0.31, "o": 1.2, "w": 0.4, "nu": 2.0 }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: OrbitConfig = serde_json::from_str(r#"{ "units": "AU" }"#)?;
    let records: Vec<ElementRecord> = serde_json::from_str(ASTEROIDS)?;
    let start = Epoch::from_mjd_in_time_scale(59396.0, TimeScale::TT);

    let orbits = records
        .iter()
        .map(|record| Orbit::new(record, &config).map(|o| o.with_reference_epoch(start)))
        .collect::<Result<Vec<_>, OrbitError>>()?;

    for (id, orbit) in orbits.iter().enumerate() {
        println!("asteroid #{id}");
        println!("{}", orbit.elements());
        println!(
            "  period = {:.2} days",
            orbit.period() / SECONDS_PER_DAY
        );

        for month in 0..=12 {
            let epoch = start + Duration::from_days(30.0 * month as f64);
            let state = orbit.state_at_epoch(epoch)?;
            let r = state.position / AU;
            println!(
                "  {epoch}  r = ({:+.6}, {:+.6}, {:+.6}) AU  |v| = {:.3} km/s",
                r.x,
                r.y,
                r.z,
                state.velocity.norm() / 1_000.0
            );
        }
        println!();
    }

    Ok(())
}

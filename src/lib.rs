pub mod config;
pub mod constants;
pub mod kepler;
pub mod orbit;
pub mod orbit_errors;
pub mod orbit_type;
pub mod ref_system;

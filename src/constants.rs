//! # Constants and type definitions
//!
//! This module centralizes the **physical constants**, **conversion factors**, and
//! **unit aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Angular constants used when normalizing orbital angles
//! - Length conversions (AU ↔ meters, km ↔ meters)
//! - The gravitational parameter of the Adalia system, used as the default
//!   central body by [`crate::config::OrbitConfig`]
//! - Type aliases documenting the unit carried by a plain `f64`
//!
//! All lengths stored by the crate are expressed in **meters**, all times in
//! **seconds** and all angles in **radians**.

// -------------------------------------------------------------------------------------------------
// Angular constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Length and time conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in meters (IAU 2012)
pub const AU: f64 = 149_597_870_700.0;

/// Kilometer in meters
pub const KM: f64 = 1_000.0;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Central body
// -------------------------------------------------------------------------------------------------

/// Gravitational parameter μ = G·M of Adalia, the star of the simulated system (m³/s²).
///
/// This is the value reproducing both the reference state vector and the
/// reference element set of the asteroid regression case, i.e. a body at
/// `a = 2.192 AU` with `e = 0.325`.
pub const ADALIA_GM: f64 = 1.136_882_296_845_24e20;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Elapsed time in seconds
pub type Second = f64;
/// Gravitational parameter in m³/s²
pub type GravParam = f64;

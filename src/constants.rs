//! # Constants and unit aliases for llh2ecef
//!
//! This module centralizes the **reference ellipsoid constants** and the **unit aliases**
//! used by the conversion routines.
//!
//! ## Overview
//!
//! - Equatorial radius and first eccentricity of the reference ellipsoid
//! - Type aliases documenting the unit carried by each `f64`

// -------------------------------------------------------------------------------------------------
// Reference ellipsoid
// -------------------------------------------------------------------------------------------------

/// Earth equatorial radius in kilometers (WGS84)
pub const R_E_KM: f64 = 6378.137;

/// Earth equatorial radius in kilometers used by the LLH → ECEF formula.
///
/// Differs from [`R_E_KM`] in the fourth decimal. Every ECEF output of this crate is
/// computed with this value.
pub const EARTH_RADIUS_KM: f64 = 6378.1363;

/// First eccentricity of the reference ellipsoid (dimensionless)
pub const EARTH_ECCENTRICITY: f64 = 0.081819221456;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;

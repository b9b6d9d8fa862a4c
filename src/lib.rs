//! # llh2ecef
//!
//! Convert a geodetic position (latitude, longitude, height above the ellipsoid) into
//! Earth-Centered-Earth-Fixed cartesian coordinates, in kilometers.
//!
//! ```
//! use llh2ecef::conversion::GeodeticPosition;
//!
//! let ecef = GeodeticPosition::new(0.0, 0.0, 0.0).to_ecef();
//! assert_eq!(ecef.x, 6378.1363);
//! ```

pub mod cli;
pub mod constants;
pub mod conversion;
pub mod ellipsoid;
pub mod llh2ecef_errors;

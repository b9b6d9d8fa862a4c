//! Geodetic (LLH) to Earth-Centered-Earth-Fixed (ECEF) conversion.
//!
//! The conversion is closed form:
//!
//! ```text
//! denom = sqrt(1 - e² sin²φ)
//! C     = r / denom
//! S     = r (1 - e²) / denom
//! x     = (C + h) cos φ cos λ
//! y     = (C + h) cos φ sin λ
//! z     = (S + h) sin φ
//! ```
//!
//! where `φ` is the geodetic latitude, `λ` the longitude, `h` the height above the
//! ellipsoid, `r` the equatorial radius and `e` the first eccentricity.
//! It is defined for every real input: latitudes outside `[-90, 90]` wrap through the
//! trigonometric functions instead of being rejected.

use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{Degree, Kilometer, Radian};
use crate::ellipsoid::Ellipsoid;

/// Geodetic position of a point relative to the reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    /// Geodetic latitude in degrees (north positive)
    pub latitude: Degree,
    /// Longitude in degrees (east positive)
    pub longitude: Degree,
    /// Height above the ellipsoid in kilometers
    pub height: Kilometer,
}

/// Earth-Centered-Earth-Fixed cartesian position, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcefPosition {
    pub x: Kilometer,
    pub y: Kilometer,
    pub z: Kilometer,
}

impl GeodeticPosition {
    pub fn new(latitude: Degree, longitude: Degree, height: Kilometer) -> Self {
        GeodeticPosition {
            latitude,
            longitude,
            height,
        }
    }

    /// Convert this position to ECEF using [`Ellipsoid::REFERENCE`].
    ///
    /// See also
    /// ------------
    /// * [`llh_to_ecef`] – Same conversion with an explicit ellipsoid.
    pub fn to_ecef(&self) -> EcefPosition {
        llh_to_ecef(self, &Ellipsoid::REFERENCE)
    }
}

impl EcefPosition {
    /// View the position as a column vector `[x, y, z]` in km.
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Distance from the Earth center in km.
    pub fn norm(&self) -> Kilometer {
        self.as_vector().norm()
    }
}

impl From<EcefPosition> for Vector3<f64> {
    fn from(pos: EcefPosition) -> Self {
        pos.as_vector()
    }
}

fn deg_to_rad(angle: Degree) -> Radian {
    // (deg * π) / 180, not `to_radians()`: the two can differ in the last ulp.
    angle * PI / 180.0
}

/// Convert a geodetic position into ECEF coordinates.
///
/// Arguments
/// -----------------
/// * `position`: latitude and longitude in **degrees**, height above the ellipsoid in **kilometers**.
/// * `ellipsoid`: the reference ellipsoid (equatorial radius in km, first eccentricity).
///
/// Return
/// ----------
/// * The [`EcefPosition`] in **kilometers**.
///
/// Remarks
/// -------
/// * The function is pure and total: `Ellipsoid` guarantees `0 <= e < 1`, so the
///   curvature denominator is always in `(0, 1]`.
/// * Longitude has no effect at the poles, where `cos φ = 0`.
///
/// See also
/// ------------
/// * [`Ellipsoid::transverse_radius`] – `C` in the formula.
/// * [`Ellipsoid::meridional_radius`] – `S` in the formula.
pub fn llh_to_ecef(position: &GeodeticPosition, ellipsoid: &Ellipsoid) -> EcefPosition {
    let lat_rad = deg_to_rad(position.latitude);
    let lon_rad = deg_to_rad(position.longitude);

    let c_e = ellipsoid.transverse_radius(lat_rad);
    let s_e = ellipsoid.meridional_radius(lat_rad);

    let h = position.height;
    let ecef = EcefPosition {
        x: (c_e + h) * lat_rad.cos() * lon_rad.cos(),
        y: (c_e + h) * lat_rad.cos() * lon_rad.sin(),
        z: (s_e + h) * lat_rad.sin(),
    };

    trace!(?position, c_e, s_e, ?ecef, "llh_to_ecef");
    ecef
}

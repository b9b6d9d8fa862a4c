//! Reference ellipsoid and its radii of curvature.
//!
//! The ellipsoid is described by its equatorial radius (km) and its first eccentricity.
//! Construction through [`Ellipsoid::new`] rejects any eccentricity outside `[0, 1)`, so
//! the square root in [`Ellipsoid::curvature_denominator`] always has a radicand in `(0, 1]`.

use serde::{Deserialize, Serialize};

use crate::constants::{Kilometer, Radian, EARTH_ECCENTRICITY, EARTH_RADIUS_KM, R_E_KM};
use crate::llh2ecef_errors::Llh2EcefError;

/// Ellipsoid parameters as they appear in serialized form, before validation.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawEllipsoid {
    equatorial_radius: Kilometer,
    eccentricity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEllipsoid")]
pub struct Ellipsoid {
    /// Equatorial radius in kilometers
    equatorial_radius: Kilometer,
    /// First eccentricity, `0 <= e < 1`
    eccentricity: f64,
}

impl TryFrom<RawEllipsoid> for Ellipsoid {
    type Error = Llh2EcefError;

    fn try_from(raw: RawEllipsoid) -> Result<Self, Self::Error> {
        Ellipsoid::new(raw.equatorial_radius, raw.eccentricity)
    }
}

impl Ellipsoid {
    /// Ellipsoid used by the LLH → ECEF conversion (r = 6378.1363 km).
    pub const REFERENCE: Ellipsoid = Ellipsoid {
        equatorial_radius: EARTH_RADIUS_KM,
        eccentricity: EARTH_ECCENTRICITY,
    };

    /// Same eccentricity with the WGS84 equatorial radius (r = 6378.137 km).
    pub const WGS84: Ellipsoid = Ellipsoid {
        equatorial_radius: R_E_KM,
        eccentricity: EARTH_ECCENTRICITY,
    };

    /// Build a user defined ellipsoid.
    ///
    /// Arguments
    /// -----------------
    /// * `equatorial_radius`: equatorial radius in **kilometers**, finite and strictly positive.
    /// * `eccentricity`: first eccentricity, finite and in `[0, 1)`.
    ///
    /// Return
    /// ----------
    /// * The validated [`Ellipsoid`].
    ///
    /// Errors
    /// ----------
    /// * [`Llh2EcefError::InvalidEquatorialRadius`] if the radius is not a positive finite number.
    /// * [`Llh2EcefError::InvalidEccentricity`] if the eccentricity is outside `[0, 1)` or NaN.
    pub fn new(equatorial_radius: Kilometer, eccentricity: f64) -> Result<Self, Llh2EcefError> {
        if !(equatorial_radius.is_finite() && equatorial_radius > 0.0) {
            return Err(Llh2EcefError::InvalidEquatorialRadius(equatorial_radius));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(Llh2EcefError::InvalidEccentricity(eccentricity));
        }
        Ok(Ellipsoid {
            equatorial_radius,
            eccentricity,
        })
    }

    /// Equatorial radius in kilometers.
    pub fn equatorial_radius(&self) -> Kilometer {
        self.equatorial_radius
    }

    /// First eccentricity, always in `[0, 1)`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Square of the first eccentricity.
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// Denominator shared by both radii of curvature: `sqrt(1 - e² sin²φ)`.
    ///
    /// Arguments
    /// ---------
    /// * `lat`: geodetic latitude in **radians**
    ///
    /// Returns
    /// -------
    /// * a value in `(0, 1]`
    pub fn curvature_denominator(&self, lat: Radian) -> f64 {
        (1.0 - self.eccentricity_squared() * lat.sin().powf(2.0)).sqrt()
    }

    /// Transverse (prime vertical) radius of curvature `C = r / denom`, in km.
    pub fn transverse_radius(&self, lat: Radian) -> Kilometer {
        self.equatorial_radius / self.curvature_denominator(lat)
    }

    /// Meridional quantity `S = r (1 - e²) / denom`, in km.
    ///
    /// This is the distance used along the polar axis: `z = (S + h) sin φ`.
    pub fn meridional_radius(&self, lat: Radian) -> Kilometer {
        self.equatorial_radius * (1.0 - self.eccentricity_squared())
            / self.curvature_denominator(lat)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::REFERENCE
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Llh2EcefError {
    #[error("Usage: {program} lat_deg lon_deg hae_km")]
    Usage { program: String },

    #[error("Error: Latitude, longitude, and altitude must be numbers.")]
    NotANumber { argument: String },

    #[error("Invalid ellipsoid eccentricity: {0} (expected 0 <= e < 1)")]
    InvalidEccentricity(f64),

    #[error("Invalid ellipsoid equatorial radius: {0} km (expected a positive value)")]
    InvalidEquatorialRadius(f64),
}

impl Llh2EcefError {
    /// Process exit status associated with the error.
    ///
    /// Return
    /// ----------
    /// * `2` for a wrong argument count, `1` for every other failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Llh2EcefError::Usage { .. } => 2,
            _ => 1,
        }
    }
}

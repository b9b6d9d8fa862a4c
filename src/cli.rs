//! Command-line front end: `llh2ecef lat_deg lon_deg hae_km`.
//!
//! Parsing and formatting are kept apart from the process itself so that both can be
//! exercised without spawning the binary. [`run`] ties them together and only returns
//! the text to print; `main` decides where it goes.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use crate::conversion::{EcefPosition, GeodeticPosition};
use crate::llh2ecef_errors::Llh2EcefError;

const DEFAULT_PROGRAM_NAME: &str = "llh2ecef";

/// Parse a single numeric argument.
///
/// Surrounding whitespace is ignored. Anything [`f64::from_str`](std::str::FromStr)
/// accepts is a number, including exponents, `inf` and `NaN`.
///
/// Errors
/// ----------
/// * [`Llh2EcefError::NotANumber`] carrying the offending argument.
pub fn parse_coordinate(arg: &str) -> Result<f64, Llh2EcefError> {
    arg.trim()
        .parse::<f64>()
        .map_err(|_| Llh2EcefError::NotANumber {
            argument: arg.to_string(),
        })
}

/// Parse a raw process argument, which may not be valid UTF-8.
///
/// Errors
/// ----------
/// * [`Llh2EcefError::NotANumber`] if the argument is not UTF-8 or not a number.
pub fn parse_os_coordinate(arg: &OsStr) -> Result<f64, Llh2EcefError> {
    match arg.to_str() {
        Some(text) => parse_coordinate(text),
        None => Err(Llh2EcefError::NotANumber {
            argument: arg.to_string_lossy().into_owned(),
        }),
    }
}

fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|p| Path::new(p).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Turn the raw process arguments into a [`GeodeticPosition`].
///
/// Arguments
/// -----------------
/// * `args`: every process argument, program name first (as yielded by [`std::env::args_os`]).
///
/// Return
/// ----------
/// * The parsed position: latitude (deg), longitude (deg), height above ellipsoid (km).
///
/// Errors
/// ----------
/// * [`Llh2EcefError::Usage`] when the number of arguments after the program name is not three.
/// * [`Llh2EcefError::NotANumber`] when one of the three arguments is not a number.
///   The argument count is checked first.
pub fn parse_args<I, S>(args: I) -> Result<GeodeticPosition, Llh2EcefError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let program = program_name(args.first().map(|arg| arg.as_ref()));

    let [_, lat, lon, hae] = args.as_slice() else {
        return Err(Llh2EcefError::Usage { program });
    };

    let position = GeodeticPosition::new(
        parse_os_coordinate(lat.as_ref())?,
        parse_os_coordinate(lon.as_ref())?,
        parse_os_coordinate(hae.as_ref())?,
    );
    debug!(?position, "parsed geodetic position");
    Ok(position)
}

/// Render an ECEF position as the four-line output block.
///
/// ```text
/// ECEF coordinates (km):
/// X: 3194.418798
/// Y: 3194.418798
/// r: 4487.347899
/// ```
///
/// The Z coordinate is labelled `r`, not `Z`. A NaN component prints as `nan`.
pub fn format_ecef(ecef: &EcefPosition) -> String {
    format!(
        "ECEF coordinates (km):\nX: {}\nY: {}\nr: {}\n",
        format_km(ecef.x),
        format_km(ecef.y),
        format_km(ecef.z)
    )
}

fn format_km(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Parse the arguments, convert, and return the text to print on stdout.
///
/// Errors
/// ----------
/// * Any error from [`parse_args`]; no conversion is performed in that case.
pub fn run<I, S>(args: I) -> Result<String, Llh2EcefError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let position = parse_args(args)?;
    let ecef = position.to_ecef();
    debug!(?ecef, "computed ECEF position");
    Ok(format_ecef(&ecef))
}

#[cfg(test)]
mod cli_test {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("45"), Ok(45.0));
        assert_eq!(parse_coordinate("-12.5"), Ok(-12.5));
        assert_eq!(parse_coordinate(" 3.25 "), Ok(3.25));
        assert_eq!(parse_coordinate("1e3"), Ok(1000.0));
        assert!(parse_coordinate("NaN").unwrap().is_nan());
        assert_eq!(
            parse_coordinate("abc"),
            Err(Llh2EcefError::NotANumber {
                argument: "abc".to_string()
            })
        );
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("12,5").is_err());
    }

    #[test]
    fn test_parse_args_ok() {
        let pos = parse_args(["llh2ecef", "45", "-45.5", "0.1"]).unwrap();
        assert_eq!(pos, GeodeticPosition::new(45.0, -45.5, 0.1));
    }

    #[test]
    fn test_parse_args_wrong_count() {
        for args in [
            vec!["llh2ecef"],
            vec!["llh2ecef", "10", "20"],
            vec!["llh2ecef", "10", "20", "30", "40"],
        ] {
            assert_eq!(
                parse_args(args),
                Err(Llh2EcefError::Usage {
                    program: "llh2ecef".to_string()
                })
            );
        }
    }

    #[test]
    fn test_usage_takes_precedence_over_parsing() {
        assert!(matches!(
            parse_args(["llh2ecef", "abc", "def"]),
            Err(Llh2EcefError::Usage { .. })
        ));
    }

    #[test]
    fn test_program_name_is_file_name() {
        let err = parse_args(["/usr/local/bin/llh2ecef", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "Usage: llh2ecef lat_deg lon_deg hae_km");

        let empty: [&str; 0] = [];
        let err = parse_args(empty).unwrap_err();
        assert_eq!(err.to_string(), "Usage: llh2ecef lat_deg lon_deg hae_km");
    }

    #[test]
    fn test_parse_args_not_a_number() {
        let err = parse_args(["llh2ecef", "abc", "10", "5"]).unwrap_err();
        assert_eq!(
            err,
            Llh2EcefError::NotANumber {
                argument: "abc".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Error: Latitude, longitude, and altitude must be numbers."
        );

        assert!(matches!(
            parse_args(["llh2ecef", "10", "5", "x"]),
            Err(Llh2EcefError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_format_ecef() {
        let ecef = EcefPosition {
            x: 6378.1363,
            y: 0.0,
            z: -1.23456789,
        };
        assert_eq!(
            format_ecef(&ecef),
            "ECEF coordinates (km):\nX: 6378.136300\nY: 0.000000\nr: -1.234568\n"
        );
    }

    #[test]
    fn test_format_non_finite() {
        let ecef = EcefPosition {
            x: f64::NAN,
            y: f64::INFINITY,
            z: f64::NEG_INFINITY,
        };
        assert_eq!(
            format_ecef(&ecef),
            "ECEF coordinates (km):\nX: nan\nY: inf\nr: -inf\n"
        );

        let out = run(["llh2ecef", "nan", "0", "0"]).unwrap();
        assert_eq!(out, "ECEF coordinates (km):\nX: nan\nY: nan\nr: nan\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arguments() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStrExt;

        let bad = OsStr::from_bytes(b"\xff");
        assert!(matches!(
            parse_os_coordinate(bad),
            Err(Llh2EcefError::NotANumber { .. })
        ));

        let args: Vec<OsString> = vec!["llh2ecef".into(), bad.into(), "10".into(), "5".into()];
        assert!(matches!(
            parse_args(args),
            Err(Llh2EcefError::NotANumber { .. })
        ));

        let err = parse_args([bad, OsStr::new("1")]).unwrap_err();
        assert_eq!(err.to_string(), "Usage: llh2ecef lat_deg lon_deg hae_km");
    }

    #[test]
    fn test_run() {
        let out = run(["llh2ecef", "45", "45", "0"]).unwrap();
        assert_eq!(
            out,
            "ECEF coordinates (km):\nX: 3194.418798\nY: 3194.418798\nr: 4487.347899\n"
        );
    }
}

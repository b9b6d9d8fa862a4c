use approx::assert_abs_diff_eq;
use llh2ecef::conversion::EcefPosition;

/// Compare two ECEF positions component-wise, in km.
pub fn assert_ecef_close(actual: &EcefPosition, expected: &EcefPosition, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
}

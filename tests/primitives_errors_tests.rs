#![cfg(feature = "dev")]

use wls_rs::internals::primitives::errors::WlsError;

#[test]
fn test_wls_error_display() {
    // TooFewPoints
    let err = WlsError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // MismatchedInputs
    let err = WlsError::MismatchedInputs { x_len: 4, y_len: 5 };
    assert_eq!(format!("{}", err), "Length mismatch: x has 4 points, y has 5");

    // MismatchedWeights
    let err = WlsError::MismatchedWeights { w_len: 3, n: 4 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: weights have 3 values, expected 4"
    );

    // InvalidNumericValue
    let err = WlsError::InvalidNumericValue("x[2]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[2]=NaN");

    // InvalidInput
    let err = WlsError::InvalidInput("not contiguous".to_string());
    assert_eq!(format!("{}", err), "Invalid input: not contiguous");

    // DuplicateParameter
    let err = WlsError::DuplicateParameter {
        parameter: "check_finite",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'check_finite' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_wls_error_properties() {
    let err1 = WlsError::TooFewPoints { got: 0, min: 2 };
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, WlsError::InvalidInput("foo".to_string()));
}

#[cfg(feature = "std")]
#[test]
fn test_wls_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<WlsError>();
}

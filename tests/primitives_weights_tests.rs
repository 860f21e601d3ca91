#![cfg(feature = "dev")]

use wls_rs::internals::primitives::input::WlsInput;
use wls_rs::internals::primitives::weights::Weights;

// ============================================================================
// Weights
// ============================================================================

#[test]
fn test_scalar_weight_broadcast() {
    let w: Weights<'_, f64> = 0.9.into();

    assert_eq!(w, Weights::Scalar(0.9));
    assert_eq!(w.len(), None);
    assert!(!w.is_empty());
    assert_eq!(w.get(0), 0.9);
    assert_eq!(w.get(1_000), 0.9);
}

#[test]
fn test_default_weight_is_one() {
    assert_eq!(Weights::<f64>::default(), Weights::Scalar(1.0));
    assert_eq!(Weights::<f32>::uniform(), Weights::Scalar(1.0f32));
}

#[test]
fn test_sequence_conversions() {
    let v = vec![1.0, 2.0, 3.0];
    let a = [1.0, 2.0, 3.0];

    let from_vec: Weights<'_, f64> = (&v).into();
    let from_array: Weights<'_, f64> = (&a).into();
    let from_slice: Weights<'_, f64> = v.as_slice().into();

    assert_eq!(from_vec, from_array);
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec.len(), Some(3));
    assert_eq!(from_vec.get(2), 3.0);
}

#[test]
fn test_sequence_from_input() {
    let v = vec![0.5f32, 1.5];
    let w = Weights::sequence(&v).unwrap();

    assert_eq!(w, Weights::Sequence(&[0.5f32, 1.5][..]));
}

#[test]
fn test_empty_sequence() {
    let empty: [f64; 0] = [];
    let w: Weights<'_, f64> = (&empty).into();
    assert!(w.is_empty());
}

// ============================================================================
// Inputs
// ============================================================================

#[test]
fn test_inputs_view_as_slices() {
    let v = vec![1.0, 2.0];
    let a = [1.0, 2.0];
    let s: &[f64] = &a;

    assert_eq!(v.as_wls_slice().unwrap(), &[1.0, 2.0]);
    assert_eq!(a.as_wls_slice().unwrap(), &[1.0, 2.0]);
    assert_eq!(s.as_wls_slice().unwrap(), &[1.0, 2.0]);
}

#[cfg(feature = "ndarray")]
#[test]
fn test_non_contiguous_ndarray_rejected() {
    use ndarray::{s, Array1};
    use wls_rs::internals::primitives::errors::WlsError;

    let arr = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    let strided = arr.slice(s![..;2]);

    assert!(matches!(
        strided.as_wls_slice(),
        Err(WlsError::InvalidInput(_))
    ));
    assert_eq!(arr.as_wls_slice().unwrap(), &[1.0, 2.0, 3.0, 4.0]);
}

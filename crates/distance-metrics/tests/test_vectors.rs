use test_case::test_case;

use distance_metrics::{chebyshev, euclidean, manhattan, minkowski, DistanceError, Scalar};

#[test_case(&[3., 4., 2., 1.], &[0., 5., 6., 9.], 16. ; "mixed signs")]
#[test_case(&[-2., 4.], &[0., 5.], 3. ; "negative coordinate")]
#[test_case(&[1., 2., 3.], &[4., 5., 6.], 9. ; "constant offset")]
#[test_case(&[], &[], 0. ; "empty")]
fn test_manhattan(x: &[f64], y: &[f64], expected: f64) -> Result<(), DistanceError> {
    let actual = manhattan(x, y)?;
    assert!(
        (actual - expected).abs() <= f64::EPSILON,
        "Manhattan: expected: {expected}, actual: {actual}"
    );
    Ok(())
}

#[test_case(&[1., 2.], &[3., 4.], 8_f64.sqrt() ; "pair")]
#[test_case(&[2., 4., 6., 7.], &[4., 5., 1., 9.], 34_f64.sqrt() ; "four dims")]
#[test_case(&[1., 2., 3.], &[4., 5., 6.], 27_f64.sqrt() ; "constant offset")]
#[test_case(&[], &[], 0. ; "empty")]
fn test_euclidean(x: &[f64], y: &[f64], expected: f64) -> Result<(), DistanceError> {
    let actual = euclidean(x, y)?;
    assert!(
        (actual - expected).abs() <= f64::EPSILON,
        "Euclidean: expected: {expected}, actual: {actual}"
    );
    Ok(())
}

#[test_case(&[3., 4., 2., 1.], &[0., 5., 6., 9.], 8. ; "mixed signs")]
#[test_case(&[1., 2., 3.], &[6., 5., 4.], 5. ; "first coordinate")]
#[test_case(&[-7.5], &[2.5], 10. ; "single")]
fn test_chebyshev(x: &[f64], y: &[f64], expected: f64) -> Result<(), DistanceError> {
    let actual = chebyshev(x, y)?;
    assert!(
        (actual - expected).abs() <= f64::EPSILON,
        "Chebyshev: expected: {expected}, actual: {actual}"
    );
    Ok(())
}

#[test_case(3., (27_f64 + 1. + 64. + 512.).powf(1. / 3.) ; "order 3")]
#[test_case(4., (81_f64 + 1. + 256. + 4096.).powf(1. / 4.) ; "order 4")]
#[test_case(0.5, (3_f64.sqrt() + 1. + 2. + 8_f64.sqrt()).powi(2) ; "order one half")]
#[test_case(1., 16. ; "order 1")]
#[test_case(2., 90_f64.sqrt() ; "order 2")]
#[test_case(1.5, (3_f64.powf(1.5) + 1. + 8. + 8_f64.powf(1.5)).powf(1. / 1.5) ; "order three halves")]
#[test_case(f64::INFINITY, 8. ; "infinite order")]
fn test_minkowski(order: f64, expected: f64) -> Result<(), DistanceError> {
    let x = [0, 5, 6, 9];
    let y = [3, 4, 2, 1];

    let actual = minkowski(&x, &y, order)?;
    assert!(
        (actual - expected).abs() <= 1e-12,
        "Minkowski({order}): expected: {expected}, actual: {actual}"
    );
    Ok(())
}

#[test]
fn integer_and_string_elements() -> Result<(), DistanceError> {
    assert!((manhattan(&[3_u8, 4, 2, 1], &[0, 5, 6, 9])? - 16.).abs() <= f64::EPSILON);
    assert!((manhattan(&["3", "4", "2", "1"], &["0", "5", "6", "9"])? - 16.).abs() <= f64::EPSILON);

    let x = [Scalar::from(2), Scalar::from("4"), Scalar::from(6.0)];
    let y = [Scalar::from("1"), Scalar::from(4_i64), Scalar::from(" 3 ")];
    assert!((chebyshev(&x, &y)? - 3.).abs() <= f64::EPSILON);
    Ok(())
}

#[test]
fn incompatible_lengths() {
    let x = [1, 2, 3];
    let y = [1, 2, 3, 4];
    let expected = Err(DistanceError::IncompatibleLength(3, 4));

    assert_eq!(euclidean(&x, &y), expected);
    assert_eq!(manhattan(&x, &y), expected);
    assert_eq!(chebyshev(&x, &y), expected);
    assert_eq!(minkowski(&x, &y, 3.), expected);
    assert_eq!(minkowski(&y, &x, 1.), Err(DistanceError::IncompatibleLength(4, 3)));
}

#[test]
fn non_numeric_elements() {
    let x = [Scalar::from(2), Scalar::from("a"), Scalar::from(6), Scalar::from(7)];
    let y = [4, 5, 1, 9].map(Scalar::from);
    let expected = Err(DistanceError::NonNumeric("a".to_string()));

    assert_eq!(euclidean(&x, &y), expected);
    assert_eq!(manhattan(&x, &y), expected);
    assert_eq!(chebyshev(&y, &x), expected);
    assert_eq!(minkowski(&x, &y, 3.), expected);

    assert_eq!(
        euclidean(&[1., f64::NAN], &[1., 2.]),
        Err(DistanceError::NonNumeric("NaN".to_string()))
    );
    assert_eq!(
        manhattan(&[1., 2.], &[f64::INFINITY, 2.]),
        Err(DistanceError::NonNumeric("inf".to_string()))
    );
}

#[test]
fn empty_chebyshev() {
    let empty: [f64; 0] = [];
    assert_eq!(chebyshev(&empty, &empty), Err(DistanceError::EmptyInput));
    assert_eq!(minkowski(&empty, &empty, f64::INFINITY), Err(DistanceError::EmptyInput));
    assert_eq!(minkowski(&empty, &empty, 3.), Ok(0.));
}

#[test]
fn empty_vectors_are_at_positive_zero() -> Result<(), DistanceError> {
    let empty: [f64; 0] = [];
    for (name, actual) in [
        ("euclidean", euclidean(&empty, &empty)?),
        ("manhattan", manhattan(&empty, &empty)?),
        ("minkowski:3", minkowski(&empty, &empty, 3.)?),
        ("minkowski:0.5", minkowski(&empty, &empty, 0.5)?),
    ] {
        assert_eq!(actual.to_bits(), 0_f64.to_bits(), "{name}: expected +0, actual: {actual}");
    }
    Ok(())
}

#[test]
fn invalid_order() {
    let x = [0, 5, 6, 9];
    let y = [3, 4, 2, 1];
    assert_eq!(minkowski(&x, &y, 0.), Err(DistanceError::InvalidOrder(0.)));

    let empty: [f64; 0] = [];
    for order in [-1., -2., -0.5, f64::NEG_INFINITY] {
        assert_eq!(minkowski(&x, &y, order), Err(DistanceError::InvalidOrder(order)));
        assert_eq!(minkowski(&empty, &empty, order), Err(DistanceError::InvalidOrder(order)));
    }

    // Distinct vectors sharing a coordinate.
    assert_eq!(
        minkowski(&[1, 2], &[1, 5], -1.),
        Err(DistanceError::InvalidOrder(-1.))
    );

    // The order is checked before the operands.
    let bad = [Scalar::from("z")];
    assert_eq!(minkowski(&bad, &bad, 0.), Err(DistanceError::InvalidOrder(0.)));
}

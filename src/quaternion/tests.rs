use super::*;

const EPS: f64 = 1e-12;

fn quat_approx_eq(a: &Quaternion, b: &Quaternion) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(p, q)| (p - q).abs() < EPS)
}

// ── Constructors ─────────────────────────────────────────────

#[test]
fn components() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(q.x(), 1.0);
    assert_eq!(q.i(), 2.0);
    assert_eq!(q.j(), 3.0);
    assert_eq!(q.k(), 4.0);
    assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn mixed_primitive_arguments() {
    let q = Quaternion::new(1_i128, 2_u8, 3_usize, 4.0_f32);
    assert_eq!(q, Quaternion::new(1, 2, 3, 4));
    assert_eq!(q.component(Axis::X).kind(), NumericKind::Int);
    assert_eq!(q.component(Axis::K).kind(), NumericKind::Float);
}

#[test]
fn defaults_are_zero() {
    assert_eq!(Quaternion::default(), Quaternion::ZERO);
    assert_eq!(Quaternion::default().to_array(), [0.0; 4]);
    assert_eq!(Quaternion::from_real(5), Quaternion::new(5, 0, 0, 0));
    assert_eq!(Quaternion::from([1, 2, 3, 4]), Quaternion::new(1, 2, 3, 4));
}

#[test]
fn construction_rounds_components() {
    let q = Quaternion::new(0.1 + 0.2, 0, 0.7 - 0.6, 0);
    assert_eq!(q, Quaternion::new(0.3, 0, 0.1, 0));
    assert_eq!(Quaternion::new(1.0e-17, 0, 0, 0), Quaternion::ZERO);
}

#[test]
fn basis_constants() {
    assert_eq!(Quaternion::ONE, Quaternion::new(1, 0, 0, 0));
    assert_eq!(Quaternion::I, Quaternion::new(0, 1, 0, 0));
    assert_eq!(Quaternion::J, Quaternion::new(0, 0, 1, 0));
    assert_eq!(Quaternion::K, Quaternion::new(0, 0, 0, 1));
    for unit in [Quaternion::ONE, Quaternion::I, Quaternion::J, Quaternion::K] {
        assert_eq!(unit.norm(), 1.0);
    }
}

// ── Norm ─────────────────────────────────────────────────────

#[test]
fn norm_is_sum_of_squares() {
    assert_eq!(Quaternion::new(1, 1, 1, 1).norm(), 4.0);
    assert_eq!(Quaternion::new(1, 2, 3, 4).norm(), 30.0);
    assert_eq!(Quaternion::new(-0.5, 0, 0, 0).norm(), 0.25);
}

#[test]
fn norm_uses_rounded_components() {
    let q = Quaternion::new(0.1 + 0.2, 0, 0, 0);
    assert_eq!(q.norm(), 0.3 * 0.3);
}

#[test]
fn norm_zero_only_for_zero() {
    assert!(Quaternion::ZERO.is_zero());
    assert_eq!(Quaternion::ZERO.norm(), 0.0);
    assert!(!Quaternion::new(0, 0, 0, 0.5).is_zero());
}

// ── Equality ─────────────────────────────────────────────────

#[test]
fn equality_is_structural() {
    let a = Quaternion::new(1, 2, 3, 4);
    let b = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, Quaternion::new(1, 2, 3, 5));
    assert_ne!(a, Quaternion::new(4, 3, 2, 1));
}

// ── Conjugate / inverse ──────────────────────────────────────

#[test]
fn conjugate() {
    let q = Quaternion::new(1, 1, 1, 1);
    assert_eq!(q.conjugate(), Quaternion::new(1, -1, -1, -1));
    assert_eq!(q.conjugate().conjugate(), q);
    assert_eq!(q.conjugate().norm(), q.norm());
}

#[test]
fn inverse() {
    let q = Quaternion::new(1, 1, 1, 1);
    assert_eq!(q.inverse().unwrap(), Quaternion::new(0.25, -0.25, -0.25, -0.25));
    assert_eq!(q * q.inverse().unwrap(), Quaternion::ONE);
    assert_eq!(Quaternion::new(2, 0, 0, 0).inverse().unwrap(), Quaternion::new(0.5, 0, 0, 0));
}

#[test]
fn inverse_non_unit() {
    let q = Quaternion::new(1, 2, 3, 4);
    let qi = q.inverse().unwrap();
    assert!(quat_approx_eq(&(q * qi), &Quaternion::ONE));
    assert!(quat_approx_eq(&(qi * q), &Quaternion::ONE));
}

#[test]
fn inverse_of_zero_fails() {
    assert_eq!(Quaternion::ZERO.inverse(), Err(QuaternionError::ZeroInverse));
    assert_eq!(Quaternion::new(0.0, 0, 0, 0).inverse(), Err(QuaternionError::ZeroInverse));
}

#[test]
fn inverse_fails_when_norm_overflows() {
    let q = Quaternion::new(1e200, 0, 0, 0);
    assert!(q.is_finite());
    assert_eq!(q.norm(), f64::INFINITY);
    assert_eq!(q.inverse(), Err(QuaternionError::NormOutOfRange));
    assert_eq!(
        QuaternionError::NormOutOfRange.to_string(),
        "cannot invert quaternion: norm out of range"
    );
    assert_eq!(
        Quaternion::new(0, 0, 0, f64::NAN).inverse(),
        Err(QuaternionError::NormOutOfRange)
    );
    assert!(Quaternion::new(1e150, 0, 0, 0).inverse().is_ok());
}

// ── Finiteness ───────────────────────────────────────────────

#[test]
fn try_from_parts_rejects_non_finite() {
    assert_eq!(
        Quaternion::try_from_parts(1, 0.5, -3, 2),
        Ok(Quaternion::new(1, 0.5, -3, 2))
    );
    for axis in Axis::ALL {
        let mut c = [0.0; 4];
        c[axis as usize] = f64::NAN;
        assert_eq!(
            Quaternion::try_from_parts(c[0], c[1], c[2], c[3]),
            Err(QuaternionError::NonFinite { argument: axis })
        );
    }
    assert_eq!(
        Quaternion::try_from_parts(f64::INFINITY, f64::NAN, 0, 0),
        Err(QuaternionError::NonFinite { argument: Axis::X })
    );
}

#[test]
fn unchecked_paths_follow_ieee() {
    let nan = Quaternion::new(f64::NAN, 0, 0, 0);
    assert!(!nan.is_finite());
    assert_ne!(nan, nan);

    let q = Quaternion::new(1, 1, 1, 1) + f64::INFINITY;
    assert!(!q.is_finite());
    assert_eq!(q.x(), f64::INFINITY);
    assert!(Quaternion::new(1, 1, 1, 1).is_finite());
}

// ── Addition / subtraction ───────────────────────────────────

#[test]
fn scalar_offsets_real_part() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(q + 1, Quaternion::new(2, 2, 3, 4));
    assert_eq!(q - 1.5, Quaternion::new(-0.5, 2, 3, 4));
    assert_eq!(q + 0.25_f32, Quaternion::new(1.25, 2, 3, 4));
}

#[test]
fn reflected_addition_and_subtraction() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(1 + q, q + 1);
    assert_eq!(2.5 + q, q + 2.5);
    assert_eq!(10 - q, Quaternion::new(9, -2, -3, -4));
    assert_eq!(0.5 - q, -(q - 0.5));
    assert_eq!(q.radd(3), q + 3);
    assert_eq!(q.rsub(3), 3 - q);
}

#[test]
fn componentwise_addition() {
    let a = Quaternion::new(1, 2, 3, 4);
    let b = Quaternion::new(0.5, -2, 1, 0);
    assert_eq!(a + b, Quaternion::new(1.5, 0, 4, 4));
    assert_eq!(a - b, Quaternion::new(0.5, 4, 2, 4));
    assert_eq!(a + b, b + a);
}

#[test]
fn add_then_subtract_round_trips() {
    let cases = [
        (Quaternion::new(1, 2, 3, 4), Quaternion::new(4, 3, 2, 1)),
        (Quaternion::new(1, 0.5, -2, 3.25), Quaternion::new(0.125, -4, 7, 0.75)),
        (Quaternion::ZERO, Quaternion::new(-1, -1, -1, -1)),
    ];
    for (a, b) in cases {
        assert_eq!((a + b) - b, a);
    }
}

// ── Hamilton product ─────────────────────────────────────────

#[test]
fn hamilton_product() {
    let a = Quaternion::new(1, 2, 3, 4);
    let b = Quaternion::new(4, 3, 2, 1);
    assert_eq!(a * b, Quaternion::new(-12, 6, 24, 12));
    assert_eq!(b * a, Quaternion::new(-12, 16, 4, 22));
    assert_ne!(a * b, b * a);
}

#[test]
fn basis_relations() {
    let (one, i, j, k) = (Quaternion::ONE, Quaternion::I, Quaternion::J, Quaternion::K);
    assert_eq!(i * i, -one);
    assert_eq!(j * j, -one);
    assert_eq!(k * k, -one);
    assert_eq!(i * j * k, -one);
    assert_eq!(i * j, k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(j * i, -k);
    assert_eq!(k * j, -i);
    assert_eq!(i * k, -j);
}

#[test]
fn hamilton_product_identity() {
    let q = Quaternion::new(1, -2, 0.5, 4);
    assert_eq!(q * Quaternion::ONE, q);
    assert_eq!(Quaternion::ONE * q, q);
    assert_eq!(q * Quaternion::ZERO, Quaternion::ZERO);
}

#[test]
fn hamilton_product_associative() {
    let a = Quaternion::new(1, 2, 3, 4);
    let b = Quaternion::new(-1, 0, 2, 1);
    let c = Quaternion::new(3, 1, -1, 2);
    assert_eq!((a * b) * c, a * (b * c));
}

#[test]
fn scalar_multiplication_commutes() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(q * 2, Quaternion::new(2, 4, 6, 8));
    assert_eq!(2 * q, q * 2);
    assert_eq!(2.5 * q, q * 2.5);
    assert_eq!(0.2 * Quaternion::new(1, 1, 1, 1), Quaternion::new(0.2, 0.2, 0.2, 0.2));
    assert_eq!(q.rmul(3), q * 3);
}

#[test]
fn ref_variants() {
    let a = Quaternion::new(1, 2, 3, 4);
    let b = Quaternion::new(4, 3, 2, 1);
    let expected = a * b;
    assert_eq!(&a * b, expected);
    assert_eq!(a * &b, expected);
    assert_eq!(&a * &b, expected);
    assert_eq!(&a + 1, a + 1);
    assert_eq!(2 * &a, 2 * a);
    assert_eq!(3 - &a, 3 - a);
}

#[test]
fn operands_are_left_untouched() {
    let a = Quaternion::new(1, 2, 3, 4);
    let b = Quaternion::new(4, 3, 2, 1);
    let _ = a * b + a - b;
    let _ = a.inverse();
    assert_eq!(a.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(b.to_array(), [4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn operand_resolution() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(Operand::from(2), Operand::Scalar(Number::from(2)));
    assert_eq!(Operand::from(q), Operand::Quaternion(q));
    assert_eq!(Operand::from(&q), Operand::Quaternion(q));
    assert_eq!(q * Operand::from(2), q * 2);
}

// ── Negation ─────────────────────────────────────────────────

#[test]
fn negation() {
    let q = Quaternion::new(1, -2, 3, 0);
    assert_eq!(-q, Quaternion::new(-1, 2, -3, 0));
    assert_eq!(-&q, -q);
    assert_eq!(-q, -1 * q);
}

// ── Folds ────────────────────────────────────────────────────

#[test]
fn sum_and_product() {
    let units = [Quaternion::I, Quaternion::J, Quaternion::K];
    assert_eq!(units.iter().sum::<Quaternion>(), Quaternion::new(0, 1, 1, 1));
    assert_eq!(units.iter().product::<Quaternion>(), -Quaternion::ONE);
    assert_eq!(
        [Quaternion::J, Quaternion::I].into_iter().product::<Quaternion>(),
        -Quaternion::K
    );
    assert_eq!(core::iter::empty::<Quaternion>().sum::<Quaternion>(), Quaternion::ZERO);
    assert_eq!(core::iter::empty::<Quaternion>().product::<Quaternion>(), Quaternion::ONE);
}

// ── Display ──────────────────────────────────────────────────

#[test]
fn display() {
    assert_eq!(Quaternion::new(0, 0.2, -1, 1).to_string(), "0+0.2i-1j+1k");
    assert_eq!(Quaternion::new(1, 2, 3, 4).to_string(), "1+2i+3j+4k");
    assert_eq!(Quaternion::new(-1.5, -2, -3, -4).to_string(), "-1.5-2i-3j-4k");
}

#[test]
fn display_zero_components_are_positive() {
    assert_eq!(Quaternion::ZERO.to_string(), "0+0i+0j+0k");
    assert_eq!(Quaternion::ZERO.conjugate().to_string(), "0+0i+0j+0k");
    assert_eq!(Quaternion::new(0, -0.0, 0, 0).to_string(), "0+0.0i+0j+0k");
}

#[test]
fn display_follows_numeric_kind() {
    assert_eq!(Quaternion::new(1.0, 2, -0.5, 0).to_string(), "1.0+2i-0.5j+0k");
    assert_eq!((Quaternion::new(0.5, 0, 0, 0) * 2).to_string(), "1.0+0i+0j+0k");
    assert_eq!(
        Quaternion::new(1, 1, 1, 1).inverse().unwrap().to_string(),
        "0.25-0.25i-0.25j-0.25k"
    );
    assert_eq!(Quaternion::new(1e-5, 1e16, 0, 0).to_string(), "1e-05+1e+16i+0j+0k");
}

#[test]
fn debug() {
    assert_eq!(
        format!("{:?}", Quaternion::new(-12, 6, 24, 12)),
        "Quaternion(x=-12, i=6, j=24, k=12)"
    );
    assert_eq!(
        format!("{:?}", Quaternion::new(1, 2, 3, 4) * Quaternion::new(4, 3, 2, 1)),
        "Quaternion(x=-12, i=6, j=24, k=12)"
    );
    assert_eq!(
        format!("{:?}", Quaternion::new(0.5, 0, -1, 2.0)),
        "Quaternion(x=0.5, i=0, j=-1, k=2.0)"
    );
}

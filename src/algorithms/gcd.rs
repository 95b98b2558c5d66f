use num_traits::{One, Zero};

use crate::bigint::division::div_rem_unchecked;
use crate::{BigInt, Sign};

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// Classical Euclidean algorithm: `while b != 0 { (a, b) = (b, a mod b) }`.
/// The result is always non-negative; `gcd(0, 0)` is `0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let (_, r) = div_rem_unchecked(&a, &b);
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a·x + b·y = g = gcd(a, b)`.
///
/// Allows the inputs to be zero or negative with the following
/// definitions. Regardless of the signs of `a` and `b`, `g` is always
/// >= 0.
///
/// If `a == b == 0`, returns `g = x = y = 0`.
/// If `a == 0` and `b != 0`, returns `g = |b|, x = 0, y = sign(b) · 1`.
/// If `a != 0` and `b == 0`, returns `g = |a|, x = sign(a) · 1, y = 0`.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() && b.is_zero() {
        return (BigInt::zero(), BigInt::zero(), BigInt::zero());
    }

    if a.is_zero() {
        let y = if b.sign() == Sign::Minus {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        return (b.abs(), BigInt::zero(), y);
    }

    if b.is_zero() {
        let x = if a.sign() == Sign::Minus {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        return (a.abs(), x, BigInt::zero());
    }

    let (g, x, y) = extgcd_magnitude(&a.abs(), &b.abs());

    // The identity was established on the magnitudes; reattach the input
    // signs to the coefficients.
    let x = if a.sign() == Sign::Minus { -x } else { x };
    let y = if b.sign() == Sign::Minus { -y } else { y };
    (g, x, y)
}

/// Recursive extended Euclid on non-negative operands, not both zero.
///
/// Base case `a = 0` yields `(b, 0, 1)`; otherwise the coefficients
/// derive from the recursive call on `(b mod a, a)`.
fn extgcd_magnitude(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }
    let (q, r) = div_rem_unchecked(b, a);
    let (g, x1, y1) = extgcd_magnitude(&r, a);
    let x = &y1 - &(&q * &x1);
    (g, x, x1)
}

//! Truncated division with remainder and the `/` and `%` operators.

use core::ops::{Div, Rem};

use num_traits::{One, Zero};

use crate::ArithmeticError;

use super::BigInt;

/// Simultaneous truncated quotient and remainder.
///
/// The quotient is negative exactly when the operand signs differ; the
/// remainder takes the dividend's sign and satisfies `q·d + r == u` with
/// `|r| < |d|`. Zero results normalize to a positive sign.
///
/// Fails with [`ArithmeticError::DivisionByZero`] when the divisor has
/// magnitude zero.
pub fn div_rem(u: &BigInt, d: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
    if d.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(div_rem_unchecked(u, d))
}

/// Division core. The divisor must be non-zero.
///
/// Magnitude algorithm: while the remainder is at least the divisor, find
/// the largest doubling of the divisor that still fits, subtract it and
/// accumulate the matching count into the quotient. Quadratic in digit
/// count; kept for its freedom from digit-estimation edge cases.
pub(crate) fn div_rem_unchecked(u: &BigInt, d: &BigInt) -> (BigInt, BigInt) {
    debug_assert!(!d.is_zero());

    let divisor = d.abs();
    let mut remainder = u.abs();
    let mut quotient = BigInt::zero();

    while remainder >= divisor {
        let mut multiple = divisor.clone();
        let mut count = BigInt::one();
        loop {
            let doubled = &multiple + &multiple;
            if doubled > remainder {
                break;
            }
            count = &count + &count;
            multiple = doubled;
        }
        remainder -= &multiple;
        quotient += &count;
    }

    let quotient = if u.sign == d.sign {
        quotient
    } else {
        -quotient
    };
    let remainder = if u.is_negative() {
        -remainder
    } else {
        remainder
    };
    (quotient, remainder)
}

impl BigInt {
    /// Simultaneous truncated quotient and remainder; see
    /// [`div_rem`](crate::algorithms::div_rem).
    #[inline]
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        div_rem(self, other)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncated quotient.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero; use [`BigInt::div_rem`] for the
    /// fallible form.
    fn div(self, other: &BigInt) -> BigInt {
        assert!(!other.is_zero(), "division by zero");
        div_rem_unchecked(self, other).0
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncated remainder, taking the dividend's sign.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero; use [`BigInt::div_rem`] for the
    /// fallible form.
    fn rem(self, other: &BigInt) -> BigInt {
        assert!(!other.is_zero(), "division by zero");
        div_rem_unchecked(self, other).1
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sign;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_div_rem_basic() {
        let (q, r) = big("15").div_rem(&big("4")).unwrap();
        assert_eq!(q, big("3"));
        assert_eq!(r, big("3"));

        let (q, r) = big("4").div_rem(&big("15")).unwrap();
        assert_eq!(q, big("0"));
        assert_eq!(r, big("4"));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            big("15").div_rem(&big("0")),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            big("0").div_rem(&big("0")),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = &big("15") / &big("0");
    }

    #[test]
    fn test_sign_quadrants() {
        // truncated division: quotient sign is the XOR of the operand
        // signs, remainder follows the dividend
        let cases = [
            ("7", "3", "2", "1"),
            ("-7", "3", "-2", "-1"),
            ("7", "-3", "-2", "1"),
            ("-7", "-3", "2", "-1"),
        ];
        for (u, d, q, r) in cases {
            let (quot, rem) = big(u).div_rem(&big(d)).unwrap();
            assert_eq!(quot, big(q), "{} / {}", u, d);
            assert_eq!(rem, big(r), "{} % {}", u, d);
        }
    }

    #[test]
    fn test_exact_division_zero_remainder_sign() {
        let (q, r) = big("-12").div_rem(&big("4")).unwrap();
        assert_eq!(q, big("-3"));
        assert!(r.is_zero());
        assert_eq!(r.sign(), Sign::Plus);

        let (q, r) = big("0").div_rem(&big("-5")).unwrap();
        assert!(q.is_zero());
        assert_eq!(q.sign(), Sign::Plus);
        assert!(r.is_zero());
    }

    #[test]
    fn test_division_identity_matches_i128() {
        let mut rng = XorShiftRng::from_seed([9u8; 16]);
        for _ in 0..300 {
            let x = rng.gen_range(-1_000_000_000_000i128..1_000_000_000_000i128);
            let mut y = rng.gen_range(-1_000_000i128..1_000_000i128);
            if y == 0 {
                y = 1;
            }
            let (q, r) = BigInt::from(x).div_rem(&BigInt::from(y)).unwrap();
            assert_eq!(q, BigInt::from(x / y), "{} / {}", x, y);
            assert_eq!(r, BigInt::from(x % y), "{} % {}", x, y);
        }
    }

    #[test]
    fn test_division_identity_large() {
        let mut rng = XorShiftRng::from_seed([10u8; 16]);
        for _ in 0..20 {
            let mut u_digits: Vec<u8> = (0..30).map(|_| rng.gen_range(0..10)).collect();
            *u_digits.last_mut().unwrap() = rng.gen_range(1..10);
            let mut d_digits: Vec<u8> = (0..11).map(|_| rng.gen_range(0..10)).collect();
            *d_digits.last_mut().unwrap() = rng.gen_range(1..10);

            let u = BigInt::from_digits(u_digits).unwrap();
            let d = BigInt::from_digits(d_digits).unwrap();
            let (q, r) = u.div_rem(&d).unwrap();
            assert_eq!(&(&q * &d) + &r, u);
            assert!(r.abs() < d.abs());
        }
    }

    #[test]
    fn test_div_and_rem_operators() {
        assert_eq!(&big("100") / &big("7"), big("14"));
        assert_eq!(&big("100") % &big("7"), big("2"));
        assert_eq!(big("100") / big("7"), big("14"));
        assert_eq!(big("100") % big("7"), big("2"));
    }
}

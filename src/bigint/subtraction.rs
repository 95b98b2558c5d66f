//! Magnitude subtraction and the signed `-` operator.

use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

use num_traits::Zero;

use super::addition::add_abs;
use super::{bigint_from_vec, cmp_slice, BigInt};

/// Single-digit subtract with borrow. `acc` holds the incoming borrow and
/// is replaced by the outgoing one.
#[inline]
pub fn sbb(a: u8, b: u8, acc: &mut u8) -> u8 {
    let next = 10 + a - b - *acc;
    *acc = u8::from(next < 10);
    next % 10
}

/// Two-argument subtraction of raw digit slices, `a -= b`.
///
/// The magnitude of `a` must be at least that of `b`; the caller orders
/// the operands. The result may carry most-significant zero digits.
pub fn sub2(a: &mut [u8], b: &[u8]) {
    debug_assert!(a.len() >= b.len());

    let mut borrow = 0;
    let (lo, hi) = a.split_at_mut(b.len());
    for (a, &b) in lo.iter_mut().zip(b.iter()) {
        *a = sbb(*a, b, &mut borrow);
    }
    for a in hi.iter_mut() {
        if borrow == 0 {
            break;
        }
        *a = sbb(*a, 0, &mut borrow);
    }
    debug_assert!(borrow == 0, "subtraction underflow");
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        if self.sign != other.sign {
            // Differing signs add magnitudes; the sign follows the left
            // operand.
            return bigint_from_vec(self.sign, add_abs(&self.data, &other.data));
        }
        match cmp_slice(&self.data, &other.data) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let mut data = self.data.clone();
                sub2(&mut data, &other.data);
                bigint_from_vec(self.sign, data)
            }
            Ordering::Less => {
                let mut data = other.data.clone();
                sub2(&mut data, &self.data);
                bigint_from_vec(-self.sign, data)
            }
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        *self = &*self - other;
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigInt) {
        *self = &*self - &other;
    }
}

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
    fn test_sub_basic() {
        assert_eq!(&big("15") - &big("4"), big("11"));
        assert_eq!(&big("1000") - &big("1"), big("999"));
        assert_eq!(&big("4") - &big("15"), big("-11"));
    }

    #[test]
    fn test_sub_sign_combinations() {
        assert_eq!(&big("-15") - &big("-4"), big("-11"));
        assert_eq!(&big("-4") - &big("-15"), big("11"));
        assert_eq!(&big("15") - &big("-4"), big("19"));
        assert_eq!(&big("-15") - &big("4"), big("-19"));
    }

    #[test]
    fn test_sub_self_is_canonical_zero() {
        for s in ["0", "15", "-15", "999999999999999999999999"] {
            let a = big(s);
            let z = &a - &a;
            assert!(z.is_zero());
            assert_eq!(z.sign(), Sign::Plus);
        }
    }

    #[test]
    fn test_sub_matches_i128() {
        let mut rng = XorShiftRng::from_seed([3u8; 16]);
        for _ in 0..500 {
            let x = rng.gen_range(-1_000_000_000_000i128..1_000_000_000_000i128);
            let y = rng.gen_range(-1_000_000_000_000i128..1_000_000_000_000i128);
            assert_eq!(
                BigInt::from(x) - BigInt::from(y),
                BigInt::from(x - y),
                "{} - {}",
                x,
                y
            );
        }
    }

    #[test]
    fn test_sub_antisymmetric() {
        let mut rng = XorShiftRng::from_seed([4u8; 16]);
        for _ in 0..200 {
            let x = BigInt::from(rng.gen::<i64>());
            let y = BigInt::from(rng.gen::<i64>());
            assert_eq!(&x - &y, -(&y - &x));
        }
    }

    #[test]
    fn test_sub2_borrow() {
        let mut a = vec![0, 0, 1];
        sub2(&mut a, &[1]);
        assert_eq!(a, vec![9, 9, 0]);
    }
}

//! Magnitude addition and the signed `+` operator.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

use num_traits::Zero;

use super::subtraction::sub2;
use super::{bigint_from_vec, cmp_slice, BigInt};

/// Single-digit add with carry. `acc` holds the incoming carry and is
/// replaced by the outgoing one.
#[inline]
pub fn adc(a: u8, b: u8, acc: &mut u8) -> u8 {
    let sum = a + b + *acc;
    *acc = sum / 10;
    sum % 10
}

/// Two-argument addition of raw digit slices, `a += b`.
///
/// `a` must be at least as long as `b`; the final carry is returned
/// instead of written.
pub fn __add2(a: &mut [u8], b: &[u8]) -> u8 {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (lo, hi) = a.split_at_mut(b.len());
    for (a, &b) in lo.iter_mut().zip(b.iter()) {
        *a = adc(*a, b, &mut carry);
    }
    for a in hi.iter_mut() {
        if carry == 0 {
            break;
        }
        *a = adc(*a, 0, &mut carry);
    }
    carry
}

/// Two-argument addition of digit vectors, `a += b`, growing `a` as needed.
pub fn add2(a: &mut Vec<u8>, b: &[u8]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }
    let carry = __add2(a, b);
    if carry != 0 {
        a.push(carry);
    }
}

/// Position-wise sum of two magnitudes.
pub(crate) fn add_abs(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = longer.to_vec();
    add2(&mut out, shorter);
    out
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        if self.sign == other.sign {
            return bigint_from_vec(self.sign, add_abs(&self.data, &other.data));
        }
        // Differing signs: subtract the smaller magnitude from the larger,
        // taking the sign of the larger-magnitude operand.
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
                bigint_from_vec(other.sign, data)
            }
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        *self = &*self + other;
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigInt) {
        *self = &*self + &other;
    }
}

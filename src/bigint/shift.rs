//! Power-of-two shifts emulated over the decimal digit array.
//!
//! These are arithmetic operations on the magnitude (multiply or
//! floor-divide by `2^k`), not bitwise operations on a binary
//! representation; they are exact for every representable value.

use core::ops::{Shl, Shr};

use num_traits::Zero;

use crate::ArithmeticError;

use super::{bigint_from_vec, BigInt};

/// One doubling sweep over a digit vector, least significant first.
fn double_digits(data: &mut Vec<u8>) {
    let mut carry = 0;
    for d in data.iter_mut() {
        let cur = *d * 2 + carry;
        *d = cur % 10;
        carry = cur / 10;
    }
    if carry != 0 {
        data.push(carry);
    }
}

/// One halving sweep over a digit vector, most significant first.
fn halve_digits(data: &mut [u8]) {
    let mut carry = 0;
    for d in data.iter_mut().rev() {
        let cur = carry * 10 + *d;
        *d = cur / 2;
        carry = cur % 2;
    }
}

/// Multiplies the magnitude by `2^shift`, preserving the sign.
pub fn bigint_shl(n: &BigInt, shift: usize) -> BigInt {
    if n.is_zero() || shift == 0 {
        return n.clone();
    }
    let mut data = n.data.clone();
    for _ in 0..shift {
        double_digits(&mut data);
    }
    bigint_from_vec(n.sign, data)
}

/// Floor-divides the magnitude by `2^shift`, preserving the sign.
///
/// A negative value whose magnitude shifts to zero normalizes to
/// canonical positive zero.
pub fn bigint_shr(n: &BigInt, shift: usize) -> BigInt {
    if n.is_zero() || shift == 0 {
        return n.clone();
    }
    let mut data = n.data.clone();
    for _ in 0..shift {
        halve_digits(&mut data);
    }
    bigint_from_vec(n.sign, data)
}

impl BigInt {
    /// Fallible left shift; fails with
    /// [`ArithmeticError::NegativeShift`] on a negative amount.
    pub fn checked_shl(&self, shift: i64) -> Result<BigInt, ArithmeticError> {
        if shift < 0 {
            return Err(ArithmeticError::NegativeShift);
        }
        Ok(bigint_shl(self, shift as usize))
    }

    /// Fallible right shift; fails with
    /// [`ArithmeticError::NegativeShift`] on a negative amount.
    pub fn checked_shr(&self, shift: i64) -> Result<BigInt, ArithmeticError> {
        if shift < 0 {
            return Err(ArithmeticError::NegativeShift);
        }
        Ok(bigint_shr(self, shift as usize))
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, shift: usize) -> BigInt {
        bigint_shl(self, shift)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, shift: usize) -> BigInt {
        bigint_shl(&self, shift)
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, shift: usize) -> BigInt {
        bigint_shr(self, shift)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, shift: usize) -> BigInt {
        bigint_shr(&self, shift)
    }
}

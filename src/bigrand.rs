//! Randomization of big integers
#![cfg(feature = "rand")]

use rand::prelude::*;

use num_traits::Zero;

use crate::bigint::bigint_from_vec;
use crate::{BigInt, Sign};

/// A trait for sampling random big integers.
///
/// The `rand` feature must be enabled to use this. See crate-level
/// documentation for details.
pub trait RandBigInt {
    /// Generate a random non-negative [`BigInt`] of at most the given
    /// number of decimal digits.
    fn gen_bigint_magnitude(&mut self, digits: u64) -> BigInt;

    /// Generate a random [`BigInt`] of at most the given number of
    /// decimal digits, with a random sign.
    fn gen_bigint(&mut self, digits: u64) -> BigInt;

    /// Generate a random non-negative [`BigInt`] less than the given
    /// bound. Fails when the bound is not positive.
    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt;

    /// Generate a random [`BigInt`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint_magnitude(&mut self, digits: u64) -> BigInt {
        if digits == 0 {
            return BigInt::zero();
        }
        let data: Vec<u8> = (0..digits).map(|_| self.gen_range(0..10u8)).collect();
        bigint_from_vec(Sign::Plus, data)
    }

    fn gen_bigint(&mut self, digits: u64) -> BigInt {
        loop {
            let magnitude = self.gen_bigint_magnitude(digits);
            if magnitude.is_zero() {
                // A zero magnitude would be picked regardless of the sign
                // flip, so accept it only half of the time to keep the
                // distribution even.
                if self.gen() {
                    continue;
                }
                return magnitude;
            }
            return if self.gen() { magnitude } else { -magnitude };
        }
    }

    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(bound.is_positive(), "bound must be positive");
        let digits = bound.digits().len() as u64;
        loop {
            let n = self.gen_bigint_magnitude(digits);
            if &n < bound {
                return n;
            }
        }
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(lbound < ubound, "empty range");
        let span = ubound - lbound;
        lbound + self.gen_bigint_below(&span)
    }
}

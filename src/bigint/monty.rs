//! Montgomery modular multiplication.
//!
//! For a fixed modulus with an auxiliary radix `r` coprime to it,
//! products can be reduced without trial division: with `n0inv` chosen so
//! that `modulus · n0inv ≡ -1 (mod r)`, the reduction of `t` is
//! `(t + m·modulus) / r` where `m = t·n0inv mod r`, and the division is
//! exact. [`MontyReducer`] derives the constants from the modulus and
//! radix; the free functions accept caller-supplied constants directly.

use std::borrow::Cow;

use num_traits::Zero;

use crate::algorithms::mod_inverse;
use crate::ArithmeticError;

use super::division::{div_rem, div_rem_unchecked};
use super::BigInt;

/// Precomputed constants for Montgomery arithmetic modulo `modulus` with
/// radix `r`.
///
/// Both the modulus and the radix are expected to be positive, with
/// `gcd(modulus, r) == 1`; in practice `r` is a power of two well above
/// the modulus.
#[derive(Debug, Clone)]
pub struct MontyReducer {
    modulus: BigInt,
    r: BigInt,
    r2: BigInt,
    n0inv: BigInt,
}

impl MontyReducer {
    /// Derives `r² mod modulus` and `n0inv = -modulus⁻¹ mod r` via the
    /// extended Euclidean algorithm.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] when either
    /// argument is zero and [`ArithmeticError::NoModularInverse`] when
    /// the modulus and radix are not coprime.
    pub fn new(modulus: &BigInt, r: &BigInt) -> Result<MontyReducer, ArithmeticError> {
        if modulus.is_zero() || r.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let r2 = div_rem_unchecked(&(r * r), modulus).1;
        let inv = mod_inverse(Cow::Borrowed(modulus), Cow::Borrowed(r))
            .ok_or(ArithmeticError::NoModularInverse)?;
        let n0inv = if inv.is_zero() {
            BigInt::zero()
        } else {
            r - &inv
        };
        Ok(MontyReducer {
            modulus: modulus.clone(),
            r: r.clone(),
            r2,
            n0inv,
        })
    }

    /// `r² mod modulus`.
    #[inline]
    pub fn r2(&self) -> &BigInt {
        &self.r2
    }

    /// `-modulus⁻¹ mod r`.
    #[inline]
    pub fn n0inv(&self) -> &BigInt {
        &self.n0inv
    }

    /// Reduces `t` out of the Montgomery domain.
    #[inline]
    pub fn reduce(&self, t: &BigInt) -> Result<BigInt, ArithmeticError> {
        monty_reduce(t, &self.modulus, &self.n0inv, &self.r)
    }

    /// Maps `a` to its Montgomery-domain representative.
    #[inline]
    pub fn transform(&self, a: &BigInt) -> Result<BigInt, ArithmeticError> {
        monty_transform(a, &self.modulus, &self.r2, &self.n0inv, &self.r)
    }

    /// Computes `(a·b) mod modulus` through the Montgomery domain.
    #[inline]
    pub fn multiply(&self, a: &BigInt, b: &BigInt) -> Result<BigInt, ArithmeticError> {
        monty_multiply(a, b, &self.modulus, &self.r2, &self.n0inv, &self.r)
    }
}

/// Montgomery reduction of `t`: `(t + m·modulus) / r` with
/// `m = t·n0inv mod r`.
///
/// The constants must satisfy `modulus · n0inv ≡ -1 (mod r)`; the final
/// division is then exact (debug-asserted). Fails with
/// [`ArithmeticError::DivisionByZero`] on a zero radix.
pub fn monty_reduce(
    t: &BigInt,
    modulus: &BigInt,
    n0inv: &BigInt,
    r: &BigInt,
) -> Result<BigInt, ArithmeticError> {
    let (_, m) = div_rem(&(t * n0inv), r)?;
    let (q, rem) = div_rem_unchecked(&(t + &(&m * modulus)), r);
    debug_assert!(rem.is_zero(), "montgomery reduction requires exact division");
    Ok(q)
}

/// Maps `a` into the Montgomery domain: `monty_reduce(a · r2)`, which is
/// congruent to `a·r (mod modulus)`.
pub fn monty_transform(
    a: &BigInt,
    modulus: &BigInt,
    r2: &BigInt,
    n0inv: &BigInt,
    r: &BigInt,
) -> Result<BigInt, ArithmeticError> {
    monty_reduce(&(a * r2), modulus, n0inv, r)
}

/// Computes `(a·b) mod modulus` by transforming both operands, reducing
/// their product once to leave the Montgomery domain and a second time to
/// return to the standard domain.
pub fn monty_multiply(
    a: &BigInt,
    b: &BigInt,
    modulus: &BigInt,
    r2: &BigInt,
    n0inv: &BigInt,
    r: &BigInt,
) -> Result<BigInt, ArithmeticError> {
    let a_m = monty_transform(a, modulus, r2, n0inv, r)?;
    let b_m = monty_transform(b, modulus, r2, n0inv, r)?;
    let prod = monty_reduce(&(&a_m * &b_m), modulus, n0inv, r)?;
    monty_reduce(&prod, modulus, n0inv, r)
}

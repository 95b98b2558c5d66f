use std::borrow::Cow;

use num_traits::{One, Zero};

use crate::algorithms::xgcd;
use crate::bigint::division::div_rem_unchecked;
use crate::BigInt;

/// Modular multiplicative inverse of `g` modulo `n`.
///
/// Returns the unique `x` in `[0, |n|)` with `g·x ≡ 1 (mod |n|)`, or
/// `None` when no inverse exists (`n` is zero or `gcd(g, n) != 1`).
pub fn mod_inverse(g: Cow<'_, BigInt>, n: Cow<'_, BigInt>) -> Option<BigInt> {
    let n = n.abs();
    if n.is_zero() {
        return None;
    }

    // reduce g into [0, n)
    let (_, mut g) = div_rem_unchecked(&g, &n);
    if g.is_negative() {
        g = &g + &n;
    }

    let (d, x, _) = xgcd(&g, &n);
    if !d.is_one() {
        return None;
    }

    if x.is_negative() {
        Some(&x + &n)
    } else {
        Some(x)
    }
}

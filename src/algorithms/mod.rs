//! Low-level algorithms for big integer arithmetic.
//!
//! This module re-exports the internal arithmetic primitives used by
//! [`BigInt`](crate::BigInt), making them available for direct use on
//! digit slices and values.

#![allow(clippy::many_single_char_names)]

// Re-export arithmetic primitives from their canonical locations.
//
// The implementations live inside the `bigint` submodules where they are
// used by the operator trait impls. We simply widen their visibility here.

// --- addition ---
pub use crate::bigint::addition::{__add2, adc, add2};

// --- subtraction ---
pub use crate::bigint::subtraction::{sbb, sub2};

// --- multiplication ---
pub use crate::bigint::multiplication::{karatsuba_mul, long_mul, mul3, KARATSUBA_THRESHOLD};

// --- division ---
pub use crate::bigint::division::div_rem;

// --- shift ---
pub use crate::bigint::shift::{bigint_shl, bigint_shr};

// --- comparison ---
pub use crate::bigint::cmp_slice;

// --- montgomery modular multiplication ---
pub use crate::bigint::monty::{monty_multiply, monty_reduce, monty_transform, MontyReducer};

// --- number-theory algorithms ---
mod gcd;
mod mod_inverse;

pub use self::gcd::*;
pub use self::mod_inverse::*;

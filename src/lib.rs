//! Arbitrary-precision signed integers over base-10 digit vectors.
//!
//! A [`BigInt`] is an immutable-by-convention value: every operation
//! borrows its operands and allocates a fresh, canonical result (no
//! most-significant zero digits, no negative zero). On top of the
//! operator surface the crate provides truncated division with
//! remainder, power-of-two shifts emulated over the decimal digits,
//! GCD and extended GCD, modular inverses, binary exponentiation and
//! Montgomery modular multiplication.
//!
//! ```
//! use num_bigint_dec::BigInt;
//!
//! let a: BigInt = "15".parse().unwrap();
//! let b: BigInt = "4".parse().unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "19");
//! assert_eq!((&a - &b).to_string(), "11");
//! assert_eq!((&a * &b).to_string(), "60");
//!
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q.to_string(), "3");
//! assert_eq!(r.to_string(), "3");
//!
//! assert_eq!((&b << 2).to_string(), "16");
//! assert_eq!(a.gcd(&b).to_string(), "1");
//! ```
//!
//! Domain violations are explicit: a zero divisor, a negative shift or
//! exponent, and malformed decimal input each surface as their own error
//! ([`ArithmeticError`], [`ParseBigIntError`]) rather than a silent
//! wrong answer.
//!
//! ## Features
//!
//! - `rand`: random value generation through [`RandBigInt`].
//! - `zeroize`: clearing of digit buffers via the `zeroize` crate.

#[macro_use]
mod macros;

pub mod algorithms;
mod bigint;
mod bigrand;
mod error;
mod traits;

pub use crate::bigint::{BigInt, Sign};
pub use crate::error::{ArithmeticError, ParseBigIntError};
pub use crate::traits::{ExtendedGcd, ModInverse};

#[cfg(feature = "rand")]
pub use crate::bigrand::RandBigInt;

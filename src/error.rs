use thiserror::Error;

/// Errors raised when an arithmetic operation is handed arguments outside
/// its defined domain. These are caller mistakes, not recoverable runtime
/// conditions; the operation aborts without producing a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A divisor (in `/`, `%`, or any helper that divides) had magnitude zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A shift amount was negative; shifts are only defined for non-negative
    /// amounts.
    #[error("negative shift amount")]
    NegativeShift,
    /// An exponent was negative; exponentiation is only defined for
    /// non-negative exponents.
    #[error("negative exponent")]
    NegativeExponent,
    /// No modular inverse exists because the arguments are not coprime.
    #[error("no modular inverse exists")]
    NoModularInverse,
}

/// Errors from parsing a decimal string into a [`BigInt`](crate::BigInt).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The input contained no digit characters.
    #[error("cannot parse integer from empty string")]
    Empty,
    /// The input contained a character other than an ASCII digit, or a raw
    /// digit value outside `0..=9`.
    #[error("invalid digit found in string")]
    InvalidDigit,
}

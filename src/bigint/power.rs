//! Square-and-multiply exponentiation, plain and modular.

use num_traits::{One, Zero};

use crate::ArithmeticError;

use super::division::div_rem_unchecked;
use super::shift::bigint_shr;
use super::BigInt;

impl BigInt {
    /// Raises `self` to `exponent` by binary exponentiation.
    ///
    /// Fails with [`ArithmeticError::NegativeExponent`] on a negative
    /// exponent. `pow(0, 0)` is `1`.
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// let two: BigInt = "2".parse().unwrap();
    /// let ten: BigInt = "10".parse().unwrap();
    /// assert_eq!(two.pow(&ten).unwrap().to_string(), "1024");
    /// ```
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt, ArithmeticError> {
        if exponent.is_negative() {
            return Err(ArithmeticError::NegativeExponent);
        }

        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exp = exponent.clone();
        while !exp.is_zero() {
            if exp.is_odd() {
                result = &result * &base;
            }
            base = &base * &base;
            exp = bigint_shr(&exp, 1);
        }
        Ok(result)
    }

    /// Computes `self^exponent mod modulus` by square-and-multiply,
    /// reducing after every product.
    ///
    /// Equivalent to `pow` followed by `%`, without the intermediate
    /// blow-up. Fails with [`ArithmeticError::NegativeExponent`] on a
    /// negative exponent and [`ArithmeticError::DivisionByZero`] on a
    /// zero modulus.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, ArithmeticError> {
        if modulus.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if exponent.is_negative() {
            return Err(ArithmeticError::NegativeExponent);
        }

        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exp = exponent.clone();
        while !exp.is_zero() {
            if exp.is_odd() {
                result = div_rem_unchecked(&(&result * &base), modulus).1;
            }
            base = div_rem_unchecked(&(&base * &base), modulus).1;
            exp = bigint_shr(&exp, 1);
        }
        Ok(result)
    }
}

//! Schoolbook and Karatsuba magnitude multiplication and the signed `*`
//! operator.

use core::ops::{Mul, MulAssign};

use super::addition::{__add2, add2};
use super::subtraction::sub2;
use super::{bigint_from_vec, BigInt};

/// Operand length below which `mul3` stays with the schoolbook routine.
pub const KARATSUBA_THRESHOLD: usize = 10;

/// Strips most-significant zero digits off a slice; may return empty.
#[inline]
fn trimmed(mut v: &[u8]) -> &[u8] {
    while let Some((&0, rest)) = v.split_last() {
        v = rest;
    }
    v
}

/// Canonicalizes a raw product buffer: trims most-significant zeros and
/// keeps at least one digit.
fn normalized(mut v: Vec<u8>) -> Vec<u8> {
    while v.len() > 1 && v[v.len() - 1] == 0 {
        v.pop();
    }
    if v.is_empty() {
        v.push(0);
    }
    v
}

/// Adds `v`, left-padded by `shift` zero digits (a power-of-ten shift),
/// into `acc`.
fn add_shifted(acc: &mut Vec<u8>, v: &[u8], shift: usize) {
    let v = trimmed(v);
    if v.is_empty() {
        return;
    }
    if acc.len() < shift + v.len() {
        acc.resize(shift + v.len(), 0);
    }
    let carry = __add2(&mut acc[shift..], v);
    if carry != 0 {
        acc.push(carry);
    }
}

/// Grade-school long multiplication over digit slices, O(n·m).
pub fn long_mul(b: &[u8], c: &[u8]) -> Vec<u8> {
    let b = trimmed(b);
    let c = trimmed(c);
    if b.is_empty() || c.is_empty() {
        return vec![0];
    }

    let mut acc = vec![0u8; b.len() + c.len()];
    for (i, &bi) in b.iter().enumerate() {
        if bi == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (j, &cj) in c.iter().enumerate() {
            let cur = acc[i + j] as u32 + bi as u32 * cj as u32 + carry;
            acc[i + j] = (cur % 10) as u8;
            carry = cur / 10;
        }
        let mut k = i + c.len();
        while carry != 0 {
            let cur = acc[k] as u32 + carry;
            acc[k] = (cur % 10) as u8;
            carry = cur / 10;
            k += 1;
        }
    }
    normalized(acc)
}

/// Divide-and-conquer multiplication.
///
/// Splits each operand at half the longer digit length into low/high
/// halves, recurses into the three half-size products and recombines as
/// `ll + (cross - ll - hh)·10^split + hh·10^(2·split)`. The shift is a
/// left-pad by zero digits, not a bit shift.
pub fn karatsuba_mul(b: &[u8], c: &[u8]) -> Vec<u8> {
    let b = trimmed(b);
    let c = trimmed(c);
    if b.is_empty() || c.is_empty() {
        return vec![0];
    }

    let n = b.len().max(c.len());
    let split = n / 2 + n % 2;

    let (b0, b1) = if b.len() > split {
        b.split_at(split)
    } else {
        (b, &[][..])
    };
    let (c0, c1) = if c.len() > split {
        c.split_at(split)
    } else {
        (c, &[][..])
    };

    let ll = mul3(b0, c0);
    let hh = mul3(b1, c1);

    // cross term: (low + high) of each operand
    let mut bs = b0.to_vec();
    add2(&mut bs, b1);
    let mut cs = c0.to_vec();
    add2(&mut cs, c1);
    let mut cross = mul3(&bs, &cs);

    // cross - ll - hh is non-negative by construction
    sub2(&mut cross, &ll);
    sub2(&mut cross, &hh);

    let mut acc = ll;
    add_shifted(&mut acc, &cross, split);
    add_shifted(&mut acc, &hh, 2 * split);
    normalized(acc)
}

/// Multiplies two digit-slice magnitudes, dispatching between the
/// schoolbook routine and the Karatsuba fast path.
///
/// Stays with the schoolbook routine below [`KARATSUBA_THRESHOLD`] digits,
/// and when both most-significant digits are small enough that the split
/// overhead cannot pay off. Both paths produce identical digit vectors.
pub fn mul3(b: &[u8], c: &[u8]) -> Vec<u8> {
    let b = trimmed(b);
    let c = trimmed(c);
    if b.is_empty() || c.is_empty() {
        return vec![0];
    }

    let n = b.len().max(c.len());
    if n < KARATSUBA_THRESHOLD || (b[b.len() - 1] < 4 && c[c.len() - 1] < 4) {
        return long_mul(b, c);
    }
    karatsuba_mul(b, c)
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        bigint_from_vec(self.sign * other.sign, mul3(&self.data, &other.data))
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigInt) {
        *self = &*self * &other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sign;
    use num_traits::Zero;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn random_digits<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
        let mut v: Vec<u8> = (0..len).map(|_| rng.gen_range(0..10)).collect();
        // keep the most significant digit non-zero
        let last = v.last_mut().unwrap();
        if *last == 0 {
            *last = rng.gen_range(1..10);
        }
        v
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(&big("11222") * &big("2222222"), big("24937775284"));
        assert_eq!(&big("0") * &big("123456"), big("0"));
        assert_eq!(&big("1") * &big("123456"), big("123456"));
    }

    #[test]
    fn test_mul_sign_rules() {
        assert_eq!(&big("-3") * &big("4"), big("-12"));
        assert_eq!(&big("3") * &big("-4"), big("-12"));
        assert_eq!(&big("-3") * &big("-4"), big("12"));
        let z = &big("-3") * &big("0");
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::Plus);
    }

    #[test]
    fn test_mul_matches_i128() {
        let mut rng = XorShiftRng::from_seed([5u8; 16]);
        for _ in 0..500 {
            let x = rng.gen_range(-1_000_000_000i128..1_000_000_000i128);
            let y = rng.gen_range(-1_000_000_000i128..1_000_000_000i128);
            assert_eq!(
                BigInt::from(x) * BigInt::from(y),
                BigInt::from(x * y),
                "{} * {}",
                x,
                y
            );
        }
    }

    #[test]
    fn test_mul_commutative() {
        let mut rng = XorShiftRng::from_seed([6u8; 16]);
        for _ in 0..100 {
            let x = BigInt::from(rng.gen::<i128>());
            let y = BigInt::from(rng.gen::<i128>());
            assert_eq!(&x * &y, &y * &x);
        }
    }

    #[test]
    fn test_karatsuba_matches_schoolbook() {
        let mut rng = XorShiftRng::from_seed([7u8; 16]);
        for &len in &[10usize, 17, 32, 64, 100, 200] {
            for _ in 0..8 {
                let b = random_digits(&mut rng, len);
                let c = random_digits(&mut rng, len + len / 3);
                assert_eq!(
                    karatsuba_mul(&b, &c),
                    long_mul(&b, &c),
                    "operand lengths {} / {}",
                    b.len(),
                    c.len()
                );
                assert_eq!(mul3(&b, &c), long_mul(&b, &c));
            }
        }
    }

    #[test]
    fn test_karatsuba_uneven_operands() {
        let mut rng = XorShiftRng::from_seed([8u8; 16]);
        for _ in 0..20 {
            let b_len = rng.gen_range(1..120);
            let c_len = rng.gen_range(1..120);
            let b = random_digits(&mut rng, b_len);
            let c = random_digits(&mut rng, c_len);
            assert_eq!(karatsuba_mul(&b, &c), long_mul(&b, &c));
        }
    }

    #[test]
    fn test_mul_large_pinned() {
        // 10^40 + 1 squared
        let a = big("10000000000000000000000000000000000000001");
        let expected = big(
            "100000000000000000000000000000000000000020000000000000000000000000000000000000001",
        );
        assert_eq!(&a * &a, expected);
    }
}

#![cfg(feature = "zeroize")]

use super::{BigInt, Sign};

impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.data.as_mut_slice().zeroize();
        // restore canonical zero rather than leaving an empty buffer
        self.data.truncate(1);
        self.sign = Sign::Plus;
    }
}

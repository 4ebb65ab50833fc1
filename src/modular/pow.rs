//! Modular exponentiation.

use super::MontyParams;
use crate::{Uint, Word};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Window width of the fixed-window ladder.
const WINDOW: u32 = 5;

/// Number of table entries for the fixed-window ladder.
const TABLE_SIZE: usize = 1 << WINDOW;

/// Window width of the base-2 ladder, where the per-window multiplication
/// is a shift and does not need a table.
const WINDOW2: u32 = 6;

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Computes `base^exponent mod m` in constant time with respect to both
    /// the base and the exponent.
    ///
    /// The full width of the exponent is scanned with a fixed 5-bit window
    /// and a constant-time table scan, so neither the exponent's bit length
    /// nor its window values leak. The base does not need to be reduced.
    pub fn pow_mod(&self, base: &Uint<LIMBS>, exponent: &Uint<LIMBS>) -> Uint<LIMBS> {
        let base_m = self.to_montgomery(base);

        let mut powers = [self.one; TABLE_SIZE];
        powers[1] = base_m;
        for i in 2..TABLE_SIZE {
            powers[i] = self.mont_mul(&powers[i - 1], &base_m);
        }

        let nwin = Uint::<LIMBS>::BITS.div_ceil(WINDOW);
        let mut z = self.one;
        let mut wi = nwin;
        while wi > 0 {
            wi -= 1;
            for _ in 0..WINDOW {
                z = self.mont_sqr(&z);
            }
            let idx = exponent.window(wi * WINDOW, WINDOW);
            let mut factor = powers[0];
            for (i, entry) in powers.iter().enumerate().skip(1) {
                factor.conditional_assign(entry, (i as Word).ct_eq(&idx));
            }
            z = self.mont_mul(&z, &factor);
        }

        powers.zeroize();
        self.from_montgomery(&z)
    }

    /// Computes `base^e mod m` in variable time with respect to the
    /// exponent, which must be public and nonzero.
    ///
    /// The common public exponent 3 short-circuits to a square and a
    /// multiply; anything else runs a square-and-multiply ladder.
    pub fn pow_mod_vartime(&self, base: &Uint<LIMBS>, e: u64) -> Uint<LIMBS> {
        debug_assert_ne!(e, 0);
        let base_m = self.to_montgomery(base);

        if e == 3 {
            let z = self.mont_sqr(&base_m);
            let z = self.mont_mul(&z, &base_m);
            return self.from_montgomery(&z);
        }

        let mut z = base_m;
        let mut bit = u64::BITS - 1 - e.leading_zeros();
        while bit > 0 {
            bit -= 1;
            z = self.mont_sqr(&z);
            if (e >> bit) & 1 == 1 {
                z = self.mont_mul(&z, &base_m);
            }
        }
        self.from_montgomery(&z)
    }

    /// Computes `2^exponent mod m` in constant time with respect to the
    /// exponent.
    ///
    /// With base 2 the per-window multiplication is a left shift of at most
    /// 63 bits followed by one reduction step, so a wider 6-bit window is
    /// used and no table is needed.
    pub fn pow2_mod(&self, exponent: &Uint<LIMBS>) -> Uint<LIMBS> {
        let nwin = Uint::<LIMBS>::BITS.div_ceil(WINDOW2);
        let mut z = self.one;
        let mut wi = nwin;
        while wi > 0 {
            wi -= 1;
            for _ in 0..WINDOW2 {
                z = self.mont_sqr(&z);
            }
            let d = exponent.window(wi * WINDOW2, WINDOW2);
            let (shifted, top) = z.shl_bits(d as u32);
            z = shifted.reduce_top(top, &self.modulus);
        }
        self.from_montgomery(&z)
    }
}

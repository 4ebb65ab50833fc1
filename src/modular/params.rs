//! Precomputed Montgomery parameters.

use crate::{Error, Limb, Result, Uint, Word};

/// Compute `-m0^-1 mod 2^64` for odd `m0`.
///
/// `x = m0` is already the inverse modulo 8; each Newton step
/// `x = x·(2 - m0·x)` doubles the number of correct low bits.
const fn mont_setup(m0: Limb) -> Limb {
    let mut x = m0.0;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul((2 as Word).wrapping_sub(m0.0.wrapping_mul(x)));
        i += 1;
    }
    Limb(x.wrapping_neg())
}

/// Parameters for Montgomery arithmetic modulo an odd modulus occupying its
/// full fixed width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MontyParams<const LIMBS: usize> {
    /// The modulus. Odd, with its top bit set.
    pub(crate) modulus: Uint<LIMBS>,
    /// `R mod modulus`, the Montgomery form of 1.
    pub(crate) one: Uint<LIMBS>,
    /// `-modulus^-1 mod 2^64`.
    pub(crate) mod_neg_inv: Limb,
}

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Compute the parameters for the given modulus.
    ///
    /// Returns [`Error::OperandTooLarge`] unless the modulus is odd with its
    /// most significant bit set.
    pub fn new(modulus: &Uint<LIMBS>) -> Result<Self> {
        if !bool::from(modulus.is_odd()) || !modulus.is_full_width() {
            return Err(Error::OperandTooLarge);
        }
        Ok(Self::new_unchecked(modulus))
    }

    /// Compute the parameters without validation; the modulus must be odd
    /// with its most significant bit set.
    pub(crate) const fn new_unchecked(modulus: &Uint<LIMBS>) -> Self {
        // with the top bit set, R mod m is simply 2^BITS - m
        let one = Uint::ZERO.wrapping_sub(modulus);
        Self {
            modulus: *modulus,
            one,
            mod_neg_inv: mont_setup(modulus.limbs[0]),
        }
    }

    /// The modulus these parameters were computed for.
    pub const fn modulus(&self) -> &Uint<LIMBS> {
        &self.modulus
    }

    /// Convert a full-width value into Montgomery form, reducing it modulo
    /// the modulus. The input does not need to be reduced.
    pub fn to_montgomery(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        Uint::rem_wide(&Uint::ZERO, a, &self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::MontyParams;
    use crate::{Error, Limb, U256};

    const P: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

    #[test]
    fn rejects_unusable_moduli() {
        let even = U256::MAX.wrapping_sub(&U256::ONE);
        assert_eq!(MontyParams::new(&even), Err(Error::OperandTooLarge));
        assert_eq!(
            MontyParams::new(&U256::from_u64(17)),
            Err(Error::OperandTooLarge)
        );
    }

    #[test]
    fn mod_neg_inv_inverts() {
        let params = MontyParams::new(&P).unwrap();
        // m·(-m^-1) = -1 mod 2^64
        assert_eq!(
            params.mod_neg_inv.0.wrapping_mul(P.as_limbs()[0].0),
            u64::MAX
        );
        assert_eq!(params.mod_neg_inv, Limb::ONE);
    }

    #[test]
    fn one_is_r_mod_m() {
        let params = MontyParams::new(&P).unwrap();
        let r = U256::from_be_hex(
            "00000000fffffffeffffffffffffffffffffffff000000000000000000000001",
        );
        assert_eq!(params.one, r);
        assert_eq!(params.to_montgomery(&U256::ONE), r);
    }
}

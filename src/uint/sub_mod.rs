//! [`Uint`] modular subtraction and negation.

use crate::{Limb, Uint};
use subtle::ConditionallySelectable;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self - rhs mod p`.
    ///
    /// Assumes both operands are reduced below `p`.
    pub fn sub_mod(&self, rhs: &Self, p: &Self) -> Self {
        let (out, borrow) = self.sbb(rhs, Limb::ZERO);
        out.adc(&p.bitand_limb(borrow), Limb::ZERO).0
    }

    /// Computes `-self mod p`, mapping zero to zero.
    pub fn neg_mod(&self, p: &Self) -> Self {
        let (out, _) = p.sbb(self, Limb::ZERO);
        Self::conditional_select(&out, &Self::ZERO, self.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use crate::U256;

    const P: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

    #[test]
    fn sub_mod_wraps() {
        assert_eq!(
            U256::ZERO.sub_mod(&U256::ONE, &P),
            P.wrapping_sub(&U256::ONE)
        );
        assert_eq!(U256::ONE.sub_mod(&U256::ONE, &P), U256::ZERO);
    }

    #[test]
    fn neg_mod_zero_is_zero() {
        assert_eq!(U256::ZERO.neg_mod(&P), U256::ZERO);
        assert_eq!(U256::ONE.neg_mod(&P), P.wrapping_sub(&U256::ONE));
    }
}

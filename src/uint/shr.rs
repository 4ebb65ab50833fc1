//! [`Uint`] right shifts and modular halving.

use crate::{Limb, Uint};
use subtle::ConditionallySelectable;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Shift right by one bit, discarding the low bit.
    pub(crate) const fn shr1(&self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let mut w = self.limbs[i].0 >> 1;
            if i + 1 < LIMBS {
                w |= self.limbs[i + 1].0 << Limb::HI_BIT;
            }
            limbs[i] = Limb(w);
            i += 1;
        }
        Self { limbs }
    }

    /// Computes `self / 2 mod p` for odd `p`: add `p` when odd, then halve.
    ///
    /// Assumes `self` is reduced below `p`.
    pub fn div2_mod(&self, p: &Self) -> Self {
        let p_masked = Self::conditional_select(&Self::ZERO, p, self.is_odd());
        let (sum, carry) = self.adc(&p_masked, Limb::ZERO);
        let mut out = sum.shr1();
        out.limbs[LIMBS - 1] = Limb(out.limbs[LIMBS - 1].0 | (carry.0 << Limb::HI_BIT));
        out
    }
}

//! [`Uint`] modular addition.

use crate::{Limb, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs mod p`.
    ///
    /// Assumes both operands are reduced below `p`.
    pub fn add_mod(&self, rhs: &Self, p: &Self) -> Self {
        let (w, carry) = self.adc(rhs, Limb::ZERO);
        w.sub_mod_with_carry(carry, p, p)
    }

    /// Computes `(carry·2^BITS + self) - rhs mod p`, where the result of the
    /// subtraction is known to be at most one addition of `p` away from the
    /// reduced range.
    ///
    /// Used to fold the final conditional subtraction of Montgomery reduction
    /// and modular addition into one constant-time step.
    pub(crate) const fn sub_mod_with_carry(&self, carry: Limb, rhs: &Self, p: &Self) -> Self {
        let (out, borrow) = self.sbb(rhs, Limb::ZERO);
        // add the modulus back when the subtraction underflowed and the
        // incoming carry does not cancel the borrow
        let mask = Limb(borrow.0 & carry.0.wrapping_sub(1));
        out.adc(&p.bitand_limb(mask), Limb::ZERO).0
    }
}

//! Limb multiplication.

use crate::{Limb, WideWord, Word};

impl Limb {
    /// Computes `self * rhs + addend + carry`, returning the low word along
    /// with the new carry.
    ///
    /// Cannot overflow: the exact result always fits in two words.
    #[inline(always)]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let ret = (self.0 as WideWord) * (rhs.0 as WideWord)
            + (addend.0 as WideWord)
            + (carry.0 as WideWord);
        (Limb(ret as Word), Limb((ret >> Self::BITS) as Word))
    }

    /// Computes `self * rhs`, returning the low word of the product.
    #[inline(always)]
    pub const fn wrapping_mul(self, rhs: Limb) -> Limb {
        Limb(self.0.wrapping_mul(rhs.0))
    }
}

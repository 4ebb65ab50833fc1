//! [`Uint`] left shifts.

use crate::{Limb, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Shift left by `shift` bits, returning the result along with the
    /// shifted-out top word. `shift` must be below the limb width.
    ///
    /// The shift amount may be secret: only shift instructions with
    /// data-independent latency are emitted.
    pub(crate) const fn shl_bits(&self, shift: u32) -> (Self, Limb) {
        debug_assert!(shift < Limb::BITS);
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut carry = Limb::ZERO;
        let mut i = 0;
        while i < LIMBS {
            let w = self.limbs[i].0;
            limbs[i] = Limb((w << shift) | carry.0);
            // (w >> (64 - shift)) without the undefined shift at zero
            carry = Limb((w >> 1) >> (Limb::HI_BIT - shift));
            i += 1;
        }
        (Self { limbs }, carry)
    }
}

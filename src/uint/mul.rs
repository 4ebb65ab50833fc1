//! [`Uint`] multiplication.

mod karatsuba;
mod schoolbook;

use crate::{Limb, Uint};

/// Widths at and above this limb count use one level of Karatsuba.
const KARATSUBA_MIN_LIMBS: usize = 32;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Multiply, returning the `(lo, hi)` halves of the double-width product.
    pub fn mul_wide(&self, rhs: &Self) -> (Self, Self) {
        let mut lo = Self::ZERO;
        let mut hi = Self::ZERO;
        if LIMBS >= KARATSUBA_MIN_LIMBS && LIMBS % 2 == 0 {
            karatsuba::mul_wide(&self.limbs, &rhs.limbs, &mut lo.limbs, &mut hi.limbs);
        } else {
            schoolbook::mul_wide(&self.limbs, &rhs.limbs, &mut lo.limbs, &mut hi.limbs);
        }
        (lo, hi)
    }

    /// Square, returning the `(lo, hi)` halves of the double-width product.
    pub fn square_wide(&self) -> (Self, Self) {
        let mut lo = Self::ZERO;
        let mut hi = Self::ZERO;
        if LIMBS >= KARATSUBA_MIN_LIMBS && LIMBS % 2 == 0 {
            karatsuba::square_wide(&self.limbs, &mut lo.limbs, &mut hi.limbs);
        } else {
            schoolbook::square_wide(&self.limbs, &mut lo.limbs, &mut hi.limbs);
        }
        (lo, hi)
    }

    /// Multiply by a single limb, returning the result along with the
    /// overflowing top word.
    pub(crate) fn mul_limb(&self, rhs: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut carry = Limb::ZERO;
        let mut i = 0;
        while i < LIMBS {
            let (w, c) = self.limbs[i].carrying_mul_add(rhs, Limb::ZERO, carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }
        (Self { limbs }, carry)
    }
}

//! [`Uint`] addition.

use crate::{Limb, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs + carry`, returning the result along with the new
    /// carry (0 or 1).
    pub const fn adc(&self, rhs: &Self, mut carry: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let (w, c) = self.limbs[i].adc(rhs.limbs[i], carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }
        (Self { limbs }, carry)
    }

    /// Computes `self + rhs`, wrapping on overflow.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.adc(rhs, Limb::ZERO).0
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, U256};

    #[test]
    fn adc_carry_propagation() {
        let (res, carry) = U256::MAX.adc(&U256::ONE, Limb::ZERO);
        assert_eq!(res, U256::ZERO);
        assert_eq!(carry, Limb::ONE);

        let (res, carry) = U256::MAX.adc(&U256::MAX, Limb::ZERO);
        assert_eq!(res, U256::MAX.wrapping_add(&U256::MAX));
        assert_eq!(carry, Limb::ONE);
    }
}

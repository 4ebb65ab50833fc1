//! Limb addition.

use crate::{Limb, WideWord, Word};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the new
    /// carry (0 or 1).
    #[inline(always)]
    pub const fn adc(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let ret = (self.0 as WideWord) + (rhs.0 as WideWord) + (carry.0 as WideWord);
        (Limb(ret as Word), Limb((ret >> Self::BITS) as Word))
    }

    /// Computes `self + rhs`, wrapping on overflow.
    #[inline(always)]
    pub const fn wrapping_add(self, rhs: Limb) -> Limb {
        Limb(self.0.wrapping_add(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Limb;

    #[test]
    fn adc_no_carry() {
        let (res, carry) = Limb::ZERO.adc(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ONE);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn adc_carry_out() {
        let (res, carry) = Limb::MAX.adc(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(carry, Limb::ONE);

        let (res, carry) = Limb::MAX.adc(Limb::MAX, Limb::ONE);
        assert_eq!(res, Limb::MAX);
        assert_eq!(carry, Limb::ONE);
    }
}

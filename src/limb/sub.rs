//! Limb subtraction.

use crate::{Limb, WideWord, Word};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow.
    ///
    /// The borrow is all-ones on underflow and zero otherwise, so it doubles
    /// as a select mask. Only the top bit of the incoming `borrow` is
    /// examined.
    #[inline(always)]
    pub const fn sbb(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let a = self.0 as WideWord;
        let b = rhs.0 as WideWord;
        let borrow = (borrow.0 >> Self::HI_BIT) as WideWord;
        let ret = a.wrapping_sub(b + borrow);
        (Limb(ret as Word), Limb((ret >> Self::BITS) as Word))
    }

    /// Computes `self - rhs`, wrapping on underflow.
    #[inline(always)]
    pub const fn wrapping_sub(self, rhs: Limb) -> Limb {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Limb;

    #[test]
    fn sbb_no_borrow() {
        let (res, borrow) = Limb::ONE.sbb(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn sbb_borrow_is_mask() {
        let (res, borrow) = Limb::ZERO.sbb(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::MAX);

        // incoming borrow mask is consumed as a single unit
        let (res, borrow) = Limb::ONE.sbb(Limb::ZERO, Limb::MAX);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }
}

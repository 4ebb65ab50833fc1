//! Reduction of double-width values against a fixed-width modulus.

use crate::{Limb, Uint};
use subtle::{Choice, ConditionallySelectable};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Reduce `top·2^BITS + self` modulo `m`.
    ///
    /// The top bit of `m` must be set and the input must satisfy
    /// `top·2^BITS + self < 2^64·m`.
    pub(crate) fn reduce_top(&self, top: Limb, m: &Self) -> Self {
        let q = Limb::div2by1(top, self.limbs[LIMBS - 1], m.limbs[LIMBS - 1]);

        let (qm, qm_hi) = m.mul_limb(q);
        let (mut r, borrow) = self.sbb(&qm, Limb::ZERO);
        // signed top word of the remainder, wrapped; negative iff its top
        // bit is set
        let mut t = top.0.wrapping_sub(qm_hi.0).wrapping_sub(borrow.0 & 1);

        // the saturated estimate overshoots by at most two, plus one more
        // word of slack when it clamped; three add-backs always settle it
        let mut round = 0;
        while round < 3 {
            let mask = Limb((t >> Limb::HI_BIT).wrapping_neg());
            let (sum, carry) = r.adc(&m.bitand_limb(mask), Limb::ZERO);
            r = sum;
            t = t.wrapping_add(carry.0);
            round += 1;
        }
        debug_assert_eq!(t, 0);
        r
    }

    /// Reduce the double-width value `hi·2^BITS + lo` modulo `m`.
    ///
    /// The top bit of `m` must be set. Processes one word of `lo` per step,
    /// keeping the running remainder below `m` throughout.
    pub(crate) fn rem_wide(lo: &Self, hi: &Self, m: &Self) -> Self {
        let (diff, borrow) = hi.sbb(m, Limb::ZERO);
        let mut r = Self::conditional_select(&diff, hi, Choice::from((borrow.0 & 1) as u8));

        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            // shift the next word of `lo` in from below
            let mut v = [Limb::ZERO; LIMBS];
            v[0] = lo.limbs[i];
            let mut j = 1;
            while j < LIMBS {
                v[j] = r.limbs[j - 1];
                j += 1;
            }
            let top = r.limbs[LIMBS - 1];
            r = Self { limbs: v }.reduce_top(top, m);
        }
        r
    }
}

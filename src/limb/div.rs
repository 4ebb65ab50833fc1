//! Limb division.

use crate::{Limb, WideWord, Word};

impl Limb {
    /// Quotient estimate for a two-word value divided by a single word:
    /// `min((hi·2^64 + lo) / divisor, Word::MAX)`.
    ///
    /// The divisor must have its most significant bit set. With a normalized
    /// divisor the saturated estimate exceeds the true quotient digit by at
    /// most two, which the callers repair with conditional add-backs.
    #[inline]
    pub(crate) const fn div2by1(hi: Limb, lo: Limb, divisor: Limb) -> Limb {
        debug_assert!(divisor.0 >> Limb::HI_BIT == 1);
        let v = ((hi.0 as WideWord) << Limb::BITS) | (lo.0 as WideWord);
        let q = v / (divisor.0 as WideWord);
        let overflow = ((q >> Limb::BITS) as Word != 0) as Word;
        Limb((q as Word) | overflow.wrapping_neg())
    }
}

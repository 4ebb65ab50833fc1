//! Stack-allocated big unsigned integers.

mod add;
mod add_mod;
mod cmp;
mod div;
mod encoding;
mod mul;
mod shl;
mod shr;
mod sub;
mod sub_mod;

use crate::{Limb, Word};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Stack-allocated big unsigned integer.
///
/// Generic over the given number of `LIMBS`, stored least significant limb
/// first. All widths used by this crate are fixed at compile time; see the
/// `U*` type aliases at the crate root.
#[derive(Copy, Clone, Hash)]
pub struct Uint<const LIMBS: usize> {
    /// Inner limb array, least significant first.
    pub(crate) limbs: [Limb; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self {
        limbs: [Limb::ZERO; LIMBS],
    };

    /// The value `1`.
    pub const ONE: Self = {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0] = Limb::ONE;
        Self { limbs }
    };

    /// Maximum value this integer can express.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = LIMBS as u32 * Limb::BITS;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = LIMBS * Limb::BYTES;

    /// Create a [`Uint`] from an array of [`Word`]s, least significant first.
    pub const fn from_words(words: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            limbs[i] = Limb(words[i]);
            i += 1;
        }
        Self { limbs }
    }

    /// Create a [`Uint`] from a single [`Word`].
    pub const fn from_u64(w: u64) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0] = Limb(w);
        Self { limbs }
    }

    /// Borrow the inner limbs.
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is this value odd?
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.limbs[0].0 & 1) as u8)
    }

    /// Does the most significant bit occupy the full width?
    pub(crate) fn is_full_width(&self) -> bool {
        self.limbs[LIMBS - 1].0 >> Limb::HI_BIT == 1
    }

    /// Extract `width` bits starting at bit `pos`, least significant bit
    /// first. Bits beyond the top of the integer read as zero.
    ///
    /// The position and width are public; only the extracted value is
    /// sensitive. `width` must be at most 6 bits and `pos` in range.
    pub(crate) fn window(&self, pos: u32, width: u32) -> Word {
        debug_assert!(width <= 6 && pos < Self::BITS);
        let limb = (pos / Limb::BITS) as usize;
        let shift = pos % Limb::BITS;
        let mut w = self.limbs[limb].0 >> shift;
        if shift + width > Limb::BITS && limb + 1 < LIMBS {
            w |= self.limbs[limb + 1].0 << (Limb::BITS - shift);
        }
        w & ((1 << width) - 1)
    }

    /// Extract the bit at position `pos` (0 or 1). The position is public.
    pub(crate) fn bit(&self, pos: u32) -> Word {
        debug_assert!(pos < Self::BITS);
        (self.limbs[(pos / Limb::BITS) as usize].0 >> (pos % Limb::BITS)) & 1
    }

    /// Bitwise AND of every limb with a single mask limb.
    pub(crate) const fn bitand_limb(&self, mask: Limb) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 & mask.0);
            i += 1;
        }
        Self { limbs }
    }

    /// Concatenate two half-width values into `lo + 2^(64·HALF)·hi`.
    ///
    /// `HALF` must be exactly half of `LIMBS`.
    pub(crate) fn concat<const HALF: usize>(lo: &Uint<HALF>, hi: &Uint<HALF>) -> Self {
        debug_assert!(HALF * 2 == LIMBS);
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < HALF {
            limbs[i] = lo.limbs[i];
            limbs[i + HALF] = hi.limbs[i];
            i += 1;
        }
        Self { limbs }
    }

    /// Split into `(lo, hi)` half-width values.
    ///
    /// `HALF` must be exactly half of `LIMBS`.
    pub(crate) fn split<const HALF: usize>(&self) -> (Uint<HALF>, Uint<HALF>) {
        debug_assert!(HALF * 2 == LIMBS);
        let mut lo = Uint::<HALF>::ZERO;
        let mut hi = Uint::<HALF>::ZERO;
        let mut i = 0;
        while i < HALF {
            lo.limbs[i] = self.limbs[i];
            hi.limbs[i] = self.limbs[i + HALF];
            i += 1;
        }
        (lo, hi)
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        for i in 0..LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self { limbs }
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1u8);
        for i in 0..LIMBS {
            acc &= self.limbs[i].ct_eq(&other.limbs[i]);
        }
        acc
    }
}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> zeroize::DefaultIsZeroes for Uint<LIMBS> {}

#[cfg(test)]
mod tests {
    use crate::{U256, Uint};

    #[test]
    fn constants() {
        assert_eq!(U256::BITS, 256);
        assert_eq!(U256::BYTES, 32);
        assert_eq!(U256::ONE.as_limbs()[0].0, 1);
    }

    #[test]
    fn window_across_limbs() {
        let x = U256::from_words([0x8000_0000_0000_0000, 0b101101, 0, 0]);
        assert_eq!(x.window(63, 5), 0b11011);
        assert_eq!(x.window(64, 6), 0b101101);
        assert_eq!(x.window(250, 6), 0);
    }

    #[test]
    fn concat_split_roundtrip() {
        let lo = Uint::<2>::from_words([1, 2]);
        let hi = Uint::<2>::from_words([3, 4]);
        let x = Uint::<4>::concat(&lo, &hi);
        assert_eq!(x, Uint::from_words([1, 2, 3, 4]));
        assert_eq!(x.split(), (lo, hi));
    }
}

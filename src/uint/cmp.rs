//! [`Uint`] comparisons.
//!
//! By default these are all constant-time: the full width is examined with no
//! early exit.

use crate::{Limb, Uint};
use subtle::Choice;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns the truthy value if `self < rhs`.
    pub fn ct_lt(&self, rhs: &Self) -> Choice {
        let (_, borrow) = self.sbb(rhs, Limb::ZERO);
        Choice::from((borrow.0 & 1) as u8)
    }

    /// Returns the truthy value if `self > rhs`.
    pub fn ct_gt(&self, rhs: &Self) -> Choice {
        rhs.ct_lt(self)
    }
}

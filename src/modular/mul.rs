//! Multiplication and squaring in Montgomery form.

use super::{MontyParams, reduction::montgomery_reduction};
use crate::Uint;

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Montgomery-domain product `a·b·R^-1 mod m`.
    pub fn mont_mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        montgomery_reduction(&a.mul_wide(b), &self.modulus, self.mod_neg_inv)
    }

    /// Montgomery-domain square `a^2·R^-1 mod m`.
    pub fn mont_sqr(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        montgomery_reduction(&a.square_wide(), &self.modulus, self.mod_neg_inv)
    }

    /// Convert out of Montgomery form.
    pub fn from_montgomery(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        montgomery_reduction(&(*a, Uint::ZERO), &self.modulus, self.mod_neg_inv)
    }
}

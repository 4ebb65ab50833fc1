//! Arithmetic in the P-256 base field.

use crate::{U256, Word, modular::MontyParams};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The field prime `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
pub(crate) const MODULUS: U256 =
    U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

const PARAMS: MontyParams<4> = MontyParams::new_unchecked(&MODULUS);

/// Element of GF(p), kept in Montgomery form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldElement(pub(crate) U256);

impl FieldElement {
    pub const ZERO: Self = Self(U256::ZERO);

    /// The multiplicative identity, `R mod p`.
    pub const ONE: Self = Self(PARAMS.one);

    /// Convert from canonical form; the input does not need to be reduced.
    pub fn from_canonical(x: &U256) -> Self {
        Self(PARAMS.to_montgomery(x))
    }

    /// Convert back to canonical form.
    pub fn to_canonical(self) -> U256 {
        PARAMS.from_montgomery(&self.0)
    }

    /// Construct from raw Montgomery-form words, least significant first.
    pub const fn from_montgomery_words(words: [Word; 4]) -> Self {
        Self(U256::from_words(words))
    }

    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add_mod(&rhs.0, &MODULUS))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.sub_mod(&rhs.0, &MODULUS))
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    pub fn triple(&self) -> Self {
        self.double().add(self)
    }

    pub fn half(&self) -> Self {
        Self(self.0.div2_mod(&MODULUS))
    }

    pub fn neg(&self) -> Self {
        Self(self.0.neg_mod(&MODULUS))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(PARAMS.mont_mul(&self.0, &rhs.0))
    }

    pub fn square(&self) -> Self {
        Self(PARAMS.mont_sqr(&self.0))
    }

    /// `count` successive squarings.
    pub fn sqn(&self, count: usize) -> Self {
        let mut x = *self;
        for _ in 0..count {
            x = x.square();
        }
        x
    }

    /// Multiplicative inverse via an addition chain for `p - 2`, mapping
    /// zero to zero.
    pub fn invert(&self) -> Self {
        let s = self;
        let t111 = s.mul(&s.mul(&s.square()).square());
        let t111111 = t111.mul(&t111.sqn(3));
        let x15 = t111111.sqn(6).mul(&t111111).sqn(3).mul(&t111);
        let x16 = x15.square().mul(s);
        let i53 = x16.sqn(16).mul(&x16).sqn(15);
        let x47 = x15.mul(&i53);
        let r = x47.mul(&i53.sqn(17).mul(s).sqn(143).mul(&x47).sqn(47));
        r.sqn(2).mul(s)
    }

    /// Square root via an addition chain for `(p + 1)/4`.
    ///
    /// If the input is not a quadratic residue the result is some field
    /// element whose square is not the input; callers that care must square
    /// and compare.
    pub fn sqrt(&self) -> Self {
        let s = self;
        let t11 = s.mul(&s.square());
        let t1111 = t11.mul(&t11.sqn(2));
        let t11111111 = t1111.mul(&t1111.sqn(4));
        let x16 = t11111111.sqn(8).mul(&t11111111);
        x16.sqn(16).mul(&x16).sqn(32).mul(s).sqn(96).mul(s).sqn(94)
    }
}

impl ConditionallySelectable for FieldElement {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl zeroize::DefaultIsZeroes for FieldElement {}

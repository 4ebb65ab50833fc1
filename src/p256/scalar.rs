//! Arithmetic modulo the P-256 group order.

use crate::{U256, modular::MontyParams};
use subtle::{Choice, ConstantTimeEq};

/// The group order `n`.
pub(crate) const ORDER: U256 =
    U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// `n - 2`, the inversion exponent.
const ORDER_MINUS_TWO: U256 =
    U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc63254f");

const PARAMS: MontyParams<4> = MontyParams::new_unchecked(&ORDER);

/// Element of the scalar field GF(n), kept in Montgomery form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Scalar(U256);

impl Scalar {
    /// The multiplicative identity, `R mod n`.
    pub const ONE: Self = Self(PARAMS.one);

    /// Convert from canonical form; the input does not need to be reduced.
    pub fn from_canonical(x: &U256) -> Self {
        Self(PARAMS.to_montgomery(x))
    }

    /// Convert back to canonical form.
    pub fn to_canonical(self) -> U256 {
        PARAMS.from_montgomery(&self.0)
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add_mod(&rhs.0, &ORDER))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(PARAMS.mont_mul(&self.0, &rhs.0))
    }

    pub fn square(&self) -> Self {
        Self(PARAMS.mont_sqr(&self.0))
    }

    /// Multiplicative inverse by exponentiation with `n - 2`.
    ///
    /// The exponent is a public constant, so the multiply-on-set-bit ladder
    /// leaks nothing about the operand.
    pub fn invert(&self) -> Self {
        let mut z = Self::ONE;
        let mut i = U256::BITS;
        while i > 0 {
            i -= 1;
            z = z.square();
            if ORDER_MINUS_TWO.bit(i) == 1 {
                z = z.mul(self);
            }
        }
        z
    }
}

impl ConstantTimeEq for Scalar {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl zeroize::DefaultIsZeroes for Scalar {}

#[cfg(test)]
mod tests {
    use super::{ORDER, Scalar};
    use crate::U256;

    #[test]
    fn invert_small() {
        let x = Scalar::from_canonical(&U256::from_u64(3));
        assert_eq!(x.mul(&x.invert()), Scalar::ONE);
    }

    #[test]
    fn add_wraps_at_order() {
        let nm1 = Scalar::from_canonical(&ORDER.wrapping_sub(&U256::ONE));
        let sum = nm1.add(&Scalar::from_canonical(&U256::ONE));
        assert_eq!(sum.to_canonical(), U256::ZERO);
    }

    #[test]
    fn from_canonical_reduces() {
        assert_eq!(Scalar::from_canonical(&ORDER).to_canonical(), U256::ZERO);
    }
}

//! Montgomery reduction, HAC 14.32.

use crate::{Limb, Uint};

/// Reduce the double-width value `upper·2^BITS + lower` by the Montgomery
/// radix, yielding `value·R^-1 mod modulus`.
pub(crate) const fn montgomery_reduction<const LIMBS: usize>(
    lower_upper: &(Uint<LIMBS>, Uint<LIMBS>),
    modulus: &Uint<LIMBS>,
    mod_neg_inv: Limb,
) -> Uint<LIMBS> {
    let (mut lower, mut upper) = (lower_upper.0, lower_upper.1);
    let mut meta_carry = Limb::ZERO;

    let mut i = 0;
    while i < LIMBS {
        let u = Limb(lower.limbs[i].0.wrapping_mul(mod_neg_inv.0));
        let (_, mut carry) = u.carrying_mul_add(modulus.limbs[0], lower.limbs[i], Limb::ZERO);

        let mut j = 1;
        while j < LIMBS - i {
            (lower.limbs[i + j], carry) =
                u.carrying_mul_add(modulus.limbs[j], lower.limbs[i + j], carry);
            j += 1;
        }
        while j < LIMBS {
            (upper.limbs[i + j - LIMBS], carry) =
                u.carrying_mul_add(modulus.limbs[j], upper.limbs[i + j - LIMBS], carry);
            j += 1;
        }

        (upper.limbs[i], meta_carry) = upper.limbs[i].adc(carry, meta_carry);
        i += 1;
    }

    // division by R is taking the upper half; one conditional subtraction
    // settles the result below the modulus
    upper.sub_mod_with_carry(meta_carry, modulus, modulus)
}

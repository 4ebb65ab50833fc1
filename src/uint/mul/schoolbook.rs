//! Schoolbook multiplication a.k.a. long multiplication, i.e. the traditional
//! method taught in schools.
//!
//! The most efficient method for small numbers.

use crate::Limb;

/// Schoolbook multiplication of two equal-length limb slices into the
/// `lo`/`hi` halves of the double-width product.
#[inline(always)]
pub(crate) const fn mul_wide(lhs: &[Limb], rhs: &[Limb], lo: &mut [Limb], hi: &mut [Limb]) {
    assert!(
        lhs.len() == rhs.len() && lhs.len() == lo.len() && lhs.len() == hi.len(),
        "schoolbook multiplication length mismatch"
    );

    let n = lhs.len();
    let mut i = 0;
    while i < n {
        let mut carry = Limb::ZERO;
        let xi = lhs[i];
        let mut j = 0;

        while j < n {
            let k = i + j;
            if k >= n {
                (hi[k - n], carry) = xi.carrying_mul_add(rhs[j], hi[k - n], carry);
            } else {
                (lo[k], carry) = xi.carrying_mul_add(rhs[j], lo[k], carry);
            }
            j += 1;
        }

        if i + j >= n {
            hi[i + j - n] = carry;
        } else {
            lo[i + j] = carry;
        }
        i += 1;
    }
}

/// Schoolbook method of squaring.
///
/// Like schoolbook multiplication, but only considering half of the
/// multiplication grid: accumulate the off-diagonal triangle, double it, then
/// add the diagonal.
#[inline(always)]
pub(crate) const fn square_wide(limbs: &[Limb], lo: &mut [Limb], hi: &mut [Limb]) {
    assert!(
        limbs.len() == lo.len() && lo.len() == hi.len(),
        "schoolbook squaring length mismatch"
    );

    let n = limbs.len();

    // off-diagonal triangle; never touches hi[n - 1]
    let mut i = 1;
    while i < n {
        let mut carry = Limb::ZERO;
        let xi = limbs[i];
        let mut j = 0;
        while j < i {
            let k = i + j;
            if k >= n {
                (hi[k - n], carry) = xi.carrying_mul_add(limbs[j], hi[k - n], carry);
            } else {
                (lo[k], carry) = xi.carrying_mul_add(limbs[j], lo[k], carry);
            }
            j += 1;
        }
        if 2 * i < n {
            lo[2 * i] = carry;
        } else {
            hi[2 * i - n] = carry;
        }
        i += 1;
    }

    // double it, carrying into the untouched top word
    let mut carry = Limb::ZERO;
    let mut i = 0;
    while i < n {
        let w = lo[i].0;
        lo[i] = Limb((w << 1) | carry.0);
        carry = Limb(w >> Limb::HI_BIT);
        i += 1;
    }
    let mut i = 0;
    while i < n - 1 {
        let w = hi[i].0;
        hi[i] = Limb((w << 1) | carry.0);
        carry = Limb(w >> Limb::HI_BIT);
        i += 1;
    }
    hi[n - 1] = carry;

    // the diagonal finishes the grid
    let mut carry = Limb::ZERO;
    let mut i = 0;
    while i < n {
        let xi = limbs[i];
        if 2 * i < n {
            (lo[2 * i], carry) = xi.carrying_mul_add(xi, lo[2 * i], carry);
        } else {
            (hi[2 * i - n], carry) = xi.carrying_mul_add(xi, hi[2 * i - n], carry);
        }
        if 2 * i + 1 < n {
            (lo[2 * i + 1], carry) = lo[2 * i + 1].adc(Limb::ZERO, carry);
        } else {
            (hi[2 * i + 1 - n], carry) = hi[2 * i + 1 - n].adc(Limb::ZERO, carry);
        }
        i += 1;
    }
}

//! Scalar multiplication ladders.
//!
//! Arbitrary points use a signed 6-bit window over a 33-entry table built
//! per call. The base point uses a precomputed 256-entry stripe table
//! instead, which replaces the table build and most doublings with mixed
//! additions. Both ladders scan all 256 scalar bits and gather table
//! entries with full constant-time scans.

use super::{
    field::FieldElement,
    point::ProjectivePoint,
    table::{BASE_TABLE, TableEntry},
};
use crate::{Limb, U256, Word};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Signed digits per scalar: `ceil(256 / 6) = 43`.
const DIGITS: usize = 43;

/// One signed window digit: a magnitude in `0..=32` and a sign.
#[derive(Copy, Clone, Default)]
struct Digit {
    mag: Word,
    neg: Word,
}

impl zeroize::DefaultIsZeroes for Digit {}

/// Recode a scalar into 43 signed 6-bit digits with magnitudes `0..=32`,
/// so that `sum(±mag_i · 2^(6i))` equals the scalar. Branch-free.
fn recode_6(k: &U256) -> [Digit; DIGITS] {
    let mut digits = [Digit::default(); DIGITS];
    let mut carry: Word = 0;
    for (i, digit) in digits.iter_mut().enumerate() {
        let v = k.window(6 * i as u32, 6) + carry;
        // v > 32 becomes 64 - v with a carry into the next window
        let neg = 32u64.wrapping_sub(v) >> (Limb::BITS - 1);
        let mag = Word::conditional_select(&v, &(64 - v), Choice::from(neg as u8));
        *digit = Digit { mag, neg };
        carry = neg;
    }
    // the top window holds at most 4 bits, so the final carry is absorbed
    debug_assert_eq!(carry, 0);
    digits
}

/// Multiply an arbitrary point by a scalar, constant time in the scalar.
pub(crate) fn scalar_mul(k: &U256, point: &ProjectivePoint) -> ProjectivePoint {
    // table[i] = i·P for i in 0..=32, odd entries filled by paired
    // add/sub off the even ones
    let mut table = [ProjectivePoint::identity(); 33];
    table[1] = *point;
    for i in 1..16 {
        table[2 * i] = table[i].double();
        let (sum, diff) = table[2 * i].add_sub(&table[1]);
        table[2 * i + 1] = sum;
        if 2 * i - 1 != 1 {
            table[2 * i - 1] = diff;
        }
    }
    table[32] = table[16].double();

    let mut digits = recode_6(k);
    let mut acc = ProjectivePoint::identity();
    for (i, digit) in digits.iter().rev().enumerate() {
        if i != 0 {
            acc = acc.double_n(6);
        }
        let mut sel = table[0];
        for (j, entry) in table.iter().enumerate().skip(1) {
            sel = ProjectivePoint::conditional_select(&sel, entry, (j as Word).ct_eq(&digit.mag));
        }
        sel.y = FieldElement::conditional_select(&sel.y, &sel.y.neg(), Choice::from(digit.neg as u8));
        acc = acc.add(&sel);
    }
    digits.zeroize();
    acc
}

/// Multiply the base point by a scalar using the stripe table, constant
/// time in the scalar.
pub(crate) fn scalar_mul_base(k: &U256) -> ProjectivePoint {
    stripe_mul(&BASE_TABLE, k)
}

/// Stripe ladder: bit `32·i + bpos` of the scalar selects stripe `i`, and
/// the eight stripe bits at each position index one precomputed sum.
pub(crate) fn stripe_mul(table: &[TableEntry; 256], k: &U256) -> ProjectivePoint {
    let mut acc = ProjectivePoint::identity();
    let mut bpos = 32;
    while bpos > 0 {
        bpos -= 1;
        acc = acc.double();

        let mut idx: Word = 0;
        for i in 0..8 {
            idx |= k.bit(32 * i + bpos) << i;
        }
        let mut x = U256::ZERO;
        let mut y = U256::ZERO;
        for (j, entry) in table.iter().enumerate() {
            let pick = (j as Word).ct_eq(&idx);
            x.conditional_assign(&entry.x, pick);
            y.conditional_assign(&entry.y, pick);
        }
        // entry 0 is stored as all-zero words and means infinity
        let infinity = x.is_zero() & y.is_zero();
        acc = acc.add_affine(&FieldElement(x), &FieldElement(y), infinity);
    }
    acc
}

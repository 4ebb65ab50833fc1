//! One level of Karatsuba multiplication over fixed-width limb slices.
//!
//! Split x and y into halves at b = 2^(64·h):
//!
//! x·y = p0 + (s1·s2 - p0 - p2)·b + p2·b^2
//!
//! where p0 = x0·y0, p2 = x1·y1, s1 = x0 + x1 and s2 = y0 + y1. The half
//! sums may carry; the cross term is repaired with masked additions of s1,
//! s2 and the carry product at the appropriate offsets, so the whole
//! combination is branch-free. The three half-width products use the
//! schoolbook routine.
//!
//! Only a single level is applied: recursing further does not pay off at the
//! widths this crate handles.

use super::schoolbook;
use crate::Limb;

/// Largest half-width in limbs (4096-bit operands).
const MAX_HALF: usize = 32;

/// Read the conceptual `lo ‖ hi` double-width accumulator at index `i`.
#[inline(always)]
fn get(lo: &[Limb], hi: &[Limb], i: usize) -> Limb {
    if i < lo.len() { lo[i] } else { hi[i - lo.len()] }
}

/// Write the conceptual `lo ‖ hi` double-width accumulator at index `i`.
#[inline(always)]
fn put(lo: &mut [Limb], hi: &mut [Limb], i: usize, v: Limb) {
    if i < lo.len() {
        lo[i] = v;
    } else {
        hi[i - lo.len()] = v;
    }
}

/// `acc += (val & mask) << (64·pos)`, propagating the carry through the top.
///
/// The final carry always falls off the end: callers only add terms that
/// keep the accumulator within the double-width product range.
fn add_at(lo: &mut [Limb], hi: &mut [Limb], pos: usize, val: &[Limb], mask: Limb) {
    let n = lo.len() + hi.len();
    let mut carry = Limb::ZERO;
    let mut i = pos;
    for &v in val {
        let (w, c) = get(lo, hi, i).adc(Limb(v.0 & mask.0), carry);
        put(lo, hi, i, w);
        carry = c;
        i += 1;
    }
    while i < n {
        let (w, c) = get(lo, hi, i).adc(Limb::ZERO, carry);
        put(lo, hi, i, w);
        carry = c;
        i += 1;
    }
}

/// `acc += w << (64·pos)`, propagating the carry through the top.
fn add_word_at(lo: &mut [Limb], hi: &mut [Limb], pos: usize, w: Limb) {
    let n = lo.len() + hi.len();
    let mut carry = w;
    let mut i = pos;
    while i < n {
        let (v, c) = get(lo, hi, i).adc(carry, Limb::ZERO);
        put(lo, hi, i, v);
        carry = c;
        i += 1;
    }
}

/// `acc -= w << (64·pos)`, propagating the borrow through the top.
fn sub_word_at(lo: &mut [Limb], hi: &mut [Limb], pos: usize, w: Limb) {
    let n = lo.len() + hi.len();
    let mut borrow;
    let (v, b) = get(lo, hi, pos).sbb(w, Limb::ZERO);
    put(lo, hi, pos, v);
    borrow = b;
    let mut i = pos + 1;
    while i < n {
        let (v, b) = get(lo, hi, i).sbb(Limb::ZERO, borrow);
        put(lo, hi, i, v);
        borrow = b;
        i += 1;
    }
}

/// `a += b` over equal-length slices, returning the carry (0 or 1).
fn add_assign(a: &mut [Limb], b: &[Limb]) -> Limb {
    let mut carry = Limb::ZERO;
    for (x, &y) in a.iter_mut().zip(b) {
        let (w, c) = x.adc(y, carry);
        *x = w;
        carry = c;
    }
    carry
}

/// Karatsuba multiplication of two equal-length limb slices into the
/// `lo`/`hi` halves of the double-width product.
pub(crate) fn mul_wide(x: &[Limb], y: &[Limb], lo: &mut [Limb], hi: &mut [Limb]) {
    let n = x.len();
    assert!(
        n == y.len() && n == lo.len() && n == hi.len() && n % 2 == 0 && n / 2 <= MAX_HALF,
        "karatsuba multiplication length mismatch"
    );
    let h = n / 2;
    let (x0, x1) = x.split_at(h);
    let (y0, y1) = y.split_at(h);

    // p0 and p2 land directly in the output
    {
        let (out0, out1) = lo.split_at_mut(h);
        schoolbook::mul_wide(x0, y0, out0, out1);
    }
    {
        let (out2, out3) = hi.split_at_mut(h);
        schoolbook::mul_wide(x1, y1, out2, out3);
    }

    // half sums, with their carries kept aside
    let mut s1 = [Limb::ZERO; MAX_HALF];
    let mut s2 = [Limb::ZERO; MAX_HALF];
    let s1 = &mut s1[..h];
    let s2 = &mut s2[..h];
    s1.copy_from_slice(x0);
    s2.copy_from_slice(y0);
    let c1 = add_assign(s1, x1);
    let c2 = add_assign(s2, y1);

    // cross product s1·s2 - p0 - p2; borrows are repaired at offset 3h
    let mut mid = [Limb::ZERO; 2 * MAX_HALF];
    let mid = &mut mid[..n];
    let borrows;
    {
        let (mid0, mid1) = mid.split_at_mut(h);
        schoolbook::mul_wide(s1, s2, mid0, mid1);
        let b0 = sub_assign_pair(mid0, mid1, lo);
        let b1 = sub_assign_pair(mid0, mid1, hi);
        borrows = b0.wrapping_add(b1);
    }

    add_at(lo, hi, h, mid, Limb::MAX);
    sub_word_at(lo, hi, 3 * h, borrows);

    // carry cross terms: c1·s2 and c2·s1 at offset 2h, c1·c2 at offset 3h
    add_at(lo, hi, 2 * h, s2, Limb(c1.0.wrapping_neg()));
    add_at(lo, hi, 2 * h, s1, Limb(c2.0.wrapping_neg()));
    add_word_at(lo, hi, 3 * h, Limb(c1.0 & c2.0));
}

/// `(a0 ‖ a1) -= b` where `b` spans both halves; returns the borrow.
fn sub_assign_pair(a0: &mut [Limb], a1: &mut [Limb], b: &[Limb]) -> Limb {
    let h = a0.len();
    let mut borrow = Limb::ZERO;
    for (x, &y) in a0.iter_mut().zip(&b[..h]) {
        let (w, b2) = x.sbb(y, borrow);
        *x = w;
        borrow = b2;
    }
    for (x, &y) in a1.iter_mut().zip(&b[h..]) {
        let (w, b2) = x.sbb(y, borrow);
        *x = w;
        borrow = b2;
    }
    Limb(borrow.0 & 1)
}

/// Karatsuba squaring into the `lo`/`hi` halves of the double-width product.
///
/// Same structure as [`mul_wide`] with a single half sum s = x0 + x1:
/// the cross term becomes s^2 - p0 - p2, and a carry on s contributes
/// 2·s·b^2 + b^3.
pub(crate) fn square_wide(x: &[Limb], lo: &mut [Limb], hi: &mut [Limb]) {
    let n = x.len();
    assert!(
        n == lo.len() && n == hi.len() && n % 2 == 0 && n / 2 <= MAX_HALF,
        "karatsuba squaring length mismatch"
    );
    let h = n / 2;
    let (x0, x1) = x.split_at(h);

    {
        let (out0, out1) = lo.split_at_mut(h);
        schoolbook::square_wide(x0, out0, out1);
    }
    {
        let (out2, out3) = hi.split_at_mut(h);
        schoolbook::square_wide(x1, out2, out3);
    }

    let mut s = [Limb::ZERO; MAX_HALF];
    let s = &mut s[..h];
    s.copy_from_slice(x0);
    let c = add_assign(s, x1);

    let mut mid = [Limb::ZERO; 2 * MAX_HALF];
    let mid = &mut mid[..n];
    let borrows;
    {
        let (mid0, mid1) = mid.split_at_mut(h);
        schoolbook::square_wide(s, mid0, mid1);
        let b0 = sub_assign_pair(mid0, mid1, lo);
        let b1 = sub_assign_pair(mid0, mid1, hi);
        borrows = b0.wrapping_add(b1);
    }

    add_at(lo, hi, h, mid, Limb::MAX);
    sub_word_at(lo, hi, 3 * h, borrows);

    let cmask = Limb(c.0.wrapping_neg());
    add_at(lo, hi, 2 * h, s, cmask);
    add_at(lo, hi, 2 * h, s, cmask);
    add_word_at(lo, hi, 3 * h, c);
}

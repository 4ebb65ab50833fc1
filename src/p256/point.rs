//! P-256 points in Jacobian projective coordinates.
//!
//! Coordinates are Montgomery-form field elements. The point at infinity is
//! carried as an explicit flag so the group operations can be branch-free:
//! every formula is evaluated unconditionally and the exceptional cases are
//! folded in with constant-time selects afterwards.

use super::field::FieldElement;
use crate::U256;
use subtle::{Choice, ConditionallySelectable};

/// Curve coefficient `b`, Montgomery form.
pub(crate) const CURVE_B: FieldElement = FieldElement::from_montgomery_words([
    0xd89cdf6229c4bddf,
    0xacf005cd78843090,
    0xe5a220abf7212ed6,
    0xdc30061d04874834,
]);

/// Base point x coordinate, Montgomery form.
#[cfg(test)]
pub(crate) const GENERATOR_X: FieldElement = FieldElement::from_montgomery_words([
    0x79e730d418a9143c,
    0x75ba95fc5fedb601,
    0x79fb732b77622510,
    0x18905f76a53755c6,
]);

/// Base point y coordinate, Montgomery form.
#[cfg(test)]
pub(crate) const GENERATOR_Y: FieldElement = FieldElement::from_montgomery_words([
    0xddf25357ce95560a,
    0x8b4ab8e4ba19e45c,
    0xd2e88688dd21f325,
    0x8571ff1825885d85,
]);

/// Point on P-256 in Jacobian coordinates `(X/Z^2, Y/Z^3)`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
    pub infinity: Choice,
}

impl ProjectivePoint {
    /// The point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ZERO,
            infinity: Choice::from(1),
        }
    }

    /// The base point.
    #[cfg(test)]
    pub fn generator() -> Self {
        Self {
            x: GENERATOR_X,
            y: GENERATOR_Y,
            z: FieldElement::ONE,
            infinity: Choice::from(0),
        }
    }

    /// Import an affine point given by canonical coordinates.
    pub fn from_affine_canonical(x: &U256, y: &U256) -> Self {
        Self {
            x: FieldElement::from_canonical(x),
            y: FieldElement::from_canonical(y),
            z: FieldElement::ONE,
            infinity: Choice::from(0),
        }
    }

    /// Point doubling, `a = -3` formulas.
    pub fn double(&self) -> Self {
        let t1 = self.z.square();
        let z = self.y.mul(&self.z).double();
        let t2 = self.x.sub(&t1);
        let t1 = self.x.add(&t1);
        let t2 = t1.mul(&t2);
        let m = t2.triple();
        let y4 = self.y.double().square();
        let t8 = y4.square().half();
        let s = y4.mul(&self.x);
        let x = m.square().sub(&s).sub(&s);
        let y = s.sub(&x).mul(&m).sub(&t8);
        let out = Self {
            x,
            y,
            z,
            infinity: Choice::from(0),
        };
        Self::conditional_select(&out, self, self.infinity)
    }

    /// Full point addition.
    pub fn add(&self, rhs: &Self) -> Self {
        let t1 = rhs.z.square();
        let u1 = self.x.mul(&t1);
        let s1 = self.y.mul(&t1.mul(&rhs.z));
        let t2 = self.z.square();
        let u2 = rhs.x.mul(&t2);
        let s2 = rhs.y.mul(&t2.mul(&self.z));
        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        let z3 = self.z.mul(&rhs.z).mul(&h);
        let h2 = h.square();
        let h3 = h2.mul(&h);
        let u1h2 = u1.mul(&h2);
        let x3 = r.square().sub(&h3).sub(&u1h2.double());
        let y3 = r.mul(&u1h2.sub(&x3)).sub(&s1.mul(&h3));

        let mut out = Self {
            x: x3,
            y: y3,
            z: z3,
            infinity: Choice::from(0),
        };
        // exceptional cases, in order: an infinite operand passes the other
        // through; equal x means doubling or cancellation
        out = Self::conditional_select(&out, rhs, self.infinity);
        out = Self::conditional_select(&out, self, rhs.infinity);
        let same_x = h.is_zero() & !self.infinity & !rhs.infinity;
        let same_y = r.is_zero();
        out = Self::conditional_select(&out, &self.double(), same_x & same_y);
        out = Self::conditional_select(&out, &Self::identity(), same_x & !same_y);
        out
    }

    /// Mixed addition with an affine point (`Z2 = 1`, Montgomery-form
    /// coordinates, infinity carried as a flag).
    pub fn add_affine(&self, x2: &FieldElement, y2: &FieldElement, rhs_infinity: Choice) -> Self {
        let t2 = self.z.square();
        let u2 = x2.mul(&t2);
        let s2 = y2.mul(&t2.mul(&self.z));
        let h = u2.sub(&self.x);
        let r = s2.sub(&self.y);

        let z3 = self.z.mul(&h);
        let h2 = h.square();
        let h3 = h2.mul(&h);
        let u1h2 = self.x.mul(&h2);
        let x3 = r.square().sub(&h3).sub(&u1h2.double());
        let y3 = r.mul(&u1h2.sub(&x3)).sub(&self.y.mul(&h3));

        let rhs = Self {
            x: *x2,
            y: *y2,
            z: FieldElement::ONE,
            infinity: rhs_infinity,
        };
        let mut out = Self {
            x: x3,
            y: y3,
            z: z3,
            infinity: Choice::from(0),
        };
        out = Self::conditional_select(&out, &rhs, self.infinity);
        out = Self::conditional_select(&out, self, rhs_infinity);
        let same_x = h.is_zero() & !self.infinity & !rhs_infinity;
        let same_y = r.is_zero();
        out = Self::conditional_select(&out, &self.double(), same_x & same_y);
        out = Self::conditional_select(&out, &Self::identity(), same_x & !same_y);
        out
    }

    /// Computes `(self + rhs, self - rhs)` sharing the common subterms.
    ///
    /// Both operands must be finite and neither equal nor negations of each
    /// other; the window-table construction guarantees this.
    pub fn add_sub(&self, rhs: &Self) -> (Self, Self) {
        let t1 = rhs.z.square();
        let u1 = self.x.mul(&t1);
        let s1 = self.y.mul(&t1.mul(&rhs.z));
        let t2 = self.z.square();
        let u2 = rhs.x.mul(&t2);
        let s2 = rhs.y.mul(&t2.mul(&self.z));
        let h = u2.sub(&u1);
        let ra = s2.sub(&s1);
        let rs = s2.neg().sub(&s1);

        let z3 = self.z.mul(&rhs.z).mul(&h);
        let h2 = h.square();
        let h3 = h2.mul(&h);
        let u1h2 = u1.mul(&h2);
        let s1h3 = s1.mul(&h3);

        let xa = ra.square().sub(&h3).sub(&u1h2.double());
        let ya = ra.mul(&u1h2.sub(&xa)).sub(&s1h3);
        let xs = rs.square().sub(&h3).sub(&u1h2.double());
        let ys = rs.mul(&u1h2.sub(&xs)).sub(&s1h3);

        let sum = Self {
            x: xa,
            y: ya,
            z: z3,
            infinity: Choice::from(0),
        };
        let diff = Self {
            x: xs,
            y: ys,
            z: z3,
            infinity: Choice::from(0),
        };
        (sum, diff)
    }

    /// `count` doublings at once, sharing the `Z` powers across iterations
    /// (Hankerson-Menezes-Vanstone repeated doubling, `a = -3`).
    pub fn double_n(&self, count: usize) -> Self {
        debug_assert!(count > 0);
        let mut x = self.x;
        let mut y = self.y.double();
        let mut z = self.z;
        let mut w = z.square().square();

        let mut i = count;
        while i > 0 {
            let a = x.square().sub(&w).triple();
            let b = x.mul(&y.square());
            x = a.square().sub(&b.double());
            z = z.mul(&y);
            i -= 1;
            let y4 = y.square().square();
            if i > 0 {
                w = w.mul(&y4);
            }
            y = a.double().mul(&b.sub(&x)).sub(&y4);
        }
        y = y.half();

        let out = Self {
            x,
            y,
            z,
            infinity: Choice::from(0),
        };
        Self::conditional_select(&out, self, self.infinity)
    }

    /// Normalize to affine Montgomery-form coordinates.
    ///
    /// Must not be called on the point at infinity.
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        let zi = self.z.invert();
        let zi2 = zi.square();
        (self.x.mul(&zi2), self.y.mul(&zi2.mul(&zi)))
    }
}

impl ConditionallySelectable for ProjectivePoint {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

//! NIST P-256: key generation, ECDSA signing and verification, ECDH key
//! agreement, point validation and point compression.

#[cfg(feature = "alloc")]
mod cache;
mod field;
mod mul;
mod point;
mod scalar;
mod table;

#[cfg(feature = "alloc")]
pub use cache::{PointCache, scalar_mul_cached};

use crate::{Error, Limb, Result, U256};
use field::FieldElement;
use point::{CURVE_B, ProjectivePoint};
use rand_core::TryCryptoRng;
use scalar::{ORDER, Scalar};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Attempts at drawing a usable random scalar before giving up.
const MAX_SIG_GEN: usize = 64;

/// P-256 secret scalar in the range `[1, n-1]`, zeroized on drop.
#[derive(Clone)]
pub struct SecretKey(U256);

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl SecretKey {
    /// Import a big-endian scalar.
    ///
    /// Returns [`Error::OutOfRange`] unless the value lies in `[1, n-1]`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let k = U256::from_be_slice(bytes)?;
        if bool::from(k.is_zero()) || !bool::from(k.ct_lt(&ORDER)) {
            return Err(Error::OutOfRange);
        }
        Ok(Self(k))
    }

    /// Draw a scalar in `[1, n-1]` by rejection sampling.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let limit = ORDER.wrapping_sub(&U256::from_u64(2));
        for _ in 0..MAX_SIG_GEN {
            let mut bytes = [0u8; 32];
            rng.try_fill_bytes(&mut bytes).map_err(|_| Error::Random)?;
            let mut k = U256::from_be_slice(&bytes)?;
            bytes.zeroize();
            if bool::from(k.ct_lt(&limit)) {
                return Ok(Self(k.wrapping_add(&U256::ONE)));
            }
            k.zeroize();
        }
        Err(Error::Random)
    }

    /// Export the scalar as big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.0.write_be_bytes(&mut out);
        out
    }

    /// Compute the public key for this secret scalar.
    pub fn public_key(&self) -> Result<PublicKey> {
        scalar_mul_base(&self.0)
    }
}

/// P-256 public key as affine coordinates in canonical (non-Montgomery)
/// form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// Affine x coordinate.
    pub x: U256,
    /// Affine y coordinate.
    pub y: U256,
}

/// ECDSA signature as a pair of scalars.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The `r` component, `(k·G).x mod n`.
    pub r: U256,
    /// The `s` component, `k^-1 (e + r·d) mod n`.
    pub s: U256,
}

fn point_to_public(p: &ProjectivePoint) -> Result<PublicKey> {
    if bool::from(p.infinity) {
        return Err(Error::PointAtInfinity);
    }
    let (x, y) = p.to_affine();
    Ok(PublicKey {
        x: x.to_canonical(),
        y: y.to_canonical(),
    })
}

/// Multiply the base point by `k`, constant time in `k`.
///
/// Returns [`Error::PointAtInfinity`] when the product is the point at
/// infinity, i.e. when `k` is zero or a multiple of the group order.
pub fn scalar_mul_base(k: &U256) -> Result<PublicKey> {
    point_to_public(&mul::scalar_mul_base(k))
}

/// Multiply an arbitrary point by `k`, constant time in `k`.
///
/// The point is not validated; see [`check_key`].
pub fn scalar_mul(k: &U256, point: &PublicKey) -> Result<PublicKey> {
    let p = ProjectivePoint::from_affine_canonical(&point.x, &point.y);
    point_to_public(&mul::scalar_mul(k, &p))
}

/// Generate a key pair from the given random source.
///
/// With the `validate-keygen` feature the generated public key is run
/// through [`check_key`] before being returned.
pub fn generate_keypair<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<(SecretKey, PublicKey)> {
    let secret = SecretKey::random(rng)?;
    let public = scalar_mul_base(&secret.0)?;
    #[cfg(feature = "validate-keygen")]
    check_key(&public)?;
    Ok((secret, public))
}

/// ECDH: the x coordinate of `secret · peer`, as 32 big-endian bytes.
///
/// Constant time in the secret scalar. The peer point is not validated;
/// run [`check_key`] on untrusted points first.
pub fn diffie_hellman(secret: &SecretKey, peer: &PublicKey) -> Result<[u8; 32]> {
    let p = ProjectivePoint::from_affine_canonical(&peer.x, &peer.y);
    let shared = mul::scalar_mul(&secret.0, &p);
    if bool::from(shared.infinity) {
        return Err(Error::PointAtInfinity);
    }
    let (x, _) = shared.to_affine();
    let mut out = [0u8; 32];
    x.to_canonical().write_be_bytes(&mut out);
    Ok(out)
}

/// Reduce a message digest to a scalar: keep the leftmost 32 bytes, then
/// subtract the order once if needed.
fn truncate_hash(hash: &[u8]) -> Result<U256> {
    let len = hash.len().min(32);
    let e = U256::from_be_slice(&hash[..len])?;
    let (diff, borrow) = e.sbb(&ORDER, Limb::ZERO);
    Ok(U256::conditional_select(
        &diff,
        &e,
        Choice::from((borrow.0 & 1) as u8),
    ))
}

/// ECDSA-sign a message digest.
///
/// The digest is truncated to its leftmost 32 bytes. When `nonce` is given
/// it is consumed for the first attempt (deterministic signing per RFC
/// 6979 feeds the derived `k` in here); otherwise, and on retries, the
/// nonce is drawn from `rng`. Constant time in the key and the nonce.
pub fn sign<R: TryCryptoRng + ?Sized>(
    hash: &[u8],
    key: &SecretKey,
    rng: &mut R,
    mut nonce: Option<SecretKey>,
) -> Result<Signature> {
    let e = truncate_hash(hash)?;
    let em = Scalar::from_canonical(&e);
    let mut dm = Scalar::from_canonical(&key.0);

    for _ in 0..MAX_SIG_GEN {
        let k = match nonce.take() {
            Some(k) => k,
            None => SecretKey::random(rng)?,
        };

        let (x, _) = mul::scalar_mul_base(&k.0).to_affine();
        let x = x.to_canonical();
        // r = x mod n; x < p < 2n, so one conditional subtraction reduces
        let (diff, borrow) = x.sbb(&ORDER, Limb::ZERO);
        let r = U256::conditional_select(&diff, &x, Choice::from((borrow.0 & 1) as u8));

        let mut km = Scalar::from_canonical(&k.0);
        let mut ki = km.invert();
        let rm = Scalar::from_canonical(&r);
        let mut sm = ki.mul(&em.add(&rm.mul(&dm)));
        let s = sm.to_canonical();
        km.zeroize();
        ki.zeroize();
        sm.zeroize();

        if !bool::from(s.is_zero()) {
            dm.zeroize();
            return Ok(Signature { r, s });
        }
    }
    dm.zeroize();
    Err(Error::Random)
}

/// Verify an ECDSA signature over a message digest.
///
/// Returns `Ok(true)` on a valid signature, `Ok(false)` on a well-formed
/// but non-matching one, and [`Error::OutOfRange`] when a signature
/// component is outside `[1, n-1]`. Verification is variable-time: every
/// input is public.
pub fn verify(hash: &[u8], key: &PublicKey, sig: &Signature) -> Result<bool> {
    let in_range =
        |v: &U256| !bool::from(v.is_zero()) && bool::from(v.ct_lt(&ORDER));
    if !in_range(&sig.r) || !in_range(&sig.s) {
        return Err(Error::OutOfRange);
    }

    let e = truncate_hash(hash)?;
    let si = Scalar::from_canonical(&sig.s).invert();
    let u1 = si.mul(&Scalar::from_canonical(&e)).to_canonical();
    let u2 = si.mul(&Scalar::from_canonical(&sig.r)).to_canonical();

    let q = ProjectivePoint::from_affine_canonical(&key.x, &key.y);
    let sum = mul::scalar_mul_base(&u1).add(&mul::scalar_mul(&u2, &q));
    if bool::from(sum.infinity) {
        return Ok(false);
    }

    // compare r·Z^2 against the Jacobian X instead of inverting Z; both r
    // and r + n can be the x coordinate reduced mod n
    let z2 = sum.z.square();
    let rz2 = FieldElement::from_canonical(&sig.r).mul(&z2);
    if bool::from(rz2.ct_eq(&sum.x)) {
        return Ok(true);
    }
    let (rn, carry) = sig.r.adc(&ORDER, Limb::ZERO);
    if carry.0 == 0 && bool::from(rn.ct_lt(&field::MODULUS)) {
        let rz2 = FieldElement::from_canonical(&rn).mul(&z2);
        if bool::from(rz2.ct_eq(&sum.x)) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check that `(x, y)` is an affine point on the curve, including the
/// coordinate range check.
pub fn is_on_curve(x: &U256, y: &U256) -> bool {
    if !bool::from(x.ct_lt(&field::MODULUS)) || !bool::from(y.ct_lt(&field::MODULUS)) {
        return false;
    }
    let xf = FieldElement::from_canonical(x);
    let yf = FieldElement::from_canonical(y);
    let rhs = xf.square().mul(&xf).sub(&xf.triple()).add(&CURVE_B);
    bool::from(yf.square().ct_eq(&rhs))
}

/// Validate a public key: range check, curve membership and an order
/// check (`n·Q` must be the point at infinity).
pub fn check_key(key: &PublicKey) -> Result<()> {
    if bool::from(key.x.is_zero() & key.y.is_zero()) {
        return Err(Error::PointAtInfinity);
    }
    if !bool::from(key.x.ct_lt(&field::MODULUS)) || !bool::from(key.y.ct_lt(&field::MODULUS)) {
        return Err(Error::OutOfRange);
    }
    if !is_on_curve(&key.x, &key.y) {
        return Err(Error::InvalidPoint);
    }
    let p = ProjectivePoint::from_affine_canonical(&key.x, &key.y);
    if !bool::from(mul::scalar_mul(&ORDER, &p).infinity) {
        return Err(Error::InvalidPoint);
    }
    Ok(())
}

/// Check that `public` is a valid key and corresponds to `secret`.
pub fn validate_keypair(secret: &SecretKey, public: &PublicKey) -> Result<()> {
    check_key(public)?;
    if scalar_mul_base(&secret.0)? != *public {
        return Err(Error::KeyMismatch);
    }
    Ok(())
}

/// Recover the affine point with the given x coordinate and y parity.
///
/// No curve-membership check is performed: if `x` is not the x coordinate
/// of a curve point the result is undefined. Run [`check_key`] on the
/// result when the input is untrusted.
pub fn decompress(x: &U256, y_odd: bool) -> Result<PublicKey> {
    if !bool::from(x.ct_lt(&field::MODULUS)) {
        return Err(Error::OutOfRange);
    }
    let xf = FieldElement::from_canonical(x);
    let rhs = xf.square().mul(&xf).sub(&xf.triple()).add(&CURVE_B);
    let y = rhs.sqrt().to_canonical();
    let flip = y.is_odd() ^ Choice::from(y_odd as u8);
    let y = U256::conditional_select(&y, &y.neg_mod(&field::MODULUS), flip);
    Ok(PublicKey { x: *x, y })
}

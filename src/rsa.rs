//! RSA public and private raw exponentiation.
//!
//! These are the textbook modular-exponentiation primitives; padding and
//! digest handling live with the caller. Private operations use the CRT
//! form of the key when the factors are present and fall back to a single
//! full-width exponentiation otherwise.

use crate::{Error, Limb, Result, Uint, modular::MontyParams};
use zeroize::Zeroize;

/// RSA private key material, big-endian byte strings borrowed from the
/// caller.
///
/// For the CRT path all of `p`, `q`, `dp`, `dq` and `qinv` must be present;
/// leaving `p` or `q` empty selects the non-CRT fallback, which uses only
/// `d` and `n`.
#[derive(Clone, Copy)]
pub struct RsaPrivateKey<'a> {
    /// Private exponent `d`. Only used by the non-CRT fallback.
    pub d: &'a [u8],
    /// First prime factor.
    pub p: &'a [u8],
    /// Second prime factor.
    pub q: &'a [u8],
    /// `d mod p-1`.
    pub dp: &'a [u8],
    /// `d mod q-1`.
    pub dq: &'a [u8],
    /// `q^-1 mod p`.
    pub qinv: &'a [u8],
    /// Public modulus `n = p·q`.
    pub n: &'a [u8],
}

fn rsa_public<const LIMBS: usize>(
    input: &[u8],
    e: u64,
    modulus: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    if e == 0 {
        return Err(Error::ZeroExponent);
    }
    if out.len() < Uint::<LIMBS>::BYTES {
        return Err(Error::BufferTooSmall);
    }
    let m = Uint::<LIMBS>::from_be_slice(input)?;
    let n = Uint::<LIMBS>::from_be_slice(modulus)?;
    let params = MontyParams::new(&n)?;

    let r = params.pow_mod_vartime(&m, e);
    r.write_be_bytes(&mut out[..Uint::<LIMBS>::BYTES]);
    Ok(Uint::<LIMBS>::BYTES)
}

fn rsa_private<const LIMBS: usize, const HALF: usize>(
    input: &[u8],
    key: &RsaPrivateKey<'_>,
    out: &mut [u8],
) -> Result<usize> {
    if out.len() < Uint::<LIMBS>::BYTES {
        return Err(Error::BufferTooSmall);
    }
    let c = Uint::<LIMBS>::from_be_slice(input)?;

    if key.p.is_empty() || key.q.is_empty() {
        return rsa_private_plain(&c, key, out);
    }

    let mut p = Uint::<HALF>::from_be_slice(key.p)?;
    let mut q = Uint::<HALF>::from_be_slice(key.q)?;
    let mut dp = Uint::<HALF>::from_be_slice(key.dp)?;
    let mut dq = Uint::<HALF>::from_be_slice(key.dq)?;
    let mut qinv = Uint::<HALF>::from_be_slice(key.qinv)?;
    let pp = MontyParams::new(&p)?;
    let qp = MontyParams::new(&q)?;

    let (c_lo, c_hi) = c.split::<HALF>();
    let mut cp = Uint::rem_wide(&c_lo, &c_hi, &p);
    let mut cq = Uint::rem_wide(&c_lo, &c_hi, &q);
    let mut m1 = pp.pow_mod(&cp, &dp);
    let mut m2 = qp.pow_mod(&cq, &dq);

    // h = (m1 - m2)·qinv mod p; m2 may exceed p by up to one modulus
    // worth, so the difference needs at most two add-backs
    let (mut diff, borrow) = m1.sbb(&m2, Limb::ZERO);
    let mut mask = borrow;
    for _ in 0..2 {
        let (sum, carry) = diff.adc(&p.bitand_limb(mask), Limb::ZERO);
        diff = sum;
        mask = Limb(mask.0 & carry.0.wrapping_sub(1));
    }
    // multiplying the plain difference by the Montgomery form of qinv
    // cancels the radix in one step
    let mut qinv_m = pp.to_montgomery(&qinv);
    let mut h = pp.mont_mul(&diff, &qinv_m);

    // m = m2 + h·q < p·q
    let (lo, hi) = h.mul_wide(&q);
    let mut m = Uint::<LIMBS>::concat(&lo, &hi)
        .wrapping_add(&Uint::concat(&m2, &Uint::ZERO));
    m.write_be_bytes(&mut out[..Uint::<LIMBS>::BYTES]);

    for secret in [&mut p, &mut q, &mut dp, &mut dq, &mut qinv] {
        secret.zeroize();
    }
    for secret in [&mut cp, &mut cq, &mut m1, &mut m2, &mut diff, &mut qinv_m, &mut h] {
        secret.zeroize();
    }
    m.zeroize();
    Ok(Uint::<LIMBS>::BYTES)
}

/// Non-CRT fallback: a single exponentiation by `d` modulo `n`.
fn rsa_private_plain<const LIMBS: usize>(
    c: &Uint<LIMBS>,
    key: &RsaPrivateKey<'_>,
    out: &mut [u8],
) -> Result<usize> {
    let mut d = Uint::<LIMBS>::from_be_slice(key.d)?;
    if bool::from(d.is_zero()) {
        return Err(Error::ZeroExponent);
    }
    let n = Uint::<LIMBS>::from_be_slice(key.n)?;
    let params = MontyParams::new(&n)?;

    let mut m = params.pow_mod(c, &d);
    d.zeroize();
    m.write_be_bytes(&mut out[..Uint::<LIMBS>::BYTES]);
    m.zeroize();
    Ok(Uint::<LIMBS>::BYTES)
}

macro_rules! impl_rsa {
    ($public:ident, $private:ident, $limbs:literal, $half:literal, $bits:literal) => {
        #[doc = concat!(
            "Raw RSA public operation over a ",
            stringify!($bits),
            "-bit modulus: computes `input^e mod n` and writes the full \
             fixed-width big-endian result.\n\n",
            "The exponent is public and processed in variable time; `e = 3` \
             takes a dedicated short path. Returns the number of bytes \
             written, always the modulus size."
        )]
        pub fn $public(input: &[u8], e: u64, n: &[u8], out: &mut [u8]) -> Result<usize> {
            rsa_public::<$limbs>(input, e, n, out)
        }

        #[doc = concat!(
            "Raw RSA private operation over a ",
            stringify!($bits),
            "-bit modulus, constant time with respect to the key and the \
             input.\n\n",
            "Uses the CRT factors when present. Writes the full fixed-width \
             big-endian result and returns the number of bytes written."
        )]
        pub fn $private(input: &[u8], key: &RsaPrivateKey<'_>, out: &mut [u8]) -> Result<usize> {
            rsa_private::<$limbs, $half>(input, key, out)
        }
    };
}

impl_rsa!(rsa_public_2048, rsa_private_2048, 32, 16, 2048);
impl_rsa!(rsa_public_3072, rsa_private_3072, 48, 24, 3072);
impl_rsa!(rsa_public_4096, rsa_private_4096, 64, 32, 4096);

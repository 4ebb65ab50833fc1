//! Fixed-width modular exponentiation entry points and Diffie-Hellman
//! agreement over byte strings.

use crate::{Result, U1024, U1536, U2048, U3072, U4096, Uint, modular::MontyParams};
use zeroize::Zeroize;

fn mod_exp<const LIMBS: usize>(
    base: &Uint<LIMBS>,
    exponent: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Result<Uint<LIMBS>> {
    let params = MontyParams::new(modulus)?;
    Ok(params.pow_mod(base, exponent))
}

fn dh_exp<const LIMBS: usize>(
    base: &[u8],
    exponent: &[u8],
    modulus: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    let base = Uint::<LIMBS>::from_be_slice(base)?;
    let mut exponent = Uint::<LIMBS>::from_be_slice(exponent)?;
    let modulus = Uint::<LIMBS>::from_be_slice(modulus)?;
    let params = MontyParams::new(&modulus)?;

    // 2 generates every FFDHE group; with that base the window
    // multiplications degenerate to shifts
    let mut shared = if base == Uint::from_u64(2) {
        params.pow2_mod(&exponent)
    } else {
        params.pow_mod(&base, &exponent)
    };
    exponent.zeroize();

    let written = shared.write_be_bytes_stripped(out);
    shared.zeroize();
    written
}

macro_rules! impl_mod_exp {
    ($name:ident, $uint:ty, $bits:literal) => {
        #[doc = concat!(
            "Computes `base^exponent mod modulus` over ",
            stringify!($bits),
            "-bit operands.\n\n",
            "Constant time with respect to the base and the exponent; the \
             full width of the exponent is always scanned. The modulus must \
             be odd with its top bit set, otherwise \
             [`Error::OperandTooLarge`](crate::Error::OperandTooLarge) is \
             returned."
        )]
        pub fn $name(base: &$uint, exponent: &$uint, modulus: &$uint) -> Result<$uint> {
            mod_exp(base, exponent, modulus)
        }
    };
}

impl_mod_exp!(mod_exp_1024, U1024, 1024);
impl_mod_exp!(mod_exp_1536, U1536, 1536);
impl_mod_exp!(mod_exp_2048, U2048, 2048);
impl_mod_exp!(mod_exp_3072, U3072, 3072);
impl_mod_exp!(mod_exp_4096, U4096, 4096);

macro_rules! impl_dh_exp {
    ($name:ident, $limbs:literal, $bits:literal) => {
        #[doc = concat!(
            "Diffie-Hellman agreement over a ",
            stringify!($bits),
            "-bit prime: computes `base^exponent mod modulus` from \
             big-endian byte strings.\n\n",
            "Base 2 dispatches to a dedicated ladder, which makes the \
             standard FFDHE generator cheap; the dispatch inspects only the \
             public base. The result is written to `out` with leading zero \
             bytes stripped and its length returned."
        )]
        pub fn $name(base: &[u8], exponent: &[u8], modulus: &[u8], out: &mut [u8]) -> Result<usize> {
            dh_exp::<$limbs>(base, exponent, modulus, out)
        }
    };
}

impl_dh_exp!(dh_exp_2048, 32, 2048);
impl_dh_exp!(dh_exp_3072, 48, 3072);
impl_dh_exp!(dh_exp_4096, 64, 4096);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn rejects_even_modulus() {
        let m = U1024::from_u64(4);
        assert_eq!(
            mod_exp_1024(&U1024::from_u64(2), &U1024::from_u64(3), &m),
            Err(Error::OperandTooLarge)
        );
    }

    #[test]
    fn rejects_oversized_input() {
        let mut out = [0u8; 256];
        let too_long = [0u8; 257];
        assert_eq!(
            dh_exp_2048(&[2], &[3], &too_long, &mut out),
            Err(Error::OperandTooLarge)
        );
    }
}

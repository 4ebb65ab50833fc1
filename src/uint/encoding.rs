//! Big-endian conversions to and from bytes and hex.

use crate::{Error, Limb, Result, Uint, Word};

/// Decode a single hex character, panicking on anything else.
const fn hex_nibble(b: u8) -> Word {
    match b {
        b'0'..=b'9' => (b - b'0') as Word,
        b'a'..=b'f' => (b - b'a' + 10) as Word,
        b'A'..=b'F' => (b - b'A' + 10) as Word,
        _ => panic!("invalid hex character"),
    }
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Create a [`Uint`] from a big-endian hex string of exactly the full
    /// width. Panics on malformed input; intended for constants.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(
            bytes.len() == LIMBS * Limb::BYTES * 2,
            "hex string is not the expected size"
        );
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let mut w: Word = 0;
            let mut j = 0;
            while j < 16 {
                w = (w << 4) | hex_nibble(bytes[(LIMBS - 1 - i) * 16 + j]);
                j += 1;
            }
            limbs[i] = Limb(w);
            i += 1;
        }
        Self { limbs }
    }

    /// Decode a big-endian byte slice, right-aligned and zero-padded to the
    /// full width.
    ///
    /// Returns [`Error::OperandTooLarge`] when the slice is longer than the
    /// fixed width.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > Self::BYTES {
            return Err(Error::OperandTooLarge);
        }
        let mut limbs = [Limb::ZERO; LIMBS];
        for (i, &b) in bytes.iter().rev().enumerate() {
            limbs[i / Limb::BYTES].0 |= (b as Word) << ((i % Limb::BYTES) * 8);
        }
        Ok(Self { limbs })
    }

    /// Write the value as exactly `Self::BYTES` big-endian bytes.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::BYTES);
        for i in 0..LIMBS {
            let bytes = self.limbs[LIMBS - 1 - i].0.to_be_bytes();
            out[i * Limb::BYTES..(i + 1) * Limb::BYTES].copy_from_slice(&bytes);
        }
    }

    /// Write the value big-endian with leading zero bytes stripped, returning
    /// the number of bytes written. Zero encodes as zero bytes.
    ///
    /// The encoded length is derived from the value and is treated as public.
    pub(crate) fn write_be_bytes_stripped(&self, out: &mut [u8]) -> Result<usize> {
        let len = self.byte_len_vartime();
        if out.len() < len {
            return Err(Error::BufferTooSmall);
        }
        for i in 0..len {
            let pos = len - 1 - i;
            out[i] = (self.limbs[pos / Limb::BYTES].0 >> ((pos % Limb::BYTES) * 8)) as u8;
        }
        Ok(len)
    }

    /// Length of the big-endian encoding with leading zeroes stripped.
    /// Variable-time in the value.
    pub(crate) fn byte_len_vartime(&self) -> usize {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.limbs[i].0 != 0 {
                let zero_bytes = (self.limbs[i].0.leading_zeros() / 8) as usize;
                return i * Limb::BYTES + (Limb::BYTES - zero_bytes);
            }
        }
        0
    }
}

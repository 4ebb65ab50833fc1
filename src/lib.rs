#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(target_pointer_width = "64"))]
compile_error!("this crate is implemented for 64-bit targets only");

mod dh;
mod error;
mod limb;
mod modular;
mod p256;
mod rsa;
mod uint;

pub use crate::{
    dh::{
        dh_exp_2048, dh_exp_3072, dh_exp_4096, mod_exp_1024, mod_exp_1536, mod_exp_2048,
        mod_exp_3072, mod_exp_4096,
    },
    error::{Error, Result},
    limb::Limb,
    modular::MontyParams,
    p256::{
        PublicKey, SecretKey, Signature, check_key, decompress, diffie_hellman, generate_keypair,
        is_on_curve, scalar_mul, scalar_mul_base, sign, validate_keypair, verify,
    },
    rsa::{
        RsaPrivateKey, rsa_private_2048, rsa_private_3072, rsa_private_4096, rsa_public_2048,
        rsa_public_3072, rsa_public_4096,
    },
    uint::Uint,
};

#[cfg(feature = "alloc")]
pub use crate::p256::{PointCache, scalar_mul_cached};

/// Unsigned integer type the CPU operates on natively.
pub type Word = u64;

/// Unsigned integer type twice the width of [`Word`], used for carry chains
/// and widening multiplication.
pub(crate) type WideWord = u128;

/// 256-bit unsigned integer.
pub type U256 = Uint<4>;

/// 1024-bit unsigned integer.
pub type U1024 = Uint<16>;

/// 1536-bit unsigned integer.
pub type U1536 = Uint<24>;

/// 2048-bit unsigned integer.
pub type U2048 = Uint<32>;

/// 3072-bit unsigned integer.
pub type U3072 = Uint<48>;

/// 4096-bit unsigned integer.
pub type U4096 = Uint<64>;

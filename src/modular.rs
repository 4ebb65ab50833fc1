//! Modular arithmetic in Montgomery form.
//!
//! All moduli handled by this crate are odd and occupy their full fixed
//! width, which keeps the conversion constants trivial: `R mod m` is just
//! the two's complement of the modulus.

mod mul;
mod params;
mod pow;
mod reduction;

pub use params::MontyParams;

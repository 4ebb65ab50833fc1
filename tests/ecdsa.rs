//! ECDSA signing and verification, including the deterministic-nonce
//! vectors from RFC 6979 appendix A.2.5 (P-256, SHA-256).

use hex_literal::hex;
use modarith::{Error, PublicKey, SecretKey, Signature, U256, sign, verify};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

const D: [u8; 32] = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
const QX: &str = "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6";
const QY: &str = "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

// sha256("sample") and sha256("test")
const HASH_SAMPLE: [u8; 32] =
    hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");
const HASH_TEST: [u8; 32] =
    hex!("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08");

const K_SAMPLE: [u8; 32] = hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60");
const K_TEST: [u8; 32] = hex!("d16b6ae827f17175e040871a1c7ec3500192c4c92677336ec2537acaee0008e0");

fn key() -> SecretKey {
    SecretKey::from_be_bytes(&D).unwrap()
}

fn public() -> PublicKey {
    PublicKey {
        x: U256::from_be_hex(QX),
        y: U256::from_be_hex(QY),
    }
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0)
}

#[test]
fn public_key_matches_rfc6979() {
    assert_eq!(key().public_key().unwrap(), public());
}

#[test]
fn sign_sample_with_rfc6979_nonce() {
    let nonce = SecretKey::from_be_bytes(&K_SAMPLE).unwrap();
    let sig = sign(&HASH_SAMPLE, &key(), &mut rng(), Some(nonce)).unwrap();
    assert_eq!(
        sig.r,
        U256::from_be_hex("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716")
    );
    assert_eq!(
        sig.s,
        U256::from_be_hex("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8")
    );
    assert_eq!(verify(&HASH_SAMPLE, &public(), &sig), Ok(true));
}

#[test]
fn sign_test_with_rfc6979_nonce() {
    let nonce = SecretKey::from_be_bytes(&K_TEST).unwrap();
    let sig = sign(&HASH_TEST, &key(), &mut rng(), Some(nonce)).unwrap();
    assert_eq!(
        sig.r,
        U256::from_be_hex("f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367")
    );
    assert_eq!(
        sig.s,
        U256::from_be_hex("019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083")
    );
    assert_eq!(verify(&HASH_TEST, &public(), &sig), Ok(true));
}

#[test]
fn random_nonce_signatures_verify() {
    let mut rng = rng();
    for _ in 0..4 {
        let sig = sign(&HASH_SAMPLE, &key(), &mut rng, None).unwrap();
        assert_eq!(verify(&HASH_SAMPLE, &public(), &sig), Ok(true));
    }
}

#[test]
fn wrong_hash_fails_verification() {
    let sig = sign(&HASH_SAMPLE, &key(), &mut rng(), None).unwrap();
    assert_eq!(verify(&HASH_TEST, &public(), &sig), Ok(false));
}

#[test]
fn tampered_signature_fails_verification() {
    let sig = sign(&HASH_SAMPLE, &key(), &mut rng(), None).unwrap();
    let flipped_r = Signature {
        r: sig.r.wrapping_add(&U256::ONE),
        s: sig.s,
    };
    assert_eq!(verify(&HASH_SAMPLE, &public(), &flipped_r), Ok(false));
    let flipped_s = Signature {
        r: sig.r,
        s: sig.s.wrapping_add(&U256::ONE),
    };
    assert_eq!(verify(&HASH_SAMPLE, &public(), &flipped_s), Ok(false));
}

#[test]
fn wrong_key_fails_verification() {
    let sig = sign(&HASH_SAMPLE, &key(), &mut rng(), None).unwrap();
    let mut other = [0u8; 32];
    other[31] = 2;
    let other_pub = SecretKey::from_be_bytes(&other)
        .unwrap()
        .public_key()
        .unwrap();
    assert_eq!(verify(&HASH_SAMPLE, &other_pub, &sig), Ok(false));
}

#[test]
fn out_of_range_components_rejected() {
    let order = U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    let good = sign(&HASH_SAMPLE, &key(), &mut rng(), None).unwrap();
    for bad in [
        Signature {
            r: U256::ZERO,
            s: good.s,
        },
        Signature {
            r: good.r,
            s: U256::ZERO,
        },
        Signature {
            r: order,
            s: good.s,
        },
        Signature {
            r: good.r,
            s: order,
        },
    ] {
        assert_eq!(
            verify(&HASH_SAMPLE, &public(), &bad),
            Err(Error::OutOfRange)
        );
    }
}

#[test]
fn long_hash_is_truncated_left() {
    // 48-byte digest: only the leftmost 32 bytes matter
    let mut long = [0u8; 48];
    long[..32].copy_from_slice(&HASH_SAMPLE);
    long[32..].copy_from_slice(&[0xab; 16]);
    let sig = sign(&long, &key(), &mut rng(), None).unwrap();
    assert_eq!(verify(&HASH_SAMPLE, &public(), &sig), Ok(true));
}

#[test]
fn short_hash_accepted() {
    let sig = sign(&HASH_SAMPLE[..20], &key(), &mut rng(), None).unwrap();
    assert_eq!(verify(&HASH_SAMPLE[..20], &public(), &sig), Ok(true));
}

//! P-256 key agreement, validation and compression tests.

use modarith::{
    Error, PublicKey, SecretKey, U256, check_key, decompress, diffie_hellman, generate_keypair,
    is_on_curve, scalar_mul, scalar_mul_base,
};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

const DA: &str = "d76d4330f1446beab0c11fdecb91ce375bc8fbbcbde5c0994164d8399f767c45";
const QAX: &str = "fd60dca3efc3e05294f463a6c34ecf8a32beeba14ac17fe57b9d28976b9b91dc";
const QAY: &str = "e38b0fdf86a59d5cddb79d8f24907fc9ee013a1c58a59e259b5cfce9608dae13";
const DB: &str = "096d373742f9a039c320a4737c2b3abe14a03569d26b949692e5dfe8cb1855fe";
const QBX: &str = "afa1602dd75117bad3f740054af4c2e37b9dbca37009cb03e524e863ada7f321";
const QBY: &str = "da0a41a57bd29f37fa2d558de37133c30d47c1d143207bbf477e27872dcd2114";
const Z: &str = "a81a8dd7c18bc4670c3f1f34a495fbb51d93175db273e59a12355ff40d2fb1c9";

fn secret(hex: &str) -> SecretKey {
    let mut bytes = [0u8; 32];
    U256::from_be_hex(hex).write_be_bytes(&mut bytes);
    SecretKey::from_be_bytes(&bytes).unwrap()
}

fn public(x: &str, y: &str) -> PublicKey {
    PublicKey {
        x: U256::from_be_hex(x),
        y: U256::from_be_hex(y),
    }
}

#[test]
fn public_keys_match_vectors() {
    assert_eq!(secret(DA).public_key().unwrap(), public(QAX, QAY));
    assert_eq!(secret(DB).public_key().unwrap(), public(QBX, QBY));
}

#[test]
fn ecdh_agrees_both_directions() {
    let expect = {
        let mut bytes = [0u8; 32];
        U256::from_be_hex(Z).write_be_bytes(&mut bytes);
        bytes
    };
    let qa = public(QAX, QAY);
    let qb = public(QBX, QBY);
    assert_eq!(diffie_hellman(&secret(DA), &qb).unwrap(), expect);
    assert_eq!(diffie_hellman(&secret(DB), &qa).unwrap(), expect);
}

#[test]
fn scalar_mul_matches_base() {
    let k = U256::from_be_hex(DA);
    let g = scalar_mul_base(&U256::from_u64(1)).unwrap();
    assert_eq!(scalar_mul(&k, &g).unwrap(), scalar_mul_base(&k).unwrap());
}

#[test]
fn scalar_multiplication_is_associative() {
    // k2·(k1·G) == k1·(k2·G) == (k1·k2 mod n)·G
    use num_bigint::BigUint;
    let n = BigUint::parse_bytes(
        b"ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        16,
    )
    .unwrap();
    let k1 = U256::from_be_hex(DA);
    let k2 = U256::from_be_hex(DB);

    let a = scalar_mul(&k2, &scalar_mul_base(&k1).unwrap()).unwrap();
    let b = scalar_mul(&k1, &scalar_mul_base(&k2).unwrap()).unwrap();
    assert_eq!(a, b);

    let mut bytes = [0u8; 32];
    k1.write_be_bytes(&mut bytes);
    let big1 = BigUint::from_bytes_be(&bytes);
    k2.write_be_bytes(&mut bytes);
    let big2 = BigUint::from_bytes_be(&bytes);
    let product = (big1 * big2) % n;
    let mut kk = [0u8; 32];
    let pb = product.to_bytes_be();
    kk[32 - pb.len()..].copy_from_slice(&pb);
    assert_eq!(scalar_mul_base(&U256::from_be_slice(&kk).unwrap()).unwrap(), a);
}

#[test]
fn keygen_produces_valid_pairs() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..4 {
        let (sk, pk) = generate_keypair(&mut rng).unwrap();
        check_key(&pk).unwrap();
        assert_eq!(sk.public_key().unwrap(), pk);
    }
}

#[test]
fn keygen_is_deterministic_per_seed() {
    let (_, a) = generate_keypair(&mut ChaCha20Rng::seed_from_u64(42)).unwrap();
    let (_, b) = generate_keypair(&mut ChaCha20Rng::seed_from_u64(42)).unwrap();
    let (_, c) = generate_keypair(&mut ChaCha20Rng::seed_from_u64(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn check_key_accepts_vectors_and_rejects_junk() {
    check_key(&public(QAX, QAY)).unwrap();
    check_key(&public(QBX, QBY)).unwrap();

    let mut bad = public(QAX, QAY);
    bad.y = bad.y.wrapping_add(&U256::ONE);
    assert_eq!(check_key(&bad), Err(Error::InvalidPoint));

    let oversized = PublicKey {
        x: U256::MAX,
        y: U256::from_be_hex(QAY),
    };
    assert_eq!(check_key(&oversized), Err(Error::OutOfRange));
}

#[test]
fn is_on_curve_matches_check_key() {
    assert!(is_on_curve(
        &U256::from_be_hex(QBX),
        &U256::from_be_hex(QBY)
    ));
    assert!(!is_on_curve(&U256::from_u64(1), &U256::from_u64(1)));
}

#[test]
fn decompress_seven_g() {
    // 7·G, even y
    let x = U256::from_be_hex("8e533b6fa0bf7b4625bb30667c01fb607ef9f8b8a80fef5b300628703187b2a3");
    let y = U256::from_be_hex("73eb1dbde03318366d069f83a6f5900053c73633cb041b21c55e1a86c1f400b4");
    let key = decompress(&x, false).unwrap();
    assert_eq!(key, PublicKey { x, y });
    check_key(&key).unwrap();

    // flipping the parity bit selects the mirrored point, which is 7·(-G)
    let other = decompress(&x, true).unwrap();
    assert_ne!(other.y, y);
    check_key(&other).unwrap();
}

#[test]
fn decompress_rejects_oversized_x() {
    assert_eq!(decompress(&U256::MAX, false), Err(Error::OutOfRange));
}

#[test]
fn ecdh_with_invalid_scalar_is_rejected_at_import() {
    assert!(SecretKey::from_be_bytes(&[0u8; 32]).is_err());
}

#[cfg(feature = "alloc")]
mod cached {
    use super::*;
    use modarith::{PointCache, scalar_mul_cached};

    #[test]
    fn cached_agrees_with_direct() {
        let mut cache = PointCache::new();
        let qb = public(QBX, QBY);
        let k = U256::from_be_hex(DA);
        let direct = scalar_mul(&k, &qb).unwrap();
        assert_eq!(scalar_mul_cached(&mut cache, &k, &qb).unwrap(), direct);
        // cache hit path
        assert_eq!(scalar_mul_cached(&mut cache, &k, &qb).unwrap(), direct);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_ecdh_x_matches_shared_secret() {
        let mut cache = PointCache::new();
        let qb = public(QBX, QBY);
        let da = U256::from_be_hex(DA);
        let point = scalar_mul_cached(&mut cache, &da, &qb).unwrap();
        assert_eq!(point.x, U256::from_be_hex(Z));
    }
}

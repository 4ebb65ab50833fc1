//! Diffie-Hellman agreement over the FFDHE 2048-bit group.

use hex_literal::hex;
use modarith::{Error, dh_exp_2048};

const P: [u8; 256] = hex!(
    "ffffffffffffffffadf85458a2bb4a9aafdc5620273d3cf1d8b9c583ce2d3695"
    "a9e13641146433fbcc939dce249b3ef97d2fe363630c75d8f681b202aec4617a"
    "d3df1ed5d5fd65612433f51f5f066ed0856365553ded1af3b557135e7f57c935"
    "984f0c70e0e68b77e2a689daf3efe8721df158a136ade73530acca4f483a797a"
    "bc0ab182b324fb61d108a94bb2c8e3fbb96adab760d7f4681d4f42a3de394df4"
    "ae56ede76372bb190b07a7c8ee0a6d709e02fce1cdf7e2ecc03404cd28342f61"
    "9172fe9ce98583ff8e4f1232eef28183c3fe3b1b4c6fad733bb5fcbc2ec22005"
    "c58ef1837d1683b2c6f34a26c1b2effa886b423861285c97ffffffffffffffff"
);
const E: [u8; 256] = hex!(
    "14b062ae88c88ad1eee1f220fd5475125ccedc773429e79c6cda4ccb01f35efe"
    "8ed5f03644f758cd0aeb34f96712489050fe32817812f170167a34d0c643e653"
    "ad689cf88759f153b7785728f2655b19153d3a3f56bc09cb91215785d9977338"
    "2dd301c8a91afa5c7623c4dd26fb984f366c5acdaeafb905dc8ac0bb635b4c41"
    "d283eb3a5fbd238ec9cf158de6e96d45cae8c077377925b396a1da2c9cfbba43"
    "b8e3c71f6bf08d62331057ca7d411fab9fb932d4f039772216ff82e389e3995a"
    "b35331ceaf2ed9dd87e355b26210b784baa1c6f1404b6eaf162a01dec28753f8"
    "221c4e003f9931ee3af27f802dc5fd3d9974d75b333824fe61790134676b1b69"
);

#[test]
fn base_two_kat() {
    let expect = hex!(
        "a7224a21acc9db0ca5afaec4e1ab31fb5128e9cb0b9377c535e396a556cfbc14"
        "fe377d4fb3ed480b43c32d731868e833256324cf61438f8d73d138e2d4482aaa"
        "e6c7d041bc2b0785d309c1829eabacbc1183507e6008ed5425d8c21156a50dc3"
        "c96c586e5e9845c61d5b9e9dfa7bd32daa788c6fa567a940345d82cbc406aef8"
        "2224e820a7f412f15af5d8a8c6d4d87f8af38b6ca97391b284c367aef0ff517a"
        "66f2677495f79037c6947a273f9748be213917aa12d7a13fb39e269438c7213b"
        "ff25c136b39c9f4dc63a00a2feb2b9968d64a475a5152e59955fa97b468f6ef9"
        "ca158c147821ac807ec31ac2c1cd7f14b706940e1e366f332b921d3f410f6517"
    );
    let mut out = [0u8; 256];
    let written = dh_exp_2048(&[2], &E, &P, &mut out).unwrap();
    assert_eq!(&out[..written], &expect[..]);
}

#[test]
fn generic_base_kat() {
    let g = hex!(
        "323741768a735dcf369f4bd520096487f19bf72783623e4f9e6ca7b744bfe88d"
        "30303d9ed02a0b54800586af91d156282db289a96723b46d2bf75f548a6d3713"
        "d2c798aad4c3fbc93148def47c497a20fa946995de059899b22ad579bed715df"
        "a45c5d2b0bd263e9559081574dfb4e22c5f574be62204224c0bb4aa801e97c19"
        "e4043fe2ca88f88ac7ae2be5c6a7e82c01077c2b5c68851fc293a3ebb472b1ce"
        "cea06ad5fac86db8a7de431308d7675265c8f8f7322822a1e8fe797f7f3c7ee5"
        "c9c4951f108d20218e655463adb183dfd131eea3ba6a185b482aa70a792c309b"
        "f8d2074a0f0896d26b0d4ff75a357cb10b07502ed4c6eb9c933106745b3ce9b3"
    );
    let expect = hex!(
        "2d08a189a6b804eb9a3492302fc48987608f2fc202d0591a53a963a2c4727fd0"
        "a8eb5e8880420596b2480baa114ba4141140bae2205f8ec7b7347f2eb17c79af"
        "9ac8b2d1816dfdb51b3eabdd217a91324216f01e97350336bdbf657c2909fe46"
        "8b8619bfe702418b6a48f42fbf85af86646f1d5a6dfe4ef3e9f0920d23b43f8e"
        "75f850e6c349078b548a06afce5d96defe5e77d61bf940d2f8af82e7accdaed3"
        "22724b098bd65cbd56e7d3e611b9cda7a34b63f3cb484c786da67932747a76ef"
        "e06d1ec04dff9e255e4d0ea5a5d6dcd77b4715266b4c3b90ba2d42e2b04be463"
        "2512ddf781a55403c1aa4378fe348d9042b597a39c6b58af4f8883aaa29c8bb5"
    );
    let mut out = [0u8; 256];
    let written = dh_exp_2048(&g, &E, &P, &mut out).unwrap();
    assert_eq!(&out[..written], &expect[..]);
}

#[test]
fn base_two_matches_generic_path() {
    // a full-width encoding of 2 must not take the shift ladder astray
    let mut base = [0u8; 256];
    base[255] = 2;
    let mut short = [0u8; 256];
    let mut full = [0u8; 256];
    let a = dh_exp_2048(&[2], &E, &P, &mut short).unwrap();
    let b = dh_exp_2048(&base, &E, &P, &mut full).unwrap();
    assert_eq!(&short[..a], &full[..b]);
}

#[test]
fn leading_zeros_stripped() {
    // g^p-1 mod p for the safe prime is 1, encoded as a single byte
    let mut pm1 = P;
    pm1[255] -= 1;
    let mut out = [0u8; 256];
    let written = dh_exp_2048(&[2], &pm1, &P, &mut out).unwrap();
    assert_eq!(&out[..written], &[1]);
}

#[test]
fn short_output_buffer_rejected() {
    let mut out = [0u8; 16];
    assert_eq!(
        dh_exp_2048(&[2], &E, &P, &mut out),
        Err(Error::BufferTooSmall)
    );
}

#[test]
fn even_modulus_rejected() {
    let mut even = P;
    even[255] &= 0xfe;
    let mut out = [0u8; 256];
    assert_eq!(
        dh_exp_2048(&[2], &E, &even, &mut out),
        Err(Error::OperandTooLarge)
    );
}

//! RSA raw-operation known-answer tests against a fixed 2048-bit key.

use hex_literal::hex;
use modarith::{Error, RsaPrivateKey, rsa_private_2048, rsa_public_2048};

const P: [u8; 128] = hex!(
    "fedd353b8579f73a11e50608f76f450352506368eb38ba5bbdfcf2d4cd609e91"
    "efb3b13b82af614a205caf09d0f492148ce5d24e435457a75a30e51ccb49db1d"
    "2e5171e2ff71df500a3e0673b76e10c83fa00a4f8eba6a34b51745918a757c03"
    "5f97e3d87bf907d0b976dc40e277029642894c84f4015e18ae85b4ce7110bb43"
);
const Q: [u8; 128] = hex!(
    "eab71cab529b97728b9d3f47844497a462e1faa4491b8f6edc59bb7f84fe09a3"
    "4e1c2f72f9e1167a3da14a118a55fc2e5b4e6012868befb0d3bdc69856c1294d"
    "e2a1bcfd6f20ab1fdbe3ef75172059b20e8eac3e8620e74d0d7e541ae6d9c9c4"
    "5b33a9c69782277f86e1ccc098d5a3e6faa34cd45a0322d948b70083ee09f973"
);
const N: [u8; 256] = hex!(
    "e9ac7f543760b9491e11fad0c85bfa418ce79c4683906caad69786ba0177538e"
    "6488bbc46bdc5f2ccee7e4d63d1ba030fe48fc40c0553c58ddd3b926aae1e10d"
    "cb941c67dcbe8bc060339cf1f77980877ded9ccd6d2dbe931ee68907d629be6e"
    "d2b6516701afbd728b8e6cd4ce9950dce16451291f70d97314233131c646fa98"
    "3cfcf174c4e866823d726933e26fec3622773084f4fec6b8ea184f08d55e41a6"
    "db8c904d3c504517351a07d2fb1b1a5ee6ec7bd51ce45ea03896cc32e3ae857c"
    "1e366a9f5bf9e37e643665337f47f2b8ae16ae27181aaa908120e94367a317d5"
    "ffcf284296008dea7a61b28bfa9e9b2372aee82b9fe366b14bc15fadf0034a19"
);
const D: [u8; 256] = hex!(
    "e8dd4c2e82d9530c387936782592f37bab8d8c41010f461ba1aa734a9df76a3f"
    "3694c479e3fb42a586b3b56a828f2b3e67ca1807f72379f61d69c6d36feb95b9"
    "87acdbf9ed13be7541e96d77fc650adefb7175978a3bd1f50f103272aacc02c8"
    "b2179a5b8a64b5e89686a2921828d55aa90aad8ecb944c3ed04c99d3be82316a"
    "e94813e8fd9ec8144d44a49f135c4a2c675bf459fe9867d39d8b9a39096aea61"
    "3d0e31fd839d02629197965b0b5a6aa5e35b8767f2eadac0a24e15c2fcdb91dd"
    "8a57fc0c32cd91044e44d2fb9dcde6a632311a9f538b2796f7f020aa9263c9ab"
    "0abfa2b55b76c965ec7be11431f95c52de74335488de161a6b81a1bb8a571db9"
);
const DP: [u8; 128] = hex!(
    "e7d790d22974aeca3b770c4b61d2ed83bd0075bdfea4271ac7b46fadd77a3a25"
    "65592033938938c676b3f962c39b87bb7c04a090233d79533a7f5a1c1c6d7e0e"
    "8890fc39d3c7e1adecf349694086b66b833d71c3b781aa9571dacea53bbfede5"
    "1fb38b47e656be9e47e87129f118f3d87e846980547b5dfeb3dbdb8324656503"
);
const DQ: [u8; 128] = hex!(
    "183985eff8baae4ad836068def0cd549d61ad4af980c0c25b90059e5b36834be"
    "72155ea05341f3fbf1d86fb897ba802898abe2268754720ca20df82d48e6eec8"
    "6717a255d5de5d4b107ada000fbefb02f195b01953e69978ce67b76e7f5d0302"
    "0d17abf21f3903b299cd3c40b485784122a5300ccaad802f44ddfe639f71d019"
);
const QINV: [u8; 128] = hex!(
    "271f6d239cef3f1ef6a44ec742f4fa2cf2360fd71e089524c00169081ae915e5"
    "01ee18579d7f57b501ab1e5f0de7db43cbc0cb7910dad21b0b82007f7de49eca"
    "9626cc95ab46dd4886b2231f35e72b1a3b159493c3289bd6d84b5d0130169723"
    "dece588a4e2aead486e7d84494c1f649e0ec5c3d9ff84afba0faf8d8a24ce767"
);
const MSG: [u8; 256] = hex!(
    "00354a4243bc3e5ceec2cbcea57f88a3323a7ba1ab3afc57842a589d0c2e26ab"
    "a481a00abee306cbfc02260a0c67e5d2bc878de839f79574cb259343ee460b64"
    "4cf2cc3e5c6f3d28f4cd24a4cbcbbc95a39c8b2ee1bfad5fc23f602dab5495e6"
    "08fa94a0523678169f4d900a6f4ce8f643193308825a7e10be0811f575abaf1d"
    "0b2d73aaf6870a42e7d8be02669719e5ea77a1014546c7a0c4ded469595acec3"
    "703daa85249b680c45431f10851fa004220db0b9f5dea0639a00abdeb8efc797"
    "52e6591cb52923961ff82fe0546bd680b1c620259f1ee935cfd05f95998fc158"
    "3ace90df5a619494bc9f8a3f371d9beb3c1d51793e722a00f445d51d251e4d20"
);
const CT: [u8; 256] = hex!(
    "2f97a29fd45c2a5fe4da4a3721c16de576c73b4ce0256abfd6bbae89e40958fa"
    "2adb6aaad1b951fb02be2849ea4c65127eabb38e9b2e305e97daeb70755d825e"
    "54c624595310c5c3cbf874b310e0bd23351965810f302095b63a53d57cd5a6b5"
    "535adb820d1c2eeed39ced66dcab3497bef22d049e2f7799f95cf1de147c6f5d"
    "8222e18ca7e2cef1afe60e6853374e9a08be9e4d6665207e83c2f98473f4091e"
    "c7d7985ee83f885ba7dea623abf5114a46b7b7b52d8c1b1554d832b11d956683"
    "df170dabb349ff0eb303028a3dc7b23985f3d4b7a0fd3bb07667938fa100d1d4"
    "637fa1b779c725ca52d51c57d465fb8bf91e0f525902b8f6eeda0a7f6ed87273"
);

fn key() -> RsaPrivateKey<'static> {
    RsaPrivateKey {
        d: &D,
        p: &P,
        q: &Q,
        dp: &DP,
        dq: &DQ,
        qinv: &QINV,
        n: &N,
    }
}

#[test]
fn public_kat() {
    let mut out = [0u8; 256];
    assert_eq!(rsa_public_2048(&MSG, 65537, &N, &mut out), Ok(256));
    assert_eq!(out, CT);
}

#[test]
fn private_crt_kat() {
    let mut out = [0u8; 256];
    assert_eq!(rsa_private_2048(&CT, &key(), &mut out), Ok(256));
    assert_eq!(out, MSG);
}

#[test]
fn private_non_crt_matches() {
    let mut crt = [0u8; 256];
    rsa_private_2048(&CT, &key(), &mut crt).unwrap();
    let plain_key = RsaPrivateKey {
        p: &[],
        q: &[],
        ..key()
    };
    let mut plain = [0u8; 256];
    rsa_private_2048(&CT, &plain_key, &mut plain).unwrap();
    assert_eq!(crt, plain);
}

#[test]
fn roundtrip_short_message() {
    // 125-byte input, well below the modulus size
    let msg = hex!(
        "0758e63c3d00c86e90e8b941ac9715a636db87a2553b8940a63fb3907775c874"
        "a2187bac75cb8123992eb5fcf89c5ee717d97919ea3ca529443665851a1fda2a"
        "d967ed5c8a59ae0113d05b532c30b5528933d4ff3b04320c0d8f6386bce07119"
        "401890c3ebc769992893f6501f7cb3b0615c7bd7831a99e5ede751efdf"
    );
    let expect_ct = hex!(
        "3e99063e31313a64f615945d2a209bb4bd02ef326c57c8108f59ff307ed5c2ce"
        "c1e1726f06d425390302b61a44e8000e64f7f36420b732a392d4dbd845e3ef99"
        "5577ee8a40562a1109ea96a12db698e80ec7fad8999c4d46aeafcc25a2f668c5"
        "5a609fad3378cf3331862b039e1c6b8f953132edf831886e3ecd6cdaf94be2e6"
        "48ad9def347ac98247afee09718a2bdf6f1098296cdbfe299fe902de0d5fbe8d"
        "e6bef51de13df42819fc2eca704667756072750a9fbcafdb289566f00b4cee7a"
        "fea4443f35299d9f3501aa4b122188ee5eb769ecf12674d49bd89ca6c074822e"
        "d23b82f866da49db011adad75eb34493929b6814d4b007f9a649e68082dced0b"
    );
    let mut ct = [0u8; 256];
    rsa_public_2048(&msg, 65537, &N, &mut ct).unwrap();
    assert_eq!(ct, expect_ct);

    let mut back = [0u8; 256];
    rsa_private_2048(&ct, &key(), &mut back).unwrap();
    assert!(back[..131].iter().all(|&b| b == 0));
    assert_eq!(&back[131..], &msg[..]);
}

#[test]
fn public_exponent_three() {
    let n = hex!(
        "bb26400efde6e947782ba7f5f20b2dcbfe6a355ce1b5f225b0fcf6369781ffcd"
        "0e27acac003d34341f798f169ea6f33d3d156aba88cbf369b0a378133c23e474"
        "1a4744de88579dccb33c0b2667dd64a28824f914baa04f628053cae872d89a37"
        "3c3158dd8c25372a577e1d20fdd566d54ff05c057cc38042635872c6b0806293"
        "f2ed8afcd148e272609919be22d3e940a1d089df0851f128de32f06d61b869be"
        "c06dc83359ac1eb9a3a5c8db5c01aa802e5c3f96406a533c9837d1a81b549532"
        "cea8534f3baf5233af9f1cde195d8a4bd8a48226fc177ac46987a034658df854"
        "d798694347272ca83d5cd7b351a9b7001efe3b3390e1d262bc5839332999eaed"
    );
    let msg = hex!(
        "000000000000ba7735e179c3fd22b596a74bc4d90f9701e3d1970cfbaee6904a"
        "332c7a3210a88e05421f060c9af50c79b302c1c4a4e2ae55cab3691445dc5b39"
        "aea16f56e9bba1a316a9955ef9a937b72efc824de294c670f01b96efa7915c29"
        "47cbdb864ad3a29400ddf3dbca573c3d9ffb11cec1cd24a1bb0e5ad6538aaecb"
        "cc855ea3b7e952d24af8d228d5fbff2935c2e929a6beaf89da42c0b1e661cbc8"
        "1394d809547e061740f8c761468da9a0531a42f0c3c776de51fa607a146a32e0"
        "ec6aa710ae40d7a4ad669a555aab3d56a71216956a1c3db465b193c04f6a5536"
        "a411d31639f30953075358ac15596798a319d2da338f4937552bcec1d92befba"
    );
    let expect_ct = hex!(
        "91ef9abc1b51027a60f8ade1261f0bc80c12f18b837cb271b05d29e644d08a24"
        "203fbe577f060d02b25f2873f85e189769ae1b2481a0e08e0b3e5fdc8dc9e474"
        "c5cef4f39eeb0375ccc87584349293bf5b21c04825a44563b1ae68eefd5d531c"
        "95fdf007e763f3366f6b7fc81b96d09da7039acb94b9c99ab4813dfa75194dfd"
        "1d57589c8be3322658ac2724f5d8635e0575a3577e112aee085221683cffc545"
        "62d335955be58a71827e1ff7bdec2081792b764cdb9370de8684f3d4206d8310"
        "1e649029523b44855ca1a67773f2486ac754739ad138453becd298749b53b4f2"
        "98e438231ac16db659963e75451aa0f2ca7a6e4883d7b0be4c3bfca88beb457a"
    );
    let mut ct = [0u8; 256];
    rsa_public_2048(&msg, 3, &n, &mut ct).unwrap();
    assert_eq!(ct, expect_ct);
}

#[test]
fn private_crt_e3_key() {
    let n = hex!(
        "bb26400efde6e947782ba7f5f20b2dcbfe6a355ce1b5f225b0fcf6369781ffcd"
        "0e27acac003d34341f798f169ea6f33d3d156aba88cbf369b0a378133c23e474"
        "1a4744de88579dccb33c0b2667dd64a28824f914baa04f628053cae872d89a37"
        "3c3158dd8c25372a577e1d20fdd566d54ff05c057cc38042635872c6b0806293"
        "f2ed8afcd148e272609919be22d3e940a1d089df0851f128de32f06d61b869be"
        "c06dc83359ac1eb9a3a5c8db5c01aa802e5c3f96406a533c9837d1a81b549532"
        "cea8534f3baf5233af9f1cde195d8a4bd8a48226fc177ac46987a034658df854"
        "d798694347272ca83d5cd7b351a9b7001efe3b3390e1d262bc5839332999eaed"
    );
    let p = hex!(
        "e251be8c2110d5893f8e2df7406da8816b0f4c495ab94f28107a6872d99a48fb"
        "d48f803b51c0d0d96144c509181cec19acece21a0b56fc255d2af83e717297fb"
        "824def4f99bda280feec33f232d4ec70919c7d41fc4f5695b511f1421c038213"
        "23af56cd05cdc4ad80094c2de69c4becdb85c6778bacb3fce46447f2b048145d"
    );
    let q = hex!(
        "d3b172cbffbd2f1ad588a68b29181094670d6b18979ddd01789293c519861388"
        "179bc2c6a7ae002099f122609ec33585ae37aa89504c6172a451dbfabb7eabfc"
        "fe0f9a6b8f1267713a3ea23bc80c667f6a8ff2f8e8ec6db7d5e6376c97abf82a"
        "a87f7be90163e8eab47597990cd2c6f3c51ac10ee361c8d3c7c88a8983d1c7d1"
    );
    let dp = hex!(
        "96e129b2c0b5e3b0d50973fa2af3c5ab9cb4dd863c7b8a1ab5a6f04c911185fd"
        "385faad236808b3b962dd8b0babdf2bbc89dec115ce4a818e8c75029a0f70ffd"
        "01894a3511291700a9f2cd4c21e3484b0bbda8d6a834e463ce0bf62c12ad0162"
        "17ca39de03de831e555b881e99bd87f33d03d9a507c877fded982ff720300d93"
    );
    let dq = hex!(
        "8d20f732aa7e1f673905c45cc6100b0d9a08f2106513e8aba5b70d2e11040d05"
        "651281d9c51eaac066a0c195bf2cce591ecfc706358840f7183692a727a9c7fd"
        "feb5119d0a0c44f626d46c27dab2eeff9c5ff7509b484925394424f30fc7fac7"
        "1affa7f0ab97f09c784e6510b3372f4d2e11d609ecebdb37da85b1b1028bda8b"
    );
    let qinv = hex!(
        "9971400e97ad60de3036017270def1e69ae0e63e899c029dab0457971395f7a9"
        "6c7e941347f3b84f255e8af99083f7234705b165f47893cff68cbe917bccbc16"
        "ef21867d312b0d30979d4c3f2139b020ce054f56fa9356fa5519e51c5abf4e61"
        "fc422ddd7fc8f2a2db85d573f64e0af0f82d2c15b2083b27ee8f1c7df284462f"
    );
    let ct = hex!(
        "91ef9abc1b51027a60f8ade1261f0bc80c12f18b837cb271b05d29e644d08a24"
        "203fbe577f060d02b25f2873f85e189769ae1b2481a0e08e0b3e5fdc8dc9e474"
        "c5cef4f39eeb0375ccc87584349293bf5b21c04825a44563b1ae68eefd5d531c"
        "95fdf007e763f3366f6b7fc81b96d09da7039acb94b9c99ab4813dfa75194dfd"
        "1d57589c8be3322658ac2724f5d8635e0575a3577e112aee085221683cffc545"
        "62d335955be58a71827e1ff7bdec2081792b764cdb9370de8684f3d4206d8310"
        "1e649029523b44855ca1a67773f2486ac754739ad138453becd298749b53b4f2"
        "98e438231ac16db659963e75451aa0f2ca7a6e4883d7b0be4c3bfca88beb457a"
    );
    let msg = hex!(
        "000000000000ba7735e179c3fd22b596a74bc4d90f9701e3d1970cfbaee6904a"
        "332c7a3210a88e05421f060c9af50c79b302c1c4a4e2ae55cab3691445dc5b39"
        "aea16f56e9bba1a316a9955ef9a937b72efc824de294c670f01b96efa7915c29"
        "47cbdb864ad3a29400ddf3dbca573c3d9ffb11cec1cd24a1bb0e5ad6538aaecb"
        "cc855ea3b7e952d24af8d228d5fbff2935c2e929a6beaf89da42c0b1e661cbc8"
        "1394d809547e061740f8c761468da9a0531a42f0c3c776de51fa607a146a32e0"
        "ec6aa710ae40d7a4ad669a555aab3d56a71216956a1c3db465b193c04f6a5536"
        "a411d31639f30953075358ac15596798a319d2da338f4937552bcec1d92befba"
    );
    let key = RsaPrivateKey {
        d: &[],
        p: &p,
        q: &q,
        dp: &dp,
        dq: &dq,
        qinv: &qinv,
        n: &n,
    };
    let mut out = [0u8; 256];
    assert_eq!(rsa_private_2048(&ct, &key, &mut out), Ok(256));
    assert_eq!(out, msg);
}

#[test]
fn output_buffer_too_small() {
    let mut out = [0u8; 255];
    assert_eq!(
        rsa_public_2048(&MSG, 65537, &N, &mut out),
        Err(Error::BufferTooSmall)
    );
    assert_eq!(
        rsa_private_2048(&CT, &key(), &mut out),
        Err(Error::BufferTooSmall)
    );
}

#[test]
fn oversized_input_rejected() {
    let mut out = [0u8; 256];
    let long = [0u8; 257];
    assert_eq!(
        rsa_public_2048(&long, 65537, &N, &mut out),
        Err(Error::OperandTooLarge)
    );
}

//! Precomputed base-point stripe table.

use crate::{U256, Word};

/// Affine point with Montgomery-form coordinates, or the point at infinity
/// stored as all-zero words.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TableEntry {
    pub x: U256,
    pub y: U256,
}

impl TableEntry {
    pub const INFINITY: Self = Self::new([0; 4], [0; 4]);

    pub const fn new(x: [Word; 4], y: [Word; 4]) -> Self {
        Self {
            x: U256::from_words(x),
            y: U256::from_words(y),
        }
    }
}

/// Multiples of the base point for the 32-bit stripe layout: entry `j` holds
/// `sum(2^(32*i) * G for each bit i set in j)` with coordinates in Montgomery
/// form. Entry 0 is the point at infinity, stored as all-zero words.
pub(crate) const BASE_TABLE: [TableEntry; 256] = [
    TableEntry::new(
        [0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000],
        [0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000],
    ),
    TableEntry::new(
        [0x79e730d418a9143c, 0x75ba95fc5fedb601, 0x79fb732b77622510, 0x18905f76a53755c6],
        [0xddf25357ce95560a, 0x8b4ab8e4ba19e45c, 0xd2e88688dd21f325, 0x8571ff1825885d85],
    ),
    TableEntry::new(
        [0x202886024147519a, 0xd0981eac26b372f0, 0xa9d4a7caa785ebc8, 0xd953c50ddbdf58e9],
        [0x9d6361ccfd590f8f, 0x72e9626b44e6c917, 0x7fd9611022eb64cf, 0x863ebb7e9eb288f3],
    ),
    TableEntry::new(
        [0x7856b6235cdb6485, 0x808f0ea22f0a2f97, 0x3e68d9544f7e300b, 0x00076055b5ff80a0],
        [0x7634eb9b838d2010, 0x54014fbb3243708a, 0xe0e47d39842a6606, 0x8308776134373ee0],
    ),
    TableEntry::new(
        [0x4f922fc516a0d2bb, 0x0d5cc16c1a623499, 0x9241cf3a57c62c8b, 0x2f5e6961fd1b667f],
        [0x5c15c70bf5a01797, 0x3d20b44d60956192, 0x04911b37071fdb52, 0xf648f9168d6f0f7b],
    ),
    TableEntry::new(
        [0x9e566847e137bbbc, 0xe434469e8a6a0bec, 0xb1c4276179d73463, 0x5abe0285133d0015],
        [0x92aa837cc04c7dab, 0x573d9f4c43260c07, 0x0c93156278e6cc37, 0x94bb725b6b6f7383],
    ),
    TableEntry::new(
        [0xbbf9b48f720f141c, 0x6199b3cd2df5bc74, 0xdc3f6129411045c4, 0xcdd6bbcb2f7dc4ef],
        [0xcca6700beaf436fd, 0x6f647f6db99326be, 0x0c0fa792014f2522, 0xa361bebd4bdae5f6],
    ),
    TableEntry::new(
        [0x28aa2558597c13c7, 0xc38d635f50b7c3e1, 0x07039aecf3c09d1d, 0xba12ca09c4b5292c],
        [0x9e408fa459f91dfd, 0x3af43b66ceea07fb, 0x1eceb0899d780b29, 0x53ebb99d701fef4b],
    ),
    TableEntry::new(
        [0x4fe7ee31b0e63d34, 0xf4600572a9e54fab, 0xc0493334d5e7b5a4, 0x8589fb9206d54831],
        [0xaa70f5cc6583553a, 0x0879094ae25649e5, 0xcc90450710044652, 0xebb0696d02541c4f],
    ),
    TableEntry::new(
        [0x4616ca15ac1647c5, 0xb8127d47c4cf5799, 0xdc666aa3764dfbac, 0xeb2820cbd1b27da3],
        [0x9406f8d86a87e008, 0xd87dfa9d922378f3, 0x56ed2e4280ccecb2, 0x1f28289b55a7da1d],
    ),
    TableEntry::new(
        [0xabbaa0c03b89da99, 0xa6f2d79eb8284022, 0x27847862b81c05e8, 0x337a4b5905e54d63],
        [0x3c67500d21f7794a, 0x207005b77d6d7f61, 0x0a5a378104cfd6e8, 0x0d65e0d5f4c2fbd6],
    ),
    TableEntry::new(
        [0xd9d09bbeb5275d38, 0x4268a7450be0a358, 0xf0762ff4973eb265, 0xc23da24252f4a232],
        [0x5da1b84f0b94520c, 0x09666763b05bd78e, 0x3a4dcb8694d29ea1, 0x19de3b8cc790cff1],
    ),
    TableEntry::new(
        [0x183a716c26c5fe04, 0x3b28de0b3bba1bdb, 0x7432c586a4cb712c, 0xe34dcbd491fccbfd],
        [0xb408d46baaa58403, 0x9a69748682e97a53, 0x9e39012736aaa8af, 0xe7641f447b4e0f7f],
    ),
    TableEntry::new(
        [0x7d753941df64ba59, 0xd33f10ec0b0242fc, 0x4f06dfc6a1581859, 0x4a12df57052a57bf],
        [0xbfa6338f9439dbd0, 0xd3c24bd4bde53e1f, 0xfd5e4ffa21f1b314, 0x6af5aa93bb5bea46],
    ),
    TableEntry::new(
        [0xda10b69910c91999, 0x0a24b4402a580491, 0x3e0094b4b8cc2090, 0x5fe3475a66a44013],
        [0xb0f8cabdf93e7b4b, 0x292b501a7c23f91a, 0x42e889aecd1e6263, 0xb544e308ecfea916],
    ),
    TableEntry::new(
        [0x6478c6e916ddfdce, 0x2c329166f89179e6, 0x4e8d6e764d4e67e1, 0xe0b6b2bda6b0c20b],
        [0x0d312df2bb7efb57, 0x1aac0dde790c4007, 0xf90336ad679bc944, 0x71c023de25a63774],
    ),
    TableEntry::new(
        [0x62a8c244bfe20925, 0x91c19ac38fdce867, 0x5a96a5d5dd387063, 0x61d587d421d324f6],
        [0xe87673a2a37173ea, 0x2384800853778b65, 0x10f8441e05bab43e, 0xfa11fe124621efbe],
    ),
    TableEntry::new(
        [0x1c891f2b2cb19ffd, 0x01ba8d5bb1923c23, 0xb6d03d678ac5ca8e, 0x586eb04c1f13bedc],
        [0x0c35c6e527e8ed09, 0x1e81a33c1819ede2, 0x278fd6c056c652fa, 0x19d5ac0870864f11],
    ),
    TableEntry::new(
        [0x1e99f581309a4e1f, 0xab7de71be9270074, 0x26a5ef0befd28d20, 0xe7c0073f7f9c563f],
        [0x1f6d663a0ef59f76, 0x669b3b5420fcb050, 0xc08c1f7a7a6602d4, 0xe08504fec65b3c0a],
    ),
    TableEntry::new(
        [0xf098f68da031b3ca, 0x6d1cab9ee6da6d66, 0x5bfd81fa94f246e8, 0x78f018825b0996b4],
        [0xb7eefde43a25787f, 0x8016f80d1dccac9b, 0x0cea4877b35bfc36, 0x43a773b87e94747a],
    ),
    TableEntry::new(
        [0x62577734d2b533d5, 0x673b8af6a1bdddc0, 0x577e7c9aa79ec293, 0xbb6de651c3b266b1],
        [0xe7e9303ab65259b3, 0xd6a0afd3d03a7480, 0xc5ac83d19b3cfc27, 0x60b4619a5d18b99b],
    ),
    TableEntry::new(
        [0xbd6a38e11ae5aa1c, 0xb8b7652b49e73658, 0x0b130014ee5f87ed, 0x9d0f27b2aeebffcd],
        [0xca9246317a730a55, 0x9c955b2fddbbc83a, 0x07c1dfe0ac019a71, 0x244a566d356ec48d],
    ),
    TableEntry::new(
        [0x6db0394aeacf1f96, 0x9f2122a9024c271c, 0x2626ac1b82cbd3b9, 0x45e58c873581ef69],
        [0xd3ff479da38f9dbc, 0xa8aaf146e888a040, 0x945adfb246e0bed7, 0xc040e21cc1e4b7a4],
    ),
    TableEntry::new(
        [0x847af0006f8117b6, 0x651969ff73a35433, 0x482b35761d9475eb, 0x1cdf5c97682c6ec7],
        [0x7db775b411f04839, 0x7dbeacf448de1698, 0xb2921dd1b70b3219, 0x046755f8a92dff3d],
    ),
    TableEntry::new(
        [0xcc8ac5d2bce8ffcd, 0x0d53c48b2fe61a82, 0xf6f161727202d6c7, 0x046e5e113b83a5f3],
        [0xe7b8ff64d8007f01, 0x7fb1ef125af43183, 0x045c5ea635e1a03c, 0x6e0106c3303d005b],
    ),
    TableEntry::new(
        [0x48c7358488dd73b1, 0x7670708f995ed0d9, 0x38385ea8c56a2ab7, 0x442594ede901cf1f],
        [0xf8faa2c912d4b65b, 0x94c2343b96c90c37, 0xd326e4a15e978d1f, 0xa796fa514c2ee68e],
    ),
    TableEntry::new(
        [0x359fb604823addd7, 0x9e2a6183e56693b3, 0xf885b78e3cbf3c80, 0xe4ad2da9c69766e9],
        [0x357f7f428e048a61, 0x082d198cc092d9a0, 0xfc3a1af4c03ed8ef, 0xc5e94046c37b5143],
    ),
    TableEntry::new(
        [0x476a538c2be75f9e, 0x6fd1a9e8cb123a78, 0xd85e4df0b109c04b, 0x63283dafdb464747],
        [0xce728cf7baf2df15, 0xe592c4550ad9a7f4, 0xfab226ade834bcc3, 0x68bd19ab1981a938],
    ),
    TableEntry::new(
        [0xc08ead511887d659, 0x3374d5f4b359305a, 0x96986981cfe74fe3, 0x495292f53c6fdfd6],
        [0x4a878c9e1acec896, 0xd964b210ec5b4484, 0x6696f7e2664d60a7, 0x0ec7530d26036837],
    ),
    TableEntry::new(
        [0x2da13a05ad2687bb, 0xa1f83b6af32e21fa, 0x390f5ef51dd4607b, 0x0f6207a664863f0b],
        [0xbd67e3bb0f138233, 0xdd66b96c272aa718, 0x8ed0040726ec88ae, 0xff0db07208ed6dcf],
    ),
    TableEntry::new(
        [0x749fa1014c95d553, 0xa44052fd5d680a8a, 0x183b4317ff3b566f, 0x313b513c88740ea3],
        [0xb402e2ac08d11549, 0x071ee10bb4dee21c, 0x26b987dd47f2320e, 0x2d3abcf986f19f81],
    ),
    TableEntry::new(
        [0x4c288501815581a2, 0x9a0a6d56632211af, 0x19ba7a0f0cab2e99, 0xc036fa10ded98cdf],
        [0x29ae08bac1fbd009, 0x0b68b19006d15816, 0xc2eb32779b9e0d8f, 0xa6b2a2c4b6d40194],
    ),
    TableEntry::new(
        [0xd433e50f6d3549cf, 0x6f33696ffacd665e, 0x695bfdacce11fcb4, 0x810ee252af7c9860],
        [0x65450fe17159bb2c, 0xf7dfbebe758b357b, 0x2b057e74d69fea72, 0xd485717a92731745],
    ),
    TableEntry::new(
        [0x11741a8af0cb5a98, 0xd3da8f931f3110bf, 0x1994e2cbab382adf, 0x6a6045a72f9a604e],
        [0x170c0d3fa2b2411d, 0xbe0eb83e510e96e0, 0x3bcc9f738865b3cc, 0xd3e45cfaf9e15790],
    ),
    TableEntry::new(
        [0xce1f69bbe83f7669, 0x09f8ae8272877d6b, 0x9548ae543244278d, 0x207755dee3c2c19c],
        [0x87bd61d96fef1945, 0x18813cefb12d28c3, 0x9fbcd1d672df64aa, 0x48dc5ee57154b00d],
    ),
    TableEntry::new(
        [0x123790bff7e5a199, 0xe0efb8cf989ccbb7, 0xc27a2bfe0a519c79, 0xf2fb0aeddff6f445],
        [0x41c09575f0b5025f, 0x550543d740fa9f22, 0x8fa3c8ad380bfbd0, 0xa13e9015db28d525],
    ),
    TableEntry::new(
        [0xf9f7a350a2b65cbc, 0x0b04b9722a464226, 0x265ce241e23f07a1, 0x2bf0d6b01497526f],
        [0xd3d4dd3f4b216fb7, 0xf7d7b867fbdda26a, 0xaeb7b83f6708505c, 0x42a94a5a162fe89f],
    ),
    TableEntry::new(
        [0x5846ad0beaadf191, 0x0f8a489025a268d7, 0xe8603050494dc1f6, 0x2c2dd969c65ede3d],
        [0x6d02171d93849c17, 0x460488ba1da250dd, 0x4810c7063c3a5485, 0xf437fa1f42c56dbc],
    ),
    TableEntry::new(
        [0x6aa0d7144a0f7dab, 0x0f0497931776e9ac, 0x52c0a050f5f39786, 0xaaf45b3354707aa8],
        [0x85e37c33c18d364a, 0xd40b9b063e497165, 0xf417168115ec5444, 0xcdf6310df4f272bc],
    ),
    TableEntry::new(
        [0x7473c6238ea8b7ef, 0x08e9351885bc2287, 0x419567722bda8e34, 0xf0d008bada9e2ff2],
        [0x2912671d2414d3b1, 0xb3754985b019ea76, 0x5c61b96d453bcbdb, 0x5bd5c2f5ca887b8b],
    ),
    TableEntry::new(
        [0xef0f469ef49a3154, 0x3e85a5956e2b2e9a, 0x45aaec1eaa924a9c, 0xaa12dfc8a09e4719],
        [0x26f272274df69f1d, 0xe0e4c82ca2ff5e73, 0xb9d8ce73b7a9dd44, 0x6c036e73e48ca901],
    ),
    TableEntry::new(
        [0x5cfae12a0f6e3138, 0x6966ef0025ad345a, 0x8993c64b45672bc5, 0x292ff65896afbe24],
        [0xd5250d445e213402, 0xf6580e274392c9fe, 0x097b397fda1c72e8, 0x644e0c90311b7276],
    ),
    TableEntry::new(
        [0xe1e421e1a47153f0, 0xb86c3b79920418c9, 0x93bdce87705d7672, 0xf25ae793cab79a77],
        [0x1f3194a36d869d0c, 0x9d55c8824986c264, 0x49fb5ea3096e945e, 0x39b8e65313db0a3e],
    ),
    TableEntry::new(
        [0x37754200b6fd2e59, 0x35e2c0669255c98f, 0xd9dab21a0e2a5739, 0x39122f2f0f19db06],
        [0xcfbce1e003cad53c, 0x225b2c0fe65c17e3, 0x72baf1d29aa13877, 0x8de80af8ce80ff8d],
    ),
    TableEntry::new(
        [0xafbea8d9207bbb76, 0x921c7e7c21782758, 0xdfa2b74b1c0436b1, 0x871949062e368c04],
        [0xb5f928bba3993df5, 0x639d75b5f3b3d26a, 0x011aa78a85b55050, 0xfc315e6a5b74fde1],
    ),
    TableEntry::new(
        [0x561fd41ae8d6ecfa, 0x5f8c44f61aec7f86, 0x98452a7b4924741d, 0xe6d4a7adee389088],
        [0x60552ed14593c75d, 0x70a70da4dd271162, 0xd2aede937ba2c7db, 0x35dfaf9a9be2ae57],
    ),
    TableEntry::new(
        [0x6b956fcdaa736636, 0x09f51d97ae2cab7e, 0xfb10bf410f349966, 0x1da5c7d71c830d2b],
        [0x5c41e4833cce6825, 0x15ad118ff9573c3b, 0xa28552c7f23036b8, 0x7077c0fddbf4b9d6],
    ),
    TableEntry::new(
        [0xbf63ff8d46b9661c, 0xa1dfd36b0d2cfd71, 0x0373e140a847f8f7, 0x53a8632ee50efe44],
        [0x0976ff68696d8051, 0xdaec0c95c74f468a, 0x62994dc35e4e26bd, 0x028ca76d34e1fcc1],
    ),
    TableEntry::new(
        [0xd11d47dcfc9877ee, 0xc8b36210801d0002, 0xd002c11754c260b6, 0x04c17cd86962f046],
        [0x6d9bd094b0daddf5, 0xbea2357524ce55c0, 0x663356e672da03b5, 0xf7ba4de9fed97474],
    ),
    TableEntry::new(
        [0xd0dbfa34ebe1263f, 0x5576373571ae7ce6, 0xd244055382a6f523, 0xe31f960052131c41],
        [0xd1bb9216ea6b6ec6, 0x37a1d12e73c2fc44, 0xc10e7eac89d0a294, 0xaa3a6259ce34d47b],
    ),
    TableEntry::new(
        [0xfbcf9df536f3dcd3, 0x6ceded50d2bf7360, 0x491710fadf504f5b, 0x2398dd627e79daee],
        [0xcf4705a36d09569e, 0xea0619bb5149f769, 0xff9c037735f6034c, 0x5717f5b21c046210],
    ),
    TableEntry::new(
        [0x9fe229c921dd895e, 0x8e51850040c28451, 0xfa13d2391d637ecd, 0x660a2c560e3c28de],
        [0x9cca88aed67fcbd0, 0xc84724780ea9f096, 0x32b2f48172e92b4d, 0x624ee54c4f522453],
    ),
    TableEntry::new(
        [0x09549ce4d897eccc, 0x4d49d1d93f9880aa, 0x723c2423043a7c20, 0x4f392afb92bdfbc0],
        [0x6969f8fa7de44fd9, 0xb66cfbe457b32156, 0xdb2fa803368ebc3c, 0x8a3e7977ccdb399c],
    ),
    TableEntry::new(
        [0xdde1881f06c4b125, 0xae34e300f6e3ca8c, 0xef6999de5c7a13e9, 0x3888d02370c24404],
        [0x7628035644f91081, 0x3d9fcf615f015504, 0x1827edc8632cd36e, 0xa5e62e4718102336],
    ),
    TableEntry::new(
        [0x1a825ee32facd6c8, 0x699c635454bcbc66, 0x0ce3edf798df9931, 0x2c4768e6466a5adc],
        [0xb346ff8c90a64bc9, 0x630a6020e4779f5c, 0xd949d064bc05e884, 0x7b5e6441f9e652a0],
    ),
    TableEntry::new(
        [0x2169422c1d28444a, 0xe996c5d8be136a39, 0x2387afe5fb0c7fce, 0xb8af73cb0c8d744a],
        [0x5fde83aa338b86fd, 0xfee3f158a58a5cff, 0xc9ee8f6f20ac9433, 0xa036395f7f3f0895],
    ),
    TableEntry::new(
        [0x8c73c6bba10f7770, 0xa6f16d81a12a0e24, 0x100df68251bc2b9f, 0x4be36b01875fb533],
        [0x9226086e9fb56dbb, 0x306fef8b07e7a4f8, 0xeeaccc0566d52f20, 0x8cbc9a871bdc00c0],
    ),
    TableEntry::new(
        [0xe131895cc0dac4ab, 0xa874a440712ff112, 0x6332ae7c6a1cee57, 0x44e7553e0c0835f8],
        [0x6d503fff7734002d, 0x9d35cb8b0b34425c, 0x95f702760e8738b5, 0x470a683a5eb8fc18],
    ),
    TableEntry::new(
        [0x81b761dc90513482, 0x0287202a01e9276a, 0xcda441ee0ce73083, 0x16410690c63dc6ef],
        [0xf5034a066d06a2ed, 0xdd4d7745189b100b, 0xd914ae72ab8218c9, 0xd73479fd7abcbb4f],
    ),
    TableEntry::new(
        [0x7edefb165ad4c6e5, 0x262cf08f5b06d04d, 0x12ed5bb18575cb14, 0x816469e30771666b],
        [0xd7ab9d79561e291e, 0xeb9daf22c1de1661, 0xf49827eb135e0513, 0x0a36dd23f0dd3f9c],
    ),
    TableEntry::new(
        [0x098d32c741d5533c, 0x7c5f5a9e8684628f, 0x39a228ade349bd11, 0xe331dfd6fdbab118],
        [0x5100ab686bcc6ed8, 0x7160c3bdef7a260e, 0x9063d9a7bce850d7, 0xd3b4782a492e3389],
    ),
    TableEntry::new(
        [0xa149b6e8f3821f90, 0x92edd9ed66eb7aad, 0x0bb669531a013116, 0x7281275a4c86a5bd],
        [0x503858f7d3ff47e5, 0x5e1616bc61016441, 0x62b0f11a7dfd9bb1, 0x2c062e7ece145059],
    ),
    TableEntry::new(
        [0xa76f996f0159ac2e, 0x281e7736cbdb2713, 0x2ad6d28808e46047, 0x282a35f92c4e7ef1],
        [0x9c354b1ec0ce5cd2, 0xcf99efc91379c229, 0x992caf383e82c11e, 0xc71cd513554d2abd],
    ),
    TableEntry::new(
        [0x4885de9c09b578f4, 0x1884e258e3affa7a, 0x8f76b1b759182f1f, 0xc50f6740cf47f3a3],
        [0xa9c4adf3374b68ea, 0xa406f32369965fe2, 0x2f86a22285a53050, 0xb9ecb3a7212958dc],
    ),
    TableEntry::new(
        [0x56f8410ef4f8b16a, 0x97241afec47b266a, 0x0a406b8e6d9c87c1, 0x803f3e02cd42ab1b],
        [0x7f0309a804dbec69, 0xa83b85f73bbad05f, 0xc6097273ad8e197f, 0xc097440e5067adc1],
    ),
    TableEntry::new(
        [0x846a56f2c379ab34, 0xa8ee068b841df8d1, 0x20314459176c68ef, 0xf1af32d5915f1f30],
        [0x99c375315d75bd50, 0x837cffbaf72f67bc, 0x0613a41848d7723f, 0x23d0f130e2d41c8b],
    ),
    TableEntry::new(
        [0x857ab6edf41500d9, 0x0d890ae5fcbeada8, 0x52fe864889725951, 0xb0288dd6c0a3fadd],
        [0x85320f30650bcb08, 0x71af6313695d6e16, 0x31f520a7b989aa76, 0xffd3724ff408c8d2],
    ),
    TableEntry::new(
        [0x53968e64b458e6cb, 0x992dad20317a5d28, 0x3814ae0b7aa75f56, 0xf5590f4ad78c26df],
        [0x0fc24bd3cf0ba55a, 0x0fc4724a0c778bae, 0x1ce9864f683b674a, 0x18d6da54f6f74a20],
    ),
    TableEntry::new(
        [0xed93e225d5be5a2b, 0x6fe799835934f3c6, 0x4314092622626ffc, 0x50bbb4d97990216a],
        [0x378191c6e57ec63e, 0x65422c40181dcdb2, 0x41a8099b0236e0f6, 0x2b10011801fe49c3],
    ),
    TableEntry::new(
        [0xfc68b5c59b391593, 0xc385f5a2598270fc, 0x7144f3aad19adcbb, 0xdd55899983fbae0c],
        [0x93b88b8e74b82ff4, 0xd2e03c4071e734c9, 0x9a7a9eaf43c0322a, 0xe6e4c551149d6041],
    ),
    TableEntry::new(
        [0x55f655bb1e9af288, 0x647e1a64f7ada931, 0x43697e4bcb2820e5, 0x51e00db107ed56ff],
        [0x43d169b8771c327e, 0x29cdb20b4a96c2ad, 0xc07d51f53deb4779, 0xe22f424149829177],
    ),
    TableEntry::new(
        [0xcd45e8f4635f1abb, 0x7edc0cb568538874, 0xc9472c1fb5a8034d, 0xf709373d52dc48c9],
        [0x401966bba8af30d6, 0x95bf5f4af137b69c, 0x3966162a9361c47e, 0xbd52d288e7275b11],
    ),
    TableEntry::new(
        [0xab155c7a9c5fa877, 0x17dad6727d3a3d48, 0x43f43f9e73d189d8, 0xa0d0f8e4c8aa77a6],
        [0x0bbeafd8cc94f92d, 0xd818c8be0c4ddb3a, 0x22cc65f8b82eba14, 0xa56c78c7946d6a00],
    ),
    TableEntry::new(
        [0x2962391b0dd09529, 0x803e0ea63daddfcf, 0x2c77351f5b5bf481, 0xd8befdf8731a367a],
        [0xab919d42fc0157f4, 0xf51caed7fec8e650, 0xcdf9cb4002d48b0a, 0x854a68a5ce9f6478],
    ),
    TableEntry::new(
        [0xdc35f67b63506ea5, 0x9286c489a4fe0d66, 0x3f101d3bfe95cd4d, 0x5cacea0b98846a95],
        [0xa90df60c9ceac44d, 0x3db29af4354d1c3a, 0x08dd3de8ad5dbabe, 0xe4982d1235e4efa9],
    ),
    TableEntry::new(
        [0x23104a22c34cd55e, 0x58695bb32680d132, 0xfb345afa1fa1d943, 0x8046b7f616b20499],
        [0xb533581e38e7d098, 0xd7f61e8df46f0b70, 0x30dea9ea44cb78c4, 0xeb17ca7b9082af55],
    ),
    TableEntry::new(
        [0x1751b59876a145b9, 0xa5cf6b0fc1bc71ec, 0xd3e03565392715bb, 0x097b00bafab5e131],
        [0xaa66c8e9565f69e1, 0x77e8f75ab5be5199, 0x6033ba11da4fd984, 0xf95c747bafdbcc9e],
    ),
    TableEntry::new(
        [0x558f01d3bebae45e, 0xa8ebe9f0c4bc6955, 0xaeb705b1dbc64fc6, 0x3512601e566ed837],
        [0x9336f1e1fa1161cd, 0x328ab8d54c65ef87, 0x4757eee2724f21e5, 0x0ef971236068ab6b],
    ),
    TableEntry::new(
        [0x02598cf754ca4226, 0x5eede138f8642c8e, 0x48963f74468e1790, 0xfc16d9333b4fbc95],
        [0xbe96fb31e7c800ca, 0x138063312678adaa, 0x3d6244976ff3e8b5, 0x14ca4af1b95d7a17],
    ),
    TableEntry::new(
        [0x7a4771babd2f81d5, 0x1a5f9d6901f7d196, 0xd898bef7cad9c907, 0x4057b063f59c231d],
        [0xbffd82fe89c05c0a, 0xe4911c6f1dc0df85, 0x3befccaea35a16db, 0x1c3b5d64f1330b13],
    ),
    TableEntry::new(
        [0x5fe14bfe80ec21fe, 0xf6ce116ac255be82, 0x98bc5a072f4a5d67, 0xfad27148db7e63af],
        [0x90c0b6ac29ab05b3, 0x37a9a83c4e251ae6, 0x0a7dc875c2aade7d, 0x77387de39f0e1a84],
    ),
    TableEntry::new(
        [0x1e9ecc49a56c0dd7, 0xa5cffcd846086c74, 0x8f7a1408f505aece, 0xb37b85c0bef0c47e],
        [0x3596b6e4cc0e6a8f, 0xfd6d4bbf6b388f23, 0xaba453fac39cef4e, 0x9c135ac8f9f628d5],
    ),
    TableEntry::new(
        [0x32aa320284e35743, 0x320d6ab185a3cdef, 0xb821b1761df19819, 0x5721361fc433851f],
        [0x1f0db36a71fc9168, 0x5f98ba735e5c403c, 0xf64ca87e37bcd8f5, 0xdcbac3c9e6bb11bd],
    ),
    TableEntry::new(
        [0xf01d99684518cbe2, 0xd242fc189c9eb04e, 0x727663c7e47feebf, 0xb8c1c89e2d626862],
        [0x51a58bddc8e1d569, 0x563809c8b7d88cd0, 0x26c27fd9f11f31eb, 0x5d23bbda2f9422d4],
    ),
    TableEntry::new(
        [0x0a1c729495c8f8be, 0x2961c4803bf362bf, 0x9e418403df63d4ac, 0xc109f9cb91ece900],
        [0xc2d095d058945705, 0xb9083d96ddeb85c0, 0x84692b8d7a40449b, 0x9bc3344f2eee1ee1],
    ),
    TableEntry::new(
        [0x0d5ae35642913074, 0x55491b2748a542b1, 0x469ca665b310732a, 0x29591d525f1a4cc1],
        [0xe76f5b6bb84f983f, 0xbe7eef419f5f84e1, 0x1200d49680baa189, 0x6376551f18ef332c],
    ),
    TableEntry::new(
        [0xbda5f14e562976cc, 0x22bca3e60ef12c38, 0xbbfa30646cca9852, 0xbdb79dc808e2987a],
        [0xfd2cb5c9cb06a772, 0x38f475aafe536dce, 0xc2a3e0227c2b5db8, 0x8ee86001add3c14a],
    ),
    TableEntry::new(
        [0xcbe96981a4ade873, 0x7ee9aa4dc4fba48c, 0x2cee28995a054ba5, 0x92e51d7a6f77aa4b],
        [0x948bafa87190a34d, 0xd698f75bf6bd1ed1, 0xd00ee6e30caf1144, 0x5182f86f0a56aaaa],
    ),
    TableEntry::new(
        [0xfba6212c7a4cc99c, 0xff609b683e6d9ca1, 0x5dbb27cb5ac98c5a, 0x91dcab5d4073a6f2],
        [0x01b6cc3d5f575a70, 0x0cb361396f8d87fa, 0x165d4e8c89981736, 0x17a0cedb97974f2b],
    ),
    TableEntry::new(
        [0x38861e2a076c8d3a, 0x701aad39210f924b, 0x94d0eae413a835d9, 0x2e8ce36c7f4cdf41],
        [0x91273dab037a862b, 0x01ba9bb760e4c8fa, 0xf964538833baf2dd, 0xf4ccc6cb34f668f3],
    ),
    TableEntry::new(
        [0x44ef525cf1f79687, 0x7c59549592efa815, 0xe1231741a5c78d29, 0xac0db4889a0df3c9],
        [0x86bfc711df01747f, 0x592b9358ef17df13, 0xe5880e4f5ccb6bb5, 0x95a64a6194c974a2],
    ),
    TableEntry::new(
        [0x72c1efdac15a4c93, 0x40269b7382585141, 0x6a8dfb1c16cb0bad, 0x231e54ba29210677],
        [0xa70df9178ae6d2dc, 0x4d6aa63f39112918, 0xf627726b5e5b7223, 0xab0be032d8a731e1],
    ),
    TableEntry::new(
        [0x097ad0e98d131f2d, 0x637f09e33b04f101, 0x1ac86196d5e9a748, 0xf1bcc8802cf6a679],
        [0x25c69140e8daacb4, 0x3c4e405560f65009, 0x591cc8fc477937a6, 0x851694695aebb271],
    ),
    TableEntry::new(
        [0xde35c143f1dcf593, 0x78202b29b018be3b, 0xe9cdadc29bdd9d3d, 0x8f67d9d2daad55d8],
        [0x841116567481ea5f, 0xe7d2dde9e34c590c, 0xffdd43f405053fa8, 0xf84572b9c0728b5d],
    ),
    TableEntry::new(
        [0x5e1a7a7197af71c9, 0xa14494447a736565, 0xa1b4ae070e1d5063, 0xedee2710616b2c19],
        [0xb2f034f511734121, 0x1cac6e554a25e9f0, 0x8dc148f3a40c2ecf, 0x9fd27e9b44ebd7f4],
    ),
    TableEntry::new(
        [0x3cc7658af6e2cb16, 0xe3eb7d2cfe5919b6, 0x5a8c5816168d5583, 0xa40c2fb6958ff387],
        [0x8c9ec560fedcc158, 0x7ad804c655f23056, 0xd93967049a307e12, 0x99bc9bb87dc6decf],
    ),
    TableEntry::new(
        [0x84a9521d927dafc6, 0x52c1fb695c09cd19, 0x9d9581a0f9366dde, 0x9abe210ba16d7e64],
        [0x480af84a48915220, 0xfa73176a4dd816c6, 0xc7d539871681ca5a, 0x7881c25787f344b0],
    ),
    TableEntry::new(
        [0x93399b51e0bcf3ff, 0x0d02cbc5127f74f6, 0x8fb465a2dd01d968, 0x15e6e319a30e8940],
        [0x646d6e0d3e0e05f4, 0xfad7bddc43588404, 0xbe61c7d1c4f850d3, 0x0e55facf191172ce],
    ),
    TableEntry::new(
        [0x7e9d9806f8787564, 0x1a33172131e85ce6, 0x6b0158cab819e8d6, 0xd73d09766fe96577],
        [0x424834251eb7206e, 0xa519290fc618bb42, 0x5dcbb8595e30a520, 0x9250a3748f15a50b],
    ),
    TableEntry::new(
        [0xcaff08f8be577410, 0xfd408a035077a8c6, 0xf1f63289ec0a63a4, 0x77414082c1cc8c0b],
        [0x05a40fa6eb0991cd, 0xc1ca086649fdc296, 0x3a68a3c7b324fd40, 0x8cb04f4d12eb20b9],
    ),
    TableEntry::new(
        [0xb1c2d0556906171c, 0x9073e9cdb0240c3f, 0xdb8e6b4fd8906841, 0xe4e429ef47123b51],
        [0x0b8dd53c38ec36f4, 0xf9d2dc01ff4b6a27, 0x5d066e07879a9a48, 0x37bca2ff3c6e6552],
    ),
    TableEntry::new(
        [0x4cd2e3c7df562470, 0x44f272a2c0964ac9, 0x7c6d5df980c793be, 0x59913edc3002b22a],
        [0x7a139a835750592a, 0x99e01d80e783de02, 0xcf8c0375ea05d64f, 0x43786e4ab013e226],
    ),
    TableEntry::new(
        [0xff32b0ed9e56b5a6, 0x0750d9a6d9fc68f9, 0xec15e845597846a7, 0x8638ca98b7e79e7a],
        [0x2f5ae0960afc24b2, 0x05398eaf4dace8f2, 0x3b765dd0aecba78f, 0x1ecdd36a7b3aa6f0],
    ),
    TableEntry::new(
        [0x5d3acd626c5ff2f3, 0xa2d516c02873a978, 0xad94c9fad2110d54, 0xd85d0f85d459f32d],
        [0x9f700b8d10b11da3, 0xd2c22c30a78318c4, 0x556988f49208decd, 0xa04f19c3b4ed3c62],
    ),
    TableEntry::new(
        [0x087924c8ed7f93bd, 0xcb64ac5d392f51f6, 0x7cae330a821b71af, 0x92b2eeea5c0950b0],
        [0x85ac4c9485b6e235, 0xab2ca4a92936c0f0, 0x80faa6b3e0508891, 0x1ee782215834276c],
    ),
    TableEntry::new(
        [0xa60a2e00e63e79f7, 0xf590e7b2f399d906, 0x9021054a6607c09d, 0xf3f2ced857a6e150],
        [0x200510f3f10d9b55, 0x9d2fcfacd8642648, 0xe5631aa7e8bd0e7c, 0x0f56a4543da3e210],
    ),
    TableEntry::new(
        [0x5b21bffa1043e0df, 0x6c74b6cc9c007e6d, 0x1a656ec0d4a8517a, 0xbd8f17411969e263],
        [0x8a9bbb86beb7494a, 0x1567d46f45f3b838, 0xdf7a12a7a4e5a79a, 0x2d1a1c3530ccfa09],
    ),
    TableEntry::new(
        [0x192e3813506508da, 0x336180c4a1d795a7, 0xcddb59497a9944b3, 0xa107a65eb91fba46],
        [0xe6d1d1c50f94d639, 0x8b4af3758a58b7d7, 0x1a7c5584bd37ca1c, 0x183d760af87a9af2],
    ),
    TableEntry::new(
        [0x29d697110dde59a4, 0xf1ad8d070e8bef87, 0x229b49634f2ebe78, 0x1d44179dc269d754],
        [0xb32dc0cf8390d30e, 0x0a3b27530de8110c, 0x31af1dc52bc0339a, 0x771f9cc29606d262],
    ),
    TableEntry::new(
        [0x99993e7785040739, 0x44539db98026a939, 0xcf40f6f2f5f8fc26, 0x64427a310362718e],
        [0x4f4f2d8785428aa8, 0x7b7adc3febfb49a8, 0x201b2c6df23d01ac, 0x49d9b7496ae90d6d],
    ),
    TableEntry::new(
        [0xcc78d8bc435d1099, 0x2adbcd4e8e8d1a08, 0x02c2e2a02cb68a41, 0x9037d81b3f605445],
        [0x7cdbac27074c7b61, 0xfe2031ab57bfd72e, 0x61ccec96596d5352, 0x08c3de6a7cc0639c],
    ),
    TableEntry::new(
        [0x20fdd020f6d552ab, 0x56baff9805cd81f1, 0x06fb7c3e91351291, 0xc690944245796b2f],
        [0x17b3ae9c41231bd1, 0x1eac6e875cc58205, 0x208837abf9d6a122, 0x3fa3db02cafe3ac0],
    ),
    TableEntry::new(
        [0xd75a3e6505058880, 0x7da365ef643943f2, 0x4147861cfab24925, 0xc5c4bdb0fdb808ff],
        [0x73513e34b272b56b, 0xc8327e9511b9043a, 0xfd8ce37df8844969, 0x2d56db9446c2b6b5],
    ),
    TableEntry::new(
        [0x2461782fff46ac6b, 0xd19f792607a2e425, 0xfafea3c409a48de1, 0x0f56bd9de503ba42],
        [0x137d4ed1345cda49, 0x821158fc816f299d, 0xe7c6a54aaeb43402, 0x4003bb9d1173b5f1],
    ),
    TableEntry::new(
        [0x3b8e8189a0803387, 0xece115f539cbd404, 0x4297208dd2877f21, 0x53765522a07f2f9e],
        [0xa4980a21a8a4182d, 0xa2bbd07a3219df79, 0x674d0a2e1a19a2d4, 0x7a056f586c5d4549],
    ),
    TableEntry::new(
        [0x646b25589d8a2a47, 0x5b582948c3df2773, 0x51ec000eabf0d539, 0x77d482f17a1a2675],
        [0xb8a1bd9587853948, 0xa6f817bd6cfbffee, 0xab6ec05780681e47, 0x4115012b2b38b0e4],
    ),
    TableEntry::new(
        [0x3c73f0f46de28ced, 0x1d5da7609b13ec47, 0x61b8ce9e6e5c6392, 0xcdf04572fbea0946],
        [0x1cb3c58b6c53c3b0, 0x97fe3c10447b843c, 0xfb2b8ae12cb9780e, 0xee703dda97383109],
    ),
    TableEntry::new(
        [0x34515140ff57e43a, 0xd44660d3b1b811b8, 0x2b3b5dff8f42b986, 0x2a0ad89da162ce21],
        [0x64e4a6946bc277ba, 0xc788c954c141c276, 0x141aa64ccabf6274, 0xd62d0b67ac2b4659],
    ),
    TableEntry::new(
        [0x39c5d87b2c054ac4, 0x57005859f27df788, 0xedf7cbf3b18128d6, 0xb39a23f2991c2426],
        [0x95284a15f0b16ae5, 0x0c6a05b1a136f51b, 0x1d63c137f2700783, 0x04ed0092c0674cc5],
    ),
    TableEntry::new(
        [0x1f4185d19ae90393, 0x3047b4294a3d64e6, 0xae0001a69854fc14, 0xa0a91fc10177c387],
        [0xff0a3f01ae2c831e, 0xbb76ae822b727e16, 0x8f12c8a15a3075b4, 0x084cf9889ed20c41],
    ),
    TableEntry::new(
        [0xd98509defca6becf, 0x2fceae807dffb328, 0x5d8a15c44778e8b9, 0xd57955b273abf77e],
        [0x210da79e31b5d4f1, 0xaa52f04b3cfa7a1c, 0xd4d12089dc27c20b, 0x8e14ea4202d141f1],
    ),
    TableEntry::new(
        [0xeed50345f2897042, 0x8d05331f43402c4a, 0xc8d9c194c8bdfb21, 0x597e1a372aa4d158],
        [0x0327ec1acf0bd68c, 0x6d4be0dcab024945, 0x5b9c8d7ac9fe3e84, 0xca3f0236199b4dea],
    ),
    TableEntry::new(
        [0x592a10b56170bd20, 0x0ea897f16d3f5de7, 0xa3363ff144b2ade2, 0xbde7fd7e309c07e4],
        [0x516bb6d2b8f5432c, 0x210dc1cbe043444b, 0x3db01e6ff8f95b5a, 0xb623ad0e0a7dd198],
    ),
    TableEntry::new(
        [0xa75bd67560c7b65b, 0xab8c559023a4a289, 0xf8220fd0d7b26795, 0xd6aa2e4658ec137b],
        [0x10abc00b5138bb85, 0x8c31d121d833a95c, 0xb24ff00b1702a32e, 0x111662e02dcc513a],
    ),
    TableEntry::new(
        [0x78114015efb42b87, 0xbd9f5d701b6c4dff, 0x66ecccd7a7d7c129, 0xdb3ee1cb94b750f8],
        [0xb26f3db0f34837cf, 0xe7eed18bb9578d4f, 0x5d2cdf937c56657d, 0x886a644252206a59],
    ),
    TableEntry::new(
        [0x3c234cfb65b569ea, 0x20011141f72119c1, 0x8badc85da15a619e, 0xa70cf4eb018a17bc],
        [0x224f97ae8c4a6a65, 0x36e5cf270134378f, 0xbe3a609e4f7e0960, 0xaa4772abd1747b77],
    ),
    TableEntry::new(
        [0x676761317aa60cc0, 0xc79163610368115f, 0xded98bb4bbc1bb5a, 0x611a6ddc30faf974],
        [0x30e78cbcc15ee47a, 0x2e8962824e0d96a5, 0x36f35adf3dd9ed88, 0x5cfffaf816429c88],
    ),
    TableEntry::new(
        [0xc0d54cff9b7a99cd, 0x7bf3b99d843c45a1, 0x038a908f62c739e1, 0x6e5a6b237dc1994c],
        [0xef8b454e0ba5db77, 0xb7b8807facf60d63, 0xe591c0c676608378, 0x481a238d242dabcc],
    ),
    TableEntry::new(
        [0xe3417bc035d0b34a, 0x440b386b8327c0a7, 0x8fb7262dac0362d1, 0x2c41114ce0cdf943],
        [0x2ba5cef1ad95a0b1, 0xc09b37a867d54362, 0x26d6cdd201e486c9, 0x20477abf42ff9297],
    ),
    TableEntry::new(
        [0x2f75173c18d65dbf, 0x77bf940e339edad8, 0x7022d26bdcf1001c, 0xac66409ac77396b6],
        [0x8b0bb36fc6261cc3, 0x213f7bc9190e7e90, 0x6541cebaa45e6c10, 0xce8e6975cc122f85],
    ),
    TableEntry::new(
        [0x0f121b41bc0a67d2, 0x62d4760a444d248a, 0x0e044f1d659b4737, 0x08fde365250bb4a8],
        [0xaceec3da848bf287, 0xc2a62182d3369d6e, 0x3582dfdc92449482, 0x2f7e2fd2565d6cd7],
    ),
    TableEntry::new(
        [0xae4b92dbc3770fa7, 0x095e8d5c379043f9, 0x54f34e9d17761171, 0xc65be92e907702ae],
        [0x2758a303f6fd0a40, 0xe7d822e3bcce784b, 0x7ae4f5854f9767bf, 0x4bff8e47d1193b3a],
    ),
    TableEntry::new(
        [0xcd41d21f00ff1480, 0x2ab8fb7d0754db16, 0xac81d2efbbe0f3ea, 0x3e4e4ae65772967d],
        [0x7e18f36d3c5303e6, 0x3bd9994b92262397, 0x9ed70e261324c3c0, 0x5388aefd58ec6028],
    ),
    TableEntry::new(
        [0xad1317eb5e5d7713, 0x09b985ee75de49da, 0x32f5bc4fc74fb261, 0x5cf908d14f75be0e],
        [0x760435108e657b12, 0xbfd421a5b96ed9e6, 0x0e29f51f8970ccc2, 0xa698ba4060f00ce2],
    ),
    TableEntry::new(
        [0x73db1686ef748fec, 0xe6e755a27e9d2cf9, 0x630b6544ce265eff, 0xb142ef8a7aebad8d],
        [0xad31af9f17d5770a, 0x66af3b672cb3412f, 0x6bd60d1bdf3359de, 0xd1896a9658515075],
    ),
    TableEntry::new(
        [0xec5957ab33c41c08, 0x87de94ac5468e2e1, 0x18816b73ac472f6c, 0x267b0e0b7981da39],
        [0x6e554e5d8e62b988, 0xd8ddc755116d21e7, 0x4610faf03d2a6f99, 0xb54e287aa1119393],
    ),
    TableEntry::new(
        [0x0a0122b5178a876b, 0x51ff96ff085104b4, 0x050b31ab14f29f76, 0x84abb28b5f87d4e6],
        [0xd5ed439f8270790a, 0x2d6cb59d85e3f46b, 0x75f55c1b6c1e2212, 0xe5436f6717655640],
    ),
    TableEntry::new(
        [0x53f9025e2286e8d5, 0x353c95b4864453be, 0xd832f5bde408e3a0, 0x0404f68b5b9ce99e],
        [0xcad33bdea781e8e5, 0x3cdf5018163c2f5b, 0x575769600119caa3, 0x3a4263df0ac1c701],
    ),
    TableEntry::new(
        [0xc2965ecc9aeb596d, 0x01ea03e7023c92b4, 0x4704b4b62e013961, 0x0ca8fd3f905ea367],
        [0x92523a42551b2b61, 0x1eb7a89c390fcd06, 0xe7f1d2be0392a63e, 0x96dca2644ddb0c33],
    ),
    TableEntry::new(
        [0x203bb43a387510af, 0x846feaa8a9a36a01, 0xd23a57702f950378, 0x4363e2123aad59dc],
        [0xca43a1c740246a47, 0xb362b8d2e55dd24d, 0xf9b086045d8faf96, 0x840e115cd8bb98c4],
    ),
    TableEntry::new(
        [0xf12205e21023e8a7, 0xc808a8cdd8dc7a0b, 0xe292a272163a5ddf, 0x5e0d6abd30ded6d4],
        [0x07a721c27cfc0f64, 0x42eec01d0e55ed88, 0x26a7bef91d1f9db2, 0x7dea48f42945a25a],
    ),
    TableEntry::new(
        [0xabdf6f1ce5060a81, 0xe79f9c72f8f95615, 0xcfd36c5406ac268b, 0xabc2a2beebfd16d1],
        [0x8ac66f91d3e2eac7, 0x6f10ba63d2dd0466, 0x6790e3770282d31b, 0x4ea353946c7eefc1],
    ),
    TableEntry::new(
        [0xed8a2f8d5266309d, 0x0a51c6c081945a3e, 0xcecaf45a578c5dc1, 0x3a76e6891c94ffc3],
        [0x9aace8a47d7b0d0f, 0x963ace968f584a5f, 0x51a30c724e697fbe, 0x8212a10a465e6464],
    ),
    TableEntry::new(
        [0xef7c61c3cfab8caa, 0x18eb8e840e142390, 0xcd1dff677e9733ca, 0xaa7cab71599cb164],
        [0x02fc9273bc837bd1, 0xc06407d0c36af5d7, 0x17621292f423da49, 0x40e38073fe0617c3],
    ),
    TableEntry::new(
        [0xf4f80824a7bf9b7c, 0x365d23203fbe30d0, 0xbfbe532097cf9ce3, 0xe3604700b3055526],
        [0x4dcb99116cc6c2c7, 0x72683708ba4cbee6, 0xdcded434637ad9ec, 0x6542d677a3dee15f],
    ),
    TableEntry::new(
        [0x3f32b6d07b6c377a, 0x6cb03847903448be, 0xd6fdd3a820da8af7, 0xa6534aee09bb6f21],
        [0x30a1780d1035facf, 0x35e55a339dcb47e6, 0x6ea50fe1c447f393, 0xf3cb672fdc9aef22],
    ),
    TableEntry::new(
        [0xeb3719fe3b55fd83, 0xe0d7a46c875ddd10, 0x33ac9fa905cea784, 0x7cafaa2eaae870e7],
        [0x9b814d041d53b338, 0xe0acc0a0ef87e6c6, 0xfb93d10811672b0f, 0x0aab13c1b9bd522e],
    ),
    TableEntry::new(
        [0xddcce278d2681297, 0xcb350eb1b509546a, 0x2dc431737661aaf2, 0x4b91a602847012e9],
        [0xdcff109572f8ddcf, 0x08ebf61e9a911af4, 0x48f4360ac372430e, 0x49534c5372321cab],
    ),
    TableEntry::new(
        [0x83df7d71f07b7e9d, 0xa478efa313cd516f, 0x78ef264b6c047ee3, 0xcaf46c4fd65ac5ee],
        [0xa04d0c7792aa8266, 0xedf45466913684bb, 0x56e65168ae4b16b0, 0x14ce9e5704c6770f],
    ),
    TableEntry::new(
        [0x99445e3e965e8f91, 0xd3aca1bacb0f2492, 0xd31cc70f90c8a0a0, 0x1bb708a53e4c9a71],
        [0xd5ca9e69558bdd7a, 0x734a0508018a26b1, 0xb093aa714c9cf1ec, 0xf9d126f2da300102],
    ),
    TableEntry::new(
        [0x749bca7aaff9563e, 0xdd077afeb49914a0, 0xe27a0311bf5f1671, 0x807afcb9729ecc69],
        [0x7f8a9337c9b08b77, 0x86c3a785443c7e38, 0x85fafa59476fd8ba, 0x751adcd16568cd8c],
    ),
    TableEntry::new(
        [0x8aea38b410715c0d, 0xd113ea718f7697f7, 0x665eab1493fbf06d, 0x29ec44682537743f],
        [0x3d94719cb50bebbc, 0x399ee5bfe4505422, 0x90cd5b3a8d2dedb1, 0xff9370e392a4077d],
    ),
    TableEntry::new(
        [0x59a2d69bc6b75b65, 0x4188f8d5266651c5, 0x28a9f33e3de9d7d2, 0x9776478ba2a9d01a],
        [0x8852622d929af2c7, 0x334f5d6d4e690923, 0xce6cc7e5a89a51e9, 0x74a6313fac2f82fa],
    ),
    TableEntry::new(
        [0xb2f4dfddb75f079c, 0x85b07c9518e36fbb, 0x1b6cfcf0e7cd36dd, 0xab75be150ff4863d],
        [0x81b367c0173fc9b7, 0xb90a7420d2594fd0, 0x15fdbf03c4091236, 0x4ebeac2e0b4459f6],
    ),
    TableEntry::new(
        [0xeb6c5fe75c9f2c53, 0xd25220118eae9411, 0xc8887633f95ac5d8, 0xdf99887b2c1baffc],
        [0xbb78eed2850aaecb, 0x9d49181b01d6a272, 0x978dd511b1cdbcac, 0x27b040a7779f4058],
    ),
    TableEntry::new(
        [0x90405db7f73b2eb2, 0xe0df85088e1b2118, 0x501b71525962327e, 0xb393dd37e4cfa3f5],
        [0xa1230e7b3fd75165, 0xd66344c2bcd33554, 0x6c36f1be0f7b5022, 0x09588c12d0463419],
    ),
    TableEntry::new(
        [0xe086093f02601c3b, 0xfb0252f8cf5c335f, 0x955cf280894aff28, 0x81c879a9db9f648b],
        [0x040e687cc6f56c51, 0xfed471693f17618c, 0x44f88a419059353b, 0xfa0d48f55fc11bc4],
    ),
    TableEntry::new(
        [0xbc6e1c9de1608e4d, 0x010dda113582822c, 0xf6b7ddc1157ec2d7, 0x8ea0e156b6a367d6],
        [0xa354e02f2383b3b4, 0x69966b943f01f53c, 0x4ff6632b2de03ca5, 0x3f5ab924fa00b5ac],
    ),
    TableEntry::new(
        [0x337bb0d959739efb, 0xc751b0f4e7ebec0d, 0x2da52dd6411a67d1, 0x8bc768872b74256e],
        [0xa5be3b7282d3d253, 0xa9f679a1f58d779f, 0xa1cac168e16767bb, 0xb386f19060fcf34f],
    ),
    TableEntry::new(
        [0x31f3c1352fedcfc2, 0x5396bf6262f8af0d, 0x9a02b4eae57288c2, 0x4cb460f71b069c4d],
        [0xae67b4d35b8095ea, 0x92bbf8596fc07603, 0xe1475f66b614a165, 0x52c0d50895ef5223],
    ),
    TableEntry::new(
        [0x231c210e15339848, 0xe87a28e870778c8d, 0x9d1de6616956e170, 0x4ac3c9382bb09c0b],
        [0x19be05516998987d, 0x8b2376c4ae09f4d6, 0x1de0b7651a3f933d, 0x380d94c7e39705f4],
    ),
    TableEntry::new(
        [0x01a355aa81542e75, 0x96c724a1ee01b9b7, 0x6b3a2977624d7087, 0x2ce3e171de2637af],
        [0xcfefeb49f5d5bc1a, 0xa655607e2777e2b5, 0x4feaac2f9513756c, 0x2e6cd8520b624e4d],
    ),
    TableEntry::new(
        [0x3685954b8c31c31d, 0x68533d005bf21a0c, 0x0bd7626e75c79ec9, 0xca17754742c69d54],
        [0xcc6edafff6d2dbb2, 0xfd0d8cbd174a9d18, 0x875e8793aa4578e8, 0xa976a7139cab2ce6],
    ),
    TableEntry::new(
        [0x0a651f1b93fb353d, 0xd75cab8b57fcfa72, 0xaa88cfa731b15281, 0x8720a7170a1f4999],
        [0x8c3e8d37693e1b90, 0xd345dc0b16f6dfc3, 0x8ea8d00ab52a8742, 0x9719ef29c769893c],
    ),
    TableEntry::new(
        [0x820eed8d58e35909, 0x9366d8dc33ddc116, 0xd7f999d06e205026, 0xa5072976e15704c1],
        [0x002a37eac4e70b2e, 0x84dcf6576890aa8a, 0xcd71bf18645b2a5c, 0x99389c9df7b77725],
    ),
    TableEntry::new(
        [0x238c08f27ada7a4b, 0x3abe9d03fd389366, 0x6b672e89766f512c, 0xa88806aa202c82e4],
        [0x6602044ad380184e, 0xa8cb78c4126a8b85, 0x79d670c0ad844f17, 0x0043bffb4738dcfe],
    ),
    TableEntry::new(
        [0x8d59b5dc36d5192e, 0xacf885d34590b2af, 0x83566d0a11601781, 0x52f3ef01ba6c4866],
        [0x3986732a0edcb64d, 0x0a482c238068379f, 0x16cbe5fa7040f309, 0x3296bd899ef27e75],
    ),
    TableEntry::new(
        [0x476aba89454d81d7, 0x9eade7ef51eb9b3c, 0x619a21cd81c57986, 0x3b90febfaee571e9],
        [0x9393023e5496f7cb, 0x55be41d87fb51bc4, 0x03f1dd4899beb5ce, 0x6e88069d9f810b18],
    ),
    TableEntry::new(
        [0xce37ab11b43ea1db, 0x0a7ff1a95259d292, 0x851b02218f84f186, 0xa7222beadefaad13],
        [0xa2ac78ec2b0a9144, 0x5a024051f2fa59c5, 0x91d1eca56147ce38, 0xbe94d523bc2ac690],
    ),
    TableEntry::new(
        [0x72f4945e0b226ce7, 0xb8afd747967e8b70, 0xedea46f185a6c63e, 0x7782defe9be8c766],
        [0x760d2aa43db38626, 0x460ae78776f67ad1, 0x341b86fc54499cdb, 0x03838567a2892e4b],
    ),
    TableEntry::new(
        [0x2d8daefd79ec1a0f, 0x3bbcd6fdceb39c97, 0xf5575ffc58f61a95, 0xdbd986c4adf7b420],
        [0x81aa881415f39eb7, 0x6ee2fcf5b98d976c, 0x5465475dcf2f717d, 0x8e24d3c46860bbd0],
    ),
    TableEntry::new(
        [0x749d8e549a587390, 0x12bb194f0cbec588, 0x46e07da4b25983c6, 0x541a99c4407bafc8],
        [0xdb241692624c8842, 0x6044c12ad86c05ff, 0xc59d14b44f7fcf62, 0xc0092c49f57d35d1],
    ),
    TableEntry::new(
        [0xd3cc75c3df2e61ef, 0x7e8841c82e1b35ca, 0xc62d30d1909f29f4, 0x75e406347286944d],
        [0xe7d41fc5bbc237d0, 0xc9537bf0ec4f01c9, 0x91c51a16282bd534, 0x5b7cb658c7848586],
    ),
    TableEntry::new(
        [0x964a70848a28ead1, 0x802dc508fd3b47f6, 0x9ae4bfd1767e5b39, 0x7ae13eba8df097a1],
        [0xfd216ef8eadd384e, 0x0361a2d9b6b2ff06, 0x204b98784bcdb5f3, 0x787d8074e2a8e3fd],
    ),
    TableEntry::new(
        [0xc5e25d6b757fbb1c, 0xe47bddb2ca201deb, 0x4a55e9a36d2233ff, 0x5c2228199ef28484],
        [0x773d4a8588315250, 0x21b21a2b827097c1, 0xab7c4ea1def5d33f, 0xe45d37abbaf0f2b0],
    ),
    TableEntry::new(
        [0xd2df1e3428511c8a, 0xebb229c8bdca6cd3, 0x578a71a7627c39a7, 0xed7bc12284dfb9d3],
        [0xcf22a6df93dea561, 0x5443f18dd48f0ed1, 0xd8b861405bad23e8, 0xaac97cc945ca6d27],
    ),
    TableEntry::new(
        [0xeb54ea74a16bd00a, 0xd839e9adf5c0bcc1, 0x092bb7f11f9bfc06, 0x318f97b31163dc4e],
        [0xecc0c5bec30d7138, 0x44e8df23abc30220, 0x2bb7972fb0223606, 0xfa41faa19a84ff4d],
    ),
    TableEntry::new(
        [0x4402d974a6642269, 0xc81814ce9bb783bd, 0x398d38e47941e60b, 0x38bb6b2c1d26e9e2],
        [0xc64e4a256a577f87, 0x8b52d253dc11fe1c, 0xff336abf62280728, 0x94dd0905ce7601a5],
    ),
    TableEntry::new(
        [0x156cf7dcde93f92a, 0xa01333cb89b5f315, 0x02404df9c995e750, 0x92077867d25c2ae9],
        [0xe2471e010bf39d44, 0x5f2c902096bb53d7, 0x4c44b7b35c9c3d8f, 0x81e8428bd29beb51],
    ),
    TableEntry::new(
        [0x6dd9c2bac477199f, 0x8cb8eeee6b5ecdd9, 0x8af7db3fee40fd0e, 0x1b94ab62dbbfa4b1],
        [0x44f0d8b3ce47f143, 0x51e623fc63f46163, 0xf18f270fcc599383, 0x06a38e28055590ee],
    ),
    TableEntry::new(
        [0x2e5b0139b3355b49, 0x20e26560b4ebf99b, 0xc08ffa6bd269f3dc, 0xa7b36c2083d9d4f8],
        [0x64d15c3a1b3e8830, 0xd5fceae1a89f9c0b, 0xcfeee4a2e2d16930, 0xbe54c6b4a2822a20],
    ),
    TableEntry::new(
        [0xd6cdb3df8d91167c, 0x517c3f79e7a6625e, 0x7105648f346ac7f4, 0xbf30a5abeae022bb],
        [0x8e7785be93828a68, 0x5161c3327f3ef036, 0xe11b5feb592146b2, 0xd1c820de2732d13a],
    ),
    TableEntry::new(
        [0x043e13479038b363, 0x58c11f546b05e519, 0x4fe57abe6026cad1, 0xb7d17bed68a18da3],
        [0x44ca5891e29c2559, 0x4f7a03765bfffd84, 0x498de4af74e46948, 0x3997fd5e6412cc64],
    ),
    TableEntry::new(
        [0xf20746828bd61507, 0x29e132d534a64d2a, 0xffeddfb08a8a15e3, 0x0eeb89293c6c13e8],
        [0xe9b69a3ea7e259f8, 0xce1db7e6d13e7e67, 0x277318f6ad1fa685, 0x228916f8c922b6ef],
    ),
    TableEntry::new(
        [0x959ae25b0a12ab5b, 0xcc11171f957bc136, 0x8058429ed16e2b0c, 0xec05ad1d6e93097e],
        [0x157ba5beac3f3708, 0x31baf93530b59d77, 0x47b55237118234e5, 0x7d3141567ff11b37],
    ),
    TableEntry::new(
        [0x7bd9c05cf6dfefab, 0xbe2f2268dcb37707, 0xe53ead973a38bb95, 0xe9ce66fc9bc1d7a3],
        [0x75aa15766f6a02a1, 0x38c087df60e600ed, 0xf8947f3468cdc1b9, 0xd9650b0172280651],
    ),
    TableEntry::new(
        [0x504b4c4a5a057e60, 0xcbccc3be8def25e4, 0xa635320817c1ccbd, 0x14d6699a804eb7a2],
        [0x2c8a8415db1f411a, 0x09fbaf0bf80d769c, 0xb4deef901c2f77ad, 0x6f4c68410d43598a],
    ),
    TableEntry::new(
        [0x8726df4e96c24a96, 0x534dbc85fcbd99a3, 0x3c466ef28b2ae30a, 0x4c4350fd61189abb],
        [0x2967f716f855b8da, 0x41a42394463c38a1, 0xc37e1413eae93343, 0xa726d2425a3118b5],
    ),
    TableEntry::new(
        [0xdae6b3ee948c1086, 0xf1de503dcbd3a2e1, 0x3f35ed3f03d022f3, 0x13639e82cc6cf392],
        [0x9ac938fbcdafaa86, 0xf45bc5fb2654a258, 0x1963b26e45051329, 0xca9365e1c1a335a3],
    ),
    TableEntry::new(
        [0x3615ac754c3b2d20, 0x742a5417904e241b, 0xb08521c4cc9d071d, 0x9ce29c34970b72a5],
        [0x8cc81f736d3e0ad6, 0x8060da9ef2f8434c, 0x35ed1d1a6ce862d9, 0x48c4abd7ab42af98],
    ),
    TableEntry::new(
        [0xd221b0cc40c7485a, 0xead455bbe5274dbf, 0x493c76989263d2e8, 0x78017c32f67b33cb],
        [0xb9d35769930cb5ee, 0xc0d14e940c408ed2, 0xf8b7bf55272f1a4d, 0x53cd0454de5c1c04],
    ),
    TableEntry::new(
        [0xbcd585fa5d28ccac, 0x5f823e56005b746e, 0x7c79f0a1cd0123aa, 0xeea465c1d3d7fa8f],
        [0x7810659f0551803b, 0x6c0b599f7ce6af70, 0x4195a77029288e70, 0x1b6e42a47ae69193],
    ),
    TableEntry::new(
        [0x2e80937cf67d04c3, 0x1e312be289eeb811, 0x56b5d88792594d60, 0x0224da14187fbd3d],
        [0x87abb8630c5fe36f, 0x580f3c604ef51f5f, 0x964fb1bfb3b429ec, 0x60838ef042bfff33],
    ),
    TableEntry::new(
        [0x432cb2f27e0bbe99, 0x7bda44f304aa39ee, 0x5f497c7a9fa93903, 0x636eb2022d331643],
        [0xfcfd0e6193ae00aa, 0x875a00fe31ae6d2f, 0xf43658a29f93901c, 0x8844eeb639218bac],
    ),
    TableEntry::new(
        [0x114171d26b3bae58, 0x7db3df7117e39f3e, 0xcd37bc7f81a8eada, 0x27ba83dc51fb789e],
        [0xa7df439ffbf54de5, 0x7277030bb5fe1a71, 0x42ee8e35db297a48, 0xadb62d3487f3a4ab],
    ),
    TableEntry::new(
        [0x9b1168a2a175df2a, 0x082aa04f618c32e9, 0xc9e4f2e7146b0916, 0xb990fd7675e7c8b2],
        [0x0829d96b4df37313, 0x1c205579d0b40789, 0x66c9ae4a78087711, 0x81707ef94d10d18d],
    ),
    TableEntry::new(
        [0x97d7cab203d6ff96, 0x5b851bfc0d843360, 0x268823c4d042db4b, 0x3792daead5a8aa5c],
        [0x52818865941afa0b, 0xf3e9e74142d83671, 0x17c825275be4e0a7, 0x5abd635e94b001ba],
    ),
    TableEntry::new(
        [0x727fa84e0ac4927c, 0xe3886035a7c8cf23, 0xa4bcd5ea4adca0df, 0x5995bf21846ab610],
        [0xe90f860b829dfa33, 0xcaafe2ae958fc18b, 0x9b3baf4478630366, 0x44c32ca2d483411e],
    ),
    TableEntry::new(
        [0xa74a97f1e40ed80c, 0x5f938cb131d2ca82, 0x53f2124b7c2d6ad9, 0x1f2162fb8082a54c],
        [0x7e467cc5720b173e, 0x40e8a666085f12f9, 0x8cebc20e4c9d65dc, 0x8f1d402bc3e907c9],
    ),
    TableEntry::new(
        [0x4f592f9cfbc4058a, 0xb15e14b6292f5670, 0xc55cfe37bc1d8c57, 0xb1980f43926edbf9],
        [0x98c33e0932c76b09, 0x1df5279d33b07f78, 0x6f08ead4863bb461, 0x2828ad9b37448e45],
    ),
    TableEntry::new(
        [0x696722c4c4cf4ac5, 0xf5ac1a3fdde64afb, 0x0551baa2e0890832, 0x4973f1275a14b390],
        [0xe59d8335322eac5d, 0x5e07eef50bd9b568, 0xab36720fa2588393, 0x6dac8ed0db168ac7],
    ),
    TableEntry::new(
        [0xf7b545aeeda835ef, 0x4aa113d21d10ed51, 0x035a65e013741b09, 0x4b23ef5920b9de4c],
        [0xe82bb6803c4c7341, 0xd457706d3f58bc37, 0x73527863a51e3ee8, 0x4dd71534ddf49a4e],
    ),
    TableEntry::new(
        [0xbf94467295476cd9, 0x648d072fe31a725b, 0x1441c8b8fc4b67e0, 0xfd3170002f4a4dbb],
        [0x1cb43ff48995d0e1, 0x76e695d10ef729aa, 0xe0d5f97641798982, 0x14fac58c9569f365],
    ),
    TableEntry::new(
        [0xad9a0065f312ae18, 0x51958dc0fcc93fc9, 0xd9a142408a7d2846, 0xed7c765136abda50],
        [0x46270f1a25d4abbc, 0x9b5dd8f3f1a113ea, 0xc609b0755b51952f, 0xfefcb7f74d2e9f53],
    ),
    TableEntry::new(
        [0xbd09497aba119185, 0xd54e8c30aac45ba4, 0x492479deaa521179, 0x1801a57e87e0d80b],
        [0x073d3f8dfcafffb0, 0x6cf33c0bae255240, 0x781d763b5b5fdfbc, 0x9f8fc11e1ead1064],
    ),
    TableEntry::new(
        [0x1583a1715e69544c, 0x0eaf8567f04b7813, 0x1e22a8fd278a4c32, 0xa9d3809d3d3a69a9],
        [0x936c2c2c59a2da3b, 0x38ccbcf61895c847, 0x5e65244e63d50869, 0x3006b9aee1178ef7],
    ),
    TableEntry::new(
        [0x0bb1f2b0c9eead28, 0x7eef635d89f4dfbc, 0x074757fdb2ce8939, 0x0ab85fd745f8f761],
        [0xecda7c933e5b4549, 0x4be2bb5c97922f21, 0x261a1274b43b8040, 0xb122d67511e942c2],
    ),
    TableEntry::new(
        [0x3be607be66a5ae7a, 0x01e703fa76adcbe3, 0xaf9043014eb6e5c5, 0x9f599dc1097dbaec],
        [0x6d75b7180ff250ed, 0x8eb91574349a20dc, 0x425605a410b227a3, 0x7d5528e08a294b78],
    ),
    TableEntry::new(
        [0xf0f58f6620c26def, 0x025585ea582b2d1e, 0xfbe7d79b01ce3881, 0x28ccea01303f1730],
        [0xd1dabcd179644ba5, 0x1fc643e806fff0b8, 0xa60a76fc66b3e17b, 0xc18baf48a1d013bf],
    ),
    TableEntry::new(
        [0x34e638c85dc4216d, 0x00c01067206142ac, 0xd453a17195f5064a, 0x9def809db7a9596b],
        [0x41e8642e67ab8d2c, 0xb42404336237a2b6, 0x7d506a6d64c4218b, 0x0357f8b068808ce5],
    ),
    TableEntry::new(
        [0x8e9dbe644cd2cc88, 0xcc61c28df0b8f39d, 0x4a309874cd30a0c8, 0xe4a01add1b489887],
        [0x2ed1eeacf57cd8f9, 0x1b767d3ebd594c48, 0xa7295c717bd2f787, 0x466d7d79ce10cc30],
    ),
    TableEntry::new(
        [0x47d318929dada2c7, 0x4fa0a6c38f9aa27d, 0x90e4fd28820a59e1, 0xc672a522451ead1a],
        [0x30607cc85d86b655, 0xf0235d3bf9ad4af1, 0x99a08680571172a6, 0x5e3d64faf2a67513],
    ),
    TableEntry::new(
        [0xaa6410c79b3b4416, 0xcd8fcf85eab26d99, 0x5ebff74adb656a74, 0x6c8a7a95eb8e42fc],
        [0x10c60ba7b02a63bd, 0x6b2f23038b8f0047, 0x8c6c3738312d90b0, 0x348ae422ad82ca91],
    ),
    TableEntry::new(
        [0x7f4746635ccda2fb, 0x22accaa18e0726d2, 0x85adf782492b1f20, 0xc1074de0d9ef2d2e],
        [0xfcf3ce44ae9a65b3, 0xfd71e4ac05d7151b, 0xd4711f50ce6a9788, 0xfbadfbdbc9e54ffc],
    ),
    TableEntry::new(
        [0x1713f1cd20a99363, 0xb915658f6cf22775, 0x968175cd24d359b2, 0xb7f976b483716fcd],
        [0x5758e24d5d6dbf74, 0x8d23bafd71c3af36, 0x48f477600243dfe3, 0xf4d41b2ecafcc805],
    ),
    TableEntry::new(
        [0x51f1cf28fdabd48d, 0xce81be3632c078a4, 0x6ace2974117146e9, 0x180824eae0160f10],
        [0x0387698b66e58358, 0x63568752ce6ca358, 0x82380e345e41e6c5, 0x67e5f63983cf6d25],
    ),
    TableEntry::new(
        [0xf89ccb8dcf4899ef, 0x949015f09ebb44c0, 0x546f9276b2598ec9, 0x9fef789a04c11fc6],
        [0x6d367ecf53d2a071, 0xb10e1a7fa4519b09, 0xca6b3fb0611e2eef, 0xbc80c181a99c4e20],
    ),
    TableEntry::new(
        [0x972536f8e5eb82e6, 0x1a484fc7f56cb920, 0xc78e217150b5da5e, 0x49270e629f8cdf10],
        [0x1a39b7bbea6b50ad, 0x9a0284c1a2388ffc, 0x5403eb178107197b, 0xd2ee52f961372f7f],
    ),
    TableEntry::new(
        [0xd37cd28588e0362a, 0x442fa8a78fa5d94d, 0xaff836e5a434a526, 0xdfb478bee5abb733],
        [0xa91f1ce7673eede6, 0xa5390ad42b5b2f04, 0x5e66f7bf5530da2f, 0xd9a140b408df473a],
    ),
    TableEntry::new(
        [0x0e0221b56e8ea498, 0x623478293563ee09, 0xe06b8391335d2ade, 0x760c058d623f4b1a],
        [0x0b89b58cc198aa79, 0xf74890d2f07aba7f, 0x4e204110fde2556a, 0x7141982d8f190409],
    ),
    TableEntry::new(
        [0x6f0a0e334d4b0f45, 0xd9280b38392a94e1, 0x3af324c6b3c61d5e, 0x3af9d1ce89d54e47],
        [0xfd8f798120930371, 0xeda2664c21c17097, 0x0e9545dcdc42309b, 0xb1f815c373957dd6],
    ),
    TableEntry::new(
        [0x84faa78e89fec44a, 0xc8c2ae473caa4caf, 0x691c807dc1b6a624, 0xa41aed141543f052],
        [0x424353997d5ffe04, 0x8bacb2df625b6e20, 0x85d660be87817775, 0xd6e9c1dd86fb60ef],
    ),
    TableEntry::new(
        [0x3aa2e97ec6853264, 0x771533b7e2304a0b, 0x1b912bb7b8eae9be, 0x9c9c6e10ae9bf8c2],
        [0xa2309a59e030b74c, 0x4ed7494d6a631e90, 0x89f44b23a49b79f2, 0x566bd59640fa61b6],
    ),
    TableEntry::new(
        [0x066c0118c18061f3, 0x190b25d37c83fc70, 0xf05fc8e027273245, 0xcf2c7390f525345e],
        [0xa09bceb410eb30cf, 0xcfd2ebba0d77703a, 0xe842c43a150ff255, 0x02f517558aa20979],
    ),
    TableEntry::new(
        [0x396ef794addb7d07, 0x0b4fc74224455500, 0xfaff8eacc78aa3ce, 0x14e9ada5e8d4d97d],
        [0xdaa480a12f7079e2, 0x45baa3cde4b0800e, 0x01765e2d7838157d, 0xa0ad4fab8e9d9ae8],
    ),
    TableEntry::new(
        [0x0bfb76214a653618, 0x1872813c31eaaa5f, 0x1553e73744949d5e, 0xbcd530b86e56ed1e],
        [0x169be85332e9c47b, 0xdc2776feb50059ab, 0xcdba9761192bfbb4, 0x909283cf6979341d],
    ),
    TableEntry::new(
        [0x67b0032476e81a13, 0x9bee1a9962171239, 0x08ed361bd32e19d6, 0x35eeb7c9ace1549a],
        [0x1280ae5a7e4e5bdc, 0x2dcd2cd3b6ceec6e, 0x52e4224c6e266bc1, 0x9a8b2cf4448ae864],
    ),
    TableEntry::new(
        [0xf6471bf209d03b59, 0xc90e62a3b65af2ab, 0xff7ff168ebd5eec9, 0x6bdb60f4d4491379],
        [0xdadafebc8a55bc30, 0xc79ead1610097fe0, 0x42e197414c1e3bdd, 0x01ec3cfd94ba08a9],
    ),
    TableEntry::new(
        [0xba6277ebdc9485c2, 0x48cc9a7922fb10c7, 0x4f61d60f70a28d8a, 0xd1acb1c0475464f6],
        [0xd26902b126f36612, 0x59c3a44ee0618d8b, 0x4df8a813308357ee, 0x7dcd079d405626c2],
    ),
    TableEntry::new(
        [0x5ce7d4d3f05a4b48, 0xadcd295237230772, 0xd18f7971812a915a, 0x0bf53589377d19b8],
        [0x35ecd95a6c68ea73, 0xc7f3bbca823a584d, 0x9fb674c6f473a723, 0xd28be4d9e16686fc],
    ),
    TableEntry::new(
        [0x5d2b990638fa8e4b, 0x559f186e893fd8fc, 0x3a6de2aa436fb6fc, 0xd76007aa510f88ce],
        [0x2d10aab6523a4988, 0xb455cf4474dd0273, 0x7f467082a3407278, 0xf2b52f68b303bb01],
    ),
    TableEntry::new(
        [0x0d57eafa9835b4ca, 0x2d2232fcbb669cbc, 0x8eeeb680c6643198, 0xd8dbe98ecc5aed3a],
        [0xcba9be3fc5a02709, 0x30be68e5f5ba1fa8, 0xfebd43cdf10ea852, 0xe01593a3ee559705],
    ),
    TableEntry::new(
        [0xd3e5af50ea75a0a6, 0x512226ac57858033, 0x6fe6d50fd0176406, 0xafec07b1aeb8ef06],
        [0x7fb9956780bb0a31, 0x6f1af3cc37309aae, 0x9153a15a01abf389, 0xa71b93546e2dbfdd],
    ),
    TableEntry::new(
        [0xbf8e12e018f593d2, 0xd1a90428a078122b, 0x150505db0ba4f2ad, 0x53a2005c628523d9],
        [0x07c8b639e7f2b935, 0x2bff975ac182961a, 0x86bceea77518ca2c, 0xbf47d19b3d588e3d],
    ),
    TableEntry::new(
        [0x672967a7dd7665d5, 0x4e3030572f2f4de5, 0x144005ae80d4903f, 0x001c2c7f39c9a1b6],
        [0x143a801469efc6d6, 0xc810bdaa7bc7a724, 0x5f65670ba78150a4, 0xfdadf8e786ffb99b],
    ),
    TableEntry::new(
        [0xfd38cb88ffc00785, 0x77fa75913b48eb67, 0x0454d055bf368fbc, 0x3a838e4d5aa43c94],
        [0x561663293e97bb9a, 0x9eb93363441d94d9, 0x515591a60adb2a83, 0x3cdb8257873e1da3],
    ),
    TableEntry::new(
        [0x137140a97de77eab, 0xf7e1c50d41648109, 0x762dcad2ceb1d0df, 0x5a60cc89f1f57fba],
        [0x80b3638240d45673, 0x1b82be195913c655, 0x057284b8dd64b741, 0x922ff56fdbfd8fc0],
    ),
    TableEntry::new(
        [0x1b265deec9a129a1, 0xa5b1ce57cc284e04, 0x04380c46cebfbe3c, 0x72919a7df6c5cd62],
        [0x298f453a8fb90f9a, 0xd719c00b88e4031b, 0xe32c0e77796f1856, 0x5e7917803624089a],
    ),
    TableEntry::new(
        [0x5c16ec557f63cdfb, 0x8e6a3571f1cae4fd, 0xfce26bea560597ca, 0x4e0a5371e24c2fab],
        [0x276a40d3a5765357, 0x3c89af440d73a2b4, 0xb8f370ae41d11a32, 0xf5ff7818d56604ee],
    ),
    TableEntry::new(
        [0xfbf3e3fe1a09df21, 0x26d5d28ee66e8e47, 0x2096bd0a29c89015, 0xe41df0e9533f5e64],
        [0x305fda40b3ba9e3f, 0xf2340ceb2604d895, 0x0866e1927f0367c7, 0x8edd7d6eac4f155f],
    ),
    TableEntry::new(
        [0xc9a1dc0e0bfc8ff3, 0x14efd82be936f42f, 0x67016f7ccca381ef, 0x1432c1caed8aee96],
        [0xec68482970b23c26, 0xa64fe8730735b273, 0xe389f6e5eaef0f5a, 0xcaef480b5ac8d2c6],
    ),
    TableEntry::new(
        [0x5245c97875315922, 0xd82951713063cca5, 0xf3ce60d0b64ef2cb, 0xd0ba177e8efae236],
        [0x53a9ae8fb1b3af60, 0x1a796ae53d2da20e, 0x01d63605df9eef28, 0xf31c957c1c54ae16],
    ),
    TableEntry::new(
        [0xc0f58d5249cc4597, 0xdc5015b0bae0a028, 0xefc5fc55734a814a, 0x013404cb96e17c3a],
        [0xb29e2585c9a824bf, 0xd593185e001eaed7, 0x8d6ee68261ef68ac, 0x6f377c4b91933e6c],
    ),
    TableEntry::new(
        [0x9f93bad1a8333fd2, 0xa89302025a2a95b8, 0x211e5037eaf75ace, 0x6dba3e4ed2d09506],
        [0xa48ef98cd04399cd, 0x1811c66ee6b73ade, 0x72f60752c17ecaf3, 0xf13cf3423becf4a7],
    ),
    TableEntry::new(
        [0xceeb9ec0a919e2eb, 0x83a9a195f62c0f68, 0xcfba3bb67aba2299, 0xc83fa9a9274bbad3],
        [0x0d7d1b0b62fa1ce0, 0xe58b60f53418efbf, 0xbfa8ef9e52706f04, 0xb49d70f45d702683],
    ),
    TableEntry::new(
        [0x914c7510fad5513b, 0x05f32eecb1751e2d, 0x6d850418d9fb9d59, 0x59cfadbb0c30f1cf],
        [0xe167ac2355cb7fd6, 0x249367b8820426a3, 0xeaeec58c90a78864, 0x5babf362354a4b67],
    ),
    TableEntry::new(
        [0x37c981d1ee424865, 0x8b002878f2e5577f, 0x702970f1b9e0c058, 0x6188c6a79026c8f0],
        [0x06f9a19bd0f244da, 0x1ecced5cfb080873, 0x35470f9b9f213637, 0x993fe475df50b9d9],
    ),
    TableEntry::new(
        [0x68e31cdf9b2c3609, 0x84eb19c02c46d4ea, 0x7ac9ec1a9a775101, 0x81f764664c80616b],
        [0x1d7c2a5a75fbe978, 0x6743fed3f183b356, 0x838d1f04501dd2bf, 0x564a812a5fe9060d],
    ),
    TableEntry::new(
        [0x7a5a64f4fa817d1d, 0x55f96844bea82e0f, 0xb5ff5a0fcd57f9aa, 0x226bf3cf00e51d6c],
        [0xd6d1a9f92f2833cf, 0x20a0a35a4f4f89a8, 0x11536c498f3f7f77, 0x68779f47ff257836],
    ),
    TableEntry::new(
        [0x79b0c1c173043d08, 0xa54467741fc020fa, 0xd3767e289a6d26d0, 0x97bcb0d1eb092e0b],
        [0x2ab6eaa8f32ed3c3, 0xc8a4f151b281bc48, 0x4d1bf4f3bfa178f3, 0xa872ffe80a784655],
    ),
    TableEntry::new(
        [0xb1ab7935a32b2086, 0xe1eb710e8160f486, 0x9bd0cd913b6ae6be, 0x02812bfcb732a36a],
        [0xa63fd7cacf605318, 0x646e5d50fdfd6d1d, 0xa1d683982102d619, 0x07391cc9fe5396af],
    ),
    TableEntry::new(
        [0xc50157f08b80d02b, 0x6b8333d162877f7f, 0x7aca1af878d542ae, 0x355d2adc7e6d2a08],
        [0xb41f335a287386e1, 0xfd272a94f8e43275, 0x286ca2cde79989ea, 0x3dc2b1e37c2a3a79],
    ),
    TableEntry::new(
        [0xd689d21c04581352, 0x0a00c825376782be, 0x203bd5909fed701f, 0xc47869103ccd846b],
        [0x5dba770824c768ed, 0x72feea026841f657, 0x73313ed56accce0e, 0xccc42968d5bb4d32],
    ),
    TableEntry::new(
        [0x94e50de13d7620b9, 0xd89a5c8a5992a56a, 0xdc007640675487c9, 0xe147eb42aa4871cf],
        [0x274ab4eeacf3ae46, 0xfd4936fb50350fbe, 0xdf2afe4748c840ea, 0x239ac047080e96e3],
    ),
    TableEntry::new(
        [0x481d1f352bfee8d4, 0xce80b5cffa7b0fec, 0x105c4c9e2ce9af3c, 0xc55fa1a3f5f7e59d],
        [0x3186f14e8257c227, 0xc5b1653f342be00b, 0x09afc998aa904fb2, 0x094cd99cd4f4b699],
    ),
    TableEntry::new(
        [0x8a981c84d703beba, 0x8631d15032ceb291, 0xa445f2c9e3bd49ec, 0xb90a30b642abad33],
        [0xb465404fb4a5abf9, 0x004750c375db7603, 0x6f9a42ccca35d89f, 0x019f8b9a1b7924f7],
    ),
];

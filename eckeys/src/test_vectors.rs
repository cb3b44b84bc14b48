//! Sample key pairs captured from Java 8 `java.security` (DER) and iOS 10
//! `Security` (X9.63) for each supported curve.
//!
//! The DER and X9.63 halves of a sample are two distinct key pairs. The DER
//! private keys are given in both layouts: without embedded public key, as
//! written by Java, and with it, as written by PKCS#8 writers which include
//! the optional public key. `shared_secret` is the ECDH agreement between the
//! DER private key and the X9.63 public key.

use hex_literal::hex;

/// Sample key pair in every supported encoding.
#[derive(Debug)]
pub struct KeyPairVector {
    /// DER private key without embedded public key.
    pub der_private_key: &'static [u8],

    /// Same private key with the public key embedded.
    pub der_private_key_with_public: &'static [u8],

    /// DER SubjectPublicKeyInfo matching `der_private_key`.
    pub der_public_key: &'static [u8],

    /// X9.63 private key `04 ‖ X ‖ Y ‖ d`.
    pub x963_private_key: &'static [u8],

    /// X9.63 public key matching `x963_private_key`.
    pub x963_public_key: &'static [u8],

    /// ECDH shared secret of `der_private_key` and `x963_public_key`.
    pub shared_secret: &'static [u8],
}

/// P-256 key pair.
pub const P256_KEY_PAIR: KeyPairVector = KeyPairVector {
    der_private_key: &hex!(
        "3041020100301306072a8648ce3d020106082a8648ce3d030107042730250201
         0104205f3ba800f543b5e10ffc9f41a58b5cb392b3974090447f73102b80919e
         d23d3c"
    ),
    der_private_key_with_public: &hex!(
        "308187020100301306072a8648ce3d020106082a8648ce3d030107046d306b02
         010104205f3ba800f543b5e10ffc9f41a58b5cb392b3974090447f73102b8091
         9ed23d3ca1440342000478b9f457f24ab0866d24c7a6ce16ff2ada047d17c400
         7ef82d0cc4d30fc88eee3d5a010f9a0e5cf914382975b57f39023972c9b11146
         7e1802b41c2baef73b6f"
    ),
    der_public_key: &hex!(
        "3059301306072a8648ce3d020106082a8648ce3d0301070342000478b9f457f2
         4ab0866d24c7a6ce16ff2ada047d17c4007ef82d0cc4d30fc88eee3d5a010f9a
         0e5cf914382975b57f39023972c9b111467e1802b41c2baef73b6f"
    ),
    x963_private_key: &hex!(
        "049baa30947c47d914881f57f6b19bc6c940340c0ec68b2aa24901387fbbb3f5
         a015505c64844ff07886e3ef77829e5fb7b887620b3c0b50157a6d3e2db0ac0c
         3aa1bb81a9a643565253acef008919d09b97f5f8d2fbce87199998d686b0514a
         91"
    ),
    x963_public_key: &hex!(
        "049baa30947c47d914881f57f6b19bc6c940340c0ec68b2aa24901387fbbb3f5
         a015505c64844ff07886e3ef77829e5fb7b887620b3c0b50157a6d3e2db0ac0c
         3a"
    ),
    shared_secret: &hex!("080de6d98000c261495439a20eb6d07358d0c1d96db31c191b307ebb5d75903e"),
};

/// P-384 key pair.
pub const P384_KEY_PAIR: KeyPairVector = KeyPairVector {
    der_private_key: &hex!(
        "304e020100301006072a8648ce3d020106052b81040022043730350201010430
         b8235c9b34b8a2f351752d2f41d52761c413cf32becbd1e8caa8a5f0df681445
         1b95584b2317e80dea7168383c2e2b35"
    ),
    der_private_key_with_public: &hex!(
        "3081b6020100301006072a8648ce3d020106052b8104002204819e30819b0201
         010430b8235c9b34b8a2f351752d2f41d52761c413cf32becbd1e8caa8a5f0df
         6814451b95584b2317e80dea7168383c2e2b35a16403620004fa413e161f14c0
         d5e3c84b960999f21b5f1ed8e514436f623fca380cf86929d939e8e0c4776616
         de8243ce1fa72eefc83e30ac24a93d0f1b112af692a044c0df1585c06aca6e3f
         38940b4c81bd108773360a6f0d87305dd8347a4681b36818b9"
    ),
    der_public_key: &hex!(
        "3076301006072a8648ce3d020106052b8104002203620004fa413e161f14c0d5
         e3c84b960999f21b5f1ed8e514436f623fca380cf86929d939e8e0c4776616de
         8243ce1fa72eefc83e30ac24a93d0f1b112af692a044c0df1585c06aca6e3f38
         940b4c81bd108773360a6f0d87305dd8347a4681b36818b9"
    ),
    x963_private_key: &hex!(
        "04d59bf24bf8d395313dad5b093021e4d23427b14156ca06a796c2c9dea3efa2
         16ec5effad64a625f3b9101f77d30cc593440b7754d24e1e349f1a7413d5ad31
         1faae912b46d6cfb1277c04d232431e623242917f9ff27a89c8e860a53f3cdf1
         1c254a4ded73beda80542139158cf3b4c65c9c2a551d2878fbab8ca2dc1f1013
         39fbbf3cd497e38f684775e99fd2322647"
    ),
    x963_public_key: &hex!(
        "04d59bf24bf8d395313dad5b093021e4d23427b14156ca06a796c2c9dea3efa2
         16ec5effad64a625f3b9101f77d30cc593440b7754d24e1e349f1a7413d5ad31
         1faae912b46d6cfb1277c04d232431e623242917f9ff27a89c8e860a53f3cdf1
         1c"
    ),
    shared_secret: &hex!(
        "f9eaa406e56cab44353b1d88caea16e43c0e994b6c64b83214e0276c954dfbc3
         984f9f1efbba9ae7788f2490cb432ea0"
    ),
};

/// P-521 key pairs whose Provider-A DER private keys carry 64, 65 and 66 byte
/// scalars, in that order.
pub const P521_KEY_PAIRS: &[KeyPairVector] = &[
    // 64 byte scalar
    KeyPairVector {
        der_private_key: &hex!(
            "305e020100301006072a8648ce3d020106052b81040023044730450201010440
             d1db0308b604e98bbf7344785ae248db7765a99d0153e086e7deebd16823389f
             0960f57b73729115ff6e3226d23ce00ea0bc04637b2959a783f593314e656a85"
        ),
        der_private_key_with_public: &hex!(
            "3081ee020100301006072a8648ce3d020106052b810400230481d63081d30201
             0104420000d1db0308b604e98bbf7344785ae248db7765a99d0153e086e7deeb
             d16823389f0960f57b73729115ff6e3226d23ce00ea0bc04637b2959a783f593
             314e656a85a181890381860004019c74048c38c71f32861dc862ef5be51ad46d
             b5664e184f493d9cca83ba3012bb7f8a62f5632e050b9108e9362f268e4c639f
             b694681a0ecb237043e383092344000131c317526f15f845f1ba997a89c88184
             4f7239ece5694f2da86a831b5ae41d6b5e84eb146f3802240d2fcc34df7975e5
             1bc186e251b9ae5439f307835520bc47bd"
        ),
        der_public_key: &hex!(
            "30819b301006072a8648ce3d020106052b810400230381860004019c74048c38
             c71f32861dc862ef5be51ad46db5664e184f493d9cca83ba3012bb7f8a62f563
             2e050b9108e9362f268e4c639fb694681a0ecb237043e383092344000131c317
             526f15f845f1ba997a89c881844f7239ece5694f2da86a831b5ae41d6b5e84eb
             146f3802240d2fcc34df7975e51bc186e251b9ae5439f307835520bc47bd"
        ),
        x963_private_key: &hex!(
            "040099257a6b2d27325362ba1bf9512c4ac2c78c846e85334b689ebbe5262d10
             d62a3ff5bbae8a3eec2e8aabfcb2d87546c8065502a7c1250bd1efa5f487ba0c
             fc144e0179c8921b088115a91204fc264eb10611da79ec4feea2f63f8f412b7a
             baf54148c160487347e1f3b336eaa06011ac43c4298f0590b565e50ad04ee857
             3f6a1a2816016be5e85eb3e50305357c7b5b5768d9e3f12616fe5474ecae2d42
             39fc846faef3867c84c0c1929050e1d074ea802785573d408e0c76aa6a8d61f5
             c3d77f001aebdc"
        ),
        x963_public_key: &hex!(
            "040099257a6b2d27325362ba1bf9512c4ac2c78c846e85334b689ebbe5262d10
             d62a3ff5bbae8a3eec2e8aabfcb2d87546c8065502a7c1250bd1efa5f487ba0c
             fc144e0179c8921b088115a91204fc264eb10611da79ec4feea2f63f8f412b7a
             baf54148c160487347e1f3b336eaa06011ac43c4298f0590b565e50ad04ee857
             3f6a1a2816"
        ),
        shared_secret: &hex!(
            "015de87dedc055aab494d24c96feb327312b77802e0822767cb36bc53682e296
             5289d2fd26b042b7ab59301e4c9238eebf10474f28d8d034ee04c5275e81b2e5
             3c04"
        ),
    },
    // 65 byte scalar
    KeyPairVector {
        der_private_key: &hex!(
            "305f020100301006072a8648ce3d020106052b81040023044830460201010441
             a538188c965f9fcaca63e9e8cd223f014c5de21e84e7591b2c8a419f3f143a23
             74e9876a943b7411feb3969980c2450a64984960e08a360e2da4ff9ae9507664
             1a"
        ),
        der_private_key_with_public: &hex!(
            "3081ee020100301006072a8648ce3d020106052b810400230481d63081d30201
             01044200a538188c965f9fcaca63e9e8cd223f014c5de21e84e7591b2c8a419f
             3f143a2374e9876a943b7411feb3969980c2450a64984960e08a360e2da4ff9a
             e95076641aa181890381860004019ea9452dbdbec82ee48cfd61f733ebfb6125
             868f2ada679fd3cd858af0003fb5fe5d6dc9ef85884dfe7e6c7e9dc4df76daac
             8fdb7b0144959e0f0031a2b0b93ca701249300016073b15afac268b36a5ee759
             e369dc3d30b5e84586d8c7f09a8850ee5180b465abfd74e645121688ad4d1583
             d17f1565d2c90477d42877054e23ad042a"
        ),
        der_public_key: &hex!(
            "30819b301006072a8648ce3d020106052b810400230381860004019ea9452dbd
             bec82ee48cfd61f733ebfb6125868f2ada679fd3cd858af0003fb5fe5d6dc9ef
             85884dfe7e6c7e9dc4df76daac8fdb7b0144959e0f0031a2b0b93ca701249300
             016073b15afac268b36a5ee759e369dc3d30b5e84586d8c7f09a8850ee5180b4
             65abfd74e645121688ad4d1583d17f1565d2c90477d42877054e23ad042a"
        ),
        x963_private_key: &hex!(
            "04008b1c6dd13ba69675a6170393194d32ff2afe673cd0cb58227838b3cc85b5
             f06d4d77e6a69670a4cb4301fa5fbaa432c7b25045ecf5e878909a16a11baa1b
             9a9f6101e9a4c0caf4069910a39050d43bfe4cd085b1d2f64365ced55a6f57f4
             100433e5598b6585aed4ad4898c2ffb0854a2e0dce01d2e937c7702038bb9244
             4aec565b76003d66113ad2f18a5e4e2998de194898855bee0dcb764e6601d352
             c9048e84ca81dc6c9f67fd0b7c6d0038b2b99924423fd8b5d2cb616ed3162ee3
             7d904407ad7724"
        ),
        x963_public_key: &hex!(
            "04008b1c6dd13ba69675a6170393194d32ff2afe673cd0cb58227838b3cc85b5
             f06d4d77e6a69670a4cb4301fa5fbaa432c7b25045ecf5e878909a16a11baa1b
             9a9f6101e9a4c0caf4069910a39050d43bfe4cd085b1d2f64365ced55a6f57f4
             100433e5598b6585aed4ad4898c2ffb0854a2e0dce01d2e937c7702038bb9244
             4aec565b76"
        ),
        shared_secret: &hex!(
            "0055a0aa783cb69863cd3861661adcb8284d3c7dca53a5d44bc978efaee5789d
             de01e8461f091c92ed1eb04d644e24d99544ae3ef905158068c06a0ab15dad32
             3179"
        ),
    },
    // 66 byte scalar
    KeyPairVector {
        der_private_key: &hex!(
            "3060020100301006072a8648ce3d020106052b81040023044930470201010442
             01833d5f7572751ea40de343a02aeaa9c8f45640ef1f79468631de9f585865d0
             6399e9d12a889e87634ed1b704cb2dcbe6defd78c42647249a1df152bb7fa766
             c3bc"
        ),
        der_private_key_with_public: &hex!(
            "3081ee020100301006072a8648ce3d020106052b810400230481d63081d30201
             01044201833d5f7572751ea40de343a02aeaa9c8f45640ef1f79468631de9f58
             5865d06399e9d12a889e87634ed1b704cb2dcbe6defd78c42647249a1df152bb
             7fa766c3bca181890381860004012b92c6d3732e5e80f6518d06ef7a29581829
             5d3fb5f169655fe2ab40cb01d3047c0d6d30057daf1aed42677dd56447e4558e
             5cf652a282aad894ddfd0b22fca8aa01293e495bff8b1e7b7cae19985a5c1a1f
             7e190fb7d56eca02032627e820a67926a5ea2518058a72d16b5c03f72e59115b
             961c0d1fb0357ff12f9e9c8198c174c4ad"
        ),
        der_public_key: &hex!(
            "30819b301006072a8648ce3d020106052b810400230381860004012b92c6d373
             2e5e80f6518d06ef7a295818295d3fb5f169655fe2ab40cb01d3047c0d6d3005
             7daf1aed42677dd56447e4558e5cf652a282aad894ddfd0b22fca8aa01293e49
             5bff8b1e7b7cae19985a5c1a1f7e190fb7d56eca02032627e820a67926a5ea25
             18058a72d16b5c03f72e59115b961c0d1fb0357ff12f9e9c8198c174c4ad"
        ),
        x963_private_key: &hex!(
            "04004c154a3bc6763895cd7339df07f5328c9af5b550489110aa38be69199060
             fd5f8b0717f80943fb06714955883f52dd8659f7679eaa3ad957c5c073b82385
             dc5232016269d98716b445b0dcbad0b89fb2fe8498408442572ea274fb886a8f
             95da58e3e31cf8cafaee9b70fcde59417d661c7e7414496ce64df730b26ac6ec
             4107c9647800482e6f488dd756ba66bfc0acae6bfec07702ed92520c3bc8d888
             37656a261a7a23b0d90924e93a29c596f1dd220d1cc35048523f8ac852dfc02a
             d7166e1c5abedb"
        ),
        x963_public_key: &hex!(
            "04004c154a3bc6763895cd7339df07f5328c9af5b550489110aa38be69199060
             fd5f8b0717f80943fb06714955883f52dd8659f7679eaa3ad957c5c073b82385
             dc5232016269d98716b445b0dcbad0b89fb2fe8498408442572ea274fb886a8f
             95da58e3e31cf8cafaee9b70fcde59417d661c7e7414496ce64df730b26ac6ec
             4107c96478"
        ),
        shared_secret: &hex!(
            "01e6dff68ab119c4265f53eb5f99db3e858bc061d2906511135bc307d6d543a4
             6476bfe1ad3fbcf290096b03b95fb6746f39848135021f1eaf8985743769b50d
             26a2"
        ),
    },
];

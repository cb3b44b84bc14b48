//! NIST P-256 elliptic curve (a.k.a. prime256v1, secp256r1)

use super::{Curve, CurveProfile};

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
/// and is specified in [NIST SP 800-186].
///
/// ```text
/// secp256r1 OBJECT IDENTIFIER ::= {
///     iso(1) member-body(2) us(840) ansi-X9-62(10045) curves(3) prime(1) 7 }
/// ```
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP256;

impl Curve for NistP256 {
    const PROFILE: &'static CurveProfile = &P256;
}

/// NIST P-256 encoding constants.
pub const P256: CurveProfile = CurveProfile {
    name: "P-256",
    bits: 256,
    coordinate_width: 32,
    public_key_der_prefix: &[
        0x30, 0x59, // SEQUENCE (89)
        0x30, 0x13, // SEQUENCE (19)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07, // OID 1.2.840.10045.3.1.7
        0x03, 0x42, // BIT STRING (66)
        0x00, // unused bits
    ],
    // 3041 020100 3013 06072A8648CE3D0201 06082A8648CE3D030107 0427 3025 020101 0420 [d]
    private_key_der_prefix: &[
        0x30, 0x41, // SEQUENCE (65)
        0x02, 0x01, 0x00, // INTEGER 0
        0x30, 0x13, // SEQUENCE (19)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07, // OID 1.2.840.10045.3.1.7
        0x04, 0x27, // OCTET STRING (39)
        0x30, 0x25, // SEQUENCE (37)
        0x02, 0x01, 0x01, // INTEGER 1
        0x04, 0x20, // OCTET STRING (32)
    ],
    // 308187 020100 3013 06072A8648CE3D0201 06082A8648CE3D030107 046D 306B 020101 0420 [d]
    // A144 0342 00 [04 X Y]
    private_key_der_prefix_part1: &[
        0x30, 0x81, 0x87, // SEQUENCE (135)
        0x02, 0x01, 0x00, // INTEGER 0
        0x30, 0x13, // SEQUENCE (19)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07, // OID 1.2.840.10045.3.1.7
        0x04, 0x6D, // OCTET STRING (109)
        0x30, 0x6B, // SEQUENCE (107)
        0x02, 0x01, 0x01, // INTEGER 1
        0x04, 0x20, // OCTET STRING (32)
    ],
    private_key_der_prefix_part2: &[
        0xA1, 0x44, // [1] (68)
        0x03, 0x42, // BIT STRING (66)
        0x00, // unused bits
    ],
    public_key_bit_string_len: 66,
};

//! NIST P-384 elliptic curve (a.k.a. secp384r1)

use super::{Curve, CurveProfile};

/// NIST P-384 elliptic curve.
///
/// ```text
/// secp384r1 OBJECT IDENTIFIER ::= {
///     iso(1) identified-organization(3) certicom(132) curve(0) 34 }
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP384;

impl Curve for NistP384 {
    const PROFILE: &'static CurveProfile = &P384;
}

/// NIST P-384 encoding constants.
pub const P384: CurveProfile = CurveProfile {
    name: "P-384",
    bits: 384,
    coordinate_width: 48,
    public_key_der_prefix: &[
        0x30, 0x76, // SEQUENCE (118)
        0x30, 0x10, // SEQUENCE (16)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x22, // OID 1.3.132.0.34
        0x03, 0x62, // BIT STRING (98)
        0x00, // unused bits
    ],
    // 304E 020100 3010 06072A8648CE3D0201 06052B81040022 0437 3035 020101 0430 [d]
    private_key_der_prefix: &[
        0x30, 0x4E, // SEQUENCE (78)
        0x02, 0x01, 0x00, // INTEGER 0
        0x30, 0x10, // SEQUENCE (16)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x22, // OID 1.3.132.0.34
        0x04, 0x37, // OCTET STRING (55)
        0x30, 0x35, // SEQUENCE (53)
        0x02, 0x01, 0x01, // INTEGER 1
        0x04, 0x30, // OCTET STRING (48)
    ],
    // 3081B6 020100 3010 06072A8648CE3D0201 06052B81040022 04819E 30819B 020101 0430 [d]
    // A164 0362 00 [04 X Y]
    private_key_der_prefix_part1: &[
        0x30, 0x81, 0xB6, // SEQUENCE (182)
        0x02, 0x01, 0x00, // INTEGER 0
        0x30, 0x10, // SEQUENCE (16)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x22, // OID 1.3.132.0.34
        0x04, 0x81, 0x9E, // OCTET STRING (158)
        0x30, 0x81, 0x9B, // SEQUENCE (155)
        0x02, 0x01, 0x01, // INTEGER 1
        0x04, 0x30, // OCTET STRING (48)
    ],
    private_key_der_prefix_part2: &[
        0xA1, 0x64, // [1] (100)
        0x03, 0x62, // BIT STRING (98)
        0x00, // unused bits
    ],
    public_key_bit_string_len: 98,
};

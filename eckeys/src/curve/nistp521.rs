//! NIST P-521 elliptic curve (a.k.a. secp521r1)

use super::{Curve, CurveProfile};

/// NIST P-521 elliptic curve.
///
/// ```text
/// secp521r1 OBJECT IDENTIFIER ::= {
///     iso(1) identified-organization(3) certicom(132) curve(0) 35 }
/// ```
///
/// Scalars are at most 66 bytes, but writers which encode the private key
/// as an INTEGER drop its leading zero bytes, so 64 and 65 byte scalars are
/// found in the wild too:
///
/// ```text
/// 3060 020100 3010 06072A8648CE3D0201 06052B81040023 0449 3047 020101 0442 [d: 66 bytes]
/// 305F 020100 3010 06072A8648CE3D0201 06052B81040023 0448 3046 020101 0441 [d: 65 bytes]
/// 305E 020100 3010 06072A8648CE3D0201 06052B81040023 0447 3045 020101 0440 [d: 64 bytes]
/// ```
///
/// All of them decode to the same left-padded 66 byte scalar. Encoding always
/// produces the first form.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP521;

impl Curve for NistP521 {
    const PROFILE: &'static CurveProfile = &P521;
}

/// NIST P-521 encoding constants.
pub const P521: CurveProfile = CurveProfile {
    name: "P-521",
    bits: 521,
    coordinate_width: 66,
    public_key_der_prefix: &[
        0x30, 0x81, 0x9B, // SEQUENCE (155)
        0x30, 0x10, // SEQUENCE (16)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x23, // OID 1.3.132.0.35
        0x03, 0x81, 0x86, // BIT STRING (134)
        0x00, // unused bits
    ],
    private_key_der_prefix: &[
        0x30, 0x60, // SEQUENCE (96)
        0x02, 0x01, 0x00, // INTEGER 0
        0x30, 0x10, // SEQUENCE (16)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x23, // OID 1.3.132.0.35
        0x04, 0x49, // OCTET STRING (73)
        0x30, 0x47, // SEQUENCE (71)
        0x02, 0x01, 0x01, // INTEGER 1
        0x04, 0x42, // OCTET STRING (66)
    ],
    // 3081EE 020100 3010 06072A8648CE3D0201 06052B81040023 0481D6 3081D3 020101 0442 [d]
    // A18189 038186 00 [04 X Y]
    private_key_der_prefix_part1: &[
        0x30, 0x81, 0xEE, // SEQUENCE (238)
        0x02, 0x01, 0x00, // INTEGER 0
        0x30, 0x10, // SEQUENCE (16)
        0x06, 0x07, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01, // OID 1.2.840.10045.2.1
        0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x23, // OID 1.3.132.0.35
        0x04, 0x81, 0xD6, // OCTET STRING (214)
        0x30, 0x81, 0xD3, // SEQUENCE (211)
        0x02, 0x01, 0x01, // INTEGER 1
        0x04, 0x42, // OCTET STRING (66)
    ],
    private_key_der_prefix_part2: &[
        0xA1, 0x81, 0x89, // [1] (137)
        0x03, 0x81, 0x86, // BIT STRING (134)
        0x00, // unused bits
    ],
    public_key_bit_string_len: 134,
};

//! Supported elliptic curves and the per-curve constants driving the codecs.
//!
//! Every curve is described by a [`CurveProfile`]: the coordinate width and
//! the fixed DER byte templates which surround the key material. The
//! templates are the compatibility contract with other ecosystems and are
//! reproduced byte-for-byte.
//!
//! DER references:
//!
//! - SubjectPublicKeyInfo for EC keys: [RFC 5480] section 2
//! - `ECPrivateKey`: [RFC 5915] section 3, wrapped in a PKCS#8
//!   `PrivateKeyInfo` ([RFC 5208])
//!
//! [RFC 5480]: https://datatracker.ietf.org/doc/html/rfc5480
//! [RFC 5915]: https://datatracker.ietf.org/doc/html/rfc5915
//! [RFC 5208]: https://datatracker.ietf.org/doc/html/rfc5208

mod nistp256;
mod nistp384;
mod nistp521;

pub use self::{
    nistp256::{NistP256, P256},
    nistp384::{NistP384, P384},
    nistp521::{NistP521, P521},
};

use core::fmt::Debug;

/// Profiles of all supported curves, in ascending key size.
pub const PROFILES: [&CurveProfile; 3] = [&P256, &P384, &P521];

/// Uncompressed point tag of an X9.63 / SEC1 encoded public key.
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Per-curve constants used to encode and decode keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveProfile {
    /// Curve name, e.g. `"P-256"`.
    pub name: &'static str,

    /// Key size in bits, as passed to [`Provider::generate_private_key`].
    ///
    /// [`Provider::generate_private_key`]: crate::Provider::generate_private_key
    pub bits: usize,

    /// Size of one serialized coordinate, and of the serialized scalar.
    pub coordinate_width: usize,

    /// SubjectPublicKeyInfo header preceding the X9.63 point, up to and
    /// including the BIT STRING unused-bits byte.
    pub public_key_der_prefix: &'static [u8],

    /// PKCS#8 header preceding the scalar when no public key is embedded.
    pub private_key_der_prefix: &'static [u8],

    /// PKCS#8 header preceding the scalar when the public key is embedded.
    pub private_key_der_prefix_part1: &'static [u8],

    /// Bytes between the scalar and the X9.63 point when the public key is
    /// embedded, up to and including the BIT STRING unused-bits byte.
    pub private_key_der_prefix_part2: &'static [u8],

    /// Length of the public key BIT STRING contents: the unused-bits byte
    /// followed by the X9.63 point.
    pub public_key_bit_string_len: usize,
}

impl CurveProfile {
    /// Length of an X9.63 encoded public key: `04 ‖ X ‖ Y`.
    pub const fn public_key_x963_len(&self) -> usize {
        1 + 2 * self.coordinate_width
    }

    /// Length of an X9.63 encoded private key: `04 ‖ X ‖ Y ‖ d`.
    pub const fn private_key_x963_len(&self) -> usize {
        self.public_key_x963_len() + self.coordinate_width
    }

    /// Length of a DER encoded public key.
    pub const fn public_key_der_len(&self) -> usize {
        self.public_key_der_prefix.len() + self.public_key_x963_len()
    }

    /// Length of a canonical DER encoded private key without public key.
    pub const fn private_key_der_len(&self) -> usize {
        self.private_key_der_prefix.len() + self.coordinate_width
    }

    /// Length of a canonical DER encoded private key with public key.
    pub const fn private_key_der_with_public_len(&self) -> usize {
        self.private_key_der_prefix_part1.len()
            + self.coordinate_width
            + self.private_key_der_prefix_part2.len()
            + self.public_key_x963_len()
    }

    /// Look up the profile of the curve with the given key size in bits.
    pub fn for_bits(bits: usize) -> Option<&'static Self> {
        PROFILES.into_iter().find(|profile| profile.bits == bits)
    }

    /// Look up the profile whose X9.63 public keys are `len` bytes long.
    pub fn for_public_key_x963_len(len: usize) -> Option<&'static Self> {
        PROFILES
            .into_iter()
            .find(|profile| profile.public_key_x963_len() == len)
    }

    /// Look up the profile whose X9.63 private keys are `len` bytes long.
    pub fn for_private_key_x963_len(len: usize) -> Option<&'static Self> {
        PROFILES
            .into_iter()
            .find(|profile| profile.private_key_x963_len() == len)
    }
}

/// Elliptic curve supported by the key codecs.
///
/// Implemented by zero-sized marker types which select the [`CurveProfile`]
/// used by [`PublicKey`](crate::PublicKey) and
/// [`PrivateKey`](crate::PrivateKey).
pub trait Curve: 'static + Copy + Clone + Debug + Default + Eq + Ord + Send + Sync {
    /// Constants describing this curve's encodings.
    const PROFILE: &'static CurveProfile;
}

#[cfg(test)]
mod tests {
    use super::{CurveProfile, PROFILES};
    use crate::tlv;

    /// Check that the outermost SEQUENCE of a template, completed with
    /// `body_len` bytes of key material, declares exactly its own size.
    fn assert_outer_length(template: &[u8], body_len: usize) {
        let mut der = template.to_vec();
        der.resize(template.len() + body_len, 0);
        let (len, consumed) = tlv::read_length(&der, 1).unwrap();
        assert_eq!(der[0], 0x30);
        assert_eq!(1 + consumed + len, der.len());
    }

    #[test]
    fn templates_declare_their_own_size() {
        for profile in PROFILES {
            let w = profile.coordinate_width;
            assert_outer_length(profile.public_key_der_prefix, profile.public_key_x963_len());
            assert_outer_length(profile.private_key_der_prefix, w);
            assert_outer_length(
                profile.private_key_der_prefix_part1,
                w + profile.private_key_der_prefix_part2.len() + profile.public_key_x963_len(),
            );
        }
    }

    #[test]
    fn bit_string_length_matches_templates() {
        for profile in PROFILES {
            assert_eq!(
                profile.public_key_bit_string_len,
                profile.public_key_x963_len() + 1
            );

            for template in [
                profile.public_key_der_prefix,
                profile.private_key_der_prefix_part2,
            ] {
                let bit_string_len = template[template.len() - 2] as usize;
                assert_eq!(bit_string_len, profile.public_key_bit_string_len);
            }
        }
    }

    #[test]
    fn scalar_length_matches_templates() {
        for profile in PROFILES {
            for template in [
                profile.private_key_der_prefix,
                profile.private_key_der_prefix_part1,
            ] {
                assert_eq!(template[template.len() - 1] as usize, profile.coordinate_width);
                assert!(template.ends_with(&[0x02, 0x01, 0x01, 0x04, template[template.len() - 1]]));
            }
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(CurveProfile::for_bits(384).map(|p| p.name), Some("P-384"));
        assert_eq!(CurveProfile::for_bits(512), None);
        assert_eq!(
            CurveProfile::for_public_key_x963_len(133).map(|p| p.name),
            Some("P-521")
        );
        assert_eq!(
            CurveProfile::for_private_key_x963_len(97).map(|p| p.name),
            Some("P-256")
        );
        assert_eq!(CurveProfile::for_private_key_x963_len(96), None);
    }
}

//! Elliptic curve private keys.
//!
//! Two DER layouts of the same PKCS#8 wrapped SEC1 `ECPrivateKey` are in
//! common use:
//!
//! - without the optional public key, using short form lengths throughout
//!   (e.g. Java 8 `java.security`). The public key travels separately as a
//!   SubjectPublicKeyInfo.
//! - with the public key embedded in the `[1]` field, which pushes the outer
//!   structures past 127 bytes and into long form lengths (e.g. iOS 14
//!   `Security`, CryptoKit).
//!
//! Both are decoded by anchoring on the `02 01 01 04` bytes right before the
//! scalar instead of walking the full structure.

use crate::{
    Curve, CurveProfile, Error, PublicKey, Result,
    tlv::{self, PRIVATE_KEY_MARKER},
};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// Elliptic curve private key: a scalar together with its public key.
///
/// The scalar is stored left-padded to the curve's coordinate width and is
/// zeroized on drop. Whether the scalar is in range, and whether it matches
/// the public key, is checked by the [`Provider`](crate::Provider) when the
/// key is used.
pub struct PrivateKey<C: Curve> {
    scalar: Vec<u8>,
    public_key: PublicKey<C>,
}

impl<C: Curve> PrivateKey<C> {
    /// Decode a private key from its X9.63 encoding `04 ‖ X ‖ Y ‖ d`.
    pub fn from_x963(bytes: &[u8]) -> Result<Self> {
        let width = C::PROFILE.coordinate_width;

        let split = bytes.len().checked_sub(width).ok_or_else(|| {
            tracing::debug!(
                curve = C::PROFILE.name,
                len = bytes.len(),
                "X9.63 private key shorter than a scalar"
            );
            Error::InvalidLength
        })?;

        let (point, scalar) = bytes.split_at(split);

        Ok(Self {
            public_key: PublicKey::from_x963(point)?,
            scalar: scalar.to_vec(),
        })
    }

    /// Decode a DER private key without embedded public key, along with its
    /// separately DER encoded public key.
    ///
    /// Scalars shorter than the coordinate width are left-padded, which
    /// accepts writers that dropped leading zero bytes.
    pub fn from_der(der: &[u8], public_der: &[u8]) -> Result<Self> {
        let (scalar, _) = parse_scalar(C::PROFILE, der)?;

        Ok(Self {
            public_key: PublicKey::from_der(public_der)?,
            scalar,
        })
    }

    /// Decode a DER private key with the public key embedded after the
    /// scalar.
    pub fn from_der_with_public(bytes: &[u8]) -> Result<Self> {
        let profile = C::PROFILE;
        let (scalar, end) = parse_scalar(profile, bytes)?;

        // Everything past the scalar: `[1]` and BIT STRING headers, the
        // unused-bits byte and the point.
        let (unused_bits, headers) = profile
            .private_key_der_prefix_part2
            .split_last()
            .ok_or(Error::MalformedEncoding)?;

        let bit_string = bytes[end..].strip_prefix(headers).ok_or_else(|| {
            tracing::debug!(curve = profile.name, "unexpected embedded public key header");
            Error::PrefixMismatch
        })?;

        if bit_string.len() != profile.public_key_bit_string_len {
            tracing::debug!(
                curve = profile.name,
                len = bit_string.len(),
                expected = profile.public_key_bit_string_len,
                "embedded public key has wrong length"
            );
            return Err(Error::MalformedEncoding);
        }

        match bit_string.split_first() {
            Some((first, point)) if first == unused_bits => Ok(Self {
                public_key: PublicKey::from_x963(point)?,
                scalar,
            }),
            _ => Err(Error::MalformedEncoding),
        }
    }

    /// Encode as DER without embedded public key.
    pub fn to_der(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new([C::PROFILE.private_key_der_prefix, self.scalar.as_slice()].concat())
    }

    /// Encode as DER with the public key embedded after the scalar.
    pub fn to_der_with_public(&self) -> Zeroizing<Vec<u8>> {
        let profile = C::PROFILE;

        Zeroizing::new(
            [
                profile.private_key_der_prefix_part1,
                self.scalar.as_slice(),
                profile.private_key_der_prefix_part2,
                self.public_key.to_x963(),
            ]
            .concat(),
        )
    }

    /// Encode as X9.63 `04 ‖ X ‖ Y ‖ d`.
    pub fn to_x963(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new([self.public_key.to_x963(), self.scalar.as_slice()].concat())
    }

    /// Big-endian scalar, left-padded to the curve's coordinate width.
    pub fn raw_scalar_bytes(&self) -> &[u8] {
        &self.scalar
    }

    /// Public key of this private key.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }
}

/// Locate the scalar following the `02 01 01 04` marker and left-pad it to
/// the coordinate width.
///
/// Returns the padded scalar and the offset of the first byte after it.
fn parse_scalar(profile: &CurveProfile, der: &[u8]) -> Result<(Vec<u8>, usize)> {
    let width = profile.coordinate_width;

    let marker = tlv::find_subsequence(der, &PRIVATE_KEY_MARKER).ok_or_else(|| {
        tracing::debug!(curve = profile.name, "private key marker not found");
        Error::MalformedEncoding
    })?;

    let (len, consumed) = tlv::read_length(der, marker.end)?;
    let begin = marker.end + consumed;
    let end = begin + len;

    if len > width {
        tracing::debug!(curve = profile.name, len, "private key scalar too long");
        return Err(Error::InvalidLength);
    }

    let mut scalar = vec![0u8; width];
    scalar[width - len..].copy_from_slice(&der[begin..end]);
    Ok((scalar, end))
}

impl<C: Curve> Clone for PrivateKey<C> {
    fn clone(&self) -> Self {
        Self {
            scalar: self.scalar.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

impl<C: Curve> ConstantTimeEq for PrivateKey<C> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.scalar.as_slice().ct_eq(other.scalar.as_slice())
            & self.public_key.to_x963().ct_eq(other.public_key.to_x963())
    }
}

impl<C: Curve> Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &C::default())
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl<C: Curve> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl<C: Curve> Eq for PrivateKey<C> {}

impl<C: Curve> PartialEq for PrivateKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> TryFrom<&[u8]> for PrivateKey<C> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_x963(bytes)
    }
}

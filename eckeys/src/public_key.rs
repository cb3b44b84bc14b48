//! Elliptic curve public keys.

use crate::{Curve, Error, Result, curve::UNCOMPRESSED_POINT_TAG};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Elliptic curve public key: an uncompressed curve point.
///
/// Stored in its X9.63 form `04 ‖ X ‖ Y`, from which the DER and raw forms
/// are derived. Points are not checked to lie on the curve; that is left to
/// the [`Provider`](crate::Provider) consuming them.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct PublicKey<C: Curve> {
    point: Vec<u8>,
    curve: PhantomData<C>,
}

impl<C: Curve> PublicKey<C> {
    /// Decode a public key from its X9.63 encoding `04 ‖ X ‖ Y`.
    pub fn from_x963(bytes: &[u8]) -> Result<Self> {
        let profile = C::PROFILE;

        if bytes.len() != profile.public_key_x963_len() {
            tracing::debug!(
                curve = profile.name,
                len = bytes.len(),
                "X9.63 public key has wrong length"
            );
            return Err(Error::InvalidLength);
        }

        if bytes[0] != UNCOMPRESSED_POINT_TAG {
            tracing::debug!(
                curve = profile.name,
                tag = bytes[0],
                "public key is not an uncompressed point"
            );
            return Err(Error::MalformedEncoding);
        }

        Ok(Self {
            point: bytes.to_vec(),
            curve: PhantomData,
        })
    }

    /// Decode a public key from a DER encoded SubjectPublicKeyInfo.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let profile = C::PROFILE;

        if bytes.len() != profile.public_key_der_len() {
            tracing::debug!(
                curve = profile.name,
                len = bytes.len(),
                "DER public key has wrong length"
            );
            return Err(Error::InvalidLength);
        }

        let point = bytes
            .strip_prefix(profile.public_key_der_prefix)
            .ok_or_else(|| {
                tracing::debug!(curve = profile.name, "unexpected DER public key header");
                Error::PrefixMismatch
            })?;

        Self::from_x963(point)
    }

    /// Decode a public key from its raw coordinates `X ‖ Y`, i.e. the X9.63
    /// encoding without the leading `0x04` tag.
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 2 * C::PROFILE.coordinate_width {
            return Err(Error::InvalidLength);
        }

        let mut point = Vec::with_capacity(1 + bytes.len());
        point.push(UNCOMPRESSED_POINT_TAG);
        point.extend_from_slice(bytes);

        Ok(Self {
            point,
            curve: PhantomData,
        })
    }

    /// Encode this public key as a DER SubjectPublicKeyInfo.
    pub fn to_der(&self) -> Vec<u8> {
        [C::PROFILE.public_key_der_prefix, self.point.as_slice()].concat()
    }

    /// Raw coordinates `X ‖ Y`.
    pub fn to_raw(&self) -> &[u8] {
        &self.point[1..]
    }

    /// X9.63 encoding `04 ‖ X ‖ Y`.
    pub fn to_x963(&self) -> &[u8] {
        &self.point
    }
}

impl<C: Curve> AsRef<[u8]> for PublicKey<C> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.to_x963()
    }
}

impl<C: Curve> Debug for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey<{:?}>({:02x?})", C::default(), self.point)
    }
}

impl<C: Curve> TryFrom<&[u8]> for PublicKey<C> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_x963(bytes)
    }
}

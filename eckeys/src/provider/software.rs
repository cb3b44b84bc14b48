//! Pure Rust provider built on the RustCrypto `p256`, `p384` and `p521`
//! crates.

use crate::{CurveProfile, Error, Provider, Result};
use alloc::vec::Vec;
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey,
    ecdh::diffie_hellman,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
};
use rand_core::OsRng;

/// [`Provider`] performing curve arithmetic in software, with randomness
/// from the operating system.
///
/// Imported keys get the same checks a platform key store applies: points
/// must lie on the curve, scalars must be in range, and the public point of
/// an X9.63 private key must match its scalar.
#[derive(Copy, Clone, Debug, Default)]
pub struct SoftwareProvider;

impl Provider for SoftwareProvider {
    fn generate_private_key(&self, bits: usize) -> Result<Vec<u8>> {
        tracing::trace!(bits, "generating private key");

        match bits {
            256 => Ok(generate::<p256::NistP256>()),
            384 => Ok(generate::<p384::NistP384>()),
            521 => Ok(generate::<p521::NistP521>()),
            _ => {
                tracing::debug!(bits, "unsupported key size");
                Err(Error::Provider)
            }
        }
    }

    fn key_agreement(&self, private_key: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let profile = CurveProfile::for_public_key_x963_len(public_key.len())
            .filter(|profile| profile.private_key_x963_len() == private_key.len())
            .ok_or_else(|| {
                tracing::debug!(
                    private_len = private_key.len(),
                    public_len = public_key.len(),
                    "key lengths do not identify a single curve"
                );
                Error::Provider
            })?;

        tracing::trace!(curve = profile.name, "computing shared secret");

        let (own_public_key, scalar) = private_key.split_at(profile.public_key_x963_len());

        match profile.bits {
            256 => agree::<p256::NistP256>(own_public_key, scalar, public_key),
            384 => agree::<p384::NistP384>(own_public_key, scalar, public_key),
            521 => agree::<p521::NistP521>(own_public_key, scalar, public_key),
            _ => Err(Error::Provider),
        }
    }
}

/// Generate a random key pair, serialized as `04 ‖ X ‖ Y ‖ d`.
fn generate<C>() -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::random(&mut OsRng);

    let mut x963 = secret
        .public_key()
        .to_encoded_point(false)
        .as_bytes()
        .to_vec();

    x963.extend_from_slice(&secret.to_bytes());
    x963
}

/// ECDH between the key pair (`own_public_key`, `scalar`) and `peer_public_key`.
fn agree<C>(own_public_key: &[u8], scalar: &[u8], peer_public_key: &[u8]) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::from_slice(scalar).map_err(|_| {
        tracing::debug!("private scalar out of range");
        Error::Provider
    })?;

    let own_public_key = PublicKey::<C>::from_sec1_bytes(own_public_key).map_err(|_| {
        tracing::debug!("own public key is not a curve point");
        Error::Provider
    })?;

    if secret.public_key().as_affine() != own_public_key.as_affine() {
        tracing::debug!("public key does not belong to private scalar");
        return Err(Error::Provider);
    }

    let peer_public_key = PublicKey::<C>::from_sec1_bytes(peer_public_key).map_err(|_| {
        tracing::debug!("peer public key is not a curve point");
        Error::Provider
    })?;

    let shared = diffie_hellman(secret.to_nonzero_scalar(), peer_public_key.as_affine());
    Ok(shared.raw_secret_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::SoftwareProvider;
    use crate::{CurveProfile, Error, Provider, curve::PROFILES, test_vectors::*};

    #[test]
    fn generated_keys_have_x963_shape() {
        for profile in PROFILES {
            let key = SoftwareProvider.generate_private_key(profile.bits).unwrap();
            assert_eq!(key.len(), profile.private_key_x963_len());
            assert_eq!(key[0], 0x04);
        }
    }

    #[test]
    fn unsupported_key_size() {
        assert_eq!(
            SoftwareProvider.generate_private_key(192),
            Err(Error::Provider)
        );
    }

    #[test]
    fn known_shared_secrets() {
        let vectors = [&P256_KEY_PAIR, &P384_KEY_PAIR]
            .into_iter()
            .chain(P521_KEY_PAIRS);

        for vector in vectors {
            let profile = CurveProfile::for_public_key_x963_len(vector.x963_public_key.len()).unwrap();

            // DER pair re-expressed in X9.63
            let mut der_x963 = vector.der_public_key[profile.public_key_der_prefix.len()..].to_vec();
            let scalar = &vector.der_private_key_with_public
                [profile.private_key_der_prefix_part1.len()..][..profile.coordinate_width];
            der_x963.extend_from_slice(scalar);

            let secret = SoftwareProvider
                .key_agreement(&der_x963, vector.x963_public_key)
                .unwrap();
            assert_eq!(secret, vector.shared_secret);

            let secret = SoftwareProvider
                .key_agreement(
                    vector.x963_private_key,
                    &vector.der_public_key[profile.public_key_der_prefix.len()..],
                )
                .unwrap();
            assert_eq!(secret, vector.shared_secret);
        }
    }

    #[test]
    fn reject_mismatched_key_pair() {
        let mut private_key = P256_KEY_PAIR.x963_private_key.to_vec();
        let last = private_key.len() - 1;
        private_key[last] ^= 1;

        assert_eq!(
            SoftwareProvider.key_agreement(&private_key, P256_KEY_PAIR.x963_public_key),
            Err(Error::Provider)
        );
    }

    #[test]
    fn reject_point_off_curve() {
        let mut public_key = P256_KEY_PAIR.x963_public_key.to_vec();
        public_key[64] ^= 1;

        assert_eq!(
            SoftwareProvider.key_agreement(P256_KEY_PAIR.x963_private_key, &public_key),
            Err(Error::Provider)
        );
    }

    #[test]
    fn reject_mixed_curves() {
        assert_eq!(
            SoftwareProvider.key_agreement(
                P256_KEY_PAIR.x963_private_key,
                P384_KEY_PAIR.x963_public_key
            ),
            Err(Error::Provider)
        );
    }
}

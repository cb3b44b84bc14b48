//! Key pairs bound to a [`Provider`], and Elliptic Curve Diffie-Hellman.
//!
//! # Usage
//!
//! This usage example is from the perspective of two participants in the
//! exchange, nicknamed "Alice" and "Bob".
//!
#![cfg_attr(feature = "software", doc = "```")]
#![cfg_attr(not(feature = "software"), doc = "```ignore")]
//! # fn main() -> Result<(), eckeys::Error> {
//! use eckeys::{KeyPair, NistP384, PublicKey, SoftwareProvider};
//!
//! // Alice
//! let alice = KeyPair::<NistP384, _>::generate(SoftwareProvider)?;
//! let alice_public_der = alice.public_key().to_der();
//!
//! // Bob
//! let bob = KeyPair::<NistP384, _>::generate(SoftwareProvider)?;
//! let bob_public_der = bob.public_key().to_der();
//!
//! // Each side decodes the other's public key and computes the shared secret
//! let alice_shared = alice.shared_secret(&PublicKey::from_der(&bob_public_der)?)?;
//! let bob_shared = bob.shared_secret(&PublicKey::from_der(&alice_public_der)?)?;
//!
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # Ok(())
//! # }
//! ```

use crate::{Curve, Error, PrivateKey, Provider, PublicKey, Result};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use zeroize::{Zeroize, Zeroizing};

/// Private key paired with the [`Provider`] performing its operations.
#[derive(Clone, Debug)]
pub struct KeyPair<C: Curve, P: Provider> {
    private_key: PrivateKey<C>,
    provider: P,
}

impl<C: Curve, P: Provider> KeyPair<C, P> {
    /// Generate a new random key pair with `provider`.
    ///
    /// Provider output which does not decode as an X9.63 private key for
    /// this curve is reported as [`Error::Provider`].
    pub fn generate(provider: P) -> Result<Self> {
        let x963 = Zeroizing::new(provider.generate_private_key(C::PROFILE.bits)?);

        let private_key = PrivateKey::from_x963(&x963).map_err(|error| {
            tracing::debug!(
                curve = C::PROFILE.name,
                %error,
                "provider returned an undecodable private key"
            );
            Error::Provider
        })?;

        Ok(Self {
            private_key,
            provider,
        })
    }

    /// Pair an already decoded private key with `provider`.
    pub fn new(private_key: PrivateKey<C>, provider: P) -> Self {
        Self {
            private_key,
            provider,
        }
    }

    /// Private key of this key pair.
    pub fn private_key(&self) -> &PrivateKey<C> {
        &self.private_key
    }

    /// Public key of this key pair.
    pub fn public_key(&self) -> &PublicKey<C> {
        self.private_key.public_key()
    }

    /// Consume the key pair, returning its private key.
    pub fn into_private_key(self) -> PrivateKey<C> {
        self.private_key
    }

    /// Compute the ECDH shared secret with `peer_public_key`.
    ///
    /// Both keys are handed to the provider in their X9.63 encoding, and its
    /// output is returned unchanged.
    pub fn shared_secret(&self, peer_public_key: &PublicKey<C>) -> Result<SharedSecret> {
        let secret_bytes = self
            .provider
            .key_agreement(&self.private_key.to_x963(), peer_public_key.to_x963())
            .inspect_err(|_| {
                tracing::debug!(curve = C::PROFILE.name, "provider rejected key agreement");
            })?;

        Ok(SharedSecret { secret_bytes })
    }
}

/// Shared secret value computed via ECDH key agreement.
///
/// Zeroized on drop.
#[derive(Clone)]
pub struct SharedSecret {
    secret_bytes: Vec<u8>,
}

impl SharedSecret {
    /// Raw shared secret as returned by the provider: the x-coordinate of
    /// the shared point, big-endian and padded to the coordinate width.
    ///
    /// This is not uniformly random and should be passed through a KDF
    /// before being used as a symmetric key.
    pub fn raw_secret_bytes(&self) -> &[u8] {
        &self.secret_bytes
    }
}

impl Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

#[cfg(all(test, feature = "software"))]
mod tests {
    use super::KeyPair;
    use crate::{
        Curve, Error, NistP256, NistP384, NistP521, PrivateKey, Provider, PublicKey, Result,
        SoftwareProvider, test_vectors::*,
    };
    use alloc::vec::Vec;

    fn check_symmetry<C: Curve>() {
        let alice = KeyPair::<C, _>::generate(SoftwareProvider).unwrap();
        let bob = KeyPair::<C, _>::generate(SoftwareProvider).unwrap();

        let alice_shared = alice.shared_secret(bob.public_key()).unwrap();
        let bob_shared = bob.shared_secret(alice.public_key()).unwrap();
        assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
        assert_eq!(
            alice_shared.raw_secret_bytes().len(),
            C::PROFILE.coordinate_width
        );
    }

    #[test]
    fn shared_secret_symmetry() {
        check_symmetry::<NistP256>();
        check_symmetry::<NistP384>();
        check_symmetry::<NistP521>();
    }

    fn check_format_independence<C: Curve>(vector: &KeyPairVector) {
        let from_der = KeyPair::new(
            PrivateKey::<C>::from_der(vector.der_private_key, vector.der_public_key).unwrap(),
            SoftwareProvider,
        );
        let from_der_with_public = KeyPair::new(
            PrivateKey::<C>::from_der_with_public(vector.der_private_key_with_public).unwrap(),
            SoftwareProvider,
        );
        let from_x963 = KeyPair::new(
            PrivateKey::<C>::from_x963(vector.x963_private_key).unwrap(),
            SoftwareProvider,
        );

        let der_secret = from_der.shared_secret(from_x963.public_key()).unwrap();
        let x963_secret = from_x963.shared_secret(from_der.public_key()).unwrap();
        assert_eq!(der_secret.raw_secret_bytes(), x963_secret.raw_secret_bytes());
        assert_eq!(der_secret.raw_secret_bytes(), vector.shared_secret);

        let secret = from_der_with_public
            .shared_secret(&PublicKey::from_x963(vector.x963_public_key).unwrap())
            .unwrap();
        assert_eq!(secret.raw_secret_bytes(), vector.shared_secret);
    }

    #[test]
    fn shared_secret_format_independence() {
        check_format_independence::<NistP256>(&P256_KEY_PAIR);
        check_format_independence::<NistP384>(&P384_KEY_PAIR);

        for vector in P521_KEY_PAIRS {
            check_format_independence::<NistP521>(vector);
        }
    }

    #[test]
    fn generated_key_survives_der() {
        let key_pair = KeyPair::<NistP521, _>::generate(SoftwareProvider).unwrap();
        let private_key = key_pair.private_key();

        let decoded = PrivateKey::<NistP521>::from_der(
            &private_key.to_der(),
            &private_key.public_key().to_der(),
        )
        .unwrap();
        assert_eq!(&decoded, private_key);

        let decoded =
            PrivateKey::<NistP521>::from_der_with_public(&private_key.to_der_with_public())
                .unwrap();
        assert_eq!(decoded, key_pair.into_private_key());
    }

    /// Provider refusing every request.
    struct FailingProvider;

    impl Provider for FailingProvider {
        fn generate_private_key(&self, _bits: usize) -> Result<Vec<u8>> {
            Err(Error::Provider)
        }

        fn key_agreement(&self, _private_key: &[u8], _public_key: &[u8]) -> Result<Vec<u8>> {
            Err(Error::Provider)
        }
    }

    #[test]
    fn provider_errors_are_surfaced() {
        assert!(matches!(
            KeyPair::<NistP256, _>::generate(FailingProvider),
            Err(Error::Provider)
        ));

        let key_pair = KeyPair::new(
            PrivateKey::<NistP256>::from_x963(P256_KEY_PAIR.x963_private_key).unwrap(),
            FailingProvider,
        );
        let peer = PublicKey::from_der(P256_KEY_PAIR.der_public_key).unwrap();
        assert!(matches!(key_pair.shared_secret(&peer), Err(Error::Provider)));
    }

    #[test]
    fn undecodable_generated_key() {
        /// Provider returning a P-256 key whatever the requested size.
        struct WrongCurve;

        impl Provider for WrongCurve {
            fn generate_private_key(&self, _bits: usize) -> Result<Vec<u8>> {
                Ok(P256_KEY_PAIR.x963_private_key.to_vec())
            }

            fn key_agreement(&self, _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
                unreachable!()
            }
        }

        assert!(matches!(
            KeyPair::<NistP384, _>::generate(WrongCurve),
            Err(Error::Provider)
        ));
        assert!(KeyPair::<NistP256, _>::generate(&WrongCurve).is_ok());
    }
}

//! Cryptographic providers: the curve arithmetic behind key generation and
//! key agreement.
//!
//! The codecs in this crate never perform curve arithmetic themselves. A
//! [`Provider`] receives and returns keys in their X9.63 encoding, which is
//! the format platform key stores exchange them in, and is free to reject
//! anything it considers invalid.

#[cfg(feature = "software")]
pub mod software;

use crate::Result;
use alloc::vec::Vec;

/// Backend performing the elliptic curve operations on X9.63 encoded keys.
///
/// The curve is implied by the key size passed to
/// [`generate_private_key`](Provider::generate_private_key), and by the
/// length of the keys passed to [`key_agreement`](Provider::key_agreement).
///
/// Implementations report every failure as [`Error::Provider`](crate::Error::Provider).
pub trait Provider {
    /// Generate a random private key on the curve with the given key size
    /// in bits, returned in its X9.63 encoding `04 ‖ X ‖ Y ‖ d`.
    fn generate_private_key(&self, bits: usize) -> Result<Vec<u8>>;

    /// Compute the ECDH shared secret (the x-coordinate of the shared point)
    /// between an X9.63 private key and an X9.63 public key.
    fn key_agreement(&self, private_key: &[u8], public_key: &[u8]) -> Result<Vec<u8>>;
}

impl<P: Provider + ?Sized> Provider for &P {
    fn generate_private_key(&self, bits: usize) -> Result<Vec<u8>> {
        P::generate_private_key(self, bits)
    }

    fn key_agreement(&self, private_key: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        P::key_agreement(self, private_key, public_key)
    }
}

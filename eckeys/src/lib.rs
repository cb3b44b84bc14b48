#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Supported encodings
//!
//! | Encoding                        | Public key            | Private key                         |
//! |---------------------------------|-----------------------|-------------------------------------|
//! | X9.63                           | `04 ‖ X ‖ Y`          | `04 ‖ X ‖ Y ‖ d`                    |
//! | raw                             | `X ‖ Y`               | `d`                                 |
//! | DER (SubjectPublicKeyInfo)      | [`PublicKey::to_der`] |                                     |
//! | DER without public key          |                       | [`PrivateKey::to_der`]              |
//! | DER with embedded public key    |                       | [`PrivateKey::to_der_with_public`]  |
//!
//! Keys are decoded for a curve chosen by the caller through the type
//! parameter, e.g. `PrivateKey::<NistP521>::from_der_with_public(..)`.
//! The encodings themselves are never used to guess the curve.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod curve;
pub mod key_pair;
pub mod provider;
pub mod tlv;

mod error;
mod private_key;
mod public_key;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    curve::{Curve, CurveProfile, NistP256, NistP384, NistP521},
    error::{Error, Result},
    key_pair::{KeyPair, SharedSecret},
    private_key::PrivateKey,
    provider::Provider,
    public_key::PublicKey,
};

#[cfg(feature = "software")]
pub use crate::provider::software::SoftwareProvider;

pub use zeroize::Zeroizing;

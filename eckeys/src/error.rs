//! Error type

use core::fmt::{self, Display};

/// Result type with the `eckeys` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Key encoding errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Buffer length does not match any expected shape for the curve.
    InvalidLength,

    /// A fixed DER template did not match the input at the expected position.
    PrefixMismatch,

    /// A required DER marker or field is missing or inconsistent.
    MalformedEncoding,

    /// The cryptographic provider rejected the input or failed.
    Provider,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidLength => "invalid key length",
            Error::PrefixMismatch => "DER prefix mismatch",
            Error::MalformedEncoding => "malformed DER encoding",
            Error::Provider => "cryptographic provider error",
        })
    }
}

impl core::error::Error for Error {}

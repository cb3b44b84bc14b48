//! Minimal DER tag-length-value scanning.
//!
//! This is not a general purpose ASN.1 parser: the key codecs only handle a
//! small fixed set of structures, so they anchor on well-known byte patterns
//! and fixed templates instead of walking every TLV.

use crate::{Error, Result};
use core::ops::Range;

/// `INTEGER 1` (the `ECPrivateKey` version) followed by the `OCTET STRING`
/// tag of the private key. The length of the scalar comes next.
pub const PRIVATE_KEY_MARKER: [u8; 4] = [0x02, 0x01, 0x01, 0x04];

/// Flag of the first length byte selecting the long form.
const LONG_FORM: u8 = 0x80;

/// Read the DER length field starting at `offset`.
///
/// Returns the decoded length along with the number of bytes the length
/// field itself occupies. Both the length field and the payload it announces
/// must fit in `buffer`.
pub fn read_length(buffer: &[u8], offset: usize) -> Result<(usize, usize)> {
    let first = *buffer.get(offset).ok_or(Error::MalformedEncoding)?;

    let (length, consumed) = if first & LONG_FORM == 0 {
        (usize::from(first), 1)
    } else {
        let count = usize::from(first & !LONG_FORM);

        // 0x80 is the BER indefinite form, which DER forbids
        if count == 0 || count > size_of::<usize>() {
            tracing::debug!(count, "unsupported DER length field");
            return Err(Error::MalformedEncoding);
        }

        let bytes = buffer
            .get(offset + 1..offset + 1 + count)
            .ok_or(Error::MalformedEncoding)?;

        let length = bytes
            .iter()
            .fold(0usize, |acc, &byte| (acc << 8) | usize::from(byte));

        (length, 1 + count)
    };

    let end = offset
        .checked_add(consumed)
        .and_then(|start| start.checked_add(length))
        .ok_or(Error::MalformedEncoding)?;

    if end > buffer.len() {
        tracing::debug!(
            length,
            available = buffer.len() - offset - consumed,
            "DER length exceeds buffer"
        );
        return Err(Error::MalformedEncoding);
    }

    Ok((length, consumed))
}

/// Find the first occurrence of `pattern` in `buffer`.
pub fn find_subsequence(buffer: &[u8], pattern: &[u8]) -> Option<Range<usize>> {
    if pattern.is_empty() {
        return Some(0..0);
    }

    buffer
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|start| start..start + pattern.len())
}

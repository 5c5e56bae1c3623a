//! TLV framing primitives.
//!
//! Every attribute on the wire is laid out as:
//!
//! ```text
//! [Tag(1)] [Length(1)] [Value(Length - 2)]
//! ```
//!
//! `Length` counts the whole record including the 2-byte header, so it ranges
//! from 2 (empty value) to 255. There are no multi-byte fields, so byte order
//! never comes into play at this layer.
//!
//! This module owns the two offset-sensitive operations in the crate: slicing
//! the value region out of an untrusted buffer, and assembling a record with a
//! recomputed length byte. Everything above it works on validated slices.

use crate::config::CodecConfig;
use crate::error::{constants, AttributeError, Result};

/// Size of the tag + length header, in bytes.
pub const HEADER_LEN: usize = 2;

/// Maximum total attribute size; the length field is a single byte.
pub const MAX_ATTRIBUTE_LEN: usize = 255;

/// Maximum value size an attribute can carry.
pub const MAX_VALUE_LEN: usize = MAX_ATTRIBUTE_LEN - HEADER_LEN;

/// Splits a raw attribute buffer into its tag and value region.
///
/// Validates the framing invariant `length == HEADER_LEN + value.len()`
/// before touching the value bytes:
/// - a buffer shorter than the header fails, whatever the config;
/// - in strict mode the declared length must equal `buf.len()` exactly;
/// - in lenient mode trailing bytes beyond the declared length are ignored,
///   but the declared length may never exceed the buffer.
///
/// The returned slice borrows from `buf`; callers that outlive the network
/// buffer must copy it (the attribute constructors all do).
pub fn split_value<'a>(buf: &'a [u8], config: &CodecConfig) -> Result<(u8, &'a [u8])> {
    if buf.len() < HEADER_LEN {
        return Err(AttributeError::malformed(
            buf.first().copied(),
            constants::ERR_BUFFER_TOO_SHORT,
        ));
    }

    let tag = buf[0];
    let declared = buf[1] as usize;

    if declared < HEADER_LEN {
        return Err(AttributeError::malformed(
            Some(tag),
            constants::ERR_LENGTH_BELOW_HEADER,
        ));
    }
    if declared > buf.len() {
        return Err(AttributeError::malformed(
            Some(tag),
            constants::ERR_LENGTH_EXCEEDS_BUFFER,
        ));
    }
    if config.strict_length && declared != buf.len() {
        return Err(AttributeError::malformed(
            Some(tag),
            constants::ERR_LENGTH_MISMATCH,
        ));
    }

    let value = &buf[HEADER_LEN..declared];
    if value.len() > config.max_value_len {
        return Err(AttributeError::AttributeTooLong {
            total: declared,
            max: config.max_value_len + HEADER_LEN,
        });
    }

    Ok((tag, value))
}

/// Assembles `[tag][length][value]`, recomputing the length byte from the
/// value's actual size.
///
/// The length is never taken from a stored field, so a value mutated after
/// construction still round-trips consistently.
pub fn encode_frame(tag: u8, value: &[u8]) -> Result<Vec<u8>> {
    let total = HEADER_LEN + value.len();
    if total > MAX_ATTRIBUTE_LEN {
        return Err(AttributeError::AttributeTooLong {
            total,
            max: MAX_ATTRIBUTE_LEN,
        });
    }

    let mut out = Vec::with_capacity(total);
    out.push(tag);
    out.push(total as u8);
    out.extend_from_slice(value);
    Ok(out)
}

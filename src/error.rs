//! # Error Types
//!
//! Comprehensive error handling for the attribute codec.
//!
//! This module defines all error variants that can occur while decoding or
//! encoding TLV attributes, from structural framing violations to value
//! representation failures.
//!
//! ## Error Categories
//! - **Framing Errors**: Buffer underruns, declared-length mismatches
//! - **Encoding Errors**: Values that cannot be rendered in the attribute's
//!   native byte encoding
//! - **Size Errors**: Encoded attributes that overflow the 1-byte length field
//!
//! All errors implement `std::error::Error` for interoperability. The codec
//! reports every failure to its immediate caller as a typed error; nothing is
//! logged-and-swallowed, and nothing is retried (decode and encode are
//! deterministic, so retrying a malformed buffer cannot succeed).
//!
//! ## Example Usage
//! ```rust
//! use radius_attr::error::{AttributeError, Result};
//! use radius_attr::protocol::registry::AttributeRegistry;
//!
//! fn decode_one(registry: &AttributeRegistry, buf: &[u8]) -> Result<()> {
//!     match registry.decode(buf) {
//!         Ok(attr) => println!("decoded tag {}", attr.type_tag()),
//!         Err(AttributeError::MalformedAttribute { .. }) => println!("bad framing"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Framing validation errors
    pub const ERR_BUFFER_TOO_SHORT: &str = "Buffer too short for attribute header";
    pub const ERR_LENGTH_MISMATCH: &str = "Declared length disagrees with buffer size";
    pub const ERR_LENGTH_BELOW_HEADER: &str = "Declared length smaller than attribute header";
    pub const ERR_LENGTH_EXCEEDS_BUFFER: &str = "Declared length exceeds buffer size";

    /// Value errors
    pub const ERR_NOT_UTF8: &str = "Text attribute value is not valid UTF-8";
    pub const ERR_WRONG_VALUE_SIZE: &str = "Fixed-width attribute has wrong value size";
}

// AttributeError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeError {
    /// Structural framing violation: the buffer is shorter than the 2-byte
    /// header, or the declared length byte disagrees with the buffer.
    #[error("Malformed attribute (tag {tag:?}): {reason}")]
    MalformedAttribute {
        /// Type tag, when the buffer was long enough to carry one.
        tag: Option<u8>,
        /// Human-readable cause, typically one of [`constants`].
        reason: String,
    },

    /// The value bytes cannot be rendered in the attribute kind's native
    /// representation (e.g. non-UTF-8 bytes for a text attribute).
    #[error("Unsupported encoding for tag {tag}: {reason}")]
    UnsupportedEncoding { tag: u8, reason: String },

    /// The encoded attribute would not fit the 1-byte length field.
    #[error("Attribute too long: {total} bytes (max {max})")]
    AttributeTooLong { total: usize, max: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AttributeError {
    /// Shorthand for a framing error carrying a static reason string.
    pub(crate) fn malformed(tag: Option<u8>, reason: &str) -> Self {
        AttributeError::MalformedAttribute {
            tag,
            reason: reason.to_string(),
        }
    }
}

/// Type alias for Results using AttributeError
pub type Result<T> = std::result::Result<T, AttributeError>;

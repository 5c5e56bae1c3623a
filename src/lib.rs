//! # radius-attr
//!
//! Extensible RADIUS-style TLV attribute codec.
//!
//! Given a raw attribute buffer received from the network, the codec
//! identifies its type, validates its framing, and exposes the decoded value
//! through a typed accessor; given a typed value, it serializes back to wire
//! bytes.
//!
//! ## Wire Format
//! ```text
//! [Tag(1)] [Length(1)] [Value(Length - 2)]
//! ```
//! `Length` counts the whole record, so attributes span 2 to 255 bytes.
//!
//! ## Components
//! - **Core**: Framing validation and the concrete attribute kinds
//! - **Protocol**: Tag-to-decoder registry and ordered attribute lists
//!
//! ## Example
//! ```rust
//! use radius_attr::core::attribute::{AttributeCodec, TextAttribute};
//! use radius_attr::protocol::registry::AttributeRegistry;
//!
//! let registry = AttributeRegistry::standard();
//!
//! // NAS-Identifier attribute carrying "NAS1"
//! let attr = registry.decode(&[0x20, 0x06, b'N', b'A', b'S', b'1']).unwrap();
//! assert_eq!(attr.as_text(), Some("NAS1"));
//!
//! // Round-trips back to the same bytes
//! assert_eq!(attr.encode().unwrap(), [0x20, 0x06, b'N', b'A', b'S', b'1']);
//!
//! // Typed construction for the encode direction
//! let reply = TextAttribute::new(18, "access granted");
//! let bytes = reply.encode().unwrap();
//! assert_eq!(bytes[1] as usize, bytes.len());
//! ```
//!
//! ## Guarantees
//! - Decode never reads past the buffer end, in any configuration
//! - Encode recomputes the length byte from the value's actual size
//! - Unknown tags round-trip byte-identically instead of failing
//! - Decode and encode are pure; the registry is frozen after construction,
//!   so concurrent decodes share it without locking

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::config::CodecConfig;
pub use crate::core::attribute::{
    Attribute, AttributeCodec, IntegerAttribute, Ipv4Attribute, RawAttribute, TextAttribute,
};
pub use crate::error::{AttributeError, Result};
pub use crate::protocol::list::AttributeList;
pub use crate::protocol::registry::{AttributeRegistry, RegistryBuilder, ValueKind};
pub use crate::protocol::types::AttributeType;

//! # Attribute Registry
//!
//! Tag-to-decoder dispatch for incoming attribute buffers.
//!
//! The registry maps a numeric type tag to the [`ValueKind`] that knows how to
//! decode that tag's value. It follows an initialize-then-freeze discipline:
//! built once (via [`RegistryBuilder`] or the [`AttributeRegistry::standard`]
//! preset), immutable afterwards, so concurrent decodes share it without
//! locking.
//!
//! Unknown tags are never an error and never dropped: they decode to an
//! opaque [`RawAttribute`] whose re-encoded bytes are identical to the input,
//! which is what keeps the protocol forward-compatible.

use crate::config::CodecConfig;
use crate::core::attribute::{
    Attribute, AttributeCodec, IntegerAttribute, Ipv4Attribute, RawAttribute, TextAttribute,
};
use crate::error::Result;
use crate::protocol::types::AttributeType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// The closed family of value decode strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// UTF-8 text, any length from 0 to 253 bytes.
    Text,
    /// 32-bit unsigned integer, big-endian, exactly 4 value bytes.
    Integer,
    /// IPv4 address, exactly 4 value bytes.
    Ipv4,
    /// Opaque bytes held verbatim.
    Binary,
}

impl ValueKind {
    /// Decodes a whole attribute buffer with this strategy.
    fn decode(self, buf: &[u8], config: &CodecConfig) -> Result<Attribute> {
        match self {
            ValueKind::Text => TextAttribute::decode(buf, config).map(Attribute::Text),
            ValueKind::Integer => IntegerAttribute::decode(buf, config).map(Attribute::Integer),
            ValueKind::Ipv4 => Ipv4Attribute::decode(buf, config).map(Attribute::Ipv4),
            ValueKind::Binary => RawAttribute::decode(buf, config).map(Attribute::Raw),
        }
    }
}

/// Builder for [`AttributeRegistry`]; the mutable phase of
/// initialize-then-freeze.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    kinds: HashMap<u8, ValueKind>,
    config: CodecConfig,
}

impl RegistryBuilder {
    /// Registers a tag with its decode strategy. Re-registering a tag
    /// replaces the earlier entry.
    pub fn register(mut self, tag: u8, kind: ValueKind) -> Self {
        self.kinds.insert(tag, kind);
        self
    }

    /// Registers every assigned standard code with its RFC value kind.
    pub fn with_standard_types(mut self) -> Self {
        for ty in AttributeType::ALL {
            self.kinds.insert(*ty as u8, ty.value_kind());
        }
        self
    }

    /// Sets the decode configuration.
    ///
    /// # Errors
    /// Fails if the configuration itself is invalid.
    pub fn config(mut self, config: CodecConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Freezes the registry. No further registration is possible.
    pub fn build(self) -> AttributeRegistry {
        AttributeRegistry {
            kinds: self.kinds,
            config: self.config,
        }
    }
}

/// Immutable tag-to-decoder table.
///
/// Read-only after construction; safe to share across threads (`&self`
/// everywhere, no interior mutability).
#[derive(Debug)]
pub struct AttributeRegistry {
    kinds: HashMap<u8, ValueKind>,
    config: CodecConfig,
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl AttributeRegistry {
    /// Starts an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry preloaded with the assigned standard codes and the default
    /// strict configuration.
    pub fn standard() -> Self {
        RegistryBuilder::default().with_standard_types().build()
    }

    /// The decode strategy registered for a tag, if any.
    pub fn kind_of(&self, tag: u8) -> Option<ValueKind> {
        self.kinds.get(&tag).copied()
    }

    /// The decode configuration this registry was frozen with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a single raw attribute buffer.
    ///
    /// Reads the tag byte, validates the TLV framing, and delegates to the
    /// registered kind's decode. An unregistered tag degrades to an opaque
    /// [`RawAttribute`] pass-through rather than failing.
    ///
    /// # Errors
    /// A malformed buffer (shorter than 2 bytes, or a declared length that
    /// disagrees with the buffer) is reported as a failure for this single
    /// attribute; the caller decides whether to abort or skip.
    pub fn decode(&self, buf: &[u8]) -> Result<Attribute> {
        let kind = buf.first().and_then(|tag| self.kind_of(*tag));
        match kind {
            Some(kind) => kind.decode(buf, &self.config),
            None => {
                if let Some(tag) = buf.first() {
                    trace!(tag = *tag, "unregistered attribute tag, decoding as raw");
                }
                ValueKind::Binary.decode(buf, &self.config)
            }
        }
    }
}

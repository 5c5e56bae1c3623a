//! # Attribute Kinds
//!
//! The attribute contract and the concrete kinds that implement it.
//!
//! Each kind owns a native representation of its value (text, 32-bit integer,
//! IPv4 address, raw binary). Decoding copies the value region out of the wire
//! buffer, so no attribute ever aliases a transient network buffer. Encoding
//! rebuilds the full `[tag][length][value]` record with the length byte
//! recomputed from the current value size.
//!
//! The [`Attribute`] enum closes the family: every concrete kind, plus the
//! opaque [`RawAttribute`] fallback that keeps unknown tags round-tripping
//! byte-identically for forward compatibility.

use crate::config::CodecConfig;
use crate::core::wire;
use crate::error::{constants, AttributeError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Contract every concrete attribute kind satisfies.
///
/// `decode` and `encode` are pure transformations over owned byte buffers:
/// no I/O, no shared state, no side effects. Instances are immutable once
/// constructed, so concurrent decoding of distinct buffers needs no locking.
pub trait AttributeCodec: Sized {
    /// Native semantic type of the decoded value.
    type Value: ?Sized;

    /// Constructs an instance from a wire buffer laid out as
    /// `[tag:1][length:1][value:(length-2)]`.
    fn decode(buf: &[u8], config: &CodecConfig) -> Result<Self>;

    /// Produces `[tag][length][value]` with the length byte recomputed from
    /// the current value's byte size.
    fn encode(&self) -> Result<Vec<u8>>;

    /// The attribute's numeric type tag.
    fn type_tag(&self) -> u8;

    /// Read-only view of the decoded value in its native type.
    fn value(&self) -> &Self::Value;
}

/// Text attribute: UTF-8 value bytes at `[2, length)`, no inner length prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAttribute {
    tag: u8,
    text: String,
}

impl TextAttribute {
    /// Builds a text attribute from a typed value for later encoding.
    ///
    /// Oversized values are caught at `encode()` time, where the total wire
    /// size is known.
    pub fn new(tag: u8, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }
}

impl AttributeCodec for TextAttribute {
    type Value = str;

    fn decode(buf: &[u8], config: &CodecConfig) -> Result<Self> {
        let (tag, value) = wire::split_value(buf, config)?;
        let text = std::str::from_utf8(value)
            .map_err(|_| AttributeError::UnsupportedEncoding {
                tag,
                reason: constants::ERR_NOT_UTF8.to_string(),
            })?
            .to_owned();
        Ok(Self { tag, text })
    }

    fn encode(&self) -> Result<Vec<u8>> {
        wire::encode_frame(self.tag, self.text.as_bytes())
    }

    fn type_tag(&self) -> u8 {
        self.tag
    }

    fn value(&self) -> &str {
        &self.text
    }
}

/// Integer attribute: 4 value bytes, big-endian, wire length always 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerAttribute {
    tag: u8,
    number: u32,
}

impl IntegerAttribute {
    pub fn new(tag: u8, number: u32) -> Self {
        Self { tag, number }
    }
}

impl AttributeCodec for IntegerAttribute {
    type Value = u32;

    fn decode(buf: &[u8], config: &CodecConfig) -> Result<Self> {
        let (tag, value) = wire::split_value(buf, config)?;
        let raw: [u8; 4] = value
            .try_into()
            .map_err(|_| AttributeError::malformed(Some(tag), constants::ERR_WRONG_VALUE_SIZE))?;
        Ok(Self {
            tag,
            number: u32::from_be_bytes(raw),
        })
    }

    fn encode(&self) -> Result<Vec<u8>> {
        wire::encode_frame(self.tag, &self.number.to_be_bytes())
    }

    fn type_tag(&self) -> u8 {
        self.tag
    }

    fn value(&self) -> &u32 {
        &self.number
    }
}

/// IPv4 address attribute: 4 value bytes, wire length always 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Attribute {
    tag: u8,
    addr: Ipv4Addr,
}

impl Ipv4Attribute {
    pub fn new(tag: u8, addr: Ipv4Addr) -> Self {
        Self { tag, addr }
    }
}

impl AttributeCodec for Ipv4Attribute {
    type Value = Ipv4Addr;

    fn decode(buf: &[u8], config: &CodecConfig) -> Result<Self> {
        let (tag, value) = wire::split_value(buf, config)?;
        let raw: [u8; 4] = value
            .try_into()
            .map_err(|_| AttributeError::malformed(Some(tag), constants::ERR_WRONG_VALUE_SIZE))?;
        Ok(Self {
            tag,
            addr: Ipv4Addr::from(raw),
        })
    }

    fn encode(&self) -> Result<Vec<u8>> {
        wire::encode_frame(self.tag, &self.addr.octets())
    }

    fn type_tag(&self) -> u8 {
        self.tag
    }

    fn value(&self) -> &Ipv4Addr {
        &self.addr
    }
}

/// Opaque binary attribute: value bytes held verbatim.
///
/// This is the forward-compatibility fallback for unregistered tags, so its
/// `encode()` output is byte-identical to the buffer it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttribute {
    tag: u8,
    value: Bytes,
}

impl RawAttribute {
    pub fn new(tag: u8, value: impl Into<Bytes>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }
}

impl AttributeCodec for RawAttribute {
    type Value = [u8];

    fn decode(buf: &[u8], config: &CodecConfig) -> Result<Self> {
        let (tag, value) = wire::split_value(buf, config)?;
        Ok(Self {
            tag,
            value: Bytes::copy_from_slice(value),
        })
    }

    fn encode(&self) -> Result<Vec<u8>> {
        wire::encode_frame(self.tag, &self.value)
    }

    fn type_tag(&self) -> u8 {
        self.tag
    }

    fn value(&self) -> &[u8] {
        &self.value
    }
}

/// A decoded attribute of any kind.
///
/// Closed variant family: protocol extensibility happens through the registry
/// (mapping more tags onto these kinds) and through [`Attribute::Raw`]
/// pass-through, not through open-ended subtyping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Text(TextAttribute),
    Integer(IntegerAttribute),
    Ipv4(Ipv4Attribute),
    Raw(RawAttribute),
}

impl Attribute {
    /// The attribute's numeric type tag.
    pub fn type_tag(&self) -> u8 {
        match self {
            Attribute::Text(a) => a.type_tag(),
            Attribute::Integer(a) => a.type_tag(),
            Attribute::Ipv4(a) => a.type_tag(),
            Attribute::Raw(a) => a.type_tag(),
        }
    }

    /// Re-encodes the attribute to its wire form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Attribute::Text(a) => a.encode(),
            Attribute::Integer(a) => a.encode(),
            Attribute::Ipv4(a) => a.encode(),
            Attribute::Raw(a) => a.encode(),
        }
    }

    /// Text value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Attribute::Text(a) => Some(a.value()),
            _ => None,
        }
    }

    /// Integer value, if this is an integer attribute.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Attribute::Integer(a) => Some(*a.value()),
            _ => None,
        }
    }

    /// Address value, if this is an IPv4 attribute.
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            Attribute::Ipv4(a) => Some(*a.value()),
            _ => None,
        }
    }

    /// Verbatim value bytes, if this is a raw attribute.
    pub fn raw_value(&self) -> Option<&[u8]> {
        match self {
            Attribute::Raw(a) => Some(a.value()),
            _ => None,
        }
    }
}

impl From<TextAttribute> for Attribute {
    fn from(a: TextAttribute) -> Self {
        Attribute::Text(a)
    }
}

impl From<IntegerAttribute> for Attribute {
    fn from(a: IntegerAttribute) -> Self {
        Attribute::Integer(a)
    }
}

impl From<Ipv4Attribute> for Attribute {
    fn from(a: Ipv4Attribute) -> Self {
        Attribute::Ipv4(a)
    }
}

impl From<RawAttribute> for Attribute {
    fn from(a: RawAttribute) -> Self {
        Attribute::Raw(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CodecConfig {
        CodecConfig::default()
    }

    #[test]
    fn test_text_decode() {
        let buf = [0x20, 0x06, b'N', b'A', b'S', b'1'];
        let attr = TextAttribute::decode(&buf, &config()).expect("decode");
        assert_eq!(attr.type_tag(), 0x20);
        assert_eq!(attr.value(), "NAS1");
    }

    #[test]
    fn test_text_decode_empty_value() {
        let attr = TextAttribute::decode(&[0x20, 0x02], &config()).expect("decode");
        assert_eq!(attr.value(), "");
    }

    #[test]
    fn test_text_decode_invalid_utf8() {
        let buf = [0x20, 0x04, 0xFF, 0xFE];
        let err = TextAttribute::decode(&buf, &config()).unwrap_err();
        assert!(matches!(
            err,
            AttributeError::UnsupportedEncoding { tag: 0x20, .. }
        ));
    }

    #[test]
    fn test_integer_roundtrip() {
        let attr = IntegerAttribute::new(5, 0xDEAD_BEEF);
        let bytes = attr.encode().expect("encode");
        assert_eq!(bytes, [0x05, 0x06, 0xDE, 0xAD, 0xBE, 0xEF]);
        let back = IntegerAttribute::decode(&bytes, &config()).expect("decode");
        assert_eq!(back, attr);
    }

    #[test]
    fn test_integer_wrong_value_size() {
        let buf = [0x05, 0x05, 0x00, 0x00, 0x01];
        let err = IntegerAttribute::decode(&buf, &config()).unwrap_err();
        assert!(matches!(err, AttributeError::MalformedAttribute { .. }));
    }

    #[test]
    fn test_ipv4_roundtrip() {
        let attr = Ipv4Attribute::new(4, Ipv4Addr::new(192, 168, 0, 1));
        let bytes = attr.encode().expect("encode");
        assert_eq!(bytes, [0x04, 0x06, 192, 168, 0, 1]);
        let back = Ipv4Attribute::decode(&bytes, &config()).expect("decode");
        assert_eq!(back, attr);
    }

    #[test]
    fn test_raw_preserves_arbitrary_bytes() {
        let buf = [0xF0, 0x05, 0x00, 0xFF, 0x7F];
        let attr = RawAttribute::decode(&buf, &config()).expect("decode");
        assert_eq!(attr.value(), &[0x00, 0xFF, 0x7F]);
        assert_eq!(attr.encode().expect("encode"), buf);
    }

    #[test]
    fn test_enum_accessors() {
        let attr: Attribute = TextAttribute::new(1, "alice").into();
        assert_eq!(attr.as_text(), Some("alice"));
        assert_eq!(attr.as_u32(), None);
        assert_eq!(attr.type_tag(), 1);
    }

    #[test]
    fn test_text_encode_too_long() {
        let attr = TextAttribute::new(0x20, "x".repeat(254));
        let err = attr.encode().unwrap_err();
        assert!(matches!(err, AttributeError::AttributeTooLong { .. }));
    }

    #[test]
    fn test_text_encode_exactly_max() {
        let attr = TextAttribute::new(0x20, "x".repeat(253));
        let bytes = attr.encode().expect("255-byte attribute is legal");
        assert_eq!(bytes.len(), 255);
    }
}

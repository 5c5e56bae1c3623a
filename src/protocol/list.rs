//! Ordered attribute collections.
//!
//! Protocol semantics can depend on attribute position, and repeated tags
//! accumulate rather than overwrite, so the list preserves insertion order
//! and never deduplicates.
//!
//! The list does no wire scanning: separating a packet into per-attribute
//! buffers is the outer framer's job. It only holds decoded attributes and
//! can concatenate their encoded forms.

use crate::core::attribute::Attribute;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An ordered sequence of independent attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeList {
    attributes: Vec<Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Appends an attribute, preserving order.
    pub fn push(&mut self, attr: impl Into<Attribute>) {
        self.attributes.push(attr.into());
    }

    /// First attribute with the given tag.
    pub fn get(&self, tag: u8) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.type_tag() == tag)
    }

    /// Every attribute with the given tag, in insertion order.
    pub fn get_all(&self, tag: u8) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(move |a| a.type_tag() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Encodes every member back-to-back in insertion order.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for attr in &self.attributes {
            out.extend_from_slice(&attr.encode()?);
        }
        Ok(out)
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AttributeList {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attribute::{IntegerAttribute, TextAttribute};

    #[test]
    fn test_order_preserved_with_repeated_tags() {
        let mut list = AttributeList::new();
        list.push(TextAttribute::new(33, "proxy-a"));
        list.push(IntegerAttribute::new(5, 7));
        list.push(TextAttribute::new(33, "proxy-b"));

        let proxies: Vec<_> = list.get_all(33).filter_map(|a| a.as_text()).collect();
        assert_eq!(proxies, ["proxy-a", "proxy-b"]);
        assert_eq!(list.get(33).and_then(|a| a.as_text()), Some("proxy-a"));
    }

    #[test]
    fn test_encode_concatenates_in_order() {
        let mut list = AttributeList::new();
        list.push(TextAttribute::new(1, "bob"));
        list.push(IntegerAttribute::new(5, 2));

        let bytes = list.encode().expect("encode");
        assert_eq!(
            bytes,
            [0x01, 0x05, b'b', b'o', b'b', 0x05, 0x06, 0x00, 0x00, 0x00, 0x02]
        );
    }

    #[test]
    fn test_empty_list() {
        let list = AttributeList::new();
        assert!(list.is_empty());
        assert_eq!(list.encode().expect("encode"), Vec::<u8>::new());
    }
}

// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::config::CodecConfig;
use crate::core::attribute::Attribute;
use crate::error::AttributeError;
use crate::protocol::registry::{AttributeRegistry, ValueKind};
use crate::protocol::types::AttributeType;

#[test]
fn test_standard_registry_dispatch() {
    let registry = AttributeRegistry::standard();

    // NAS-Identifier (32) is text
    let attr = registry
        .decode(&[0x20, 0x06, b'N', b'A', b'S', b'1'])
        .expect("text decode should succeed");
    assert!(matches!(attr, Attribute::Text(_)));
    assert_eq!(attr.as_text(), Some("NAS1"));

    // NAS-Port (5) is a 32-bit integer
    let attr = registry
        .decode(&[0x05, 0x06, 0x00, 0x00, 0x00, 0x2A])
        .expect("integer decode should succeed");
    assert_eq!(attr.as_u32(), Some(42));

    // NAS-IP-Address (4) is an IPv4 address
    let attr = registry
        .decode(&[0x04, 0x06, 10, 0, 0, 1])
        .expect("ipv4 decode should succeed");
    assert_eq!(attr.as_ipv4().map(|a| a.octets()), Some([10, 0, 0, 1]));

    // User-Password (2) stays opaque
    let attr = registry
        .decode(&[0x02, 0x05, 0xDE, 0xAD, 0xBE])
        .expect("binary decode should succeed");
    assert!(matches!(attr, Attribute::Raw(_)));
}

#[test]
fn test_unknown_tag_passes_through() {
    let registry = AttributeRegistry::standard();
    let input = [0xC8, 0x05, 0x01, 0x02, 0x03]; // tag 200 is unassigned

    let attr = registry.decode(&input).expect("unknown tag must not fail");
    assert_eq!(attr.raw_value(), Some(&[0x01, 0x02, 0x03][..]));
    assert_eq!(attr.encode().expect("re-encode"), input);
}

#[test]
fn test_custom_registration_overrides_kind() {
    let registry = AttributeRegistry::builder()
        .with_standard_types()
        .register(200, ValueKind::Integer)
        .build();

    let attr = registry
        .decode(&[0xC8, 0x06, 0x00, 0x00, 0x01, 0x00])
        .expect("registered kind should apply");
    assert_eq!(attr.as_u32(), Some(256));
}

#[test]
fn test_malformed_buffer_is_reported_not_recovered() {
    let registry = AttributeRegistry::standard();

    for bad in [&[][..], &[0x20][..], &[0x20, 0x07, b'N', b'A'][..]] {
        let err = registry.decode(bad).expect_err("must report malformed");
        assert!(matches!(err, AttributeError::MalformedAttribute { .. }));
    }
}

#[test]
fn test_lenient_config_tolerates_trailing_bytes() {
    let registry = AttributeRegistry::builder()
        .with_standard_types()
        .config(CodecConfig::default_with_overrides(|c| {
            c.strict_length = false;
        }))
        .expect("valid config")
        .build();

    // Declared length 6, two trailing padding bytes.
    let attr = registry
        .decode(&[0x20, 0x06, b'N', b'A', b'S', b'1', 0x00, 0x00])
        .expect("lenient decode");
    assert_eq!(attr.as_text(), Some("NAS1"));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(AttributeRegistry::standard());

    let handles: Vec<_> = (0u8..4)
        .map(|i| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                let buf = [0x05, 0x06, 0x00, 0x00, 0x00, i];
                registry.decode(&buf).expect("decode").as_u32()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().expect("thread"), Some(i as u32));
    }
}

#[test]
fn test_every_standard_type_has_a_kind() {
    let registry = AttributeRegistry::standard();
    for ty in AttributeType::ALL {
        assert_eq!(registry.kind_of(*ty as u8), Some(ty.value_kind()));
    }
}

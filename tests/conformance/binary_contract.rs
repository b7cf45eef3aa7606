//! Value-semantics contract of `Binary`

use docbin::{Binary, BinaryError};

#[test]
fn construction_stores_payload_and_subtype() {
    let bin = Binary::new(b"hello".to_vec(), 100);
    assert_eq!(bin.as_bytes(), b"hello");
    assert_eq!(bin.subtype(), 100);
}

#[test]
fn subtype_boundaries_construct() {
    for subtype in [0u8, 1, 128, 255] {
        let bin = Binary::new(b"payload".to_vec(), subtype);
        assert_eq!(bin.subtype(), subtype);
        let empty = Binary::new(Vec::new(), subtype);
        assert_eq!(empty.subtype(), subtype);
        assert!(empty.is_empty());
    }
}

#[test]
fn wide_integer_subtypes_are_range_checked() {
    assert!(Binary::from_parts(b"hello".to_vec(), 0).is_ok());
    assert!(Binary::from_parts(b"hello".to_vec(), 255).is_ok());
    assert_eq!(
        Binary::from_parts(b"hello".to_vec(), -1),
        Err(BinaryError::SubtypeOutOfRange { actual: -1 })
    );
    assert_eq!(
        Binary::from_parts(b"hello".to_vec(), 256),
        Err(BinaryError::SubtypeOutOfRange { actual: 256 })
    );
}

#[test]
fn equality_requires_both_fields() {
    assert_eq!(
        Binary::new(b"hello".to_vec(), 100),
        Binary::new(b"hello".to_vec(), 100)
    );
    assert_ne!(
        Binary::new(b"hello".to_vec(), 0),
        Binary::new(b"hello".to_vec(), 100),
        "same bytes with different subtypes are different values"
    );
    assert_ne!(
        Binary::generic(b"hello".to_vec()),
        Binary::generic(b"hello ".to_vec())
    );
}

#[test]
fn behaves_as_read_only_byte_sequence() {
    let bin = Binary::generic(b"hello world".to_vec());
    assert!(bin.starts_with(b"hello"));
    assert!(bin.ends_with(b"world"));
    assert_eq!(&bin[..5], b"hello");
    assert_eq!(bin.len(), 11);
}

#[test]
fn debug_repr_is_stable_and_complete() {
    assert_eq!(
        format!("{:?}", Binary::new(b"hello world".to_vec(), 2)),
        "Binary(b\"hello world\", 2)"
    );
    assert_eq!(
        format!("{:?}", Binary::generic(vec![0x08, 0xFF])),
        "Binary(b\"\\x08\\xff\", 0)"
    );
}

#[test]
fn serialization_roundtrips_preserve_both_fields() {
    let samples = [
        Binary::new(b"123".to_vec(), 0),
        Binary::new(b"123".to_vec(), 1),
        Binary::new(b"123".to_vec(), 128),
        Binary::new(b"123".to_vec(), 255),
        Binary::new(Vec::new(), 0),
        Binary::new(Vec::new(), 255),
    ];

    for bin in &samples {
        let encoded = bincode::serialize(bin).unwrap();
        let decoded: Binary = bincode::deserialize(&encoded).unwrap();
        assert_eq!(&decoded, bin, "bincode roundtrip for {:?}", bin);

        let json = serde_json::to_string(bin).unwrap();
        let decoded: Binary = serde_json::from_str(&json).unwrap();
        assert_eq!(&decoded, bin, "JSON roundtrip for {:?}", bin);
    }
}

#[test]
fn usable_as_map_key() {
    use std::collections::HashMap;

    let mut index: HashMap<Binary, &str> = HashMap::new();
    index.insert(Binary::new(b"k".to_vec(), 0), "generic");
    index.insert(Binary::new(b"k".to_vec(), 0x80), "user-defined");

    assert_eq!(index.len(), 2);
    assert_eq!(index.get(&Binary::new(b"k".to_vec(), 0)), Some(&"generic"));
    assert_eq!(
        index.get(&Binary::new(b"k".to_vec(), 0x80)),
        Some(&"user-defined")
    );
}

//! Tests for the length prefix
//!
//! These tests verify:
//! - Byte layout at the 7-bit group boundaries
//! - Clean end of data vs. truncated prefix
//! - Rejection of over-long prefixes

use booklist::codec::varint::{read_length, write_length};
use booklist::BookError;

fn encoded(len: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    write_length(&mut buf, len).unwrap();
    buf
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_single_byte_lengths() {
    assert_eq!(encoded(0), vec![0x00]);
    assert_eq!(encoded(41), vec![0x29]);
    assert_eq!(encoded(127), vec![0x7F]);
}

#[test]
fn test_multi_byte_lengths() {
    assert_eq!(encoded(128), vec![0x80, 0x01]);
    assert_eq!(encoded(300), vec![0xAC, 0x02]);
    assert_eq!(encoded(16_383), vec![0xFF, 0x7F]);
    assert_eq!(encoded(16_384), vec![0x80, 0x80, 0x01]);
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_read_back() {
    for len in [0, 1, 127, 128, 300, 16_384, 2_097_152, 1 << 30] {
        let buf = encoded(len);
        let mut slice = buf.as_slice();
        assert_eq!(read_length(&mut slice).unwrap(), Some(len));
        assert!(slice.is_empty(), "prefix for {} not fully consumed", len);
    }
}

#[test]
fn test_empty_buffer_is_end_of_data() {
    let mut slice: &[u8] = &[];
    assert_eq!(read_length(&mut slice).unwrap(), None);
}

#[test]
fn test_read_leaves_following_bytes() {
    let mut slice: &[u8] = &[0x03, b'a', b'b', b'c'];
    assert_eq!(read_length(&mut slice).unwrap(), Some(3));
    assert_eq!(slice, b"abc");
}

#[test]
fn test_truncated_prefix() {
    let mut slice: &[u8] = &[0x80, 0x80];
    let err = read_length(&mut slice).unwrap_err();
    assert!(matches!(err, BookError::Decode(msg) if msg.contains("truncated")));
}

#[test]
fn test_prefix_longer_than_five_bytes() {
    let mut slice: &[u8] = &[0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
    assert!(read_length(&mut slice).is_err());
}

#[test]
fn test_prefix_overflowing_i32() {
    let mut slice: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
    assert!(read_length(&mut slice).is_err());
}

//! Length prefix encoding
//!
//! 7 bits per byte, least significant group first. The high bit marks a
//! continuation. Values are bounded by `i32::MAX`, so a prefix is at most
//! five bytes and the fifth byte carries at most three bits.

use bytes::{Buf, BufMut};

use crate::error::{BookError, Result};

/// Longest valid prefix in bytes
pub const MAX_LENGTH_BYTES: usize = 5;

/// Largest length a prefix can describe
pub const MAX_LENGTH: u32 = i32::MAX as u32;

/// Append `len` as a varint
pub fn write_length<B: BufMut>(buf: &mut B, len: u32) -> Result<()> {
    if len > MAX_LENGTH {
        return Err(BookError::InvalidArgument(format!(
            "chunk length {} exceeds {}",
            len, MAX_LENGTH
        )));
    }

    let mut value = len;
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
    Ok(())
}

/// Read a varint from `buf`
///
/// Returns:
/// - `Ok(None)` — `buf` was already empty (clean end of data)
/// - `Ok(Some(len))` — a complete prefix was consumed
/// - `Err(Decode)` — the prefix is cut short, too long, or overflows
pub fn read_length<B: Buf>(buf: &mut B) -> Result<Option<u32>> {
    if !buf.has_remaining() {
        return Ok(None);
    }

    let mut value: u32 = 0;
    for i in 0..MAX_LENGTH_BYTES {
        if !buf.has_remaining() {
            return Err(BookError::Decode(format!(
                "length prefix truncated after {} bytes",
                i
            )));
        }

        let byte = buf.get_u8();
        value |= u32::from(byte & 0x7F) << (7 * i);

        if byte & 0x80 == 0 {
            if i == MAX_LENGTH_BYTES - 1 && byte > 0x07 {
                return Err(BookError::Decode("length prefix overflows i32".to_string()));
            }
            return Ok(Some(value));
        }
    }

    Err(BookError::Decode(format!(
        "length prefix longer than {} bytes",
        MAX_LENGTH_BYTES
    )))
}

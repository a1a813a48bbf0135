//! Chunk framing
//!
//! One chunk is a length prefix followed by that many bytes of record text.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::book::Book;
use crate::error::{BookError, Result};

use super::record::encode;
use super::varint::{read_length, write_length};

/// Append one book as a length-prefixed chunk
pub fn encode_chunk(book: &Book, buf: &mut BytesMut) -> Result<()> {
    let text = encode(book);
    let len = u32::try_from(text.len()).map_err(|_| {
        BookError::InvalidArgument(format!("record of {} bytes is too large", text.len()))
    })?;
    write_length(buf, len)?;
    buf.put_slice(text.as_bytes());
    Ok(())
}

/// Encode a whole catalog image
pub fn encode_chunks<'a, I>(books: I) -> Result<BytesMut>
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut buf = BytesMut::new();
    for book in books {
        encode_chunk(book, &mut buf)?;
    }
    Ok(buf)
}

/// Iterates over the chunks of an in-memory catalog image
///
/// Iteration stops at the end of data. A tail that cannot be framed (cut
/// short inside the prefix or the text) also ends iteration and is
/// recorded in [`ChunkReader::truncated`] instead of being returned as an
/// error.
pub struct ChunkReader {
    /// Remaining unread bytes
    buf: Bytes,
    /// Size of the image, for offsets in diagnostics
    total_len: usize,
    /// Why framing stopped early, if it did
    truncated: Option<String>,
}

impl ChunkReader {
    pub fn new(data: impl Into<Bytes>) -> Self {
        let buf = data.into();
        let total_len = buf.len();
        Self {
            buf,
            total_len,
            truncated: None,
        }
    }

    /// Byte offset of the next unread chunk
    pub fn offset(&self) -> usize {
        self.total_len - self.buf.len()
    }

    /// Reason the tail could not be framed, if iteration stopped early
    pub fn truncated(&self) -> Option<&str> {
        self.truncated.as_deref()
    }

    fn stop(&mut self, reason: String) {
        self.truncated = Some(format!("at byte {}: {}", self.offset(), reason));
        self.buf.clear();
    }
}

impl Iterator for ChunkReader {
    type Item = Bytes;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cursor = self.buf.clone();

        match read_length(&mut cursor) {
            Ok(None) => None,
            Ok(Some(len)) => {
                let len = len as usize;
                if cursor.remaining() < len {
                    self.stop(format!(
                        "chunk announces {} bytes, only {} left",
                        len,
                        cursor.remaining()
                    ));
                    return None;
                }
                let chunk = cursor.split_to(len);
                self.buf = cursor;
                Some(chunk)
            }
            Err(e) => {
                self.stop(e.to_string());
                None
            }
        }
    }
}

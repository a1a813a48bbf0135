//! In-memory storage
//!
//! Same byte image as the file backend, held in a buffer.

use bytes::Bytes;

use crate::book::Book;
use crate::codec::encode_chunks;
use crate::error::Result;

use super::{decode_image, ReadReport, Storage};

/// Backend holding the encoded catalog in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    image: Bytes,
    writes: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing byte image (which may be damaged)
    pub fn from_bytes(image: impl Into<Bytes>) -> Self {
        Self {
            image: image.into(),
            writes: 0,
        }
    }

    /// Current byte image
    pub fn bytes(&self) -> &Bytes {
        &self.image
    }

    /// Number of completed writes
    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn write(&mut self, books: &[Book]) -> Result<()> {
        self.image = encode_chunks(books)?.freeze();
        self.writes += 1;
        Ok(())
    }

    fn read_report(&mut self) -> Result<(Vec<Book>, ReadReport)> {
        Ok(decode_image(self.image.clone()))
    }
}

//! Storage Module
//!
//! Persists the whole catalog as a sequence of length-prefixed chunks.
//!
//! ## Responsibilities
//! - Rewrite the full catalog image on every write (no append mode)
//! - Read every well-formed record, dropping malformed ones
//! - Treat a truncated tail as end of data, never as an error
//!
//! Backends hold no handle between calls. See [`crate::codec`] for the
//! chunk layout.

mod file;
mod memory;

use bytes::Bytes;
use tracing::warn;

use crate::book::Book;
use crate::codec::{decode_bytes, ChunkReader, DecodeOutcome};
use crate::error::Result;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A place the catalog is loaded from and saved to
pub trait Storage {
    /// Replace the stored catalog with `books`
    fn write(&mut self, books: &[Book]) -> Result<()>;

    /// Load the stored catalog, with statistics about dropped data
    fn read_report(&mut self) -> Result<(Vec<Book>, ReadReport)>;

    /// Load the stored catalog
    ///
    /// Malformed records and a truncated tail are skipped silently; only
    /// I/O failures are returned.
    fn read(&mut self) -> Result<Vec<Book>> {
        self.read_report().map(|(books, _)| books)
    }
}

/// Outcome of a tolerant read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadReport {
    /// Records decoded successfully
    pub records_read: u64,

    /// Chunks that framed correctly but did not decode
    pub records_skipped: u64,

    /// Whether the image ended inside a chunk
    pub truncated_tail: bool,
}

/// Decode a catalog image, skipping what cannot be decoded
pub(crate) fn decode_image(data: Bytes) -> (Vec<Book>, ReadReport) {
    let mut reader = ChunkReader::new(data);
    let mut books = Vec::new();
    let mut report = ReadReport::default();

    loop {
        let offset = reader.offset();
        let Some(chunk) = reader.next() else {
            break;
        };

        match decode_bytes(&chunk) {
            DecodeOutcome::Record(book) => {
                books.push(book);
                report.records_read += 1;
            }
            DecodeOutcome::Skip(reason) => {
                warn!(offset, %reason, "Skipping malformed record");
                report.records_skipped += 1;
            }
        }
    }

    if let Some(reason) = reader.truncated() {
        warn!(%reason, "Catalog image ends with a truncated chunk");
        report.truncated_tail = true;
    }

    (books, report)
}

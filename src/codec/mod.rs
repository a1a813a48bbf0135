//! Record Codec Module
//!
//! Converts books to and from the on-disk chunk format.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Chunk 1                                                 │
//! │ ┌──────────────────┬──────────────────────────────────┐ │
//! │ │ Len (1-5, varint)│ isbn/author/title/publisher/     │ │
//! │ │                  │ year/pages/price/     (UTF-8)    │ │
//! │ └──────────────────┴──────────────────────────────────┘ │
//! ├─────────────────────────────────────────────────────────┤
//! │ Chunk 2 ...                                             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no file header. The length prefix stores 7 bits per byte,
//! lowest group first, with the high bit set on every byte but the last.
//!
//! The delimiter is never escaped: a field containing `/` produces extra
//! tokens and the record is dropped on read. Callers that care should check
//! [`Book::is_encodable`](crate::book::Book::is_encodable) before writing.

mod chunk;
mod record;
pub mod varint;

pub use chunk::{encode_chunk, encode_chunks, ChunkReader};
pub use record::{decode, decode_bytes, encode, DecodeOutcome, FIELD_COUNT};

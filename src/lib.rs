//! # booklist
//!
//! A personal-library catalog with:
//! - Write-through persistence (every add/remove rewrites the file)
//! - Length-prefixed record chunks with a tolerant reader
//! - Stable reordering by a caller-supplied comparer
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Catalog                               │
//! │        add / remove (write-through)   sort_by (memory)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Storage (File / Memory)                      │
//! │          full rewrite on write, tolerant read                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Record Codec                             │
//! │      varint length prefix + "isbn/author/.../price/"         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use booklist::{Book, Catalog, Config, FileStorage, SortKey};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> booklist::Result<()> {
//! let config = Config::from_env()?;
//! let mut catalog = Catalog::open(FileStorage::from_config(&config))?;
//!
//! let book = Book::new("978-1", "A. Author", "Title", "Pub", 2001, 300, Decimal::new(1999, 2))?;
//! catalog.add(book)?;
//!
//! catalog.sort_with(&SortKey::Title)?;
//! catalog.persist()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod book;
pub mod codec;
pub mod storage;
pub mod catalog;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookError, Result};
pub use config::Config;
pub use book::{Book, BookFormatter, LimitedEditionFormatter, StandardFormatter};
pub use storage::{FileStorage, MemoryStorage, ReadReport, Storage};
pub use catalog::{BookComparer, Catalog, SortKey};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of booklist
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

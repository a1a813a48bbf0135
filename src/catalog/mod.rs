//! Catalog Module
//!
//! The in-memory, ordered book collection.
//!
//! ## Responsibilities
//! - Hydrate from a [`Storage`] backend on open
//! - Write through to the backend on every add/remove
//! - Reorder with a caller-supplied comparer (stable, never persisted)
//!
//! ## Persistence Model
//! ```text
//!   add / remove ──► Vec<Book> ──► Storage::write (full rewrite)
//!   sort_by      ──► Vec<Book>     (in memory only, call persist())
//! ```

mod compare;

use std::slice;

use tracing::{debug, warn};

use crate::book::Book;
use crate::error::{BookError, Result};
use crate::storage::Storage;

pub use compare::{BookComparer, SortKey};

/// Ordered collection of books backed by a storage
///
/// Order is insertion order until [`Catalog::sort_by`] is called. Value-equal
/// duplicates are rejected by [`Catalog::add`].
pub struct Catalog<S: Storage> {
    /// Books in catalog order
    books: Vec<Book>,

    /// Backend receiving every mutation
    storage: S,
}

impl<S: Storage> Catalog<S> {
    /// Open a catalog, loading every readable record from `storage`
    pub fn open(mut storage: S) -> Result<Self> {
        let books = storage.read()?;
        debug!(records = books.len(), "Catalog opened");
        Ok(Self { books, storage })
    }

    /// Add a book
    ///
    /// Returns `Ok(false)` without touching the catalog or the storage if
    /// an equal book is already present. If the write fails the book is
    /// taken back out, so a retry is not mistaken for a duplicate.
    pub fn add(&mut self, book: Book) -> Result<bool> {
        if self.books.contains(&book) {
            debug!(isbn = book.isbn(), "Duplicate book rejected");
            return Ok(false);
        }

        self.books.push(book);
        if let Err(e) = self.persist() {
            self.books.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Remove the first book equal to `book`
    ///
    /// The storage is rewritten even when nothing matched. Returns whether
    /// a book was removed. If the write fails the book is put back in place.
    pub fn remove(&mut self, book: &Book) -> Result<bool> {
        let index = self.books.iter().position(|b| b == book);
        let removed = index.map(|index| (index, self.books.remove(index)));

        if let Err(e) = self.persist() {
            if let Some((index, book)) = removed {
                self.books.insert(index, book);
            }
            return Err(e);
        }
        Ok(removed.is_some())
    }

    /// Reorder the catalog with `comparer`
    ///
    /// Books the comparer treats as equal keep their relative order. The
    /// new order lives in memory only until the next write.
    ///
    /// Errors:
    /// - `EmptyCollection` — the catalog has no books
    /// - `InvalidArgument` — no comparer was given
    pub fn sort_by(&mut self, comparer: Option<&dyn BookComparer>) -> Result<()> {
        if self.books.is_empty() {
            warn!("Sort requested on an empty catalog");
            return Err(BookError::EmptyCollection);
        }
        let Some(comparer) = comparer else {
            warn!("Sort requested without a comparer");
            return Err(BookError::InvalidArgument("comparer is required".to_string()));
        };

        self.books.sort_by(|a, b| comparer.compare(a, b));
        Ok(())
    }

    /// [`Catalog::sort_by`] with a comparer that is always present
    pub fn sort_with<C: BookComparer>(&mut self, comparer: &C) -> Result<()> {
        self.sort_by(Some(comparer))
    }

    /// Look a book up by tag
    ///
    /// Not supported: always returns `BookError::Unsupported`.
    pub fn find_by_tag(&self) -> Result<Book> {
        Err(BookError::Unsupported("find by tag"))
    }

    /// Write the current order to the storage
    pub fn persist(&mut self) -> Result<()> {
        self.storage.write(&self.books)
    }

    /// Swap the backend and reload the catalog from it
    ///
    /// On failure the catalog keeps its previous backend and books.
    pub fn replace_storage(&mut self, mut storage: S) -> Result<()> {
        let books = storage.read()?;
        debug!(records = books.len(), "Storage replaced");
        self.books = books;
        self.storage = storage;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<'a, S: Storage> IntoIterator for &'a Catalog<S> {
    type Item = &'a Book;
    type IntoIter = slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

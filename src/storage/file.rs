//! File Storage
//!
//! Keeps the catalog in a single flat file.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::book::Book;
use crate::codec::encode_chunks;
use crate::config::Config;
use crate::error::Result;

use super::{decode_image, ReadReport, Storage};

/// Flat-file backend
///
/// The file is opened for the duration of one `read` or `write` call and
/// closed before the call returns.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the file named by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.path.clone())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    /// Rewrite the file from scratch
    fn write(&mut self, books: &[Book]) -> Result<()> {
        let image = encode_chunks(books)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&image)?;
        file.flush()?;

        debug!(
            path = %self.path.display(),
            records = books.len(),
            bytes = image.len(),
            "Catalog written"
        );
        Ok(())
    }

    /// Read the file, creating it empty if it does not exist
    ///
    /// An existing file is opened read-only, so a write-protected catalog
    /// can still be loaded.
    fn read_report(&mut self) -> Result<(Vec<Book>, ReadReport)> {
        if !self.path.exists() {
            OpenOptions::new().create(true).append(true).open(&self.path)?;
        }
        let mut file = File::open(&self.path)?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        drop(file);

        let (books, report) = decode_image(Bytes::from(data));

        debug!(
            path = %self.path.display(),
            read = report.records_read,
            skipped = report.records_skipped,
            truncated = report.truncated_tail,
            "Catalog read"
        );
        Ok((books, report))
    }
}

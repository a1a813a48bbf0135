//! Book formatters
//!
//! A formatter maps a format code to a rendering of a book.

use crate::error::{BookError, Result};

use super::Book;

/// Capability to render a book under a format code
pub trait BookFormatter {
    fn format(&self, code: &str, book: &Book) -> Result<String>;
}

/// Built-in renderings
///
/// - `"G"` or `""`: full description (same as `Display`)
/// - `"S"`: `author, title`
/// - `"I"`: ISBN only
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardFormatter;

impl BookFormatter for StandardFormatter {
    fn format(&self, code: &str, book: &Book) -> Result<String> {
        match code {
            "" | "G" => Ok(book.to_string()),
            "S" => Ok(format!("{}, {}", book.author(), book.title())),
            "I" => Ok(book.isbn().to_string()),
            other => Err(BookError::InvalidArgument(format!(
                "unknown format code: {:?}",
                other
            ))),
        }
    }
}

/// Promotional rendering, ignores the format code
#[derive(Debug, Default, Clone, Copy)]
pub struct LimitedEditionFormatter;

impl BookFormatter for LimitedEditionFormatter {
    fn format(&self, _code: &str, book: &Book) -> Result<String> {
        Ok(format!(
            "Limited edition: {}, {}. Special Price: {}",
            book.author(),
            book.title(),
            book.price()
        ))
    }
}

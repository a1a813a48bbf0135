//! Book comparers

use std::cmp::Ordering;
use std::str::FromStr;

use crate::book::Book;
use crate::error::BookError;

/// Three-way ordering of two books
pub trait BookComparer {
    fn compare(&self, a: &Book, b: &Book) -> Ordering;
}

impl<F> BookComparer for F
where
    F: Fn(&Book, &Book) -> Ordering,
{
    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        self(a, b)
    }
}

/// Ascending order on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Isbn,
    Author,
    Title,
    Publisher,
    Year,
    Pages,
    Price,
}

impl BookComparer for SortKey {
    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Isbn => a.isbn().cmp(b.isbn()),
            SortKey::Author => a.author().cmp(b.author()),
            SortKey::Title => a.title().cmp(b.title()),
            SortKey::Publisher => a.publisher().cmp(b.publisher()),
            SortKey::Year => a.year().cmp(&b.year()),
            SortKey::Pages => a.page_count().cmp(&b.page_count()),
            SortKey::Price => a.price().cmp(&b.price()),
        }
    }
}

impl FromStr for SortKey {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "isbn" => Ok(SortKey::Isbn),
            "author" => Ok(SortKey::Author),
            "title" => Ok(SortKey::Title),
            "publisher" => Ok(SortKey::Publisher),
            "year" => Ok(SortKey::Year),
            "pages" => Ok(SortKey::Pages),
            "price" => Ok(SortKey::Price),
            other => Err(BookError::InvalidArgument(format!("unknown sort key: {}", other))),
        }
    }
}

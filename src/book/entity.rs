//! Book entity
//!
//! Immutable bibliographic fields with a mutable price.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{BookError, Result};

/// Field separator of the on-disk record format
pub const DELIMITER: char = '/';

/// A single catalog record
///
/// Equality compares every field. `Decimal` equality is numeric, so
/// `19.90` and `19.9` are the same price.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    isbn: String,
    author: String,
    title: String,
    publisher: String,
    year: u32,
    page_count: u32,
    price: Decimal,
}

impl Book {
    /// Create a new book
    ///
    /// Fails with `InvalidArgument` if a text field is empty or the price
    /// is not strictly positive.
    pub fn new(
        isbn: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        year: u32,
        page_count: u32,
        price: Decimal,
    ) -> Result<Self> {
        let book = Self {
            isbn: isbn.into(),
            author: author.into(),
            title: title.into(),
            publisher: publisher.into(),
            year,
            page_count,
            price,
        };

        for (name, value) in book.text_fields() {
            if value.is_empty() {
                return Err(BookError::InvalidArgument(format!("{} must not be empty", name)));
            }
        }
        Self::check_price(price)?;

        Ok(book)
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Replace the price, keeping the old one if the new value is invalid
    pub fn change_price(&mut self, new_price: Decimal) -> Result<()> {
        Self::check_price(new_price)?;
        self.price = new_price;
        Ok(())
    }

    /// Whether the book survives an encode/decode round trip
    ///
    /// The record format does not escape the delimiter, so any text field
    /// containing `/` is split into extra tokens on read.
    pub fn is_encodable(&self) -> bool {
        self.text_fields()
            .iter()
            .all(|(_, value)| !value.contains(DELIMITER))
    }

    fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("isbn", self.isbn.as_str()),
            ("author", self.author.as_str()),
            ("title", self.title.as_str()),
            ("publisher", self.publisher.as_str()),
        ]
    }

    fn check_price(price: Decimal) -> Result<()> {
        if price <= Decimal::ZERO {
            return Err(BookError::InvalidArgument(format!(
                "price must be positive, got {}",
                price
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}, {}), {} pages, ISBN {}, {}",
            self.title, self.author, self.publisher, self.year, self.page_count, self.isbn, self.price
        )
    }
}

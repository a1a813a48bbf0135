//! Record text encoding
//!
//! `isbn/author/title/publisher/year/pages/price/`

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::book::{Book, DELIMITER};
use crate::error::{BookError, Result};

/// Number of fields in one record
pub const FIELD_COUNT: usize = 7;

/// Result of decoding a single chunk
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// A well-formed record
    Record(Book),

    /// A malformed record and the reason it was rejected
    Skip(String),
}

impl DecodeOutcome {
    /// Convert into a `Result`, mapping `Skip` to `BookError::Decode`
    pub fn into_result(self) -> Result<Book> {
        match self {
            DecodeOutcome::Record(book) => Ok(book),
            DecodeOutcome::Skip(reason) => Err(BookError::Decode(reason)),
        }
    }
}

/// Encode a book as record text (trailing delimiter included)
pub fn encode(book: &Book) -> String {
    let mut text = String::new();
    let fields = [
        book.isbn().to_string(),
        book.author().to_string(),
        book.title().to_string(),
        book.publisher().to_string(),
        book.year().to_string(),
        book.page_count().to_string(),
        book.price().to_string(),
    ];
    for field in &fields {
        text.push_str(field);
        text.push(DELIMITER);
    }
    text
}

/// Decode record text
///
/// Never panics. Wrong token count, empty tokens, unparsable numbers and a
/// non-positive price all yield `Skip`.
pub fn decode(chunk: &str) -> DecodeOutcome {
    match parse(chunk) {
        Ok(book) => DecodeOutcome::Record(book),
        Err(e) => DecodeOutcome::Skip(e.to_string()),
    }
}

/// Decode raw chunk bytes, rejecting invalid UTF-8
pub fn decode_bytes(chunk: &[u8]) -> DecodeOutcome {
    match std::str::from_utf8(chunk) {
        Ok(text) => decode(text),
        Err(e) => DecodeOutcome::Skip(format!("record is not valid UTF-8: {}", e)),
    }
}

fn parse(chunk: &str) -> Result<Book> {
    let mut tokens: Vec<&str> = chunk.split(DELIMITER).collect();

    // The terminal delimiter leaves one empty token behind
    if tokens.last() == Some(&"") {
        tokens.pop();
    }

    if tokens.len() != FIELD_COUNT {
        return Err(BookError::Decode(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            tokens.len()
        )));
    }
    if let Some(pos) = tokens.iter().position(|t| t.is_empty()) {
        return Err(BookError::Decode(format!("field {} is empty", pos)));
    }

    let year = parse_number(tokens[4], "year")?;
    let page_count = parse_number(tokens[5], "page count")?;
    let price = Decimal::from_str(tokens[6])
        .map_err(|e| BookError::Decode(format!("invalid price {:?}: {}", tokens[6], e)))?;

    Book::new(tokens[0], tokens[1], tokens[2], tokens[3], year, page_count, price).map_err(
        |e| match e {
            BookError::InvalidArgument(msg) => BookError::Decode(msg),
            other => other,
        },
    )
}

fn parse_number(token: &str, name: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|e| BookError::Decode(format!("invalid {} {:?}: {}", name, token, e)))
}

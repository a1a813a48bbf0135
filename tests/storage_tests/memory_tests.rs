//! Tests for MemoryStorage

use std::fs;

use booklist::book::Book;
use booklist::storage::{FileStorage, MemoryStorage, Storage};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn book(isbn: &str, title: &str) -> Book {
    Book::new(isbn, "A. Author", title, "Pub", 2001, 300, Decimal::new(1999, 2)).unwrap()
}

#[test]
fn test_new_storage_is_empty() {
    let mut storage = MemoryStorage::new();

    assert!(storage.read().unwrap().is_empty());
    assert!(storage.bytes().is_empty());
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_write_then_read() {
    let mut storage = MemoryStorage::new();
    let books = vec![book("1", "Alpha"), book("2", "Beta")];

    storage.write(&books).unwrap();

    assert_eq!(storage.read().unwrap(), books);
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn test_image_matches_file_storage() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Book.txt");
    let books = vec![book("1", "Alpha"), book("2", "Beta")];

    let mut file = FileStorage::new(&path);
    file.write(&books).unwrap();
    let mut memory = MemoryStorage::new();
    memory.write(&books).unwrap();

    assert_eq!(memory.bytes().as_ref(), fs::read(&path).unwrap().as_slice());
}

#[test]
fn test_from_damaged_bytes() {
    let mut clean = MemoryStorage::new();
    clean.write(&[book("1", "Alpha")]).unwrap();

    let mut image = clean.bytes().to_vec();
    image.extend_from_slice(&[0x05, b'2', b'/']);

    let mut storage = MemoryStorage::from_bytes(image);
    let (books, report) = storage.read_report().unwrap();

    assert_eq!(books, vec![book("1", "Alpha")]);
    assert!(report.truncated_tail);
}

//! Book builders shared by the unit tests.
#![allow(clippy::unreachable)]

use crate::book::{Book, BookDraft, CoverKind};

/// Valid book of the given cover with a fixed genre and full condition
pub(crate) fn book(kind: CoverKind, title: &str, author: &str, year: i32, isbn: &str) -> Book {
    match Book::new(kind, BookDraft::new(title, author, year, "Novel", isbn)) {
        Ok(book) => book,
        Err(e) => unreachable!("fixture rejected: {e}"),
    }
}

pub(crate) fn softcover(title: &str, author: &str, year: i32, isbn: &str) -> Book {
    book(CoverKind::Soft, title, author, year, isbn)
}

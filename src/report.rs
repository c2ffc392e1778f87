//! Serializable catalogue snapshots, rendered as text or JSON.

use std::fmt;

use serde::Serialize;

use crate::{book::Book, library::Library};

/// One catalogue line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookReport {
    /// Identity key
    pub isbn: String,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Publication year
    pub year: i32,
    /// Genre
    pub genre: String,
    /// Cover display name
    pub cover: String,
    /// Condition, 0..=100
    pub condition: u8,
    /// Qualitative condition label
    pub label: String,
    /// Years since publication
    pub age: i32,
    /// Whether the book is out with a reader
    pub borrowed: bool,
    /// Lending status sentence
    pub status: String,
    /// Successful borrows so far
    pub borrow_count: u32,
    /// Only present for glossy covers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratches: Option<u32>,
}

impl BookReport {
    /// Snapshot `book`, computing its age against `current_year`
    #[must_use]
    pub fn new(book: &Book, current_year: i32) -> Self {
        Self {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            year: book.year(),
            genre: book.genre().to_string(),
            cover: book.cover_kind().to_string(),
            condition: book.condition(),
            label: book.get_condition_label(),
            age: book.get_age(current_year),
            borrowed: book.is_borrowed(),
            status: book.borrow_state().get_description().to_string(),
            borrow_count: book.borrow_count(),
            scratches: book.scratch_count(),
        }
    }
}

impl fmt::Display for BookReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { cover, title, author, year, age, .. } = self;
        write!(f, "{cover} '{title}' by {author} ({year}, {age} years)")?;
        write!(f, " [{}] {}% {}", self.isbn, self.condition, self.label)?;
        write!(f, ", borrowed {} times. {}", self.borrow_count, self.status)
    }
}

/// Snapshot of a whole library in shelf order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryReport {
    /// Library name
    pub name: String,
    /// Number of books on the shelf
    pub size: usize,
    /// Number of books out with readers
    pub borrowed: usize,
    /// Per-book lines in shelf order
    pub books: Vec<BookReport>,
}

impl LibraryReport {
    /// Snapshot `library`, computing ages against `current_year`
    #[must_use]
    pub fn new(library: &Library, current_year: i32) -> Self {
        let books: Vec<BookReport> =
            library.books().map(|book| BookReport::new(book, current_year)).collect();
        Self {
            name: library.name().to_string(),
            size: books.len(),
            borrowed: books.iter().filter(|book| book.borrowed).count(),
            books,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for LibraryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { name, size, borrowed, .. } = self;
        writeln!(f, "Catalogue of {name}: {size} books, {borrowed} borrowed")?;
        for (position, book) in self.books.iter().enumerate() {
            writeln!(f, "{position:>3}. {book}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{book::CoverKind, fixtures::book};

    /// Library with one hardcover on the shelf and one glossy on loan
    fn setup_test_library() -> Library {
        let mut library = Library::new("Report Library");
        let hard = book(CoverKind::Hard, "Echo of Terror", "Haruki Miya", 2000, "HC-1");
        let glossy = book(CoverKind::Glossy, "Album", "Magazine editorial", 2020, "GC-1");
        drop(library.add_book(hard));
        drop(library.add_book(glossy));
        library.borrow_book_by_isbn("GC-1");
        library
    }

    #[test]
    fn test_report_fields() {
        let report = LibraryReport::new(&setup_test_library(), 2025);
        assert_eq!(report.name, "Report Library");
        assert_eq!(report.size, 2);
        assert_eq!(report.borrowed, 1);

        let hard = report.books.first();
        assert_eq!(hard.map(|b| b.cover.as_str()), Some("Hardcover"));
        assert_eq!(hard.map(|b| b.age), Some(25));
        assert_eq!(hard.map(|b| b.condition), Some(100));
        assert_eq!(hard.and_then(|b| b.scratches), None);

        let glossy = report.books.get(1);
        assert_eq!(glossy.and_then(|b| b.scratches), Some(0));
        assert_eq!(glossy.map(|b| b.borrowed), Some(true));
        assert_eq!(glossy.map(|b| b.borrow_count), Some(1));
        assert_eq!(glossy.map(|b| b.status.as_str()), Some("Book is currently borrowed"));
        assert_eq!(hard.map(|b| b.status.as_str()), Some("Book is available for borrowing"));
    }

    #[test]
    fn test_json_omits_scratches_for_plain_covers() {
        let json = LibraryReport::new(&setup_test_library(), 2025).to_json().unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(value.get("size"), Some(&serde_json::json!(2)));

        let books = value
            .get("books")
            .and_then(serde_json::Value::as_array)
            .cloned()
            .unwrap_or_default();
        assert_eq!(books.len(), 2);
        let first = books.first();
        assert!(first.is_some_and(|b| b.get("scratches").is_none()));
        assert_eq!(first.and_then(|b| b.get("label")), Some(&serde_json::json!("like new")));
        assert_eq!(books.get(1).and_then(|b| b.get("scratches")), Some(&serde_json::json!(0)));
    }

    #[test]
    fn test_text_rendering() {
        let text = LibraryReport::new(&setup_test_library(), 2025).to_string();
        assert!(text.starts_with("Catalogue of Report Library: 2 books, 1 borrowed\n"));
        assert!(text.contains(concat!(
            "  0. Hardcover 'Echo of Terror' by Haruki Miya (2000, 25 years) [HC-1] 100% like new",
            ", borrowed 0 times. Book is available for borrowing\n"
        )));
        assert!(text.contains("  1. Glossy cover 'Album'"));
        assert!(text.contains("borrowed 1 times. Book is currently borrowed\n"));
    }
}

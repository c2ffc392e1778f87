//! Events a library broadcasts to its observers.

use serde::Serialize;

/// Which index a search went through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// ISBN map
    Isbn,
    /// Title buckets
    Title,
    /// Author buckets
    Author,
    /// Year buckets
    Year,
    /// Shelf scan by genre
    Genre,
    /// Shelf scan by cover variant
    Cover,
}

/// Things that happen to a library, broadcast to its observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum LibraryEvent {
    /// A book joined the collection and index
    BookAdded {
        /// ISBN of the new book
        isbn: String,
        /// Its title
        title: String,
    },
    /// An add was refused because the ISBN is taken
    DuplicateRejected {
        /// ISBN that was already taken
        isbn: String,
    },
    /// A book left the collection and index
    BookRemoved {
        /// ISBN of the removed book
        isbn: String,
        /// Its title
        title: String,
    },
    /// A book was lent out
    BookBorrowed {
        /// ISBN of the lent book
        isbn: String,
        /// Its title
        title: String,
        /// Borrows including this one
        borrow_count: u32,
    },
    /// A borrow was refused because the book is already out
    BorrowRefused {
        /// ISBN of the book already out
        isbn: String,
        /// Its title
        title: String,
    },
    /// A borrowed book came back
    BookReturned {
        /// ISBN of the returned book
        isbn: String,
        /// Its title
        title: String,
    },
    /// A book took damage or scratches
    BookWorn {
        /// ISBN of the worn book
        isbn: String,
        /// Condition after the change
        condition: u8,
        /// Condition label after the change
        label: String,
    },
    /// A search matched at least one book
    SearchHit {
        /// View the search went through
        field: SearchField,
        /// Searched value
        query: String,
        /// Number of books found
        matches: usize,
    },
    /// A search matched nothing
    SearchMiss {
        /// View the search went through
        field: SearchField,
        /// Searched value
        query: String,
    },
}

//! Multi-key lookup over a set of books.
//!
//! [`MultiIndex`] keeps four views in step with its all-books list: ISBN to
//! book (one-to-one) and author, year and title to buckets of books in
//! insertion order. Insertion validates first and commits second, so a
//! rejected book leaves no trace in any view. Removal detaches the book from
//! every bucket and drops buckets that become empty.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use tracing::debug;

use crate::{
    arena::BookId,
    book::Book,
    error::{LibraryError, Result},
};

/// Key accepted by [`MultiIndex::lookup`]
#[derive(Debug, Clone, PartialEq)]
pub enum LookupKey {
    /// ISBN or author name
    Text(String),
    /// Publication year
    Integer(i64),
    /// Any other key type, named for the error message
    Unsupported(&'static str),
}

impl From<&str> for LookupKey {
    fn from(key: &str) -> Self {
        Self::Text(key.to_string())
    }
}

impl From<String> for LookupKey {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<i32> for LookupKey {
    fn from(key: i32) -> Self {
        Self::Integer(i64::from(key))
    }
}

impl From<i64> for LookupKey {
    fn from(key: i64) -> Self {
        Self::Integer(key)
    }
}

impl From<f64> for LookupKey {
    fn from(_: f64) -> Self {
        Self::Unsupported("f64")
    }
}

impl From<bool> for LookupKey {
    fn from(_: bool) -> Self {
        Self::Unsupported("bool")
    }
}

impl From<char> for LookupKey {
    fn from(_: char) -> Self {
        Self::Unsupported("char")
    }
}

/// Result of a generic [`MultiIndex::lookup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A text key matched an ISBN
    Book(BookId),
    /// A text key matched an author, or an integer key was looked up as a year
    Books(&'a [BookId]),
}

impl Lookup<'_> {
    /// Matched ids regardless of shape
    #[must_use]
    pub fn ids(&self) -> Vec<BookId> {
        match self {
            Self::Book(id) => vec![*id],
            Self::Books(ids) => ids.to_vec(),
        }
    }
}

/// Keys a book was filed under, kept so removal needs no access to the book
#[derive(Debug, Clone)]
struct Filed {
    /// Arena id of the book
    id: BookId,
    /// Author bucket key
    author: String,
    /// Year bucket key
    year: i32,
    /// Title bucket key
    title: String,
}

/// Four consistent lookup views over one set of books
#[derive(Debug, Default)]
pub struct MultiIndex {
    /// One-to-one ISBN view
    by_isbn: HashMap<String, Filed>,
    /// Author buckets
    by_author: HashMap<String, Vec<BookId>>,
    /// Year buckets
    by_year: HashMap<i32, Vec<BookId>>,
    /// Title buckets
    by_title: HashMap<String, Vec<BookId>>,
    /// Every indexed book in insertion order
    all_books: Vec<BookId>,
}

/// Drop `id` from the bucket under `key`, deleting the bucket once empty
fn detach<K, Q>(buckets: &mut HashMap<K, Vec<BookId>>, key: &Q, id: BookId)
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
{
    if let Some(bucket) = buckets.get_mut(key) {
        bucket.retain(|candidate| *candidate != id);
        if bucket.is_empty() {
            buckets.remove(key);
        }
    }
}

impl MultiIndex {
    /// Empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `book`, stored in the arena under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Duplicate`] when the ISBN is already indexed
    /// or `id` is already a member. Nothing is inserted in that case.
    pub fn add_book(&mut self, id: BookId, book: &Book) -> Result<()> {
        if self.by_isbn.contains_key(book.isbn()) || self.all_books.contains(&id) {
            return Err(LibraryError::Duplicate { isbn: book.isbn().to_string() });
        }

        self.by_isbn.insert(
            book.isbn().to_string(),
            Filed {
                id,
                author: book.author().to_string(),
                year: book.year(),
                title: book.title().to_string(),
            },
        );
        self.by_author.entry(book.author().to_string()).or_default().push(id);
        self.by_year.entry(book.year()).or_default().push(id);
        self.by_title.entry(book.title().to_string()).or_default().push(id);
        self.all_books.push(id);

        debug!(isbn = book.isbn(), title = book.title(), "book indexed");
        Ok(())
    }

    /// Drop the book with `isbn` from every view. Returns `false` if the ISBN
    /// is not indexed.
    pub fn remove_book(&mut self, isbn: &str) -> bool {
        let Some(filed) = self.by_isbn.remove(isbn) else {
            debug!(isbn, "book not indexed");
            return false;
        };
        detach(&mut self.by_author, filed.author.as_str(), filed.id);
        detach(&mut self.by_year, &filed.year, filed.id);
        detach(&mut self.by_title, filed.title.as_str(), filed.id);
        self.all_books.retain(|candidate| *candidate != filed.id);

        debug!(isbn, title = %filed.title, "book removed from index");
        true
    }

    /// Id of the book with `isbn`
    #[must_use]
    pub fn search_by_isbn(&self, isbn: &str) -> Option<BookId> {
        self.by_isbn.get(isbn).map(|filed| filed.id)
    }

    /// Books with exactly this title, `None` when no bucket exists
    #[must_use]
    pub fn search_by_title(&self, title: &str) -> Option<&[BookId]> {
        self.by_title.get(title).map(Vec::as_slice)
    }

    /// Books by `author`; empty when the author is unknown
    #[must_use]
    pub fn search_by_author(&self, author: &str) -> &[BookId] {
        self.by_author.get(author).map(Vec::as_slice).unwrap_or_default()
    }

    /// Books published in `year`; empty when none are
    #[must_use]
    pub fn search_by_year(&self, year: i32) -> &[BookId] {
        self.by_year.get(&year).map(Vec::as_slice).unwrap_or_default()
    }

    /// Keyed lookup dispatching on the key type.
    ///
    /// Text keys are tried as an ISBN, then as an author. Integer keys are
    /// years and yield an empty bucket when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::KeyNotFound`] for a text key matching neither
    /// an ISBN nor an author, and [`LibraryError::UnsupportedKey`] for any
    /// other key type.
    pub fn lookup(&self, key: impl Into<LookupKey>) -> Result<Lookup<'_>> {
        match key.into() {
            LookupKey::Text(text) => {
                if let Some(id) = self.search_by_isbn(&text) {
                    Ok(Lookup::Book(id))
                } else if let Some(bucket) = self.by_author.get(&text) {
                    Ok(Lookup::Books(bucket.as_slice()))
                } else {
                    Err(LibraryError::KeyNotFound(text))
                }
            }
            LookupKey::Integer(year) => Ok(Lookup::Books(
                i32::try_from(year).map(|year| self.search_by_year(year)).unwrap_or_default(),
            )),
            LookupKey::Unsupported(kind) => Err(LibraryError::UnsupportedKey(kind)),
        }
    }

    /// Whether `isbn` is indexed
    #[must_use]
    pub fn contains_isbn(&self, isbn: &str) -> bool {
        self.by_isbn.contains_key(isbn)
    }

    /// Whether `id` is indexed
    #[must_use]
    pub fn contains(&self, id: BookId) -> bool {
        self.all_books.contains(&id)
    }

    /// Number of indexed books
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_books.len()
    }

    /// Whether nothing is indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_books.is_empty()
    }

    /// Indexed ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = BookId> {
        self.all_books.iter().copied()
    }

    /// Number of distinct authors, years and titles currently indexed
    #[must_use]
    pub fn bucket_counts(&self) -> (usize, usize, usize) {
        (self.by_author.len(), self.by_year.len(), self.by_title.len())
    }
}

//! Slot storage owning every book of a library.
//!
//! [`Collection`](crate::collection::Collection) and
//! [`MultiIndex`](crate::index::MultiIndex) never hold books themselves, only
//! [`BookId`]s into one arena, so a book damaged or borrowed through one view
//! is the same book seen through the other.

use std::fmt;

use serde::Serialize;
use slab::Slab;

use crate::book::Book;

/// Stable handle of a book inside one [`BookArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(usize);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of the books referenced by collection and index
#[derive(Debug, Default)]
pub struct BookArena {
    /// Occupied and vacant book slots
    slots: Slab<Book>,
}

impl BookArena {
    /// Empty arena
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a book and hand out its id
    pub fn insert(&mut self, book: Book) -> BookId {
        BookId(self.slots.insert(book))
    }

    /// Take a book out of the arena. Its id may be handed out again later.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        self.slots.try_remove(id.0)
    }

    /// Book stored under `id`
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.slots.get(id.0)
    }

    /// Mutable book stored under `id`
    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.slots.get_mut(id.0)
    }

    /// Whether `id` refers to a stored book
    #[must_use]
    pub fn contains(&self, id: BookId) -> bool {
        self.slots.contains(id.0)
    }

    /// Number of stored books
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no book is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolve ids to books, skipping ids that are no longer stored
    pub fn resolve<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a BookId>,
    ) -> impl Iterator<Item = &'a Book> {
        ids.into_iter().filter_map(|id| self.get(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookDraft;

    /// Helper creating a softcover with the given ISBN
    #[allow(clippy::unreachable)]
    fn book(isbn: &str) -> Book {
        match Book::softcover(BookDraft::new("Title", "Author", 2000, "Novel", isbn)) {
            Ok(book) => book,
            Err(e) => unreachable!("valid draft rejected: {e}"),
        }
    }

    #[test]
    fn test_insert_get_remove() {
        let mut arena = BookArena::new();
        assert!(arena.is_empty());

        let a = arena.insert(book("A"));
        let b = arena.insert(book("B"));
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(Book::isbn), Some("A"));

        if let Some(book) = arena.get_mut(b) {
            book.update_condition(-30);
        }
        assert_eq!(arena.get(b).map(Book::condition), Some(70));

        assert_eq!(arena.remove(a).map(|book| book.isbn().to_string()), Some("A".to_string()));
        assert!(!arena.contains(a));
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_resolve_skips_vacant_ids() {
        let mut arena = BookArena::new();
        let a = arena.insert(book("A"));
        let b = arena.insert(book("B"));
        drop(arena.remove(a));

        let ids = [a, b];
        let found: Vec<&str> = arena.resolve(&ids).map(Book::isbn).collect();
        assert_eq!(found, vec!["B"]);
    }
}

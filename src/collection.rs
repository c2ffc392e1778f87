use crate::{
    arena::{BookArena, BookId},
    book::Book,
};

/// Named, insertion-ordered shelf of books.
///
/// Holds ids into a [`BookArena`] and performs no duplicate checks; keeping
/// membership unique is the job of [`MultiIndex`](crate::index::MultiIndex)
/// and [`Library`](crate::library::Library).
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Label shown in listings
    name: String,
    /// Book ids in insertion order
    books: Vec<BookId>,
}

impl Collection {
    /// Empty shelf with a display name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), books: Vec::new() }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a book to the end of the shelf
    pub fn add_book(&mut self, id: BookId) {
        self.books.push(id);
    }

    /// Remove the first book whose title matches `title` ignoring case
    pub fn remove_by_title(&mut self, arena: &BookArena, title: &str) -> bool {
        let needle = title.to_lowercase();
        let position = self.books.iter().position(|id| {
            arena.get(*id).is_some_and(|book| book.title().to_lowercase() == needle)
        });
        match position {
            Some(position) => {
                self.books.remove(position);
                true
            }
            None => false,
        }
    }

    /// Remove a specific book
    pub fn remove(&mut self, id: BookId) -> bool {
        match self.books.iter().position(|candidate| *candidate == id) {
            Some(position) => {
                self.books.remove(position);
                true
            }
            None => false,
        }
    }

    /// Whether `id` is on the shelf
    #[must_use]
    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains(&id)
    }

    /// Number of books on the shelf
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the shelf is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Id at `position` in shelf order
    #[must_use]
    pub fn get(&self, position: usize) -> Option<BookId> {
        self.books.get(position).copied()
    }

    /// Ids in shelf order
    pub fn iter(&self) -> impl Iterator<Item = BookId> {
        self.books.iter().copied()
    }

    /// Books in shelf order
    pub fn books<'a>(&'a self, arena: &'a BookArena) -> impl Iterator<Item = &'a Book> {
        arena.resolve(&self.books)
    }

    /// Numbered listing of the shelf
    #[must_use]
    pub fn show(&self, arena: &BookArena) -> String {
        let mut out = format!("=== Collection '{}' ({} books) ===\n", self.name, self.len());
        for (i, book) in self.books(arena).enumerate() {
            out.push_str(&format!("{i}: {book}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::softcover;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut arena = BookArena::new();
        let mut shelf = Collection::new("Main hall");
        let ids: Vec<BookId> = ["Echo", "Voice from the Past", "Echo"]
            .iter()
            .enumerate()
            .map(|(i, title)| arena.insert(softcover(title, "Author", 2000, &format!("ISBN-{i}"))))
            .collect();
        for id in &ids {
            shelf.add_book(*id);
        }

        assert_eq!(shelf.len(), 3);
        assert_eq!(shelf.iter().collect::<Vec<_>>(), ids);
        assert_eq!(shelf.get(1), ids.get(1).copied());
        assert_eq!(shelf.get(3), None);
        assert_eq!(shelf.name(), "Main hall");
    }

    #[test]
    fn test_remove_by_title_ignores_case() {
        let mut arena = BookArena::new();
        let mut shelf = Collection::new("Main hall");
        let first = arena.insert(softcover("Echo", "Author", 2000, "ISBN-1"));
        let second = arena.insert(softcover("Echo", "Other", 2001, "ISBN-2"));
        shelf.add_book(first);
        shelf.add_book(second);

        assert!(shelf.remove_by_title(&arena, "echo"));
        assert_eq!(shelf.iter().collect::<Vec<_>>(), vec![second]);
        assert!(shelf.remove_by_title(&arena, "ECHO"));
        assert!(shelf.is_empty());
        assert!(!shelf.remove_by_title(&arena, "echo"));
    }

    #[test]
    fn test_remove_by_title_without_match() {
        let mut arena = BookArena::new();
        let mut shelf = Collection::new("Main hall");
        shelf.add_book(arena.insert(softcover("Echo", "Author", 2000, "ISBN-1")));

        assert!(!shelf.remove_by_title(&arena, "Nonexistent"));
        assert_eq!(shelf.len(), 1);
    }

    #[test]
    fn test_remove_specific_id() {
        let mut arena = BookArena::new();
        let mut shelf = Collection::new("Main hall");
        let id = arena.insert(softcover("Echo", "Author", 2000, "ISBN-1"));
        shelf.add_book(id);

        assert!(shelf.contains(id));
        assert!(shelf.remove(id));
        assert!(!shelf.remove(id));
        assert!(!shelf.contains(id));
    }

    #[test]
    fn test_show_lists_books() {
        let mut arena = BookArena::new();
        let mut shelf = Collection::new("Main hall");
        shelf.add_book(arena.insert(softcover("Echo", "Haruki Miya", 1869, "ISBN-1")));

        assert_eq!(
            shelf.show(&arena),
            "=== Collection 'Main hall' (1 books) ===\n0: Softcover 'Echo' - Haruki Miya (1869)\n"
        );
    }
}

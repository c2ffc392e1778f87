use std::fmt;

use crate::{
    arena::{BookArena, BookId},
    book::{Book, CoverKind},
    collection::Collection,
    error::{LibraryError, Result},
    events::{LibraryEvent, SearchField},
    index::{Lookup, LookupKey, MultiIndex},
    observers::{LibraryObserver, TracingObserver},
};

/// Library facade over a shelf and its lookup index.
///
/// Every book lives once in the library's arena. The [`Collection`] keeps
/// display order and the [`MultiIndex`] answers lookups; both always hold the
/// same set of ids.
pub struct Library {
    /// Library name
    name: String,
    /// Owner of every book
    books: BookArena,
    /// Display order
    collection: Collection,
    /// Lookup views
    index: MultiIndex,
    /// Registered event observers
    observers: Vec<Box<dyn LibraryObserver>>,
}

// Manual implementation of Debug for Library
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("books", &self.books)
            .field("collection", &self.collection)
            .field("index", &self.index)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Library {
    /// Create an empty library that logs its events through `tracing`
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut library = Self {
            name: name.to_string(),
            books: BookArena::new(),
            collection: Collection::new(format!("{name} shelf")),
            index: MultiIndex::new(),
            observers: Vec::new(),
        };
        library.register_observer(Box::new(TracingObserver));
        library
    }

    /// Register an observer to be notified of library events
    pub fn register_observer(&mut self, observer: Box<dyn LibraryObserver>) {
        self.observers.push(observer);
    }

    /// Broadcast an event to every observer
    fn notify(&self, event: &LibraryEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }

    /// Report a search outcome and pass the result through
    fn searched<T>(&self, field: SearchField, query: &str, matches: usize, found: T) -> T {
        let event = if matches == 0 {
            LibraryEvent::SearchMiss { field, query: query.to_string() }
        } else {
            LibraryEvent::SearchHit { field, query: query.to_string(), matches }
        };
        self.notify(&event);
        found
    }

    /// Library name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of books on the shelf
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether the shelf is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Shelf in display order
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Lookup views
    #[must_use]
    pub fn index(&self) -> &MultiIndex {
        &self.index
    }

    /// Add a book to the shelf and the index.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Duplicate`] if a book with the same ISBN is
    /// already in the library. The library is left unchanged.
    pub fn add_book(&mut self, book: Book) -> Result<BookId> {
        if self.index.contains_isbn(book.isbn()) {
            self.notify(&LibraryEvent::DuplicateRejected { isbn: book.isbn().to_string() });
            return Err(LibraryError::Duplicate { isbn: book.isbn().to_string() });
        }

        let event = LibraryEvent::BookAdded {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
        };
        let id = self.books.insert(book);
        let indexed = match self.books.get(id) {
            Some(book) => self.index.add_book(id, book),
            None => Ok(()),
        };
        if let Err(e) = indexed {
            drop(self.books.remove(id));
            return Err(e);
        }
        self.collection.add_book(id);

        self.notify(&event);
        Ok(id)
    }

    /// First book on the shelf whose title is exactly `title`
    fn find_by_title(&self, title: &str) -> Option<BookId> {
        self.collection
            .iter()
            .find(|id| self.books.get(*id).is_some_and(|book| book.title() == title))
    }

    /// Run the borrow transition on a stored book
    fn borrow(&mut self, id: BookId) -> bool {
        let Some(book) = self.books.get_mut(id) else {
            return false;
        };
        let borrowed = book.borrow();
        let event = if borrowed {
            LibraryEvent::BookBorrowed {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
                borrow_count: book.borrow_count(),
            }
        } else {
            LibraryEvent::BorrowRefused {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            }
        };
        self.notify(&event);
        borrowed
    }

    /// Return a stored book; `false` if it was not out
    fn give_back(&mut self, id: BookId) -> bool {
        let Some(book) = self.books.get_mut(id) else {
            return false;
        };
        if !book.is_borrowed() {
            return false;
        }
        book.return_book();
        let event = LibraryEvent::BookReturned {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
        };
        self.notify(&event);
        true
    }

    /// Borrow the first book titled `title`. Returns `false` if there is no
    /// such book or it is already borrowed.
    pub fn borrow_book_by_title(&mut self, title: &str) -> bool {
        self.find_by_title(title).is_some_and(|id| self.borrow(id))
    }

    /// Borrow the book with `isbn`. Returns `false` if it is unknown or
    /// already borrowed.
    pub fn borrow_book_by_isbn(&mut self, isbn: &str) -> bool {
        self.index.search_by_isbn(isbn).is_some_and(|id| self.borrow(id))
    }

    /// Return the first book titled `title` that is currently borrowed
    pub fn return_book_by_title(&mut self, title: &str) -> bool {
        let borrowed = self.collection.iter().find(|id| {
            self.books.get(*id).is_some_and(|book| book.title() == title && book.is_borrowed())
        });
        borrowed.is_some_and(|id| self.give_back(id))
    }

    /// Return the book with `isbn`; `false` if unknown or not borrowed
    pub fn return_book_by_isbn(&mut self, isbn: &str) -> bool {
        self.index.search_by_isbn(isbn).is_some_and(|id| self.give_back(id))
    }

    /// Take a book out of both shelf and index, only if it is in both
    fn remove(&mut self, id: BookId) -> bool {
        let Some(isbn) = self.books.get(id).map(|book| book.isbn().to_string()) else {
            return false;
        };
        if !self.index.contains_isbn(&isbn) || !self.collection.contains(id) {
            return false;
        }
        let removed = self.index.remove_book(&isbn) && self.collection.remove(id);
        if let Some(book) = self.books.remove(id) {
            self.notify(&LibraryEvent::BookRemoved { isbn, title: book.title().to_string() });
        }
        removed
    }

    /// Remove the first book titled exactly `title`
    pub fn remove_book_by_title(&mut self, title: &str) -> bool {
        self.find_by_title(title).is_some_and(|id| self.remove(id))
    }

    /// Remove the book with `isbn`; `false` if it is unknown
    pub fn remove_book_by_isbn(&mut self, isbn: &str) -> bool {
        self.index.search_by_isbn(isbn).is_some_and(|id| self.remove(id))
    }

    /// Book with `isbn`, if any
    #[must_use]
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        let found = self.index.search_by_isbn(isbn).and_then(|id| self.books.get(id));
        self.searched(SearchField::Isbn, isbn, usize::from(found.is_some()), found)
    }

    /// Books titled exactly `title`, `None` when there are none
    #[must_use]
    pub fn search_by_title(&self, title: &str) -> Option<Vec<&Book>> {
        let found: Option<Vec<&Book>> =
            self.index.search_by_title(title).map(|ids| self.books.resolve(ids).collect());
        let matches = found.as_ref().map_or(0, Vec::len);
        self.searched(SearchField::Title, title, matches, found)
    }

    /// Books by `author` in insertion order
    #[must_use]
    pub fn search_by_author(&self, author: &str) -> Vec<&Book> {
        let found: Vec<&Book> = self.books.resolve(self.index.search_by_author(author)).collect();
        self.searched(SearchField::Author, author, found.len(), found)
    }

    /// Books published in `year` in insertion order
    #[must_use]
    pub fn search_by_year(&self, year: i32) -> Vec<&Book> {
        let found: Vec<&Book> = self.books.resolve(self.index.search_by_year(year)).collect();
        self.searched(SearchField::Year, &year.to_string(), found.len(), found)
    }

    /// Books of `genre` in shelf order
    #[must_use]
    pub fn search_by_genre(&self, genre: &str) -> Vec<&Book> {
        let found: Vec<&Book> = self.books().filter(|book| book.genre() == genre).collect();
        self.searched(SearchField::Genre, genre, found.len(), found)
    }

    /// Books with the given cover in shelf order
    #[must_use]
    pub fn search_by_cover(&self, kind: CoverKind) -> Vec<&Book> {
        let found: Vec<&Book> = self.books().filter(|book| book.cover_kind() == kind).collect();
        self.searched(SearchField::Cover, &kind.to_string(), found.len(), found)
    }

    /// Generic keyed lookup, see [`MultiIndex::lookup`].
    ///
    /// # Errors
    ///
    /// Propagates [`LibraryError::KeyNotFound`] and
    /// [`LibraryError::UnsupportedKey`] from the index.
    pub fn lookup(&self, key: impl Into<LookupKey>) -> Result<Vec<&Book>> {
        Ok(match self.index.lookup(key)? {
            Lookup::Book(id) => self.books.get(id).into_iter().collect(),
            Lookup::Books(ids) => self.books.resolve(ids).collect(),
        })
    }

    /// Book stored under `id`
    #[must_use]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id)
    }

    /// Mutable access for wear operations such as damage and scratches
    pub fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.get_mut(id)
    }

    /// Mutable access by ISBN
    pub fn book_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        let id = self.index.search_by_isbn(isbn)?;
        self.books.get_mut(id)
    }

    /// Books in shelf order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.collection.books(&self.books)
    }

    /// Ids in shelf order
    pub fn ids(&self) -> impl Iterator<Item = BookId> {
        self.collection.iter()
    }

    /// Books currently lent out, in shelf order
    #[must_use]
    pub fn borrowed_books(&self) -> Vec<&Book> {
        self.books().filter(|book| book.is_borrowed()).collect()
    }

    /// Damage the book with `isbn` through its cover's damage curve.
    /// Returns `Ok(false)` if no such book is stored.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Validation`] for a negative `amount`; the book
    /// is left unchanged.
    pub fn damage_book(&mut self, isbn: &str, amount: i32) -> Result<bool> {
        let Some(book) = self.book_by_isbn_mut(isbn) else {
            return Ok(false);
        };
        book.damage(amount)?;
        let event = Self::worn(book);
        self.notify(&event);
        Ok(true)
    }

    /// Scratch the glossy book with `isbn`. Returns `Ok(false)` if no such
    /// book is stored.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Validation`] if the book has no glossy cover.
    pub fn scratch_book(&mut self, isbn: &str, count: u32) -> Result<bool> {
        let Some(book) = self.book_by_isbn_mut(isbn) else {
            return Ok(false);
        };
        book.add_scratches(count)?;
        let event = Self::worn(book);
        self.notify(&event);
        Ok(true)
    }

    /// Event describing a book's wear after a change
    fn worn(book: &Book) -> LibraryEvent {
        LibraryEvent::BookWorn {
            isbn: book.isbn().to_string(),
            condition: book.condition(),
            label: book.get_condition_label(),
        }
    }

    /// Banner followed by the numbered shelf listing
    #[must_use]
    pub fn show(&self) -> String {
        let rule = "=".repeat(50);
        format!("{rule}\nLIBRARY: {}\n{rule}\n{}", self.name, self.collection.show(&self.books))
    }
}

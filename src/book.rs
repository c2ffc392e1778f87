//! Books, their cover variants and the condition/borrow model.
//!
//! A [`Book`] is only ever built from a fully validated [`BookDraft`]. Each
//! cover variant carries its own wear behaviour through
//! [`CoverKind::profile`]: hard covers start reinforced and halve incoming
//! damage, glossy covers additionally collect scratches.

pub mod condition;
pub mod cover;
pub mod validation;

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::Serialize;

pub use condition::{Condition, ConditionLabel, ScratchLevel};
pub use cover::{Cover, CoverKind, CoverProfile};

use crate::{book_state::BorrowState, error::ValidationError};

/// Text fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    /// Book title
    Title,
    /// Author name
    Author,
    /// Genre name
    Genre,
    /// Identity key
    Isbn,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::Isbn => "ISBN",
        })
    }
}

/// Unvalidated field set a book is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Title, non-empty and free of forbidden symbols
    pub title: String,
    /// Author, same rules as the title
    pub author: String,
    /// Publication year, 1800 to 2027
    pub year: i32,
    /// Genre, additionally free of digits
    pub genre: String,
    /// Non-empty identity key
    pub isbn: String,
    /// Initial condition before any cover adjustment, defaults to 100
    pub condition: i32,
    /// Falls back to the cover's default when unset
    pub has_images: Option<bool>,
}

impl BookDraft {
    /// Draft with a pristine condition and cover-default illustrations
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            isbn: isbn.into(),
            condition: 100,
            has_images: None,
        }
    }

    /// Set the initial condition
    #[must_use]
    pub fn condition(mut self, condition: i32) -> Self {
        self.condition = condition;
        self
    }

    /// Set whether the book is illustrated
    #[must_use]
    pub fn images(mut self, has_images: bool) -> Self {
        self.has_images = Some(has_images);
        self
    }
}

/// A validated library book.
///
/// Identity is the ISBN: equality and hashing ignore every other field.
#[derive(Debug, Clone)]
pub struct Book {
    /// Title
    title: String,
    /// Author
    author: String,
    /// Publication year
    year: i32,
    /// Genre
    genre: String,
    /// Identity key
    isbn: String,
    /// Cover variant with its own state
    cover: Cover,
    /// Current wear
    condition: Condition,
    /// Whether the book is illustrated
    has_images: bool,
    /// Lending status
    state: BorrowState,
    /// Successful borrows so far
    borrow_count: u32,
}

impl Book {
    /// Build a book of the given cover variant.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking title, author,
    /// year, genre, condition and ISBN in that order.
    pub fn new(kind: CoverKind, draft: BookDraft) -> Result<Self, ValidationError> {
        validation::check_fields(&draft)?;
        validation::check_isbn(&draft)?;
        Ok(Self::assemble(kind, draft))
    }

    /// Build a book from a textual cover name such as `"hardcover"`.
    ///
    /// # Errors
    ///
    /// Same as [`Book::new`], plus [`ValidationError::UnknownCover`] checked
    /// after the condition and before the ISBN.
    pub fn with_cover_name(cover: &str, draft: BookDraft) -> Result<Self, ValidationError> {
        validation::check_fields(&draft)?;
        let kind = cover.parse::<CoverKind>()?;
        validation::check_isbn(&draft)?;
        Ok(Self::assemble(kind, draft))
    }

    /// Build a hardcover book
    ///
    /// # Errors
    ///
    /// See [`Book::new`].
    pub fn hardcover(draft: BookDraft) -> Result<Self, ValidationError> {
        Self::new(CoverKind::Hard, draft)
    }

    /// Build a softcover book
    ///
    /// # Errors
    ///
    /// See [`Book::new`].
    pub fn softcover(draft: BookDraft) -> Result<Self, ValidationError> {
        Self::new(CoverKind::Soft, draft)
    }

    /// Build a glossy-cover book
    ///
    /// # Errors
    ///
    /// See [`Book::new`].
    pub fn glossy(draft: BookDraft) -> Result<Self, ValidationError> {
        Self::new(CoverKind::Glossy, draft)
    }

    /// Builds from an already validated draft and applies the cover bonus
    fn assemble(kind: CoverKind, draft: BookDraft) -> Self {
        let profile = kind.profile();
        Self {
            title: draft.title,
            author: draft.author,
            year: draft.year,
            genre: draft.genre,
            isbn: draft.isbn,
            cover: Cover::new(kind),
            condition: Condition::clamped(draft.condition).adjusted(profile.construction_bonus),
            has_images: draft.has_images.unwrap_or(profile.default_images),
            state: BorrowState::default(),
            borrow_count: 0,
        }
    }

    /// Title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author name
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Genre
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Identity key
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Cover with its variant state
    #[must_use]
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Cover variant tag
    #[must_use]
    pub fn cover_kind(&self) -> CoverKind {
        self.cover.kind()
    }

    /// Current condition, 0..=100
    #[must_use]
    pub fn condition(&self) -> u8 {
        self.condition.value()
    }

    /// Whether the book is illustrated
    #[must_use]
    pub fn has_images(&self) -> bool {
        self.has_images
    }

    /// Number of successful borrows over the book's lifetime
    #[must_use]
    pub fn borrow_count(&self) -> u32 {
        self.borrow_count
    }

    /// Current lending status
    #[must_use]
    pub fn borrow_state(&self) -> BorrowState {
        self.state
    }

    /// Whether the book is out with a reader
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.state == BorrowState::Borrowed
    }

    /// Scratches on a glossy cover, `None` for other variants
    #[must_use]
    pub fn scratch_count(&self) -> Option<u32> {
        self.cover.scratches()
    }

    /// Years since publication relative to `current_year`
    #[must_use]
    pub fn get_age(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.year)
    }

    /// Qualitative condition, e.g. `"good"` or `"worn, many scratches"`
    #[must_use]
    pub fn get_condition_label(&self) -> String {
        let label = self.condition.label();
        match self.cover.label_suffix() {
            Some(scratches) => format!("{label}, {scratches}"),
            None => label.to_string(),
        }
    }

    /// Shift condition by `delta`, clamped to 0..=100
    pub fn update_condition(&mut self, delta: i32) {
        self.condition = self.condition.adjusted(delta);
    }

    /// Apply `amount` of wear through the cover's damage curve.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeDamage`] for negative amounts.
    pub fn damage(&mut self, amount: i32) -> Result<(), ValidationError> {
        if amount < 0 {
            return Err(ValidationError::NegativeDamage(amount));
        }
        let taken = (self.cover_kind().profile().damage_curve)(amount);
        self.update_condition(taken.saturating_neg());
        Ok(())
    }

    /// Apply the cover's default amount of wear
    pub fn damage_default(&mut self) {
        let taken = {
            let profile = self.cover_kind().profile();
            (profile.damage_curve)(profile.default_damage)
        };
        self.update_condition(taken.saturating_neg());
    }

    /// Scratch a glossy cover; every scratch costs two condition points.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScratchesUnsupported`] for hard and soft
    /// covers.
    pub fn add_scratches(&mut self, count: u32) -> Result<(), ValidationError> {
        let Cover::Glossy { scratches } = &mut self.cover else {
            return Err(ValidationError::ScratchesUnsupported(self.cover.kind()));
        };
        *scratches = scratches.saturating_add(count);
        let penalty = i32::try_from(count).unwrap_or(i32::MAX).saturating_mul(2);
        self.update_condition(penalty.saturating_neg());
        Ok(())
    }

    /// Lend the book out. Returns `false` and changes nothing if it is
    /// already borrowed.
    pub fn borrow(&mut self) -> bool {
        match self.state.on_borrow() {
            Some(next) => {
                self.state = next;
                self.borrow_count = self.borrow_count.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Put the book back on the shelf; idempotent
    pub fn return_book(&mut self) {
        self.state = self.state.on_return();
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cover {
            Cover::Glossy { .. } if self.has_images => {
                write!(f, "Glossy cover with illustrations")?;
            }
            _ => write!(f, "{}", self.cover_kind())?,
        }
        write!(f, " '{}' - {} ({})", self.title, self.author, self.year)
    }
}

//! Randomized workload driving a [`Library`] through its public operations.
//!
//! All randomness comes from the `Rng` handed to [`run_simulation`], so a run
//! seeded through [`seeded_rng`] is reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    book::{Book, BookDraft, CoverKind},
    config::SimulationConfig,
    library::Library,
};

/// Titles drawn for new books
pub const TITLES: [&str; 10] = [
    "Echo of Terror",
    "Voice from the Past",
    "Notes of a Country Doctor",
    "Diary of the Last Alchemist",
    "Chemistry of Emotions",
    "What Parents Keep Quiet",
    "The Silent Harbour",
    "Letters to Nobody",
    "Winter in Lisbon",
    "The Cartographer",
];

/// Authors drawn for hard and soft covers
pub const AUTHORS: [&str; 6] = [
    "Haruki Miya",
    "Zhang Li",
    "Ana Maria Duarte",
    "Maria del Mar Rodriguez",
    "Mikhail Bogdanov",
    "Ines Castellanos",
];

/// Genres drawn for hard and soft covers
pub const GENRES: [&str; 6] = ["Novel", "Detective", "Fantasy", "Poetry", "Biography", "Essay"];

/// Genres of glossy publications
pub const GLOSSY_GENRES: [&str; 3] = ["Magazine", "Album", "Catalogue"];

/// Author credited on glossy publications
pub const GLOSSY_AUTHOR: &str = "Magazine editorial";

/// ISBN no simulated book ever receives
pub const MISSING_ISBN: &str = "ISBN-NOT-EXISTS";

/// One kind of random step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationEvent {
    /// Add a random hardcover
    AddHardcover,
    /// Add a random softcover
    AddSoftcover,
    /// Add a random glossy publication
    AddGlossy,
    /// Borrow a book and apply borrow wear
    Borrow,
    /// Return a borrowed book
    Return,
    /// Damage a book
    Damage,
    /// Search by a random cover variant
    SearchByCover,
    /// Search by a random author
    SearchByAuthor,
    /// Search by a random year
    SearchByYear,
    /// Search by a random genre
    SearchByGenre,
    /// Log the condition of up to three books
    CheckCondition,
    /// Remove a book by ISBN
    Remove,
    /// Look up an ISBN that never exists
    LookupMissing,
}

impl SimulationEvent {
    /// Every event, drawn uniformly
    pub const ALL: [Self; 13] = [
        Self::AddHardcover,
        Self::AddSoftcover,
        Self::AddGlossy,
        Self::Borrow,
        Self::Return,
        Self::Damage,
        Self::SearchByCover,
        Self::SearchByAuthor,
        Self::SearchByYear,
        Self::SearchByGenre,
        Self::CheckCondition,
        Self::Remove,
        Self::LookupMissing,
    ];
}

/// Counters collected over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    /// Steps actually run
    pub steps: u32,
    /// Books added
    pub added: u32,
    /// Generated books the library refused
    pub rejected_adds: u32,
    /// Books removed
    pub removed: u32,
    /// Successful borrows
    pub borrows: u32,
    /// Borrows refused because the book was out
    pub refused_borrows: u32,
    /// Books brought back
    pub returns: u32,
    /// Explicit damage events applied
    pub damaged: u32,
    /// Searches and lookups run
    pub searches: u32,
    /// Books on the shelf when the run ended
    pub final_size: usize,
}

/// Random source for a run: seeded when a seed is given, OS-seeded otherwise
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Pick one of a fixed list of names
fn pick<R: Rng + ?Sized>(rng: &mut R, names: &[&'static str]) -> &'static str {
    names.choose(rng).copied().unwrap_or_default()
}

/// Build a random book of `kind` for step `step`
fn random_book<R: Rng + ?Sized>(rng: &mut R, kind: CoverKind, step: u32) -> Option<Book> {
    let (prefix, years, author, genre) = match kind {
        CoverKind::Hard => ("HC", 1900..=2026, pick(rng, &AUTHORS), pick(rng, &GENRES)),
        CoverKind::Soft => ("SC", 1990..=2026, pick(rng, &AUTHORS), pick(rng, &GENRES)),
        CoverKind::Glossy => ("GC", 2000..=2026, GLOSSY_AUTHOR, pick(rng, &GLOSSY_GENRES)),
    };
    let isbn = format!("{prefix}-{step:04}-{}", rng.random_range(1000..=9999));
    let draft = BookDraft::new(pick(rng, &TITLES), author, rng.random_range(years), genre, isbn)
        .condition(rng.random_range(30..=100))
        .images(rng.random_bool(0.5));

    match Book::new(kind, draft) {
        Ok(book) => Some(book),
        Err(e) => {
            warn!(error = %e, "generated book rejected");
            None
        }
    }
}

/// Apply `scratches` then `damage` to the book with `isbn`, logging failures
fn wear(library: &mut Library, isbn: &str, damage: i32, scratches: u32) {
    if scratches > 0 {
        if let Err(e) = library.scratch_book(isbn, scratches) {
            warn!(isbn, error = %e, "could not scratch book");
        }
    }
    if let Err(e) = library.damage_book(isbn, damage) {
        warn!(isbn, error = %e, "could not damage book");
    }
}

/// Run `config.steps` random events against `library`.
///
/// Only books added during this run are borrowed, damaged or removed.
#[allow(clippy::too_many_lines)]
pub fn run_simulation<R: Rng + ?Sized>(
    library: &mut Library,
    config: &SimulationConfig,
    rng: &mut R,
) -> SimulationSummary {
    let mut summary = SimulationSummary::default();
    let mut added: Vec<String> = Vec::new();

    for step in 1..=config.steps {
        let Some(&event) = SimulationEvent::ALL.choose(rng) else {
            break;
        };
        info!(step, total = config.steps, ?event, "simulation step");
        summary.steps = step;

        match event {
            SimulationEvent::AddHardcover
            | SimulationEvent::AddSoftcover
            | SimulationEvent::AddGlossy => {
                let kind = match event {
                    SimulationEvent::AddHardcover => CoverKind::Hard,
                    SimulationEvent::AddSoftcover => CoverKind::Soft,
                    _ => CoverKind::Glossy,
                };
                let Some(book) = random_book(rng, kind, step) else {
                    summary.rejected_adds = summary.rejected_adds.saturating_add(1);
                    continue;
                };
                let isbn = book.isbn().to_string();
                match library.add_book(book) {
                    Ok(_) => {
                        added.push(isbn);
                        summary.added = summary.added.saturating_add(1);
                    }
                    Err(e) => {
                        warn!(error = %e, "book not added");
                        summary.rejected_adds = summary.rejected_adds.saturating_add(1);
                    }
                }
            }
            SimulationEvent::Borrow => {
                let Some(isbn) = added.choose(rng).cloned() else {
                    info!("no books to borrow");
                    continue;
                };
                if !library.borrow_book_by_isbn(&isbn) {
                    summary.refused_borrows = summary.refused_borrows.saturating_add(1);
                    continue;
                }
                summary.borrows = summary.borrows.saturating_add(1);
                match library.search_by_isbn(&isbn).map(Book::cover_kind) {
                    Some(CoverKind::Hard) => wear(library, &isbn, rng.random_range(0..=5), 0),
                    Some(CoverKind::Soft) => wear(library, &isbn, rng.random_range(3..=7), 0),
                    Some(CoverKind::Glossy) => {
                        let scratches = rng.random_range(0..=5);
                        wear(library, &isbn, rng.random_range(3..=10), scratches);
                    }
                    None => {}
                }
            }
            SimulationEvent::Return => {
                let borrowed: Vec<String> = library
                    .borrowed_books()
                    .into_iter()
                    .map(|book| book.isbn().to_string())
                    .collect();
                let Some(isbn) = borrowed.choose(rng) else {
                    info!("no borrowed books to return");
                    continue;
                };
                if library.return_book_by_isbn(isbn) {
                    summary.returns = summary.returns.saturating_add(1);
                }
            }
            SimulationEvent::Damage => {
                let Some(isbn) = added.choose(rng).cloned() else {
                    info!("no books to damage");
                    continue;
                };
                match library.search_by_isbn(&isbn).map(Book::cover_kind) {
                    Some(CoverKind::Hard) => wear(library, &isbn, rng.random_range(5..=15), 0),
                    Some(CoverKind::Soft) => wear(library, &isbn, rng.random_range(10..=25), 0),
                    Some(CoverKind::Glossy) => {
                        let scratches = rng.random_range(1..=5);
                        wear(library, &isbn, rng.random_range(8..=18), scratches);
                    }
                    None => continue,
                }
                summary.damaged = summary.damaged.saturating_add(1);
            }
            SimulationEvent::SearchByCover => {
                let kind = CoverKind::ALL.choose(rng).copied().unwrap_or(CoverKind::Hard);
                let found = library.search_by_cover(kind);
                info!(cover = %kind, found = found.len(), "searched by cover");
                summary.searches = summary.searches.saturating_add(1);
            }
            SimulationEvent::SearchByAuthor => {
                let author = pick(rng, &AUTHORS);
                let found = library.search_by_author(author);
                info!(author, found = found.len(), "searched by author");
                summary.searches = summary.searches.saturating_add(1);
            }
            SimulationEvent::SearchByYear => {
                let year = rng.random_range(1900..=2025);
                let found = library.search_by_year(year);
                info!(year, found = found.len(), "searched by year");
                summary.searches = summary.searches.saturating_add(1);
            }
            SimulationEvent::SearchByGenre => {
                let genre = pick(rng, &GENRES);
                let found = library.search_by_genre(genre);
                info!(genre, found = found.len(), "searched by genre");
                summary.searches = summary.searches.saturating_add(1);
            }
            SimulationEvent::CheckCondition => {
                for isbn in added.choose_multiple(rng, 3) {
                    if let Some(book) = library.search_by_isbn(isbn) {
                        let label = book.get_condition_label();
                        info!(title = book.title(), %label, "condition check");
                    }
                }
            }
            SimulationEvent::Remove => {
                if added.is_empty() {
                    info!("no books to remove");
                    continue;
                }
                let position = rng.random_range(0..added.len());
                let removed =
                    added.get(position).is_some_and(|isbn| library.remove_book_by_isbn(isbn));
                if removed {
                    added.swap_remove(position);
                    summary.removed = summary.removed.saturating_add(1);
                }
            }
            SimulationEvent::LookupMissing => {
                if library.search_by_isbn(MISSING_ISBN).is_some() {
                    warn!(isbn = MISSING_ISBN, "unexpected match");
                }
                summary.searches = summary.searches.saturating_add(1);
            }
        }
    }

    summary.final_size = library.len();
    info!(books = summary.final_size, "simulation finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config with the given step count and seed
    fn config(steps: u32, seed: u64) -> SimulationConfig {
        SimulationConfig { steps, seed: Some(seed), ..SimulationConfig::default() }
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut first = Library::new("A");
        let mut second = Library::new("B");
        let a = run_simulation(&mut first, &config(200, 42), &mut seeded_rng(Some(42)));
        let b = run_simulation(&mut second, &config(200, 42), &mut seeded_rng(Some(42)));

        assert_eq!(a, b);
        let isbns = |library: &Library| -> Vec<String> {
            library.books().map(|book| book.isbn().to_string()).collect()
        };
        assert_eq!(isbns(&first), isbns(&second));
        let conditions =
            |library: &Library| -> Vec<u8> { library.books().map(Book::condition).collect() };
        assert_eq!(conditions(&first), conditions(&second));
    }

    #[test]
    fn test_summary_matches_library() {
        let mut library = Library::new("Sim");
        let summary = run_simulation(&mut library, &config(300, 7), &mut seeded_rng(Some(7)));

        assert_eq!(summary.steps, 300);
        assert_eq!(summary.final_size, library.len());
        assert_eq!(
            usize::try_from(summary.added.saturating_sub(summary.removed)).ok(),
            Some(library.len())
        );
        assert_eq!(library.index().len(), library.len());
        assert!(library.books().all(|book| book.condition() <= 100));
    }

    #[test]
    fn test_generated_books_are_valid() {
        let mut rng = seeded_rng(Some(1));
        for step in 1..=50 {
            for kind in CoverKind::ALL {
                let book = random_book(&mut rng, kind, step);
                assert_eq!(book.as_ref().map(Book::cover_kind), Some(kind));
                if kind == CoverKind::Glossy {
                    let author = book.map(|b| b.author().to_string());
                    assert_eq!(author, Some(GLOSSY_AUTHOR.to_string()));
                }
            }
        }
    }

    #[test]
    fn test_zero_steps() {
        let mut library = Library::new("Empty");
        let summary = run_simulation(&mut library, &config(0, 3), &mut seeded_rng(Some(3)));
        assert_eq!(summary, SimulationSummary::default());
    }
}

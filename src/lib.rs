//! Library catalogue with cover-specific wear, borrow tracking and
//! multi-key lookup indexes.
//!
//! Books are validated on construction, stored once in a [`Library`] and
//! reached through its shelf ([`Collection`]) or its [`MultiIndex`].

pub mod arena;
pub mod book;
pub mod book_state;
pub mod collection;
pub mod config;
pub mod error;
pub mod events;
pub mod index;
pub mod library;
pub mod observers;
pub mod report;
pub mod simulation;

#[cfg(test)]
mod fixtures;

pub use arena::{BookArena, BookId};
pub use book::{Book, BookDraft, Condition, Cover, CoverKind};
pub use book_state::BorrowState;
pub use collection::Collection;
pub use config::SimulationConfig;
pub use error::{ConfigError, LibraryError, Result, ValidationError};
pub use events::LibraryEvent;
pub use index::{Lookup, LookupKey, MultiIndex};
pub use library::Library;
pub use observers::{EventRecorder, LibraryObserver, TracingObserver};
pub use report::{BookReport, LibraryReport};
pub use simulation::{SimulationSummary, run_simulation, seeded_rng};

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, info, warn};

use crate::events::LibraryEvent;

/// Trait for library event observation
pub trait LibraryObserver {
    /// Called after the library has applied the change described by `event`
    fn on_event(&self, event: &LibraryEvent);
}

/// Writes every event to the `tracing` log
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LibraryObserver for TracingObserver {
    fn on_event(&self, event: &LibraryEvent) {
        match event {
            LibraryEvent::BookAdded { isbn, title } => info!(%isbn, %title, "book added"),
            LibraryEvent::DuplicateRejected { isbn } => warn!(%isbn, "duplicate ISBN rejected"),
            LibraryEvent::BookRemoved { isbn, title } => info!(%isbn, %title, "book removed"),
            LibraryEvent::BookBorrowed { isbn, title, borrow_count } => {
                info!(%isbn, %title, borrow_count, "book borrowed");
            }
            LibraryEvent::BorrowRefused { isbn, title } => {
                warn!(%isbn, %title, "book is already borrowed");
            }
            LibraryEvent::BookReturned { isbn, title } => info!(%isbn, %title, "book returned"),
            LibraryEvent::BookWorn { isbn, condition, label } => {
                info!(%isbn, condition, %label, "book worn");
            }
            LibraryEvent::SearchHit { field, query, matches } => {
                debug!(?field, %query, matches, "search hit");
            }
            LibraryEvent::SearchMiss { field, query } => debug!(?field, %query, "search miss"),
        }
    }
}

/// Keeps events in memory, shared with whoever holds a clone
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    /// Events seen so far
    events: Rc<RefCell<Vec<LibraryEvent>>>,
}

impl EventRecorder {
    /// Recorder with no events yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<LibraryEvent> {
        self.events.borrow().clone()
    }

    /// Forget recorded events
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl LibraryObserver for EventRecorder {
    fn on_event(&self, event: &LibraryEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

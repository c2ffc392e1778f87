use serde::Serialize;

/// Lending status of a single book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BorrowState {
    /// Book is on the shelf and can be borrowed
    #[default]
    Available,
    /// Book is out with a reader
    Borrowed,
}

impl BorrowState {
    /// Get a human-readable description of the current state
    #[must_use]
    pub fn get_description(self) -> &'static str {
        match self {
            Self::Available => "Book is available for borrowing",
            Self::Borrowed => "Book is currently borrowed",
        }
    }

    /// State reached by a borrow request, or `None` when the request is refused
    #[must_use]
    pub fn on_borrow(self) -> Option<Self> {
        match self {
            Self::Available => Some(Self::Borrowed),
            Self::Borrowed => None,
        }
    }

    /// Returning always lands on the shelf, whatever the previous state
    #[must_use]
    pub fn on_return(self) -> Self {
        Self::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_transitions() {
        let state = BorrowState::default();
        assert_eq!(state, BorrowState::Available);
        assert_eq!(state.on_borrow(), Some(BorrowState::Borrowed));
        assert_eq!(BorrowState::Borrowed.on_borrow(), None);
        assert_eq!(BorrowState::Borrowed.on_return(), BorrowState::Available);
        assert_eq!(BorrowState::Available.on_return(), BorrowState::Available);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(BorrowState::Available.get_description(), "Book is available for borrowing");
        assert_eq!(BorrowState::Borrowed.get_description(), "Book is currently borrowed");
    }
}

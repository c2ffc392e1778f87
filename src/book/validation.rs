//! Field checks run before a [`Book`](super::Book) is built.

use super::{BookDraft, Field};
use crate::error::ValidationError;

/// Characters rejected in titles, author names and genres
pub const FORBIDDEN_SYMBOLS: [char; 16] =
    ['@', '#', '$', '%', '^', '&', '*', '=', '+', '<', '>', '/', '\\', '|', '~', '`'];

/// Oldest accepted publication year
pub const MIN_YEAR: i32 = 1800;
/// Newest accepted publication year
pub const MAX_YEAR: i32 = 2027;

/// Non-empty and free of forbidden symbols
fn check_text(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    match value.chars().find(|c| FORBIDDEN_SYMBOLS.contains(c)) {
        Some(symbol) => {
            Err(ValidationError::ForbiddenSymbol { field, symbol, value: value.to_string() })
        }
        None => Ok(()),
    }
}

/// Checks every draft field up to and including the condition.
///
/// The ISBN is checked separately by [`check_isbn`] so that callers parsing a
/// cover name can slot that check in between, keeping the reported error the
/// first one in field order.
pub(crate) fn check_fields(draft: &BookDraft) -> Result<(), ValidationError> {
    check_text(Field::Title, &draft.title)?;
    check_text(Field::Author, &draft.author)?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&draft.year) {
        return Err(ValidationError::YearOutOfRange(draft.year));
    }

    if draft.genre.is_empty() {
        return Err(ValidationError::Empty(Field::Genre));
    }
    if draft.genre.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::DigitInGenre(draft.genre.clone()));
    }
    check_text(Field::Genre, &draft.genre)?;

    if !(0..=100).contains(&draft.condition) {
        return Err(ValidationError::ConditionOutOfRange(draft.condition));
    }
    Ok(())
}

/// The ISBN only has to be present
pub(crate) fn check_isbn(draft: &BookDraft) -> Result<(), ValidationError> {
    if draft.isbn.is_empty() {
        return Err(ValidationError::Empty(Field::Isbn));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookDraft {
        BookDraft::new("Echo of Terror", "Haruki Miya", 1869, "Novel", "ISBN-001")
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(check_fields(&draft()), Ok(()));
        assert_eq!(check_isbn(&draft()), Ok(()));
    }

    #[test]
    fn test_every_forbidden_symbol_is_rejected() {
        for symbol in FORBIDDEN_SYMBOLS {
            let mut bad = draft();
            bad.author = format!("Haruki{symbol}Miya");
            let rejected = check_fields(&bad);
            assert!(matches!(
                rejected,
                Err(ValidationError::ForbiddenSymbol { field: Field::Author, symbol: s, .. })
                    if s == symbol
            ));
        }
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        for year in [MIN_YEAR, MAX_YEAR] {
            let mut ok = draft();
            ok.year = year;
            assert_eq!(check_fields(&ok), Ok(()));
        }
        for year in [1799, 2028] {
            let mut bad = draft();
            bad.year = year;
            assert_eq!(check_fields(&bad), Err(ValidationError::YearOutOfRange(year)));
        }
    }

    #[test]
    fn test_genre_rules() {
        let mut bad = draft();
        bad.genre = "Sci-fi 2".to_string();
        assert_eq!(check_fields(&bad), Err(ValidationError::DigitInGenre("Sci-fi 2".to_string())));

        bad.genre = "Drama&Co".to_string();
        assert!(matches!(
            check_fields(&bad),
            Err(ValidationError::ForbiddenSymbol { field: Field::Genre, symbol: '&', .. })
        ));

        bad.genre = String::new();
        assert_eq!(check_fields(&bad), Err(ValidationError::Empty(Field::Genre)));
    }

    #[test]
    fn test_numeric_symbols_are_not_digits() {
        for genre in ["½ Measures", "Ⅻ Century Chronicles", "Tales²"] {
            let mut ok = draft();
            ok.genre = genre.to_string();
            assert_eq!(check_fields(&ok), Ok(()), "{genre}");
        }
        let mut bad = draft();
        bad.genre = "Top 10".to_string();
        assert_eq!(check_fields(&bad), Err(ValidationError::DigitInGenre("Top 10".to_string())));
    }

    #[test]
    fn test_first_failing_field_wins() {
        let mut bad = draft();
        bad.title = String::new();
        bad.year = 1500;
        assert_eq!(check_fields(&bad), Err(ValidationError::Empty(Field::Title)));
    }
}

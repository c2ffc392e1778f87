//! Physical condition of a book and its qualitative labels.

use std::fmt;

use serde::Serialize;

/// Wear level on a 0..=100 scale. Every constructor and adjustment clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Condition(u8);

impl Condition {
    /// Pristine copy
    pub const PRISTINE: Self = Self(100);
    /// Nothing left to damage
    pub const DESTROYED: Self = Self(0);

    /// Clamp an arbitrary value into range
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        u8::try_from(value.clamp(0, 100)).map_or(Self::PRISTINE, Self)
    }

    /// Condition after applying `delta`, clamped
    #[must_use]
    pub fn adjusted(self, delta: i32) -> Self {
        Self::clamped(i32::from(self.0).saturating_add(delta))
    }

    /// Raw value
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Qualitative bucket for this value
    #[must_use]
    pub fn label(self) -> ConditionLabel {
        match self.0 {
            91.. => ConditionLabel::LikeNew,
            71..=90 => ConditionLabel::Good,
            41..=70 => ConditionLabel::Worn,
            16..=40 => ConditionLabel::HeavilyWorn,
            _ => ConditionLabel::Critical,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Five-bucket description of a [`Condition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionLabel {
    /// Above 90
    LikeNew,
    /// 71 to 90
    Good,
    /// 41 to 70
    Worn,
    /// 16 to 40
    HeavilyWorn,
    /// 15 and below
    Critical,
}

impl ConditionLabel {
    /// Text shown to readers
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LikeNew => "like new",
            Self::Good => "good",
            Self::Worn => "worn",
            Self::HeavilyWorn => "heavily worn",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How scratched a glossy cover looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScratchLevel {
    /// No scratches at all
    Clean,
    /// One to three
    Few,
    /// Four to ten
    Many,
    /// More than ten
    Heavy,
}

impl ScratchLevel {
    /// Bucket a scratch count
    #[must_use]
    pub fn from_count(scratches: u32) -> Self {
        match scratches {
            0 => Self::Clean,
            1..=3 => Self::Few,
            4..=10 => Self::Many,
            _ => Self::Heavy,
        }
    }

    /// Text appended to the condition label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "no scratches",
            Self::Few => "a few scratches",
            Self::Many => "many scratches",
            Self::Heavy => "heavily scratched",
        }
    }
}

impl fmt::Display for ScratchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        assert_eq!(Condition::clamped(100).label(), ConditionLabel::LikeNew);
        assert_eq!(Condition::clamped(91).label(), ConditionLabel::LikeNew);
        assert_eq!(Condition::clamped(90).label(), ConditionLabel::Good);
        assert_eq!(Condition::clamped(71).label(), ConditionLabel::Good);
        assert_eq!(Condition::clamped(70).label(), ConditionLabel::Worn);
        assert_eq!(Condition::clamped(41).label(), ConditionLabel::Worn);
        assert_eq!(Condition::clamped(40).label(), ConditionLabel::HeavilyWorn);
        assert_eq!(Condition::clamped(16).label(), ConditionLabel::HeavilyWorn);
        assert_eq!(Condition::clamped(15).label(), ConditionLabel::Critical);
        assert_eq!(Condition::clamped(0).label(), ConditionLabel::Critical);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Condition::clamped(-40), Condition::DESTROYED);
        assert_eq!(Condition::clamped(250), Condition::PRISTINE);
        assert_eq!(Condition::clamped(95).adjusted(20), Condition::PRISTINE);
        assert_eq!(Condition::clamped(3).adjusted(-10), Condition::DESTROYED);
        assert_eq!(Condition::clamped(50).adjusted(i32::MIN).value(), 0);
    }

    #[test]
    fn test_scratch_levels() {
        assert_eq!(ScratchLevel::from_count(0), ScratchLevel::Clean);
        assert_eq!(ScratchLevel::from_count(3), ScratchLevel::Few);
        assert_eq!(ScratchLevel::from_count(4), ScratchLevel::Many);
        assert_eq!(ScratchLevel::from_count(10), ScratchLevel::Many);
        assert_eq!(ScratchLevel::from_count(11), ScratchLevel::Heavy);
    }
}

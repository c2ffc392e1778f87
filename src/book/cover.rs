//! Cover variants and their wear behaviour.

use std::{fmt, str::FromStr};

use serde::Serialize;

use super::condition::ScratchLevel;
use crate::error::ValidationError;

/// The three cover variants a book can be printed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverKind {
    /// Reinforced binding, takes half damage
    Hard,
    /// Paperback
    Soft,
    /// Magazine-style glossy cover that collects scratches
    Glossy,
}

/// Per-variant behaviour table
#[derive(Debug)]
pub struct CoverProfile {
    /// Display name
    pub name: &'static str,
    /// Condition added right after construction
    pub construction_bonus: i32,
    /// Damage applied when the caller gives no amount
    pub default_damage: i32,
    /// Maps a requested damage amount to the amount actually taken
    pub damage_curve: fn(i32) -> i32,
    /// Whether books of this kind are assumed illustrated
    pub default_images: bool,
}

/// Hard covers absorb half of every hit but never take less than one point
fn reinforced(amount: i32) -> i32 {
    (amount / 2).max(1)
}

/// Damage taken as requested
fn unmodified(amount: i32) -> i32 {
    amount
}

/// Behaviour of hard covers
const HARD: CoverProfile = CoverProfile {
    name: "Hardcover",
    construction_bonus: 20,
    default_damage: 5,
    damage_curve: reinforced,
    default_images: false,
};

/// Behaviour of soft covers
const SOFT: CoverProfile = CoverProfile {
    name: "Softcover",
    construction_bonus: 0,
    default_damage: 10,
    damage_curve: unmodified,
    default_images: false,
};

/// Behaviour of glossy covers
const GLOSSY: CoverProfile = CoverProfile {
    name: "Glossy cover",
    construction_bonus: 0,
    default_damage: 10,
    damage_curve: unmodified,
    default_images: true,
};

impl CoverKind {
    /// Every variant, in menu order
    pub const ALL: [Self; 3] = [Self::Hard, Self::Soft, Self::Glossy];

    /// Behaviour table of this variant
    #[must_use]
    pub fn profile(self) -> &'static CoverProfile {
        match self {
            Self::Hard => &HARD,
            Self::Soft => &SOFT,
            Self::Glossy => &GLOSSY,
        }
    }
}

impl fmt::Display for CoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

impl FromStr for CoverKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" | "hardcover" => Ok(Self::Hard),
            "soft" | "softcover" | "paperback" => Ok(Self::Soft),
            "glossy" | "glossy cover" | "glossycover" => Ok(Self::Glossy),
            _ => Err(ValidationError::UnknownCover(s.to_string())),
        }
    }
}

/// Cover of a concrete book, carrying variant-specific state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    /// Hard cover, no extra state
    Hard,
    /// Soft cover, no extra state
    Soft,
    /// Glossy cover with its scratch tally
    Glossy {
        /// Scratches collected so far
        scratches: u32,
    },
}

impl Cover {
    /// Fresh cover of the given kind
    #[must_use]
    pub fn new(kind: CoverKind) -> Self {
        match kind {
            CoverKind::Hard => Self::Hard,
            CoverKind::Soft => Self::Soft,
            CoverKind::Glossy => Self::Glossy { scratches: 0 },
        }
    }

    /// Variant tag without the per-book state
    #[must_use]
    pub fn kind(&self) -> CoverKind {
        match self {
            Self::Hard => CoverKind::Hard,
            Self::Soft => CoverKind::Soft,
            Self::Glossy { .. } => CoverKind::Glossy,
        }
    }

    /// Scratch count, for covers that track one
    #[must_use]
    pub fn scratches(&self) -> Option<u32> {
        match self {
            Self::Glossy { scratches } => Some(*scratches),
            Self::Hard | Self::Soft => None,
        }
    }

    /// Suffix appended to the condition label
    #[must_use]
    pub fn label_suffix(&self) -> Option<ScratchLevel> {
        self.scratches().map(ScratchLevel::from_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_curves() {
        let hard = CoverKind::Hard.profile();
        assert_eq!((hard.damage_curve)(10), 5);
        assert_eq!((hard.damage_curve)(7), 3);
        assert_eq!((hard.damage_curve)(1), 1);
        assert_eq!((hard.damage_curve)(0), 1);

        for kind in [CoverKind::Soft, CoverKind::Glossy] {
            assert_eq!((kind.profile().damage_curve)(17), 17);
            assert_eq!((kind.profile().damage_curve)(0), 0);
        }
    }

    #[test]
    fn test_parse_cover_names() {
        assert_eq!("Hardcover".parse::<CoverKind>(), Ok(CoverKind::Hard));
        assert_eq!(" soft ".parse::<CoverKind>(), Ok(CoverKind::Soft));
        assert_eq!("GLOSSY".parse::<CoverKind>(), Ok(CoverKind::Glossy));
        assert_eq!(
            "leather".parse::<CoverKind>(),
            Err(ValidationError::UnknownCover("leather".to_string()))
        );
    }

    #[test]
    fn test_only_glossy_tracks_scratches() {
        assert_eq!(Cover::new(CoverKind::Glossy).scratches(), Some(0));
        assert_eq!(Cover::new(CoverKind::Hard).label_suffix(), None);
        assert_eq!(Cover::new(CoverKind::Glossy).label_suffix(), Some(ScratchLevel::Clean));
    }
}

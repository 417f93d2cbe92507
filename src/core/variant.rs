//! Game variants and their display metadata.

use serde::{Deserialize, Serialize};

/// The rule variant, fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// Last stone taken wins.
    Normal,
    /// Last stone taken loses.
    Misere,
    /// Removed stones cascade into the preceding pile; last stone wins.
    Staircase,
}

impl GameVariant {
    /// All supported variants, in presentation order.
    pub const ALL: [GameVariant; 3] =
        [GameVariant::Normal, GameVariant::Misere, GameVariant::Staircase];

    /// Display metadata for setup and landing screens.
    #[must_use]
    pub const fn rules(self) -> VariantRules {
        match self {
            GameVariant::Normal => VariantRules {
                title: "Classic Nim",
                description: "Remove any number of stones from a single pile. \
                              The player who takes the last stone wins.",
                strategy: "Try to make the nim-sum of all piles equal to zero \
                           after your move.",
            },
            GameVariant::Misere => VariantRules {
                title: "Misère Nim",
                description: "Remove any number of stones from a single pile. \
                              The player who takes the last stone loses.",
                strategy: "Play like normal Nim until the endgame, then leave \
                           an odd number of piles with one stone.",
            },
            GameVariant::Staircase => VariantRules {
                title: "Staircase Nim",
                description: "Removed stones get added to the previous pile \
                              (if any). The player who takes the last stone wins.",
                strategy: "Focus on maintaining balance in odd-numbered rows.",
            },
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rules().title)
    }
}

/// Human-readable description of a variant for the UI collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRules {
    /// Display name.
    pub title: &'static str,
    /// How the variant is played.
    pub description: &'static str,
    /// A strategy hint shown alongside the rules.
    pub strategy: &'static str,
}

//! Game configuration.
//!
//! The engine never hardcodes the deck: a `GameConfig` describes the
//! value range, how many copies of each value the deck carries, and how
//! many cards each side commits to a round. The default configuration
//! is the standard duel — two copies of 1..=10 (20 cards), two cards a
//! side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration problems caught at engine construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value range: {min}..={max}")]
    InvalidValueRange { min: u8, max: u8 },
    #[error("deck must carry at least one copy of each value")]
    NoCopies,
    #[error("round size must be at least 1")]
    EmptyRound,
    #[error("deck of {deck_size} cannot fill a selection of {round_size}")]
    DeckTooSmall { deck_size: usize, round_size: usize },
}

/// Deck composition and round shape.
///
/// ## Example
///
/// ```
/// use sum_duel::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.deck_size(), 20);
///
/// let small = GameConfig::default().with_values(1, 5).with_copies(1);
/// assert_eq!(small.deck_size(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lowest card value in the deck.
    pub min_value: u8,

    /// Highest card value in the deck (inclusive).
    pub max_value: u8,

    /// Copies of each value in a fresh deck.
    pub copies: u8,

    /// Cards each side commits to a round.
    pub round_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_value: 1,
            max_value: 10,
            copies: 2,
            round_size: 2,
        }
    }
}

impl GameConfig {
    /// Set the value range (inclusive).
    #[must_use]
    pub fn with_values(mut self, min: u8, max: u8) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the number of copies of each value.
    #[must_use]
    pub fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Set the number of cards each side commits to a round.
    #[must_use]
    pub fn with_round_size(mut self, round_size: usize) -> Self {
        self.round_size = round_size;
        self
    }

    /// Number of cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        let span = (self.max_value.saturating_sub(self.min_value) as usize) + 1;
        span * self.copies as usize
    }

    /// Check the configuration describes a playable game.
    ///
    /// A deck too small for even one full round is still valid — the
    /// first `play_round` ends it — but a deck that cannot fill the
    /// player's selection is not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value == 0 || self.min_value > self.max_value {
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.copies == 0 {
            return Err(ConfigError::NoCopies);
        }
        if self.round_size == 0 {
            return Err(ConfigError::EmptyRound);
        }
        if self.deck_size() < self.round_size {
            return Err(ConfigError::DeckTooSmall {
                deck_size: self.deck_size(),
                round_size: self.round_size,
            });
        }
        Ok(())
    }
}

//! Card identity and values.
//!
//! Every card in a game instance has a unique `CardId`, stable for the
//! lifetime of that instance. A reset allocates fresh IDs, so a stale
//! reference from a previous game can never name a card in the new one.
//!
//! Two cards may share a value: the default deck is two full sets of
//! values 1..=10.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A numbered card. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity within the game instance.
    pub id: CardId,

    /// Face value, 1..=10 under the default configuration.
    pub value: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, value: u8) -> Self {
        Self { id, value }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.id, self.value)
    }
}

//! Card ledger: which zone every card occupies.
//!
//! The ledger is the engine's conservation record. Every card belongs
//! to exactly one zone at any moment — the deck, the player's
//! selection, or one of the win piles — and moves between zones only
//! through `move_to`. Cards are never duplicated or lost across a
//! transition.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::seat::Seat;

/// Where a card currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The shared pool the player selects from and the bot draws from.
    Deck,
    /// The player's staged cards for the upcoming round.
    Selection,
    /// Permanently won by a seat.
    WonBy(Seat),
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => write!(f, "deck"),
            Zone::Selection => write!(f, "selection"),
            Zone::WonBy(seat) => write!(f, "{seat}'s pile"),
        }
    }
}

/// Tracks the zone of every card in a game instance.
///
/// ## Usage
///
/// ```
/// use sum_duel::core::CardId;
/// use sum_duel::zones::{CardLedger, Zone};
///
/// let mut ledger = CardLedger::new();
/// ledger.register(CardId::new(0), Zone::Deck);
///
/// assert_eq!(ledger.zone_of(CardId::new(0)), Some(Zone::Deck));
/// assert_eq!(ledger.move_to(CardId::new(0), Zone::Selection), Some(Zone::Deck));
/// assert_eq!(ledger.count(Zone::Selection), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardLedger {
    locations: FxHashMap<CardId, Zone>,
}

impl CardLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly dealt card in its starting zone.
    ///
    /// Panics if the card is already tracked.
    pub fn register(&mut self, card: CardId, zone: Zone) {
        let previous = self.locations.insert(card, zone);
        assert!(
            previous.is_none(),
            "{card} registered twice in the ledger"
        );
    }

    /// Move a card to a new zone.
    ///
    /// Returns the old zone, or `None` if the card is unknown (the
    /// move is then a no-op).
    pub fn move_to(&mut self, card: CardId, zone: Zone) -> Option<Zone> {
        let location = self.locations.get_mut(&card)?;
        let old = *location;
        *location = zone;
        Some(old)
    }

    /// The zone a card currently occupies.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn count(&self, zone: Zone) -> usize {
        self.locations.values().filter(|&&z| z == zone).count()
    }

    /// Total cards tracked. Constant between resets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.locations.len()
    }

    /// Forget all cards. Used on reset before dealing fresh identities.
    pub fn clear(&mut self) {
        self.locations.clear();
    }
}

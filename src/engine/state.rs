//! Phase machine and the read-only table view.
//!
//! The engine owns its state exclusively; consumers observe it through
//! [`TableView`], an immutable snapshot cheap enough to rebuild after
//! every transition (the log is a persistent `im::Vector`).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::seat::SeatMap;
use crate::engine::round::{RoundEntry, RoundReveal};

/// Where the duel currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The player is choosing cards; selection toggles are accepted.
    Selecting,
    /// Selection is locked; the round awaits resolution.
    RoundInProgress,
    /// Too few cards remain to continue. Only reset is accepted.
    Terminal,
}

impl Phase {
    /// Whether selection toggles are accepted.
    #[must_use]
    pub fn accepts_selection(self) -> bool {
        self == Phase::Selecting
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Terminal
    }

    /// Whether a locked round awaits resolution.
    #[must_use]
    pub fn is_round_in_progress(self) -> bool {
        self == Phase::RoundInProgress
    }
}

/// Read-only snapshot of everything a presentation layer renders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableView {
    /// Current phase.
    pub phase: Phase,

    /// Deck cards in display order.
    pub deck: Vec<Card>,

    /// The player's staged cards.
    pub selection: Vec<Card>,

    /// Sum of the staged cards' values; 0 when nothing is staged.
    pub selection_sum: u32,

    /// Cards won so far, per seat.
    pub pile_sizes: SeatMap<usize>,

    /// Rounds won so far, per seat.
    pub round_wins: SeatMap<u32>,

    /// Cards fought in the most recent round, if any.
    pub reveal: Option<RoundReveal>,

    /// Round log, most recent first.
    pub log: Vector<RoundEntry>,

    /// Result text of the most recent round (empty before the first).
    pub round_result: String,
}

impl TableView {
    /// Total cards visible across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.selection.len()
            + self.pile_sizes.iter().map(|(_, n)| n).sum::<usize>()
    }
}

//! Round outcomes, the round log, and the reveal snapshot.
//!
//! A resolved round produces three artifacts:
//! - a [`RoundOutcome`] (who had the higher sum), whose `Display`
//!   rendering is the canonical result text,
//! - a [`RoundEntry`] prepended to the log (most recent first),
//! - a [`RoundReveal`] with the exact cards both sides fought with.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::seat::Seat;

/// Result text while a locked round awaits resolution.
pub const ROUND_IN_PROGRESS_TEXT: &str = "... Battle in Progress ...";

/// Result text when the deck cannot cover the bot's draw.
pub const INSUFFICIENT_DECK_TEXT: &str =
    "Cannot play, not enough cards left for the bot's draw!";

/// Outcome of a resolved round.
///
/// The `Display` impl renders the result text shown to players:
///
/// ```
/// use sum_duel::engine::RoundOutcome;
///
/// let outcome = RoundOutcome::from_sums(19, 3);
/// assert_eq!(outcome.to_string(), "Player 1 wins: 19 vs 3 (Diff: 16)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The player's sum was strictly higher; all four cards are theirs.
    PlayerWin { player_sum: u32, bot_sum: u32 },
    /// The bot's sum was strictly higher; all four cards are its.
    BotWin { player_sum: u32, bot_sum: u32 },
    /// Equal sums; each side keeps its own two cards.
    Tie { sum: u32 },
}

impl RoundOutcome {
    /// Classify a pair of sums.
    #[must_use]
    pub fn from_sums(player_sum: u32, bot_sum: u32) -> Self {
        match player_sum.cmp(&bot_sum) {
            std::cmp::Ordering::Greater => RoundOutcome::PlayerWin { player_sum, bot_sum },
            std::cmp::Ordering::Less => RoundOutcome::BotWin { player_sum, bot_sum },
            std::cmp::Ordering::Equal => RoundOutcome::Tie { sum: player_sum },
        }
    }

    /// The seat that takes all four cards, or `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::PlayerWin { .. } => Some(Seat::Player),
            RoundOutcome::BotWin { .. } => Some(Seat::Bot),
            RoundOutcome::Tie { .. } => None,
        }
    }

    /// Winning margin; 0 on a tie.
    #[must_use]
    pub fn margin(&self) -> u32 {
        match *self {
            RoundOutcome::PlayerWin { player_sum, bot_sum } => player_sum - bot_sum,
            RoundOutcome::BotWin { player_sum, bot_sum } => bot_sum - player_sum,
            RoundOutcome::Tie { .. } => 0,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            RoundOutcome::PlayerWin { player_sum, bot_sum } => write!(
                f,
                "Player 1 wins: {player_sum} vs {bot_sum} (Diff: {})",
                player_sum - bot_sum
            ),
            RoundOutcome::BotWin { player_sum, bot_sum } => write!(
                f,
                "Bot wins: {bot_sum} vs {player_sum} (Diff: {})",
                bot_sum - player_sum
            ),
            RoundOutcome::Tie { sum } => write!(f, "It's a tie: {sum} vs {sum}"),
        }
    }
}

/// One immutable line of the round log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    /// 1-based round number.
    pub ordinal: u32,

    /// Result text of the round.
    pub text: String,
}

impl RoundEntry {
    /// Create a log entry.
    #[must_use]
    pub fn new(ordinal: u32, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for RoundEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}: {}", self.ordinal, self.text)
    }
}

/// The cards revealed by the most recent round, for display.
///
/// Replaced wholesale on every resolution; cleared on reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReveal {
    /// The player's committed cards.
    pub player: SmallVec<[Card; 2]>,

    /// The bot's drawn cards.
    pub bot: SmallVec<[Card; 2]>,
}

impl RoundReveal {
    /// Sum of a seat's revealed cards.
    #[must_use]
    pub fn sum(&self, seat: Seat) -> u32 {
        let cards = match seat {
            Seat::Player => &self.player,
            Seat::Bot => &self.bot,
        };
        cards.iter().map(|c| u32::from(c.value)).sum()
    }
}

/// Verdict of a finished game, from the round-win counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelResult {
    /// One seat won strictly more rounds.
    Champion(Seat),
    /// Both seats won the same number of rounds.
    Draw,
}

impl DuelResult {
    /// Check whether a seat is the champion.
    #[must_use]
    pub fn is_champion(&self, seat: Seat) -> bool {
        matches!(self, DuelResult::Champion(winner) if *winner == seat)
    }
}

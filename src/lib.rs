//! # sum-duel
//!
//! A deterministic engine for a two-card summing duel: each round the
//! player stages two cards from a shared numbered deck, the bot draws
//! two from what remains, and the higher sum takes all four. The game
//! ends when the deck can no longer cover the bot's draw.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: no rendering, timing, or input handling.
//!    A presentation layer drives the operations and renders
//!    [`TableView`] snapshots.
//!
//! 2. **Deterministic**: every shuffle and draw flows through an
//!    injectable [`RandomSource`]; a seed fully determines a game.
//!
//! 3. **Tolerant by design**: illegal operations (a third selection,
//!    a stale card id, playing mid-round or after the end) are silent
//!    no-ops, never errors.
//!
//! 4. **Conservation**: every card is in exactly one zone — deck,
//!    selection, or a win pile — at all times, tracked by the
//!    [`CardLedger`].
//!
//! ## Example
//!
//! ```
//! use sum_duel::{DuelEngine, Phase};
//!
//! let mut engine = DuelEngine::new(42);
//!
//! while engine.phase() == Phase::Selecting {
//!     let deck = engine.view().deck;
//!     engine.select_card(deck[0].id);
//!     engine.select_card(deck[1].id);
//!     let _ = engine.play_round();
//! }
//!
//! assert!(engine.phase().is_terminal());
//! println!("{} rounds, verdict: {:?}", engine.log().len(), engine.champion());
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, seats, RNG, configuration
//! - `zones`: the card ledger (conservation invariant)
//! - `engine`: the duel state machine, round log, views, checkpoints

pub mod core;
pub mod engine;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, ConfigError, DuelRng, DuelRngState, GameConfig, RandomSource, Seat, SeatMap,
    SequenceRandom,
};

pub use crate::engine::{
    CheckpointError, DuelEngine, DuelResult, Phase, RoundEntry, RoundOutcome, RoundReveal,
    RoundTicket, TableView, INSUFFICIENT_DECK_TEXT, ROUND_IN_PROGRESS_TEXT,
};

pub use crate::zones::{CardLedger, Zone};

//! The duel state machine: operations, rounds, views, checkpoints.

pub mod checkpoint;
pub mod duel;
pub mod round;
pub mod state;

pub use checkpoint::CheckpointError;
pub use duel::{DuelEngine, RoundTicket};
pub use round::{
    DuelResult, RoundEntry, RoundOutcome, RoundReveal, INSUFFICIENT_DECK_TEXT,
    ROUND_IN_PROGRESS_TEXT,
};
pub use state::{Phase, TableView};

//! Engine checkpointing: capture a game mid-flight, restore it later.
//!
//! A checkpoint stores the cards of every zone (with their identities),
//! the log, the counters, the phase, and the RNG position, so a
//! restored engine continues exactly where the saved one stopped —
//! same future shuffles, same future bot draws. The ledger is not
//! stored; it is rebuilt from the zone contents on restore, which also
//! revalidates the conservation invariant.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::card::{Card, CardId};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::{DuelRng, DuelRngState};
use crate::core::seat::{Seat, SeatMap};
use crate::engine::duel::DuelEngine;
use crate::engine::round::{RoundEntry, RoundReveal};
use crate::engine::state::Phase;
use crate::zones::ledger::{CardLedger, Zone};

/// Problems decoding or validating checkpoint bytes.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint bytes could not be encoded or decoded")]
    Codec(#[from] bincode::Error),
    #[error("checkpoint config is invalid: {0}")]
    Config(#[from] ConfigError),
    #[error("checkpoint tracks {found} cards, config expects {expected}")]
    CardCountMismatch { expected: usize, found: usize },
    #[error("checkpoint lists {0} more than once")]
    DuplicateCard(CardId),
}

/// Serialized form of a complete game.
#[derive(Serialize, Deserialize)]
pub(crate) struct Checkpoint {
    config: GameConfig,
    deck: Vec<Card>,
    selection: Vec<Card>,
    piles: SeatMap<Vec<Card>>,
    round_wins: SeatMap<u32>,
    log: Vector<RoundEntry>,
    reveal: Option<RoundReveal>,
    phase: Phase,
    round_result: String,
    epoch: u64,
    next_card_id: u32,
    rng: DuelRngState,
}

impl DuelEngine<DuelRng> {
    /// Serialize the complete game, RNG position included.
    pub fn save_state(&self) -> Result<Vec<u8>, CheckpointError> {
        let checkpoint = Checkpoint {
            config: self.config,
            deck: self.deck.iter().map(|id| self.cards[id]).collect(),
            selection: self.selection.iter().map(|id| self.cards[id]).collect(),
            piles: self
                .piles
                .map(|pile| pile.iter().map(|id| self.cards[id]).collect()),
            round_wins: self.round_wins.clone(),
            log: self.log.clone(),
            reveal: self.reveal.clone(),
            phase: self.phase,
            round_result: self.round_result.clone(),
            epoch: self.epoch,
            next_card_id: self.next_card_id,
            rng: self.rng.state(),
        };
        Ok(bincode::serialize(&checkpoint)?)
    }

    /// Rebuild an engine from checkpoint bytes.
    pub fn restore_state(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        checkpoint.config.validate()?;

        let mut entries: Vec<(Card, Zone)> = Vec::with_capacity(checkpoint.config.deck_size());
        entries.extend(checkpoint.deck.iter().map(|&c| (c, Zone::Deck)));
        entries.extend(checkpoint.selection.iter().map(|&c| (c, Zone::Selection)));
        for seat in Seat::both() {
            entries.extend(
                checkpoint.piles[seat]
                    .iter()
                    .map(move |&c| (c, Zone::WonBy(seat))),
            );
        }

        if entries.len() != checkpoint.config.deck_size() {
            return Err(CheckpointError::CardCountMismatch {
                expected: checkpoint.config.deck_size(),
                found: entries.len(),
            });
        }

        let mut cards: FxHashMap<CardId, Card> = FxHashMap::default();
        let mut ledger = CardLedger::new();
        for (card, zone) in entries {
            if cards.insert(card.id, card).is_some() {
                return Err(CheckpointError::DuplicateCard(card.id));
            }
            ledger.register(card.id, zone);
        }

        Ok(DuelEngine {
            config: checkpoint.config,
            cards,
            ledger,
            deck: checkpoint.deck.iter().map(|c| c.id).collect(),
            selection: checkpoint.selection.iter().map(|c| c.id).collect(),
            piles: checkpoint
                .piles
                .map(|pile| pile.iter().map(|c| c.id).collect()),
            round_wins: checkpoint.round_wins,
            log: checkpoint.log,
            reveal: checkpoint.reveal,
            phase: checkpoint.phase,
            round_result: checkpoint.round_result,
            epoch: checkpoint.epoch,
            next_card_id: checkpoint.next_card_id,
            rng: DuelRng::from_state(&checkpoint.rng),
        })
    }
}

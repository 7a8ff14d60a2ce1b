//! The duel engine: deck, selection, piles, and the round state machine.
//!
//! ## State machine
//!
//! `Selecting` → (`begin_round`) → `RoundInProgress` → (`resolve_round`)
//! → `Selecting` while the deck can cover another bot draw, `Terminal`
//! otherwise. `Terminal` accepts only `reset`.
//!
//! Illegal operations — a third selection, an unknown card id, playing
//! while a round is locked or after the game ended — are silent no-ops,
//! never errors. They are defined states of a tolerant, UI-driven game.
//!
//! ## Scheduling
//!
//! The round is split into `begin_round` (locks the selection, returns
//! a [`RoundTicket`]) and `resolve_round` (draws for the bot and
//! scores). A view layer that wants a reveal animation holds the
//! ticket across its delay; `play_round` does both synchronously.
//! Tickets carry the game epoch: `reset` bumps it, so a ticket issued
//! before a reset can never mutate the game dealt after it.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::card::{Card, CardId};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::{DuelRng, DuelRngState, RandomSource};
use crate::core::seat::{Seat, SeatMap};
use crate::engine::round::{
    DuelResult, RoundEntry, RoundOutcome, RoundReveal, INSUFFICIENT_DECK_TEXT,
    ROUND_IN_PROGRESS_TEXT,
};
use crate::engine::state::{Phase, TableView};
use crate::zones::ledger::{CardLedger, Zone};

/// Proof that a round was locked, required to resolve it.
///
/// Carries the epoch of the game it was issued for; a ticket that
/// outlives a reset resolves to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a locked round stays locked until the ticket is resolved"]
pub struct RoundTicket {
    pub(crate) epoch: u64,
}

/// The duel engine.
///
/// Owns the complete game state and mutates it only through the
/// operations below. Generic over its randomness source so tests can
/// script exact shuffles and draws; real games use [`DuelRng`].
///
/// ```
/// use sum_duel::engine::DuelEngine;
///
/// let mut engine = DuelEngine::new(42);
/// let first = engine.view().deck[0];
/// let second = engine.view().deck[1];
///
/// engine.select_card(first.id);
/// engine.select_card(second.id);
/// let outcome = engine.play_round().expect("two cards staged, deck full");
///
/// assert_eq!(engine.view().deck.len(), 16);
/// println!("{outcome}");
/// ```
pub struct DuelEngine<R: RandomSource = DuelRng> {
    pub(crate) config: GameConfig,
    pub(crate) cards: FxHashMap<CardId, Card>,
    pub(crate) ledger: CardLedger,
    /// Deck in display order; selection returns cards to the end.
    pub(crate) deck: Vec<CardId>,
    pub(crate) selection: SmallVec<[CardId; 2]>,
    pub(crate) piles: SeatMap<Vec<CardId>>,
    pub(crate) round_wins: SeatMap<u32>,
    pub(crate) log: Vector<RoundEntry>,
    pub(crate) reveal: Option<RoundReveal>,
    pub(crate) phase: Phase,
    pub(crate) round_result: String,
    pub(crate) epoch: u64,
    pub(crate) next_card_id: u32,
    pub(crate) rng: R,
}

impl DuelEngine<DuelRng> {
    /// Create a standard 20-card duel from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(GameConfig::default(), DuelRng::new(seed))
    }

    /// Create a duel with a custom configuration.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, DuelRng::new(seed)))
    }

    /// Current RNG position, as stored in checkpoints.
    #[must_use]
    pub fn rng_state(&self) -> DuelRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> DuelEngine<R> {
    /// Create a duel with an injected randomness source.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    fn from_parts(config: GameConfig, rng: R) -> Self {
        let mut engine = Self {
            config,
            cards: FxHashMap::default(),
            ledger: CardLedger::new(),
            deck: Vec::new(),
            selection: SmallVec::new(),
            piles: SeatMap::default(),
            round_wins: SeatMap::default(),
            log: Vector::new(),
            reveal: None,
            phase: Phase::Selecting,
            round_result: String::new(),
            epoch: 0,
            next_card_id: 0,
            rng,
        };
        engine.deal();
        engine
    }

    /// Deal a fresh shuffled deck with fresh card identities.
    fn deal(&mut self) {
        let mut deck = Vec::with_capacity(self.config.deck_size());
        for _ in 0..self.config.copies {
            for value in self.config.min_value..=self.config.max_value {
                let id = CardId::new(self.next_card_id);
                self.next_card_id += 1;
                self.cards.insert(id, Card::new(id, value));
                self.ledger.register(id, Zone::Deck);
                deck.push(id);
            }
        }
        self.rng.shuffle(&mut deck);
        self.deck = deck;
        debug!(cards = self.deck.len(), "dealt fresh deck");
    }

    // === Operations ===

    /// Toggle a card in or out of the selection.
    ///
    /// Returns `true` if anything changed. No-ops when the phase is not
    /// `Selecting`, the id is unknown or already won, or a third card
    /// would be staged.
    pub fn select_card(&mut self, id: CardId) -> bool {
        if !self.phase.accepts_selection() {
            return false;
        }

        if let Some(pos) = self.selection.iter().position(|&c| c == id) {
            self.selection.remove(pos);
            self.deck.push(id);
            self.ledger.move_to(id, Zone::Deck);
            trace!(card = %id, "deselected");
            return true;
        }

        if self.selection.len() >= self.config.round_size {
            return false;
        }

        match self.deck.iter().position(|&c| c == id) {
            Some(pos) => {
                self.deck.remove(pos);
                self.selection.push(id);
                self.ledger.move_to(id, Zone::Selection);
                trace!(card = %id, staged = self.selection.len(), "selected");
                true
            }
            None => false,
        }
    }

    /// Lock the selection and start a round.
    ///
    /// Returns a ticket for `resolve_round`, or `None` if the selection
    /// is not full, a round is already locked, or the game has ended.
    /// If the deck cannot cover the bot's draw the game ends here:
    /// phase becomes `Terminal` and deck, selection, and piles are left
    /// untouched.
    pub fn begin_round(&mut self) -> Option<RoundTicket> {
        if self.phase != Phase::Selecting || self.selection.len() != self.config.round_size {
            return None;
        }

        if self.deck.len() < self.config.round_size {
            self.round_result = INSUFFICIENT_DECK_TEXT.to_string();
            self.phase = Phase::Terminal;
            debug!("deck cannot cover the bot's draw; game over");
            return None;
        }

        self.phase = Phase::RoundInProgress;
        self.round_result = ROUND_IN_PROGRESS_TEXT.to_string();
        trace!(epoch = self.epoch, "round locked");
        Some(RoundTicket { epoch: self.epoch })
    }

    /// Resolve a locked round: draw for the bot, score, award cards.
    ///
    /// No-op (`None`) if the ticket is stale (issued before a reset) or
    /// no round is locked — each locked selection resolves at most
    /// once.
    pub fn resolve_round(&mut self, ticket: RoundTicket) -> Option<RoundOutcome> {
        if ticket.epoch != self.epoch || self.phase != Phase::RoundInProgress {
            return None;
        }

        // Uniform draw without replacement: every unordered pair of the
        // remaining deck is equally likely.
        let mut bot_draw: SmallVec<[CardId; 2]> = SmallVec::new();
        for _ in 0..self.config.round_size {
            let idx = self.rng.index(self.deck.len());
            bot_draw.push(self.deck.remove(idx));
        }

        let player_cards: SmallVec<[Card; 2]> =
            self.selection.iter().map(|id| self.cards[id]).collect();
        let bot_cards: SmallVec<[Card; 2]> =
            bot_draw.iter().map(|id| self.cards[id]).collect();

        let player_sum = player_cards.iter().map(|c| u32::from(c.value)).sum();
        let bot_sum = bot_cards.iter().map(|c| u32::from(c.value)).sum();
        let outcome = RoundOutcome::from_sums(player_sum, bot_sum);

        match outcome.winner() {
            Some(winner) => {
                for &id in self.selection.iter().chain(bot_draw.iter()) {
                    self.ledger.move_to(id, Zone::WonBy(winner));
                }
                self.piles[winner].extend(self.selection.iter().copied());
                self.piles[winner].extend(bot_draw.iter().copied());
                self.round_wins[winner] += 1;
            }
            None => {
                // tie: each side keeps its own cards
                for &id in &self.selection {
                    self.ledger.move_to(id, Zone::WonBy(Seat::Player));
                }
                for &id in &bot_draw {
                    self.ledger.move_to(id, Zone::WonBy(Seat::Bot));
                }
                self.piles[Seat::Player].extend(self.selection.iter().copied());
                self.piles[Seat::Bot].extend(bot_draw.iter().copied());
            }
        }

        let text = outcome.to_string();
        self.log
            .push_front(RoundEntry::new(self.log.len() as u32 + 1, text.clone()));
        self.round_result = text;
        self.reveal = Some(RoundReveal {
            player: player_cards,
            bot: bot_cards,
        });
        self.selection.clear();
        self.phase = if self.deck.len() < self.config.round_size {
            Phase::Terminal
        } else {
            Phase::Selecting
        };

        debug!(player_sum, bot_sum, phase = ?self.phase, "round resolved");
        Some(outcome)
    }

    /// Lock and resolve in one call.
    ///
    /// A view layer that wants a reveal delay between lock and
    /// resolution calls `begin_round` and `resolve_round` around its
    /// own timer instead.
    pub fn play_round(&mut self) -> Option<RoundOutcome> {
        let ticket = self.begin_round()?;
        self.resolve_round(ticket)
    }

    /// Replace the game wholesale: fresh identities, fresh shuffle,
    /// everything else cleared.
    ///
    /// Bumps the epoch, so tickets issued before the reset can no
    /// longer resolve.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.cards.clear();
        self.ledger.clear();
        self.deck.clear();
        self.selection.clear();
        self.piles = SeatMap::default();
        self.round_wins = SeatMap::default();
        self.log = Vector::new();
        self.reveal = None;
        self.round_result.clear();
        self.phase = Phase::Selecting;
        self.deal();
        debug!(epoch = self.epoch, "game reset");
    }

    // === Derived queries ===

    /// Sum of the staged cards' values; 0 when nothing is staged.
    #[must_use]
    pub fn selection_sum(&self) -> u32 {
        self.selection
            .iter()
            .map(|id| u32::from(self.cards[id].value))
            .sum()
    }

    /// Verdict of a finished game; `None` while play continues.
    #[must_use]
    pub fn champion(&self) -> Option<DuelResult> {
        if self.phase != Phase::Terminal {
            return None;
        }
        Some(
            match self.round_wins[Seat::Player].cmp(&self.round_wins[Seat::Bot]) {
                std::cmp::Ordering::Greater => DuelResult::Champion(Seat::Player),
                std::cmp::Ordering::Less => DuelResult::Champion(Seat::Bot),
                std::cmp::Ordering::Equal => DuelResult::Draw,
            },
        )
    }

    /// Immutable snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView {
            phase: self.phase,
            deck: self.deck.iter().map(|id| self.cards[id]).collect(),
            selection: self.selection.iter().map(|id| self.cards[id]).collect(),
            selection_sum: self.selection_sum(),
            pile_sizes: self.piles.map(Vec::len),
            round_wins: self.round_wins.clone(),
            reveal: self.reveal.clone(),
            log: self.log.clone(),
            round_result: self.round_result.clone(),
        }
    }

    // === Accessors ===

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Ids of the staged cards.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Cards a seat has won.
    #[must_use]
    pub fn pile_size(&self, seat: Seat) -> usize {
        self.piles[seat].len()
    }

    /// Rounds a seat has won.
    #[must_use]
    pub fn round_wins(&self, seat: Seat) -> u32 {
        self.round_wins[seat]
    }

    /// The round log, most recent first.
    #[must_use]
    pub fn log(&self) -> &Vector<RoundEntry> {
        &self.log
    }

    /// Cards fought in the most recent round.
    #[must_use]
    pub fn reveal(&self) -> Option<&RoundReveal> {
        self.reveal.as_ref()
    }

    /// Result text of the most recent round (empty before the first).
    #[must_use]
    pub fn round_result(&self) -> &str {
        &self.round_result
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.cards.get(&id).copied()
    }

    /// The conservation record: every card's current zone.
    #[must_use]
    pub fn ledger(&self) -> &CardLedger {
        &self.ledger
    }
}

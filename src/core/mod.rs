//! Core types: cards, seats, RNG, configuration.

pub mod card;
pub mod config;
pub mod rng;
pub mod seat;

pub use card::{Card, CardId};
pub use config::{ConfigError, GameConfig};
pub use rng::{DuelRng, DuelRngState, RandomSource, SequenceRandom};
pub use seat::{Seat, SeatMap};

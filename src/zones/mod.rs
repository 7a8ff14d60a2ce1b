//! Zone tracking for card locations.

pub mod ledger;

pub use ledger::{CardLedger, Zone};

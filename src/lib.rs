//! # Match Pool Board
//!
//! Betting pool page for a single match: two sides and a draw, bet totals,
//! the house commission and the prize pool left for winners.
//!
//! The pool arithmetic in [`pool`] is pure and total. Everything else loads,
//! edits, caches or exports the [`MatchData`] record the arithmetic runs on.

pub mod admin;
pub mod browser;
pub mod cache;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod format;
pub mod history;
pub mod match_data;
pub mod pool;
pub mod sources;

pub use admin::{AdminField, AdminForm};
pub use errors::{AdminError, SourceError};
pub use match_data::{MatchConfig, MatchData};
pub use pool::{calculate_payout, compute_pools, BetTotals, Outcome, PoolSummary};
pub use sources::{DataSource, Resolution};

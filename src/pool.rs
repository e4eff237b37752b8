//! Pool aggregation and proportional payouts.
//!
//! Everything here is a total function: amounts that cannot be read as
//! numbers count as zero and no input makes these calls fail.

use serde_json::Value;

use crate::config::HOUSE_RATE;

/// One of the three outcomes a bettor can back
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    A,
    B,
    Draw,
}

impl Outcome {
    pub fn all() -> &'static [Outcome] {
        &[Outcome::A, Outcome::B, Outcome::Draw]
    }
}

/// Amount staked on each outcome
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BetTotals {
    pub on_a: f64,
    pub on_b: f64,
    pub on_draw: f64,
}

impl BetTotals {
    pub fn new(on_a: f64, on_b: f64, on_draw: f64) -> Self {
        Self { on_a, on_b, on_draw }
    }

    /// Build totals from loosely typed document values; anything missing or
    /// non-numeric counts as zero.
    pub fn from_values(a: Option<&Value>, b: Option<&Value>, draw: Option<&Value>) -> Self {
        let coerce = |v: Option<&Value>| v.map(coerce_amount).unwrap_or(0.0);
        Self::new(coerce(a), coerce(b), coerce(draw))
    }

    pub fn on(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::A => self.on_a,
            Outcome::B => self.on_b,
            Outcome::Draw => self.on_draw,
        }
    }
}

/// Pool figures derived from a set of totals. Always recomputed, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoolSummary {
    pub total_pool: f64,
    pub house_cut: f64,
    pub prize_pool: f64,
}

/// Sum the totals and split off the house commission.
///
/// Only the house cut is floored; a fractional total leaves its remainder in
/// the prize pool.
pub fn compute_pools(totals: &BetTotals) -> PoolSummary {
    let total_pool = totals.on_a + totals.on_b + totals.on_draw;
    let house_cut = (total_pool * HOUSE_RATE).floor();
    PoolSummary {
        total_pool,
        house_cut,
        prize_pool: total_pool - house_cut,
    }
}

/// Share of `prize_pool` owed to a stake of `player_bet` on the winning
/// outcome, given `total_on_winner` staked on that outcome by everyone.
///
/// Returns 0 for a non-positive or NaN stake, and 0 when nothing was staked
/// on the winner.
pub fn calculate_payout(player_bet: f64, total_on_winner: f64, prize_pool: f64) -> f64 {
    if player_bet.is_nan() || player_bet <= 0.0 {
        return 0.0;
    }
    if total_on_winner.is_nan() || total_on_winner <= 0.0 {
        return 0.0;
    }
    (player_bet / total_on_winner) * prize_pool
}

/// Payout for a hypothetical stake if `outcome` wins with the current totals.
pub fn sample_payout(totals: &BetTotals, stake: f64, outcome: Outcome) -> f64 {
    let summary = compute_pools(totals);
    calculate_payout(stake, totals.on(outcome), summary.prize_pool)
}

/// Read a typed-in amount. Surrounding whitespace and `,` digit grouping are
/// ignored; empty, non-numeric and non-finite input yields `None` so each
/// call site picks its own fallback. Negative amounts pass through.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a document value to an amount: numbers as-is, numeric strings
/// through [`parse_amount`], everything else zero.
pub fn coerce_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_amount(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

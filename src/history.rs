//! Past results table.

use crate::format::format_amount;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub title: String,
    pub winner: Option<String>,
    pub prize: Option<f64>,
}

impl HistoryEntry {
    pub fn winner_cell(&self) -> String {
        self.winner.clone().unwrap_or_default()
    }

    pub fn prize_cell(&self) -> String {
        self.prize
            .map(|p| format!("{} gold", format_amount(p)))
            .unwrap_or_default()
    }
}

/// Shown until the first result is recorded
pub fn placeholder_history() -> Vec<HistoryEntry> {
    vec![HistoryEntry { title: "—".into(), winner: None, prize: None }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        let entry = HistoryEntry {
            title: "Lions vs Tigers".into(),
            winner: Some("Lions".into()),
            prize: Some(42_500.0),
        };
        assert_eq!(entry.winner_cell(), "Lions");
        assert_eq!(entry.prize_cell(), "42,500 gold");
    }

    #[test]
    fn test_placeholder_has_empty_cells() {
        let rows = placeholder_history();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].winner_cell(), "");
        assert_eq!(rows[0].prize_cell(), "");
    }
}

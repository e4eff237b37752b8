//! Admin editor: form values in, updated match record out.

use crate::cache::{write_cached, CacheStore};
use crate::errors::{AdminError, SourceError};
use crate::match_data::{format_match_time, parse_match_time, MatchData};
use crate::pool::{parse_amount, BetTotals};

/// Raw text of every admin form field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminForm {
    pub team_a: String,
    pub team_b: String,
    pub match_time: String,
    pub bets_a: String,
    pub bets_b: String,
    pub bets_draw: String,
    pub logo_a: String,
    pub logo_b: String,
    pub logo_draw: String,
}

/// Field selector for form updates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminField {
    TeamA,
    TeamB,
    MatchTime,
    BetsA,
    BetsB,
    BetsDraw,
    LogoA,
    LogoB,
    LogoDraw,
}

impl AdminField {
    pub fn all() -> &'static [(Self, &'static str)] {
        &[
            (Self::TeamA, "Team A"),
            (Self::TeamB, "Team B"),
            (Self::MatchTime, "Match Time"),
            (Self::BetsA, "Bets on Team A"),
            (Self::BetsB, "Bets on Team B"),
            (Self::BetsDraw, "Bets on Draw"),
            (Self::LogoA, "Logo A"),
            (Self::LogoB, "Logo B"),
            (Self::LogoDraw, "Draw Logo"),
        ]
    }
}

impl AdminForm {
    /// Prefill the form from the current record. The match time uses the
    /// `datetime-local` input format with seconds.
    pub fn from_data(data: &MatchData) -> Self {
        Self {
            team_a: data.team_a.clone(),
            team_b: data.team_b.clone(),
            match_time: data.match_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            bets_a: data.bets.on_a.to_string(),
            bets_b: data.bets.on_b.to_string(),
            bets_draw: data.bets.on_draw.to_string(),
            logo_a: data.logo_a.clone(),
            logo_b: data.logo_b.clone(),
            logo_draw: data.logo_draw.clone(),
        }
    }

    pub fn get(&self, field: AdminField) -> &str {
        match field {
            AdminField::TeamA => &self.team_a,
            AdminField::TeamB => &self.team_b,
            AdminField::MatchTime => &self.match_time,
            AdminField::BetsA => &self.bets_a,
            AdminField::BetsB => &self.bets_b,
            AdminField::BetsDraw => &self.bets_draw,
            AdminField::LogoA => &self.logo_a,
            AdminField::LogoB => &self.logo_b,
            AdminField::LogoDraw => &self.logo_draw,
        }
    }

    pub fn set(&mut self, field: AdminField, value: String) {
        let slot = match field {
            AdminField::TeamA => &mut self.team_a,
            AdminField::TeamB => &mut self.team_b,
            AdminField::MatchTime => &mut self.match_time,
            AdminField::BetsA => &mut self.bets_a,
            AdminField::BetsB => &mut self.bets_b,
            AdminField::BetsDraw => &mut self.bets_draw,
            AdminField::LogoA => &mut self.logo_a,
            AdminField::LogoB => &mut self.logo_b,
            AdminField::LogoDraw => &mut self.logo_draw,
        };
        *slot = value;
    }

    /// Validate the form and produce the updated record.
    ///
    /// Empty amounts count as zero; non-numeric or negative amounts are
    /// rejected. Empty logo fields keep the current logo.
    pub fn apply(&self, data: MatchData) -> Result<MatchData, AdminError> {
        let team_a = required("Team A", &self.team_a)?;
        let team_b = required("Team B", &self.team_b)?;
        let match_time = parse_match_time(&self.match_time)
            .ok_or_else(|| AdminError::InvalidMatchTime(self.match_time.clone()))?;
        let bets = BetTotals::new(
            amount("Bets on Team A", &self.bets_a)?,
            amount("Bets on Team B", &self.bets_b)?,
            amount("Bets on Draw", &self.bets_draw)?,
        );
        let logo = |raw: &str, prior: String| {
            let raw = raw.trim();
            if raw.is_empty() { prior } else { raw.to_string() }
        };

        Ok(MatchData {
            team_a,
            team_b,
            match_time,
            bets,
            logo_a: logo(&self.logo_a, data.logo_a),
            logo_b: logo(&self.logo_b, data.logo_b),
            logo_draw: logo(&self.logo_draw, data.logo_draw),
        })
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, AdminError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AdminError::EmptyField(field));
    }
    Ok(value.to_string())
}

fn amount(field: &'static str, raw: &str) -> Result<f64, AdminError> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    let value = parse_amount(raw).ok_or_else(|| AdminError::InvalidAmount {
        field,
        raw: raw.to_string(),
    })?;
    if value < 0.0 {
        return Err(AdminError::NegativeAmount { field });
    }
    Ok(value)
}

/// Persist the record to the local cache
pub fn save_to_cache<S: CacheStore + ?Sized>(store: &S, data: &MatchData) -> Result<(), SourceError> {
    write_cached(store, data)
}

/// One-line summary shown after a save or export
pub fn describe(data: &MatchData) -> String {
    let summary = data.summary();
    format!(
        "{} vs {} at {}: pool {} (prize {})",
        data.team_a,
        data.team_b,
        format_match_time(&data.match_time),
        summary.total_pool,
        summary.prize_pool
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{read_cached, MemoryStore};
    use chrono::{TimeZone, Utc};

    fn data() -> MatchData {
        MatchData::defaults_at(Utc.with_ymd_and_hms(2026, 10, 16, 8, 15, 0).unwrap())
    }

    #[test]
    fn test_prefilled_form_applies_unchanged() {
        let original = data();
        let form = AdminForm::from_data(&original);
        assert_eq!(form.match_time, "2026-10-17T08:15:00");
        assert_eq!(form.apply(original.clone()), Ok(original));
    }

    #[test]
    fn test_untouched_match_time_keeps_seconds() {
        let mut original = data();
        original.match_time = Utc.with_ymd_and_hms(2026, 10, 18, 19, 45, 30).unwrap();
        let form = AdminForm::from_data(&original);

        assert_eq!(form.match_time, "2026-10-18T19:45:30");
        assert_eq!(form.apply(original.clone()).unwrap().match_time, original.match_time);
    }

    #[test]
    fn test_edits_flow_into_record() {
        let mut form = AdminForm::from_data(&data());
        form.set(AdminField::TeamA, " Lions ".into());
        form.set(AdminField::BetsA, "30,000".into());
        form.set(AdminField::BetsB, "15000".into());
        form.set(AdminField::BetsDraw, "".into());
        form.set(AdminField::LogoDraw, "".into());

        let updated = form.apply(data()).unwrap();
        assert_eq!(updated.team_a, "Lions");
        assert_eq!(updated.bets, BetTotals::new(30_000.0, 15_000.0, 0.0));
        assert_eq!(updated.logo_draw, "assets/balance.png");
        assert_eq!(form.get(AdminField::BetsA), "30,000");
    }

    #[test]
    fn test_rejects_bad_amounts() {
        let mut form = AdminForm::from_data(&data());
        form.set(AdminField::BetsB, "a lot".into());
        assert_eq!(
            form.apply(data()),
            Err(AdminError::InvalidAmount { field: "Bets on Team B", raw: "a lot".into() })
        );

        form.set(AdminField::BetsB, "-5".into());
        assert_eq!(form.apply(data()), Err(AdminError::NegativeAmount { field: "Bets on Team B" }));
    }

    #[test]
    fn test_rejects_empty_team_and_bad_time() {
        let mut form = AdminForm::from_data(&data());
        form.set(AdminField::TeamB, "  ".into());
        assert_eq!(form.apply(data()), Err(AdminError::EmptyField("Team B")));

        let mut form = AdminForm::from_data(&data());
        form.set(AdminField::MatchTime, "soon".into());
        assert_eq!(form.apply(data()), Err(AdminError::InvalidMatchTime("soon".into())));
    }

    #[test]
    fn test_save_to_cache() {
        let store = MemoryStore::new();
        let mut form = AdminForm::from_data(&data());
        form.set(AdminField::BetsDraw, "120".into());
        let updated = form.apply(data()).unwrap();

        save_to_cache(&store, &updated).unwrap();
        assert_eq!(read_cached(&store, &data()), Some(updated));
    }

    #[test]
    fn test_describe() {
        let mut d = data();
        d.bets = BetTotals::new(600.0, 300.0, 100.0);
        assert_eq!(
            describe(&d),
            "Team A vs Team B at 2026-10-17T08:15:00.000Z: pool 1000 (prize 850)"
        );
    }
}

//! The match record every layer passes around, and its document shape.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{
    DEFAULT_DRAW_LOGO, DEFAULT_KICKOFF_DELAY_HOURS, DEFAULT_TEAM_A, DEFAULT_TEAM_B,
    DEFAULT_TEAM_LOGO,
};
use crate::pool::{compute_pools, BetTotals, Outcome, PoolSummary};

/// Current match figures. Loaders and the admin editor take one of these and
/// hand back the updated value; nothing holds it globally.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchData {
    pub team_a: String,
    pub team_b: String,
    pub match_time: DateTime<Utc>,
    pub bets: BetTotals,
    pub logo_a: String,
    pub logo_b: String,
    pub logo_draw: String,
}

impl MatchData {
    /// Built-in defaults with kickoff a day after `now`.
    pub fn defaults_at(now: DateTime<Utc>) -> Self {
        Self {
            team_a: DEFAULT_TEAM_A.to_string(),
            team_b: DEFAULT_TEAM_B.to_string(),
            match_time: now + Duration::hours(DEFAULT_KICKOFF_DELAY_HOURS),
            bets: BetTotals::default(),
            logo_a: DEFAULT_TEAM_LOGO.to_string(),
            logo_b: DEFAULT_TEAM_LOGO.to_string(),
            logo_draw: DEFAULT_DRAW_LOGO.to_string(),
        }
    }

    pub fn summary(&self) -> PoolSummary {
        compute_pools(&self.bets)
    }

    pub fn total_on(&self, outcome: Outcome) -> f64 {
        self.bets.on(outcome)
    }

    pub fn label(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::A => &self.team_a,
            Outcome::B => &self.team_b,
            Outcome::Draw => "Draw",
        }
    }

    /// Merge a document into this record. Text fields only replace the prior
    /// value when present and non-empty; an unreadable match time keeps the
    /// prior one. Bet totals are taken from the document, missing or
    /// non-numeric ones as zero.
    pub fn apply_config(self, cfg: &MatchConfig) -> Self {
        let pick = |new: &Option<String>, prior: String| match new {
            Some(v) if !v.trim().is_empty() => v.clone(),
            _ => prior,
        };
        let match_time = cfg
            .match_time
            .as_deref()
            .and_then(parse_match_time)
            .unwrap_or(self.match_time);

        Self {
            team_a: pick(&cfg.team_a, self.team_a),
            team_b: pick(&cfg.team_b, self.team_b),
            match_time,
            bets: BetTotals::from_values(
                cfg.bets_a.as_ref(),
                cfg.bets_b.as_ref(),
                cfg.bets_draw.as_ref(),
            ),
            logo_a: pick(&cfg.logo_a, self.logo_a),
            logo_b: pick(&cfg.logo_b, self.logo_b),
            logo_draw: pick(&cfg.logo_draw, self.logo_draw),
        }
    }

    pub fn to_config(&self) -> MatchConfig {
        MatchConfig {
            team_a: Some(self.team_a.clone()),
            team_b: Some(self.team_b.clone()),
            match_time: Some(format_match_time(&self.match_time)),
            bets_a: Some(amount_value(self.bets.on_a)),
            bets_b: Some(amount_value(self.bets.on_b)),
            bets_draw: Some(amount_value(self.bets.on_draw)),
            logo_a: Some(self.logo_a.clone()),
            logo_b: Some(self.logo_b.clone()),
            logo_draw: Some(self.logo_draw.clone()),
        }
    }

    /// Pretty-printed match document, ready to commit back next to the page.
    pub fn export_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_config())
    }
}

/// Match document as embedded in the page, served as `match.json`, or
/// exported by the admin view. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_time: Option<String>,
    // Numbers or numeric strings, coerced on apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bets_a: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bets_b: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bets_draw: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_draw: Option<String>,
}

impl MatchConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Accepts RFC 3339 timestamps and `datetime-local` style values
/// (`2026-10-17T18:30`, optionally with seconds), the latter read as UTC.
pub fn parse_match_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn format_match_time(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// Whole amounts go out as integers so exported documents read like hand-written ones
fn amount_value(amount: f64) -> Value {
    if amount.fract() == 0.0 && amount.abs() < 9_007_199_254_740_992.0 {
        Value::from(amount as i64)
    } else {
        Value::from(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let data = MatchData::defaults_at(now());
        assert_eq!(data.team_a, "Team A");
        assert_eq!(data.team_b, "Team B");
        assert_eq!(data.match_time, Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap());
        assert_eq!(data.logo_draw, "assets/balance.png");
        assert_eq!(data.summary().total_pool, 0.0);
    }

    #[test]
    fn test_apply_config_overrides_present_fields() {
        let cfg = MatchConfig::from_json(
            r#"{"teamA":"Lions","teamB":"","matchTime":"2026-11-01T18:00:00.000Z",
                "betsA":30000,"betsB":"15000","betsDraw":5000,"logoA":"assets/lions.png"}"#,
        )
        .unwrap();
        let data = MatchData::defaults_at(now()).apply_config(&cfg);

        assert_eq!(data.team_a, "Lions");
        assert_eq!(data.team_b, "Team B");
        assert_eq!(data.match_time, Utc.with_ymd_and_hms(2026, 11, 1, 18, 0, 0).unwrap());
        assert_eq!(data.bets, BetTotals::new(30_000.0, 15_000.0, 5_000.0));
        assert_eq!(data.logo_a, "assets/lions.png");
        assert_eq!(data.logo_b, "assets/logo.png");
    }

    #[test]
    fn test_apply_config_zeroes_missing_bets() {
        let mut prior = MatchData::defaults_at(now());
        prior.bets = BetTotals::new(1.0, 2.0, 3.0);
        let cfg = MatchConfig::from_json(r#"{"betsB":10,"betsDraw":null,"betsA":"n/a"}"#).unwrap();

        let data = prior.apply_config(&cfg);
        assert_eq!(data.bets, BetTotals::new(0.0, 10.0, 0.0));
        assert_eq!(data.summary().total_pool, 10.0);
    }

    #[test]
    fn test_bad_match_time_keeps_prior() {
        let prior = MatchData::defaults_at(now());
        let cfg = MatchConfig { match_time: Some("next tuesday".into()), ..Default::default() };
        assert_eq!(prior.clone().apply_config(&cfg).match_time, prior.match_time);
    }

    #[test]
    fn test_parse_match_time_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 17, 18, 30, 0).unwrap();
        assert_eq!(parse_match_time("2026-10-17T18:30"), Some(expected));
        assert_eq!(parse_match_time("2026-10-17T18:30:00"), Some(expected));
        assert_eq!(parse_match_time("2026-10-17T20:30:00+02:00"), Some(expected));
        assert_eq!(parse_match_time(""), None);
    }

    #[test]
    fn test_export_document_keys() {
        let mut data = MatchData::defaults_at(now());
        data.bets = BetTotals::new(30_000.0, 15_000.0, 2.5);
        let doc = data.export_document().unwrap();
        let value: Value = serde_json::from_str(&doc).unwrap();

        for key in ["teamA", "teamB", "matchTime", "betsA", "betsB", "betsDraw", "logoA", "logoB"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["betsA"], Value::from(30_000));
        assert_eq!(value["betsDraw"], Value::from(2.5));
        assert_eq!(value["matchTime"], "2026-10-17T12:00:00.000Z");
    }

    #[test]
    fn test_exported_document_loads_back() {
        let mut data = MatchData::defaults_at(now());
        data.team_a = "Lions".into();
        data.bets = BetTotals::new(10.0, 20.0, 30.0);
        let cfg = MatchConfig::from_json(&data.export_document().unwrap()).unwrap();

        let reloaded = MatchData::defaults_at(now() + Duration::days(3)).apply_config(&cfg);
        assert_eq!(reloaded, data);
    }
}

//! Local cache of the match record, one storage key per field.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::SourceError;
use crate::match_data::{format_match_time, parse_match_time, MatchData};
use crate::pool::parse_amount;

pub const KEY_TEAM_A: &str = "teamA";
pub const KEY_TEAM_B: &str = "teamB";
pub const KEY_MATCH_TIME: &str = "matchTime";
pub const KEY_BETS_A: &str = "betsA";
pub const KEY_BETS_B: &str = "betsB";
pub const KEY_BETS_DRAW: &str = "betsDraw";
pub const KEY_LOGO_A: &str = "logoA";
pub const KEY_LOGO_B: &str = "logoB";
pub const KEY_LOGO_DRAW: &str = "logoDraw";

/// String key/value store backing the cache
pub trait CacheStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SourceError>;
}

/// `window.localStorage`. When storage is disabled every read misses and
/// every write reports [`SourceError::Storage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CacheStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SourceError> {
        let storage = Self::storage()
            .ok_or_else(|| SourceError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SourceError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store, used when nothing should outlive the page
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SourceError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Rebuild the match record from the cache on top of `prior`.
///
/// Returns `None` when nothing was ever cached (no `teamA` entry). Unreadable
/// or missing fields keep the value from `prior`.
pub fn read_cached<S: CacheStore + ?Sized>(store: &S, prior: &MatchData) -> Option<MatchData> {
    let team_a = store.get(KEY_TEAM_A).filter(|v| !v.is_empty())?;
    let text = |key: &str, fallback: &String| {
        store.get(key).filter(|v| !v.is_empty()).unwrap_or_else(|| fallback.clone())
    };
    let amount = |key: &str, fallback: f64| {
        store.get(key).and_then(|v| parse_amount(&v)).unwrap_or(fallback)
    };

    let mut data = prior.clone();
    data.team_a = team_a;
    data.team_b = text(KEY_TEAM_B, &prior.team_b);
    data.match_time = store
        .get(KEY_MATCH_TIME)
        .and_then(|v| parse_match_time(&v))
        .unwrap_or(prior.match_time);
    data.bets.on_a = amount(KEY_BETS_A, prior.bets.on_a);
    data.bets.on_b = amount(KEY_BETS_B, prior.bets.on_b);
    data.bets.on_draw = amount(KEY_BETS_DRAW, prior.bets.on_draw);
    data.logo_a = text(KEY_LOGO_A, &prior.logo_a);
    data.logo_b = text(KEY_LOGO_B, &prior.logo_b);
    data.logo_draw = text(KEY_LOGO_DRAW, &prior.logo_draw);
    Some(data)
}

/// Write every field of `data`. Stops at the first failed write.
pub fn write_cached<S: CacheStore + ?Sized>(store: &S, data: &MatchData) -> Result<(), SourceError> {
    store.set(KEY_TEAM_A, &data.team_a)?;
    store.set(KEY_TEAM_B, &data.team_b)?;
    store.set(KEY_MATCH_TIME, &format_match_time(&data.match_time))?;
    store.set(KEY_BETS_A, &data.bets.on_a.to_string())?;
    store.set(KEY_BETS_B, &data.bets.on_b.to_string())?;
    store.set(KEY_BETS_DRAW, &data.bets.on_draw.to_string())?;
    store.set(KEY_LOGO_A, &data.logo_a)?;
    store.set(KEY_LOGO_B, &data.logo_b)?;
    store.set(KEY_LOGO_DRAW, &data.logo_draw)?;
    Ok(())
}

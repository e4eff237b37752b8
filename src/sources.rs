//! Ordered data sources for the match record.
//!
//! Sources are tried in [`CHAIN`] order and the first one that supplies a
//! record wins. Failures along the way are kept so the page can warn about
//! them without refusing to render.

use std::fmt;
use std::future::Future;

use crate::cache::{read_cached, write_cached, CacheStore};
use crate::errors::SourceError;
use crate::match_data::{MatchConfig, MatchData};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Document the page generator embedded in the HTML
    Embedded,
    /// `match.json` served next to the page
    Remote,
    /// Browser storage written by the admin view or a previous remote load
    LocalCache,
    /// Built-in defaults
    Default,
}

pub const CHAIN: [DataSource; 4] = [
    DataSource::Embedded,
    DataSource::Remote,
    DataSource::LocalCache,
    DataSource::Default,
];

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Embedded => "embedded config",
            DataSource::Remote => "remote document",
            DataSource::LocalCache => "local cache",
            DataSource::Default => "built-in defaults",
        };
        f.write_str(name)
    }
}

/// Outcome of walking the chain
#[derive(Debug)]
pub struct Resolution {
    pub data: MatchData,
    pub source: DataSource,
    pub failures: Vec<(DataSource, SourceError)>,
}

impl Resolution {
    /// One line per failed source, naming the source that was shown instead
    pub fn warnings(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|(from, err)| format!("{} unavailable: {} (showing {})", from, err, self.source))
            .collect()
    }
}

/// Walk [`CHAIN`] starting from `defaults`.
///
/// `embedded` is the raw embedded document, if the page carries one.
/// `fetch_remote` is only awaited when the embedded document is absent or
/// unreadable; it resolves to the response body, or `Ok(None)` when the
/// document does not exist. A remote document that loads is written through
/// to `cache`; a failed write is recorded but does not change the result.
pub async fn load<F, Fut, C>(
    defaults: MatchData,
    embedded: Option<&str>,
    fetch_remote: F,
    cache: &C,
) -> Resolution
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<String>, SourceError>>,
    C: CacheStore + ?Sized,
{
    let mut failures = Vec::new();
    let mut fetch_remote = Some(fetch_remote);
    let from_document = |raw: &str| -> Result<Option<MatchData>, SourceError> {
        let cfg = MatchConfig::from_json(raw)?;
        Ok(Some(defaults.clone().apply_config(&cfg)))
    };

    for source in CHAIN {
        let attempt = match source {
            DataSource::Embedded => embedded.map_or(Ok(None), from_document),
            DataSource::Remote => match fetch_remote.take() {
                Some(fetch) => match fetch().await {
                    Ok(Some(body)) => from_document(&body),
                    other => other.map(|_| None),
                },
                None => Ok(None),
            },
            DataSource::LocalCache => Ok(read_cached(cache, &defaults)),
            DataSource::Default => Ok(Some(defaults.clone())),
        };

        match attempt {
            Ok(Some(data)) => {
                if source == DataSource::Remote {
                    if let Err(e) = write_cached(cache, &data) {
                        failures.push((DataSource::LocalCache, e));
                    }
                }
                return Resolution { data, source, failures };
            }
            Ok(None) => {}
            Err(e) => failures.push((source, e)),
        }
    }

    // CHAIN ends with Default, which always supplies
    Resolution { data: defaults, source: DataSource::Default, failures }
}

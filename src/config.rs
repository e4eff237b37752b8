//! Fixed configuration for the pool board.
//!
//! Nothing here is editable from the admin view; change it and redeploy.

/// House commission retained from the pool before distribution (15%)
pub const HOUSE_RATE: f64 = 0.15;

/// Match document served next to the page, fetched with caching disabled
pub const REMOTE_DOCUMENT_PATH: &str = "match.json";

/// File name offered when the admin view exports the match document
pub const EXPORT_FILE_NAME: &str = "match.json";

/// Global the page generator embeds the match document under
pub const EMBEDDED_GLOBAL: &str = "INITIAL_MATCH_DATA";

pub const DEFAULT_TEAM_A: &str = "Team A";
pub const DEFAULT_TEAM_B: &str = "Team B";
pub const DEFAULT_TEAM_LOGO: &str = "assets/logo.png";
pub const DEFAULT_DRAW_LOGO: &str = "assets/balance.png";

/// Hours between page load and the default match time
pub const DEFAULT_KICKOFF_DELAY_HOURS: i64 = 24;

/// Countdown refresh interval (milliseconds)
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

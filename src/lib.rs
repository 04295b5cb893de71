//! ESPN Fantasy Football Playoff Report CLI Library
//!
//! Fetches playoff scheduling, seeding, and standings data for one or more
//! ESPN Fantasy Football leagues and prints a human-readable report for
//! manual inspection.
//!
//! ## Features
//!
//! - **League settings**: name, regular-season length, playoff team count,
//!   playoff matchup-period length, and seed tie-break rule
//! - **Box scores**: current-week matchups with playoff flags and scores
//! - **Standings**: teams ordered by seed with records and playoff odds
//! - **Private leagues**: cookie-based access via `ESPN_S2` / `ESPN_SWID`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_playoffs::{
//!     cli::types::{LeagueId, Season},
//!     commands::report::run_report,
//!     config::Config,
//!     espn::league::League,
//! };
//!
//! # async fn example() -> espn_playoffs::Result<()> {
//! let cfg = Config::resolve(Some(vec![LeagueId::new(123456)]))?;
//! let mut out = std::io::stdout();
//!
//! run_report(&mut out, &cfg, Season::default(), None, false, |id, season, creds| async move {
//!     League::connect(id, season, creds.as_ref(), false).await
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the league list (and credentials for private leagues) in the
//! environment or a local `.env` file:
//! ```bash
//! export ESPN_LEAGUE_IDS=123456,789012
//! export ESPN_S2=...      # optional, private leagues only
//! export ESPN_SWID=...    # optional, private leagues only
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod espn;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, Week};
pub use config::{Config, Credentials};
pub use error::{ReportError, Result};
pub use espn::league::{League, LeagueView};

pub const LEAGUE_IDS_ENV_VAR: &str = "ESPN_LEAGUE_IDS";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const SWID_ENV_VAR: &str = "ESPN_SWID";

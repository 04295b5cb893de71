//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::{LeagueId, Season, Week};

/// One-shot playoff report: fetch each configured league and print its
/// playoff scheduling, current-week box scores, and standings.
#[derive(Debug, Parser)]
#[clap(
    name = "espn-playoffs",
    about = "Print playoff scheduling, seeding, and standings for ESPN fantasy football leagues"
)]
pub struct PlayoffReport {
    /// League ID (repeatable) - overrides the `ESPN_LEAGUE_IDS` env var.
    #[clap(long, short)]
    pub league_id: Option<Vec<LeagueId>>,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Week for the box-score section (defaults to the league's current week).
    #[clap(long, short)]
    pub week: Option<Week>,

    /// Env file to load `ESPN_LEAGUE_IDS` / `ESPN_S2` / `ESPN_SWID` from (default: ./.env).
    #[clap(long)]
    pub env_file: Option<PathBuf>,

    /// Print request URL and headers for debugging.
    #[clap(long)]
    pub debug: bool,

    /// Print progress while fetching.
    #[clap(long)]
    pub verbose: bool,
}

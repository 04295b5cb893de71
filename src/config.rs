//! Environment-backed configuration: league ID list and optional session credentials.

use std::env;
use std::str::FromStr;

use crate::{
    cli::types::LeagueId,
    error::{ReportError, Result},
    ESPN_S2_ENV_VAR, LEAGUE_IDS_ENV_VAR, SWID_ENV_VAR,
};

/// Private-league session credentials. Used together or not at all;
/// public leagues need neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub espn_s2: String,
    pub swid: String,
}

/// Runtime configuration resolved from CLI overrides and the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub league_ids: Vec<LeagueId>,
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Resolve configuration, preferring CLI-provided league IDs over the
    /// `ESPN_LEAGUE_IDS` environment variable.
    pub fn resolve(cli_league_ids: Option<Vec<LeagueId>>) -> Result<Self> {
        let league_ids = match cli_league_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => league_ids_from_env()?,
        };
        Ok(Self {
            league_ids,
            credentials: credentials_from_env(),
        })
    }
}

fn league_ids_from_env() -> Result<Vec<LeagueId>> {
    let raw = env::var(LEAGUE_IDS_ENV_VAR).unwrap_or_default();
    let ids = parse_league_ids(&raw)?;
    if ids.is_empty() {
        return Err(ReportError::MissingLeagueIds {
            env_var: LEAGUE_IDS_ENV_VAR.to_string(),
        });
    }
    Ok(ids)
}

/// Parse a comma-separated league ID list. Entries are trimmed and blank
/// segments skipped, so trailing commas stay usable.
pub fn parse_league_ids(raw: &str) -> Result<Vec<LeagueId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(LeagueId::from_str)
        .collect()
}

/// Read `ESPN_S2` + `ESPN_SWID` from the environment, if both are present.
pub fn credentials_from_env() -> Option<Credentials> {
    pair_credentials(
        env::var(ESPN_S2_ENV_VAR).ok(),
        env::var(SWID_ENV_VAR).ok(),
    )
}

fn pair_credentials(espn_s2: Option<String>, swid: Option<String>) -> Option<Credentials> {
    match (espn_s2, swid) {
        (Some(espn_s2), Some(swid)) => Some(Credentials { espn_s2, swid }),
        _ => None,
    }
}

//! League client handle and the read-only view the report driver consumes.

use reqwest::{header::HeaderMap, Client};

use crate::{
    cli::types::{LeagueId, Season, Week},
    config::Credentials,
    espn::{
        http::{self, accept_header_map, cookie_header_map},
        types::{LeagueEnvelope, LeagueSettings, ScheduleEntry, ScoreboardEnvelope, Team},
    },
    Result,
};

const USER_AGENT: &str = concat!("espn-playoffs/", env!("CARGO_PKG_VERSION"));

/// Read-only view of a fetched league, narrow enough to stub in tests.
#[allow(async_fn_in_trait)]
pub trait LeagueView {
    fn settings(&self) -> &LeagueSettings;
    fn current_week(&self) -> Week;
    fn teams(&self) -> &[Team];
    async fn box_scores(&self, week: Week) -> Result<Vec<ScheduleEntry>>;
}

/// Live handle to one ESPN league for one season.
pub struct League {
    client: Client,
    headers: HeaderMap,
    league_id: LeagueId,
    season: Season,
    debug: bool,
    settings: LeagueSettings,
    current_week: Week,
    teams: Vec<Team>,
}

impl League {
    /// Fetch settings, status, and teams for one league. Uses credentialed
    /// (cookie) construction when credentials are given, anonymous otherwise.
    pub async fn connect(
        league_id: LeagueId,
        season: Season,
        credentials: Option<&Credentials>,
        debug: bool,
    ) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let headers = match credentials {
            Some(credentials) => cookie_header_map(credentials)?,
            None => accept_header_map(),
        };

        let raw = http::get_league(
            &client,
            headers.clone(),
            league_id,
            season,
            &["mSettings", "mTeam"],
            debug,
        )
        .await?;
        let envelope: LeagueEnvelope = serde_json::from_value(raw)?;

        Ok(Self {
            client,
            headers,
            league_id,
            season,
            debug,
            settings: envelope.settings,
            current_week: envelope.status.current_matchup_period,
            teams: envelope.teams,
        })
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }
}

impl LeagueView for League {
    fn settings(&self) -> &LeagueSettings {
        &self.settings
    }

    fn current_week(&self) -> Week {
        self.current_week
    }

    fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Box scores for one week: schedule rows whose matchup period matches.
    async fn box_scores(&self, week: Week) -> Result<Vec<ScheduleEntry>> {
        let raw = http::get_matchup_scores(
            &self.client,
            self.headers.clone(),
            self.league_id,
            self.season,
            week,
            self.debug,
        )
        .await?;
        let scoreboard: ScoreboardEnvelope = serde_json::from_value(raw)?;

        Ok(scoreboard
            .schedule
            .into_iter()
            .filter(|matchup| matchup.matchup_period_id == week)
            .collect())
    }
}

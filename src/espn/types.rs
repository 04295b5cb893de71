//! Serde models for the ESPN Fantasy Football v3 API responses this tool reads.

use crate::cli::types::Week;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Top-level envelope for a combined `mSettings` + `mTeam` league fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEnvelope {
    pub settings: LeagueSettings,
    pub status: LeagueStatus,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Root we deserialize out of mSettings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueSettings {
    pub name: String,
    #[serde(rename = "scheduleSettings")]
    pub schedule_settings: ScheduleSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleSettings {
    /// Number of regular-season matchup periods.
    #[serde(rename = "matchupPeriodCount")]
    pub matchup_period_count: u16,

    #[serde(rename = "playoffTeamCount")]
    pub playoff_team_count: u16,

    /// Number of weeks each playoff round spans.
    #[serde(rename = "playoffMatchupPeriodLength")]
    pub playoff_matchup_period_length: u16,

    /// Tie-break rule applied when assigning playoff seeds.
    #[serde(rename = "playoffSeedingRule")]
    pub playoff_seed_rule: String,

    /// Matchup period -> scoring periods it spans (keys come in as strings).
    #[serde(rename = "matchupPeriods", default)]
    pub matchup_periods: BTreeMap<String, Vec<u16>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod")]
    pub current_matchup_period: Week,
}

/// Fantasy team entry from `mTeam`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,

    /// Newer payloads carry a single `name`; older ones split location/nickname.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,

    /// Current seed within the league, pre-computed by ESPN.
    #[serde(rename = "playoffSeed", default)]
    pub playoff_seed: u16,

    /// Final end-of-season rank; 0 until the season concludes.
    #[serde(rename = "rankCalculatedFinal", default)]
    pub final_rank: u16,

    #[serde(default)]
    pub record: TeamRecord,

    #[serde(rename = "currentSimulationResults", default)]
    pub simulation_results: SimulationResults,
}

impl Team {
    /// Team display name: `name` when present, otherwise location + nickname.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            if !name.is_empty() {
                return name.clone();
            }
        }
        match (&self.location, &self.nickname) {
            (Some(location), Some(nickname)) => {
                format!("{} {}", location.trim(), nickname.trim())
            }
            (Some(location), None) => location.clone(),
            (None, Some(nickname)) => nickname.clone(),
            (None, None) => format!("Team {}", self.id),
        }
    }

    /// Playoff probability as a fraction in `[0, 1]`.
    pub fn playoff_pct(&self) -> f64 {
        self.simulation_results.playoff_pct
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: RecordLine,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordLine {
    #[serde(default)]
    pub wins: u16,
    #[serde(default)]
    pub losses: u16,
    #[serde(default)]
    pub ties: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimulationResults {
    #[serde(rename = "playoffPct", default)]
    pub playoff_pct: f64,
}

/// Envelope for `mMatchupScore`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardEnvelope {
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

/// One matchup row from the league schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleEntry {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: Week,

    /// `"NONE"` during the regular season; the bracket tier otherwise.
    #[serde(rename = "playoffTierType", default = "default_tier_type")]
    pub playoff_tier_type: String,

    /// Playoff brackets produce byes, where one side is missing.
    #[serde(default)]
    pub home: Option<MatchupSide>,
    #[serde(default)]
    pub away: Option<MatchupSide>,
}

fn default_tier_type() -> String {
    "NONE".to_string()
}

impl ScheduleEntry {
    pub fn is_playoff(&self) -> bool {
        self.playoff_tier_type != "NONE"
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
}

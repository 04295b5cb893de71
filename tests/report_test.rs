//! Integration tests for the report driver, run against a stub league.

use std::cell::RefCell;

use espn_playoffs::{
    cli::types::{LeagueId, Season, Week},
    commands::report::{print_league_report, run_report},
    config::{Config, Credentials},
    espn::{
        league::LeagueView,
        types::{LeagueSettings, ScheduleEntry, Team},
    },
    ReportError, Result,
};
use serde_json::json;

struct StubLeague {
    settings: LeagueSettings,
    current_week: Week,
    teams: Vec<Team>,
    matchups: Vec<ScheduleEntry>,
    fail_box_scores: bool,
}

impl LeagueView for StubLeague {
    fn settings(&self) -> &LeagueSettings {
        &self.settings
    }

    fn current_week(&self) -> Week {
        self.current_week
    }

    fn teams(&self) -> &[Team] {
        &self.teams
    }

    async fn box_scores(&self, _week: Week) -> Result<Vec<ScheduleEntry>> {
        if self.fail_box_scores {
            Err(decode_error())
        } else {
            Ok(self.matchups.clone())
        }
    }
}

fn decode_error() -> ReportError {
    serde_json::from_str::<serde_json::Value>("not json")
        .unwrap_err()
        .into()
}

fn settings(reg_weeks: u16) -> LeagueSettings {
    serde_json::from_value(json!({
        "name": "Stub League",
        "scheduleSettings": {
            "matchupPeriodCount": reg_weeks,
            "playoffTeamCount": 6,
            "playoffMatchupPeriodLength": 1,
            "playoffSeedingRule": "TOTAL_POINTS_SCORED",
            "matchupPeriods": {"1": [1], "15": [15]}
        }
    }))
    .unwrap()
}

fn team(id: u32, name: &str, seed: u16, wins: u16, losses: u16, playoff_pct: f64) -> Team {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "playoffSeed": seed,
        "rankCalculatedFinal": 0,
        "record": {"overall": {"wins": wins, "losses": losses, "ties": 0}},
        "currentSimulationResults": {"playoffPct": playoff_pct}
    }))
    .unwrap()
}

fn matchup(week: u16, tier: &str, home: (u32, f64), away: (u32, f64)) -> ScheduleEntry {
    serde_json::from_value(json!({
        "matchupPeriodId": week,
        "playoffTierType": tier,
        "home": {"teamId": home.0, "totalPoints": home.1},
        "away": {"teamId": away.0, "totalPoints": away.1}
    }))
    .unwrap()
}

fn stub(current_week: u16, reg_weeks: u16) -> StubLeague {
    StubLeague {
        settings: settings(reg_weeks),
        current_week: Week::new(current_week),
        teams: vec![
            team(1, "Alpha", 1, 10, 4, 0.981),
            team(2, "Beta", 2, 9, 5, 0.5),
        ],
        matchups: vec![matchup(current_week, "WINNERS_BRACKET", (1, 112.5), (2, 98.2))],
        fail_box_scores: false,
    }
}

async fn render(league: &StubLeague, week_override: Option<Week>) -> String {
    let mut out = Vec::new();
    print_league_report(&mut out, league, week_override)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_header_fields_printed() {
    let output = render(&stub(15, 14), None).await;

    assert!(output.contains("League: Stub League"));
    assert!(output.contains("Current week: 15 | Regular season weeks: 14"));
    assert!(output.contains(
        "Playoff teams: 6 | Weeks per playoff matchup: 1 | Seed tie rule: TOTAL_POINTS_SCORED"
    ));
}

#[tokio::test]
async fn test_in_playoffs_requires_strictly_greater_week() {
    assert!(render(&stub(15, 14), None).await.contains("In playoffs: true"));
    assert!(render(&stub(14, 14), None).await.contains("In playoffs: false"));
    assert!(render(&stub(13, 14), None).await.contains("In playoffs: false"));
}

#[tokio::test]
async fn test_box_score_line_contents() {
    let output = render(&stub(15, 14), None).await;

    assert!(output.contains("Box scores, week 15:"));
    assert!(output.contains("[playoff] WINNERS_BRACKET Alpha (#1) 112.5 vs Beta (#2) 98.2"));
}

#[tokio::test]
async fn test_regular_season_matchup_flag() {
    let mut league = stub(10, 14);
    league.matchups = vec![matchup(10, "NONE", (1, 100.0), (2, 90.0))];

    let output = render(&league, None).await;
    assert!(output.contains("[regular] NONE Alpha (#1) 100.0 vs Beta (#2) 90.0"));
}

#[tokio::test]
async fn test_bye_side_renders_as_bye() {
    let mut league = stub(15, 14);
    league.matchups = vec![serde_json::from_value(json!({
        "matchupPeriodId": 15,
        "playoffTierType": "WINNERS_BRACKET",
        "home": {"teamId": 1, "totalPoints": 0.0}
    }))
    .unwrap()];

    let output = render(&league, None).await;
    assert!(output.contains("Alpha (#1) 0.0 vs BYE"));
}

#[tokio::test]
async fn test_standings_sorted_by_seed_stable() {
    let mut league = stub(15, 14);
    league.matchups = vec![];
    league.teams = vec![
        team(1, "Gamma", 3, 6, 8, 0.0),
        team(2, "First Tie", 1, 10, 4, 0.9),
        team(3, "Second Tie", 1, 10, 4, 0.9),
        team(4, "Delta", 2, 8, 6, 0.6),
    ];

    let output = render(&league, None).await;
    let first = output.find("First Tie").unwrap();
    let second = output.find("Second Tie").unwrap();
    let delta = output.find("Delta").unwrap();
    let gamma = output.find("Gamma").unwrap();

    assert!(first < second);
    assert!(second < delta);
    assert!(delta < gamma);
}

#[tokio::test]
async fn test_standings_line_contents() {
    let mut league = stub(15, 14);
    league.matchups = vec![];
    league.teams = vec![team(1, "Alpha", 1, 10, 4, 0.981)];

    let output = render(&league, None).await;
    assert!(output.contains("1. Alpha (10-4) final: 0 playoff odds: 0.981"));
}

#[tokio::test]
async fn test_playoff_odds_rendered_to_three_decimals() {
    let mut league = stub(15, 14);
    league.matchups = vec![];
    league.teams = vec![
        team(1, "Halfsies", 1, 7, 7, 0.5),
        team(2, "Longshot", 2, 7, 7, 0.98765),
    ];

    let output = render(&league, None).await;
    assert!(output.contains("playoff odds: 0.500"));
    assert!(output.contains("playoff odds: 0.988"));
}

#[tokio::test]
async fn test_box_score_failure_still_prints_standings() {
    let mut league = stub(15, 14);
    league.fail_box_scores = true;

    let output = render(&league, None).await;
    assert!(output.contains("Could not fetch box scores for week 15"));
    assert!(output.contains("Standings:"));
    assert!(output.contains("Alpha"));
    assert!(output.contains("Matchup periods: {"));
}

#[tokio::test]
async fn test_week_override_replaces_current_week() {
    let output = render(&stub(15, 14), Some(Week::new(14))).await;
    assert!(output.contains("Box scores, week 14:"));
}

#[tokio::test]
async fn test_matchup_periods_printed_raw() {
    let output = render(&stub(15, 14), None).await;
    assert!(output.contains(r#"Matchup periods: {"1": [1], "15": [15]}"#));
}

#[tokio::test]
async fn test_run_report_constructs_leagues_in_order_with_season() {
    let calls: RefCell<Vec<(u32, u16, bool)>> = RefCell::new(Vec::new());
    let cfg = Config {
        league_ids: vec![LeagueId::new(100), LeagueId::new(200)],
        credentials: None,
    };

    let mut out = Vec::new();
    run_report(
        &mut out,
        &cfg,
        Season::new(2025),
        None,
        false,
        |id, season, creds| {
            calls
                .borrow_mut()
                .push((id.as_u32(), season.as_u16(), creds.is_some()));
            async move { Ok::<StubLeague, ReportError>(stub(15, 14)) }
        },
    )
    .await
    .unwrap();

    assert_eq!(
        calls.into_inner(),
        vec![(100, 2025, false), (200, 2025, false)]
    );
}

#[tokio::test]
async fn test_run_report_passes_credentials_when_configured() {
    let calls: RefCell<Vec<Option<Credentials>>> = RefCell::new(Vec::new());
    let cfg = Config {
        league_ids: vec![LeagueId::new(100)],
        credentials: Some(Credentials {
            espn_s2: "s2".to_string(),
            swid: "{SWID}".to_string(),
        }),
    };

    let mut out = Vec::new();
    run_report(
        &mut out,
        &cfg,
        Season::new(2025),
        None,
        false,
        |_id, _season, creds| {
            calls.borrow_mut().push(creds);
            async move { Ok::<StubLeague, ReportError>(stub(15, 14)) }
        },
    )
    .await
    .unwrap();

    assert_eq!(calls.into_inner(), vec![cfg.credentials.clone()]);
}

#[tokio::test]
async fn test_box_score_failure_does_not_abort_later_leagues() {
    let cfg = Config {
        league_ids: vec![LeagueId::new(100), LeagueId::new(200)],
        credentials: None,
    };

    let mut out = Vec::new();
    run_report(
        &mut out,
        &cfg,
        Season::new(2025),
        None,
        false,
        |id, _season, _creds| {
            let fail = id.as_u32() == 100;
            async move {
                let mut league = stub(15, 14);
                league.fail_box_scores = fail;
                Ok::<StubLeague, ReportError>(league)
            }
        },
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output.matches("League: Stub League").count(), 2);
    assert_eq!(output.matches("Could not fetch box scores").count(), 1);
    assert_eq!(output.matches("Standings:").count(), 2);
}

#[tokio::test]
async fn test_connect_failure_aborts_remaining_leagues() {
    let calls = RefCell::new(0u32);
    let cfg = Config {
        league_ids: vec![LeagueId::new(100), LeagueId::new(200)],
        credentials: None,
    };

    let mut out = Vec::new();
    let result = run_report(
        &mut out,
        &cfg,
        Season::new(2025),
        None,
        false,
        |_id, _season, _creds| {
            *calls.borrow_mut() += 1;
            async move { Err::<StubLeague, ReportError>(decode_error()) }
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(*calls.borrow(), 1);
}

#[tokio::test]
async fn test_verbose_progress_lines() {
    let cfg = Config {
        league_ids: vec![LeagueId::new(100)],
        credentials: None,
    };

    let mut out = Vec::new();
    run_report(
        &mut out,
        &cfg,
        Season::new(2025),
        None,
        true,
        |_id, _season, _creds| async move { Ok::<StubLeague, ReportError>(stub(15, 14)) },
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Fetching league 100 for season 2025..."));
    assert!(output.contains("✓ League 100 loaded (2 teams)"));
}

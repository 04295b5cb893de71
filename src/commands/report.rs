//! Playoff report command implementation.

use std::collections::BTreeMap;
use std::future::Future;
use std::io::{self, Write};

use crate::{
    cli::{
        types::{LeagueId, Season, Week},
        PlayoffReport,
    },
    config::{Config, Credentials},
    error::ReportError,
    espn::{
        league::{League, LeagueView},
        types::{MatchupSide, ScheduleEntry, Team},
    },
    Result,
};

/// Handle the playoff report command against the live ESPN API.
///
/// Missing league-ID configuration is printed and treated as a normal exit;
/// any other failure outside the box-score fetch aborts the whole run.
pub async fn handle_report(cli: PlayoffReport) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let cfg = match Config::resolve(cli.league_id) {
        Ok(cfg) => cfg,
        Err(err @ ReportError::MissingLeagueIds { .. }) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let debug = cli.debug;
    run_report(
        &mut out,
        &cfg,
        cli.season,
        cli.week,
        cli.verbose,
        move |league_id, season, credentials| async move {
            League::connect(league_id, season, credentials.as_ref(), debug).await
        },
    )
    .await
}

/// Drive the report for each configured league, in order. `connect` is the
/// client factory, so tests can substitute a stub league.
pub async fn run_report<W, L, F, Fut>(
    out: &mut W,
    cfg: &Config,
    season: Season,
    week_override: Option<Week>,
    verbose: bool,
    connect: F,
) -> Result<()>
where
    W: Write,
    L: LeagueView,
    F: Fn(LeagueId, Season, Option<Credentials>) -> Fut,
    Fut: Future<Output = Result<L>>,
{
    for &league_id in &cfg.league_ids {
        if verbose {
            writeln!(out, "Fetching league {} for season {}...", league_id, season)?;
        }

        let league = connect(league_id, season, cfg.credentials.clone()).await?;

        if verbose {
            writeln!(out, "✓ League {} loaded ({} teams)", league_id, league.teams().len())?;
        }

        print_league_report(out, &league, week_override).await?;
    }

    Ok(())
}

/// Print one league's report: settings header, current-week box scores,
/// standings ordered by seed, and the raw matchup-period layout.
pub async fn print_league_report<W, L>(
    out: &mut W,
    league: &L,
    week_override: Option<Week>,
) -> Result<()>
where
    W: Write,
    L: LeagueView,
{
    let settings = league.settings();
    let schedule = &settings.schedule_settings;
    let current_week = league.current_week();

    writeln!(out, "League: {}", settings.name)?;
    writeln!(
        out,
        "Current week: {} | Regular season weeks: {}",
        current_week, schedule.matchup_period_count
    )?;
    writeln!(
        out,
        "Playoff teams: {} | Weeks per playoff matchup: {} | Seed tie rule: {}",
        schedule.playoff_team_count,
        schedule.playoff_matchup_period_length,
        schedule.playoff_seed_rule
    )?;

    let in_playoffs = current_week.as_u16() > schedule.matchup_period_count;
    writeln!(out, "In playoffs: {}", in_playoffs)?;

    let teams_by_id: BTreeMap<u32, &Team> =
        league.teams().iter().map(|team| (team.id, team)).collect();

    let week = week_override.unwrap_or(current_week);
    writeln!(out, "Box scores, week {}:", week)?;
    match league.box_scores(week).await {
        Ok(matchups) => {
            for matchup in &matchups {
                writeln!(out, "  {}", format_matchup(matchup, &teams_by_id))?;
            }
        }
        Err(err) => {
            writeln!(out, "  ⚠ Could not fetch box scores for week {}: {}", week, err)?;
        }
    }

    writeln!(out, "Standings:")?;
    let mut teams: Vec<&Team> = league.teams().iter().collect();
    // sort_by_key is stable: teams tied on seed keep their input order
    teams.sort_by_key(|team| team.playoff_seed);
    for team in teams {
        writeln!(
            out,
            "  {:>2}. {} ({}-{}) final: {} playoff odds: {:.3}",
            team.playoff_seed,
            team.display_name(),
            team.record.overall.wins,
            team.record.overall.losses,
            team.final_rank,
            team.playoff_pct(),
        )?;
    }

    writeln!(out, "Matchup periods: {:?}", schedule.matchup_periods)?;
    writeln!(out)?;

    Ok(())
}

fn format_matchup(matchup: &ScheduleEntry, teams: &BTreeMap<u32, &Team>) -> String {
    let flag = if matchup.is_playoff() {
        "[playoff]"
    } else {
        "[regular]"
    };
    format!(
        "{} {} {} vs {}",
        flag,
        matchup.playoff_tier_type,
        format_side(matchup.home.as_ref(), teams),
        format_side(matchup.away.as_ref(), teams),
    )
}

fn format_side(side: Option<&MatchupSide>, teams: &BTreeMap<u32, &Team>) -> String {
    match side {
        Some(side) => {
            let (name, seed) = teams
                .get(&side.team_id)
                .map(|team| (team.display_name(), team.playoff_seed))
                .unwrap_or_else(|| (format!("Team {}", side.team_id), 0));
            format!("{} (#{}) {:.1}", name, seed, side.total_points)
        }
        None => "BYE".to_string(),
    }
}

//! HTTP access to the ESPN Fantasy Football v3 read API.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Client, RequestBuilder,
};
use serde_json::Value;

use crate::{
    cli::types::{LeagueId, Season, Week},
    config::Credentials,
    Result,
};

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Headers for anonymous (public-league) requests.
pub fn accept_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Cookie headers for private-league requests (`SWID` + `espn_s2`).
pub fn cookie_header_map(credentials: &Credentials) -> Result<HeaderMap> {
    let mut h = accept_header_map();
    let cookie = format!(
        "SWID={}; espn_s2={}",
        credentials.swid, credentials.espn_s2
    );
    h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    Ok(h)
}

/// Fetch a league with the given views (`mSettings`, `mTeam`, ...).
pub async fn get_league(
    client: &Client,
    headers: HeaderMap,
    league_id: LeagueId,
    season: Season,
    views: &[&str],
    debug: bool,
) -> Result<Value> {
    let url = format!(
        "{FFL_BASE_URL}/seasons/{}/segments/0/leagues/{}",
        season, league_id
    );
    let params: Vec<(&str, &str)> = views.iter().map(|view| ("view", *view)).collect();

    let builder = client.get(&url).headers(headers).query(&params);
    if debug {
        debug_request(&builder)?;
    }

    let res = builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// Fetch the matchup scoreboard for one week (`view=mMatchupScore`).
pub async fn get_matchup_scores(
    client: &Client,
    headers: HeaderMap,
    league_id: LeagueId,
    season: Season,
    week: Week,
    debug: bool,
) -> Result<Value> {
    let url = format!(
        "{FFL_BASE_URL}/seasons/{}/segments/0/leagues/{}",
        season, league_id
    );
    let week_param = week.as_u16().to_string();
    let params = [
        ("view", "mMatchupScore"),
        ("scoringPeriodId", week_param.as_str()),
    ];

    let builder = client.get(&url).headers(headers).query(&params);
    if debug {
        debug_request(&builder)?;
    }

    let res = builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

fn debug_request(builder: &RequestBuilder) -> Result<()> {
    if let Some(clone) = builder.try_clone() {
        let req = clone.build()?;
        eprintln!("URL => {}", req.url());
        eprintln!("HEADERS:");
        for (k, v) in req.headers().iter() {
            eprintln!("  {}: {:?}", k, v);
        }
    }
    Ok(())
}

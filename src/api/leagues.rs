use reqwest::Url;
use tracing::{debug, instrument};

use crate::api;
use crate::error::{MatchdayError, Result};
use crate::model::{League, LeaguesResponse};
use crate::ordering;

pub(crate) const LEAGUES_PATH: &str = "leagues/get-leagues";

#[instrument(skip(client))]
pub(crate) async fn get_leagues(client: &reqwest::Client, base: &Url) -> Result<Vec<League>> {
    let url = api::endpoint(base, LEAGUES_PATH)?;
    let body: LeaguesResponse = api::get_json(client, &url).await?;
    debug!(count = body.leagues.len(), "parsed league list");
    Ok(body.leagues)
}

#[instrument(skip(client))]
pub(crate) async fn get_current_league(client: &reqwest::Client, base: &Url) -> Result<League> {
    let leagues = get_leagues(client, base).await?;
    match ordering::select_current_league(leagues) {
        Some(league) => Ok(league),
        None => Err(MatchdayError::NoLeagues {
            url: api::endpoint(base, LEAGUES_PATH)?.to_string(),
        }),
    }
}

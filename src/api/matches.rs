use reqwest::Url;
use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::Match;

pub(crate) const MATCHES_PATH: &str = "matches/get-matches";

#[instrument(skip(client))]
pub(crate) async fn get_matches(client: &reqwest::Client, base: &Url) -> Result<Vec<Match>> {
    let url = api::endpoint(base, MATCHES_PATH)?;
    let matches: Vec<Match> = api::get_json(client, &url).await?;
    debug!(count = matches.len(), "parsed match list");
    Ok(matches)
}

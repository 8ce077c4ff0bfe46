use reqwest::Url;
use tracing::instrument;

use crate::api;
use crate::config::ClientConfig;
use crate::error::{MatchdayError, Result};
use crate::model::{League, Match};
use crate::ordering::{self, MatchBoard};

/// The main entry point for reading the matchday API.
///
/// `MatchdayClient` wraps a [`reqwest::Client`] and a base url, and exposes
/// the raw endpoints alongside the ordered views the screens display.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> matchday::Result<()> {
/// use matchday::{ClientConfig, MatchdayClient};
///
/// let client = MatchdayClient::new(ClientConfig::new("http://localhost:3000")?)?;
/// let board = client.fetch_matches().await?;
/// println!("{} live, {} other", board.live.len(), board.others.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MatchdayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MatchdayClient {
    /// Create a client from `config`, applying its request timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MatchdayError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self {
            http: client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch all fixtures in payload order.
    #[instrument(skip(self))]
    pub async fn get_matches(&self) -> Result<Vec<Match>> {
        api::matches::get_matches(&self.http, &self.base_url).await
    }

    /// Fetch all leagues in payload order.
    #[instrument(skip(self))]
    pub async fn get_leagues(&self) -> Result<Vec<League>> {
        api::leagues::get_leagues(&self.http, &self.base_url).await
    }

    /// Fetch fixtures sorted by status, with live ones split out.
    #[instrument(skip(self))]
    pub async fn fetch_matches(&self) -> Result<MatchBoard> {
        let matches = self.get_matches().await?;
        Ok(ordering::order_matches(matches))
    }

    /// Fetch the current (last) league with its standings sorted by points.
    #[instrument(skip(self))]
    pub async fn fetch_current_league(&self) -> Result<League> {
        let mut league = api::leagues::get_current_league(&self.http, &self.base_url).await?;
        league.teams = ordering::sort_standings(league.teams);
        Ok(league)
    }
}

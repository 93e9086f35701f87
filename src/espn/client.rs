use std::fmt;

use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, COOKIE},
    Client, StatusCode,
};

use crate::config::EspnConfig;
use crate::models::espn::League;

/// Header ESPN reads to page and filter `kona_player_info`.
const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

#[derive(Debug, thiserror::Error)]
pub enum EspnError {
    #[error("ESPN request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("ESPN returned {status} for view {view}")]
    Status { status: StatusCode, view: View },
    #[error("Failed to decode ESPN {view} response: {source}")]
    Decode {
        view: View,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid ESPN cookie value: {0}")]
    Cookie(#[from] InvalidHeaderValue),
}

/// League views the handlers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Team,
    Roster,
    Standings,
    MatchupScore,
    PlayerInfo,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Team => "mTeam",
            View::Roster => "mRoster",
            View::Standings => "mStandings",
            View::MatchupScore => "mMatchupScore",
            View::PlayerInfo => "kona_player_info",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only client for one fantasy league.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
    league_id: i64,
}

impl EspnClient {
    pub fn new(config: &EspnConfig) -> Result<Self, EspnError> {
        let mut headers = HeaderMap::new();
        // Private leagues need both cookies; public ones ignore them.
        if let (Some(espn_s2), Some(swid)) = (&config.espn_s2, &config.swid) {
            let cookie = HeaderValue::from_str(&format!("espn_s2={}; SWID={}", espn_s2, swid))?;
            headers.insert(COOKIE, cookie);
        }

        let http = Client::builder()
            .user_agent(concat!("fantasy_api/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self::with_http_client(http, config))
    }

    /// Uses a caller-built `reqwest::Client`; cookies and timeout from
    /// `config` are not applied.
    pub fn with_http_client(http: Client, config: &EspnConfig) -> Self {
        EspnClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            league_id: config.league_id,
        }
    }

    pub fn league_id(&self) -> i64 {
        self.league_id
    }

    pub fn league_url(&self, season: i32) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, season, self.league_id
        )
    }

    pub async fn fetch_view(&self, season: i32, view: View) -> Result<League, EspnError> {
        self.fetch(season, view, None).await
    }

    /// Team metadata (names, owners, records) used to resolve team ids.
    pub async fn fetch_team_metadata(&self, season: i32) -> Result<League, EspnError> {
        self.fetch_view(season, View::Team).await
    }

    /// League-wide player catalog, rostered and free agents alike.
    pub async fn fetch_players(&self, season: i32, limit: u32) -> Result<League, EspnError> {
        let filter = serde_json::json!({ "players": { "limit": limit } }).to_string();
        self.fetch(season, View::PlayerInfo, Some(filter)).await
    }

    async fn fetch(
        &self,
        season: i32,
        view: View,
        filter: Option<String>,
    ) -> Result<League, EspnError> {
        let url = self.league_url(season);
        tracing::debug!("GET {}?view={}", url, view);

        let mut request = self.http.get(&url).query(&[("view", view.as_str())]);
        if let Some(filter) = filter {
            request = request.header(FANTASY_FILTER_HEADER, filter);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("ESPN {} request for season {} failed: {}", view, season, e);
            EspnError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("ESPN {} for season {} returned {}", view, season, status);
            return Err(EspnError::Status { status, view });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::error!("Failed to decode ESPN {} for season {}: {}", view, season, source);
            EspnError::Decode { view, source }
        })
    }
}

use std::convert::Infallible;
use std::str::FromStr;

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use chrono::Datelike;

pub mod health;
pub mod history;
pub mod kona;
pub mod roster;
pub mod schedule;
pub mod scoreboard;
pub mod standings;
pub mod teams;

/// Query parameters shared by the season-scoped endpoints.
///
/// Values are kept as strings so a malformed `season` or `week` falls back to
/// the default instead of rejecting the request.
#[derive(Debug, Default)]
pub struct SeasonQuery {
    pub season: Option<String>,
    pub week: Option<String>,
}

impl<S> FromRequestParts<S> for SeasonQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = QueryParams::from_uri(&parts.uri);
        Ok(SeasonQuery {
            season: params.first("season"),
            week: params.first("week"),
        })
    }
}

/// Query string as raw key/value pairs.
///
/// Never rejects: repeated keys keep their first value and an undecodable
/// query string reads as empty.
#[derive(Debug, Default)]
pub(crate) struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub(crate) fn from_uri(uri: &Uri) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        QueryParams(pairs)
    }

    pub(crate) fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl SeasonQuery {
    pub fn season(&self) -> i32 {
        parse_lenient(self.season.as_deref()).unwrap_or_else(current_season)
    }

    pub fn week(&self) -> Option<i64> {
        parse_lenient(self.week.as_deref())
    }
}

pub fn current_season() -> i32 {
    chrono::Utc::now().year()
}

pub(crate) fn parse_lenient<T: FromStr>(value: Option<&str>) -> Option<T> {
    value?.trim().parse().ok()
}

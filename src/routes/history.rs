use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    response::Json,
};

use crate::error::ApiError;
use crate::espn::View;
use crate::mappings::TeamDirectory;
use crate::models::espn::{League, MatchupSide};
use crate::models::{HistoryRow, Location};
use crate::routes::{current_season, parse_lenient, QueryParams};
use crate::state::AppState;

const DEFAULT_YEARS: i32 = 5;
const MAX_YEARS: i32 = 15;

#[derive(Debug, Default)]
pub struct HistoryQuery {
    years: Option<String>,
}

impl<S> FromRequestParts<S> for HistoryQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(HistoryQuery {
            years: QueryParams::from_uri(&parts.uri).first("years"),
        })
    }
}

impl HistoryQuery {
    /// Number of seasons to walk back, current one included.
    ///
    /// Missing, unparsable or zero means the default.
    fn years(&self) -> i32 {
        parse_lenient(self.years.as_deref())
            .filter(|y: &i32| *y != 0)
            .unwrap_or(DEFAULT_YEARS)
            .clamp(1, MAX_YEARS)
    }
}

/// GET /api/history?years=5 - Head-to-head results across past seasons
///
/// Seasons the provider cannot serve (league not yet created, private,
/// transient failure) are skipped rather than failing the whole request.
pub async fn get_history(
    State(state): State<AppState>,
    params: HistoryQuery,
) -> Result<Json<Vec<HistoryRow>>, ApiError> {
    let current = current_season();
    let mut rows = Vec::new();

    for season in (0..params.years()).map(|i| current - i) {
        let fetched = tokio::try_join!(
            state.espn.fetch_team_metadata(season),
            state.espn.fetch_view(season, View::Standings),
        );

        match fetched {
            Ok((meta, standings)) => {
                let directory = TeamDirectory::from_league(&meta);
                rows.extend(history_rows(season, &standings, &directory));
            }
            Err(e) => {
                tracing::warn!("Skipping season {} in history: {}", season, e);
            }
        }
    }

    Ok(Json(rows))
}

pub fn history_rows(season: i32, standings: &League, directory: &TeamDirectory) -> Vec<HistoryRow> {
    let mut rows = Vec::with_capacity(standings.schedule.len() * 2);

    for (idx, matchup) in standings.schedule.iter().enumerate() {
        let week = matchup.matchup_period_id.unwrap_or(0);
        let matchup_id = idx + 1;

        let Some(away) = matchup.away.as_ref() else {
            continue;
        };
        let home = matchup.home.as_ref();

        rows.push(perspective(season, week, matchup_id, Location::Away, away, home, directory));
        if let Some(home) = home {
            rows.push(perspective(season, week, matchup_id, Location::Home, home, Some(away), directory));
        }
    }

    rows
}

/// One team's view of a matchup. A missing opponent is a bye: team id 0, no points.
fn perspective(
    season: i32,
    week: i64,
    matchup_id: usize,
    location: Location,
    team: &MatchupSide,
    opponent: Option<&MatchupSide>,
    directory: &TeamDirectory,
) -> HistoryRow {
    let points_for = team.total_points.unwrap_or(0.0);
    let opponent_points = opponent.and_then(|o| o.total_points).unwrap_or(0.0);
    let opponent_team_id = opponent.map(|o| o.team_id).unwrap_or(0);

    HistoryRow {
        season,
        week,
        matchup_id,
        team_id: team.team_id,
        team_name: directory.name_or_placeholder(team.team_id),
        team_abbrev: directory.abbrev(team.team_id),
        location,
        opponent_team_id,
        opponent_team_name: match opponent {
            Some(_) => directory.name_or_placeholder(opponent_team_id),
            None => "BYE".to_string(),
        },
        opponent_team_abbrev: directory.abbrev(opponent_team_id),
        points_for,
        points_against: opponent_points,
        opponent_points,
        point_diff: points_for - opponent_points,
    }
}

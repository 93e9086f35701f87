use axum::{
    extract::State,
    response::Json,
};

use crate::error::ApiError;
use crate::espn::View;
use crate::mappings::TeamDirectory;
use crate::models::espn::{League, MatchupSide};
use crate::models::ScheduleRow;
use crate::routes::SeasonQuery;
use crate::state::AppState;

/// GET /api/schedule - Every matchup of the season with team names resolved
///
/// Query params:
/// - season: defaults to the current year
/// - week: keep only matchups of this matchup period
pub async fn get_schedule(
    State(state): State<AppState>,
    params: SeasonQuery,
) -> Result<Json<Vec<ScheduleRow>>, ApiError> {
    // mStandings carries both the schedule and the teams it references
    let league = state.espn.fetch_view(params.season(), View::Standings).await?;

    Ok(Json(schedule_rows(&league, params.week())))
}

pub fn schedule_rows(league: &League, week: Option<i64>) -> Vec<ScheduleRow> {
    let directory = TeamDirectory::from_league(league);
    let side = |s: Option<&MatchupSide>| -> (Option<i64>, String, String, Option<f64>) {
        match s {
            Some(s) => {
                let name = directory.get(s.team_id).map(|t| t.name.clone()).unwrap_or_default();
                (Some(s.team_id), name, directory.abbrev(s.team_id), s.total_points)
            }
            None => (None, String::new(), String::new(), None),
        }
    };

    league
        .schedule
        .iter()
        .enumerate()
        .filter(|(_, m)| week.is_none() || m.matchup_period_id == week)
        .map(|(idx, m)| {
            let (away_team_id, away_team_name, away_abbrev, away_points) = side(m.away.as_ref());
            let (home_team_id, home_team_name, home_abbrev, home_points) = side(m.home.as_ref());
            ScheduleRow {
                matchup_index: idx + 1,
                matchup_period_id: m.matchup_period_id,
                away_team_id,
                away_team_name,
                away_abbrev,
                away_points,
                home_team_id,
                home_team_name,
                home_abbrev,
                home_points,
            }
        })
        .collect()
}

use axum::{
    extract::State,
    response::Json,
};

use crate::error::ApiError;
use crate::mappings::{owner_name, team_name};
use crate::models::espn::League;
use crate::models::TeamRow;
use crate::routes::SeasonQuery;
use crate::state::AppState;

// GET /api/teams?season=2025 - List league teams with owner and record
pub async fn get_teams(
    State(state): State<AppState>,
    params: SeasonQuery,
) -> Result<Json<Vec<TeamRow>>, ApiError> {
    let league = state.espn.fetch_team_metadata(params.season()).await?;

    Ok(Json(team_rows(&league)))
}

pub fn team_rows(league: &League) -> Vec<TeamRow> {
    league
        .teams
        .iter()
        .map(|t| {
            let record = t.overall_record();
            TeamRow {
                team_id: t.id,
                team_name: team_name(t, &league.members),
                abbrev: t.abbrev.clone(),
                owner: t.owners.first().cloned(),
                owner_name: owner_name(t, &league.members),
                playoff_seed: t.playoff_seed,
                points_for: t.points,
                points_against: record.points_against,
                wins: record.wins,
                losses: record.losses,
                ties: record.ties,
                pct: record.percentage,
            }
        })
        .collect()
}

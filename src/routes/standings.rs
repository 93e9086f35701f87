use axum::{
    extract::State,
    response::Json,
};

use crate::error::ApiError;
use crate::espn::View;
use crate::mappings::team_name;
use crate::models::espn::League;
use crate::models::{SimulatedStandingRow, StandingRow};
use crate::routes::SeasonQuery;
use crate::state::AppState;

/// GET /api/standings - Overall record per team (mTeam view)
pub async fn get_standings(
    State(state): State<AppState>,
    params: SeasonQuery,
) -> Result<Json<Vec<StandingRow>>, ApiError> {
    let league = state.espn.fetch_view(params.season(), View::Team).await?;

    Ok(Json(standing_rows(&league)))
}

/// GET /api/standingsfull - Standings with the provider's playoff simulation
pub async fn get_standings_full(
    State(state): State<AppState>,
    params: SeasonQuery,
) -> Result<Json<Vec<SimulatedStandingRow>>, ApiError> {
    let league = state.espn.fetch_view(params.season(), View::Standings).await?;

    Ok(Json(simulated_standing_rows(&league)))
}

pub fn standing_rows(league: &League) -> Vec<StandingRow> {
    league
        .teams
        .iter()
        .map(|t| {
            let r = t.overall_record();
            StandingRow {
                team_id: t.id,
                team_name: team_name(t, &league.members),
                abbrev: t.abbrev.clone(),
                wins: r.wins,
                losses: r.losses,
                ties: r.ties,
                pct: r.percentage,
                points_for: r.points_for,
                points_against: r.points_against,
            }
        })
        .collect()
}

pub fn simulated_standing_rows(league: &League) -> Vec<SimulatedStandingRow> {
    league
        .teams
        .iter()
        .map(|t| {
            let sim = t.current_simulation_results.clone().unwrap_or_default();
            let rec = sim.mode_record.unwrap_or_default();
            SimulatedStandingRow {
                team_id: t.id,
                team_name: team_name(t, &league.members),
                abbrev: t.abbrev.clone(),
                rank: sim.rank,
                playoff_pct: sim.playoff_pct,
                division_win_pct: sim.division_win_pct,
                wins: rec.wins,
                losses: rec.losses,
                ties: rec.ties,
                streak_type: rec.streak_type,
                streak_length: rec.streak_length,
            }
        })
        .collect()
}

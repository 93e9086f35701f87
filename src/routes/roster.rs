use axum::{
    extract::State,
    response::Json,
};

use crate::error::ApiError;
use crate::espn::View;
use crate::mappings::{lineup_slot_name, position_name, pro_team_abbrev, TeamDirectory};
use crate::models::espn::{League, RosterEntry};
use crate::models::{RosterPlayer, RosterResponse, RosterTeam};
use crate::routes::SeasonQuery;
use crate::state::AppState;

/// GET /api/roster - Every team's current roster
///
/// Rosters (mRoster) and team metadata (mTeam) are fetched in parallel.
pub async fn get_roster(
    State(state): State<AppState>,
    params: SeasonQuery,
) -> Result<Json<RosterResponse>, ApiError> {
    let season = params.season();
    let (rosters, meta) = tokio::try_join!(
        state.espn.fetch_view(season, View::Roster),
        state.espn.fetch_team_metadata(season),
    )?;

    Ok(Json(RosterResponse {
        season,
        league_id: state.espn.league_id(),
        teams: roster_teams(&rosters, &TeamDirectory::from_league(&meta)),
    }))
}

pub fn roster_teams(rosters: &League, directory: &TeamDirectory) -> Vec<RosterTeam> {
    rosters
        .teams
        .iter()
        .map(|t| {
            let label = directory.get(t.id);
            RosterTeam {
                id: t.id,
                name: directory.name_or_placeholder(t.id),
                abbrev: label.map(|l| l.abbrev.clone()).or_else(|| t.abbrev.clone()),
                owner: label
                    .map(|l| l.owner.clone())
                    .unwrap_or_else(|| "Unknown Owner".to_string()),
                roster: t.roster_entries().iter().map(roster_player).collect(),
            }
        })
        .collect()
}

fn roster_player(entry: &RosterEntry) -> RosterPlayer {
    let player = entry.player();
    let position_id = player.and_then(|p| p.default_position_id);
    let pro_team_id = player.and_then(|p| p.pro_team_id);

    RosterPlayer {
        player_id: entry.player_id,
        full_name: player.and_then(|p| p.full_name.clone()),
        default_position_id: position_id,
        position: position_name(position_id),
        pro_team_id,
        pro_team_abbrev: pro_team_abbrev(pro_team_id),
        lineup_slot_id: entry.lineup_slot_id,
        lineup_slot: lineup_slot_name(entry.lineup_slot_id),
    }
}

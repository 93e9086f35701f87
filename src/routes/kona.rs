use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    response::Json,
};

use crate::error::ApiError;
use crate::mappings::{position_name, pro_team_abbrev, pro_team_name, TeamDirectory};
use crate::models::espn::{League, PlayerPoolEntry};
use crate::models::{PlayerRow, RosterStatus};
use crate::routes::{current_season, parse_lenient, QueryParams};
use crate::state::AppState;

const DEFAULT_LIMIT: u32 = 1000;
const MAX_LIMIT: u32 = 2000;

#[derive(Debug, Default)]
pub struct KonaQuery {
    season: Option<String>,
    limit: Option<String>,
}

impl<S> FromRequestParts<S> for KonaQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = QueryParams::from_uri(&parts.uri);
        Ok(KonaQuery {
            season: params.first("season"),
            limit: params.first("limit"),
        })
    }
}

impl KonaQuery {
    fn season(&self) -> i32 {
        parse_lenient(self.season.as_deref()).unwrap_or_else(current_season)
    }

    fn limit(&self) -> u32 {
        parse_lenient(self.limit.as_deref())
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT)
    }
}

/// GET /api/kona - Player catalog with fantasy ownership
///
/// Free agents come first, then players are ordered by name.
pub async fn get_players(
    State(state): State<AppState>,
    params: KonaQuery,
) -> Result<Json<Vec<PlayerRow>>, ApiError> {
    let season = params.season();
    let (meta, catalog) = tokio::try_join!(
        state.espn.fetch_team_metadata(season),
        state.espn.fetch_players(season, params.limit()),
    )?;

    tracing::debug!("Fetched {} players for season {}", catalog.players.len(), season);

    Ok(Json(player_rows(season, &catalog, &TeamDirectory::from_league(&meta))))
}

pub fn player_rows(season: i32, catalog: &League, directory: &TeamDirectory) -> Vec<PlayerRow> {
    let mut rows: Vec<PlayerRow> = catalog
        .players
        .iter()
        .map(|entry| player_row(season, entry, directory))
        .collect();

    rows.sort_by_cached_key(|r| {
        (
            r.roster_status,
            r.full_name.as_deref().unwrap_or("").to_lowercase(),
        )
    });
    rows
}

fn player_row(season: i32, entry: &PlayerPoolEntry, directory: &TeamDirectory) -> PlayerRow {
    let player = entry.player.clone().unwrap_or_default();
    // The provider reports free agents with onTeamId 0
    let on_team_id = entry.on_team_id.filter(|id| *id != 0);
    let team = on_team_id.and_then(|id| directory.get(id));

    PlayerRow {
        season,
        player_id: player.id,
        position_id: player.default_position_id,
        position: position_name(player.default_position_id),
        pro_team_id: player.pro_team_id,
        pro_team_name: pro_team_name(player.pro_team_id),
        pro_team_abbrev: pro_team_abbrev(player.pro_team_id),
        injury_status: player
            .injury_status
            .or(player.status)
            .unwrap_or_else(|| "ACTIVE".to_string()),
        active: player.active,
        roster_status: match on_team_id {
            Some(_) => RosterStatus::Rostered,
            None => RosterStatus::FreeAgent,
        },
        on_team_id,
        on_team_name: team.map(|t| t.name.clone()),
        on_team_abbrev: team.map(|t| t.abbrev.clone()),
        full_name: player.full_name,
        first_name: player.first_name,
        last_name: player.last_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory() -> TeamDirectory {
        TeamDirectory::from_league(
            &serde_json::from_value(json!({
                "teams": [ { "id": 4, "name": "Dynasty", "abbrev": "DYN" } ]
            }))
            .unwrap(),
        )
    }

    fn catalog() -> League {
        serde_json::from_value(json!({ "players": [
            { "onTeamId": 4, "player": {
                "id": 1, "fullName": "Aaron Ace", "defaultPositionId": 1,
                "proTeamId": 9, "injuryStatus": "QUESTIONABLE", "active": true } },
            { "onTeamId": 0, "player": {
                "id": 2, "fullName": "zed Zulu", "defaultPositionId": 3, "proTeamId": 2 } },
            { "player": {
                "id": 3, "fullName": "Bo Bench", "defaultPositionId": 16,
                "proTeamId": 0, "status": "FREEAGENT" } },
            { "onTeamId": 4, "player": { "id": 4, "fullName": "Abe Able" } }
        ] }))
        .unwrap()
    }

    #[test]
    fn free_agents_sort_first_then_by_name() {
        let rows = player_rows(2025, &catalog(), &directory());
        let order: Vec<i64> = rows.iter().map(|r| r.player_id).collect();

        assert_eq!(order, vec![3, 2, 1, 4]);
    }

    #[test]
    fn rows_resolve_ownership_and_lookups() {
        let rows = player_rows(2025, &catalog(), &directory());
        let ace = rows.iter().find(|r| r.player_id == 1).unwrap();
        let zed = rows.iter().find(|r| r.player_id == 2).unwrap();
        let bo = rows.iter().find(|r| r.player_id == 3).unwrap();

        assert_eq!(ace.roster_status, RosterStatus::Rostered);
        assert_eq!(ace.on_team_name.as_deref(), Some("Dynasty"));
        assert_eq!(ace.on_team_abbrev.as_deref(), Some("DYN"));
        assert_eq!(ace.pro_team_abbrev, Some("GB"));
        assert_eq!(ace.injury_status, "QUESTIONABLE");

        assert_eq!(zed.roster_status, RosterStatus::FreeAgent);
        assert_eq!(zed.on_team_id, None);
        assert_eq!(zed.injury_status, "ACTIVE");
        assert_eq!(zed.position, "WR");

        assert_eq!(bo.injury_status, "FREEAGENT");
        assert_eq!(bo.position, "D/ST");
        assert_eq!(bo.pro_team_name, Some("Free Agent"));
    }

    #[test]
    fn roster_status_serializes_screaming_case() {
        let rows = player_rows(2025, &catalog(), &directory());
        let value = serde_json::to_value(&rows[0]).unwrap();

        assert_eq!(value["rosterStatus"], "FREE_AGENT");
        assert_eq!(value["onTeamName"], serde_json::Value::Null);
        assert_eq!(value["season"], 2025);
    }

    #[test]
    fn limit_is_clamped() {
        let q = |v: &str| KonaQuery { season: None, limit: Some(v.to_string()) };
        assert_eq!(q("50").limit(), 50);
        assert_eq!(q("0").limit(), 1);
        assert_eq!(q("99999").limit(), 2000);
        assert_eq!(q("many").limit(), 1000);
    }
}

use axum::{
    extract::State,
    response::Json,
};

use crate::error::ApiError;
use crate::espn::View;
use crate::mappings::TeamDirectory;
use crate::models::espn::{League, MatchupSide, RosterEntry};
use crate::models::ScoreboardRow;
use crate::routes::SeasonQuery;
use crate::scoring::{self, round1};
use crate::state::AppState;

/// Label used for the missing side of a bye week.
const BYE: &str = "BYE";

/// GET /api/scoreboard - Live and projected scores for every matchup
///
/// Query params:
/// - season: defaults to the current year
/// - week: keep only matchups of this matchup period
///
/// Team metadata, matchup scores and rosters are fetched in parallel. Rosters
/// only refine the estimates, so a failed roster fetch is logged and ignored.
pub async fn get_scoreboard(
    State(state): State<AppState>,
    params: SeasonQuery,
) -> Result<Json<Vec<ScoreboardRow>>, ApiError> {
    let season = params.season();
    let (meta, scores, rosters) = tokio::join!(
        state.espn.fetch_team_metadata(season),
        state.espn.fetch_view(season, View::MatchupScore),
        state.espn.fetch_view(season, View::Roster),
    );
    let (meta, scores) = (meta?, scores?);

    let rosters = match rosters {
        Ok(rosters) => Some(rosters),
        Err(e) => {
            tracing::warn!("Could not fetch rosters for projections: {}", e);
            None
        }
    };

    let directory = TeamDirectory::from_league(&meta);
    Ok(Json(scoreboard_rows(
        &scores,
        &directory,
        rosters.as_ref(),
        params.week(),
    )))
}

pub fn scoreboard_rows(
    scores: &League,
    directory: &TeamDirectory,
    rosters: Option<&League>,
    week: Option<i64>,
) -> Vec<ScoreboardRow> {
    let mut rows: Vec<ScoreboardRow> = scores
        .schedule
        .iter()
        .filter(|m| week.is_none() || m.matchup_period_id == week)
        .map(|m| {
            let w = m.matchup_period_id.unwrap_or(0);
            let away = side_line(m.away.as_ref(), w, rosters, directory);
            let home = side_line(m.home.as_ref(), w, rosters, directory);
            ScoreboardRow {
                w,
                t1: away.name,
                s1: away.score,
                p1: away.projected,
                y1: away.yet_to_play,
                c1: away.currently_playing,
                m1: away.minutes_left,
                t2: home.name,
                s2: home.score,
                p2: home.projected,
                y2: home.yet_to_play,
                c2: home.currently_playing,
                m2: home.minutes_left,
            }
        })
        .collect();

    // Stable, so matchups keep provider order within a week
    rows.sort_by_key(|r| r.w);
    rows
}

/// Display values for one side of a matchup.
#[derive(Debug, PartialEq)]
struct SideLine {
    name: String,
    score: f64,
    projected: f64,
    yet_to_play: i64,
    currently_playing: i64,
    minutes_left: f64,
}

impl SideLine {
    fn bye() -> Self {
        SideLine {
            name: BYE.to_string(),
            score: 0.0,
            projected: 0.0,
            yet_to_play: 0,
            currently_playing: 0,
            minutes_left: 0.0,
        }
    }
}

/// Roster for the side: the one attached to the matchup when it belongs to
/// this week, otherwise the team's current roster.
fn side_roster<'a>(
    side: &'a MatchupSide,
    week: i64,
    rosters: Option<&'a League>,
) -> &'a [RosterEntry] {
    let entries = side.roster_for_week(week);
    if !entries.is_empty() {
        return entries;
    }
    rosters
        .and_then(|r| r.team(side.team_id))
        .map(|t| t.roster_entries())
        .unwrap_or(&[])
}

fn count_or_len(count: Option<i64>, ids: &[i64]) -> i64 {
    count.filter(|n| *n != 0).unwrap_or(ids.len() as i64)
}

fn side_line(
    side: Option<&MatchupSide>,
    week: i64,
    rosters: Option<&League>,
    directory: &TeamDirectory,
) -> SideLine {
    let Some(side) = side else {
        return SideLine::bye();
    };

    let mut score = side.total_points.unwrap_or(0.0);
    let mut projected = side
        .total_projected_points_live
        .filter(|p| *p != 0.0)
        .or(side.total_projected_points.filter(|p| *p != 0.0));
    let mut yet_to_play = count_or_len(side.players_yet_to_play, &side.player_ids_yet_to_play);
    let mut currently_playing = count_or_len(
        side.players_currently_playing,
        &side.player_ids_currently_playing,
    );
    let mut minutes_left = side.minutes_remaining.unwrap_or(0.0);

    let entries = side_roster(side, week, rosters);
    if !entries.is_empty() {
        let live = scoring::current_score(entries, week);
        if live > 0.0 && live > score {
            score = live;
        }

        let estimate = scoring::projected_total(entries, week, score);
        if estimate > score && projected.is_none_or(|p| estimate > p) {
            projected = Some(estimate);
        }

        let status = scoring::player_status(entries, week);
        if status.yet_to_play > 0 {
            yet_to_play = status.yet_to_play;
        }
        if status.currently_playing > 0 {
            currently_playing = status.currently_playing;
        }
        if status.minutes_left > 0.0 {
            minutes_left = status.minutes_left;
        }
    }

    SideLine {
        name: directory.name_or_placeholder(side.team_id),
        score: round1(score),
        projected: round1(projected.unwrap_or(score)),
        yet_to_play,
        currently_playing,
        minutes_left,
    }
}

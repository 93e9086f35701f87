use serde::Serialize;

pub mod espn;

/// Row for GET /api/teams
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    pub team_id: i64,
    pub team_name: String,
    pub abbrev: Option<String>,
    pub owner: Option<String>,
    pub owner_name: String,
    pub playoff_seed: Option<i64>,
    pub points_for: Option<f64>,
    pub points_against: Option<f64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: Option<i64>,
    pub pct: Option<f64>,
}

/// Row for GET /api/standings
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub team_id: i64,
    pub team_name: String,
    pub abbrev: Option<String>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: Option<i64>,
    pub pct: Option<f64>,
    pub points_for: Option<f64>,
    pub points_against: Option<f64>,
}

/// Row for GET /api/standingsfull, built from the provider's season simulation
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedStandingRow {
    pub team_id: i64,
    pub team_name: String,
    pub abbrev: Option<String>,
    pub rank: Option<i64>,
    pub playoff_pct: Option<f64>,
    pub division_win_pct: Option<f64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: Option<i64>,
    pub streak_type: Option<String>,
    pub streak_length: Option<i64>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub matchup_index: usize,
    pub matchup_period_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub away_team_name: String,
    pub away_abbrev: String,
    pub away_points: Option<f64>,
    pub home_team_id: Option<i64>,
    pub home_team_name: String,
    pub home_abbrev: String,
    pub home_points: Option<f64>,
}

/// Response for GET /api/roster
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub season: i32,
    pub league_id: i64,
    pub teams: Vec<RosterTeam>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterTeam {
    pub id: i64,
    pub name: String,
    pub abbrev: Option<String>,
    pub owner: String,
    pub roster: Vec<RosterPlayer>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub player_id: i64,
    pub full_name: Option<String>,
    pub default_position_id: Option<i64>,
    pub position: &'static str,
    pub pro_team_id: Option<i64>,
    pub pro_team_abbrev: Option<&'static str>,
    pub lineup_slot_id: i64,
    pub lineup_slot: &'static str,
}

/// One matchup on the scoreboard. Side 1 is away, side 2 is home.
///
/// Keys are kept short on purpose: the frontend ticker consumes them as-is.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScoreboardRow {
    pub w: i64,
    pub t1: String,
    pub s1: f64,
    pub p1: f64,
    pub y1: i64,
    pub c1: i64,
    pub m1: f64,
    pub t2: String,
    pub s2: f64,
    pub p2: f64,
    pub y2: i64,
    pub c2: i64,
    pub m2: f64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Away,
    Home,
}

/// Row for GET /api/history, one per team per matchup.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub season: i32,
    pub week: i64,
    pub matchup_id: usize,
    pub team_id: i64,
    pub team_name: String,
    pub team_abbrev: String,
    pub location: Location,
    pub opponent_team_id: i64,
    pub opponent_team_name: String,
    pub opponent_team_abbrev: String,
    pub points_for: f64,
    pub points_against: f64,
    pub opponent_points: f64,
    pub point_diff: f64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RosterStatus {
    FreeAgent,
    Rostered,
}

/// Row for GET /api/kona, the league-wide player catalog.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub season: i32,
    pub player_id: i64,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position_id: Option<i64>,
    pub position: &'static str,
    pub pro_team_id: Option<i64>,
    pub pro_team_name: Option<&'static str>,
    pub pro_team_abbrev: Option<&'static str>,
    pub injury_status: String,
    pub active: Option<bool>,
    pub roster_status: RosterStatus,
    pub on_team_id: Option<i64>,
    pub on_team_name: Option<String>,
    pub on_team_abbrev: Option<String>,
}

//! Wire shapes for the ESPN fantasy league API.
//!
//! Every struct defaults missing fields so partial views (`mTeam`,
//! `mRoster`, `mMatchupScore`, ...) decode into the same `League` type.

use serde::Deserialize;

/// Stat source ids used in `player.stats[]`.
pub const STAT_SOURCE_ACTUAL: i64 = 0;
pub const STAT_SOURCE_PROJECTED: i64 = 1;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct League {
    pub members: Vec<Member>,
    pub teams: Vec<Team>,
    pub schedule: Vec<Matchup>,
    /// Only present for the `kona_player_info` view.
    pub players: Vec<PlayerPoolEntry>,
}

impl League {
    pub fn team(&self, team_id: i64) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: i64,
    pub abbrev: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub nickname: Option<String>,
    pub owners: Vec<String>,
    pub playoff_seed: Option<i64>,
    pub points: Option<f64>,
    pub record: Option<TeamRecord>,
    pub current_simulation_results: Option<SimulationResults>,
    pub roster: Option<Roster>,
}

impl Team {
    pub fn overall_record(&self) -> RecordLine {
        self.record
            .as_ref()
            .map(|r| r.overall.clone())
            .unwrap_or_default()
    }

    pub fn roster_entries(&self) -> &[RosterEntry] {
        self.roster.as_ref().map(|r| r.entries.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamRecord {
    pub overall: RecordLine,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordLine {
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: Option<i64>,
    pub percentage: Option<f64>,
    pub points_for: Option<f64>,
    pub points_against: Option<f64>,
    pub streak_type: Option<String>,
    pub streak_length: Option<i64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationResults {
    pub rank: Option<i64>,
    pub playoff_pct: Option<f64>,
    pub division_win_pct: Option<f64>,
    pub mode_record: Option<RecordLine>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Matchup {
    pub matchup_period_id: Option<i64>,
    pub away: Option<MatchupSide>,
    /// Absent for bye weeks.
    pub home: Option<MatchupSide>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchupSide {
    pub team_id: i64,
    pub total_points: Option<f64>,
    pub total_projected_points: Option<f64>,
    pub total_projected_points_live: Option<f64>,
    pub roster_for_matchup_period_id: Option<i64>,
    pub roster_for_current_scoring_period: Option<Roster>,
    pub roster: Option<Roster>,
    pub players_currently_playing: Option<i64>,
    pub player_ids_currently_playing: Vec<i64>,
    pub players_yet_to_play: Option<i64>,
    pub player_ids_yet_to_play: Vec<i64>,
    pub minutes_remaining: Option<f64>,
}

impl MatchupSide {
    /// Roster entries the provider attached for the given matchup period.
    pub fn roster_for_week(&self, week: i64) -> &[RosterEntry] {
        if self.roster_for_matchup_period_id != Some(week) {
            return &[];
        }
        self.roster
            .as_ref()
            .or(self.roster_for_current_scoring_period.as_ref())
            .map(|r| r.entries.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterEntry {
    pub player_id: i64,
    pub lineup_slot_id: i64,
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

impl RosterEntry {
    pub fn player(&self) -> Option<&Player> {
        self.player_pool_entry.as_ref()?.player.as_ref()
    }
}

/// Entry in `mRoster` (`playerPoolEntry`) and in `kona_player_info` (`players[]`).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPoolEntry {
    pub on_team_id: Option<i64>,
    pub player: Option<Player>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: i64,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub default_position_id: Option<i64>,
    pub pro_team_id: Option<i64>,
    pub injury_status: Option<String>,
    pub status: Option<String>,
    pub active: Option<bool>,
    pub stats: Vec<StatLine>,
}

impl Player {
    fn stat(&self, week: i64, source: i64) -> Option<&StatLine> {
        self.stats
            .iter()
            .find(|s| s.scoring_period_id == week && s.stat_source_id == source)
    }

    /// Actual stat line for the scoring period, present once the player has played.
    pub fn actual(&self, week: i64) -> Option<&StatLine> {
        self.stat(week, STAT_SOURCE_ACTUAL)
    }

    pub fn projection(&self, week: i64) -> Option<&StatLine> {
        self.stat(week, STAT_SOURCE_PROJECTED)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    pub scoring_period_id: i64,
    pub stat_source_id: i64,
    pub applied_total: Option<f64>,
    pub projected_total: Option<f64>,
}

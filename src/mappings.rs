//! Lookup tables for ESPN ids and team display names.

use std::collections::HashMap;

use crate::models::espn::{League, Member, Team};

/// Lineup slots counted toward a team's score: QB, RB, WR, TE, D/ST, K, FLEX, ER.
pub const STARTING_SLOTS: [i64; 8] = [0, 2, 4, 6, 16, 17, 23, 24];

pub fn is_starting_slot(lineup_slot_id: i64) -> bool {
    STARTING_SLOTS.contains(&lineup_slot_id)
}

/// (id, abbreviation, name) for every NFL team ESPN assigns a `proTeamId` to.
const PRO_TEAMS: &[(i64, &str, &str)] = &[
    (0, "FA", "Free Agent"),
    (1, "ATL", "Atlanta Falcons"),
    (2, "BUF", "Buffalo Bills"),
    (3, "CHI", "Chicago Bears"),
    (4, "CIN", "Cincinnati Bengals"),
    (5, "CLE", "Cleveland Browns"),
    (6, "DAL", "Dallas Cowboys"),
    (7, "DEN", "Denver Broncos"),
    (8, "DET", "Detroit Lions"),
    (9, "GB", "Green Bay Packers"),
    (10, "TEN", "Tennessee Titans"),
    (11, "IND", "Indianapolis Colts"),
    (12, "KC", "Kansas City Chiefs"),
    (13, "LV", "Las Vegas Raiders"),
    (14, "LAR", "Los Angeles Rams"),
    (15, "MIA", "Miami Dolphins"),
    (16, "MIN", "Minnesota Vikings"),
    (17, "NE", "New England Patriots"),
    (18, "NO", "New Orleans Saints"),
    (19, "NYG", "New York Giants"),
    (20, "NYJ", "New York Jets"),
    (21, "PHI", "Philadelphia Eagles"),
    (22, "ARI", "Arizona Cardinals"),
    (23, "PIT", "Pittsburgh Steelers"),
    (24, "LAC", "Los Angeles Chargers"),
    (25, "SF", "San Francisco 49ers"),
    (26, "SEA", "Seattle Seahawks"),
    (27, "TB", "Tampa Bay Buccaneers"),
    (28, "WSH", "Washington Commanders"),
    (29, "CAR", "Carolina Panthers"),
    (30, "JAX", "Jacksonville Jaguars"),
    (33, "BAL", "Baltimore Ravens"),
    (34, "HOU", "Houston Texans"),
];

fn pro_team(pro_team_id: Option<i64>) -> Option<&'static (i64, &'static str, &'static str)> {
    let id = pro_team_id?;
    PRO_TEAMS.iter().find(|(team_id, _, _)| *team_id == id)
}

pub fn pro_team_abbrev(pro_team_id: Option<i64>) -> Option<&'static str> {
    pro_team(pro_team_id).map(|(_, abbrev, _)| *abbrev)
}

pub fn pro_team_name(pro_team_id: Option<i64>) -> Option<&'static str> {
    pro_team(pro_team_id).map(|(_, _, name)| *name)
}

/// Name for a player's `defaultPositionId`.
pub fn position_name(position_id: Option<i64>) -> &'static str {
    match position_id {
        Some(1) => "QB",
        Some(2) => "RB",
        Some(3) => "WR",
        Some(4) => "TE",
        Some(5) => "K",
        Some(7) => "P",
        Some(9) => "DT",
        Some(10) => "DE",
        Some(11) => "LB",
        Some(12) => "CB",
        Some(13) => "S",
        Some(14) => "HC",
        Some(16) => "D/ST",
        _ => "UNKNOWN",
    }
}

pub fn lineup_slot_name(lineup_slot_id: i64) -> &'static str {
    match lineup_slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => "BE",
        21 => "IR",
        23 => "FLEX",
        24 => "ER",
        _ => "UNKNOWN",
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn first_owner<'a>(team: &Team, members: &'a [Member]) -> Option<&'a Member> {
    let owner_id = team.owners.first()?;
    members.iter().find(|m| &m.id == owner_id)
}

pub fn owner_name(team: &Team, members: &[Member]) -> String {
    first_owner(team, members)
        .and_then(|m| non_empty(m.display_name.as_deref()))
        .unwrap_or("Unknown Owner")
        .to_string()
}

/// Display name for a fantasy team.
///
/// Falls through the team's own name, "location nickname", the first owner's
/// display name, the abbreviation, and finally `Team {id}`.
pub fn team_name(team: &Team, members: &[Member]) -> String {
    if let Some(name) = non_empty(team.name.as_deref()) {
        return name.to_string();
    }

    let joined = format!(
        "{} {}",
        team.location.as_deref().unwrap_or(""),
        team.nickname.as_deref().unwrap_or("")
    );
    if let Some(name) = non_empty(Some(joined.as_str())) {
        return name.to_string();
    }

    first_owner(team, members)
        .and_then(|m| non_empty(m.display_name.as_deref()))
        .or_else(|| non_empty(team.abbrev.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Team {}", team.id))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamLabel {
    pub name: String,
    pub abbrev: String,
    pub owner: String,
}

/// teamId -> resolved labels, built once per request from a team metadata view.
#[derive(Debug, Default, Clone)]
pub struct TeamDirectory {
    teams: HashMap<i64, TeamLabel>,
}

impl TeamDirectory {
    pub fn from_league(league: &League) -> Self {
        let teams = league
            .teams
            .iter()
            .map(|team| {
                let label = TeamLabel {
                    name: team_name(team, &league.members),
                    abbrev: team.abbrev.clone().unwrap_or_default(),
                    owner: owner_name(team, &league.members),
                };
                (team.id, label)
            })
            .collect();

        TeamDirectory { teams }
    }

    pub fn get(&self, team_id: i64) -> Option<&TeamLabel> {
        self.teams.get(&team_id)
    }

    /// Name for a team id, `Team {id}` when the id is unknown.
    pub fn name_or_placeholder(&self, team_id: i64) -> String {
        self.get(team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {}", team_id))
    }

    pub fn abbrev(&self, team_id: i64) -> String {
        self.get(team_id).map(|t| t.abbrev.clone()).unwrap_or_default()
    }
}

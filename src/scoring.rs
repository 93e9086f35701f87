//! Live and projected score estimates from roster entries.
//!
//! The provider's matchup totals lag behind during game windows, so the
//! scoreboard recomputes them from each starter's stat lines for the week.

use std::collections::HashSet;

use crate::mappings::is_starting_slot;
use crate::models::espn::{Player, RosterEntry};

/// Minutes assumed left for a starter who has not played yet.
const MINUTES_PER_PENDING_PLAYER: f64 = 60.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerStatus {
    pub yet_to_play: i64,
    pub currently_playing: i64,
    pub minutes_left: f64,
}

/// Players in starting slots, first occurrence of each player id only.
pub fn starters(entries: &[RosterEntry]) -> Vec<&Player> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| is_starting_slot(e.lineup_slot_id))
        .filter_map(|e| e.player())
        .filter(|p| seen.insert(p.id))
        .collect()
}

pub fn current_score(entries: &[RosterEntry], week: i64) -> f64 {
    starters(entries)
        .into_iter()
        .filter_map(|p| p.actual(week))
        .map(|s| s.applied_total.unwrap_or(0.0))
        .sum()
}

/// Actual points for starters who have played plus projections for the rest.
///
/// Falls back to `current` when nothing positive can be summed.
pub fn projected_total(entries: &[RosterEntry], week: i64, current: f64) -> f64 {
    let projected: f64 = starters(entries)
        .into_iter()
        .map(|p| match (p.actual(week), p.projection(week)) {
            (Some(actual), _) => actual.applied_total.unwrap_or(0.0),
            (None, Some(projection)) => projection
                .projected_total
                .filter(|p| *p != 0.0)
                .or(projection.applied_total)
                .unwrap_or(0.0),
            (None, None) => 0.0,
        })
        .sum();

    if projected > 0.0 { projected } else { current }
}

pub fn player_status(entries: &[RosterEntry], week: i64) -> PlayerStatus {
    let mut status = PlayerStatus::default();

    for player in starters(entries) {
        match (player.actual(week), player.projection(week)) {
            (None, Some(_)) => {
                status.yet_to_play += 1;
                status.minutes_left += MINUTES_PER_PENDING_PLAYER;
            }
            (Some(actual), Some(projection)) => {
                let actual_points = actual.applied_total.unwrap_or(0.0);
                let projected_points = projection.projected_total.unwrap_or(0.0);
                // Still short of the projection: assume the game is in progress.
                if projected_points > actual_points {
                    status.currently_playing += 1;
                }
            }
            _ => {}
        }
    }

    status
}

/// Rounds to one decimal, halves toward positive infinity.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::espn::{PlayerPoolEntry, StatLine, STAT_SOURCE_ACTUAL, STAT_SOURCE_PROJECTED};

    const WEEK: i64 = 5;

    fn stat(source: i64, applied: Option<f64>, projected: Option<f64>) -> StatLine {
        StatLine {
            scoring_period_id: WEEK,
            stat_source_id: source,
            applied_total: applied,
            projected_total: projected,
            ..Default::default()
        }
    }

    fn entry(player_id: i64, slot: i64, stats: Vec<StatLine>) -> RosterEntry {
        RosterEntry {
            player_id,
            lineup_slot_id: slot,
            player_pool_entry: Some(PlayerPoolEntry {
                player: Some(Player {
                    id: player_id,
                    stats,
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }
    }

    fn played(player_id: i64, slot: i64, actual: f64, projected: f64) -> RosterEntry {
        entry(
            player_id,
            slot,
            vec![
                stat(STAT_SOURCE_ACTUAL, Some(actual), None),
                stat(STAT_SOURCE_PROJECTED, None, Some(projected)),
            ],
        )
    }

    fn pending(player_id: i64, slot: i64, projected: f64) -> RosterEntry {
        entry(player_id, slot, vec![stat(STAT_SOURCE_PROJECTED, None, Some(projected))])
    }

    #[test]
    fn current_score_counts_starters_only() {
        let roster = vec![
            played(1, 0, 20.5, 18.0),
            played(2, 2, 10.0, 12.0),
            played(3, 20, 30.0, 10.0), // bench
            played(4, 21, 5.0, 5.0),   // IR
            pending(5, 4, 14.0),
        ];

        assert_eq!(current_score(&roster, WEEK), 30.5);
    }

    #[test]
    fn duplicate_players_are_counted_once() {
        let roster = vec![played(1, 0, 20.0, 18.0), played(1, 23, 20.0, 18.0)];

        assert_eq!(starters(&roster).len(), 1);
        assert_eq!(current_score(&roster, WEEK), 20.0);
    }

    #[test]
    fn entries_without_player_are_skipped() {
        let roster = vec![
            RosterEntry {
                player_id: 9,
                lineup_slot_id: 0,
                player_pool_entry: None,
            },
            played(1, 2, 7.0, 9.0),
        ];

        assert_eq!(current_score(&roster, WEEK), 7.0);
    }

    #[test]
    fn projection_mixes_actual_and_projected() {
        let roster = vec![
            played(1, 0, 20.0, 18.0),
            pending(2, 2, 12.5),
            entry(3, 4, vec![stat(STAT_SOURCE_PROJECTED, Some(8.0), None)]),
        ];

        assert_eq!(projected_total(&roster, WEEK, 20.0), 40.5);
    }

    #[test]
    fn projection_falls_back_to_current_score() {
        let roster = vec![entry(1, 0, vec![])];

        assert_eq!(projected_total(&roster, WEEK, 33.3), 33.3);
        assert_eq!(projected_total(&[], WEEK, 0.0), 0.0);
    }

    #[test]
    fn other_weeks_are_ignored() {
        let mut other = stat(STAT_SOURCE_ACTUAL, Some(99.0), None);
        other.scoring_period_id = WEEK - 1;
        let roster = vec![entry(1, 0, vec![other])];

        assert_eq!(current_score(&roster, WEEK), 0.0);
        assert_eq!(player_status(&roster, WEEK), PlayerStatus::default());
    }

    #[test]
    fn status_counts_pending_and_in_progress() {
        let roster = vec![
            pending(1, 0, 15.0),
            pending(2, 2, 9.0),
            played(3, 4, 4.0, 11.0),  // behind projection
            played(4, 6, 14.0, 8.0),  // finished above projection
            pending(5, 20, 10.0),     // bench
        ];

        let status = player_status(&roster, WEEK);
        assert_eq!(status.yet_to_play, 2);
        assert_eq!(status.currently_playing, 1);
        assert_eq!(status.minutes_left, 120.0);
    }

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(round1(101.26), 101.3);
        assert_eq!(round1(99.94), 99.9);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(-3.04), -3.0);
    }

    #[test]
    fn negative_halves_round_up() {
        assert_eq!(round1(-2.25), -2.2);
        assert_eq!(round1(2.25), 2.3);
    }

    #[test]
    fn zero_projected_total_uses_applied_total() {
        let roster = vec![entry(1, 0, vec![stat(STAT_SOURCE_PROJECTED, Some(6.5), Some(0.0))])];

        assert_eq!(projected_total(&roster, WEEK, 0.0), 6.5);
    }
}

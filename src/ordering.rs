//! Display ordering for fixtures and standings.
//!
//! All sorts here are stable: entries that compare equal keep the order in
//! which the API returned them.

use std::cmp::Reverse;

use itertools::Itertools;
use serde::Serialize;

use crate::model::{League, Match, MatchStatus, Team};

impl MatchStatus {
    /// Position of the status in the match list, lowest first.
    ///
    /// Postponed fixtures follow scheduled ones and unrecognized codes go last.
    pub const fn rank(self) -> u8 {
        match self {
            MatchStatus::Completed => 0,
            MatchStatus::Live => 1,
            MatchStatus::Pause => 2,
            MatchStatus::Scheduled => 3,
            MatchStatus::Postponed => 4,
            MatchStatus::Unknown => 5,
        }
    }
}

/// Fixtures split into the groups shown on the match screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchBoard {
    /// Fixtures currently in play, shown above everything else.
    pub live: Vec<Match>,
    /// Every other fixture, in ranked order.
    pub others: Vec<Match>,
}

impl MatchBoard {
    pub fn len(&self) -> usize {
        self.live.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.others.is_empty()
    }
}

/// Sort fixtures by status rank.
pub fn sort_matches(matches: Vec<Match>) -> Vec<Match> {
    matches
        .into_iter()
        .sorted_by_key(|m| m.status.rank())
        .collect()
}

/// Move live fixtures into their own group.
pub fn partition_live(matches: Vec<Match>) -> MatchBoard {
    let (live, others): (Vec<_>, Vec<_>) = matches
        .into_iter()
        .partition(|m| m.status == MatchStatus::Live);
    MatchBoard { live, others }
}

/// Sort, then partition.
pub fn order_matches(matches: Vec<Match>) -> MatchBoard {
    partition_live(sort_matches(matches))
}

/// Sort teams by points, highest first. Equal points keep payload order.
pub fn sort_standings(teams: Vec<Team>) -> Vec<Team> {
    teams
        .into_iter()
        .sorted_by_key(|t| Reverse(t.points))
        .collect()
}

/// The current league is the last one in the payload.
pub fn select_current_league(leagues: Vec<League>) -> Option<League> {
    leagues.into_iter().last()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::EntityId;

    fn fixture(id: u64, status: MatchStatus) -> Match {
        Match {
            id: EntityId::from(id),
            home: format!("Home {id}"),
            away: format!("Away {id}"),
            score_team_one: Some(0),
            score_team_two: Some(0),
            status,
            date_time: Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
        }
    }

    fn team(name: &str, points: u32) -> Team {
        Team {
            id: EntityId::from(name),
            name: name.to_string(),
            points,
        }
    }

    fn league(name: &str) -> League {
        League {
            id: None,
            name: name.to_string(),
            year: "2024".to_string(),
            teams: vec![],
        }
    }

    fn ids(matches: &[Match]) -> Vec<String> {
        matches.iter().map(|m| m.id.to_string()).collect()
    }

    #[test]
    fn test_sort_is_stable_within_status() {
        let sorted = sort_matches(vec![
            fixture(1, MatchStatus::Completed),
            fixture(2, MatchStatus::Live),
            fixture(3, MatchStatus::Completed),
        ]);
        assert_eq!(ids(&sorted), ["1", "3", "2"]);
    }

    #[test]
    fn test_sort_follows_rank_table() {
        let sorted = sort_matches(vec![
            fixture(1, MatchStatus::Unknown),
            fixture(2, MatchStatus::Scheduled),
            fixture(3, MatchStatus::Postponed),
            fixture(4, MatchStatus::Pause),
            fixture(5, MatchStatus::Live),
            fixture(6, MatchStatus::Completed),
            fixture(7, MatchStatus::Unknown),
        ]);
        assert_eq!(ids(&sorted), ["6", "5", "4", "2", "3", "1", "7"]);
    }

    #[test]
    fn test_partition_is_complete() {
        let input = vec![
            fixture(1, MatchStatus::Live),
            fixture(2, MatchStatus::Completed),
            fixture(3, MatchStatus::Live),
            fixture(4, MatchStatus::Unknown),
        ];
        let board = partition_live(input.clone());

        assert_eq!(board.len(), input.len());
        assert!(board.live.iter().all(|m| m.status == MatchStatus::Live));
        assert!(board.others.iter().all(|m| m.status != MatchStatus::Live));
        assert_eq!(ids(&board.live), ["1", "3"]);
        assert_eq!(ids(&board.others), ["2", "4"]);
    }

    #[test]
    fn test_order_matches_without_live() {
        let board = order_matches(vec![
            fixture(1, MatchStatus::Scheduled),
            fixture(2, MatchStatus::Completed),
        ]);
        assert!(board.live.is_empty());
        assert_eq!(ids(&board.others), ["2", "1"]);
    }

    #[test]
    fn test_empty_board() {
        let board = order_matches(vec![]);
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn test_standings_descending_and_stable() {
        let sorted = sort_standings(vec![team("A", 10), team("B", 15), team("C", 10)]);
        let names: Vec<_> = sorted.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
        assert!(sorted.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn test_select_last_league() {
        let current = select_current_league(vec![league("L1"), league("L2"), league("L3")]);
        assert_eq!(current.map(|l| l.name), Some("L3".to_string()));
        assert_eq!(select_current_league(vec![]), None);
    }
}

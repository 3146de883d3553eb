//! League statistics over a loaded season.
//!
//! [`StatsService`] owns the match list for the lifetime of the process and
//! derives everything else on demand:
//!
//! - the sorted team list,
//! - the ranked league table,
//! - a single team's record.
//!
//! Every query allocates fresh [`TeamRecord`]s, so a shared `&StatsService`
//! can serve concurrent readers without locking. Table and single-team
//! computations both go through [`TeamRecord::apply`] and cannot diverge.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::error::{StatsError, StatsResult};
use crate::models::{MatchRecord, Side, TeamRecord};

// =============================================================================
// Ranking
// =============================================================================

fn compare_points(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_goal_difference(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.goal_diff.cmp(&a.goal_diff)
}

fn compare_goals_scored(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.goals_for.cmp(&a.goals_for)
}

fn compare_name(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    a.team.cmp(&b.team)
}

/// League ordering: points, then goal difference, then goals scored
/// (all descending), then team name ascending.
///
/// Returns `Less` when `a` ranks above `b`. Only identical names compare equal.
pub fn standings_order(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    compare_points(a, b)
        .then_with(|| compare_goal_difference(a, b))
        .then_with(|| compare_goals_scored(a, b))
        .then_with(|| compare_name(a, b))
}

// =============================================================================
// Service
// =============================================================================

/// Read-only aggregation engine over one season of matches.
#[derive(Debug, Clone, Default)]
pub struct StatsService {
    matches: Vec<MatchRecord>,
}

impl StatsService {
    /// Take ownership of an already validated match list.
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        Self { matches }
    }

    /// The loaded matches, in load order.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Number of loaded matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Distinct team names, sorted ascending.
    pub fn list_teams(&self) -> Vec<String> {
        self.team_names().into_iter().map(str::to_owned).collect()
    }

    /// Whether the name appears as home or away team in any match.
    pub fn has_team(&self, team: &str) -> bool {
        self.matches
            .iter()
            .any(|m| m.home_team == team || m.away_team == team)
    }

    /// Season label(s) present in the data, joined with ", ".
    pub fn season(&self) -> Option<String> {
        let seasons: BTreeSet<&str> = self.matches.iter().map(|m| m.season.as_str()).collect();
        if seasons.is_empty() {
            None
        } else {
            Some(seasons.into_iter().collect::<Vec<_>>().join(", "))
        }
    }

    /// Full league table, ranked by [`standings_order`].
    pub fn compute_league_table(&self) -> Vec<TeamRecord> {
        let names = self.team_names();
        let index: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, i))
            .collect();

        let mut table: Vec<TeamRecord> = names.iter().map(|name| TeamRecord::new(*name)).collect();

        for m in &self.matches {
            // Every name in a match is in the index by construction.
            if let (Some(&home), Some(&away)) = (
                index.get(m.home_team.as_str()),
                index.get(m.away_team.as_str()),
            ) {
                table[home].apply(m, Side::Home);
                table[away].apply(m, Side::Away);
            }
        }

        table.sort_by(standings_order);
        table
    }

    /// One team's record. Exact, case-sensitive name match.
    pub fn get_team_record(&self, team: &str) -> StatsResult<TeamRecord> {
        if !self.has_team(team) {
            return Err(StatsError::TeamNotFound(team.to_string()));
        }

        let mut record = TeamRecord::new(team);
        for m in &self.matches {
            if let Some(side) = m.side_of(team) {
                record.apply(m, side);
            }
        }

        Ok(record)
    }

    fn team_names(&self) -> BTreeSet<&str> {
        self.matches
            .iter()
            .flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()])
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

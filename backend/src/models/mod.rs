//! Domain models for match data and derived standings.
//!
//! - [`MatchRecord`] - One played fixture with both teams' raw statistics
//! - [`MatchResult`] - Full-time or half-time result code (H, A, D)
//! - [`Side`] / [`Outcome`] - A team's role in a match and what it got out of it
//! - [`TeamRecord`] - One team's derived standing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Match Result
// =============================================================================

/// Result of a match (or of its first half).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// Home team won (H)
    #[serde(rename = "H")]
    HomeWin,
    /// Away team won (A)
    #[serde(rename = "A")]
    AwayWin,
    /// Draw (D)
    #[serde(rename = "D")]
    Draw,
}

impl MatchResult {
    /// Parse result from its one-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "H" => Some(Self::HomeWin),
            "A" => Some(Self::AwayWin),
            "D" => Some(Self::Draw),
            _ => None,
        }
    }

    /// Convert to one-letter code.
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::HomeWin => "H",
            Self::AwayWin => "A",
            Self::Draw => "D",
        }
    }

    /// The result implied by a scoreline.
    pub fn from_goals(home: u32, away: u32) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Self::HomeWin,
            std::cmp::Ordering::Less => Self::AwayWin,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }

    /// True for a home or away win.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Self::Draw)
    }
}

// =============================================================================
// Side / Outcome
// =============================================================================

/// Which side of a fixture a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A single team's outcome in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// League points awarded for this outcome.
    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

// =============================================================================
// Match Record
// =============================================================================

/// One played fixture, as loaded from the season file.
///
/// Half-time, shot, foul and card counts are carried through untouched;
/// no aggregate uses them yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecord {
    pub season: String,
    pub date: NaiveDate,

    pub home_team: String,
    pub away_team: String,

    pub full_time_home_goals: u32,
    pub full_time_away_goals: u32,
    pub full_time_result: MatchResult,

    pub half_time_home_goals: u32,
    pub half_time_away_goals: u32,
    pub half_time_result: MatchResult,

    pub home_shots: u32,
    pub away_shots: u32,
    pub home_shots_on_target: u32,
    pub away_shots_on_target: u32,

    pub home_fouls: u32,
    pub away_fouls: u32,

    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,

    pub home_red_cards: u32,
    pub away_red_cards: u32,
}

impl MatchRecord {
    /// Side the team played on, or `None` if it did not take part.
    pub fn side_of(&self, team: &str) -> Option<Side> {
        if self.home_team == team {
            Some(Side::Home)
        } else if self.away_team == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Full-time goals scored by the given side.
    pub fn goals_for(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.full_time_home_goals,
            Side::Away => self.full_time_away_goals,
        }
    }

    /// Full-time goals conceded by the given side.
    pub fn goals_against(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.full_time_away_goals,
            Side::Away => self.full_time_home_goals,
        }
    }

    /// Outcome for the given side, read from the recorded full-time result.
    pub fn outcome_for(&self, side: Side) -> Outcome {
        match (self.full_time_result, side) {
            (MatchResult::Draw, _) => Outcome::Draw,
            (MatchResult::HomeWin, Side::Home) | (MatchResult::AwayWin, Side::Away) => {
                Outcome::Win
            }
            (MatchResult::HomeWin, Side::Away) | (MatchResult::AwayWin, Side::Home) => {
                Outcome::Loss
            }
        }
    }
}

// =============================================================================
// Team Record
// =============================================================================

/// A team's standing, accumulated over the matches it played.
///
/// Holds `played == wins + draws + losses`,
/// `goal_diff == goals_for - goals_against` and `points == 3 * wins + draws`
/// after every [`TeamRecord::apply`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRecord {
    pub team: String,

    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,

    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,

    pub points: u32,
}

impl TeamRecord {
    /// All-zero record for a team.
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }

    /// Fold one match into the record, from the point of view of `side`.
    pub fn apply(&mut self, record: &MatchRecord, side: Side) {
        self.played += 1;
        self.goals_for += record.goals_for(side);
        self.goals_against += record.goals_against(side);

        let outcome = record.outcome_for(side);
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.points += outcome.points();

        self.goal_diff = i64::from(self.goals_for) - i64::from(self.goals_against);
    }
}

// =============================================================================
// Tests
// =============================================================================

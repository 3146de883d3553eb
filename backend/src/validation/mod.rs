//! Consistency checks for loaded match records.
//!
//! The aggregation engine trusts its input, so every row goes through
//! [`validate_match`] at load time. All violations of a record are
//! collected rather than stopping at the first.
//!
//! # Example
//!
//! ```rust,ignore
//! use football_head::validation::validate_match;
//!
//! if let Err(errors) = validate_match(&record) {
//!     for e in errors {
//!         eprintln!("{}", e);
//!     }
//! }
//! ```

use crate::models::{MatchRecord, MatchResult};

/// Highest goal count accepted for one side in one match.
pub const MAX_GOALS: u32 = 99;

/// Highest shot, foul or card count accepted for one side in one match.
pub const MAX_EVENT_COUNT: u32 = 999;

/// Validate one match record.
///
/// # Returns
/// * `Ok(())` if the record is consistent
/// * `Err(Vec<String>)` with every violation found
pub fn validate_match(record: &MatchRecord) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if record.home_team.is_empty() {
        errors.push("home team name is empty".to_string());
    }
    if record.away_team.is_empty() {
        errors.push("away team name is empty".to_string());
    }
    if !record.home_team.is_empty() && record.home_team == record.away_team {
        errors.push(format!("'{}' cannot play itself", record.home_team));
    }

    let goals = [
        ("home full-time goals", record.full_time_home_goals),
        ("away full-time goals", record.full_time_away_goals),
        ("home half-time goals", record.half_time_home_goals),
        ("away half-time goals", record.half_time_away_goals),
    ];
    for (name, value) in goals {
        if value > MAX_GOALS {
            errors.push(format!("{} {} exceed the limit of {}", name, value, MAX_GOALS));
        }
    }

    let events = [
        ("home shots", record.home_shots),
        ("away shots", record.away_shots),
        ("home shots on target", record.home_shots_on_target),
        ("away shots on target", record.away_shots_on_target),
        ("home fouls", record.home_fouls),
        ("away fouls", record.away_fouls),
        ("home yellow cards", record.home_yellow_cards),
        ("away yellow cards", record.away_yellow_cards),
        ("home red cards", record.home_red_cards),
        ("away red cards", record.away_red_cards),
    ];
    for (name, value) in events {
        if value > MAX_EVENT_COUNT {
            errors.push(format!("{} {} exceed the limit of {}", name, value, MAX_EVENT_COUNT));
        }
    }

    let full_time =
        MatchResult::from_goals(record.full_time_home_goals, record.full_time_away_goals);
    if full_time != record.full_time_result {
        errors.push(format!(
            "full-time result '{}' does not match score {}-{}",
            record.full_time_result.to_code(),
            record.full_time_home_goals,
            record.full_time_away_goals
        ));
    }

    let half_time =
        MatchResult::from_goals(record.half_time_home_goals, record.half_time_away_goals);
    if half_time != record.half_time_result {
        errors.push(format!(
            "half-time result '{}' does not match score {}-{}",
            record.half_time_result.to_code(),
            record.half_time_home_goals,
            record.half_time_away_goals
        ));
    }

    if record.half_time_home_goals > record.full_time_home_goals
        || record.half_time_away_goals > record.full_time_away_goals
    {
        errors.push("half-time goals exceed full-time goals".to_string());
    }

    if record.home_shots_on_target > record.home_shots {
        errors.push("home shots on target exceed home shots".to_string());
    }
    if record.away_shots_on_target > record.away_shots {
        errors.push("away shots on target exceed away shots".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check if a match record is consistent.
pub fn is_valid_match(record: &MatchRecord) -> bool {
    validate_match(record).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::fixture;

    #[test]
    fn test_valid_fixture() {
        assert!(is_valid_match(&fixture("Arsenal", "Chelsea", 2, 1)));
        assert!(is_valid_match(&fixture("Arsenal", "Chelsea", 0, 0)));
    }

    #[test]
    fn test_result_must_match_score() {
        let mut m = fixture("Arsenal", "Chelsea", 2, 1);
        m.full_time_result = MatchResult::Draw;
        let errors = validate_match(&m).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("full-time result 'D'"));
    }

    #[test]
    fn test_team_names() {
        let errors = validate_match(&fixture("", "Chelsea", 0, 0)).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("home team")));

        let errors = validate_match(&fixture("Chelsea", "Chelsea", 0, 0)).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("cannot play itself")));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut m = fixture("Arsenal", "Chelsea", 1, 0);
        m.half_time_home_goals = 2;
        m.half_time_result = MatchResult::HomeWin;
        m.away_shots_on_target = 3;
        m.away_shots = 1;
        let errors = validate_match(&m).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_goal_cap() {
        assert!(is_valid_match(&fixture("Arsenal", "Chelsea", MAX_GOALS, 0)));

        let errors = validate_match(&fixture("Arsenal", "Chelsea", u32::MAX, 0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("home full-time goals 4294967295"));
    }

    #[test]
    fn test_event_cap() {
        let mut m = fixture("Arsenal", "Chelsea", 0, 0);
        m.away_fouls = MAX_EVENT_COUNT + 1;
        let errors = validate_match(&m).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("away fouls")));
    }
}

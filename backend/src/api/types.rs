//! Response bodies for the league API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::StatsError;
use crate::models::TeamRecord;

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub total_matches: usize,
    pub version: String,
}

/// `GET /teams`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
    pub count: usize,
}

impl From<Vec<String>> for TeamsResponse {
    fn from(teams: Vec<String>) -> Self {
        Self {
            count: teams.len(),
            teams,
        }
    }
}

/// `GET /league/table`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueTableResponse {
    /// Season label from the data; `None` when no matches are loaded.
    pub season: Option<String>,
    pub table: Vec<TeamRecord>,
    pub team_count: usize,
}

impl LeagueTableResponse {
    pub fn new(season: Option<String>, table: Vec<TeamRecord>) -> Self {
        Self {
            season,
            team_count: table.len(),
            table,
        }
    }
}

/// Error returned by a handler, rendered as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::TeamNotFound(_) => ApiError::not_found(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(error_response(&self.message))).into_response()
    }
}

/// Create an error body
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_not_found_maps_to_404() {
        let err: ApiError = StatsError::TeamNotFound("Leeds".into()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Team 'Leeds' not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_table_response_shape() {
        let response = LeagueTableResponse::new(
            Some("2023/24".into()),
            vec![TeamRecord::new("Arsenal"), TeamRecord::new("Chelsea")],
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["season"], "2023/24");
        assert_eq!(json["team_count"], 2);
        assert_eq!(json["table"][0]["team"], "Arsenal");
        assert_eq!(json["table"][0]["goal_diff"], 0);
    }

    #[test]
    fn test_teams_response_count() {
        let response = TeamsResponse::from(vec!["Arsenal".to_string(), "Burnley".to_string()]);
        assert_eq!(response.count, 2);
    }

    #[test]
    fn test_error_body() {
        assert_eq!(error_response("boom"), json!({ "error": "boom" }));
    }
}

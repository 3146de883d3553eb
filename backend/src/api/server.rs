//! HTTP server for the league API.
//!
//! # API Endpoints
//!
//! | Method | Path                  | Description                          |
//! |--------|-----------------------|--------------------------------------|
//! | GET    | `/health`             | Health check with match count        |
//! | GET    | `/teams`              | Sorted team list                     |
//! | GET    | `/league/table`       | Ranked league table                  |
//! | GET    | `/teams/{team}/stats` | One team's record                    |
//! | GET    | `/api/logs`           | SSE stream for real-time logs        |

use axum::{
    extract::{Path, State},
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_info, log_success, log_warning, LOG_BROADCASTER};
use super::types::{ApiError, HealthResponse, LeagueTableResponse, TeamsResponse};
use crate::error::ServerResult;
use crate::models::TeamRecord;
use crate::stats::StatsService;

/// Shared, read-only handler state.
pub type AppState = Arc<StatsService>;

/// Build the router over a loaded season.
pub fn router(service: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/teams", get(teams))
        .route("/league/table", get(league_table))
        .route("/teams/{team}/stats", get(team_stats))
        .route("/api/logs", get(sse_logs))
        .layer(cors)
        .with_state(service)
}

/// Start the HTTP server
pub async fn start_server(service: StatsService, port: u16) -> ServerResult<()> {
    let team_count = service.list_teams().len();
    let app = router(Arc::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log_success(format!(
        "Football Head API running on http://localhost:{} ({} teams)",
        port, team_count
    ));
    log_info(format!("   GET http://localhost:{}/health", port));
    log_info(format!("   GET http://localhost:{}/teams", port));
    log_info(format!("   GET http://localhost:{}/league/table", port));
    log_info(format!("   GET http://localhost:{}/teams/{{team}}/stats", port));
    log_info(format!("   GET http://localhost:{}/api/logs (SSE)", port));

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(service): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Football Head API is running".to_string(),
        total_matches: service.match_count(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// All teams in the league
async fn teams(State(service): State<AppState>) -> Json<TeamsResponse> {
    log_info("GET /teams");
    Json(TeamsResponse::from(service.list_teams()))
}

/// Full standings
async fn league_table(State(service): State<AppState>) -> Json<LeagueTableResponse> {
    log_info("GET /league/table");
    Json(LeagueTableResponse::new(
        service.season(),
        service.compute_league_table(),
    ))
}

/// One team's record
async fn team_stats(
    State(service): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<TeamRecord>, ApiError> {
    log_info(format!("GET /teams/{}/stats", team));

    if team.is_empty() {
        return Err(ApiError::bad_request("Team name cannot be empty"));
    }

    let record = service.get_team_record(&team).map_err(|e| {
        log_warning(e.to_string());
        ApiError::from(e)
    })?;

    Ok(Json(record))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    // Lagged receivers drop the missed entries and keep streaming.
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let entry = result.ok()?;
        let json = serde_json::to_string(&entry).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::fixture;
    use axum::http::StatusCode;

    fn state() -> AppState {
        Arc::new(StatsService::new(vec![
            fixture("A", "B", 2, 1),
            fixture("B", "C", 0, 0),
            fixture("A", "C", 1, 3),
        ]))
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health(State(state())).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.total_matches, 3);
    }

    #[tokio::test]
    async fn test_teams() {
        let Json(body) = teams(State(state())).await;
        assert_eq!(body.teams, vec!["A", "B", "C"]);
        assert_eq!(body.count, 3);
    }

    #[tokio::test]
    async fn test_league_table() {
        let Json(body) = league_table(State(state())).await;
        assert_eq!(body.season.as_deref(), Some("2023/24"));
        assert_eq!(body.team_count, 3);
        assert_eq!(body.table[0].team, "C");
        assert_eq!(body.table[0].points, 4);
    }

    #[tokio::test]
    async fn test_team_stats_matches_table() {
        let service = state();
        let Json(record) = team_stats(State(service.clone()), Path("A".to_string()))
            .await
            .unwrap();
        let table = service.compute_league_table();
        assert_eq!(Some(&record), table.iter().find(|r| r.team == "A"));
    }

    #[tokio::test]
    async fn test_team_stats_not_found() {
        let err = team_stats(State(state()), Path("NoSuchTeam".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Team 'NoSuchTeam' not found");
    }

    #[tokio::test]
    async fn test_team_stats_empty_name() {
        let err = team_stats(State(state()), Path(String::new()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_season() {
        let service = Arc::new(StatsService::default());
        let Json(body) = league_table(State(service.clone())).await;
        assert!(body.table.is_empty());
        assert_eq!(body.season, None);
        let Json(body) = teams(State(service)).await;
        assert_eq!(body.count, 0);
    }

    mod routes {
        use super::*;
        use axum::body::{to_bytes, Body};
        use axum::http::Request;
        use serde_json::Value;
        use tower::ServiceExt;

        async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        fn app() -> Router {
            router(Arc::new(StatsService::new(vec![
                fixture("Man City", "Burnley", 3, 0),
                fixture("Burnley", "Arsenal", 0, 2),
                fixture("Arsenal", "Man City", 1, 1),
            ])))
        }

        #[tokio::test]
        async fn test_root_and_health() {
            for uri in ["/", "/health"] {
                let (status, body) = get_json(app(), uri).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body["status"], "healthy");
                assert_eq!(body["total_matches"], 3);
            }
        }

        #[tokio::test]
        async fn test_teams_route() {
            let (status, body) = get_json(app(), "/teams").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["teams"], serde_json::json!(["Arsenal", "Burnley", "Man City"]));
            assert_eq!(body["count"], 3);
        }

        #[tokio::test]
        async fn test_league_table_route() {
            let (status, body) = get_json(app(), "/league/table").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["season"], "2023/24");
            assert_eq!(body["team_count"], 3);
            // Arsenal and Man City both on 4 pts; GD +2 vs +3
            assert_eq!(body["table"][0]["team"], "Man City");
            assert_eq!(body["table"][1]["team"], "Arsenal");
            assert_eq!(body["table"][2]["team"], "Burnley");
        }

        #[tokio::test]
        async fn test_team_stats_route_decodes_name() {
            let (status, body) = get_json(app(), "/teams/Man%20City/stats").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["team"], "Man City");
            assert_eq!(body["points"], 4);
            assert_eq!(body["goal_diff"], 3);
        }

        #[tokio::test]
        async fn test_team_stats_route_not_found() {
            let (status, body) = get_json(app(), "/teams/Nope/stats").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Team 'Nope' not found");
        }

        #[tokio::test]
        async fn test_team_stats_route_empty_name() {
            let (status, body) = get_json(app(), "/teams//stats").await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Team name cannot be empty");
        }
    }
}

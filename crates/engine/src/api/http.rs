//! HTTP API endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use scamguard_domain::{DomainError, FinalVerdict, RoundResult, ScamAssessment, SessionId};
use serde::Deserialize;

use crate::app::App;
use crate::infrastructure::ports::ClassifierError;
use crate::use_cases::game::{GameError, GameStateView, RoundAnswer, ScenarioView, StartedGame};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/game/start", post(start_game))
        .route("/api/game/{id}", get(game_state))
        .route("/api/game/{id}/next", post(next_scenario))
        .route("/api/game/{id}/round", post(submit_round))
        .route("/api/game/{id}/result", get(game_result))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    message: Option<String>,
}

async fn analyze(
    State(app): State<Arc<App>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ScamAssessment>, ApiError> {
    let message = request
        .message
        .as_deref()
        .ok_or_else(|| DomainError::invalid_input("message", "field is required"))?;

    let assessment = app.use_cases.analysis.execute(message).await?;
    Ok(Json(assessment))
}

async fn start_game(State(app): State<Arc<App>>) -> Result<Json<StartedGame>, ApiError> {
    let started = app.use_cases.game.start().await?;
    Ok(Json(started))
}

async fn game_state(
    State(app): State<Arc<App>>,
    Path(id): Path<SessionId>,
) -> Result<Json<GameStateView>, ApiError> {
    let state = app.use_cases.game.state(id).await?;
    Ok(Json(state))
}

async fn next_scenario(
    State(app): State<Arc<App>>,
    Path(id): Path<SessionId>,
) -> Result<Json<ScenarioView>, ApiError> {
    let scenario = app.use_cases.game.next_scenario(id).await?;
    Ok(Json(scenario))
}

async fn submit_round(
    State(app): State<Arc<App>>,
    Path(id): Path<SessionId>,
    Json(answer): Json<RoundAnswer>,
) -> Result<Json<RoundResult>, ApiError> {
    let result = app.use_cases.game.submit_round(id, &answer).await?;
    Ok(Json(result))
}

async fn game_result(
    State(app): State<Arc<App>>,
    Path(id): Path<SessionId>,
) -> Result<Json<FinalVerdict>, ApiError> {
    let verdict = app.use_cases.game.final_verdict(id).await?;
    Ok(Json(verdict))
}

/// API error responses
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Session not found").into_response(),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::BadGateway(message) => {
                tracing::warn!(error = %message, "Classifier unavailable");
                (StatusCode::BAD_GATEWAY, "Classifier unavailable").into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSessionState(message) => ApiError::Conflict(message),
            err => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::SessionNotFound(_) => ApiError::NotFound,
            GameError::Domain(err) => ApiError::from(err),
            GameError::Store(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

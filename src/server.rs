//! Stateless HTTP front end.
//!
//! Every request carries the game state it applies to, and every response
//! returns the next state. The server keeps nothing between requests except
//! the read-only configuration.

use crate::about::{CARD_QUESTION, instructions, reveal};
use crate::config::CrackersConfig;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use crackers_core::{
    GameError, GameState, Phase, RangeBound, Trigger, card_for, choose_range, dispatch_with,
    generate,
};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Shared, read-only server state.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<CrackersConfig>,
}

impl AppState {
    /// Wraps a configuration for sharing across requests.
    pub fn new(config: CrackersConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Uses the handed-in state, or a fresh one at the default range.
    ///
    /// Handed-in states must satisfy the invariants and use an allowed range.
    #[instrument(skip(self))]
    fn state_or_default(&self, state: Option<GameState>) -> Result<GameState, GameError> {
        match state {
            Some(state) => {
                state.validate()?;
                RangeBound::from_allowed(state.bound().bits(), self.config.allowed_max_n())?;
                Ok(state)
            }
            None => Ok(GameState::new(self.config.default_bound()?)),
        }
    }
}

/// Query string for `GET /cards/{n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CardQuery {
    /// Range to use; the configured default when absent.
    pub max_n: Option<u32>,
}

/// Body for `POST /dispatch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// State from the previous response; a fresh game when absent.
    #[serde(default)]
    pub state: Option<GameState>,
    /// Trigger to apply.
    pub trigger: Trigger,
}

/// Body for `POST /range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeRequest {
    /// State from the previous response; a fresh game when absent.
    #[serde(default)]
    pub state: Option<GameState>,
    /// Requested range.
    pub max_n: u32,
}

/// Response describing what to show next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// State to send back with the next request.
    pub state: GameState,
    /// Phase of that state.
    pub phase: Phase,
    /// Text to show the player.
    pub message: String,
    /// Card for the current stage (empty outside questioning).
    pub card: Vec<u64>,
    /// Reconstructed number, present only at reveal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess: Option<u64>,
}

impl From<GameState> for View {
    fn from(state: GameState) -> Self {
        let phase = state.phase();
        let message = match phase {
            Phase::Welcome => instructions(state.bound()),
            Phase::Questioning => CARD_QUESTION.to_string(),
            Phase::Reveal => reveal(state.guess()),
        };
        Self {
            state,
            phase,
            message,
            card: card_for(&state),
            guess: state.reconstructed(),
        }
    }
}

/// Game error mapped to an HTTP response.
#[derive(Debug, Display, From)]
pub struct ApiError(GameError);

impl ApiError {
    /// Status code for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            GameError::InvalidRangeBound(_) | GameError::InvariantViolation(_) => {
                StatusCode::BAD_REQUEST
            }
            GameError::InvalidTrigger { .. } | GameError::RangeLocked(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self.0, "Request rejected");
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Builds the router.
#[instrument(skip(config))]
pub fn router(config: CrackersConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cards/{n}", get(card))
        .route("/dispatch", post(apply_trigger))
        .route("/range", post(set_range))
        .layer(axum::middleware::map_request(log_request))
        .with_state(AppState::new(config))
}

async fn log_request(req: Request) -> Request {
    debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(app))]
async fn card(
    State(app): State<AppState>,
    Path(n): Path<u32>,
    Query(query): Query<CardQuery>,
) -> Result<Json<Vec<u64>>, ApiError> {
    let bound = app.config.resolve_bound(query.max_n)?;
    Ok(Json(generate(n, bound)))
}

#[instrument(skip(app))]
async fn apply_trigger(
    State(app): State<AppState>,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<View>, ApiError> {
    let state = app.state_or_default(request.state)?;
    let next = dispatch_with(state, request.trigger, app.config.restart_target()?)?;
    Ok(Json(View::from(next)))
}

#[instrument(skip(app))]
async fn set_range(
    State(app): State<AppState>,
    Json(request): Json<RangeRequest>,
) -> Result<Json<View>, ApiError> {
    let state = app.state_or_default(request.state)?;
    let bound = app.config.resolve_bound(Some(request.max_n))?;
    let next = choose_range(state, bound)?;
    Ok(Json(View::from(next)))
}

/// Serves the router until the process exits.
#[instrument(skip(config))]
pub async fn serve(host: &str, port: u16, config: CrackersConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(%host, port, "Crackers server listening");
    axum::serve(listener, router(config)).await?;
    Ok(())
}

//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post, put},
};
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::domain::RegisterError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/history", get(history_page))
        .route("/health", get(health))
        .route("/api/status", get(get_status))
        .route("/api/departures", get(list_departures).post(add_departure))
        .route(
            "/api/departures/:number",
            get(get_departure)
                .patch(edit_departure)
                .delete(remove_departure),
        )
        .route("/api/search", get(search_destination))
        .route("/api/clock", put(set_clock))
        .route("/api/day", post(new_day))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The board of upcoming departures.
async fn board_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let register = state.register.read().await;
    render(&BoardTemplate::upcoming(
        register.status(),
        &register.visible_departures(),
    ))
}

/// Every departure today, with departed trains marked.
async fn history_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let register = state.register.read().await;
    render(&BoardTemplate::history(
        register.status(),
        &register.all_departures(),
    ))
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Station clock and number of departures today.
async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let register = state.register.read().await;
    Json(StatusResponse::from_status(register.status()))
}

/// Upcoming departures, or every departure today with `?all=true`.
async fn list_departures(
    State(state): State<AppState>,
    Query(query): Query<DeparturesQuery>,
) -> Json<DeparturesResponse> {
    let register = state.register.read().await;
    let departures = if query.all {
        register.all_departures()
    } else {
        register.visible_departures()
    };
    Json(DeparturesResponse::from_records(
        &departures,
        register.clock(),
    ))
}

/// Register a new departure.
async fn add_departure(
    State(state): State<AppState>,
    Json(req): Json<AddDepartureRequest>,
) -> Result<(StatusCode, Json<DepartureResult>), AppError> {
    let spec = req
        .into_spec()
        .map_err(|message| AppError::BadRequest { message })?;

    let mut register = state.register.write().await;
    let number = register.insert(spec)?;
    let record = register
        .get(i64::from(number.get()))
        .ok_or_else(|| AppError::Internal {
            message: format!("departure {number} missing after insert"),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(DepartureResult::from_record(record, register.clock())),
    ))
}

/// Look up a departure by train number.
async fn get_departure(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Json<DepartureResult>, AppError> {
    let register = state.register.read().await;
    let record = register
        .search_by_train_number(number)
        .into_iter()
        .next()
        .ok_or(RegisterError::RecordNotFound(number))?;
    Ok(Json(DepartureResult::from_record(&record, register.clock())))
}

/// Change one field of a departure.
async fn edit_departure(
    State(state): State<AppState>,
    Path(number): Path<i64>,
    Json(req): Json<EditRequest>,
) -> Result<Json<DepartureResult>, AppError> {
    let edit = req
        .into_edit()
        .map_err(|message| AppError::BadRequest { message })?;

    let mut register = state.register.write().await;
    let record = register.edit(number, edit)?;
    Ok(Json(DepartureResult::from_record(&record, register.clock())))
}

/// Remove a departure.
async fn remove_departure(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Json<DepartureResult>, AppError> {
    let mut register = state.register.write().await;
    let record = register
        .remove_departure(number)
        .ok_or(RegisterError::RecordNotFound(number))?;
    Ok(Json(DepartureResult::from_record(&record, register.clock())))
}

/// Departures to a destination, ignoring case.
async fn search_destination(
    State(state): State<AppState>,
    Query(query): Query<DestinationQuery>,
) -> Json<DeparturesResponse> {
    let register = state.register.read().await;
    Json(DeparturesResponse::from_records(
        &register.search_by_destination(&query.destination),
        register.clock(),
    ))
}

/// Move the station clock forward.
async fn set_clock(
    State(state): State<AppState>,
    Json(req): Json<ClockRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut register = state.register.write().await;
    register
        .set_clock(req.time.trim())
        .map_err(|e| match e {
            RegisterError::DepartureAlreadyPassed { .. } => AppError::Conflict {
                message: format!(
                    "{e}; the clock only moves forward, start a new day with POST /api/day"
                ),
            },
            e => AppError::from(e),
        })?;
    Ok(Json(StatusResponse::from_status(register.status())))
}

/// Start a new day.
async fn new_day(State(state): State<AppState>) -> Json<StatusResponse> {
    let mut register = state.register.write().await;
    register.reset_day();
    info!("new day started from the web");
    Json(StatusResponse::from_status(register.status()))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl From<RegisterError> for AppError {
    fn from(e: RegisterError) -> Self {
        let message = e.to_string();
        match e {
            RegisterError::RecordNotFound(_) => AppError::NotFound { message },
            RegisterError::DuplicateTrainNumber(_) | RegisterError::DepartureAlreadyPassed { .. } => {
                AppError::Conflict { message }
            }
            RegisterError::InvalidTimeFormat(_) | RegisterError::InvalidFieldValue { .. } => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

//! Axum route handlers for the notes REST API.

use crate::request_log;
use crate::store::{NoteError, NoteStore};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use notes_types::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub struct AppState {
    /// All store access goes through this lock, one request at a time
    pub store: Mutex<NoteStore>,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store: Mutex::new(store),
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        let status = match self {
            NoteError::NotFound => StatusCode::NOT_FOUND,
            NoteError::InvalidInput => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/status", get(status))
        // CORS sits inside the access log so preflights are logged too
        .layer(cors)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            request_log::log_request,
        ))
        .with_state(state)
}

/// Reads an optional sign and the leading run of digits, ignoring the rest
/// (`"2abc"` and `"2.9"` both read as 2). No digits, or a negative value,
/// matches no note.
fn parse_id(raw: &str) -> Result<u64, NoteError> {
    let s = raw.trim();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() || negative {
        return Err(NoteError::NotFound);
    }
    digits.parse().map_err(|_| NoteError::NotFound)
}

/// An unreadable body is treated as one with no fields
fn note_input(body: Result<Json<NoteInput>, JsonRejection>) -> NoteInput {
    match body {
        Ok(Json(input)) => input,
        Err(e) => {
            log::debug!("Unreadable note body: {}", e);
            NoteInput::default()
        }
    }
}

// GET /notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<Note>> {
    Json(state.store.lock().list().to_vec())
}

// GET /notes/:id
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Note>, NoteError> {
    let id = parse_id(&raw_id)?;
    let note = state.store.lock().get(id)?.clone();
    Ok(Json(note))
}

// POST /notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), NoteError> {
    let note = state.store.lock().create(note_input(body))?.clone();
    Ok((StatusCode::CREATED, Json(note)))
}

// PUT /notes/:id
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<Json<Note>, NoteError> {
    let id = parse_id(&raw_id)?;
    let note = state.store.lock().update(id, note_input(body))?.clone();
    Ok(Json(note))
}

// DELETE /notes/:id
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, NoteError> {
    let id = parse_id(&raw_id)?;
    state.store.lock().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    let (note_count, next_id) = {
        let store = state.store.lock();
        (store.len(), store.next_id())
    };

    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        note_count,
        next_id,
        total_requests: state.request_count.load(Ordering::Relaxed),
    })
}

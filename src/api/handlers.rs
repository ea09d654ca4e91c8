//! HTTP request handlers

use super::types::{
    AreasResponse, AvailableEvent, AvailableEventsResponse, ChatRequest, ChatResponse,
    ErrorResponse, EventActionResponse, EventListResponse, InterestRequest, NgoListResponse,
    SessionResponse, SuccessResponse, TranscriptResponse,
};
use super::AppState;
use crate::domain::{Area, EventId, EventStatus};
use crate::error::FoodBridgeError;
use crate::events::{self, EventSubmission, DEFAULT_NGO_ID};
use crate::session::SessionId;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:sid", axum::routing::delete(end_session))
        // Session Store reads
        .route("/api/sessions/:sid/ngos", get(list_ngos))
        .route("/api/sessions/:sid/messages", get(list_messages))
        // Event Registry
        .route(
            "/api/sessions/:sid/events",
            get(list_events).post(submit_event),
        )
        .route("/api/sessions/:sid/events/available", get(list_available))
        // Interest Tracker
        .route(
            "/api/sessions/:sid/events/:eid/interest",
            post(express_interest),
        )
        // Conversational Assistant
        .route("/api/sessions/:sid/chat", post(send_chat))
        // Reference data
        .route("/api/areas", get(list_areas))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let (session_id, _) = state.sessions.create().await;
    (StatusCode::CREATED, Json(SessionResponse { session_id }))
}

async fn end_session(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
) -> Result<Json<SuccessResponse>, FoodBridgeError> {
    state.sessions.remove(sid).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// Session Store Reads
// ============================================================

async fn list_ngos(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
) -> Result<Json<NgoListResponse>, FoodBridgeError> {
    let session = state.sessions.get(sid).await?;
    let store = session.lock().await;
    Ok(Json(NgoListResponse {
        ngos: store.ngos().to_vec(),
    }))
}

async fn list_messages(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
) -> Result<Json<TranscriptResponse>, FoodBridgeError> {
    let session = state.sessions.get(sid).await?;
    let store = session.lock().await;
    Ok(Json(TranscriptResponse {
        messages: store.transcript().to_vec(),
        state: store.chat_state(),
    }))
}

async fn list_events(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
) -> Result<Json<EventListResponse>, FoodBridgeError> {
    let session = state.sessions.get(sid).await?;
    let store = session.lock().await;
    Ok(Json(EventListResponse {
        events: store.events().to_vec(),
    }))
}

// ============================================================
// Event Registry
// ============================================================

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: Option<String>,
}

async fn list_available(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<AvailableEventsResponse>, FoodBridgeError> {
    let status = query
        .status
        .unwrap_or_else(|| EventStatus::Listed.as_str().to_string());

    let session = state.sessions.get(sid).await?;
    let store = session.lock().await;
    let events = events::list_by_status(&store, &status)
        .map(|event| AvailableEvent {
            title: event.display_title(),
            event: event.clone(),
        })
        .collect();

    Ok(Json(AvailableEventsResponse { events }))
}

async fn submit_event(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
    AppJson(submission): AppJson<EventSubmission>,
) -> Result<(StatusCode, Json<EventActionResponse>), FoodBridgeError> {
    let today = chrono::Local::now().date_naive();
    let session = state.sessions.get(sid).await?;
    let event = {
        let mut store = session.lock().await;
        events::submit_event(&mut store, submission, today)?
    };

    let message = format!("Event '{}' has been listed successfully!", event.name);
    Ok((
        StatusCode::CREATED,
        Json(EventActionResponse { event, message }),
    ))
}

// ============================================================
// Interest Tracker
// ============================================================

async fn express_interest(
    State(state): State<AppState>,
    Path((sid, eid)): Path<(SessionId, EventId)>,
    body: Result<Json<InterestRequest>, JsonRejection>,
) -> Result<Json<EventActionResponse>, FoodBridgeError> {
    // a bare POST carries no body and means the default NGO
    let requested = match body {
        Ok(Json(req)) => req.ngo_id,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(rejection.into()),
    };
    let ngo_id = requested.unwrap_or(DEFAULT_NGO_ID);
    let session = state.sessions.get(sid).await?;
    let event = {
        let mut store = session.lock().await;
        events::express_interest(&mut store, eid, ngo_id)?
    };

    let message = format!(
        "You expressed interest in '{}'. The organizer will be notified.",
        event.name
    );
    Ok(Json(EventActionResponse { event, message }))
}

// ============================================================
// Conversational Assistant
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Path(sid): Path<SessionId>,
    AppJson(req): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, FoodBridgeError> {
    let session = state.sessions.get(sid).await?;
    let reply = state.assistant.submit(&session, req.text).await?;
    Ok(Json(ChatResponse { reply }))
}

// ============================================================
// Reference Data
// ============================================================

async fn list_areas() -> Json<AreasResponse> {
    Json(AreasResponse {
        areas: Area::ALL.to_vec(),
    })
}

async fn get_version() -> &'static str {
    concat!("foodbridge ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

/// `Json` whose rejections surface as validation errors
#[derive(FromRequest)]
#[from_request(via(Json), rejection(FoodBridgeError))]
struct AppJson<T>(T);

impl From<JsonRejection> for FoodBridgeError {
    fn from(rejection: JsonRejection) -> Self {
        FoodBridgeError::Validation(rejection.body_text())
    }
}

impl IntoResponse for FoodBridgeError {
    fn into_response(self) -> Response {
        let status = match &self {
            FoodBridgeError::Validation(_) => StatusCode::BAD_REQUEST,
            FoodBridgeError::NotFound(_) => StatusCode::NOT_FOUND,
            FoodBridgeError::AssistantBusy => StatusCode::CONFLICT,
            FoodBridgeError::Upstream(e) => {
                tracing::warn!(kind = ?e.kind, error = %e, "Chat turn failed upstream");
                StatusCode::BAD_GATEWAY
            }
            FoodBridgeError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}

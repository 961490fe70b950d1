//! # App Web
//!
//! Web surface for the SMART starter.
//!
//! Handles:
//! - the starter page (HTML) rendered from the view state
//! - JSON endpoints for the session snapshot and liveness
//! - OpenAPI/Swagger documentation for the JSON endpoints
//!
//! Session establishment itself lives in `smart-session`; handlers here are
//! pure reads of the mounted view.

#![warn(rust_2018_idioms)]

pub mod pages;
pub mod view;

pub use view::{StarterView, ViewSnapshot};

use axum::{
    extract::State,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use smart_session::{Resource, SessionHandle};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across request handlers.
#[derive(Clone)]
struct AppState {
    view: StarterView,
}

/// Liveness response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Snapshot of the view state as JSON.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SessionRes {
    /// Whether a session has been established.
    pub connected: bool,
    /// The opaque session handle, exactly as the connector returned it.
    #[schema(value_type = Option<Object>)]
    pub session: Option<SessionHandle>,
    /// Resource placeholder; never populated by the starter.
    #[schema(value_type = Option<Object>)]
    pub patient: Option<Resource>,
}

#[derive(OpenApi)]
#[openapi(paths(health, session), components(schemas(HealthRes, SessionRes)))]
struct ApiDoc;

/// Build the starter's router around an already-mounted view.
pub fn router(view: StarterView) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/session", get(session))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { view })
}

/// Starter page: informational panel plus the serialized session, if any.
#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.view.snapshot().await;
    let session_json = snapshot.session.as_ref().map(SessionHandle::to_string);
    Html(pages::index(session_json.as_deref()))
}

#[utoipa::path(
    get,
    path = "/session",
    responses(
        (status = 200, description = "Current session snapshot", body = SessionRes)
    )
)]
/// JSON view of the session state.
///
/// Reports `connected: false` with a null session until the background
/// connect call resolves; afterwards it carries the handle verbatim.
#[axum::debug_handler]
async fn session(State(state): State<AppState>) -> Json<SessionRes> {
    let snapshot = state.view.snapshot().await;
    Json(SessionRes {
        connected: snapshot.session.is_some(),
        session: snapshot.session,
        patient: snapshot.patient,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "SMART starter is alive".into(),
    })
}

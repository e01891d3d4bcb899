//! HTTP API server
//!
//! Routes:
//! - Health check at `/health`
//! - Project CRUD under `/api/projects`
//! - Requirement CRUD under `/api/requirements`
//! - Ad hoc analysis at `/api/analyze`, `/api/analyze/batch`, `/api/enhance`

use crate::models::{Priority, RequirementStatus};
use crate::services::{
    project_service::{self, CreateProjectInput, UpdateProjectInput},
    requirement_service::{self, CreateRequirementInput, UpdateRequirementInput},
    AnalysisService, ServiceError,
};
use crate::store::Repository;
use crate::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

// =============================================================================
// Application State
// =============================================================================

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Repository (thread-safe)
    pub store: Arc<RwLock<Box<dyn Repository>>>,
    /// Analysis orchestration (provider + fallback engine)
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(store: Box<dyn Repository>, analysis: AnalysisService) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            analysis: Arc::new(analysis),
        }
    }
}

// =============================================================================
// Server Startup
// =============================================================================

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/api/projects/:id/requirements",
            get(list_requirements).post(create_requirement),
        )
        .route(
            "/api/requirements/:id",
            get(get_requirement)
                .put(update_requirement)
                .delete(delete_requirement),
        )
        .route("/api/requirements/:id/analyze", post(analyze_requirement))
        .route("/api/requirements/:id/enhance", post(enhance_requirement))
        .route("/api/analyze", post(analyze_text))
        .route("/api/analyze/batch", post(analyze_batch))
        .route("/api/enhance", post(enhance_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the API server on the given port
pub async fn start_server(port: u16, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    println!("✓ Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// =============================================================================
// Request DTOs
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectRequest {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProjectRequest {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequirementRequest {
    title: String,
    text: String,
    priority: Option<Priority>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequirementRequest {
    title: Option<String>,
    text: Option<String>,
    priority: Option<Priority>,
    status: Option<RequirementStatus>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeTextRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeBatchRequest {
    texts: Vec<String>,
}

// =============================================================================
// Project Handlers
// =============================================================================

async fn list_projects(State(state): State<AppState>) -> Response {
    let store = state.store.read().await;
    match project_service::list_projects(store.as_ref()) {
        Ok(projects) => Json(projects).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> Response {
    let mut store = state.store.write().await;
    let input = CreateProjectInput {
        name: body.name,
        description: body.description,
    };
    match project_service::create_project(store.as_mut(), input) {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_project(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let store = state.store.read().await;
    match project_service::get_project(store.as_ref(), id) {
        Ok(project) => Json(project).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProjectRequest>,
) -> Response {
    let mut store = state.store.write().await;
    let input = UpdateProjectInput {
        name: body.name,
        description: body.description,
    };
    match project_service::update_project(store.as_mut(), id, input) {
        Ok(project) => Json(project).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_project(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let mut store = state.store.write().await;
    match project_service::delete_project(store.as_mut(), id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

// =============================================================================
// Requirement Handlers
// =============================================================================

async fn list_requirements(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let store = state.store.read().await;
    match requirement_service::list_requirements(store.as_ref(), id) {
        Ok(requirements) => Json(requirements).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateRequirementRequest>,
) -> Response {
    let mut store = state.store.write().await;
    let input = CreateRequirementInput {
        title: body.title,
        text: body.text,
        priority: body.priority,
    };
    match requirement_service::create_requirement(store.as_mut(), id, input) {
        Ok(requirement) => (StatusCode::CREATED, Json(requirement)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_requirement(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let store = state.store.read().await;
    match requirement_service::get_requirement(store.as_ref(), id) {
        Ok(requirement) => Json(requirement).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRequirementRequest>,
) -> Response {
    let mut store = state.store.write().await;
    let input = UpdateRequirementInput {
        title: body.title,
        text: body.text,
        priority: body.priority,
        status: body.status,
    };
    match requirement_service::update_requirement(store.as_mut(), id, input) {
        Ok(requirement) => Json(requirement).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_requirement(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let mut store = state.store.write().await;
    match requirement_service::delete_requirement(store.as_mut(), id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

// =============================================================================
// Analysis Handlers
// =============================================================================

async fn analyze_requirement(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let mut store = state.store.write().await;
    match requirement_service::analyze_requirement(store.as_mut(), &state.analysis, id).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => error_response(err),
    }
}

async fn enhance_requirement(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let mut store = state.store.write().await;
    match requirement_service::enhance_requirement(store.as_mut(), &state.analysis, id).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => error_response(err),
    }
}

async fn analyze_text(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeTextRequest>,
) -> Response {
    if let Err(err) = requirement_service::validate_text(&body.text) {
        return error_response(err);
    }
    Json(state.analysis.analyze(&body.text).await).into_response()
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBatchRequest>,
) -> Response {
    for (index, text) in body.texts.iter().enumerate() {
        if let Err(err) = requirement_service::validate_text(text) {
            return error_response(ServiceError::Invalid(format!("texts[{}]: {}", index, err)));
        }
    }
    Json(state.analysis.analyze_batch(&body.texts).await).into_response()
}

async fn enhance_text(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeTextRequest>,
) -> Response {
    if let Err(err) = requirement_service::validate_text(&body.text) {
        return error_response(err);
    }
    Json(state.analysis.enhance(&body.text).await).into_response()
}

/// Map service errors to HTTP responses with a JSON error body
fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}

//! AppInfo endpoints
//!
//! The five operations under /app. PUT accepts the full payload but only
//! `sonar_key` and `code_quality` are persisted.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::db::repos::{AppInfo, AppRepo, NewApp};
use crate::http::error::ApiError;
use crate::http::extractors::AppJson;
use crate::http::server::AppState;

/// Create/update request body. All seven fields are required.
#[derive(Debug, Deserialize)]
pub struct AppPayload {
    pub app_name: String,
    pub created_on: NaiveDateTime,
    pub last_deployed_on: NaiveDateTime,
    pub sonar_key: String,
    pub code_quality: String,
    pub code_coverage: String,
    pub is_active: bool,
}

impl From<AppPayload> for NewApp {
    fn from(p: AppPayload) -> Self {
        Self {
            app_name: p.app_name,
            created_on: p.created_on,
            last_deployed_on: p.last_deployed_on,
            sonar_key: p.sonar_key,
            code_quality: p.code_quality,
            code_coverage: p.code_coverage,
            is_active: p.is_active,
        }
    }
}

/// AppInfo response
#[derive(Serialize)]
pub struct AppResponse {
    pub id: i32,
    pub app_name: String,
    pub created_on: NaiveDateTime,
    pub last_deployed_on: NaiveDateTime,
    pub sonar_key: String,
    pub code_quality: String,
    pub code_coverage: String,
    pub is_active: bool,
}

impl From<AppInfo> for AppResponse {
    fn from(a: AppInfo) -> Self {
        Self {
            id: a.id,
            app_name: a.app_name,
            created_on: a.created_on,
            last_deployed_on: a.last_deployed_on,
            sonar_key: a.sonar_key,
            code_quality: a.code_quality,
            code_coverage: a.code_coverage,
            is_active: a.is_active,
        }
    }
}

/// GET /app - list all apps
async fn list_apps(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AppResponse>>, ApiError> {
    let apps = AppRepo::new(&state.pool).list().await?;
    Ok(Json(apps.into_iter().map(AppResponse::from).collect()))
}

/// GET /app/{id} - get a single app
async fn get_app(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<AppResponse>, ApiError> {
    let app = AppRepo::new(&state.pool).get(id).await?;
    Ok(Json(AppResponse::from(app)))
}

/// POST /app - create a new app
async fn create_app(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<AppPayload>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let created = AppRepo::new(&state.pool).insert(payload.into()).await?;
    tracing::info!(id = created.id, app_name = %created.app_name, "App created");

    Ok((StatusCode::CREATED, "App created"))
}

/// PUT /app/{id} - update an existing app
///
/// Succeeds whether or not the id exists; a missing row updates nothing.
async fn update_app(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<AppPayload>,
) -> Result<&'static str, ApiError> {
    AppRepo::new(&state.pool)
        .update(id, &payload.sonar_key, &payload.code_quality)
        .await?;

    Ok("App details updated")
}

/// DELETE /app/{id} - hard-delete an app
///
/// Idempotent; deleting an absent id still returns 204.
async fn delete_app(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    AppRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// App routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/app", get(list_apps).post(create_app))
        .route("/app/{id}", get(get_app).put(update_app).delete(delete_app))
}

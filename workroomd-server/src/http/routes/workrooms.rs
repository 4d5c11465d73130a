//! Workroom endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::WorkroomRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Workroom, WorkroomPayload};

/// Delete confirmation body
#[derive(Serialize)]
pub struct DeleteResponse {
    pub detail: &'static str,
}

/// GET /workrooms - list all workrooms
async fn list_workrooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Workroom>>, ApiError> {
    let workrooms = WorkroomRepo::new(&state.pool).list().await?;
    Ok(Json(workrooms))
}

/// POST /workrooms - create a workroom
///
/// The payload's own `id` is ignored; the response carries the assigned one.
async fn create_workroom(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WorkroomPayload>,
) -> Result<Json<Workroom>, ApiError> {
    tracing::debug!(?payload, "create workroom payload received");
    let workroom = WorkroomRepo::new(&state.pool).create(payload).await?;
    Ok(Json(workroom))
}

/// GET /workrooms/{id} - get a single workroom
async fn get_workroom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Workroom>, ApiError> {
    let workroom = WorkroomRepo::new(&state.pool).get(id).await?;
    Ok(Json(workroom))
}

/// PUT /workrooms/{id} - replace all mutable fields of a workroom
///
/// The target id comes from the path; the payload's `id` is disregarded.
async fn update_workroom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<WorkroomPayload>,
) -> Result<Json<Workroom>, ApiError> {
    let workroom = WorkroomRepo::new(&state.pool).update(id, payload).await?;
    Ok(Json(workroom))
}

/// DELETE /workrooms/{id} - remove a workroom
async fn delete_workroom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    WorkroomRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeleteResponse {
        detail: "Workroom deleted",
    }))
}

/// Workroom routes
///
/// The collection path is registered with and without a trailing slash;
/// existing clients use the trailing-slash form.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workrooms", get(list_workrooms).post(create_workroom))
        .route("/workrooms/", get(list_workrooms).post(create_workroom))
        .route(
            "/workrooms/{id}",
            get(get_workroom).put(update_workroom).delete(delete_workroom),
        )
}

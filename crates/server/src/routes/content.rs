use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::types::Confirmation;
use models::content;
use service::content::ContentFields;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Request body for content create and update; every field is required.
/// The author reference is accepted as-is, whether or not the user exists.
#[derive(Debug, Deserialize)]
pub struct ContentInput {
    pub title: String,
    pub body: String,
    pub author_id: i32,
}

/// Response shape for content; author_id is always included.
#[derive(Debug, Serialize)]
pub struct ContentRead {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author_id: i32,
}

impl From<content::Model> for ContentRead {
    fn from(m: content::Model) -> Self {
        Self { id: m.id, title: m.title, body: m.body, author_id: m.author_id }
    }
}

impl From<ContentInput> for ContentFields {
    fn from(i: ContentInput) -> Self {
        Self { title: i.title, body: i.body, author_id: i.author_id }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContentInput>,
) -> Result<(StatusCode, Json<ContentRead>), ApiError> {
    let created = state.content.create(input.into()).await?;
    info!(id = created.id, author_id = created.author_id, "created content");
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ContentRead>, ApiError> {
    match state.content.get(id).await? {
        Some(m) => Ok(Json(m.into())),
        None => Err(ApiError::not_found("Content")),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ContentInput>,
) -> Result<Json<ContentRead>, ApiError> {
    match state.content.update(id, input.into()).await? {
        Some(m) => {
            info!(id = m.id, "updated content");
            Ok(Json(m.into()))
        }
        None => Err(ApiError::not_found("Content")),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>, ApiError> {
    match state.content.delete(id).await? {
        Some(m) => {
            info!(id = m.id, "deleted content");
            Ok(Json(Confirmation { message: "Content deleted successfully".into() }))
        }
        None => Err(ApiError::not_found("Content")),
    }
}

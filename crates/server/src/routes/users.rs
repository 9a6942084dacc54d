use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::types::Confirmation;
use models::user;
use service::users::UserFields;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Request body for user create and update; every field is required.
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response shape for users; the stored password is never echoed back.
#[derive(Debug, Serialize)]
pub struct UserRead {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<user::Model> for UserRead {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, username: m.username, email: m.email }
    }
}

impl From<UserInput> for UserFields {
    fn from(i: UserInput) -> Self {
        Self { username: i.username, email: i.email, password: i.password }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<(StatusCode, Json<UserRead>), ApiError> {
    let created = state.users.create(input.into()).await?;
    info!(id = created.id, "created user");
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserRead>, ApiError> {
    match state.users.get(id).await? {
        Some(m) => Ok(Json(m.into())),
        None => Err(ApiError::not_found("User")),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UserInput>,
) -> Result<Json<UserRead>, ApiError> {
    match state.users.update(id, input.into()).await? {
        Some(m) => {
            info!(id = m.id, "updated user");
            Ok(Json(m.into()))
        }
        None => Err(ApiError::not_found("User")),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>, ApiError> {
    match state.users.delete(id).await? {
        Some(m) => {
            info!(id = m.id, "deleted user");
            Ok(Json(Confirmation { message: "User deleted successfully".into() }))
        }
        None => Err(ApiError::not_found("User")),
    }
}

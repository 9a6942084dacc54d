use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Welcome;
use service::{content::ContentRepository, users::UserRepository};

pub mod content;
pub mod users;

/// Shared route state. Handlers depend on the repository traits only,
/// never on a concrete database session type.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub content: Arc<dyn ContentRepository>,
}

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome { message: "Welcome to the content service" })
}

/// Build the full application router: the welcome route plus the CRUD
/// surface for users and content.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/users/", post(users::create))
        .route(
            "/users/:id",
            get(users::read).put(users::update).delete(users::remove),
        )
        .route("/content/", post(content::create))
        .route(
            "/content/:id",
            get(content::read).put(content::update).delete(content::remove),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

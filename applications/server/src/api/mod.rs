/// API route modules
pub mod accounts;
pub mod health;
pub mod images;
pub mod uploads;

use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Accounts
        .route("/accounts", get(accounts::list_accounts))
        .route("/accounts", post(accounts::create_account))
        .route("/accounts/:id", put(accounts::update_account))
        // Images
        .route("/images/shop", post(uploads::upload_shop_images))
        .route("/images/gym", post(uploads::upload_gym_images))
        .route("/images/*path", get(images::serve_image))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

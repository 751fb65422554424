use crate::AppState;
use crate::api::actions;
use crate::health;

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        // Recipe actions
        .route("/monday/clone_item", post(actions::clone_item))
        .route("/monday/sync_item", post(actions::sync_item))
        .route("/monday/subscribe_team", post(actions::subscribe_team))
        .route("/monday/map_existing_items", post(actions::map_existing_items))
        .route("/monday/recipe_subscribed", post(actions::recipe_subscribed))
        .route(
            "/monday/recipe_unsubscribed",
            post(actions::recipe_unsubscribed),
        )
        .route("/monday/set_month", post(actions::set_month))
        .route("/monday/assign_creator", post(actions::assign_creator))
        .with_state(state)
}

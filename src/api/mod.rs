//! API handlers for the equipment tracker REST endpoints

pub mod boxes;
pub mod equipment;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route("/equipment/rename", post(equipment::rename_equipment))
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/shipping", patch(equipment::update_shipping))
        .route("/equipment/:id/picture", get(equipment::get_picture))
        .route("/values/:column", get(equipment::distinct_values))
        // Boxes and kits
        .route("/boxes", get(boxes::list_boxes))
        .route("/boxes/:box_number", get(boxes::get_box))
        .route("/kits/:kit_name/shipping", post(boxes::ship_kit))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

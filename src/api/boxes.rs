//! Box and kit shipping endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::shipping::{BoxSummary, KitShipmentReport, ShippingUpdate},
    AppState,
};

/// Box numbers in use
#[utoipa::path(
    get,
    path = "/boxes",
    tag = "boxes",
    responses(
        (status = 200, description = "Box numbers", body = Vec<String>)
    )
)]
pub async fn list_boxes(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let boxes = state.services.equipment.boxes().await?;
    Ok(Json(boxes))
}

/// Items in a box and their summed weight
#[utoipa::path(
    get,
    path = "/boxes/{box_number}",
    tag = "boxes",
    params(("box_number" = String, Path, description = "Box number")),
    responses(
        (status = 200, description = "Box contents", body = BoxSummary),
        (status = 404, description = "Empty or unknown box")
    )
)]
pub async fn get_box(
    State(state): State<AppState>,
    Path(box_number): Path<String>,
) -> AppResult<Json<BoxSummary>> {
    let summary = state.services.equipment.box_summary(&box_number).await?;
    Ok(Json(summary))
}

/// Apply shipping fields to every item of a kit
#[utoipa::path(
    post,
    path = "/kits/{kit_name}/shipping",
    tag = "boxes",
    params(("kit_name" = String, Path, description = "Kit name")),
    request_body = ShippingUpdate,
    responses(
        (status = 200, description = "Per-item outcome", body = KitShipmentReport),
        (status = 400, description = "No shipping field supplied")
    )
)]
pub async fn ship_kit(
    State(state): State<AppState>,
    Path(kit_name): Path<String>,
    Json(update): Json<ShippingUpdate>,
) -> AppResult<Json<KitShipmentReport>> {
    let report = state.services.equipment.ship_kit(&kit_name, &update).await?;
    Ok(Json(report))
}

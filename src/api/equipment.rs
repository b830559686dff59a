//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentForm, EquipmentShort, RenameReport, RenameRequest},
        filter::{DistinctColumn, EquipmentFilter},
        shipping::ShippingUpdate,
    },
    AppState,
};

/// List equipment matching the filters, ordered by name
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentFilter),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentShort>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Query(filter): Query<EquipmentFilter>,
) -> AppResult<Json<Vec<EquipmentShort>>> {
    let equipment = state.services.equipment.list(&filter).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = EquipmentForm,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid cost or field value")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(form): Json<EquipmentForm>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(form).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Overwrite all non-shipping fields of an item
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = EquipmentForm,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "Invalid cost or field value"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<EquipmentForm>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, form).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted, or did not exist")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update some shipping fields of an item
#[utoipa::path(
    patch,
    path = "/equipment/{id}/shipping",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = ShippingUpdate,
    responses(
        (status = 200, description = "Shipping fields updated", body = Equipment),
        (status = 400, description = "No shipping field supplied"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_shipping(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<ShippingUpdate>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update_shipping(id, &update).await?;
    Ok(Json(equipment))
}

/// Picture of an item
#[utoipa::path(
    get,
    path = "/equipment/{id}/picture",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "PNG or JPEG image", content_type = "image/*"),
        (status = 404, description = "No picture")
    )
)]
pub async fn get_picture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let picture = state.services.equipment.picture(id).await?;
    Ok(([(header::CONTENT_TYPE, picture.content_type)], picture.bytes).into_response())
}

/// Rename every item sharing a name
#[utoipa::path(
    post,
    path = "/equipment/rename",
    tag = "equipment",
    request_body = RenameRequest,
    responses(
        (status = 200, description = "Items renamed", body = RenameReport)
    )
)]
pub async fn rename_equipment(
    State(state): State<AppState>,
    Json(request): Json<RenameRequest>,
) -> AppResult<Json<RenameReport>> {
    let report = state.services.equipment.rename(&request).await?;
    Ok(Json(report))
}

/// Distinct values of a tag column
#[utoipa::path(
    get,
    path = "/values/{column}",
    tag = "equipment",
    params(("column" = String, Path, description = "Column name, e.g. type, kit_name, owner")),
    responses(
        (status = 200, description = "Distinct values", body = Vec<String>),
        (status = 400, description = "Unknown column")
    )
)]
pub async fn distinct_values(
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let column: DistinctColumn = column.parse()?;
    let values = state.services.equipment.distinct_values(column).await?;
    Ok(Json(values))
}

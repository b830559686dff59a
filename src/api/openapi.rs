//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{boxes, equipment, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Tracker API",
        version = "0.3.0",
        description = "Video-production equipment inventory",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::update_shipping,
        equipment::get_picture,
        equipment::rename_equipment,
        equipment::distinct_values,
        // Boxes and kits
        boxes::list_boxes,
        boxes::get_box,
        boxes::ship_kit,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::error::ErrorResponse,
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentShort,
            crate::models::equipment::EquipmentForm,
            crate::models::equipment::EquipmentStatus,
            crate::models::equipment::RenameRequest,
            crate::models::equipment::RenameReport,
            crate::models::filter::PurchasedFilter,
            crate::models::filter::DistinctColumn,
            crate::models::shipping::ShippingField,
            crate::models::shipping::ShippingUpdate,
            crate::models::shipping::BoxItem,
            crate::models::shipping::BoxSummary,
            crate::models::shipping::KitShipmentFailure,
            crate::models::shipping::KitShipmentReport,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment records"),
        (name = "boxes", description = "Boxes and kit shipping"),
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

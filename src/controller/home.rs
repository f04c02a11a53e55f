use axum::Json;

use crate::model::api::ServiceInfoDto;

/// GET /
/// Landing page describing the service.
pub async fn home() -> Json<ServiceInfoDto> {
    Json(ServiceInfoDto {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

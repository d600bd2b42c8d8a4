use axum::extract::Path;
use axum::Json;

use crate::api::format::{record_to_api, GeoRecord};
use crate::database::manager::DatabaseManager;
use crate::database::repository::GeoDataRepository;
use crate::error::ApiError;

/// GET /geo-data/:id - fetch a single record by id
pub async fn geo_show(Path(id): Path<i32>) -> Result<Json<GeoRecord>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let row = GeoDataRepository::new(pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Geo data not found"))?;

    Ok(Json(record_to_api(row)?))
}

use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::database::repository::GeoDataRepository;
use crate::error::ApiError;

/// DELETE /geo-data/:id - remove a record
pub async fn geo_delete(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let deleted = GeoDataRepository::new(pool).delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found("Geo data not found"));
    }

    Ok(Json(json!({ "message": "Geo data deleted successfully" })))
}

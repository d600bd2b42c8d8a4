use axum::Json;

use crate::api::format::{record_to_api, GeoRecord};
use crate::database::manager::DatabaseManager;
use crate::database::repository::GeoDataRepository;
use crate::error::ApiError;

/// GET /geo-data/list/ - fetch all records in id order
pub async fn geo_list() -> Result<Json<Vec<GeoRecord>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let rows = GeoDataRepository::new(pool).list().await?;

    let records = rows
        .into_iter()
        .map(record_to_api)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(records))
}

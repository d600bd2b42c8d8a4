use axum::extract::Path;
use axum::Json;

use crate::api::extract::ValidatedJson;
use crate::api::format::{record_to_api, GeoDataPayload, GeoRecord};
use crate::database::manager::DatabaseManager;
use crate::database::repository::GeoDataRepository;
use crate::error::ApiError;
use crate::geometry::codec;

/// PUT /geo-data/:id - overwrite name, type and geometry of a record
pub async fn geo_update(
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<GeoDataPayload>,
) -> Result<Json<GeoRecord>, ApiError> {
    let ewkb = codec::encode(&payload.geometry)?;

    let pool = DatabaseManager::pool().await?;
    let row = GeoDataRepository::new(pool)
        .update(id, &payload.name, &payload.kind, &ewkb)
        .await?
        .ok_or_else(|| ApiError::not_found("Geo data not found"))?;

    Ok(Json(record_to_api(row)?))
}

use axum::Json;

use crate::api::extract::ValidatedJson;
use crate::api::format::{record_to_api, GeoDataPayload, GeoRecord};
use crate::database::manager::DatabaseManager;
use crate::database::repository::GeoDataRepository;
use crate::error::ApiError;
use crate::geometry::codec;

/// POST /geo-data/create/ - store a new geometry record
///
/// The response is rebuilt from the row the database returned, so it shows
/// exactly what was persisted (including exterior-ring-only projection of
/// any polygon holes).
pub async fn geo_create(
    ValidatedJson(payload): ValidatedJson<GeoDataPayload>,
) -> Result<Json<GeoRecord>, ApiError> {
    let ewkb = codec::encode(&payload.geometry)?;

    let pool = DatabaseManager::pool().await?;
    let row = GeoDataRepository::new(pool)
        .create(&payload.name, &payload.kind, &ewkb)
        .await?;

    Ok(Json(record_to_api(row)?))
}

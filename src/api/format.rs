use serde::{Deserialize, Serialize};

use crate::database::models::GeoRecordRow;
use crate::geometry::{codec, Geometry, GeometryError};

/// Create/update payload: label fields plus one of the six supported
/// interchange geometries.
///
/// `type` is a caller-supplied label. It is persisted as given and never
/// checked against the geometry's own tag, so the two can disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoDataPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
}

/// Wire representation of a persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRecord {
    pub id: i32,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub geometry: Geometry,
}

/// Decode a stored row into its wire representation.
///
/// The `type` label is echoed exactly as stored; only the geometry goes
/// through the codec.
pub fn record_to_api(row: GeoRecordRow) -> Result<GeoRecord, GeometryError> {
    let geometry = codec::decode(&row.geometry)?;
    Ok(GeoRecord {
        id: row.id,
        name: row.name,
        kind: row.kind,
        geometry,
    })
}

use sqlx::FromRow;

/// Row shape of the `cities` table, with the geometry column rendered to
/// EWKB bytes by the query (`ST_AsEWKB`).
#[derive(Debug, Clone, FromRow)]
pub struct GeoRecordRow {
    pub id: i32,
    pub name: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub geometry: Vec<u8>,
}

use sqlx::PgPool;

use crate::config::config;
use crate::database::manager::DatabaseError;
use crate::database::models::GeoRecordRow;

/// Columns returned by every read/write, with geometry rendered as EWKB so
/// the codec can work on plain bytes.
const RECORD_COLUMNS: &str = "id, name, type, ST_AsEWKB(geometry) AS geometry";

/// Persistence operations for the `cities` table.
///
/// Geometry crosses this boundary as EWKB only; PostGIS does the
/// bytea-to-geometry conversion on both paths.
pub struct GeoDataRepository {
    pool: PgPool,
}

impl GeoDataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a record and return it with its assigned id.
    pub async fn create(
        &self,
        name: &str,
        kind: &str,
        ewkb: &[u8],
    ) -> Result<GeoRecordRow, DatabaseError> {
        self.log_query("create");
        let sql = format!(
            "INSERT INTO cities (name, type, geometry) VALUES ($1, $2, ST_GeomFromEWKB($3)) RETURNING {}",
            RECORD_COLUMNS
        );
        let row = sqlx::query_as::<_, GeoRecordRow>(&sql)
            .bind(name)
            .bind(kind)
            .bind(ewkb)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn get(&self, id: i32) -> Result<Option<GeoRecordRow>, DatabaseError> {
        self.log_query("get");
        let sql = format!("SELECT {} FROM cities WHERE id = $1", RECORD_COLUMNS);
        let row = sqlx::query_as::<_, GeoRecordRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<GeoRecordRow>, DatabaseError> {
        self.log_query("list");
        let sql = format!("SELECT {} FROM cities ORDER BY id", RECORD_COLUMNS);
        let rows = sqlx::query_as::<_, GeoRecordRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Overwrite all mutable fields. Returns None when the id does not exist.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        kind: &str,
        ewkb: &[u8],
    ) -> Result<Option<GeoRecordRow>, DatabaseError> {
        self.log_query("update");
        let sql = format!(
            "UPDATE cities SET name = $2, type = $3, geometry = ST_GeomFromEWKB($4) WHERE id = $1 RETURNING {}",
            RECORD_COLUMNS
        );
        let row = sqlx::query_as::<_, GeoRecordRow>(&sql)
            .bind(id)
            .bind(name)
            .bind(kind)
            .bind(ewkb)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns false when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        self.log_query("delete");
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn log_query(&self, operation: &str) {
        if config().database.enable_query_logging {
            tracing::debug!("Executing geo_data {}", operation);
        }
    }
}

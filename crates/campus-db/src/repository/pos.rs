//! # POS Repository
//!
//! Database operations for points of sale.
//!
//! ## Key Operations
//! - Ordered listing (ascending id = insertion order)
//! - Insert / update keyed by `id`
//! - Unique name enforcement (reported as `DbError::UniqueViolation`)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use campus_core::{CampusType, CoreResult, Pos, PosDataService, PosType};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, created_at, updated_at, name, description, pos_type, campus,
        street, house_number, postal_code, city, osm_node_id
    FROM pos
"#;

/// Row shape of the `pos` table.
#[derive(Debug, sqlx::FromRow)]
struct PosRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    description: String,
    pos_type: PosType,
    campus: CampusType,
    street: String,
    house_number: String,
    postal_code: i64,
    city: String,
    osm_node_id: Option<i64>,
}

impl TryFrom<PosRow> for Pos {
    type Error = DbError;

    fn try_from(row: PosRow) -> DbResult<Pos> {
        let postal_code = u32::try_from(row.postal_code).map_err(|_| {
            DbError::CorruptRow(format!(
                "pos {} has postal_code {}",
                row.id, row.postal_code
            ))
        })?;

        Ok(Pos {
            id: Some(row.id),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            name: row.name,
            description: row.description,
            pos_type: row.pos_type,
            campus: row.campus,
            street: row.street,
            house_number: row.house_number,
            postal_code,
            city: row.city,
            osm_node_id: row.osm_node_id,
        })
    }
}

/// Repository for POS database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PosRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let one = repo.get_by_id(42).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PosRepository {
    pool: SqlitePool,
}

impl PosRepository {
    /// Creates a new PosRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PosRepository { pool }
    }

    /// Lists every POS in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Pos>> {
        debug!("Listing all POS");

        let rows: Vec<PosRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Pos::try_from).collect()
    }

    /// Gets a POS by ID. `Ok(None)` when absent.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Pos>> {
        debug!(id, "Getting POS by ID");

        let row: Option<PosRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Pos::try_from).transpose()
    }

    /// Inserts a new POS and returns it with its assigned ID.
    ///
    /// `pos.id` is ignored; SQLite assigns the next rowid.
    pub async fn insert(&self, pos: &Pos) -> DbResult<Pos> {
        debug!(name = %pos.name, "Inserting POS");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO pos (
                created_at, updated_at, name, description, pos_type, campus,
                street, house_number, postal_code, city, osm_node_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(pos.created_at.unwrap_or(now))
        .bind(pos.updated_at.unwrap_or(now))
        .bind(&pos.name)
        .bind(&pos.description)
        .bind(pos.pos_type)
        .bind(pos.campus)
        .bind(&pos.street)
        .bind(&pos.house_number)
        .bind(i64::from(pos.postal_code))
        .bind(&pos.city)
        .bind(pos.osm_node_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&pos.name))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::PosNotFound(id))
    }

    /// Replaces every mutable column of an existing POS.
    ///
    /// ## Returns
    /// * `Ok(Pos)` - The stored state after the update
    /// * `Err(DbError::PosNotFound)` - No POS with this ID
    pub async fn update(&self, pos: &Pos) -> DbResult<Pos> {
        let Some(id) = pos.id else {
            return Err(DbError::Query("update requires an id".to_string()));
        };

        debug!(id, name = %pos.name, "Updating POS");

        let result = sqlx::query(
            r#"
            UPDATE pos SET
                updated_at = ?2,
                name = ?3,
                description = ?4,
                pos_type = ?5,
                campus = ?6,
                street = ?7,
                house_number = ?8,
                postal_code = ?9,
                city = ?10,
                osm_node_id = ?11
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(pos.updated_at.unwrap_or_else(Utc::now))
        .bind(&pos.name)
        .bind(&pos.description)
        .bind(pos.pos_type)
        .bind(pos.campus)
        .bind(&pos.street)
        .bind(&pos.house_number)
        .bind(i64::from(pos.postal_code))
        .bind(&pos.city)
        .bind(pos.osm_node_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&pos.name))?;

        if result.rows_affected() == 0 {
            return Err(DbError::PosNotFound(id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::PosNotFound(id))
    }

    /// Deletes every POS and resets the id sequence.
    pub async fn delete_all(&self) -> DbResult<()> {
        debug!("Deleting all POS");

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM pos").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'pos'")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(())
    }

    /// Counts POS (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl PosDataService for PosRepository {
    async fn clear(&self) -> CoreResult<()> {
        Ok(self.delete_all().await?)
    }

    async fn get_all(&self) -> CoreResult<Vec<Pos>> {
        Ok(self.list_all().await?)
    }

    async fn get_by_id(&self, id: i64) -> CoreResult<Option<Pos>> {
        Ok(PosRepository::get_by_id(self, id).await?)
    }

    async fn upsert(&self, pos: Pos) -> CoreResult<Pos> {
        let saved = match pos.id {
            None => self.insert(&pos).await?,
            Some(_) => self.update(&pos).await?,
        };
        Ok(saved)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

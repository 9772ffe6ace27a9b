use serde::Serialize;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::error::StoreError;
use super::filter::DocFilter;

/// Handle to a single document collection (one JSONB table).
#[derive(Debug, Clone)]
pub struct Collection {
    table: String,
    pool: PgPool,
}

/// Result of an insert, mirroring the shape the frontend already consumes.
#[derive(Debug, Clone, Serialize)]
pub struct InsertResult {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateResult {
    pub acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl Collection {
    pub(super) fn new(table: String, pool: PgPool) -> Self {
        Self { table, pool }
    }

    /// All documents matching the filter, in storage-native order.
    pub async fn find(&self, filter: &DocFilter) -> Result<Vec<Value>, StoreError> {
        let (where_clause, params) = filter.to_sql()?;
        let sql = format!(
            "SELECT id, doc FROM \"{}\" WHERE {}",
            self.table, where_clause
        );

        let mut query = sqlx::query(&sql);
        for param in &params {
            query = query.bind(param);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_doc).collect()
    }

    /// First document matching the filter, if any.
    pub async fn find_one(&self, filter: &DocFilter) -> Result<Option<Value>, StoreError> {
        let (where_clause, params) = filter.to_sql()?;
        let sql = format!(
            "SELECT id, doc FROM \"{}\" WHERE {} LIMIT 1",
            self.table, where_clause
        );

        let mut query = sqlx::query(&sql);
        for param in &params {
            query = query.bind(param);
        }

        match query.fetch_optional(&self.pool).await? {
            Some(row) => Ok(Some(row_to_doc(&row)?)),
            None => Ok(None),
        }
    }

    /// Lookup by generated identifier. A malformed id is an InvalidId error,
    /// distinct from a well-formed id that matches nothing.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Value>, StoreError> {
        let id = parse_id(id)?;
        let sql = format!("SELECT id, doc FROM \"{}\" WHERE id = $1", self.table);

        match sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await? {
            Some(row) => Ok(Some(row_to_doc(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn insert_one(&self, doc: &Value) -> Result<InsertResult, StoreError> {
        let id = Uuid::new_v4();
        let sql = format!("INSERT INTO \"{}\" (id, doc) VALUES ($1, $2)", self.table);

        sqlx::query(&sql).bind(id).bind(doc).execute(&self.pool).await?;

        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    /// Merge the given fields into the target document. Matched/modified
    /// counts follow document-store conventions: a record that already holds
    /// the patched values counts as matched but not modified.
    ///
    /// The existence check and the update are two separate statements; the
    /// race between them is tolerated, as both outcomes are valid.
    pub async fn update_one(&self, id: &str, patch: &Value) -> Result<UpdateResult, StoreError> {
        let id = parse_id(id)?;

        let exists_sql = format!("SELECT 1 FROM \"{}\" WHERE id = $1", self.table);
        let matched = sqlx::query(&exists_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .is_some() as u64;

        let update_sql = format!(
            "UPDATE \"{}\" SET doc = doc || $2::jsonb WHERE id = $1 AND doc <> doc || $2::jsonb",
            self.table
        );
        let modified = sqlx::query(&update_sql)
            .bind(id)
            .bind(patch)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
        })
    }

    pub async fn delete_one(&self, id: &str) -> Result<DeleteResult, StoreError> {
        let id = parse_id(id)?;
        let sql = format!("DELETE FROM \"{}\" WHERE id = $1", self.table);

        let deleted = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: deleted,
        })
    }
}

fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// Merge the row id into the document as `_id`, matching the wire shape the
/// frontend already expects from the previous backend.
fn row_to_doc(row: &sqlx::postgres::PgRow) -> Result<Value, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let mut doc: Value = row.try_get("doc")?;

    if let Value::Object(map) = &mut doc {
        map.insert("_id".to_string(), Value::String(id.to_string()));
    }
    Ok(doc)
}

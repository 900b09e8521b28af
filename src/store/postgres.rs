//! # PostgreSQL Store
//!
//! Connection-per-call access to the `materials` table. No pool is kept:
//! each operation opens a connection, runs one statement and closes the
//! connection on every exit path.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::{debug, error, warn};

use crate::model::{Material, MaterialDraft, MaterialPatch};

use super::config::DatabaseConfig;
use super::errors::{StoreError, StoreResult};
use super::schema;
use super::MaterialStore;

/// Store backed by a PostgreSQL database
pub struct PgMaterialStore {
    options: PgConnectOptions,
    target: String,
}

impl PgMaterialStore {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            options: config.connect_options(),
            target: config.display_target(),
        }
    }

    async fn connect(&self) -> StoreResult<PgConnection> {
        PgConnection::connect_with(&self.options).await.map_err(|e| {
            warn!(target = %self.target, error = %e, "database connection failed");
            StoreError::Connection(e.to_string())
        })
    }
}

/// Close a connection, logging but otherwise ignoring failures
async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        debug!(error = %e, "error while closing database connection");
    }
}

async fn fetch_all(conn: &mut PgConnection) -> StoreResult<Vec<Material>> {
    let rows = sqlx::query_as::<_, Material>(schema::SELECT_ALL)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

async fn fetch_one(conn: &mut PgConnection, id: i32) -> StoreResult<Material> {
    sqlx::query_as::<_, Material>(schema::SELECT_BY_ID)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or(StoreError::NotFound(id))
}

async fn insert(conn: &mut PgConnection, draft: &MaterialDraft) -> StoreResult<Material> {
    let mut tx = conn.begin().await?;

    let result = sqlx::query_as::<_, Material>(schema::INSERT)
        .bind(&draft.name)
        .bind(&draft.description)
        .fetch_one(&mut *tx)
        .await;

    match result {
        Ok(material) => {
            tx.commit().await?;
            Ok(material)
        }
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                warn!(error = %rb, "rollback after failed insert also failed");
            }
            Err(e.into())
        }
    }
}

async fn patch(conn: &mut PgConnection, id: i32, patch: &MaterialPatch) -> StoreResult<Material> {
    let mut tx = conn.begin().await?;

    let result = sqlx::query_as::<_, Material>(schema::UPDATE)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await;

    match result {
        Ok(Some(material)) => {
            tx.commit().await?;
            Ok(material)
        }
        Ok(None) => {
            // Nothing matched, so nothing was written.
            tx.rollback().await?;
            Err(StoreError::NotFound(id))
        }
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                warn!(id, error = %rb, "rollback after failed update also failed");
            }
            Err(e.into())
        }
    }
}

async fn remove(conn: &mut PgConnection, id: i32) -> StoreResult<()> {
    let result = sqlx::query(schema::DELETE).bind(id).execute(conn).await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }
    Ok(())
}

#[async_trait]
impl MaterialStore for PgMaterialStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(schema::CREATE_TABLE)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(StoreError::from);
        release(conn).await;
        result
    }

    async fn list(&self) -> StoreResult<Vec<Material>> {
        let mut conn = match self.connect().await {
            Ok(conn) => conn,
            Err(_) => return Ok(Vec::new()),
        };
        let result = fetch_all(&mut conn).await;
        release(conn).await;

        match result {
            Ok(rows) => Ok(rows),
            Err(e) => {
                error!(error = %e, "failed to list materials");
                Ok(Vec::new())
            }
        }
    }

    async fn get(&self, id: i32) -> StoreResult<Material> {
        let mut conn = self.connect().await?;
        let result = fetch_one(&mut conn, id).await;
        release(conn).await;
        result
    }

    async fn create(&self, draft: MaterialDraft) -> StoreResult<Material> {
        let mut conn = self.connect().await?;
        let result = insert(&mut conn, &draft).await;
        release(conn).await;

        if let Err(e) = &result {
            error!(name = %draft.name, error = %e, "failed to create material");
        }
        result
    }

    async fn update(&self, id: i32, patch_fields: MaterialPatch) -> StoreResult<Material> {
        let mut conn = self.connect().await?;
        let result = match patch_fields.validate() {
            Ok(valid) => patch(&mut conn, id, &valid).await,
            // A missing row is reported before a rejected patch.
            Err(invalid) => fetch_one(&mut conn, id)
                .await
                .and(Err(StoreError::from(invalid))),
        };
        release(conn).await;

        if let Err(e) = &result {
            if !e.is_client_error() {
                error!(id, error = %e, "failed to update material");
            }
        }
        result
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = remove(&mut conn, id).await;
        release(conn).await;

        if let Err(e) = &result {
            if !e.is_client_error() {
                error!(id, error = %e, "failed to delete material");
            }
        }
        result
    }
}

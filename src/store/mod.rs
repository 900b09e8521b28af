//! # Data-Access Layer
//!
//! The only place that talks to storage. Every operation maps onto exactly
//! one statement against the `materials` table.
//!
//! Two implementations share the [`MaterialStore`] contract:
//!
//! - [`PgMaterialStore`] opens a fresh PostgreSQL connection per call
//! - [`MemoryMaterialStore`] keeps rows in process (tests, `serve --memory`)

pub mod config;
pub mod errors;
pub mod memory;
pub mod postgres;
pub mod schema;

use async_trait::async_trait;

use crate::model::{Material, MaterialDraft, MaterialPatch};

pub use config::DatabaseConfig;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryMaterialStore;
pub use postgres::PgMaterialStore;

/// Storage operations for materials
#[async_trait]
pub trait MaterialStore: Send + Sync {
    /// Create the table if it does not exist
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// All materials by ascending id.
    ///
    /// An unreachable database yields an empty list, not an error.
    async fn list(&self) -> StoreResult<Vec<Material>>;

    /// A single material, or [`StoreError::NotFound`]
    async fn get(&self, id: i32) -> StoreResult<Material>;

    /// Insert a row; storage assigns the id and both timestamps
    async fn create(&self, draft: MaterialDraft) -> StoreResult<Material>;

    /// Apply a non-empty patch and refresh `updated_at`
    async fn update(&self, id: i32, patch: MaterialPatch) -> StoreResult<Material>;

    /// Hard delete
    async fn delete(&self, id: i32) -> StoreResult<()>;
}

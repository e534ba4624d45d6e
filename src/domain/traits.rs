//! Domain traits defining contracts for external systems.

use async_trait::async_trait;
use bson::Document;

use super::error::StoreError;

/// Collaborator contract for the external document store.
///
/// Implementations own all connectivity concerns (pooling, wire protocol,
/// cursor paging); the facade only sees finite, eagerly materialized
/// sequences. The trait operates on raw [`Document`] values so it stays
/// object-safe; typed (de)serialization happens above it.
///
/// Implementations must be safe for concurrent use from multiple tasks
/// sharing one instance.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Enumerate database names in server-reported order.
    async fn list_database_names(&self) -> Result<Vec<String>, StoreError>;

    /// Enumerate collection names for a database in server-reported order.
    async fn list_collection_names(&self, database: &str) -> Result<Vec<String>, StoreError>;

    /// Whether a collection of the given name already exists.
    async fn has_collection(&self, database: &str, collection: &str) -> Result<bool, StoreError>;

    /// Run a filtered query and materialize the full result set.
    async fn find_documents(
        &self,
        database: &str,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError>;

    /// Bulk-insert documents. Partial-insert semantics on fault are the
    /// store's own; no atomicity is added here.
    async fn insert_documents(
        &self,
        database: &str,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<(), StoreError>;

    /// Create a collection on the server.
    async fn create_collection(&self, database: &str, collection: &str) -> Result<(), StoreError>;
}

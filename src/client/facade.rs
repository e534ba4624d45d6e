//! The document client facade.
//!
//! This module contains the narrow, typed, error-normalized surface the
//! crate exposes over the external document store. Every operation is a
//! direct pass-through: preconditions are checked up front, the collaborator
//! is called once, and any fault is wrapped exactly once with its cause
//! preserved. No retries, no caching, no transaction discipline.

use std::sync::Arc;

use bson::{Document, doc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::error::require_non_empty;
use crate::domain::{ClientError, CollectionHandle, DocumentStore};
use crate::infra::MongoStore;

/// Typed facade over a shared [`DocumentStore`] collaborator.
///
/// The facade holds a single store reference injected at construction,
/// enabling substitution of the collaborator in tests. It keeps no other
/// state: handles are recreated on every call and concurrent use from
/// multiple tasks needs no external locking.
///
/// # Example
///
/// ```ignore
/// use document_client::DocumentClient;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Order {
///     id: String,
///     total: i64,
/// }
///
/// let client = DocumentClient::connect("mongodb://localhost:27017").await?;
/// let orders = client.create_collection_if_absent::<Order>("shop", "orders").await?;
/// client.insert_documents(&orders, &[Order { id: "o-1".into(), total: 42 }]).await?;
/// ```
pub struct DocumentClient {
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for DocumentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentClient").finish_non_exhaustive()
    }
}

impl DocumentClient {
    /// Creates a facade over an already-constructed collaborator.
    ///
    /// This is the injection seam used by tests and by callers that build
    /// the store themselves.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Connects to a MongoDB deployment and wraps it in a facade.
    ///
    /// The underlying client is constructed eagerly but no connectivity
    /// probe is issued; an unreachable server surfaces on the first real
    /// operation, not here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for an empty connection
    /// string, or [`ClientError::OperationFailed`] if the driver rejects
    /// the connection string (e.g. malformed URI).
    pub async fn connect(connection_string: &str) -> Result<Self, ClientError> {
        require_non_empty("connection string", connection_string)?;
        let store = MongoStore::connect(connection_string)
            .await
            .map_err(ClientError::wrap)?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Lists all database names, in server-reported order.
    ///
    /// # Errors
    ///
    /// Wraps any collaborator fault as [`ClientError::OperationFailed`].
    pub async fn list_database_names(&self) -> Result<Vec<String>, ClientError> {
        self.store.list_database_names().await.map_err(|fault| {
            ClientError::operation_failed(
                "Failed to get the database names due to exception.",
                fault,
            )
        })
    }

    /// Lists the collection names of one database, in server-reported order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for an empty database name,
    /// before any collaborator call.
    pub async fn list_collection_names(&self, database: &str) -> Result<Vec<String>, ClientError> {
        require_non_empty("database", database)?;
        self.store
            .list_collection_names(database)
            .await
            .map_err(ClientError::wrap)
    }

    /// Returns a typed handle bound to `(database, collection)`.
    ///
    /// Handle construction is local and issues no server call; the handle
    /// is valid whether or not the collection exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if either name is empty.
    pub fn collection<T>(
        &self,
        database: &str,
        collection: &str,
    ) -> Result<CollectionHandle<T>, ClientError> {
        require_non_empty("database", database)?;
        require_non_empty("collection", collection)?;
        Ok(CollectionHandle::new(database, collection))
    }

    /// Lists documents of a collection by names, using the default filter.
    ///
    /// The default filter matches documents whose `name` field equals the
    /// collection name itself, reproducing the behavior this facade was
    /// written to be compatible with. Callers that want an unrestricted
    /// query should pair [`collection`](Self::collection) with
    /// [`find_documents`](Self::find_documents) and an empty filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for empty names, or
    /// [`ClientError::OperationFailed`] on a collaborator fault or if a
    /// returned document does not deserialize into `T`.
    pub async fn list_documents<T>(
        &self,
        database: &str,
        collection: &str,
    ) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        require_non_empty("database", database)?;
        require_non_empty("collection", collection)?;

        let filter = doc! { "name": collection };
        let raw = self
            .store
            .find_documents(database, collection, filter)
            .await
            .map_err(ClientError::wrap)?;
        deserialize_all(raw)
    }

    /// Runs a caller-supplied filter against the handle's collection and
    /// materializes the full result set.
    ///
    /// The filter is passed through to the collaborator unmodified.
    ///
    /// # Errors
    ///
    /// Wraps collaborator faults and deserialization failures as
    /// [`ClientError::OperationFailed`].
    pub async fn find_documents<T>(
        &self,
        handle: &CollectionHandle<T>,
        filter: Document,
    ) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let raw = self
            .store
            .find_documents(handle.database(), handle.name(), filter)
            .await
            .map_err(ClientError::wrap)?;
        deserialize_all(raw)
    }

    /// Bulk-inserts documents into the handle's collection.
    ///
    /// Returns the number of documents submitted, which is the input count
    /// regardless of driver-side reporting. An empty slice still issues the
    /// insert call. On fault the insert may have partially succeeded; this
    /// layer adds no atomicity.
    ///
    /// # Errors
    ///
    /// Wraps serialization and collaborator faults as
    /// [`ClientError::OperationFailed`].
    pub async fn insert_documents<T>(
        &self,
        handle: &CollectionHandle<T>,
        documents: &[T],
    ) -> Result<usize, ClientError>
    where
        T: Serialize,
    {
        let count = documents.len();
        let raw: Vec<Document> = documents
            .iter()
            .map(bson::to_document)
            .collect::<Result<_, _>>()
            .map_err(|e| ClientError::wrap(Box::new(e)))?;

        self.store
            .insert_documents(handle.database(), handle.name(), raw)
            .await
            .map_err(ClientError::wrap)?;
        Ok(count)
    }

    /// Returns a handle to the named collection, creating it first if the
    /// collaborator does not already know it.
    ///
    /// When the collection exists no create call is issued, so the
    /// operation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for empty names, or
    /// [`ClientError::OperationFailed`] naming the database if the
    /// existence check or the create faults.
    pub async fn create_collection_if_absent<T>(
        &self,
        database: &str,
        collection: &str,
    ) -> Result<CollectionHandle<T>, ClientError> {
        require_non_empty("database", database)?;
        require_non_empty("collection", collection)?;

        let context = || format!("Failed to create collection in database '{database}'.");

        let exists = self
            .store
            .has_collection(database, collection)
            .await
            .map_err(|fault| ClientError::operation_failed(context(), fault))?;

        if !exists {
            self.store
                .create_collection(database, collection)
                .await
                .map_err(|fault| ClientError::operation_failed(context(), fault))?;
        }

        Ok(CollectionHandle::new(database, collection))
    }
}

fn deserialize_all<T: DeserializeOwned>(raw: Vec<Document>) -> Result<Vec<T>, ClientError> {
    raw.into_iter()
        .map(|doc| bson::from_document(doc).map_err(|e| ClientError::wrap(Box::new(e))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockConfig, MockDocumentStore};
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
    struct Order {
        id: String,
        total: i64,
    }

    fn client_over(mock: Arc<MockDocumentStore>) -> DocumentClient {
        DocumentClient::new(mock)
    }

    #[tokio::test]
    async fn test_list_database_names_passes_through_order() {
        let mock = Arc::new(MockDocumentStore::new());
        mock.seed_database("a");
        mock.seed_database("b");
        mock.seed_database("c");

        let client = client_over(mock.clone());
        let names = client.list_database_names().await.unwrap();

        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(mock.list_databases_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_database_names_custom_wrap_message() {
        let mock = Arc::new(MockDocumentStore::failing("down"));
        let client = client_over(mock);

        let err = client.list_database_names().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to get the database names due to exception."
        );
    }

    #[tokio::test]
    async fn test_list_collection_names_rejects_empty_database() {
        let mock = Arc::new(MockDocumentStore::new());
        let client = client_over(mock.clone());

        let err = client.list_collection_names("").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_collection_handle_is_local() {
        let mock = Arc::new(MockDocumentStore::new());
        let client = client_over(mock.clone());

        let handle = client.collection::<Order>("shop", "orders").unwrap();
        assert_eq!(handle.database(), "shop");
        assert_eq!(handle.name(), "orders");
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_list_documents_uses_collection_name_filter() {
        let mock = Arc::new(MockDocumentStore::new());
        mock.seed_documents(
            "shop",
            "orders",
            vec![doc! { "id": "o-1", "total": 10_i64 }],
        );
        let client = client_over(mock.clone());

        let _orders: Vec<Order> = client.list_documents("shop", "orders").await.unwrap();

        // Compatibility behavior: the by-names listing filters on the
        // collection name, not on an unrestricted filter.
        assert_eq!(mock.last_filter(), Some(doc! { "name": "orders" }));
    }

    #[tokio::test]
    async fn test_find_documents_passes_filter_through() {
        let mock = Arc::new(MockDocumentStore::new());
        mock.seed_documents(
            "shop",
            "orders",
            vec![doc! { "id": "o-1", "total": 10_i64 }],
        );
        let client = client_over(mock.clone());

        let handle = client.collection::<Order>("shop", "orders").unwrap();
        let filter = doc! { "total": { "$gt": 5_i64 } };
        let orders = client
            .find_documents(&handle, filter.clone())
            .await
            .unwrap();

        assert_eq!(
            orders,
            vec![Order {
                id: "o-1".to_string(),
                total: 10
            }]
        );
        assert_eq!(mock.last_filter(), Some(filter));
    }

    #[tokio::test]
    async fn test_insert_documents_echoes_count() {
        let mock = Arc::new(MockDocumentStore::new());
        let client = client_over(mock.clone());

        let handle = client.collection::<Order>("shop", "orders").unwrap();
        let orders = vec![
            Order {
                id: "o-1".to_string(),
                total: 1,
            },
            Order {
                id: "o-2".to_string(),
                total: 2,
            },
        ];

        let count = client.insert_documents(&handle, &orders).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(mock.stored_documents("shop", "orders").len(), 2);
    }

    #[tokio::test]
    async fn test_insert_documents_empty_slice_still_calls_store() {
        let mock = Arc::new(MockDocumentStore::new());
        let client = client_over(mock.clone());

        let handle = client.collection::<Order>("shop", "orders").unwrap();
        let count = client.insert_documents(&handle, &[]).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(mock.insert_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_collection_if_absent_creates_when_missing() {
        let mock = Arc::new(MockDocumentStore::new());
        mock.seed_database("shop");
        let client = client_over(mock.clone());

        let handle = client
            .create_collection_if_absent::<Order>("shop", "orders")
            .await
            .unwrap();

        assert_eq!(handle.name(), "orders");
        assert_eq!(mock.create_calls(), 1);
        assert!(
            mock.stored_collection_names("shop")
                .contains(&"orders".to_string())
        );
    }

    #[tokio::test]
    async fn test_create_collection_if_absent_skips_create_when_present() {
        let mock = Arc::new(MockDocumentStore::new());
        mock.seed_documents("shop", "orders", vec![]);
        mock.set_fail_on_create(true);
        let client = client_over(mock.clone());

        let handle = client
            .create_collection_if_absent::<Order>("shop", "orders")
            .await
            .unwrap();

        assert_eq!(handle.name(), "orders");
        assert_eq!(mock.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_collection_if_absent_wrap_names_database() {
        let mock = Arc::new(MockDocumentStore::with_config(MockConfig::failure(
            "refused",
        )));
        let client = client_over(mock);

        let err = client
            .create_collection_if_absent::<Order>("shop", "orders")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create collection in database 'shop'."
        );
    }
}

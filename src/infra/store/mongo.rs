//! MongoDB document store implementation.

use bson::Document;
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database};
use tracing::{info, instrument};

use crate::domain::{DocumentStore, StoreError};

/// [`DocumentStore`] backed by a [`mongodb::Client`].
///
/// The client is built eagerly from the connection string but no ping is
/// issued; an unreachable deployment only surfaces on the first operation.
/// Database and collection references are derived fresh on every call, as
/// the driver intends: they are cheap descriptors over the shared
/// connection pool, not resources worth caching.
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Builds a store from a MongoDB connection string.
    ///
    /// # Errors
    ///
    /// Fails if the driver rejects the connection string (malformed URI,
    /// unsupported options). Reachability is not checked here.
    pub async fn connect(connection_string: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(connection_string).await?;
        info!("MongoDB client constructed");
        Ok(Self { client })
    }

    /// Wraps an existing driver client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn database(&self, database: &str) -> Database {
        self.client.database(database)
    }

    fn collection(&self, database: &str, collection: &str) -> Collection<Document> {
        self.database(database).collection::<Document>(collection)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoStore {
    #[instrument(skip(self))]
    async fn list_database_names(&self) -> Result<Vec<String>, StoreError> {
        let names = self.client.list_database_names().await?;
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn list_collection_names(&self, database: &str) -> Result<Vec<String>, StoreError> {
        let names = self.database(database).list_collection_names().await?;
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn has_collection(&self, database: &str, collection: &str) -> Result<bool, StoreError> {
        let names = self.database(database).list_collection_names().await?;
        Ok(names.iter().any(|name| name == collection))
    }

    #[instrument(skip(self, filter))]
    async fn find_documents(
        &self,
        database: &str,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(database, collection).find(filter).await?;
        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn insert_documents(
        &self,
        database: &str,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<(), StoreError> {
        // Issued even for an empty batch; the driver's own complaint, if
        // any, is the fault the caller sees.
        self.collection(database, collection)
            .insert_many(documents)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_collection(&self, database: &str, collection: &str) -> Result<(), StoreError> {
        self.database(database).create_collection(collection).await?;
        Ok(())
    }
}

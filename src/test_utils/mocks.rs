//! Mock implementations for testing.
//!
//! `MockDocumentStore` is an in-memory stand-in for the real document store
//! collaborator. It records every call, keeps databases and collections in
//! seed order, and can be configured to fault on demand so wrap behavior
//! is testable without a server.

use async_trait::async_trait;
use bson::Document;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;

use crate::domain::{DocumentStore, StoreError};

/// Concrete fault type raised by the mock.
///
/// Tests downcast the preserved cause of a wrapped error back to this type
/// to verify the wrap is identity-preserving.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Mock store error: {0}")]
pub struct MockStoreError(pub String);

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, every operation faults.
    pub should_fail: bool,
    /// Custom fault message.
    pub error_message: Option<String>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }
}

#[derive(Default)]
struct MockData {
    databases: Vec<MockDatabase>,
}

struct MockDatabase {
    name: String,
    collections: Vec<MockCollection>,
}

struct MockCollection {
    name: String,
    documents: Vec<Document>,
}

impl MockData {
    fn database_mut(&mut self, name: &str) -> &mut MockDatabase {
        if let Some(idx) = self.databases.iter().position(|db| db.name == name) {
            return &mut self.databases[idx];
        }
        self.databases.push(MockDatabase {
            name: name.to_string(),
            collections: Vec::new(),
        });
        self.databases.last_mut().unwrap()
    }

    fn collection_mut(&mut self, database: &str, collection: &str) -> &mut MockCollection {
        let db = self.database_mut(database);
        if let Some(idx) = db.collections.iter().position(|c| c.name == collection) {
            return &mut db.collections[idx];
        }
        db.collections.push(MockCollection {
            name: collection.to_string(),
            documents: Vec::new(),
        });
        db.collections.last_mut().unwrap()
    }

    fn database(&self, name: &str) -> Option<&MockDatabase> {
        self.databases.iter().find(|db| db.name == name)
    }
}

/// Mock document store collaborator for testing.
///
/// Seeded state is returned in seed order. Query filters are recorded for
/// assertion but not evaluated; `find_documents` returns the whole
/// collection.
///
/// # Example
///
/// ```
/// use document_client::test_utils::{MockConfig, MockDocumentStore};
///
/// // A mock that succeeds
/// let mock = MockDocumentStore::new();
///
/// // A mock that faults on every call
/// let failing = MockDocumentStore::with_config(MockConfig::failure("store down"));
/// ```
pub struct MockDocumentStore {
    data: Mutex<MockData>,
    config: MockConfig,
    last_filter: Mutex<Option<Document>>,
    list_databases_calls: AtomicU64,
    list_collections_calls: AtomicU64,
    has_collection_calls: AtomicU64,
    find_calls: AtomicU64,
    insert_calls: AtomicU64,
    create_calls: AtomicU64,
    fail_on_create: AtomicBool,
}

impl MockDocumentStore {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            data: Mutex::new(MockData::default()),
            config,
            last_filter: Mutex::new(None),
            list_databases_calls: AtomicU64::new(0),
            list_collections_calls: AtomicU64::new(0),
            has_collection_calls: AtomicU64::new(0),
            find_calls: AtomicU64::new(0),
            insert_calls: AtomicU64::new(0),
            create_calls: AtomicU64::new(0),
            fail_on_create: AtomicBool::new(false),
        }
    }

    /// Creates a mock that faults on every call.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Registers a database with no collections.
    pub fn seed_database(&self, name: &str) {
        let mut data = self.data.lock().unwrap();
        data.database_mut(name);
    }

    /// Registers a collection seeded with the given documents.
    ///
    /// An empty vec registers the collection as existing but empty.
    pub fn seed_documents(&self, database: &str, collection: &str, documents: Vec<Document>) {
        let mut data = self.data.lock().unwrap();
        data.collection_mut(database, collection).documents = documents;
    }

    /// When set, a `create_collection` call panics, failing the test.
    ///
    /// Used to prove create-if-absent issues no create for an existing
    /// collection.
    pub fn set_fail_on_create(&self, fail: bool) {
        self.fail_on_create.store(fail, Ordering::Relaxed);
    }

    /// The filter passed to the most recent find call.
    pub fn last_filter(&self) -> Option<Document> {
        self.last_filter.lock().unwrap().clone()
    }

    /// Documents currently stored for a collection.
    pub fn stored_documents(&self, database: &str, collection: &str) -> Vec<Document> {
        let data = self.data.lock().unwrap();
        data.database(database)
            .and_then(|db| db.collections.iter().find(|c| c.name == collection))
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    /// Collection names currently registered for a database.
    pub fn stored_collection_names(&self, database: &str) -> Vec<String> {
        let data = self.data.lock().unwrap();
        data.database(database)
            .map(|db| db.collections.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default()
    }

    pub fn list_databases_calls(&self) -> u64 {
        self.list_databases_calls.load(Ordering::Relaxed)
    }

    pub fn list_collections_calls(&self) -> u64 {
        self.list_collections_calls.load(Ordering::Relaxed)
    }

    pub fn has_collection_calls(&self) -> u64 {
        self.has_collection_calls.load(Ordering::Relaxed)
    }

    pub fn find_calls(&self) -> u64 {
        self.find_calls.load(Ordering::Relaxed)
    }

    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::Relaxed)
    }

    pub fn create_calls(&self) -> u64 {
        self.create_calls.load(Ordering::Relaxed)
    }

    /// Total number of collaborator calls across all operations.
    pub fn total_calls(&self) -> u64 {
        self.list_databases_calls()
            + self.list_collections_calls()
            + self.has_collection_calls()
            + self.find_calls()
            + self.insert_calls()
            + self.create_calls()
    }

    fn check_should_fail(&self) -> Result<(), StoreError> {
        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock store failure".to_string());
            return Err(Box::new(MockStoreError(msg)));
        }
        Ok(())
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn list_database_names(&self) -> Result<Vec<String>, StoreError> {
        self.list_databases_calls.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail()?;

        let data = self.data.lock().unwrap();
        Ok(data.databases.iter().map(|db| db.name.clone()).collect())
    }

    async fn list_collection_names(&self, database: &str) -> Result<Vec<String>, StoreError> {
        self.list_collections_calls.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail()?;

        Ok(self.stored_collection_names(database))
    }

    async fn has_collection(&self, database: &str, collection: &str) -> Result<bool, StoreError> {
        self.has_collection_calls.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail()?;

        let data = self.data.lock().unwrap();
        Ok(data
            .database(database)
            .is_some_and(|db| db.collections.iter().any(|c| c.name == collection)))
    }

    async fn find_documents(
        &self,
        database: &str,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_filter.lock().unwrap() = Some(filter);
        self.check_should_fail()?;

        Ok(self.stored_documents(database, collection))
    }

    async fn insert_documents(
        &self,
        database: &str,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail()?;

        let mut data = self.data.lock().unwrap();
        data.collection_mut(database, collection)
            .documents
            .extend(documents);
        Ok(())
    }

    async fn create_collection(&self, database: &str, collection: &str) -> Result<(), StoreError> {
        if self.fail_on_create.load(Ordering::Relaxed) {
            panic!("create_collection called for a collection that already exists");
        }
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail()?;

        let mut data = self.data.lock().unwrap();
        data.collection_mut(database, collection);
        Ok(())
    }
}

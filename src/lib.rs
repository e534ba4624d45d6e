//! Document Client
//!
//! A typed, error-normalized facade over a MongoDB document store, built
//! for testability through trait-based abstraction and dependency
//! injection.
//!
//! # Architecture Overview
//!
//! This crate is organized into three main layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                Client Layer                  │
//! │  DocumentClient facade: preconditions, wrap  │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   DocumentStore trait, handles, errors       │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │     MongoStore adapter over mongodb          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Narrow surface**: seven pass-through operations over the driver —
//!   enumeration, typed handles, querying, bulk insert, and
//!   create-if-absent
//! - **One error kind per failure class**: argument preconditions fail fast
//!   as `InvalidArgument`; every driver fault is wrapped exactly once as
//!   `OperationFailed` with its cause preserved
//! - **Dependency injection**: the driver collaborator is an injected
//!   `Arc<dyn DocumentStore>`, never global state, so every operation is
//!   unit-testable against the bundled mock
//! - **Eager materialization**: cursors never cross the facade boundary;
//!   results are finite, ordered `Vec`s
//!
//! # Example
//!
//! ```ignore
//! use document_client::DocumentClient;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Order {
//!     id: String,
//!     total: i64,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), document_client::ClientError> {
//!     let client = DocumentClient::connect("mongodb://localhost:27017").await?;
//!
//!     let databases = client.list_database_names().await?;
//!     println!("databases: {databases:?}");
//!
//!     let orders = client.create_collection_if_absent::<Order>("shop", "orders").await?;
//!     let submitted = client
//!         .insert_documents(&orders, &[Order { id: "o-1".into(), total: 42 }])
//!         .await?;
//!     println!("submitted {submitted} documents");
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod domain;
pub mod infra;
pub mod test_utils;

pub use client::DocumentClient;
pub use domain::{ClientError, CollectionHandle, DocumentStore, StoreError};
pub use infra::MongoStore;

//! Concrete document store implementations.
//!
//! This module contains production adapters that implement the
//! `DocumentStore` trait defined in the domain layer.

pub mod mongo;

pub use mongo::MongoStore;

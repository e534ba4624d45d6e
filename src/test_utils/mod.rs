//! Test utilities and mock implementations.
//!
//! This module provides a reusable mock implementation of the document
//! store collaborator for use in unit and integration tests. It is
//! compiled unconditionally so downstream crates and this crate's own
//! `tests/` directory can both use it.

pub mod mocks;

pub use mocks::{MockConfig, MockDocumentStore, MockStoreError};

//! Infrastructure layer implementations.

pub mod store;

pub use store::MongoStore;

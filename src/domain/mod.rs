//! Domain layer containing core types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ClientError, DEFAULT_OPERATION_FAILED_MESSAGE, StoreError};
pub use traits::DocumentStore;
pub use types::CollectionHandle;

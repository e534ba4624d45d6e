//! Application layer containing the facade.

pub mod facade;

pub use facade::DocumentClient;

// src/core/mod.rs
//! Backend access: the `Backend` seam and its HTTP implementation

pub mod backend;
pub mod service_client;

pub use backend::{perform, ApiPayload, ApiRequest, Backend, Reply};
pub use service_client::ApiClient;

//! Riptide Application - Response normalization and ports
//!
//! This crate defines the application layer with:
//! - The response normalization pipeline (`decode`)
//! - Port traits (interfaces for external dependencies)
//! - The use case composing transport and normalization

pub mod call_api;
pub mod decode;
pub mod ports;

pub use call_api::CallApi;
pub use decode::{DecodeError, JsonObject, decode_many, decode_single};
pub use ports::HttpClient;

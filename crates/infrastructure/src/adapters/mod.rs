//! Port adapters
//!
//! Concrete implementations of application-layer ports.

mod reqwest_client;

pub use reqwest_client::{ClientConfig, ReqwestHttpClient};

//! Riptide Domain - Core API client types
//!
//! This crate defines the domain model for the Riptide API client:
//! the result algebra, the classified error, and the plain value
//! records exchanged with the transport layer. All types here are
//! pure Rust with no I/O dependencies.

pub mod error;
pub mod message;
pub mod request;
pub mod response;
pub mod result;

pub use error::{ApiError, ErrorCause, FormatError};
pub use message::HttpMessage;
pub use request::RequestParams;
pub use response::{RawResponse, TransportError};
pub use result::ApiResult;

//! Request and response types for the SNS notification API: topics,
//! subscriptions, publishing, mobile push endpoints, SMS and tagging.
//!
//! Every type follows the same shape. Fields start absent and attribute maps
//! start empty; all of them can be read, replaced or set fluently, and
//! attribute maps refuse a second entry under an existing key:
//!
//! ```ignore
//! let mut request = CreateTopicRequest::new("orders.fifo");
//! request.add_attributes_entry("FifoTopic", "true")?;
//! assert!(request.add_attributes_entry("FifoTopic", "false").is_err());
//! ```
//!
//! Requests reach the service through a caller supplied [`Transport`]; a
//! [`Client`] pairs each request with its typed result.

#[macro_use]
mod shape;

pub mod arn;
pub mod attributes;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod operation;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{DuplicateKeyError, Error, ErrorCode, ErrorType, ServiceError};
pub use model::*;
pub use operation::{Operation, Request, Response};
pub use transport::{Reply, Transport};

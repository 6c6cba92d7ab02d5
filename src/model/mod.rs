//! One request type per operation, one result type per operation that
//! returns data, and the value types nested inside them.

pub mod common;
pub mod permission;
pub mod platform;
pub mod publish;
pub mod sms;
pub mod subscription;
pub mod tagging;
pub mod topic;

pub use common::{MessageAttributeValue, ResponseMetadata, Tag};
pub use permission::*;
pub use platform::*;
pub use publish::*;
pub use sms::*;
pub use subscription::*;
pub use tagging::*;
pub use topic::*;

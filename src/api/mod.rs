//! Client for the external hosted-database (Notion) REST API.
//!
//! One write operation is supported: creating a record in a database. The
//! client is stateless apart from its pooled HTTP connections, so a single
//! instance can serve concurrent submissions without locking.

pub mod client;
pub mod constants;
pub mod properties;

pub use client::{NotionClient, RecordResult};
pub use properties::PropertyValue;

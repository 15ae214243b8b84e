// Upstream store module entry point
// Client for the external data store plus the record shapes it holds

mod client;
mod error;
mod records;
mod seed;

// Re-export public types
pub use client::{SchemaOutcome, UpstreamClient};
pub use error::UpstreamError;
pub use records::ToolRecord;
pub use seed::sample_tools;

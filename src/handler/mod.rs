//! Request handler module
//!
//! Responsible for action resolution and dispatching inbound requests to the
//! upstream client or the embedded homepage.

pub mod homepage;
pub mod router;

// Re-export main entry point
pub use router::handle_request;

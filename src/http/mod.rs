//! HTTP protocol layer module
//!
//! Provides response builders shared by the router, decoupled from business
//! logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_error_response, build_html_response, build_json_response,
    build_options_response,
};

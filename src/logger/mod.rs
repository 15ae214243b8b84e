//! Logger module
//!
//! Provides logging utilities for the gateway including:
//! - Server lifecycle logging
//! - Upstream bootstrap logging (auth, schema, seeding)
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info(&format!("{} started successfully", config.http.server_name));
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Upstream store: {}", config.upstream.base_url));
    write_info(&format!("Collection: {}", config.upstream.collection));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_auth_success(base_url: &str) {
    write_info(&format!("[Upstream] Authenticated against {base_url}"));
}

pub fn log_auth_degraded(base_url: &str, reason: &str) {
    write_error(&format!(
        "[WARN] Authentication against {base_url} failed: {reason}"
    ));
    write_error("[WARN] Continuing in read-only mode; data endpoints depend on the upstream");
}

pub fn log_collection_created(name: &str) {
    write_info(&format!("[Upstream] Collection '{name}' created"));
}

pub fn log_collection_exists(name: &str) {
    write_info(&format!("[Upstream] Collection '{name}' already exists"));
}

pub fn log_schema_error(name: &str, reason: &str) {
    write_error(&format!(
        "[ERROR] Failed to declare collection '{name}': {reason}"
    ));
}

pub fn log_seed_failure(tool_name: &str, reason: &str) {
    write_error(&format!("[ERROR] Failed to seed '{tool_name}': {reason}"));
}

pub fn log_seed_summary(accepted: usize, total: usize) {
    write_info(&format!("[Upstream] Seeded {accepted}/{total} sample tools"));
}

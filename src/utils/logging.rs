//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::path::Path;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation, past tense
/// * `path` - Path of the file that was operated on
/// * `rows` - Number of data rows processed
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize) {
    log::info!("Successfully {} {} rows to {}", operation, rows, path.display());
}

//! CLI output: error mapping from client errors to a stable CLI surface.

use crate::error::ApiError;

/// Map client errors to a single line for CLI output.
/// Non-success responses show the backend's `detail` message when it sent one.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Status {
            method,
            url,
            status,
            ..
        } => match e.detail() {
            Some(detail) => format!("{} {} returned status {}: {}", method, url, status, detail),
            None => e.to_string(),
        },
        _ => e.to_string(),
    }
}

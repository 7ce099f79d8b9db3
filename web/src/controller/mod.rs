pub(crate) mod health_check_controller;
pub(crate) mod log_session_controller;
pub(crate) mod log_stream_controller;

use serde::Serialize;

/// Envelope for JSON endpoint responses: the HTTP status code alongside the
/// payload, so clients can read both from the body.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    status_code: u16,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) fn new(status_code: u16, data: T) -> Self {
        Self { status_code, data }
    }
}

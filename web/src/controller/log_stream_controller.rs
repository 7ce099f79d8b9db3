use crate::{AppState, Error};

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use log::*;
use std::sync::Arc;

/// GET /logs/stream/{session_id}
///
/// Stream a provisioned log session as Server-Sent Events. Each chunk read
/// from the source is delivered as one `data:` event. The connection closes
/// on client disconnect, end of source, source failure, or shutdown, and
/// the session is evicted whichever way it ends; an unknown session ID
/// closes the stream without writing any frames.
#[utoipa::path(
    get,
    path = "/logs/stream/{session_id}",
    params(
        ("session_id" = String, Path, description = "Log session ID returned by provisioning"),
    ),
    responses(
        (status = 200, description = "An event stream of raw log chunks"),
        (status = 422, description = "Malformed session ID"),
    )
)]
pub async fn stream(
    State(app_state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET log stream for session: {session_id}");

    if session_id.trim().is_empty() {
        return Err(Error::from(DomainError {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Invalid),
        }));
    }

    let cancel = app_state.shutdown.child_token();
    let sse =
        sse::forwarder::sse_response(Arc::clone(&app_state.session_registry), session_id, cancel);

    Ok((
        [
            (header::CONNECTION, "keep-alive"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        sse,
    ))
}

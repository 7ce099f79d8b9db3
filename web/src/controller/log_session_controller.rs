use crate::controller::ApiResponse;
use crate::params::log_session::CreateParams;
use crate::{AppState, Error};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::SessionDescriptor;
use log::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Response for the provisioning endpoint: the ID the client streams with.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CreateResponse {
    pub(crate) session_id: String,
}

/// POST /logs/sessions
///
/// Provision a new log session against the gateway's configured source. The
/// returned session ID is consumed by one streaming connection and evicted
/// when that connection ends.
#[utoipa::path(
    post,
    path = "/logs/sessions",
    request_body = CreateParams,
    responses(
        (status = 201, description = "Log session provisioned", body = CreateResponse),
        (status = 422, description = "Malformed resource URI"),
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST new log session for resource: {}", params.resource_uri);

    params.validate()?;

    let session_id = uuid::Uuid::new_v4().to_string();
    let descriptor =
        SessionDescriptor::new(Arc::clone(&app_state.source_handle), params.resource_uri);
    app_state.register_session(session_id.clone(), descriptor);

    info!("Provisioned log session {session_id}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.into(),
            CreateResponse { session_id },
        )),
    ))
}

use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for provisioning a new log session.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateParams {
    /// Path of the log stream to open on the source, e.g. `/logs/pod-1`.
    pub(crate) resource_uri: String,
}

impl CreateParams {
    /// The resource URI must be a non-empty absolute path.
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.resource_uri.trim().is_empty() || !self.resource_uri.starts_with('/') {
            return Err(DomainError {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Invalid),
            });
        }
        Ok(())
    }
}

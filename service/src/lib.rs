use config::Config;
use domain::{Error, LogSource, SessionDescriptor, SourceHandle};
use log::info;
use sse::{SessionId, SessionRegistry};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub mod config;
pub mod logging;

/// Builds the authenticated handle used to reach the remote log source.
/// Constructed once at startup and shared by reference with every session
/// provisioned against it.
pub fn init_source_handle(config: &Config) -> Result<SourceHandle, Error> {
    info!("Log source config: base_url={}", config.log_source_url());

    SourceHandle::new(
        config.log_source_url(),
        config.log_source_auth_token().as_deref(),
    )
}

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub session_registry: Arc<SessionRegistry>,
    pub source_handle: Arc<dyn LogSource>,
    pub shutdown: CancellationToken,
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config, source_handle: Arc<dyn LogSource>) -> Self {
        Self {
            session_registry: Arc::new(SessionRegistry::new()),
            source_handle,
            shutdown: CancellationToken::new(),
            config: app_config,
        }
    }

    pub fn registry_ref(&self) -> &SessionRegistry {
        self.session_registry.as_ref()
    }

    /// Collaborator interface for the provisioning flow: stores `descriptor`
    /// under `session_id` so a client can stream it.
    pub fn register_session(&self, session_id: SessionId, descriptor: SessionDescriptor) {
        self.session_registry.set(session_id, descriptor);
    }
}

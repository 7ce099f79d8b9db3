use crate::gateway::log_source::LogSource;
use std::fmt;
use std::sync::Arc;

/// The registry's stored record of how to reach one streamable log source.
///
/// A descriptor is immutable once stored: replacing the descriptor for a
/// session means inserting a new value, never mutating in place. The source
/// handle is shared by reference; the descriptor does not own its lifecycle.
#[derive(Clone)]
pub struct SessionDescriptor {
    source_handle: Arc<dyn LogSource>,
    resource_uri: String,
}

impl SessionDescriptor {
    pub fn new(source_handle: Arc<dyn LogSource>, resource_uri: impl Into<String>) -> Self {
        Self {
            source_handle,
            resource_uri: resource_uri.into(),
        }
    }

    pub fn source_handle(&self) -> &Arc<dyn LogSource> {
        &self.source_handle
    }

    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }
}

impl fmt::Debug for SessionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SessionDescriptor")
            .field("resource_uri", &self.resource_uri)
            .finish_non_exhaustive()
    }
}

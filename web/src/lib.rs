//! Web layer for the logstream gateway: the axum router, controllers, typed
//! endpoint params, and the error-to-status mapping. The streaming core
//! (session registry and forwarder) lives in the `sse` crate; this crate
//! only adapts it to HTTP.

pub(crate) mod controller;
mod error;
pub(crate) mod params;
pub mod router;

pub use error::{Error, Result};
pub use service::AppState;

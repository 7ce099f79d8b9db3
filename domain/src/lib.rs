//! Domain layer for the logstream gateway.
//!
//! This crate holds the data model for streamable log sessions, the outbound
//! gateway used to reach a remote log source, and the error tree shared by
//! the layers above it. It has no knowledge of HTTP routing or the session
//! registry; those live in the `web` and `sse` crates respectively.

pub mod error;
pub mod gateway;
pub mod session;

pub use error::Error;
pub use gateway::log_source::{ByteStream, LogSource, SourceHandle};
pub use session::SessionDescriptor;

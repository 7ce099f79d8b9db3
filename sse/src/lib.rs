//! Server-Sent Events (SSE) streaming core for the logstream gateway.
//!
//! This crate provides the two pieces of the gateway that carry real
//! concurrency and failure-handling concerns:
//!
//! - **Session registry**: a concurrent map from opaque session IDs to
//!   [`domain::SessionDescriptor`] values. Entries are created by the
//!   provisioning flow and consumed exactly once by the forwarder.
//! - **Streaming forwarder**: the per-connection loop that resolves a
//!   session ID, opens a byte stream from the descriptor's source, relays
//!   each chunk as one SSE event, and evicts the session on every exit path.
//!
//! # Lifecycle
//!
//! 1. The provisioning flow stores a descriptor under a fresh session ID.
//! 2. A client requests `/logs/stream/{session_id}`; the web layer hands the
//!    ID to [`forwarder::sse_response`].
//! 3. The forwarder looks the ID up, opens the source stream, and relays
//!    chunks until the client disconnects, the source ends, the source
//!    fails, or the server shuts down.
//! 4. Whichever way the connection ends, the session is removed from the
//!    registry exactly once and the source stream is released. A session is
//!    therefore good for a single streaming connection; resumption requires
//!    provisioning a new session.
//!
//! Sessions are ephemeral: nothing survives a process restart, and one
//! session never feeds more than one connection at a time.

pub mod forwarder;
pub mod registry;

pub use registry::{SessionId, SessionRegistry};

#[cfg(test)]
pub(crate) mod test_support;

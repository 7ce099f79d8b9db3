use crate::registry::{SessionId, SessionRegistry};
use async_stream::stream;
use axum::response::sse::{Event, KeepAlive, Sse};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use log::*;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Removes the session from the registry when the forwarder is torn down.
/// Dropping the guard is the single eviction point for every exit path,
/// including the client dropping the response body mid-stream.
struct EvictionGuard {
    registry: Arc<SessionRegistry>,
    session_id: SessionId,
}

impl Drop for EvictionGuard {
    fn drop(&mut self) {
        self.registry.delete(&self.session_id);
    }
}

/// Relays raw chunks for `session_id` until a terminal condition.
///
/// The stream ends, with the session evicted, on any of: the session ID not
/// being registered (a normal outcome, the connection closes with no
/// frames), the source refusing to open, the source reaching end of stream,
/// a mid-stream read error, or `cancel` firing. Cancellation is re-checked
/// at every iteration boundary and wins any race against a completed read.
/// Empty chunks are suppressed, never forwarded.
pub fn frames(
    registry: Arc<SessionRegistry>,
    session_id: SessionId,
    cancel: CancellationToken,
) -> impl Stream<Item = Bytes> {
    stream! {
        let _eviction = EvictionGuard {
            registry: Arc::clone(&registry),
            session_id: session_id.clone(),
        };

        let Some(descriptor) = registry.get(&session_id) else {
            warn!("Log session {session_id} not found");
            return;
        };

        let mut source = match descriptor
            .source_handle()
            .open(descriptor.resource_uri())
            .await
        {
            Ok(source) => source,
            Err(err) => {
                warn!("Failed to open log source for session {session_id}: {err}");
                return;
            }
        };

        loop {
            let chunk = tokio::select! {
                // Biased so a pending cancellation beats a completed read.
                biased;
                _ = cancel.cancelled() => {
                    debug!("Log session {session_id} cancelled");
                    return;
                }
                chunk = source.next() => chunk,
            };

            match chunk {
                Some(Ok(bytes)) if bytes.is_empty() => continue,
                Some(Ok(bytes)) => yield bytes,
                Some(Err(err)) => {
                    error!("Log session {session_id} failed mid-stream: {err}");
                    return;
                }
                None => {
                    debug!("Log session {session_id} reached end of source");
                    return;
                }
            }
        }
    }
}

/// SSE response body for one log session: every relayed chunk becomes one
/// `data:` event, delivered as soon as it is produced.
pub fn sse_response(
    registry: Arc<SessionRegistry>,
    session_id: SessionId,
    cancel: CancellationToken,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = frames(registry, session_id, cancel).map(|chunk| {
        let text = String::from_utf8_lossy(&chunk);
        // SSE data fields cannot carry carriage returns.
        Ok(Event::default().data(text.replace('\r', "")))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

//! Scriptable [`LogSource`] implementations shared by the registry and
//! forwarder tests.

use async_trait::async_trait;
use bytes::Bytes;
use domain::error::{DomainErrorKind, Error, ExternalErrorKind};
use domain::{ByteStream, LogSource, SessionDescriptor};
use futures::StreamExt;
use std::sync::{Arc, Mutex};

pub(crate) fn read_error() -> Error {
    Error {
        source: None,
        error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
    }
}

/// Yields a fixed script of chunks, then ends. Each instance can be opened
/// once, which matches how the forwarder consumes a session.
struct ScriptedSource {
    chunks: Mutex<Option<Vec<Result<Bytes, Error>>>>,
}

#[async_trait]
impl LogSource for ScriptedSource {
    async fn open(&self, _resource_uri: &str) -> Result<ByteStream, Error> {
        let chunks = self
            .chunks
            .lock()
            .unwrap()
            .take()
            .expect("scripted source opened twice");
        Ok(futures::stream::iter(chunks).boxed())
    }
}

/// Opens successfully but never yields a chunk and never ends.
struct PendingSource;

#[async_trait]
impl LogSource for PendingSource {
    async fn open(&self, _resource_uri: &str) -> Result<ByteStream, Error> {
        Ok(futures::stream::pending::<Result<Bytes, Error>>().boxed())
    }
}

/// Opens successfully with an immediately-ended stream.
struct NullSource;

#[async_trait]
impl LogSource for NullSource {
    async fn open(&self, _resource_uri: &str) -> Result<ByteStream, Error> {
        Ok(futures::stream::empty::<Result<Bytes, Error>>().boxed())
    }
}

/// Refuses to open at all, like an unreachable or rejecting source.
struct FailingSource;

#[async_trait]
impl LogSource for FailingSource {
    async fn open(&self, _resource_uri: &str) -> Result<ByteStream, Error> {
        Err(Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                "source refused to open".to_string(),
            )),
        })
    }
}

pub(crate) fn descriptor(resource_uri: impl Into<String>) -> SessionDescriptor {
    SessionDescriptor::new(Arc::new(NullSource), resource_uri)
}

pub(crate) fn scripted_descriptor(chunks: Vec<Result<Bytes, Error>>) -> SessionDescriptor {
    SessionDescriptor::new(
        Arc::new(ScriptedSource {
            chunks: Mutex::new(Some(chunks)),
        }),
        "/logs/scripted",
    )
}

pub(crate) fn pending_descriptor() -> SessionDescriptor {
    SessionDescriptor::new(Arc::new(PendingSource), "/logs/pending")
}

pub(crate) fn failing_open_descriptor() -> SessionDescriptor {
    SessionDescriptor::new(Arc::new(FailingSource), "/logs/failing")
}

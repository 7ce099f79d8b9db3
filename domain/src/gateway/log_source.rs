use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use log::*;

/// A fallible stream of raw log bytes read from a source.
pub type ByteStream = BoxStream<'static, Result<Bytes, Error>>;

/// Seam between the streaming forwarder and whatever produces log bytes.
///
/// The forwarder treats a source purely as "open a resource URI, get back a
/// byte stream or an error". Implementations own the connection and
/// authentication details needed to reach the source.
#[async_trait]
pub trait LogSource: Send + Sync {
    async fn open(&self, resource_uri: &str) -> Result<ByteStream, Error>;
}

/// HTTP client handle for reaching a remote log source. The client is built
/// once with the necessary authentication headers and reused across every
/// session that references it.
pub struct SourceHandle {
    http: reqwest::Client,
    base_url: String,
}

impl SourceHandle {
    pub fn new(base_url: &str, auth_token: Option<&str>) -> Result<Self, Error> {
        let headers = build_auth_headers(auth_token)?;

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LogSource for SourceHandle {
    async fn open(&self, resource_uri: &str) -> Result<ByteStream, Error> {
        let url = format!("{}{}", self.base_url, resource_uri);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Log source rejected {resource_uri} with status {status}");
            return Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(format!(
                    "log source returned status {status}"
                ))),
            });
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Error::from))
            .boxed())
    }
}

fn build_auth_headers(auth_token: Option<&str>) -> Result<reqwest::header::HeaderMap, Error> {
    let mut headers = reqwest::header::HeaderMap::new();

    if let Some(token) = auth_token {
        let mut auth_value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| {
                warn!("Failed to create auth header value: {:?}", err);
                Error {
                    source: Some(Box::new(err)),
                    error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
                }
            })?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_streams_the_response_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/logs/pod-1")
            .with_status(200)
            .with_body("line one\nline two\n")
            .create_async()
            .await;

        let handle = SourceHandle::new(&server.url(), None).unwrap();
        let mut stream = handle.open("/logs/pod-1").await.unwrap();

        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }

        assert_eq!(collected, b"line one\nline two\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn open_sends_the_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/logs/pod-1")
            .match_header("authorization", "Bearer sekrit")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let handle = SourceHandle::new(&server.url(), Some("sekrit")).unwrap();
        handle.open("/logs/pod-1").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn open_rejects_non_success_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/logs/gone")
            .with_status(404)
            .create_async()
            .await;

        let handle = SourceHandle::new(&server.url(), None).unwrap();
        let err = handle.open("/logs/gone").await.err().expect("expected an error");

        assert!(matches!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Other(_))
        ));
    }

    #[tokio::test]
    async fn open_maps_transport_failures_to_network_errors() {
        // Nothing listens on this port, so the connection itself fails.
        let handle = SourceHandle::new("http://127.0.0.1:1", None).unwrap();
        let err = handle.open("/logs/pod-1").await.err().expect("expected an error");

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Network)
        );
    }

    #[test]
    fn new_strips_trailing_slashes_from_the_base_url() {
        let handle = SourceHandle::new("http://source.local/", None).unwrap();
        assert_eq!(handle.base_url(), "http://source.local");
    }
}

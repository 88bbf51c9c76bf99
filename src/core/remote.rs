use crate::adapters::http::ReqwestTransport;
use crate::core::{HttpTransport, RemoteSpecSource, SpecDocument};
use crate::utils::error::{Result, SpecError};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_SPEC_URL: &str = "https://api.supabase.com/api/v1-json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct RemoteFetcher<T: HttpTransport = ReqwestTransport> {
    transport: T,
    url: String,
    timeout: Duration,
}

impl<T: HttpTransport> RemoteFetcher<T> {
    pub fn new(transport: T, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            transport,
            url: url.into(),
            timeout,
        }
    }

    /// Single GET against the configured endpoint, keeping the failure cause.
    pub async fn try_fetch(&self) -> Result<SpecDocument> {
        let response = self.transport.get(&self.url, self.timeout).await?;

        if !response.is_success() {
            return Err(SpecError::RemoteStatus {
                status: response.status,
            });
        }

        let document =
            SpecDocument::from_slice(&response.body).map_err(SpecError::MalformedRemoteSpec)?;
        if document.is_empty() {
            return Err(SpecError::EmptyRemoteSpec);
        }

        Ok(document)
    }
}

#[async_trait]
impl<T: HttpTransport> RemoteSpecSource for RemoteFetcher<T> {
    async fn fetch_remote(&self) -> Option<SpecDocument> {
        match self.try_fetch().await {
            Ok(document) => {
                tracing::debug!("Fetched remote spec from {}", self.url);
                Some(document)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch remote spec from {}: {}", self.url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransportResponse;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Transport that replays a canned outcome and counts calls.
    struct MockTransport {
        outcome: fn() -> Result<TransportResponse>,
        calls: Arc<AtomicUsize>,
    }

    impl MockTransport {
        fn new(outcome: fn() -> Result<TransportResponse>) -> Self {
            Self {
                outcome,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, _url: &str, _timeout: Duration) -> Result<TransportResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn sample_body() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "openapi": "3.0.0",
            "paths": {"/v1/test": {"get": {"operationId": "test"}}}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_remote_success() {
        let transport = MockTransport::new(|| {
            Ok(TransportResponse {
                status: 200,
                body: sample_body(),
            })
        });
        let calls = transport.calls.clone();
        let fetcher = RemoteFetcher::new(transport, "http://spec.test", DEFAULT_TIMEOUT);

        let result = fetcher.fetch_remote().await.unwrap();

        assert_eq!(result.get("openapi"), Some(&json!("3.0.0")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_remote_api_error() {
        let transport = MockTransport::new(|| {
            Ok(TransportResponse {
                status: 500,
                body: Vec::new(),
            })
        });
        let fetcher = RemoteFetcher::new(transport, "http://spec.test", DEFAULT_TIMEOUT);

        assert!(matches!(
            fetcher.try_fetch().await,
            Err(SpecError::RemoteStatus { status: 500 })
        ));
        assert!(fetcher.fetch_remote().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_remote_network_error() {
        let transport = MockTransport::new(|| {
            Err(SpecError::Transport {
                message: "Network error".to_string(),
            })
        });
        let calls = transport.calls.clone();
        let fetcher = RemoteFetcher::new(transport, "http://spec.test", DEFAULT_TIMEOUT);

        assert!(fetcher.fetch_remote().await.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_remote_malformed_body() {
        let transport = MockTransport::new(|| {
            Ok(TransportResponse {
                status: 200,
                body: b"<html>maintenance</html>".to_vec(),
            })
        });
        let fetcher = RemoteFetcher::new(transport, "http://spec.test", DEFAULT_TIMEOUT);

        assert!(matches!(
            fetcher.try_fetch().await,
            Err(SpecError::MalformedRemoteSpec(_))
        ));
        assert!(fetcher.fetch_remote().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_remote_empty_document() {
        let transport = MockTransport::new(|| {
            Ok(TransportResponse {
                status: 200,
                body: b"{}".to_vec(),
            })
        });
        let fetcher = RemoteFetcher::new(transport, "http://spec.test", DEFAULT_TIMEOUT);

        assert!(matches!(
            fetcher.try_fetch().await,
            Err(SpecError::EmptyRemoteSpec)
        ));
    }

    #[tokio::test]
    async fn test_fetch_remote_over_http() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1-json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"openapi": "3.0.0", "paths": {}}));
        });

        let fetcher = RemoteFetcher::new(
            ReqwestTransport::new(),
            server.url("/api/v1-json"),
            DEFAULT_TIMEOUT,
        );
        let result = fetcher.fetch_remote().await.unwrap();

        api_mock.assert();
        assert_eq!(result.to_value(), json!({"openapi": "3.0.0", "paths": {}}));
    }

    #[tokio::test]
    async fn test_fetch_remote_timeout_is_absent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"openapi": "3.0.0"}));
        });

        let fetcher = RemoteFetcher::new(
            ReqwestTransport::new(),
            server.url("/slow"),
            Duration::from_millis(200),
        );

        assert!(matches!(fetcher.try_fetch().await, Err(SpecError::Http(_))));
    }
}

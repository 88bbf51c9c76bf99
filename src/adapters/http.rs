use crate::domain::ports::{HttpTransport, TransportResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<TransportResponse> {
        tracing::debug!("Making spec request to: {}", url);
        let response = self.client.get(url).timeout(timeout).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("Spec response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SpecError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1-json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"openapi":"3.0.0"}"#);
        });

        let transport = ReqwestTransport::new();
        let response = transport
            .get(&server.url("/api/v1-json"), Duration::from_secs(5))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.body, br#"{"openapi":"3.0.0"}"#.to_vec());
    }

    #[tokio::test]
    async fn test_with_client_uses_prebuilt_client() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1-json")
                .header("user-agent", "spec-manager-test");
            then.status(200).body(r#"{"openapi":"3.1.0"}"#);
        });

        let client = Client::builder()
            .user_agent("spec-manager-test")
            .build()
            .unwrap();
        let response = ReqwestTransport::with_client(client)
            .get(&server.url("/api/v1-json"), Duration::from_secs(5))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        });

        let response = ReqwestTransport::new()
            .get(&server.url("/"), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let result = ReqwestTransport::new()
            .get("http://127.0.0.1:1/", Duration::from_secs(5))
            .await;

        assert!(matches!(result, Err(SpecError::Http(_))));
    }
}

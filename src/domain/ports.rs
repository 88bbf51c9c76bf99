use crate::domain::model::SpecDocument;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Raw response handed back by an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, timeout: Duration) -> Result<TransportResponse>;
}

#[async_trait]
pub trait RemoteSpecSource: Send + Sync {
    /// One attempt; every failure comes back as `None`.
    async fn fetch_remote(&self) -> Option<SpecDocument>;
}

pub trait LocalSpecSource: Send + Sync {
    fn load_local(&self) -> Result<SpecDocument>;
}

pub trait ConfigProvider: Send + Sync {
    fn spec_url(&self) -> &str;
    fn local_spec_path(&self) -> &Path;
    fn request_timeout(&self) -> Duration;
}

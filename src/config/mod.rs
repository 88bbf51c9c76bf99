#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::local::DEFAULT_LOCAL_SPEC_PATH;
use crate::core::remote::{DEFAULT_SPEC_URL, DEFAULT_TIMEOUT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved settings for building a spec manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecConfig {
    pub spec_url: String,
    pub local_spec_path: PathBuf,
    pub timeout_seconds: u64,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            spec_url: DEFAULT_SPEC_URL.to_string(),
            local_spec_path: PathBuf::from(DEFAULT_LOCAL_SPEC_PATH),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ConfigProvider for SpecConfig {
    fn spec_url(&self) -> &str {
        &self.spec_url
    }

    fn local_spec_path(&self) -> &Path {
        &self.local_spec_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for SpecConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_spec_url("spec_url", &self.spec_url)?;
        validation::validate_spec_path("local_spec_path", &self.local_spec_path)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

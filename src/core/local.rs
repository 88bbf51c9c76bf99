use crate::core::{LocalSpecSource, SpecDocument};
use crate::utils::error::{Result, SpecError};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCAL_SPEC_PATH: &str = "specs/api_spec.json";

#[derive(Debug, Clone)]
pub struct LocalLoader {
    path: PathBuf,
}

impl LocalLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalLoader {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_SPEC_PATH)
    }
}

impl LocalSpecSource for LocalLoader {
    fn load_local(&self) -> Result<SpecDocument> {
        tracing::debug!("Reading local spec from {}", self.path.display());

        let data = fs::read(&self.path).map_err(|source| SpecError::LocalSpecUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let document =
            SpecDocument::from_slice(&data).map_err(|source| SpecError::MalformedLocalSpec {
                path: self.path.clone(),
                source,
            })?;

        if document.is_empty() {
            return Err(SpecError::EmptyLocalSpec {
                path: self.path.clone(),
            });
        }

        Ok(document)
    }
}

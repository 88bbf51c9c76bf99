pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::http::ReqwestTransport;
pub use crate::config::SpecConfig;
pub use crate::core::{
    local::LocalLoader,
    manager::{DefaultSpecManager, SpecManager},
    remote::RemoteFetcher,
};
pub use crate::domain::model::{SpecDocument, SpecOrigin, SpecState};
pub use crate::utils::error::{Result, SpecError};

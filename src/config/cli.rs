use crate::config::toml_config::TomlConfig;
use crate::config::SpecConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "spec-manager")]
#[command(about = "Load an OpenAPI spec from a remote endpoint with a local fallback")]
pub struct CliConfig {
    /// Remote spec endpoint
    #[arg(long)]
    pub spec_url: Option<String>,

    /// Bundled fallback spec file
    #[arg(long)]
    pub local_spec_path: Option<PathBuf>,

    /// Remote request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Print the loaded spec as pretty JSON")]
    pub print: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file (if any), then explicit flags.
    pub fn resolve(&self) -> Result<SpecConfig> {
        let mut config = SpecConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(url) = &self.spec_url {
            config.spec_url = url.clone();
        }
        if let Some(path) = &self.local_spec_path {
            config.local_spec_path = path.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        Ok(config)
    }
}

use crate::adapters::http::ReqwestTransport;
use crate::core::local::LocalLoader;
use crate::core::remote::RemoteFetcher;
use crate::core::{
    ConfigProvider, LoadedSpec, LocalSpecSource, RemoteSpecSource, SpecDocument, SpecOrigin,
    SpecState,
};
use crate::utils::error::{Result, SpecError};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

pub type DefaultSpecManager = SpecManager<RemoteFetcher<ReqwestTransport>, LocalLoader>;

/// Holds the process-wide OpenAPI spec.
///
/// Construction does no I/O. [`SpecManager::on_startup`] fetches the remote
/// spec, falls back to the local copy, and stores the first document it gets.
/// The slot is written at most once and never cleared.
pub struct SpecManager<R: RemoteSpecSource, L: LocalSpecSource> {
    remote: R,
    local: L,
    spec: OnceLock<LoadedSpec>,
    state: AtomicU8,
}

impl<R: RemoteSpecSource, L: LocalSpecSource> SpecManager<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self {
            remote,
            local,
            spec: OnceLock::new(),
            state: AtomicU8::new(SpecState::Unloaded as u8),
        }
    }

    pub fn state(&self) -> SpecState {
        SpecState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn origin(&self) -> Option<SpecOrigin> {
        self.spec.get().map(|loaded| loaded.origin)
    }

    /// Runs once. Dropping this future mid-fetch leaves the phase at
    /// `Loading`, and later calls return `StartupAlreadyAttempted`.
    pub async fn on_startup(&self) -> Result<()> {
        if let Err(current) = self.state.compare_exchange(
            SpecState::Unloaded as u8,
            SpecState::Loading as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            let state = SpecState::from_u8(current);
            if state == SpecState::Loaded {
                tracing::debug!("OpenAPI spec already loaded, skipping startup");
                return Ok(());
            }
            return Err(SpecError::StartupAlreadyAttempted { state });
        }

        let loaded = match self.remote.fetch_remote().await {
            Some(document) => LoadedSpec {
                document,
                origin: SpecOrigin::Remote,
            },
            None => {
                tracing::info!("Remote spec unavailable, falling back to local spec");
                match self.local.load_local() {
                    Ok(document) => LoadedSpec {
                        document,
                        origin: SpecOrigin::Local,
                    },
                    Err(e) => {
                        tracing::error!("Failed to load local spec: {}", e);
                        self.state
                            .store(SpecState::Failed as u8, Ordering::Release);
                        return Err(e);
                    }
                }
            }
        };

        let origin = loaded.origin;
        // The phase guard admits one writer, so the slot is still empty here.
        let _ = self.spec.set(loaded);
        self.state.store(SpecState::Loaded as u8, Ordering::Release);

        tracing::info!("OpenAPI spec loaded from {} source", origin);
        Ok(())
    }

    pub fn get_spec(&self) -> Result<&SpecDocument> {
        self.spec
            .get()
            .map(|loaded| &loaded.document)
            .ok_or(SpecError::NotLoaded)
    }
}

impl DefaultSpecManager {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let remote = RemoteFetcher::new(
            ReqwestTransport::new(),
            config.spec_url(),
            config.request_timeout(),
        );
        let local = LocalLoader::new(config.local_spec_path());
        Self::new(remote, local)
    }
}

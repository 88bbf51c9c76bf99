pub mod local;
pub mod manager;
pub mod remote;

pub use crate::domain::model::{LoadedSpec, SpecDocument, SpecOrigin, SpecState};
pub use crate::domain::ports::{
    ConfigProvider, HttpTransport, LocalSpecSource, RemoteSpecSource, TransportResponse,
};
pub use crate::utils::error::Result;

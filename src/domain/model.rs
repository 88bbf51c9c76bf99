use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An OpenAPI document held as an uninterpreted JSON mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecDocument(Map<String, Value>);

impl SpecDocument {
    /// Parses a JSON object. Arrays and scalars are rejected.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `{}` carries no paths or metadata, so both sources treat it as no document.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for SpecDocument {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecOrigin {
    Remote,
    Local,
}

impl fmt::Display for SpecOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecOrigin::Remote => write!(f, "remote"),
            SpecOrigin::Local => write!(f, "local"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedSpec {
    pub document: SpecDocument,
    pub origin: SpecOrigin,
}

/// Lifecycle of the held spec. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SpecState {
    Unloaded = 0,
    Loading = 1,
    Loaded = 2,
    Failed = 3,
}

impl SpecState {
    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => SpecState::Loading,
            2 => SpecState::Loaded,
            3 => SpecState::Failed,
            _ => SpecState::Unloaded,
        }
    }
}

impl fmt::Display for SpecState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecState::Unloaded => "unloaded",
            SpecState::Loading => "loading",
            SpecState::Loaded => "loaded",
            SpecState::Failed => "failed",
        };
        f.write_str(name)
    }
}

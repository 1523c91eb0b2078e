use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where a façade result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Fallback,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }
}

/// A result tagged with its provenance so a served-from-memory answer is
/// never mistaken for a live backend answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn remote(data: T) -> Self {
        Self {
            source: DataSource::Remote,
            data,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            source: DataSource::Fallback,
            data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            source: self.source,
            data: f(self.data),
        }
    }

    /// Pair two results; the pair only counts as remote if both were.
    pub fn zip<U>(self, other: Sourced<U>) -> Sourced<(T, U)> {
        let source = if self.source == DataSource::Remote && other.source == DataSource::Remote {
            DataSource::Remote
        } else {
            DataSource::Fallback
        };
        Sourced {
            source,
            data: (self.data, other.data),
        }
    }
}

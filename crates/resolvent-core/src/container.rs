//! The lookup-service capability consumed by container-backed strategies.

use std::error::Error;
use std::fmt;

use crate::value::Value;

/// A read-only lookup service mapping string identifiers to values.
///
/// This is the only view of the host's service container the engine
/// needs: an existence check and retrieval. Implementations decide what
/// an identifier means (a service id, a type name, a configuration key).
/// `get` on an unknown identifier is an error; callers that want to
/// probe first use `has`.
pub trait Container: fmt::Debug + Send + Sync {
    /// Returns true when `id` is known to this container.
    fn has(&self, id: &str) -> bool;

    /// Retrieves the entry registered for `id`.
    fn get(&self, id: &str) -> Result<Value, ContainerError>;
}

/// Failure reported by a [`Container`].
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// No entry exists for the identifier.
    #[error("no entry was found for identifier \"{id}\"")]
    NotFound { id: String },

    /// The entry exists but could not be produced.
    #[error("retrieval of \"{id}\" failed: {source}")]
    Retrieval {
        id: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ContainerError {
    pub fn not_found(id: impl Into<String>) -> Self {
        ContainerError::NotFound { id: id.into() }
    }

    pub fn retrieval(
        id: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        ContainerError::Retrieval {
            id: id.into(),
            source: source.into(),
        }
    }

    /// The identifier whose lookup failed.
    pub fn id(&self) -> &str {
        match self {
            ContainerError::NotFound { id } | ContainerError::Retrieval { id, .. } => id,
        }
    }
}

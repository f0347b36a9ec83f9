//! Core data model for the resolvent parameter-resolution engine.
//!
//! This crate provides the vocabulary types the engine crate operates on:
//! - Runtime values (`Value`, `ValueKind`, `Instance`)
//! - Declared types and matching (`TypeName`, `Builtin`, `TypeSpec`)
//! - Parameter descriptors (`ParamDescriptor`)
//! - Declarative per-parameter metadata (`InjectSpec`, `ConfigSpec`)
//! - Caller-supplied and resolved argument maps (`ProvidedArgs`, `ResolvedMap`)
//! - Configuration path traversal (`config_path`)
//! - The lookup-service capability (`Container`)
//! - The structured failure model (`ResolveError`, `ResolveErrorKind`)
//!
//! Everything here is pure data plus a few stateless algorithms; the
//! strategy chain that drives resolution lives in the `resolvent` crate.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered map with the fast non-cryptographic hasher used
/// throughout the workspace.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

// Runtime values and service instances
pub mod value;
pub use value::{Instance, Value, ValueKind};

// Declared types and the matcher
pub mod types;
pub use types::{Builtin, TypeName, TypeSpec};

// Declarative per-parameter metadata records
pub mod metadata;
pub use metadata::{ConfigSpec, InjectSpec, MetadataKind, ParamMetadata};

// Parameter descriptors
pub mod descriptor;
pub use descriptor::ParamDescriptor;

// Provided/resolved argument maps and the strategy result pair
pub mod args;
pub use args::{ArgKey, ProvidedArgs, ResolvedMap, ResolvedPair};

// Nested configuration path traversal
pub mod config_path;
pub use config_path::PathError;

// Lookup-service capability
pub mod container;
pub use container::{Container, ContainerError};

// Structured resolution failures
pub mod error;
pub use error::{ResolveError, ResolveErrorKind};

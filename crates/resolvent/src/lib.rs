//! Strategy-chain parameter resolution.
//!
//! A [`ResolverChain`] owns an ordered list of [`ResolveStrategy`]
//! implementations. For each parameter descriptor it consults the
//! strategies in registration order; the first one with an opinion wins,
//! the winning value is validated against the parameter's declared type,
//! and failures surface as [`ResolveError`] values carrying the full
//! call context.
//!
//! The built-in strategies cover:
//! - caller-provided values by name or position ([`ProvidedValueResolver`])
//! - provided instances matched by declared type ([`TypeScanResolver`])
//! - configuration entries addressed by path ([`ConfigResolver`])
//! - explicit service identifiers ([`InjectResolver`])
//! - container lookups keyed by the declared type name ([`ContainerTypeResolver`])
//! - declared defaults and nullability ([`DefaultValueResolver`], [`NullableResolver`])
//!
//! Chains are built once at composition time and shared; resolution
//! itself never mutates the chain or the lookup service.

// The strategy capability and the chain that drives it
pub mod chain;
pub mod strategy;
pub use chain::ResolverChain;
pub use strategy::ResolveStrategy;

// Built-in strategies, named in their conventional order
pub mod strategies;
pub use strategies::{
    ConfigResolver, ContainerTypeResolver, DefaultValueResolver, InjectResolver, NullableResolver,
    ProvidedValueResolver, TypeScanResolver,
};

// A map-backed container for tests and small composition roots
pub mod registry;
pub use registry::ServiceRegistry;

// Core data model, re-exported so hosts need a single import
pub use resolvent_core::{
    ArgKey, Builtin, ConfigSpec, Container, ContainerError, FxIndexMap, InjectSpec, Instance,
    MetadataKind, ParamDescriptor, ParamMetadata, PathError, ProvidedArgs, ResolveError,
    ResolveErrorKind, ResolvedMap, ResolvedPair, TypeName, TypeSpec, Value, ValueKind, config_path,
};

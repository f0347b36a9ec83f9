//! The built-in resolution strategies.
//!
//! Each strategy is small and single-purpose; composition order is the
//! caller's business. [`crate::ResolverChain::with_defaults`] arranges
//! them in the conventional order.

mod by_type;
mod config;
mod fallback;
mod inject;
mod provided;
mod type_scan;

pub use by_type::ContainerTypeResolver;
pub use config::ConfigResolver;
pub use fallback::{DefaultValueResolver, NullableResolver};
pub use inject::InjectResolver;
pub use provided::ProvidedValueResolver;
pub use type_scan::TypeScanResolver;

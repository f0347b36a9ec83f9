//! Structured resolution failures carrying the complete call context.
//!
//! Failures are built in two layers. Strategies and the chain's
//! validation step produce a bare [`ResolveErrorKind`]; the chain then
//! attaches the failing descriptor, the verbatim provided arguments and
//! everything resolved before the failure, yielding a [`ResolveError`].
//! Nothing is summarized away: the caller sees exactly what the engine saw.

use std::error::Error;
use std::fmt;

use crate::args::{ProvidedArgs, ResolvedMap};
use crate::config_path::PathError;
use crate::container::ContainerError;
use crate::descriptor::ParamDescriptor;
use crate::types::TypeSpec;
use crate::value::Value;

/// What went wrong, before call context is attached.
#[derive(Debug)]
pub enum ResolveErrorKind {
    /// Every strategy abstained and no fallback applied.
    Unresolvable,

    /// A strategy produced a value the declared type rejects. Carries the
    /// offending value verbatim.
    TypeMismatch { expected: TypeSpec, value: Value },

    /// A configuration path walk failed.
    ConfigPath(PathError),

    /// The lookup service failed while fetching an identifier or a
    /// configuration root.
    Lookup(ContainerError),
}

impl From<PathError> for ResolveErrorKind {
    fn from(err: PathError) -> Self {
        ResolveErrorKind::ConfigPath(err)
    }
}

impl From<ContainerError> for ResolveErrorKind {
    fn from(err: ContainerError) -> Self {
        ResolveErrorKind::Lookup(err)
    }
}

/// A parameter-resolution failure with its full call context.
#[derive(Debug)]
pub struct ResolveError {
    kind: ResolveErrorKind,
    param: ParamDescriptor,
    provided: ProvidedArgs,
    resolved: ResolvedMap,
}

impl ResolveError {
    pub fn new(
        kind: ResolveErrorKind,
        param: ParamDescriptor,
        provided: ProvidedArgs,
        resolved: ResolvedMap,
    ) -> Self {
        ResolveError {
            kind,
            param,
            provided,
            resolved,
        }
    }

    pub fn kind(&self) -> &ResolveErrorKind {
        &self.kind
    }

    /// Descriptor of the parameter that failed to resolve.
    pub fn param(&self) -> &ParamDescriptor {
        &self.param
    }

    /// The provided arguments exactly as the caller supplied them.
    pub fn provided(&self) -> &ProvidedArgs {
        &self.provided
    }

    /// Parameters resolved before the failure, keyed by position.
    pub fn resolved(&self) -> &ResolvedMap {
        &self.resolved
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResolveErrorKind::Unresolvable => {
                write!(
                    f,
                    "cannot resolve parameter #{} ({})",
                    self.param.position() + 1,
                    self.param.name()
                )?;
                if let Some(owner) = self.param.owner() {
                    write!(f, " for {owner}")?;
                }
                Ok(())
            }
            ResolveErrorKind::TypeMismatch { expected, value } => write!(
                f,
                "argument #{} ({}) must be of type {}, {} given",
                self.param.position() + 1,
                self.param.name(),
                expected,
                value.type_label()
            ),
            ResolveErrorKind::ConfigPath(inner) => {
                write!(f, "An error occurred during parameter resolving: {inner}")
            }
            ResolveErrorKind::Lookup(inner) => {
                write!(f, "An error occurred during parameter resolving: {inner}")
            }
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ResolveErrorKind::ConfigPath(inner) => Some(inner),
            ResolveErrorKind::Lookup(inner) => Some(inner),
            ResolveErrorKind::Unresolvable | ResolveErrorKind::TypeMismatch { .. } => None,
        }
    }
}

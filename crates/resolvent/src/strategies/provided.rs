//! Caller-provided values, by name then by position.

use resolvent_core::{ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair};

use crate::strategy::ResolveStrategy;

/// Resolves a parameter from the provided arguments, preferring the
/// entry keyed by the parameter's name over the one keyed by its
/// position. Presence is key-exists: a provided null is a resolution,
/// not an absence.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProvidedValueResolver;

impl ResolveStrategy for ProvidedValueResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        let value = provided
            .get_named(param.name())
            .or_else(|| provided.get_positional(param.position()));
        Ok(value.map(|value| ResolvedPair::new(param.position(), value.clone())))
    }
}

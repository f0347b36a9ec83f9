//! Declared defaults and nullability, conventionally the last resorts.

use resolvent_core::{ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair, Value};

use crate::strategy::ResolveStrategy;

/// Yields the descriptor's declared default value, when it has one.
/// A declared default of null counts.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultValueResolver;

impl ResolveStrategy for DefaultValueResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        _provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        Ok(param
            .default_value()
            .map(|value| ResolvedPair::new(param.position(), value.clone())))
    }
}

/// Yields null for parameters that allow it. Placed after
/// [`DefaultValueResolver`] in the conventional order so a declared
/// default beats the null.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullableResolver;

impl ResolveStrategy for NullableResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        _provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        Ok(param
            .allows_null()
            .then(|| ResolvedPair::new(param.position(), Value::Null)))
    }
}

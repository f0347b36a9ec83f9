//! Explicit-identifier resolution backed by the lookup service.

use std::sync::Arc;

use resolvent_core::{Container, ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair};

use crate::strategy::ResolveStrategy;

/// Resolves parameters carrying an explicit service identifier by
/// fetching that identifier from the lookup service. A record without an
/// identifier yields no opinion; falling back to the declared type name
/// is [`super::ContainerTypeResolver`]'s job and must be opted into
/// separately.
#[derive(Clone, Debug)]
pub struct InjectResolver {
    container: Arc<dyn Container>,
}

impl InjectResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        InjectResolver { container }
    }
}

impl ResolveStrategy for InjectResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        _provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        let Some(spec) = param.inject_spec() else {
            return Ok(None);
        };
        let id = match spec.id() {
            Some(id) if !id.is_empty() => id,
            _ => return Ok(None),
        };
        let value = self.container.get(id)?;
        Ok(Some(ResolvedPair::new(param.position(), value)))
    }
}

//! Declared-type resolution against the lookup service.

use std::sync::Arc;

use resolvent_core::{Container, ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair};

use crate::strategy::ResolveStrategy;

/// Resolves a parameter by asking the lookup service for its declared
/// type name. Union members are tried in declared order; the first
/// registered one wins. Built-in members and untyped parameters yield no
/// opinion. The service is probed with `has` before `get`, so an
/// unregistered type falls through to later strategies instead of
/// erroring; a `get` failure after a positive probe is a hard error.
#[derive(Clone, Debug)]
pub struct ContainerTypeResolver {
    container: Arc<dyn Container>,
}

impl ContainerTypeResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        ContainerTypeResolver { container }
    }
}

impl ResolveStrategy for ContainerTypeResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        _provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        let Some(declared) = param.declared_type() else {
            return Ok(None);
        };
        for member in declared.members() {
            if member.is_builtin() {
                continue;
            }
            if self.container.has(member.as_str()) {
                let value = self.container.get(member.as_str())?;
                return Ok(Some(ResolvedPair::new(param.position(), value)));
            }
        }
        Ok(None)
    }
}

//! Configuration-path resolution backed by the lookup service.

use std::sync::Arc;

use resolvent_core::{
    Container, ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair, config_path,
};

use crate::strategy::ResolveStrategy;

/// Resolves parameters carrying a configuration-path record by fetching
/// the record's root resource from the lookup service and walking it
/// along the path segments. Failures here are hard errors, not
/// fallthroughs: a parameter that names a configuration path expects it
/// to resolve.
#[derive(Clone, Debug)]
pub struct ConfigResolver {
    container: Arc<dyn Container>,
}

impl ConfigResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        ConfigResolver { container }
    }
}

impl ResolveStrategy for ConfigResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        _provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        let Some(spec) = param.config_spec() else {
            return Ok(None);
        };
        let root = self.container.get(spec.root_key())?;
        let value = config_path::resolve(&root, spec.path_segments())?;
        Ok(Some(ResolvedPair::new(param.position(), value.clone())))
    }
}

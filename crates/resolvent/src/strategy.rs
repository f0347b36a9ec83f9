//! The capability every resolution strategy implements.

use std::any::Any;
use std::fmt;

use resolvent_core::{ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair};

/// One way of producing a value for a parameter.
///
/// Strategies are consulted in registration order. `Ok(None)` means "no
/// opinion, ask the next one" and is distinct from a successful
/// resolution to null, which is `Ok(Some(pair))` with a null value.
/// `Err` aborts resolution of the parameter; the chain attaches call
/// context before surfacing it, so strategies report the bare kind.
///
/// Strategies hold no mutable state across calls. The container-backed
/// ones keep an immutable handle to the lookup service and never write
/// through it, which is what makes a chain shareable between threads.
///
/// `Any` is a supertrait so a chain can be checked for the presence of a
/// concrete strategy type; `Debug` names strategies in trace output.
pub trait ResolveStrategy: Any + fmt::Debug + Send + Sync {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind>;
}

//! The ordered strategy chain and its resolution driver.

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, trace};

use resolvent_core::{
    Container, ParamDescriptor, ProvidedArgs, ResolveError, ResolveErrorKind, ResolvedMap,
    ResolvedPair,
};

use crate::strategies::{
    ConfigResolver, ContainerTypeResolver, DefaultValueResolver, InjectResolver, NullableResolver,
    ProvidedValueResolver, TypeScanResolver,
};
use crate::strategy::ResolveStrategy;

/// An ordered list of [`ResolveStrategy`] values driving resolution.
///
/// A chain is built during composition and then shared for the life of
/// the process: `resolve_one` and `resolve_all` take `&self` and never
/// mutate anything. `append`/`prepend`/`extend` require exclusive access,
/// while the `with_*` variants return a modified copy and leave the
/// original untouched. Cloning a chain clones strategy handles, not
/// strategies.
#[derive(Clone, Debug, Default)]
pub struct ResolverChain {
    strategies: Vec<Arc<dyn ResolveStrategy>>,
}

impl ResolverChain {
    /// An empty chain. Strategies are consulted in the order added.
    pub fn new() -> Self {
        ResolverChain::default()
    }

    /// The conventional stack: caller-provided values first, then
    /// provided instances by declared type, then the three
    /// container-backed strategies, with declared defaults and
    /// nullability as the final fallbacks.
    pub fn with_defaults(container: Arc<dyn Container>) -> Self {
        let mut chain = ResolverChain::new();
        chain
            .append(Arc::new(ProvidedValueResolver))
            .append(Arc::new(TypeScanResolver))
            .append(Arc::new(ConfigResolver::new(Arc::clone(&container))))
            .append(Arc::new(InjectResolver::new(Arc::clone(&container))))
            .append(Arc::new(ContainerTypeResolver::new(container)))
            .append(Arc::new(DefaultValueResolver))
            .append(Arc::new(NullableResolver));
        chain
    }

    pub fn append(&mut self, strategy: Arc<dyn ResolveStrategy>) -> &mut Self {
        self.strategies.push(strategy);
        self
    }

    /// Inserts at the front; the new strategy is consulted first.
    pub fn prepend(&mut self, strategy: Arc<dyn ResolveStrategy>) -> &mut Self {
        self.strategies.insert(0, strategy);
        self
    }

    pub fn extend(
        &mut self,
        strategies: impl IntoIterator<Item = Arc<dyn ResolveStrategy>>,
    ) -> &mut Self {
        self.strategies.extend(strategies);
        self
    }

    /// Returns a copy with `strategy` appended; `self` is untouched.
    #[must_use]
    pub fn with_appended(&self, strategy: Arc<dyn ResolveStrategy>) -> Self {
        let mut copy = self.clone();
        copy.append(strategy);
        copy
    }

    /// Returns a copy with `strategy` at the front; `self` is untouched.
    #[must_use]
    pub fn with_prepended(&self, strategy: Arc<dyn ResolveStrategy>) -> Self {
        let mut copy = self.clone();
        copy.prepend(strategy);
        copy
    }

    /// Returns a copy with `strategies` appended in order; `self` is
    /// untouched.
    #[must_use]
    pub fn with_extended(
        &self,
        strategies: impl IntoIterator<Item = Arc<dyn ResolveStrategy>>,
    ) -> Self {
        let mut copy = self.clone();
        copy.extend(strategies);
        copy
    }

    /// Membership by instance identity: true iff this exact handle was
    /// added to the chain.
    pub fn contains(&self, strategy: &Arc<dyn ResolveStrategy>) -> bool {
        self.strategies
            .iter()
            .any(|existing| std::ptr::addr_eq(Arc::as_ptr(existing), Arc::as_ptr(strategy)))
    }

    /// Membership by concrete strategy type.
    pub fn contains_kind<S: ResolveStrategy>(&self) -> bool {
        self.strategies.iter().any(|strategy| {
            let any: &dyn Any = &**strategy;
            any.is::<S>()
        })
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// The strategies in consultation order.
    pub fn strategies(&self) -> &[Arc<dyn ResolveStrategy>] {
        &self.strategies
    }

    /// Resolves a single parameter.
    ///
    /// Strategies run in order; the first opinion wins. When the
    /// descriptor declares a type, the winning value must match it, with
    /// one exception: a null value for a null-allowing parameter passes
    /// without a type check. If every strategy abstains the parameter is
    /// unresolvable. `resolved` is what the current multi-parameter call
    /// has accumulated so far and travels on every error verbatim.
    pub fn resolve_one(
        &self,
        param: &ParamDescriptor,
        provided: &ProvidedArgs,
        resolved: &ResolvedMap,
    ) -> Result<ResolvedPair, ResolveError> {
        trace!(
            parameter = param.name(),
            strategies = self.strategies.len(),
            "resolving parameter"
        );
        for strategy in &self.strategies {
            let outcome = strategy.resolve(param, provided).map_err(|kind| {
                ResolveError::new(kind, param.clone(), provided.clone(), resolved.clone())
            })?;
            let Some(pair) = outcome else {
                continue;
            };
            trace!(parameter = param.name(), strategy = ?strategy, "strategy produced a value");

            if let Some(declared) = param.declared_type() {
                let null_allowed = pair.value.is_null() && param.allows_null();
                if !null_allowed && !declared.matches(&pair.value) {
                    return Err(ResolveError::new(
                        ResolveErrorKind::TypeMismatch {
                            expected: declared.clone(),
                            value: pair.value,
                        },
                        param.clone(),
                        provided.clone(),
                        resolved.clone(),
                    ));
                }
            }
            return Ok(pair);
        }

        Err(ResolveError::new(
            ResolveErrorKind::Unresolvable,
            param.clone(),
            provided.clone(),
            resolved.clone(),
        ))
    }

    /// Resolves every descriptor, in the given order, into a
    /// position-keyed map. All-or-nothing: the first failure aborts and
    /// carries everything resolved before it.
    pub fn resolve_all(
        &self,
        params: &[ParamDescriptor],
        provided: &ProvidedArgs,
    ) -> Result<ResolvedMap, ResolveError> {
        let mut resolved = ResolvedMap::default();
        for param in params {
            let pair = self.resolve_one(param, provided, &resolved)?;
            resolved.insert(pair.position, pair.value);
        }
        debug!(parameters = params.len(), "signature resolved");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvent_core::Value;

    #[derive(Debug)]
    struct Fixed(Value);

    impl ResolveStrategy for Fixed {
        fn resolve(
            &self,
            param: &ParamDescriptor,
            _provided: &ProvidedArgs,
        ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
            Ok(Some(ResolvedPair::new(param.position(), self.0.clone())))
        }
    }

    #[derive(Debug)]
    struct Silent;

    impl ResolveStrategy for Silent {
        fn resolve(
            &self,
            _param: &ParamDescriptor,
            _provided: &ProvidedArgs,
        ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
            Ok(None)
        }
    }

    fn param() -> ParamDescriptor {
        ParamDescriptor::new("value", 0)
    }

    #[test]
    fn test_first_opinion_wins() {
        let mut chain = ResolverChain::new();
        chain
            .append(Arc::new(Silent))
            .append(Arc::new(Fixed(Value::from("first"))))
            .append(Arc::new(Fixed(Value::from("second"))));

        let pair = chain
            .resolve_one(&param(), &ProvidedArgs::new(), &ResolvedMap::default())
            .unwrap();
        assert_eq!(pair.value, Value::from("first"));
    }

    #[test]
    fn test_prepend_is_consulted_first() {
        let mut chain = ResolverChain::new();
        chain.append(Arc::new(Fixed(Value::from("appended"))));
        chain.prepend(Arc::new(Fixed(Value::from("prepended"))));

        let pair = chain
            .resolve_one(&param(), &ProvidedArgs::new(), &ResolvedMap::default())
            .unwrap();
        assert_eq!(pair.value, Value::from("prepended"));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_with_appended_leaves_original_untouched() {
        let original = ResolverChain::new();
        let extended = original.with_appended(Arc::new(Silent));

        assert!(original.is_empty());
        assert_eq!(extended.len(), 1);
    }

    #[test]
    fn test_with_prepended_copies_and_orders() {
        let mut original = ResolverChain::new();
        original.append(Arc::new(Fixed(Value::from("old"))));

        let copy = original.with_prepended(Arc::new(Fixed(Value::from("new"))));
        let pair = copy
            .resolve_one(&param(), &ProvidedArgs::new(), &ResolvedMap::default())
            .unwrap();
        assert_eq!(pair.value, Value::from("new"));
        assert_eq!(original.len(), 1);
    }

    #[test]
    fn test_contains_is_identity_not_equality() {
        let added: Arc<dyn ResolveStrategy> = Arc::new(Silent);
        let other: Arc<dyn ResolveStrategy> = Arc::new(Silent);

        let mut chain = ResolverChain::new();
        chain.append(Arc::clone(&added));

        assert!(chain.contains(&added));
        assert!(!chain.contains(&other));
        assert!(chain.contains_kind::<Silent>());
        assert!(!chain.contains_kind::<Fixed>());
    }

    #[test]
    fn test_empty_chain_is_unresolvable() {
        let chain = ResolverChain::new();
        let err = chain
            .resolve_one(&param(), &ProvidedArgs::new(), &ResolvedMap::default())
            .unwrap_err();
        assert!(matches!(err.kind(), ResolveErrorKind::Unresolvable));
    }

    #[test]
    fn test_resolved_so_far_travels_on_errors() {
        let chain = ResolverChain::new();
        let mut resolved = ResolvedMap::default();
        resolved.insert(0, Value::from("done"));

        let err = chain
            .resolve_one(
                &ParamDescriptor::new("next", 1),
                &ProvidedArgs::new(),
                &resolved,
            )
            .unwrap_err();
        assert_eq!(err.resolved().get(&0), Some(&Value::from("done")));
    }
}

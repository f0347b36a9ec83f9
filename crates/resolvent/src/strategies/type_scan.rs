//! Declared-type scan over the provided arguments.

use resolvent_core::{ParamDescriptor, ProvidedArgs, ResolveErrorKind, ResolvedPair};

use crate::strategy::ResolveStrategy;

/// Resolves a parameter whose declared type names a service by looking
/// at what the caller provided. For each non-built-in member of the
/// declared type, in declared order: first an entry keyed by the type
/// name itself, then the first provided instance of that type in
/// insertion order. Built-in members never participate; untyped
/// parameters yield no opinion.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeScanResolver;

impl ResolveStrategy for TypeScanResolver {
    fn resolve(
        &self,
        param: &ParamDescriptor,
        provided: &ProvidedArgs,
    ) -> Result<Option<ResolvedPair>, ResolveErrorKind> {
        let Some(declared) = param.declared_type() else {
            return Ok(None);
        };
        for member in declared.members() {
            if member.is_builtin() {
                continue;
            }
            if let Some(value) = provided.get_named(member.as_str()) {
                return Ok(Some(ResolvedPair::new(param.position(), value.clone())));
            }
            if let Some(value) = provided.values().find(|value| member.matches(value)) {
                return Ok(Some(ResolvedPair::new(param.position(), value.clone())));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvent_core::{Instance, TypeSpec, Value};

    fn logger() -> Value {
        Value::Instance(Instance::new("FileLogger", ()).implementing(["Logger"]))
    }

    fn param_of(type_spec: TypeSpec) -> ParamDescriptor {
        ParamDescriptor::new("svc", 0).with_type(type_spec)
    }

    #[test]
    fn test_entry_keyed_by_type_name_wins() {
        let mut provided = ProvidedArgs::new();
        provided.insert("other", logger());
        provided.insert("Logger", "keyed-entry");

        let pair = TypeScanResolver
            .resolve(&param_of(TypeSpec::named("Logger")), &provided)
            .unwrap()
            .unwrap();
        assert_eq!(pair.value, Value::from("keyed-entry"));
    }

    #[test]
    fn test_scan_finds_first_instance_in_insertion_order() {
        let first = Value::Instance(Instance::new("FileLogger", 1u8).implementing(["Logger"]));
        let second = Value::Instance(Instance::new("NullLogger", 2u8).implementing(["Logger"]));

        let mut provided = ProvidedArgs::new();
        provided.insert("a", first.clone());
        provided.insert("b", second);

        let pair = TypeScanResolver
            .resolve(&param_of(TypeSpec::named("Logger")), &provided)
            .unwrap()
            .unwrap();
        assert_eq!(pair.value, first);
    }

    #[test]
    fn test_union_members_tried_left_to_right() {
        let cache = Value::Instance(Instance::new("RedisCache", ()).implementing(["Cache"]));
        let mut provided = ProvidedArgs::new();
        provided.insert("c", cache.clone());
        provided.insert("l", logger());

        let spec = TypeSpec::union(["Cache", "Logger"]);
        let pair = TypeScanResolver
            .resolve(&param_of(spec), &provided)
            .unwrap()
            .unwrap();
        assert_eq!(pair.value, cache);
    }

    #[test]
    fn test_builtin_members_are_skipped() {
        let mut provided = ProvidedArgs::new();
        provided.insert("string", "should not be picked by type name");

        let outcome = TypeScanResolver
            .resolve(&param_of(TypeSpec::named("string")), &provided)
            .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_untyped_parameter_yields_no_opinion() {
        let mut provided = ProvidedArgs::new();
        provided.insert("x", logger());

        let outcome = TypeScanResolver
            .resolve(&ParamDescriptor::new("svc", 0), &provided)
            .unwrap();
        assert!(outcome.is_none());
    }
}

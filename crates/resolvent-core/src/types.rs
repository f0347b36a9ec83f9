//! Declared parameter types and runtime matching.
//!
//! A declared type is an ordered, non-empty list of named members: one for a
//! plain declaration, several for a union. Each member either names a
//! builtin primitive marker (matched by runtime kind) or a nominal type
//! (matched against an instance's type name and interfaces). Union members
//! are always tried left to right, in declaration order.

use std::fmt;

use smallvec::SmallVec;

use crate::value::{Value, ValueKind};

// =============================================================================
// Builtin markers
// =============================================================================

/// Builtin primitive markers accepted in type declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    String,
    Int,
    Float,
    Bool,
    /// Any container value, sequence or map.
    Array,
    /// Any instance, regardless of nominal type.
    Object,
    Null,
    /// Matches every value, including null.
    Mixed,
}

impl Builtin {
    /// Recognizes the lowercase marker names; anything else is nominal.
    pub fn parse(name: &str) -> Option<Builtin> {
        match name {
            "string" => Some(Builtin::String),
            "int" => Some(Builtin::Int),
            "float" => Some(Builtin::Float),
            "bool" => Some(Builtin::Bool),
            "array" => Some(Builtin::Array),
            "object" => Some(Builtin::Object),
            "null" => Some(Builtin::Null),
            "mixed" => Some(Builtin::Mixed),
            _ => None,
        }
    }

    /// Strict kind check; no numeric coercion (`int` does not satisfy
    /// `float`).
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Builtin::String => value.kind() == ValueKind::String,
            Builtin::Int => value.kind() == ValueKind::Int,
            Builtin::Float => value.kind() == ValueKind::Float,
            Builtin::Bool => value.kind() == ValueKind::Bool,
            Builtin::Array => matches!(value.kind(), ValueKind::Array | ValueKind::Map),
            Builtin::Object => value.kind() == ValueKind::Instance,
            Builtin::Null => value.is_null(),
            Builtin::Mixed => true,
        }
    }
}

// =============================================================================
// TypeName
// =============================================================================

/// One member of a type declaration.
///
/// The builtin classification is computed once at construction; everything
/// that is not a recognized marker is a nominal type name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeName {
    name: String,
    builtin: Option<Builtin>,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let builtin = Builtin::parse(&name);
        TypeName { name, builtin }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn builtin(&self) -> Option<Builtin> {
        self.builtin
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin.is_some()
    }

    /// Whether `value` satisfies this member alone.
    pub fn matches(&self, value: &Value) -> bool {
        match self.builtin {
            Some(builtin) => builtin.matches(value),
            None => value.as_instance().is_some_and(|i| i.is(&self.name)),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        TypeName::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        TypeName::new(name)
    }
}

// =============================================================================
// TypeSpec
// =============================================================================

/// A declared type: a single named member or an ordered union.
///
/// Displays the way it would be declared, members joined by `|`:
///
/// ```
/// use resolvent_core::TypeSpec;
///
/// let spec = TypeSpec::union(["Logger", "string"]);
/// assert_eq!(spec.to_string(), "Logger|string");
/// assert!(spec.is_union());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSpec {
    members: SmallVec<[TypeName; 2]>,
}

impl TypeSpec {
    pub fn named(name: impl Into<TypeName>) -> Self {
        TypeSpec {
            members: SmallVec::from_iter([name.into()]),
        }
    }

    /// Builds a union in declaration order. Member order is significant:
    /// scanning and lookup strategies try members left to right.
    pub fn union<I, T>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let members: SmallVec<[TypeName; 2]> =
            members.into_iter().map(Into::into).collect();
        assert!(!members.is_empty(), "a union type needs at least one member");
        TypeSpec { members }
    }

    pub fn is_union(&self) -> bool {
        self.members.len() > 1
    }

    pub fn members(&self) -> &[TypeName] {
        &self.members
    }

    /// Whether the declaration explicitly lists the `null` marker.
    pub fn includes_null(&self) -> bool {
        self.members
            .iter()
            .any(|m| m.builtin() == Some(Builtin::Null))
    }

    /// Checks `value` against this declaration: true iff any member
    /// matches, short-circuiting on the first hit.
    ///
    /// Null acceptance through a descriptor's nullability flag is the
    /// caller's concern; here a null value matches only an explicit `null`
    /// (or `mixed`) member.
    pub fn matches(&self, value: &Value) -> bool {
        self.members.iter().any(|member| member.matches(value))
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

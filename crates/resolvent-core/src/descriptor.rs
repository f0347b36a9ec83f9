//! Parameter descriptors.
//!
//! A descriptor is the read-only view of one formal parameter that the
//! host's introspection layer hands to the engine: name, position, declared
//! type, default, nullability, an optional declaring-signature label for
//! diagnostics, and the attached metadata records.

use smallvec::SmallVec;

use crate::metadata::{ConfigSpec, InjectSpec, MetadataKind, ParamMetadata};
use crate::types::TypeSpec;
use crate::value::Value;

/// Describes one formal parameter of a signature.
///
/// Positions are 0-based, unique within a signature, and assigned once at
/// introspection time; the position is the join key of the final resolved
/// map. Built with chained constructors:
///
/// ```
/// use resolvent_core::{ConfigSpec, ParamDescriptor, TypeSpec};
///
/// let host = ParamDescriptor::new("host", 0)
///     .with_type(TypeSpec::named("string"))
///     .with_metadata(ConfigSpec::path("database.host"))
///     .with_owner("Database::connect");
/// assert_eq!(host.position(), 0);
/// assert!(host.config_spec().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParamDescriptor {
    name: String,
    position: u32,
    declared_type: Option<TypeSpec>,
    default: Option<Value>,
    nullable: bool,
    owner: Option<String>,
    metadata: SmallVec<[ParamMetadata; 1]>,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        ParamDescriptor {
            name: name.into(),
            position,
            declared_type: None,
            default: None,
            nullable: false,
            owner: None,
            metadata: SmallVec::new(),
        }
    }

    pub fn with_type(mut self, spec: TypeSpec) -> Self {
        self.declared_type = Some(spec);
        self
    }

    /// Declares a default value. `Value::Null` is a real default here, as
    /// distinct from having no default at all.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Marks null as an acceptable resolution for this parameter.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Declaring-signature label used in diagnostics, e.g. `"Mailer::send"`.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Attaches a metadata record, replacing any existing record of the
    /// same kind.
    pub fn with_metadata(mut self, metadata: impl Into<ParamMetadata>) -> Self {
        let metadata = metadata.into();
        self.metadata.retain(|m| m.kind() != metadata.kind());
        self.metadata.push(metadata);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn declared_type(&self) -> Option<&TypeSpec> {
        self.declared_type.as_ref()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn allows_null(&self) -> bool {
        self.nullable
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn metadata(&self, kind: MetadataKind) -> Option<&ParamMetadata> {
        self.metadata.iter().find(|m| m.kind() == kind)
    }

    pub fn inject_spec(&self) -> Option<&InjectSpec> {
        match self.metadata(MetadataKind::Inject) {
            Some(ParamMetadata::Inject(spec)) => Some(spec),
            _ => None,
        }
    }

    pub fn config_spec(&self) -> Option<&ConfigSpec> {
        match self.metadata(MetadataKind::Config) {
            Some(ParamMetadata::Config(spec)) => Some(spec),
            _ => None,
        }
    }
}

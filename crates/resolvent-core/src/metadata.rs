//! Declarative per-parameter metadata.
//!
//! Hosts attach these records to descriptors to steer resolution without
//! code: an explicit service identifier, or a path into the configuration
//! tree. How the records are sourced (annotations, a side table, manual
//! wiring) is the host's business; the engine only reads them.

/// Discriminates the closed set of metadata records; a descriptor holds at
/// most one record per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    Inject,
    Config,
}

/// "Fetch this identifier from the lookup service."
///
/// A spec without an identifier is legal and deliberately inert: the
/// explicit-identifier strategy passes on it instead of guessing the
/// parameter name, leaving type-based lookup to handle the parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjectSpec {
    id: Option<String>,
}

impl InjectSpec {
    pub fn new(id: impl Into<String>) -> Self {
        InjectSpec { id: Some(id.into()) }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// "Read this parameter from the configuration tree."
///
/// The path is stored pre-split; [`ConfigSpec::path`] splits on `.`,
/// [`ConfigSpec::literal`] keeps a dotted string as a single key, and
/// [`ConfigSpec::segments`] accepts an already-split sequence. The root
/// key names the configuration resource in the lookup service and defaults
/// to `"config"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigSpec {
    segments: Vec<String>,
    root_key: String,
}

impl ConfigSpec {
    /// Identifier under which the configuration root is registered in the
    /// lookup service, unless overridden per spec.
    pub const DEFAULT_ROOT_KEY: &'static str = "config";

    /// Dotted path, split on `.`: `"database.host"` → `["database", "host"]`.
    pub fn path(path: &str) -> Self {
        ConfigSpec {
            segments: path.split('.').map(str::to_string).collect(),
            root_key: Self::DEFAULT_ROOT_KEY.to_string(),
        }
    }

    /// Single-key mode for keys that themselves contain dots.
    pub fn literal(key: impl Into<String>) -> Self {
        ConfigSpec {
            segments: vec![key.into()],
            root_key: Self::DEFAULT_ROOT_KEY.to_string(),
        }
    }

    /// Pre-split path segments, used verbatim.
    pub fn segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigSpec {
            segments: segments.into_iter().map(Into::into).collect(),
            root_key: Self::DEFAULT_ROOT_KEY.to_string(),
        }
    }

    pub fn with_root_key(mut self, root_key: impl Into<String>) -> Self {
        self.root_key = root_key.into();
        self
    }

    pub fn path_segments(&self) -> &[String] {
        &self.segments
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }
}

/// A metadata record attached to a descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamMetadata {
    Inject(InjectSpec),
    Config(ConfigSpec),
}

impl ParamMetadata {
    pub fn kind(&self) -> MetadataKind {
        match self {
            ParamMetadata::Inject(_) => MetadataKind::Inject,
            ParamMetadata::Config(_) => MetadataKind::Config,
        }
    }
}

impl From<InjectSpec> for ParamMetadata {
    fn from(spec: InjectSpec) -> Self {
        ParamMetadata::Inject(spec)
    }
}

impl From<ConfigSpec> for ParamMetadata {
    fn from(spec: ConfigSpec) -> Self {
        ParamMetadata::Config(spec)
    }
}

use serde_json::Value;

use crate::request::RequestInput;

/// Structural metadata for a record type, emitted by the `RectoRecord` derive.
///
/// This is the compile-time stand-in for runtime reflection: the derive walks
/// the struct definition once and records its constructor parameters, declared
/// defaults, and field-source tags in declaration order.
#[derive(Debug, Default, Clone)]
pub struct RecordDescriptor {
    /// The record type's name, used for registry lookups and diagnostics.
    pub name: String,
    /// Class-level source tags, in declaration order.
    pub sources: Vec<SourceTag>,
    /// Constructor parameters in declaration order.
    pub params: Vec<ParamDescriptor>,
}

/// One constructor parameter of a record type.
///
/// A record's declared members and its constructor parameters coincide, so
/// this doubles as the member descriptor.
#[derive(Debug, Default, Clone)]
pub struct ParamDescriptor {
    pub name: String,
    /// Declared Rust type, stringified (e.g. `"Option<String>"`).
    pub type_name: String,
    /// Declared default value, if the field carries `#[record(default)]`
    /// or `#[record(default = ...)]`.
    pub default: Option<Value>,
    /// Field-level source tags, in declaration order.
    pub sources: Vec<SourceTag>,
}

impl ParamDescriptor {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// The closed set of request channels a field can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum SourceKind {
    Query,
    Body,
    Route,
    /// Generic input: the untagged default. The request collaborator defines
    /// the body-or-query precedence.
    #[default]
    Input,
}

impl SourceKind {
    /// Read this channel of `request` under `name`.
    pub fn read(self, request: &dyn RequestInput, name: &str) -> Option<Value> {
        match self {
            SourceKind::Query => request.query_value(name),
            SourceKind::Body => request.body_value(name),
            SourceKind::Route => request.route_value(name),
            SourceKind::Input => request.input_value(name),
        }
    }
}

/// A declarative field-source tag: which request channel feeds a field, and
/// under what name. Attachable at field or class level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTag {
    pub kind: SourceKind,
    /// Override lookup name; the parameter's own name when absent.
    pub rename: Option<String>,
}

impl SourceTag {
    pub fn new(kind: SourceKind) -> Self {
        Self { kind, rename: None }
    }

    pub fn renamed(kind: SourceKind, rename: impl Into<String>) -> Self {
        Self {
            kind,
            rename: Some(rename.into()),
        }
    }

    /// The name this tag looks a parameter up under.
    pub fn effective_name<'a>(&'a self, param: &'a str) -> &'a str {
        self.rename.as_deref().unwrap_or(param)
    }

    /// Read the tagged channel of `request` under the effective name.
    pub fn get_input(&self, request: &dyn RequestInput, param: &str) -> Option<Value> {
        self.kind.read(request, self.effective_name(param))
    }
}

/// Metadata trait implemented by the `RectoRecord` derive.
pub trait RecordMetadata {
    /// Build this type's structural descriptor. Rebuilt per call; callers
    /// that need it repeatedly hold on to the returned value.
    fn record_descriptor() -> RecordDescriptor;

    /// Register the descriptor in the process-wide registry, exactly once.
    fn ensure_registered();
}

/// Opt-in capability backing [`Reflection::invoke`](crate::Reflection::invoke):
/// dispatch a named method with JSON arguments on a live instance.
///
/// The default implementation recognizes no methods.
pub trait Callable {
    fn call_method(&self, name: &str, args: &[Value]) -> Option<Value> {
        let _ = (name, args);
        None
    }
}

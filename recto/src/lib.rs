//! Recto core library.
//!
//! Builds typed records by resolving each declared field from one of several
//! heterogeneous sources: a plain mapping, a relational model, an arbitrary
//! object, or an incoming request. `#[derive(RectoRecord)]` emits the
//! structural metadata (constructor parameters, defaults, field-source tags)
//! that the resolution engine iterates; concrete resolvers answer one
//! question per field, and the [`Record`] factory surface turns the resolved
//! set into an instance.
//!
//! Every resolution pass allocates its own reflection, resolver, and
//! resolved-property set; nothing is cached across calls.

extern crate self as recto;

pub mod errors;
pub mod props;
pub mod record;
pub mod reflect;
pub mod registry;
pub mod request;
pub mod resolvers;
pub mod types;
pub mod validate;

pub use errors::*;
pub use props::{PropertyPatch, ResolvedProperties, ResolvedProperty};
pub use record::Record;
pub use reflect::Reflection;
pub use request::{RequestInput, RequestParts};
pub use resolvers::{
    FieldAccess, FlatModel, MappingResolver, ModelResolver, ObjectResolver, PropsResolver, RequestResolver,
};
pub use types::{Callable, ParamDescriptor, RecordDescriptor, RecordMetadata, SourceKind, SourceTag};
pub use validate::{FieldRule, Rule, Validatable};

pub use recto_macros::RectoRecord;

// Re-exported for the derive macro's generated code.
pub use inventory;
pub use serde_json;

//! The record factory surface: the trait every record type gets from
//! `#[derive(RectoRecord)]`. It selects a resolver per source, drives the
//! shared resolution loop, and materializes the target type from the
//! projected mapping.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::RecordError;
use crate::reflect::Reflection;
use crate::resolvers::{
    FieldAccess, FlatModel, MappingResolver, ModelResolver, ObjectResolver, PropsResolver, RequestResolver,
};
use crate::request::RequestInput;
use crate::types::RecordMetadata;

/// A typed record buildable from heterogeneous sources.
///
/// All methods are provided; the derive emits an empty impl. The serde
/// bounds are what make the generic "build from an ordered argument mapping"
/// and "snapshot a live instance" capabilities work.
pub trait Record: RecordMetadata + FieldAccess + Serialize + DeserializeOwned + Sized {
    /// Build from an incoming request, honoring field-source tags.
    fn from_request<R: RequestInput>(request: &R) -> Result<Self, RecordError> {
        Self::boot(&RequestResolver::new(request))
    }

    /// Build from a plain name-to-value mapping.
    fn from_mapping(data: Map<String, Value>) -> Result<Self, RecordError> {
        Self::boot(&MappingResolver::new(data))
    }

    /// Build from a relational model's flattened attributes.
    fn from_model<M: FlatModel>(model: &M) -> Result<Self, RecordError> {
        Self::boot(&ModelResolver::new(model))
    }

    /// Build from an arbitrary object via dynamic member reads.
    fn from_object<O: FieldAccess + ?Sized>(object: &O) -> Result<Self, RecordError> {
        Self::boot(&ObjectResolver::new(object))
    }

    /// Run one resolution pass with the supplied resolver and construct the
    /// record from the projected mapping.
    fn boot<P: PropsResolver>(resolver: &P) -> Result<Self, RecordError> {
        let reflect = Reflection::of::<Self>();
        let props = resolver.resolve(&reflect);
        Self::construct(props.to_mapping())
    }

    /// The generic "build from ordered argument mapping" capability. A
    /// missing required field fails here, under the target's own
    /// deserialization semantics.
    fn construct(mapping: Map<String, Value>) -> Result<Self, RecordError> {
        serde_json::from_value(Value::Object(mapping)).map_err(RecordError::Construct)
    }

    /// Re-read the constructor-parameter values off this built instance, in
    /// declaration order. Recomputed per call from a fresh instance
    /// reflection; members a snapshot cannot see project as null.
    fn resource(&self) -> Result<Map<String, Value>, RecordError> {
        let reflect = Reflection::of_instance(self)?;
        let mut resource = Map::new();
        for param in reflect.constructor_params() {
            let value = reflect.member_value(&param.name).unwrap_or(Value::Null);
            resource.insert(param.name.clone(), value);
        }
        Ok(resource)
    }

    /// The record as a plain mapping.
    fn to_mapping(&self) -> Result<Map<String, Value>, RecordError> {
        self.resource()
    }

    /// Build another record type from this instance's members.
    fn convert<U: Record>(&self) -> Result<U, RecordError> {
        U::from_object(self)
    }
}

use serde_json::{Map, Value};

use crate::reflect::Reflection;
use crate::resolvers::PropsResolver;

/// Capability contract for the generic-object backend: has-and-can-read a
/// field by name. Absence is an answer (`None`), never an error.
///
/// The `RectoRecord` derive emits an implementation for every record type,
/// which is what lets one record be re-resolved from another.
pub trait FieldAccess {
    fn read_field(&self, name: &str) -> Option<Value>;
}

impl FieldAccess for Map<String, Value> {
    fn read_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl FieldAccess for Value {
    fn read_field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name).cloned())
    }
}

/// Resolves fields by dynamic member reads on an arbitrary object.
pub struct ObjectResolver<'a, O: FieldAccess + ?Sized> {
    object: &'a O,
}

impl<'a, O: FieldAccess + ?Sized> ObjectResolver<'a, O> {
    pub fn new(object: &'a O) -> Self {
        Self { object }
    }
}

impl<O: FieldAccess + ?Sized> PropsResolver for ObjectResolver<'_, O> {
    fn fetch_value(&self, _reflect: &Reflection<'_>, name: &str) -> Option<Value> {
        self.object.read_field(name)
    }
}

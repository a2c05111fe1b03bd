use serde_json::{Map, Value};

use crate::reflect::Reflection;
use crate::resolvers::PropsResolver;

/// Boundary contract for the relational-model backend: anything that can
/// flatten itself to an attribute mapping.
pub trait FlatModel {
    fn to_flat_mapping(&self) -> Map<String, Value>;
}

/// Resolves fields from a relational model's flattened attributes.
pub struct ModelResolver<'a, M: FlatModel> {
    model: &'a M,
}

impl<'a, M: FlatModel> ModelResolver<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }
}

impl<M: FlatModel> PropsResolver for ModelResolver<'_, M> {
    fn fetch_value(&self, _reflect: &Reflection<'_>, name: &str) -> Option<Value> {
        // Flattened per fetch, not cached: the model decides what an
        // attribute read means at this instant.
        self.model.to_flat_mapping().remove(name)
    }
}

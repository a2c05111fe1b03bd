use serde_json::{Map, Value};

use crate::reflect::Reflection;
use crate::resolvers::PropsResolver;

/// Resolves fields from a plain name-to-value mapping.
#[derive(Debug, Clone)]
pub struct MappingResolver {
    data: Map<String, Value>,
}

impl MappingResolver {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl PropsResolver for MappingResolver {
    fn fetch_value(&self, _reflect: &Reflection<'_>, name: &str) -> Option<Value> {
        self.data.get(name).cloned()
    }
}

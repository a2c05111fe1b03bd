//! The resolver protocol and its concrete backends.
//!
//! A resolver answers one question per constructor parameter: what value, if
//! any, does my source hold for this name? The shared `resolve` loop turns
//! those answers into a [`ResolvedProperties`] set, one property per
//! parameter, in declaration order.

pub mod mapping;
pub mod model;
pub mod object;
pub mod request;

use serde_json::Value;

use crate::props::{ResolvedProperties, ResolvedProperty};
use crate::reflect::Reflection;

/// The source-resolver contract.
///
/// Backends implement [`fetch_value`](Self::fetch_value); the provided
/// [`resolve`](Self::resolve) drives the shared iteration. Resolvers never
/// reorder or skip parameters, and a missing value is an answer, not an
/// error.
pub trait PropsResolver {
    /// Backend-specific lookup of one field's value. `None` means the source
    /// has nothing under this name.
    fn fetch_value(&self, reflect: &Reflection<'_>, name: &str) -> Option<Value>;

    /// Resolve every constructor parameter of the reflected target, in
    /// declaration order.
    fn resolve(&self, reflect: &Reflection<'_>) -> ResolvedProperties {
        let mut props = ResolvedProperties::new();
        if reflect.constructor_params().is_empty() {
            return props;
        }

        for param in reflect.constructor_params() {
            let value = self.fetch_value(reflect, &param.name);
            props.push(ResolvedProperty::make(
                &param.name,
                value,
                Some(param.type_name.clone()),
                param.default.clone(),
            ));
        }

        props
    }
}

pub use mapping::MappingResolver;
pub use model::{FlatModel, ModelResolver};
pub use object::{FieldAccess, ObjectResolver};
pub use request::RequestResolver;

//! The resolved-property value model: one [`ResolvedProperty`] per
//! constructor parameter, accumulated into an ordered [`ResolvedProperties`]
//! set by the active resolver.

use serde_json::{Map, Value};

/// The outcome of resolving one field: its name, the value the source
/// yielded (if any), the declared type name, and the declared default.
///
/// Presence is tri-state: `None` means *absent*, `Some(Value::Null)` means a
/// deliberately supplied null. The two are never conflated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProperty {
    pub name: String,
    pub value: Option<Value>,
    pub type_name: Option<String>,
    pub default: Option<Value>,
}

impl ResolvedProperty {
    pub fn make(
        name: impl Into<String>,
        value: Option<Value>,
        type_name: Option<String>,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            type_name,
            default,
        }
    }

    /// True iff the source yielded nothing and a declared default will stand in.
    pub fn is_default(&self) -> bool {
        self.value.is_none() && self.default.is_some()
    }

    pub fn is_type(&self, type_name: &str) -> bool {
        self.type_name.as_deref() == Some(type_name)
    }

    pub fn is_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Value if present, else default, else `None` (the undefined marker).
    pub fn effective_value(&self) -> Option<&Value> {
        self.value.as_ref().or(self.default.as_ref())
    }
}

/// Patch applied through [`ResolvedProperties::set`].
#[derive(Debug, Clone)]
pub enum PropertyPatch {
    Value(Option<Value>),
    TypeName(Option<String>),
    Default(Option<Value>),
}

/// Ordered set of resolved properties. Insertion order is the target's
/// constructor-parameter declaration order; names are unique within a set.
#[derive(Debug, Default, Clone)]
pub struct ResolvedProperties {
    items: Vec<ResolvedProperty>,
}

impl ResolvedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, prop: ResolvedProperty) -> &mut Self {
        debug_assert!(
            !self.items.iter().any(|item| item.name == prop.name),
            "duplicate resolved property `{}`",
            prop.name
        );
        self.items.push(prop);
        self
    }

    /// Whether `name` appears in the projected mapping. A property whose
    /// effective value is undefined is not projected, so it reports `false`.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|prop| prop.effective_value().is_some())
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedProperty> {
        self.items.iter().find(|prop| prop.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedProperty> {
        self.items.iter()
    }

    /// Project every property to `name -> effective value`, preserving
    /// insertion order. Properties with an undefined effective value are
    /// omitted: absence is signaled by a missing key, never coerced to null.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        for prop in &self.items {
            if let Some(value) = prop.effective_value() {
                mapping.insert(prop.name.clone(), value.clone());
            }
        }
        mapping
    }

    /// Mutate one property in place.
    ///
    /// # Panics
    ///
    /// Panics if no property named `name` exists. Patching an unknown name is
    /// a contract violation on the caller's side, not a runtime condition.
    pub fn set(&mut self, name: &str, patch: PropertyPatch) -> &mut Self {
        let prop = self
            .items
            .iter_mut()
            .find(|prop| prop.name == name)
            .unwrap_or_else(|| panic!("no resolved property named `{name}`"));

        match patch {
            PropertyPatch::Value(value) => prop.value = value,
            PropertyPatch::TypeName(type_name) => prop.type_name = type_name,
            PropertyPatch::Default(default) => prop.default = default,
        }
        self
    }
}

impl<'a> IntoIterator for &'a ResolvedProperties {
    type Item = &'a ResolvedProperty;
    type IntoIter = std::slice::Iter<'a, ResolvedProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prop(name: &str, value: Option<Value>, default: Option<Value>) -> ResolvedProperty {
        ResolvedProperty::make(name, value, Some("String".into()), default)
    }

    #[test]
    fn effective_value_prefers_present_value() {
        let p = prop("name", Some(json!("Ada")), Some(json!("anon")));
        assert_eq!(p.effective_value(), Some(&json!("Ada")));
        assert!(!p.is_default());
    }

    #[test]
    fn effective_value_falls_back_to_default() {
        let p = prop("name", None, Some(json!("anon")));
        assert_eq!(p.effective_value(), Some(&json!("anon")));
        assert!(p.is_default());
    }

    #[test]
    fn effective_value_undefined_when_both_absent() {
        let p = prop("name", None, None);
        assert_eq!(p.effective_value(), None);
        assert!(!p.is_default());
    }

    #[test]
    fn present_null_is_not_absent() {
        let p = prop("name", Some(Value::Null), Some(json!("anon")));
        assert_eq!(p.effective_value(), Some(&Value::Null));
        assert!(!p.is_default());
    }

    #[test]
    fn mapping_preserves_order_and_omits_undefined() {
        let mut props = ResolvedProperties::new();
        props.push(prop("b", Some(json!(2)), None));
        props.push(prop("a", None, Some(json!(1))));
        props.push(prop("missing", None, None));

        let mapping = props.to_mapping();
        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert!(props.has("a"));
        assert!(!props.has("missing"));
        assert!(props.get("missing").is_some());
    }

    #[test]
    fn set_patches_in_place() {
        let mut props = ResolvedProperties::new();
        props.push(prop("name", None, None));
        props.set("name", PropertyPatch::Value(Some(json!("Grace"))));
        assert_eq!(props.get("name").unwrap().effective_value(), Some(&json!("Grace")));
    }

    #[test]
    #[should_panic(expected = "no resolved property named `other`")]
    fn set_on_unknown_name_panics() {
        let mut props = ResolvedProperties::new();
        props.push(prop("name", None, None));
        props.set("other", PropertyPatch::Value(None));
    }
}

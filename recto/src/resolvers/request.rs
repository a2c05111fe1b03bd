use serde_json::Value;

use crate::reflect::Reflection;
use crate::request::RequestInput;
use crate::resolvers::PropsResolver;
use crate::types::SourceKind;

/// Resolves fields from an incoming request, honoring field-source tags.
///
/// Source selection per field, by priority: the first tag on the member
/// itself, else the first class-level tag, else untagged generic input.
/// Ties within one level break by declaration order. Each tag resolves its
/// own effective lookup name (override or parameter name) and dispatches to
/// the matching request channel.
pub struct RequestResolver<'a, R: RequestInput> {
    request: &'a R,
}

impl<'a, R: RequestInput> RequestResolver<'a, R> {
    pub fn new(request: &'a R) -> Self {
        Self { request }
    }
}

impl<R: RequestInput> PropsResolver for RequestResolver<'_, R> {
    fn fetch_value(&self, reflect: &Reflection<'_>, name: &str) -> Option<Value> {
        let tag = reflect
            .find_member_tag(name, |_| true)
            .or_else(|| reflect.find_class_tag(|_| true));

        match tag {
            Some(tag) => tag.get_input(self.request, name),
            None => SourceKind::Input.read(self.request, name),
        }
    }
}

//! The request-accessor boundary contract. The HTTP request object itself
//! lives outside this crate; anything that can answer the four channel
//! lookups can feed the request resolver.

use serde_json::{Map, Value};

/// Per-channel value lookup on an incoming request. Every method returns an
/// explicit absent marker rather than erroring on a missing key.
pub trait RequestInput {
    fn query_value(&self, name: &str) -> Option<Value>;
    fn body_value(&self, name: &str) -> Option<Value>;
    fn route_value(&self, name: &str) -> Option<Value>;

    /// Generic input lookup, used for untagged fields. The default gives the
    /// body precedence over the query string; implementations backed by a
    /// framework request may override with their host's precedence.
    fn input_value(&self, name: &str) -> Option<Value> {
        self.body_value(name).or_else(|| self.query_value(name))
    }
}

/// A plain three-channel request carrier for hosts (and tests) that have no
/// framework request type of their own.
#[derive(Debug, Default, Clone)]
pub struct RequestParts {
    query: Map<String, Value>,
    body: Map<String, Value>,
    route: Map<String, Value>,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    pub fn route(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.route.insert(name.into(), value.into());
        self
    }
}

impl RequestInput for RequestParts {
    fn query_value(&self, name: &str) -> Option<Value> {
        self.query.get(name).cloned()
    }

    fn body_value(&self, name: &str) -> Option<Value> {
        self.body.get(name).cloned()
    }

    fn route_value(&self, name: &str) -> Option<Value> {
        self.route.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generic_input_prefers_body_over_query() {
        let request = RequestParts::new().query("name", "Grace").body("name", "Ada");
        assert_eq!(request.input_value("name"), Some(json!("Ada")));

        let request = RequestParts::new().query("name", "Grace");
        assert_eq!(request.input_value("name"), Some(json!("Grace")));
        assert_eq!(request.input_value("missing"), None);
    }
}

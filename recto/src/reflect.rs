//! The introspection layer: a [`Reflection`] wraps a record type's
//! structural descriptor, an optional value snapshot of a live instance, and
//! an optional invocation context. Created fresh for every resolution pass
//! and never shared.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::RecordError;
use crate::types::{Callable, ParamDescriptor, RecordDescriptor, RecordMetadata, SourceTag};

pub struct Reflection<'a> {
    descriptor: RecordDescriptor,
    snapshot: Option<Map<String, Value>>,
    context: Option<&'a dyn Callable>,
}

impl Reflection<'static> {
    /// Reflect over a record *type*. No instance backs member reads, so
    /// [`member_value`](Self::member_value) yields absent for every member.
    pub fn of<T: RecordMetadata>() -> Self {
        T::ensure_registered();
        Self {
            descriptor: T::record_descriptor(),
            snapshot: None,
            context: None,
        }
    }

    /// Reflect over a live record instance, snapshotting its member values.
    pub fn of_instance<T>(instance: &T) -> Result<Self, RecordError>
    where
        T: RecordMetadata + Serialize,
    {
        T::ensure_registered();
        let snapshot = match serde_json::to_value(instance).map_err(RecordError::Snapshot)? {
            Value::Object(map) => map,
            other => {
                return Err(RecordError::Other {
                    message: format!("record instance serialized to non-object value: {other}").into(),
                });
            }
        };

        Ok(Self {
            descriptor: T::record_descriptor(),
            snapshot: Some(snapshot),
            context: None,
        })
    }
}

impl<'a> Reflection<'a> {
    /// Attach an invocation target for [`invoke`](Self::invoke).
    pub fn with_context(mut self, context: &'a dyn Callable) -> Self {
        self.context = Some(context);
        self
    }

    pub fn descriptor(&self) -> &RecordDescriptor {
        &self.descriptor
    }

    /// Constructor parameters in declaration order.
    pub fn constructor_params(&self) -> &[ParamDescriptor] {
        &self.descriptor.params
    }

    /// Declared public members. A record's members and its constructor
    /// parameters coincide.
    pub fn members(&self) -> &[ParamDescriptor] {
        &self.descriptor.params
    }

    /// Fail-soft member lookup: absent rather than an error when no member
    /// carries this name.
    pub fn member(&self, name: &str) -> Option<&ParamDescriptor> {
        self.descriptor.params.iter().find(|param| param.name == name)
    }

    /// Read one member's value off the instance snapshot. Absent when this
    /// reflection wraps a type rather than an instance, or when the snapshot
    /// has no such key.
    pub fn member_value(&self, name: &str) -> Option<Value> {
        self.snapshot.as_ref().and_then(|snapshot| snapshot.get(name).cloned())
    }

    /// Class-level source tags in declaration order.
    pub fn class_tags(&self) -> &[SourceTag] {
        &self.descriptor.sources
    }

    /// Field-level source tags for `name`, in declaration order. Empty for
    /// unknown members.
    pub fn member_tags(&self, name: &str) -> &[SourceTag] {
        self.member(name).map(|param| param.sources.as_slice()).unwrap_or(&[])
    }

    /// First class-level tag matching `pred`, in declaration order.
    pub fn find_class_tag(&self, pred: impl Fn(&SourceTag) -> bool) -> Option<&SourceTag> {
        self.class_tags().iter().find(|tag| pred(tag))
    }

    /// First field-level tag on `name` matching `pred`, in declaration order.
    pub fn find_member_tag(&self, name: &str, pred: impl Fn(&SourceTag) -> bool) -> Option<&SourceTag> {
        self.member_tags(name).iter().find(|tag| pred(tag))
    }

    /// Call a named method on the wrapped instance through its [`Callable`]
    /// context. Side effects are whatever the invoked method's contract says.
    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, RecordError> {
        self.context
            .and_then(|context| context.call_method(method, args))
            .ok_or_else(|| RecordError::UnknownMethod {
                record: self.descriptor.name.clone(),
                method: method.to_string(),
            })
    }
}

//! Process-wide record-descriptor registry.
//!
//! Two feeds: `ensure_registered` (emitted by the derive) inserts into the
//! runtime table the first time a type is reflected, and `inventory`
//! submissions make every derived record in the binary enumerable without
//! being touched first. The resolver protocol itself never consults this;
//! it exists for by-name introspection at the host boundary.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::types::RecordDescriptor;

static REGISTRY: OnceLock<RwLock<HashMap<String, RecordDescriptor>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, RecordDescriptor>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

pub fn register_descriptor(descriptor: &RecordDescriptor) {
    registry()
        .write()
        .unwrap()
        .insert(descriptor.name.clone(), descriptor.clone());
}

/// Look up a registered descriptor by record-type name.
pub fn descriptor(name: &str) -> Option<RecordDescriptor> {
    registry().read().unwrap().get(name).cloned()
}

/// An `inventory`-collected registration submitted by the derive macro.
pub struct RecordRegistration {
    descriptor: fn() -> RecordDescriptor,
}

impl RecordRegistration {
    pub const fn new(descriptor: fn() -> RecordDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> RecordDescriptor {
        (self.descriptor)()
    }
}

inventory::collect!(RecordRegistration);

/// Every record type derived anywhere in the binary.
pub fn all() -> impl Iterator<Item = RecordDescriptor> {
    inventory::iter::<RecordRegistration>
        .into_iter()
        .map(RecordRegistration::descriptor)
}

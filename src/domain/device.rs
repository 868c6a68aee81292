use crate::domain::{AttributeValue, Capability};
use std::collections::HashMap;

/// A snapshot of a Hubitat device as observed at query time. A new snapshot
/// replaces the prior one on every successful lookup; no history is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct HubitatDevice {
    pub id: u64,
    pub name: String,
    pub label: String,
    pub attributes: HashMap<String, AttributeValue>,
    pub capabilities: Vec<Capability>,
}

impl HubitatDevice {
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

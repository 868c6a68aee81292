use crate::domain::device::HubitatDevice;
use crate::domain::{AttributeValue, Capability};
use crate::store::DeviceHandle;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn device(id: u64, capabilities: Vec<Capability>, attributes: Vec<(&str, &str)>) -> HubitatDevice {
    HubitatDevice {
        id,
        name: "Test device".to_string(),
        label: "Test device".to_string(),
        attributes: attributes
            .into_iter()
            .map(|(name, value)| (name.to_string(), AttributeValue::Str(value.to_string())))
            .collect(),
        capabilities,
    }
}

pub fn device_with_attributes(attributes: Vec<(&str, &str)>) -> HubitatDevice {
    device(1, vec![], attributes)
}

pub fn directory(devices: Vec<HubitatDevice>) -> DeviceHandle {
    let map: HashMap<u64, HubitatDevice> = devices.into_iter().map(|device| (device.id, device)).collect();
    DeviceHandle::new(Arc::new(RwLock::new(map)))
}

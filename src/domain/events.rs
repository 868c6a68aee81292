use crate::domain::AttributeValue;
use crate::domain::device::HubitatDevice;

#[derive(Debug)]
pub enum Event {
    DiscoveredDevices(Vec<HubitatDevice>),
    AttributeChanged {
        device_id: u64,
        attribute: String,
        value: AttributeValue,
    },
}

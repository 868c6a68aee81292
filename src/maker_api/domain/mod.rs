mod device_details;
mod device_event;

pub use device_details::{DeviceAttribute, DeviceDetails};
pub use device_event::{DeviceEvent, DeviceEventContent};

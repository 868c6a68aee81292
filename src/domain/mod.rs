pub mod device;
pub mod events;
mod attribute_value;
mod capability;
mod directory;

pub use attribute_value::AttributeValue;
pub use capability::Capability;
pub use directory::{DeviceDirectory, DeviceQuery};

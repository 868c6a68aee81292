use crate::domain::device::HubitatDevice;
use crate::maker_api::domain::DeviceDetails;
use std::collections::HashMap;
use thiserror::Error;

pub fn map_devices(devices: Vec<DeviceDetails>) -> Result<Vec<HubitatDevice>, MapDevicesError> {
    devices
        .into_iter()
        .map(|details| {
            let id = details
                .id
                .parse::<u64>()
                .map_err(|_| MapDevicesError::InvalidDeviceId { device_id: details.id.clone() })?;

            let mut attributes = HashMap::with_capacity(details.attributes.len());
            for attribute in details.attributes {
                // Attributes without a current value read the same as missing ones
                if let Some(value) = attribute.current_value {
                    attributes.insert(attribute.name, value);
                }
            }

            let name = details.name.unwrap_or_default();
            let label = details.label.unwrap_or_else(|| name.clone());

            Ok(HubitatDevice {
                id,
                name,
                label,
                attributes,
                capabilities: details.capabilities,
            })
        })
        .collect()
}

#[derive(Error, Debug)]
pub enum MapDevicesError {
    #[error("invalid device id '{device_id}'")]
    InvalidDeviceId { device_id: String },
}

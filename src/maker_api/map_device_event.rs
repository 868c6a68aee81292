use crate::domain::events::Event;
use crate::maker_api::domain::DeviceEvent;
use thiserror::Error;

pub fn map_device_event(event: DeviceEvent) -> Result<Event, MapDeviceEventError> {
    let content = event.content;
    let device_id = content
        .device_id
        .parse::<u64>()
        .map_err(|_| MapDeviceEventError::InvalidDeviceId {
            device_id: content.device_id.clone(),
        })?;

    let value = content.value.ok_or_else(|| MapDeviceEventError::MissingValue {
        device_id,
        attribute: content.name.clone(),
    })?;

    Ok(Event::AttributeChanged {
        device_id,
        attribute: content.name,
        value,
    })
}

#[derive(Error, Debug)]
pub enum MapDeviceEventError {
    #[error("invalid device id '{device_id}'")]
    InvalidDeviceId { device_id: String },
    #[error("event for attribute '{attribute}' of device '{device_id}' has no value")]
    MissingValue { device_id: u64, attribute: String },
}

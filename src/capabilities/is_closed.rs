use crate::capabilities::getters::{get_contact_sensor_status, get_door_position, get_valve_position, get_window_shade_position};
use crate::capabilities::status::{ContactSensorStatus, DoorPosition, ValvePosition, WindowShadePosition};
use crate::domain::{Capability, DeviceDirectory, DeviceQuery};

/// Returns whether the device is closed, reading `false` when its status
/// cannot be determined.
///
/// Checks the same capabilities in the same order as
/// [`is_open`](crate::capabilities::is_open()). A partially open window
/// shade does not count as closed.
pub async fn is_closed<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>) -> bool {
    is_closed_or(directory, device, false).await
}

/// Returns whether the device is closed, reading `default_value` when its
/// status cannot be determined.
pub async fn is_closed_or<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>, default_value: bool) -> bool {
    let Some(device) = directory.get_device(device.into()).await else {
        return default_value;
    };

    if device.has_capability(Capability::ContactSensor) {
        let fallback = if default_value { ContactSensorStatus::Closed } else { ContactSensorStatus::Open };
        return get_contact_sensor_status(&device, fallback) == ContactSensorStatus::Closed;
    }

    if device.has_capability(Capability::DoorControl) || device.has_capability(Capability::GarageDoorControl) {
        return get_door_position(&device) == DoorPosition::Closed;
    }

    if device.has_capability(Capability::Valve) {
        return get_valve_position(&device) == ValvePosition::Closed;
    }

    if device.has_capability(Capability::WindowShade) {
        return get_window_shade_position(&device) == WindowShadePosition::Closed;
    }

    default_value
}

use crate::capabilities::status::{
    ContactSensorStatus, DoorPosition, LockPosition, PresenceStatus, SwitchStatus, ValvePosition, WindowShadePosition,
};
use crate::domain::device::HubitatDevice;

/// Returns the status of the contact sensor, or `default_value` if the
/// `contact` attribute is missing or unreadable.
pub fn get_contact_sensor_status(device: &HubitatDevice, default_value: ContactSensorStatus) -> ContactSensorStatus {
    device
        .attribute("contact")
        .and_then(ContactSensorStatus::from_attribute)
        .unwrap_or(default_value)
}

/// Returns the position of the door, closed if the `door` attribute is
/// missing or unreadable.
pub fn get_door_position(device: &HubitatDevice) -> DoorPosition {
    device
        .attribute("door")
        .and_then(DoorPosition::from_attribute)
        .unwrap_or(DoorPosition::Closed)
}

/// Returns the position of the valve, closed if the `valve` attribute is
/// missing or unreadable.
pub fn get_valve_position(device: &HubitatDevice) -> ValvePosition {
    device
        .attribute("valve")
        .and_then(ValvePosition::from_attribute)
        .unwrap_or(ValvePosition::Closed)
}

/// Returns the position of the window shade, closed if the `windowShade`
/// attribute is missing or unreadable.
pub fn get_window_shade_position(device: &HubitatDevice) -> WindowShadePosition {
    device
        .attribute("windowShade")
        .and_then(WindowShadePosition::from_attribute)
        .unwrap_or(WindowShadePosition::Closed)
}

/// Returns the status of the switch, or `default_value` if the `switch`
/// attribute is missing or unreadable.
pub fn get_switch_status(device: &HubitatDevice, default_value: SwitchStatus) -> SwitchStatus {
    device
        .attribute("switch")
        .and_then(SwitchStatus::from_attribute)
        .unwrap_or(default_value)
}

/// Returns the position of the lock, or `default_value` if the `lock`
/// attribute is missing or unreadable.
pub fn get_lock_position(device: &HubitatDevice, default_value: LockPosition) -> LockPosition {
    device
        .attribute("lock")
        .and_then(LockPosition::from_attribute)
        .unwrap_or(default_value)
}

/// Returns the presence status, or `default_value` if the `presence`
/// attribute is missing or unreadable.
pub fn get_presence_status(device: &HubitatDevice, default_value: PresenceStatus) -> PresenceStatus {
    device
        .attribute("presence")
        .and_then(PresenceStatus::from_attribute)
        .unwrap_or(default_value)
}

use crate::capabilities::getters::get_presence_status;
use crate::capabilities::status::PresenceStatus;
use crate::domain::{Capability, DeviceDirectory, DeviceQuery};

/// Returns whether the presence sensor reports its subject as present,
/// reading `false` when its status cannot be determined.
pub async fn is_present<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>) -> bool {
    is_present_or(directory, device, false).await
}

/// Returns whether the presence sensor reports its subject as present,
/// reading `default_value` when its status cannot be determined.
pub async fn is_present_or<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>, default_value: bool) -> bool {
    let Some(device) = directory.get_device(device.into()).await else {
        return default_value;
    };

    if device.has_capability(Capability::PresenceSensor) {
        let fallback = if default_value { PresenceStatus::Present } else { PresenceStatus::NotPresent };
        return get_presence_status(&device, fallback) == PresenceStatus::Present;
    }

    default_value
}

use crate::capabilities::getters::get_switch_status;
use crate::capabilities::status::SwitchStatus;
use crate::domain::{Capability, DeviceDirectory, DeviceQuery};

/// Returns whether the switch is on, reading `false` when its status cannot
/// be determined. Requires the Switch capability.
pub async fn is_on<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>) -> bool {
    is_on_or(directory, device, false).await
}

/// Returns whether the switch is on, reading `default_value` when its status
/// cannot be determined.
pub async fn is_on_or<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>, default_value: bool) -> bool {
    let Some(device) = directory.get_device(device.into()).await else {
        return default_value;
    };

    if device.has_capability(Capability::Switch) {
        let fallback = if default_value { SwitchStatus::On } else { SwitchStatus::Off };
        return get_switch_status(&device, fallback) == SwitchStatus::On;
    }

    default_value
}

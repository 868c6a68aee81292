use crate::capabilities::getters::get_lock_position;
use crate::capabilities::status::LockPosition;
use crate::domain::{Capability, DeviceDirectory, DeviceQuery};

/// Returns whether the lock is locked, reading `false` when its status
/// cannot be determined. Requires the Lock capability; an unknown lock
/// position counts as not locked.
pub async fn is_locked<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>) -> bool {
    is_locked_or(directory, device, false).await
}

/// Returns whether the lock is locked, reading `default_value` when its
/// status cannot be determined.
pub async fn is_locked_or<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>, default_value: bool) -> bool {
    let Some(device) = directory.get_device(device.into()).await else {
        return default_value;
    };

    if device.has_capability(Capability::Lock) {
        let fallback = if default_value { LockPosition::Locked } else { LockPosition::Unlocked };
        return get_lock_position(&device, fallback) == LockPosition::Locked;
    }

    default_value
}

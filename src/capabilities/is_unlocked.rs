use crate::capabilities::getters::get_lock_position;
use crate::capabilities::status::LockPosition;
use crate::domain::{Capability, DeviceDirectory, DeviceQuery};

/// Returns whether the lock is unlocked, reading `false` when its status
/// cannot be determined. This is not the inverse of
/// [`is_locked`](crate::capabilities::is_locked()): a lock that is unlocked
/// with a timeout or in an unknown position is neither locked nor unlocked.
pub async fn is_unlocked<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>) -> bool {
    is_unlocked_or(directory, device, false).await
}

/// Returns whether the lock is unlocked, reading `default_value` when its
/// status cannot be determined.
pub async fn is_unlocked_or<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>, default_value: bool) -> bool {
    let Some(device) = directory.get_device(device.into()).await else {
        return default_value;
    };

    if device.has_capability(Capability::Lock) {
        let fallback = if default_value { LockPosition::Unlocked } else { LockPosition::Locked };
        return get_lock_position(&device, fallback) == LockPosition::Unlocked;
    }

    default_value
}

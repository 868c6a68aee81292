use crate::capabilities::getters::{get_contact_sensor_status, get_door_position, get_valve_position, get_window_shade_position};
use crate::capabilities::status::{ContactSensorStatus, DoorPosition, ValvePosition, WindowShadePosition};
use crate::domain::{Capability, DeviceDirectory, DeviceQuery};

/// Returns whether the device is open, reading `false` when its status
/// cannot be determined.
///
/// Capabilities, checked in order with the first declared one winning:
/// ContactSensor, DoorControl, GarageDoorControl, Valve, WindowShade. A
/// window shade that is partially open counts as open.
pub async fn is_open<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>) -> bool {
    is_open_or(directory, device, false).await
}

/// Returns whether the device is open, reading `default_value` when its
/// status cannot be determined.
pub async fn is_open_or<'a>(directory: &impl DeviceDirectory, device: impl Into<DeviceQuery<'a>>, default_value: bool) -> bool {
    let Some(device) = directory.get_device(device.into()).await else {
        return default_value;
    };

    if device.has_capability(Capability::ContactSensor) {
        let fallback = if default_value { ContactSensorStatus::Open } else { ContactSensorStatus::Closed };
        return get_contact_sensor_status(&device, fallback) == ContactSensorStatus::Open;
    }

    if device.has_capability(Capability::DoorControl) || device.has_capability(Capability::GarageDoorControl) {
        return get_door_position(&device) == DoorPosition::Open;
    }

    if device.has_capability(Capability::Valve) {
        return get_valve_position(&device) == ValvePosition::Open;
    }

    if device.has_capability(Capability::WindowShade) {
        let position = get_window_shade_position(&device);
        return position == WindowShadePosition::Open || position == WindowShadePosition::PartiallyOpen;
    }

    default_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::test_support::{device, directory};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Capability::ContactSensor, vec![("contact", "open")], true)]
    #[case(Capability::ContactSensor, vec![("contact", "closed")], false)]
    #[case(Capability::DoorControl, vec![("door", "open")], true)]
    #[case(Capability::DoorControl, vec![("door", "closed")], false)]
    #[case(Capability::DoorControl, vec![("door", "opening")], false)]
    #[case(Capability::GarageDoorControl, vec![("door", "open")], true)]
    #[case(Capability::GarageDoorControl, vec![("door", "closed")], false)]
    #[case(Capability::Valve, vec![("valve", "open")], true)]
    #[case(Capability::Valve, vec![("valve", "closed")], false)]
    #[case(Capability::WindowShade, vec![("windowShade", "open")], true)]
    #[case(Capability::WindowShade, vec![("windowShade", "partially open")], true)]
    #[case(Capability::WindowShade, vec![("windowShade", "closed")], false)]
    #[case(Capability::WindowShade, vec![("windowShade", "closing")], false)]
    #[tokio::test]
    async fn resolves_openness_per_capability(
        #[case] capability: Capability,
        #[case] attributes: Vec<(&str, &str)>,
        #[case] expected: bool,
    ) {
        let handle = directory(vec![device(130, vec![capability], attributes)]);

        assert_eq!(is_open(&handle, 130).await, expected);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[tokio::test]
    async fn returns_the_default_value_if_no_capability_matches(#[case] default_value: bool) {
        let handle = directory(vec![device(130, vec![Capability::Battery], vec![])]);

        assert_eq!(is_open_or(&handle, 130, default_value).await, default_value);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[tokio::test]
    async fn returns_the_default_value_for_an_unknown_device_id(#[case] default_value: bool) {
        let handle = directory(vec![]);

        assert_eq!(is_open_or(&handle, 99, default_value).await, default_value);
    }

    #[tokio::test]
    async fn defaults_to_false_for_an_unknown_device_id() {
        let handle = directory(vec![]);

        assert_eq!(is_open(&handle, 99).await, false);
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    #[tokio::test]
    async fn threads_the_default_value_through_a_missing_contact_attribute(#[case] default_value: bool, #[case] expected: bool) {
        let handle = directory(vec![device(130, vec![Capability::ContactSensor], vec![])]);

        assert_eq!(is_open_or(&handle, 130, default_value).await, expected);
    }

    #[tokio::test]
    async fn the_first_declared_capability_wins() {
        let multi = device(
            130,
            vec![Capability::WindowShade, Capability::ContactSensor],
            vec![("contact", "closed"), ("windowShade", "open")],
        );
        let handle = directory(vec![multi]);

        // ContactSensor is checked before WindowShade regardless of declaration order
        assert_eq!(is_open(&handle, 130).await, false);
    }

    #[tokio::test]
    async fn accepts_a_device_snapshot_without_a_lookup() {
        let snapshot = device(130, vec![Capability::Valve], vec![("valve", "open")]);
        let handle = directory(vec![]);

        assert_eq!(is_open(&handle, &snapshot).await, true);
    }

    #[tokio::test]
    async fn is_idempotent_for_an_unchanged_snapshot() {
        let handle = directory(vec![device(130, vec![Capability::ContactSensor], vec![("contact", "open")])]);

        assert_eq!(is_open(&handle, 130).await, is_open(&handle, 130).await);
    }
}

use crate::domain::AttributeValue;

/// Values of the `contact` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContactSensorStatus {
    Closed,
    Open,
}

impl ContactSensorStatus {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "closed" => Some(ContactSensorStatus::Closed),
            "open" => Some(ContactSensorStatus::Open),
            _ => None,
        }
    }
}

/// Values of the `door` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DoorPosition {
    Closed,
    Closing,
    Open,
    Opening,
    Unknown,
}

impl DoorPosition {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "closed" => Some(DoorPosition::Closed),
            "closing" => Some(DoorPosition::Closing),
            "open" => Some(DoorPosition::Open),
            "opening" => Some(DoorPosition::Opening),
            "unknown" => Some(DoorPosition::Unknown),
            _ => None,
        }
    }
}

/// Values of the `valve` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValvePosition {
    Closed,
    Open,
}

impl ValvePosition {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "closed" => Some(ValvePosition::Closed),
            "open" => Some(ValvePosition::Open),
            _ => None,
        }
    }
}

/// Values of the `windowShade` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowShadePosition {
    Closed,
    Closing,
    Open,
    Opening,
    PartiallyOpen,
    Unknown,
}

impl WindowShadePosition {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "closed" => Some(WindowShadePosition::Closed),
            "closing" => Some(WindowShadePosition::Closing),
            "open" => Some(WindowShadePosition::Open),
            "opening" => Some(WindowShadePosition::Opening),
            "partially open" => Some(WindowShadePosition::PartiallyOpen),
            "unknown" => Some(WindowShadePosition::Unknown),
            _ => None,
        }
    }
}

/// Values of the `switch` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchStatus {
    Off,
    On,
}

impl SwitchStatus {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "off" => Some(SwitchStatus::Off),
            "on" => Some(SwitchStatus::On),
            _ => None,
        }
    }
}

/// Values of the `lock` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LockPosition {
    Locked,
    Unlocked,
    UnlockedWithTimeout,
    Unknown,
}

impl LockPosition {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "locked" => Some(LockPosition::Locked),
            "unlocked" => Some(LockPosition::Unlocked),
            "unlocked with timeout" => Some(LockPosition::UnlockedWithTimeout),
            "unknown" => Some(LockPosition::Unknown),
            _ => None,
        }
    }
}

/// Values of the `presence` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresenceStatus {
    NotPresent,
    Present,
}

impl PresenceStatus {
    pub(crate) fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value.as_str()? {
            "not present" => Some(PresenceStatus::NotPresent),
            "present" => Some(PresenceStatus::Present),
            _ => None,
        }
    }
}

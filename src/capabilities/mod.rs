//! Capability-aware helpers that normalize heterogeneous device attributes
//! into a small set of boolean predicates. Every predicate follows the same
//! shape: ordered capability checks, each delegating to one attribute
//! reader, falling back to a default value on any failure.

mod getters;
mod is_closed;
mod is_locked;
mod is_on;
mod is_open;
mod is_present;
mod is_unlocked;
mod status;
#[cfg(test)]
mod test_support;

pub use getters::{
    get_contact_sensor_status, get_door_position, get_lock_position, get_presence_status, get_switch_status, get_valve_position,
    get_window_shade_position,
};
pub use is_closed::{is_closed, is_closed_or};
pub use is_locked::{is_locked, is_locked_or};
pub use is_on::{is_on, is_on_or};
pub use is_open::{is_open, is_open_or};
pub use is_present::{is_present, is_present_or};
pub use is_unlocked::{is_unlocked, is_unlocked_or};
pub use status::{ContactSensorStatus, DoorPosition, LockPosition, PresenceStatus, SwitchStatus, ValvePosition, WindowShadePosition};

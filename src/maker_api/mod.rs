pub mod domain;
mod client;
mod commander;
mod map_device_event;
mod map_devices;
mod observer;

pub use client::{MakerApiClientError, new_client};
pub use commander::{SendCommandError, send_device_command};
pub use map_device_event::{MapDeviceEventError, map_device_event};
pub use map_devices::{MapDevicesError, map_devices};
pub use observer::observe;

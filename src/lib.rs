//! Integration layer for the Hubitat Elevation hub's built-in Maker API app.
//!
//! The crate queries devices on the hub, maps pushed device event payloads
//! into domain events, sends commands to devices and keeps an in-memory
//! registry of device snapshots. On top of the registry, the [`capabilities`]
//! module offers capability-aware predicates such as
//! [`is_open`](capabilities::is_open()) that normalize device attributes
//! into plain booleans.
//!
//! Connection details are provided through [`app_config::AppConfig`]: the hub
//! url, the id of the Maker API app and the access token it generated.

pub mod app_config;
pub mod capabilities;
pub mod domain;
pub mod maker_api;
pub mod store;

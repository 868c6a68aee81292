use serde::Deserialize;

/// Capabilities a Hubitat device can declare, as listed by the Maker API.
/// The variant names match the hub's capability strings exactly.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum Capability {
    AccelerationSensor,
    Actuator,
    Battery,
    Bulb,
    ContactSensor,
    DoorControl,
    GarageDoorControl,
    IlluminanceMeasurement,
    Lock,
    MotionSensor,
    PowerMeter,
    PresenceSensor,
    Refresh,
    RelativeHumidityMeasurement,
    Sensor,
    Switch,
    SwitchLevel,
    TemperatureMeasurement,
    Valve,
    WaterSensor,
    WindowShade,
}

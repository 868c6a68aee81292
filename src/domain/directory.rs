use crate::domain::device::HubitatDevice;
use async_trait::async_trait;

/// Either an already fetched device snapshot or an id to resolve.
#[derive(Debug)]
pub enum DeviceQuery<'a> {
    Id(u64),
    Snapshot(&'a HubitatDevice),
}

impl From<u64> for DeviceQuery<'static> {
    fn from(id: u64) -> Self {
        DeviceQuery::Id(id)
    }
}

impl<'a> From<&'a HubitatDevice> for DeviceQuery<'a> {
    fn from(device: &'a HubitatDevice) -> Self {
        DeviceQuery::Snapshot(device)
    }
}

/// Resolves a device query to a snapshot. A failed lookup yields `None`,
/// never an error.
#[async_trait]
pub trait DeviceDirectory: Send + Sync {
    async fn get_device(&self, query: DeviceQuery<'_>) -> Option<HubitatDevice>;
}

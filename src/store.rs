use crate::domain::device::HubitatDevice;
use crate::domain::events::Event;
use crate::domain::{DeviceDirectory, DeviceQuery};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, instrument, warn};

pub type DeviceMap = Arc<RwLock<HashMap<u64, HubitatDevice>>>;

#[derive(Debug)]
pub struct Store {
    devices: DeviceMap,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<DeviceMap>,
    notifier_rx: WatchReceiver<DeviceMap>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let devices: DeviceMap = Arc::new(RwLock::new(HashMap::new()));
        let (notifier_tx, notifier_rx) = watch::channel::<DeviceMap>(devices.clone());

        Store {
            devices,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<DeviceMap> {
        self.notifier_rx.clone()
    }

    /// A cloneable handle used by capability predicates to resolve device ids.
    pub fn handle(&self) -> DeviceHandle {
        DeviceHandle {
            devices: self.devices.clone(),
        }
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::DiscoveredDevices(discovered_devices) => {
                    let num_devices = discovered_devices.len();
                    debug!("🔵 Registering {} device(s)...", num_devices);
                    let mut write_guard = self.devices.write().await;

                    write_guard.extend(discovered_devices.into_iter().map(|device| (device.id, device)));
                    info!("🔵 Registering {} device(s)... OK", num_devices);
                    drop(write_guard);

                    self.notifier_tx.send(self.devices.clone()).unwrap_or_default();
                }
                Event::AttributeChanged {
                    device_id,
                    attribute,
                    value,
                } => {
                    let mut write_guard = self.devices.write().await;

                    let Some(device) = write_guard.get_mut(&device_id) else {
                        #[rustfmt::skip]
                        warn!(device_id = device_id, "⚠️ Received attribute changed event for unknown device '{}'", device_id);
                        continue;
                    };

                    let previous_value = device.attributes.insert(attribute.clone(), value.clone());
                    info!(
                        device_id = device.id,
                        "🟢 Updated device '{}', set '{}' to '{:?}', was '{:?}'",
                        device.label,
                        attribute,
                        value,
                        previous_value
                    );
                    drop(write_guard);

                    self.notifier_tx.send(self.devices.clone()).unwrap_or_default();
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct DeviceHandle {
    devices: DeviceMap,
}

impl DeviceHandle {
    pub fn new(devices: DeviceMap) -> Self {
        DeviceHandle { devices }
    }
}

#[async_trait]
impl DeviceDirectory for DeviceHandle {
    async fn get_device(&self, query: DeviceQuery<'_>) -> Option<HubitatDevice> {
        match query {
            DeviceQuery::Snapshot(device) => Some(device.clone()),
            DeviceQuery::Id(id) => self.devices.read().await.get(&id).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttributeValue, Capability};
    use pretty_assertions::assert_eq;
    use test_log::test;
    use tokio::sync::mpsc;
    use tokio::task;

    fn contact_sensor(id: u64, status: &str) -> HubitatDevice {
        HubitatDevice {
            id,
            name: "Generic Z-Wave Contact Sensor".to_string(),
            label: "Front Door".to_string(),
            attributes: HashMap::from([("contact".to_string(), AttributeValue::Str(status.to_string()))]),
            capabilities: vec![Capability::ContactSensor],
        }
    }

    #[test(tokio::test)]
    async fn registers_discovered_devices() {
        let (tx, rx) = mpsc::channel::<Event>(8);
        let mut store = Store::new(rx);
        let handle = store.handle();
        let listener = task::spawn(async move { store.listen().await });

        tx.send(Event::DiscoveredDevices(vec![contact_sensor(130, "closed")]))
            .await
            .unwrap();
        drop(tx);
        listener.await.unwrap();

        let device = handle.get_device(DeviceQuery::Id(130)).await;
        assert_eq!(device, Some(contact_sensor(130, "closed")));
    }

    #[test(tokio::test)]
    async fn updates_an_attribute_of_a_registered_device() {
        let (tx, rx) = mpsc::channel::<Event>(8);
        let mut store = Store::new(rx);
        let handle = store.handle();
        let listener = task::spawn(async move { store.listen().await });

        tx.send(Event::DiscoveredDevices(vec![contact_sensor(130, "closed")]))
            .await
            .unwrap();
        tx.send(Event::AttributeChanged {
            device_id: 130,
            attribute: "contact".to_string(),
            value: AttributeValue::Str("open".to_string()),
        })
        .await
        .unwrap();
        drop(tx);
        listener.await.unwrap();

        let device = handle.get_device(DeviceQuery::Id(130)).await.unwrap();
        assert_eq!(device.attribute("contact"), Some(&AttributeValue::Str("open".to_string())));
    }

    #[test(tokio::test)]
    async fn ignores_attribute_changes_for_unknown_devices() {
        let (tx, rx) = mpsc::channel::<Event>(8);
        let mut store = Store::new(rx);
        let handle = store.handle();
        let listener = task::spawn(async move { store.listen().await });

        tx.send(Event::AttributeChanged {
            device_id: 99,
            attribute: "contact".to_string(),
            value: AttributeValue::Str("open".to_string()),
        })
        .await
        .unwrap();
        drop(tx);
        listener.await.unwrap();

        assert_eq!(handle.get_device(DeviceQuery::Id(99)).await, None);
    }

    #[test(tokio::test)]
    async fn resolves_a_snapshot_query_without_a_lookup() {
        let handle = DeviceHandle::new(Arc::new(RwLock::new(HashMap::new())));
        let device = contact_sensor(130, "open");

        let resolved = handle.get_device(DeviceQuery::Snapshot(&device)).await;

        assert_eq!(resolved, Some(device));
    }
}

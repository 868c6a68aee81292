use crate::app_config::AppConfig;
use crate::domain::device::HubitatDevice;
use crate::maker_api::domain::DeviceDetails;
use crate::maker_api::map_devices::map_devices;
use reqwest::Client;
use std::error::Error;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument};

/// Retrieves all devices known to the Maker API app, including their current
/// attribute values and declared capabilities.
#[instrument(skip(client, config))]
pub async fn observe(client: &Client, config: &AppConfig) -> Result<Vec<HubitatDevice>, Box<dyn Error>> {
    info!("Retrieving Hubitat devices...");

    let strategy = ExponentialBackoff::from_millis(config.hubitat().retry_ms())
        .factor(2)
        .max_delay(config.hubitat().retry_max_delay_ms())
        .map(jitter)
        .take(3);

    let response = Retry::spawn(strategy, || fetch_devices(client, config)).await?;
    let devices = map_devices(response)?;
    info!("Retrieving Hubitat devices... OK, {} found", devices.len());

    Ok(devices)
}

async fn fetch_devices(client: &Client, config: &AppConfig) -> Result<Vec<DeviceDetails>, reqwest::Error> {
    let hubitat = config.hubitat();
    client
        .get(format!("{}/devices/all", hubitat.api_url()))
        .query(&[("access_token", hubitat.access_token())])
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<DeviceDetails>>()
        .await
}

use crate::app_config::AppConfig;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Sends a command to a device, with an optional secondary value such as a
/// dimmer level. The Maker API accepts commands as plain GET requests.
#[instrument(skip(client, config))]
pub async fn send_device_command(
    client: &Client,
    config: &AppConfig,
    device_id: u64,
    command: &str,
    value: Option<&str>,
) -> Result<(), SendCommandError> {
    let hubitat = config.hubitat();
    let url = match value {
        Some(value) => format!("{}/devices/{}/{}/{}", hubitat.api_url(), device_id, command, value),
        None => format!("{}/devices/{}/{}", hubitat.api_url(), device_id, command),
    };

    info!(device_id = device_id, "🟢 Sending command '{}' to device '{}'", command, device_id);
    let response = client
        .get(url)
        .query(&[("access_token", hubitat.access_token())])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await;
        #[rustfmt::skip]
        warn!(device_id = device_id, status_code = %status, "⚠️ Unable to send the command, request to the hub failed. Response: {:?}", body);
        return Err(SendCommandError::RequestFailed { status });
    }

    Ok(())
}

#[derive(Error, Debug)]
pub enum SendCommandError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("hub responded with status {status}")]
    RequestFailed { status: StatusCode },
}

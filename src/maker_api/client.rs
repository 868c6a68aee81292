use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the client used for all Maker API requests. The access token is
/// not baked in here; it travels as a query parameter on every request.
pub fn new_client() -> Result<Client, MakerApiClientError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum MakerApiClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

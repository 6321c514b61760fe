//! HTTP client for the grow-box controller.

use growmon_common::{Reading, decode_reading};
use reqwest::header::CONTENT_TYPE;

/// Error type for device requests.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("connection error: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] growmon_common::Error),
}

/// Client for the controller's HTTP endpoint.
///
/// The controller answers a bare `POST` with its current sensor readings as
/// a JSON object. The form-urlencoded content type is what its firmware
/// expects even though the body is empty.
#[derive(Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
}

impl DeviceClient {
    /// Build a client. No request timeout is set; the busy flag in the
    /// poller is what bounds concurrency, and the network stack's own
    /// timeouts apply.
    pub fn new() -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }

    /// Fetch one reading from the device at `address`.
    pub async fn fetch_reading(&self, address: &str) -> Result<Reading, ClientError> {
        let response = self
            .http
            .post(address)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(decode_reading(&body)?)
    }
}

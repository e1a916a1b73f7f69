// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge abstraction for reading, writing and watching the grouped light.
//!
//! Provides a trait-based layer that enables:
//! - The HTTPS CLIP v2 client for production ([`HueBridge`])
//! - Scripted bridges for unit testing the daemon actors

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_util::TryStreamExt;
use hued_core::{BridgeConfig, LightState, LightUpdate};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncBufRead;
use tokio_util::io::StreamReader;

/// Header carrying the bridge application key.
const APPLICATION_KEY_HEADER: &str = "hue-application-key";
/// Header carrying the SSE resume position.
const LAST_EVENT_ID_HEADER: &str = "Last-Event-ID";
/// Timeout for a single resource read or write.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for establishing a TCP/TLS connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for bridge operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The request could not be sent or the response body not read.
    #[error("request failed: {0}")]
    Request(String),

    /// The bridge answered with a non-success status.
    #[error("bridge returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The bridge answered with errors in the response envelope.
    #[error("bridge error: {0}")]
    Api(String),

    /// The response could not be decoded.
    #[error("invalid bridge response: {0}")]
    Decode(String),

    /// The configured grouped light does not exist.
    #[error("grouped light not found: {0}")]
    NotFound(String),
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Boxed future returned by [`Bridge`] methods.
pub type BridgeFuture<'a, T> = Pin<Box<dyn Future<Output = BridgeResult<T>> + Send + 'a>>;

/// Line source for the push feed.
pub type EventLines = Box<dyn AsyncBufRead + Send + Unpin>;

/// Remote side of the daemon.
///
/// This trait abstracts over the bridge protocol, allowing the command
/// handlers and the event stream consumer to be tested without a network.
pub trait Bridge: Send + Sync + 'static {
    /// Read the current state of a grouped light.
    fn read_grouped_light(&self, id: &str) -> BridgeFuture<'_, LightState>;

    /// Write the fields present in `update` to a grouped light.
    fn write_grouped_light(&self, id: &str, update: LightUpdate) -> BridgeFuture<'_, ()>;

    /// Open the push feed, resuming after `last_event_id` if given.
    fn open_event_stream(&self, last_event_id: Option<&str>) -> BridgeFuture<'_, EventLines>;
}

// ============================================================================
// Wire types
// ============================================================================

/// CLIP v2 response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    #[serde(default)]
    errors: Vec<ApiError>,
    #[serde(default)]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct GroupedLightGet {
    #[serde(default)]
    on: Option<OnGet>,
    #[serde(default)]
    dimming: Option<DimmingGet>,
}

#[derive(Debug, Deserialize)]
struct OnGet {
    #[serde(default)]
    on: bool,
}

#[derive(Debug, Deserialize)]
struct DimmingGet {
    #[serde(default)]
    brightness: Option<f64>,
}

impl From<GroupedLightGet> for LightState {
    fn from(light: GroupedLightGet) -> Self {
        LightState {
            on: light.on.is_some_and(|o| o.on),
            brightness: light.dimming.and_then(|d| d.brightness),
        }
    }
}

#[derive(Debug, Serialize)]
struct GroupedLightPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<OnPut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimming: Option<DimmingPut>,
}

#[derive(Debug, Serialize)]
struct OnPut {
    on: bool,
}

#[derive(Debug, Serialize)]
struct DimmingPut {
    brightness: f64,
}

impl From<LightUpdate> for GroupedLightPut {
    fn from(update: LightUpdate) -> Self {
        GroupedLightPut {
            on: update.on.map(|on| OnPut { on }),
            dimming: update.brightness.map(|brightness| DimmingPut { brightness }),
        }
    }
}

// ============================================================================
// HTTPS implementation
// ============================================================================

/// CLIP v2 client for a Hue bridge.
///
/// Bridges serve a self-signed certificate, so certificate verification is
/// disabled for this client.
pub struct HueBridge {
    base_url: String,
    application_key: String,
    /// Client for resource reads and writes (bounded by `REQUEST_TIMEOUT`).
    client: reqwest::Client,
    /// Client for the push feed; the response body never ends.
    stream_client: reqwest::Client,
}

impl HueBridge {
    /// Create a client for the configured bridge.
    pub fn new(config: &BridgeConfig) -> BridgeResult<Self> {
        Self::with_base_url(base_url(&config.address), &config.application_key)
    }

    /// Create a client for an explicit base URL (e.g. `https://10.0.0.2`).
    pub fn with_base_url(
        base_url: impl Into<String>,
        application_key: impl Into<String>,
    ) -> BridgeResult<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(request_error)?;
        let stream_client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(request_error)?;

        Ok(HueBridge {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            application_key: application_key.into(),
            client,
            stream_client,
        })
    }

    fn resource_url(&self, id: &str) -> String {
        format!("{}/clip/v2/resource/grouped_light/{}", self.base_url, id)
    }

    fn event_stream_url(&self) -> String {
        format!("{}/eventstream/clip/v2", self.base_url)
    }
}

impl Bridge for HueBridge {
    fn read_grouped_light(&self, id: &str) -> BridgeFuture<'_, LightState> {
        let request = self
            .client
            .get(self.resource_url(id))
            .header(APPLICATION_KEY_HEADER, &self.application_key);
        let id = id.to_string();

        Box::pin(async move {
            let response = request.send().await.map_err(request_error)?;
            let envelope: Envelope<GroupedLightGet> = decode(response).await?;
            envelope
                .data
                .into_iter()
                .next()
                .map(LightState::from)
                .ok_or(BridgeError::NotFound(id))
        })
    }

    fn write_grouped_light(&self, id: &str, update: LightUpdate) -> BridgeFuture<'_, ()> {
        let request = self
            .client
            .put(self.resource_url(id))
            .header(APPLICATION_KEY_HEADER, &self.application_key)
            .json(&GroupedLightPut::from(update));

        Box::pin(async move {
            let response = request.send().await.map_err(request_error)?;
            let _: Envelope<serde_json::Value> = decode(response).await?;
            Ok(())
        })
    }

    fn open_event_stream(&self, last_event_id: Option<&str>) -> BridgeFuture<'_, EventLines> {
        let mut request = self
            .stream_client
            .get(self.event_stream_url())
            .header(APPLICATION_KEY_HEADER, &self.application_key)
            .header(ACCEPT, "text/event-stream");
        if let Some(id) = last_event_id {
            request = request.header(LAST_EVENT_ID_HEADER, id);
        }

        Box::pin(async move {
            let response = request.send().await.map_err(request_error)?;
            let status = response.status();
            if status != reqwest::StatusCode::OK {
                let body = response.text().await.unwrap_or_default();
                return Err(BridgeError::Status {
                    status: status.as_u16(),
                    body: body.trim().to_string(),
                });
            }

            let body = Box::pin(response.bytes_stream().map_err(std::io::Error::other));
            let lines: EventLines = Box::new(StreamReader::new(body));
            Ok(lines)
        })
    }
}

/// Normalize a configured address into a base URL.
pub fn base_url(address: &str) -> String {
    let address = address.trim().trim_end_matches('/');
    if address.starts_with("https://") || address.starts_with("http://") {
        address.to_string()
    } else {
        format!("https://{}", address)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> BridgeResult<Envelope<T>> {
    let status = response.status();
    let body = response.text().await.map_err(request_error)?;

    if !status.is_success() {
        return Err(BridgeError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| BridgeError::Decode(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let descriptions: Vec<&str> = envelope
            .errors
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        return Err(BridgeError::Api(descriptions.join("; ")));
    }

    Ok(envelope)
}

fn request_error(e: reqwest::Error) -> BridgeError {
    BridgeError::Request(e.to_string())
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;

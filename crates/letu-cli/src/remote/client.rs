use letu_common::{
    HealthResponse, PreviewResponse, StartTrackingRequest, StatusResponse, StopTrackingRequest,
    TrackingStarted, routes,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{TrackerApi, require_success};

/// Blocking client for the tracker backend, rooted at a fixed base address
/// such as `http://localhost:5000/api`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base: Url,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute `http`/`https` URL.
    pub fn new(http: reqwest::blocking::Client, base_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("invalid API base URL {base_url:?}: {e}"))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            anyhow::bail!("API base URL must be an http(s) URL, got {base_url:?}");
        }
        Ok(Self { http, base })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base address. Segments are
    /// percent-encoded, so a session identifier cannot escape its slot.
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("API base URL {} cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url.clone())
            .send()
            .map_err(|e| anyhow::anyhow!("could not reach {url}: {e}"))?;
        let resp = require_success(resp)?;
        resp.json::<T>()
            .map_err(|e| anyhow::anyhow!("invalid response from server: {e}"))
    }

    /// POST a JSON body and return the raw success body. Success bodies of
    /// the tracking endpoints are informational, so callers decode them
    /// leniently.
    fn post<B: serde::Serialize>(&self, url: Url, body: &B) -> anyhow::Result<String> {
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .map_err(|e| anyhow::anyhow!("could not reach {url}: {e}"))?;
        let resp = require_success(resp)?;
        Ok(resp.text().unwrap_or_default())
    }

    /// Start tracking and return the backend's acknowledgement, if it sent
    /// a decodable one.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or returns a non-success
    /// status.
    pub fn start(&self, req: &StartTrackingRequest) -> anyhow::Result<TrackingStarted> {
        let text = self.post(self.endpoint(&[routes::START_TRACKING])?, req)?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    /// Fetch the backend's view of a session via `GET /status/{sessionId}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable, returns a non-success
    /// status, or the response body cannot be deserialized.
    pub fn status(&self, session_id: &str) -> anyhow::Result<StatusResponse> {
        self.get(self.endpoint(&[routes::STATUS, session_id])?)
    }

    /// Check backend liveness via `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable, returns a non-success
    /// status, or the response body cannot be deserialized.
    pub fn health(&self) -> anyhow::Result<HealthResponse> {
        self.get(self.endpoint(&[routes::HEALTH])?)
    }
}

impl TrackerApi for ApiClient {
    fn start_tracking(&self, req: &StartTrackingRequest) -> anyhow::Result<()> {
        let started = self.start(req)?;
        tracing::debug!(
            ack = started.message.as_deref().unwrap_or_default(),
            "tracking start acknowledged"
        );
        Ok(())
    }

    fn stop_tracking(&self, req: &StopTrackingRequest) -> anyhow::Result<()> {
        self.post(self.endpoint(&[routes::STOP_TRACKING])?, req)?;
        Ok(())
    }

    fn preview(&self, session_id: &str) -> anyhow::Result<PreviewResponse> {
        self.get(self.endpoint(&[routes::PREVIEW, session_id])?)
    }
}

use serde::{Deserialize, Serialize};

/// Default backend base address, including the `/api` prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Route segments below the base address.
pub mod routes {
    pub const HEALTH: &str = "health";
    pub const START_TRACKING: &str = "start-tracking";
    pub const STOP_TRACKING: &str = "stop-tracking";
    /// Followed by the session identifier as one path segment.
    pub const PREVIEW: &str = "preview";
    /// Followed by the session identifier as one path segment.
    pub const STATUS: &str = "status";
}

/// Body of `POST /start-tracking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTrackingRequest {
    pub session_id: String,
    pub sheet_url: String,
}

/// Body of `POST /stop-tracking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTrackingRequest {
    pub session_id: String,
}

/// Success body of `POST /start-tracking`. Both fields are informational;
/// a 2xx status alone means tracking started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStarted {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Failure body shared by every endpoint. `error` is optional: proxies and
/// crashed workers may answer with an empty or non-JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /status/{sessionId}`. `running` and `lastUpdate` are only
/// present while the session is tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub tracking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

use std::fmt;

/// Banner texts shown by the panel.
pub mod messages {
    pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
    pub const ENTER_SESSION_ID: &str = "Please enter a session ID";
    pub const TRACKING_STARTED: &str = "Tracking started! Data will be updated every 30 seconds.";
    pub const TRACKING_STOPPED: &str = "Tracking stopped";
    pub const START_FAILED: &str = "Failed to start tracking";
    pub const STOP_FAILED: &str = "Failed to stop tracking";
    pub const PREVIEW_FAILED: &str = "Failed to preview data";
}

/// Form fields. Editable only while the panel is idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub session_id: String,
    pub sheet_url: String,
}

impl SessionInput {
    pub fn new(session_id: impl Into<String>, sheet_url: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            sheet_url: sheet_url.into(),
        }
    }

    /// Guard for starting: both fields present.
    pub fn is_complete(&self) -> bool {
        !self.session_id.is_empty() && !self.sheet_url.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackingState {
    #[default]
    Idle,
    /// Start request in flight.
    Starting,
    Active,
    /// Stop request in flight.
    Stopping,
}

impl fmt::Display for TrackingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::Active => "active",
            Self::Stopping => "stopping",
        })
    }
}

/// Result of the most recent action. Beginning an action resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl RequestOutcome {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) => Some(msg),
            _ => None,
        }
    }
}

/// User-triggered panel actions, one per control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartTracking,
    StopTracking,
    Preview,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartTracking => "start-tracking",
            Self::StopTracking => "stop-tracking",
            Self::Preview => "preview",
        })
    }
}

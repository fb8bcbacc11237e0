//! The tracker panel: a form with a session identifier and a sheet address,
//! three actions, and the banner/preview state derived from their outcomes.
//!
//! Every action runs in two phases so a front end can show the in-flight
//! state: [`TrackerPanel::begin`] validates and yields the request to send,
//! [`TrackerPanel::finish`] applies the response. [`TrackerPanel::run`]
//! does both against a [`TrackerApi`].

mod types;


use letu_common::{PreviewResponse, StartTrackingRequest, StopTrackingRequest};

use crate::remote::{TrackerApi, server_message};

pub use types::{Action, RequestOutcome, SessionInput, TrackingState, messages};

/// A request produced by [`TrackerPanel::begin`], to be sent exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Start(StartTrackingRequest),
    Stop(StopTrackingRequest),
    Preview { session_id: String },
}

/// Successful response to a [`PendingRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Acknowledged,
    Preview(PreviewResponse),
}

impl PendingRequest {
    pub const fn action(&self) -> Action {
        match self {
            Self::Start(_) => Action::StartTracking,
            Self::Stop(_) => Action::StopTracking,
            Self::Preview { .. } => Action::Preview,
        }
    }

    /// Issue the request. No retries.
    ///
    /// # Errors
    ///
    /// Propagates the transport or server error from `api`.
    pub fn send(&self, api: &impl TrackerApi) -> anyhow::Result<Response> {
        match self {
            Self::Start(req) => api.start_tracking(req).map(|()| Response::Acknowledged),
            Self::Stop(req) => api.stop_tracking(req).map(|()| Response::Acknowledged),
            Self::Preview { session_id } => api.preview(session_id).map(Response::Preview),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackerPanel {
    input: SessionInput,
    state: TrackingState,
    outcome: RequestOutcome,
    preview: Option<PreviewResponse>,
    in_flight: Option<Action>,
}

impl TrackerPanel {
    pub fn new(input: SessionInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    /// A panel for a session the backend is already tracking, so the only
    /// available action is stopping it.
    pub fn resume(input: SessionInput) -> Self {
        Self {
            input,
            state: TrackingState::Active,
            ..Self::default()
        }
    }

    pub const fn input(&self) -> &SessionInput {
        &self.input
    }

    pub const fn state(&self) -> TrackingState {
        self.state
    }

    pub const fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub const fn preview(&self) -> Option<&PreviewResponse> {
        self.preview.as_ref()
    }

    /// True while a request is in flight; every control is disabled.
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub const fn in_flight(&self) -> Option<Action> {
        self.in_flight
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Active | TrackingState::Stopping)
    }

    /// Inputs are locked while any request is in flight and from the moment
    /// a start is issued until tracking has stopped again.
    pub fn inputs_editable(&self) -> bool {
        self.state == TrackingState::Idle && !self.is_loading()
    }

    /// Whether the control for `action` is shown and enabled.
    pub fn is_enabled(&self, action: Action) -> bool {
        if self.is_loading() {
            return false;
        }
        match action {
            Action::StartTracking | Action::Preview => self.state == TrackingState::Idle,
            Action::StopTracking => self.state == TrackingState::Active,
        }
    }

    /// Controls shown for the current state, enabled or not.
    pub fn visible_actions(&self) -> &'static [Action] {
        if self.is_tracking() {
            &[Action::StopTracking]
        } else {
            &[Action::StartTracking, Action::Preview]
        }
    }

    /// Returns `false` (and leaves the field untouched) when inputs are locked.
    pub fn set_session_id(&mut self, value: impl Into<String>) -> bool {
        if !self.inputs_editable() {
            return false;
        }
        self.input.session_id = value.into();
        true
    }

    /// Returns `false` (and leaves the field untouched) when inputs are locked.
    pub fn set_sheet_url(&mut self, value: impl Into<String>) -> bool {
        if !self.inputs_editable() {
            return false;
        }
        self.input.sheet_url = value.into();
        true
    }

    /// Begin `action`: clear the previous outcome, validate the inputs, and
    /// return the request to send.
    ///
    /// Returns `None` without touching any state when the control is
    /// disabled, and `None` with an error outcome when validation fails.
    pub fn begin(&mut self, action: Action) -> Option<PendingRequest> {
        if !self.is_enabled(action) {
            tracing::debug!(%action, state = %self.state, "action ignored: control disabled");
            return None;
        }
        self.outcome = RequestOutcome::None;

        let pending = match action {
            Action::StartTracking => {
                if !self.input.is_complete() {
                    self.fail(messages::FILL_ALL_FIELDS);
                    return None;
                }
                self.transition(TrackingState::Starting);
                PendingRequest::Start(StartTrackingRequest {
                    session_id: self.input.session_id.clone(),
                    sheet_url: self.input.sheet_url.clone(),
                })
            }
            Action::StopTracking => {
                self.transition(TrackingState::Stopping);
                PendingRequest::Stop(StopTrackingRequest {
                    session_id: self.input.session_id.clone(),
                })
            }
            Action::Preview => {
                self.preview = None;
                if self.input.session_id.is_empty() {
                    self.fail(messages::ENTER_SESSION_ID);
                    return None;
                }
                PendingRequest::Preview {
                    session_id: self.input.session_id.clone(),
                }
            }
        };
        self.in_flight = Some(action);
        Some(pending)
    }

    /// Apply the response to the request returned by the last [`begin`].
    /// Ignored when nothing is in flight.
    ///
    /// [`begin`]: Self::begin
    pub fn finish(&mut self, result: anyhow::Result<Response>) {
        let Some(action) = self.in_flight.take() else {
            tracing::warn!("response arrived with no request in flight; ignoring");
            return;
        };
        match action {
            Action::StartTracking => match result {
                Ok(_) => {
                    self.transition(TrackingState::Active);
                    self.succeed(messages::TRACKING_STARTED);
                }
                Err(e) => {
                    self.transition(TrackingState::Idle);
                    self.fail_with(&e, messages::START_FAILED);
                }
            },
            // A failed stop still returns to idle; the panel does not model
            // a session that refused to stop.
            Action::StopTracking => {
                self.transition(TrackingState::Idle);
                match result {
                    Ok(_) => self.succeed(messages::TRACKING_STOPPED),
                    Err(e) => self.fail_with(&e, messages::STOP_FAILED),
                }
            }
            Action::Preview => match result {
                Ok(Response::Preview(preview)) => {
                    tracing::debug!(count = preview.count, "preview loaded");
                    self.preview = Some(preview);
                    self.outcome = RequestOutcome::None;
                }
                Ok(Response::Acknowledged) => {
                    self.fail(messages::PREVIEW_FAILED);
                }
                Err(e) => self.fail_with(&e, messages::PREVIEW_FAILED),
            },
        }
    }

    /// Run `action` end to end: one request at most, no retries.
    ///
    /// Returns `true` if a request was sent.
    pub fn run(&mut self, action: Action, api: &impl TrackerApi) -> bool {
        let Some(pending) = self.begin(action) else {
            return false;
        };
        let result = pending.send(api);
        self.finish(result);
        true
    }

    pub fn start_tracking(&mut self, api: &impl TrackerApi) -> bool {
        self.run(Action::StartTracking, api)
    }

    pub fn stop_tracking(&mut self, api: &impl TrackerApi) -> bool {
        self.run(Action::StopTracking, api)
    }

    pub fn fetch_preview(&mut self, api: &impl TrackerApi) -> bool {
        self.run(Action::Preview, api)
    }

    fn transition(&mut self, to: TrackingState) {
        if self.state != to {
            tracing::debug!(from = %self.state, %to, "tracking state changed");
            self.state = to;
        }
    }

    fn succeed(&mut self, msg: &str) {
        self.outcome = RequestOutcome::Success(msg.to_string());
    }

    fn fail(&mut self, msg: &str) {
        self.outcome = RequestOutcome::Error(msg.to_string());
    }

    fn fail_with(&mut self, err: &anyhow::Error, default: &str) {
        let detail = format!("{err:#}");
        tracing::debug!(error = %detail, "request failed");
        let msg = server_message(err).unwrap_or(default);
        self.outcome = RequestOutcome::Error(msg.to_string());
    }
}

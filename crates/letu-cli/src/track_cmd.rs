use letu::panel::{SessionInput, TrackerPanel};
use letu::remote::TrackerApi;

use crate::output::report_outcome;

/// Entry point for `letu start`: one start action on a fresh panel.
pub fn cmd_start(api: &impl TrackerApi, session_id: &str, sheet_url: &str) -> i32 {
    let mut panel = TrackerPanel::new(SessionInput::new(session_id, sheet_url));
    panel.start_tracking(api);
    report_outcome(&panel)
}

/// Entry point for `letu stop`: one stop action on a panel attached to a
/// session the backend is already tracking.
pub fn cmd_stop(api: &impl TrackerApi, session_id: &str) -> i32 {
    let mut panel = TrackerPanel::resume(SessionInput::new(session_id, ""));
    panel.stop_tracking(api);
    report_outcome(&panel)
}

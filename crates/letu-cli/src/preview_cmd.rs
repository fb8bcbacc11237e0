use letu::panel::{SessionInput, TrackerPanel};
use letu::remote::TrackerApi;
use letu::render;

use crate::output::{print_json, report_outcome};

/// Entry point for `letu preview`.
pub fn cmd_preview(api: &impl TrackerApi, session_id: &str, json: bool) -> i32 {
    let mut panel = TrackerPanel::new(SessionInput::new(session_id, ""));
    panel.fetch_preview(api);

    let Some(preview) = panel.preview() else {
        return report_outcome(&panel);
    };
    if json {
        print_json(preview);
    } else {
        for line in render::render_preview(preview) {
            println!("{line}");
        }
    }
    0
}

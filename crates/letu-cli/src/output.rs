use letu::panel::{RequestOutcome, TrackerPanel};
use letu::render;

/// Print a Serialize value as pretty JSON, logging errors to stderr.
pub fn print_json(value: &(impl serde::Serialize + ?Sized)) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[letu] JSON serialization error: {e}"),
    }
}

/// Report the outcome of a one-shot panel action and map it to an exit
/// code: an error banner exits 1, anything else 0.
pub fn report_outcome(panel: &TrackerPanel) -> i32 {
    match panel.outcome() {
        RequestOutcome::Error(msg) => {
            eprintln!("[letu] error: {msg}");
            1
        }
        RequestOutcome::Success(msg) => {
            println!("{msg}");
            if panel.is_tracking() {
                println!("{}", render::TRACKING_INDICATOR);
            }
            0
        }
        RequestOutcome::None => 0,
    }
}

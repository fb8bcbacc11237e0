//! Plain-text views of the tracker panel.

use letu_common::{PreviewResponse, ProductSummary};

use crate::panel::{Action, RequestOutcome, TrackerPanel};

/// Number of products listed in a preview.
pub const PREVIEW_LIMIT: usize = 5;

pub const TITLE_PLACEHOLDER: &str = "N/A";

pub const TRACKING_INDICATOR: &str = "● Tracking active - Updating every 30 seconds";

/// The products a preview lists: at most [`PREVIEW_LIMIT`].
pub fn visible_products(preview: &PreviewResponse) -> &[ProductSummary] {
    let end = preview.products.len().min(PREVIEW_LIMIT);
    &preview.products[..end]
}

/// How many products the backend counted beyond the listed ones, if any.
pub fn remaining_products(preview: &PreviewResponse) -> Option<u64> {
    preview
        .count
        .checked_sub(PREVIEW_LIMIT as u64)
        .filter(|n| *n > 0)
}

/// Format an optional metric: absent counts as 0, whole numbers print
/// without a fractional part.
pub fn format_metric(value: Option<f64>) -> String {
    let v = value.unwrap_or(0.0);
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

pub fn product_title(product: &ProductSummary) -> &str {
    product
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(TITLE_PLACEHOLDER)
}

/// Render the preview card: header, up to five products, and the
/// remainder line.
pub fn render_preview(preview: &PreviewResponse) -> Vec<String> {
    let mut lines = vec![format!(
        "Preview Data ({} products found)",
        preview.count
    )];
    for (i, product) in visible_products(preview).iter().enumerate() {
        lines.push(format!("{:>2}. {}", i + 1, product_title(product)));
        lines.push(format!(
            "    Clicks: {}  Orders: {}  Revenue: {}",
            format_metric(product.product_clicks),
            format_metric(product.orders_created),
            format_metric(product.revenue),
        ));
    }
    if let Some(n) = remaining_products(preview) {
        lines.push(format!("...and {n} more products"));
    }
    lines
}

pub fn render_outcome(outcome: &RequestOutcome) -> Option<String> {
    match outcome {
        RequestOutcome::None => None,
        RequestOutcome::Error(msg) => Some(format!("⚠ {msg}")),
        RequestOutcome::Success(msg) => Some(format!("✔ {msg}")),
    }
}

/// Label of the control for `action`, switching to its progress text while
/// any request is in flight.
pub const fn button_label(action: Action, loading: bool) -> &'static str {
    match (action, loading) {
        (Action::StartTracking, false) => "Start Tracking",
        (Action::StartTracking, true) => "Starting...",
        (Action::Preview, false) => "Preview Data",
        (Action::Preview, true) => "Loading...",
        (Action::StopTracking, false) => "Stop Tracking",
        (Action::StopTracking, true) => "Stopping...",
    }
}

fn field_line(label: &str, value: &str, locked: bool) -> String {
    let shown = if value.is_empty() { "(empty)" } else { value };
    if locked {
        format!("{label:<12} {shown}  [locked]")
    } else {
        format!("{label:<12} {shown}")
    }
}

/// Render the whole panel: inputs, banner, controls, tracking indicator,
/// and the preview card.
pub fn render_panel(panel: &TrackerPanel) -> String {
    let locked = !panel.inputs_editable();
    let input = panel.input();
    let mut lines = vec![
        field_line("Session ID", &input.session_id, locked),
        field_line("Sheet URL", &input.sheet_url, locked),
    ];

    if let Some(banner) = render_outcome(panel.outcome()) {
        lines.push(String::new());
        lines.push(banner);
    }

    let controls: Vec<String> = panel
        .visible_actions()
        .iter()
        .map(|a| format!("[{}]", button_label(*a, panel.is_loading())))
        .collect();
    lines.push(String::new());
    lines.push(controls.join("  "));

    if panel.is_tracking() {
        lines.push(TRACKING_INDICATOR.to_string());
    }

    if let Some(preview) = panel.preview() {
        lines.push(String::new());
        lines.extend(render_preview(preview));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

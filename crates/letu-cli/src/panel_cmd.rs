use dialoguer::{Input, Select};
use letu::panel::{Action, SessionInput, TrackerPanel};
use letu::remote::TrackerApi;
use letu::render;

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    EditSessionId,
    EditSheetUrl,
    Run(Action),
    Quit,
}

impl MenuItem {
    const fn label(self) -> &'static str {
        match self {
            Self::EditSessionId => "Edit Session ID",
            Self::EditSheetUrl => "Edit Google Sheet URL",
            Self::Run(action) => render::button_label(action, false),
            Self::Quit => "Quit",
        }
    }
}

/// Menu for the current panel state: field edits while inputs are
/// editable, then every enabled control, then quit.
fn menu(panel: &TrackerPanel) -> Vec<MenuItem> {
    let mut items = Vec::new();
    if panel.inputs_editable() {
        items.push(MenuItem::EditSessionId);
        items.push(MenuItem::EditSheetUrl);
    }
    items.extend(
        panel
            .visible_actions()
            .iter()
            .filter(|a| panel.is_enabled(**a))
            .map(|a| MenuItem::Run(*a)),
    );
    items.push(MenuItem::Quit);
    items
}

/// Preferred cursor position: the first action, so Enter repeats the
/// natural next step.
fn default_index(items: &[MenuItem]) -> usize {
    items
        .iter()
        .position(|i| matches!(i, MenuItem::Run(_)))
        .unwrap_or(0)
}

/// Run one action, announcing its progress label while the request is in
/// flight.
fn dispatch(panel: &mut TrackerPanel, action: Action, api: &impl TrackerApi) {
    let Some(pending) = panel.begin(action) else {
        return;
    };
    eprintln!("[letu] {}", render::button_label(action, panel.is_loading()));
    let result = pending.send(api);
    panel.finish(result);
}

fn print_help() {
    println!("Letu Live Tracker — real-time livestream product data tracker");
    println!();
    println!("  1. Get the Session ID from the livestream URL (?sessionId=XXXXX)");
    println!("  2. Create a Google Sheet you can edit and enter its URL");
    println!("  3. Preview Data to test the connection");
    println!("  4. Start Tracking to begin real-time updates");
    println!("  5. The sheet updates automatically every 30 seconds");
    println!();
}

/// Entry point for `letu panel`.
///
/// # Errors
///
/// Returns an error if the terminal prompt fails (e.g. stdin is not a TTY).
pub fn cmd_panel(
    api: &impl TrackerApi,
    session_id: Option<&str>,
    sheet_url: Option<&str>,
) -> anyhow::Result<i32> {
    let mut panel = TrackerPanel::new(SessionInput::new(
        session_id.unwrap_or_default(),
        sheet_url.unwrap_or_default(),
    ));
    print_help();

    loop {
        println!("{}", render::render_panel(&panel));
        let items = menu(&panel);
        let labels: Vec<&str> = items.iter().map(|i| i.label()).collect();
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&labels)
            .default(default_index(&items))
            .interact_opt()?;
        let Some(item) = choice.and_then(|idx| items.get(idx).copied()) else {
            break;
        };
        match item {
            MenuItem::EditSessionId => {
                let value: String = Input::new()
                    .with_prompt("Session ID (e.g. 29060044)")
                    .with_initial_text(panel.input().session_id.clone())
                    .allow_empty(true)
                    .interact_text()?;
                panel.set_session_id(value);
            }
            MenuItem::EditSheetUrl => {
                let value: String = Input::new()
                    .with_prompt("Google Sheet URL (https://docs.google.com/spreadsheets/d/...)")
                    .with_initial_text(panel.input().sheet_url.clone())
                    .allow_empty(true)
                    .interact_text()?;
                panel.set_sheet_url(value);
            }
            MenuItem::Run(action) => dispatch(&mut panel, action, api),
            MenuItem::Quit => break,
        }
    }

    if panel.is_tracking() {
        let id = &panel.input().session_id;
        eprintln!(
            "[letu] tracking continues on the backend; run `letu stop --session {id}` to end it"
        );
    }
    Ok(0)
}

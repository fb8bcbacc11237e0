use letu::remote::ApiClient;
use letu_common::StatusResponse;

use crate::output::print_json;

/// Entry point for `letu status`.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or answers with a
/// non-success status.
pub fn cmd_status(api: &ApiClient, session_id: &str, json: bool) -> anyhow::Result<i32> {
    let status = api.status(session_id)?;
    if json {
        print_json(&status);
    } else {
        println!("{}", describe_status(session_id, &status));
    }
    Ok(0)
}

/// Entry point for `letu health`.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or unhealthy.
pub fn cmd_health(api: &ApiClient) -> anyhow::Result<i32> {
    let health = api.health()?;
    match health.message {
        Some(msg) => println!("{}: {msg}", health.status),
        None => println!("{}", health.status),
    }
    eprintln!("[letu] backend at {} is reachable", api.base_url());
    Ok(0)
}

fn describe_status(session_id: &str, status: &StatusResponse) -> String {
    if !status.tracking {
        return format!("Session {session_id}: not tracked");
    }
    let running = if status.running.unwrap_or(false) {
        "running"
    } else {
        "stopping"
    };
    let last = status.last_update.as_deref().unwrap_or("never");
    format!("Session {session_id}: tracked ({running}), last update: {last}")
}

pub mod client;
pub mod http;

use letu_common::{ErrorBody, PreviewResponse, StartTrackingRequest, StopTrackingRequest};

pub use client::ApiClient;

/// The three backend calls the tracker panel issues. [`ApiClient`] is the
/// HTTP implementation; tests substitute in-memory fakes.
pub trait TrackerApi {
    /// `POST /start-tracking`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    fn start_tracking(&self, req: &StartTrackingRequest) -> anyhow::Result<()>;

    /// `POST /stop-tracking`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    fn stop_tracking(&self, req: &StopTrackingRequest) -> anyhow::Result<()>;

    /// `GET /preview/{sessionId}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// undecodable body.
    fn preview(&self, session_id: &str) -> anyhow::Result<PreviewResponse>;
}

/// Structured error for non-2xx responses so callers can branch on the
/// type (and the backend's `error` field) instead of parsing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub status: u16,
    /// The `error` field of the response body, when present and non-empty.
    pub message: Option<String>,
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "server returned HTTP {}: {msg}", self.status),
            None => write!(f, "server returned HTTP {}", self.status),
        }
    }
}

impl std::error::Error for ServerError {}

/// Return the backend-supplied message carried by `err`, if any.
///
/// Only [`ServerError`]s carry one; transport and decode failures yield
/// `None` so the caller falls back to its own default.
pub fn server_message(err: &anyhow::Error) -> Option<&str> {
    err.downcast_ref::<ServerError>()
        .and_then(|e| e.message.as_deref())
}

/// Consume a response and return it if the status is successful.
///
/// On a non-2xx status, returns a [`ServerError`] carrying the body's
/// `error` field when there is one.
///
/// # Errors
///
/// Returns an error for any non-2xx status code.
pub(crate) fn require_success(
    resp: reqwest::blocking::Response,
) -> anyhow::Result<reqwest::blocking::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // An unreadable body still yields the status-only error.
    let body = resp.text().unwrap_or_default();
    Err(ServerError {
        status: status.as_u16(),
        message: extract_error_message(&body),
    }
    .into())
}

/// Pull the `error` string out of a failure body.
///
/// Returns `None` for non-JSON bodies, a missing or non-string `error`
/// field, or one that is empty after sanitizing.
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let msg = sanitize_error_text(&parsed.error?);
    (!msg.is_empty()).then_some(msg)
}

/// Truncate to 256 chars, turn line breaks and tabs into spaces, and strip
/// other control characters.
fn sanitize_error_text(text: &str) -> String {
    let truncated = if text.chars().count() > 256 {
        format!("{}...", text.chars().take(256).collect::<String>())
    } else {
        text.to_string()
    };
    truncated
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() && c.is_control() => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_field() {
        let body = r#"{"error": "Already tracking this session"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Already tracking this session")
        );
    }

    #[test]
    fn extract_ignores_other_fields() {
        assert_eq!(extract_error_message(r#"{"message": "hi"}"#), None);
    }

    #[test]
    fn extract_rejects_non_string_error() {
        assert_eq!(extract_error_message(r#"{"error": 500}"#), None);
    }

    #[test]
    fn extract_rejects_empty_error() {
        assert_eq!(extract_error_message(r#"{"error": ""}"#), None);
    }

    #[test]
    fn extract_rejects_html_body() {
        assert_eq!(
            extract_error_message("<html><body>502 Bad Gateway</body></html>"),
            None
        );
    }

    #[test]
    fn sanitize_truncates() {
        let long = "x".repeat(300);
        assert_eq!(sanitize_error_text(&long).len(), 259); // 256 + "..."
    }

    #[test]
    fn sanitize_counts_chars_not_bytes() {
        let long = "é".repeat(300);
        let result = sanitize_error_text(&long);
        assert_eq!(result.chars().count(), 259);
    }

    #[test]
    fn sanitize_strips_control_chars() {
        assert_eq!(
            sanitize_error_text("bad\x1b[31m session\x00"),
            "bad[31m session"
        );
    }

    #[test]
    fn extract_keeps_line_breaks_as_spaces() {
        let body = r#"{"error": "net::ERR_NAME_NOT_RESOLVED\nStacktrace:\n#0 0x55d\tat chrome"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("net::ERR_NAME_NOT_RESOLVED Stacktrace: #0 0x55d at chrome")
        );
    }

    #[test]
    fn server_error_display_with_message() {
        let err = ServerError {
            status: 404,
            message: Some("Session not being tracked".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "server returned HTTP 404: Session not being tracked"
        );
    }

    #[test]
    fn server_error_display_without_message() {
        let err = ServerError {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned HTTP 502");
    }

    #[test]
    fn server_message_downcasts() {
        let err: anyhow::Error = ServerError {
            status: 400,
            message: Some("x".to_string()),
        }
        .into();
        assert_eq!(server_message(&err), Some("x"));
    }

    #[test]
    fn server_message_none_for_transport_errors() {
        let err = anyhow::anyhow!("could not reach http://localhost:5000/api: refused");
        assert_eq!(server_message(&err), None);
    }
}

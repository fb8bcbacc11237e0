use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Build a blocking HTTP client.
///
/// `timeout_secs` bounds a whole request; `None` lets a slow backend keep the
/// request open indefinitely, which is the panel's default. Connecting is
/// always bounded.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed (e.g., invalid TLS config).
pub fn build_client(timeout_secs: Option<u64>) -> anyhow::Result<reqwest::blocking::Client> {
    // The blocking client applies a 30 s default unless given an explicit `None`.
    reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(timeout_secs.map(Duration::from_secs))
        .user_agent(format!("letu-cli/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow::anyhow!("could not build HTTP client: {e}"))
}

/// Returns `true` if the URL uses HTTPS or targets localhost.
pub fn is_secure_url(url: &str) -> bool {
    let Ok(parsed) = reqwest::Url::parse(url) else {
        return false;
    };
    match parsed.scheme() {
        "https" => true,
        "http" => matches!(parsed.host_str(), Some("localhost" | "127.0.0.1")),
        _ => false,
    }
}

use std::path::{Path, PathBuf};

use letu_common::DEFAULT_BASE_URL;

/// Name of the per-project and per-user config directory.
const CONFIG_DIR: &str = ".letu";

/// Backend connection settings, fixed for the lifetime of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Private: parsed representation of a letu config file.
#[derive(serde::Deserialize, Default)]
struct LetuConfigFile {
    api: Option<ApiSection>,
}

#[derive(serde::Deserialize, Default)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Read the `[api]` table from a TOML config file. A missing file is
/// silently `None`; a malformed one is logged and also `None`.
fn read_api_section(path: &Path) -> Option<ApiSection> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<LetuConfigFile>(&content) {
        Ok(cfg) => cfg.api,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring malformed config: {e}");
            None
        }
    }
}

/// Trim whitespace and trailing slashes; empty means unset.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ApiConfig {
    /// Load settings using auto-detected paths. Priority for the base URL:
    /// 1. `override_url` (the `--api-url` flag or `LETU_API_URL`)
    /// 2. `{project_root}/.letu/config.toml` `[api] base_url`
    /// 3. `{config_dir}/letu/config.toml` `[api] base_url` (e.g. `~/.config/letu/config.toml`)
    /// 4. Default: `http://localhost:5000/api`
    ///
    /// `[api] timeout_secs` follows the same file priority.
    pub fn load(override_url: Option<&str>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let project_root = project_root_for(&cwd);
        let global = dirs::config_dir().map(|d| d.join("letu").join("config.toml"));
        Self::load_from(override_url, Some(&project_root), global.as_deref())
    }

    /// Load settings from explicit paths. Useful for testing.
    pub fn load_from(
        override_url: Option<&str>,
        project_root: Option<&Path>,
        global_config: Option<&Path>,
    ) -> Self {
        let project = project_root
            .and_then(|root| read_api_section(&root.join(CONFIG_DIR).join("config.toml")))
            .unwrap_or_default();
        let global = global_config
            .and_then(read_api_section)
            .unwrap_or_default();

        let base_url = override_url
            .and_then(normalize_base_url)
            .or_else(|| project.base_url.as_deref().and_then(normalize_base_url))
            .or_else(|| global.base_url.as_deref().and_then(normalize_base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = project.timeout_secs.or(global.timeout_secs);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

/// Walk up from `dir` to find the nearest ancestor containing `.git` or `.letu/`.
/// Falls back to `dir` itself if neither is found.
pub fn project_root_for(dir: &Path) -> PathBuf {
    let mut current = dir.to_path_buf();
    loop {
        if current.join(".git").exists() || current.join(CONFIG_DIR).is_dir() {
            return current;
        }
        if !current.pop() {
            break;
        }
    }
    dir.to_path_buf()
}

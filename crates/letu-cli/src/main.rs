mod output;
mod panel_cmd;
mod preview_cmd;
mod status_cmd;
mod track_cmd;

use clap::{Parser, Subcommand};

use letu::config::ApiConfig;
use letu::logging;
use letu::remote::{ApiClient, http};

#[derive(Parser)]
#[command(
    name = "letu",
    version,
    about = "Livestream tracker — start, stop and preview product tracking"
)]
struct Cli {
    /// Backend API base address (e.g. http://localhost:5000/api)
    #[arg(long, global = true, env = "LETU_API_URL")]
    api_url: Option<String>,

    /// Show request and state-transition details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive tracker panel
    Panel {
        /// Pre-fill the session ID
        #[arg(long)]
        session: Option<String>,
        /// Pre-fill the Google Sheet URL
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Start tracking a livestream session into a sheet
    Start {
        /// Session ID from the livestream URL (?sessionId=XXXXX)
        #[arg(long)]
        session: Option<String>,
        /// Google Sheet URL the backend writes to
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Stop tracking a session
    Stop {
        /// Session ID being tracked
        #[arg(long)]
        session: String,
    },
    /// Preview the products a session currently reports
    Preview {
        /// Session ID from the livestream URL
        session_id: Option<String>,
        /// Output the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show whether the backend is tracking a session
    Status {
        session_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the backend is reachable
    Health,
}

/// Resolve settings and build the backend client.
fn api_client(cli: &Cli) -> anyhow::Result<ApiClient> {
    let config = ApiConfig::load(cli.api_url.as_deref());
    tracing::debug!(?config, "resolved API config");
    if !http::is_secure_url(&config.base_url) {
        eprintln!(
            "[letu] warning: API URL {} uses plain HTTP to a remote host",
            config.base_url
        );
    }
    let client = http::build_client(config.timeout_secs)?;
    ApiClient::new(client, &config.base_url)
}

fn or_exit(r: anyhow::Result<i32>) -> i32 {
    r.unwrap_or_else(|e| {
        eprintln!("[letu] error: {e:#}");
        1
    })
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let api = api_client(cli)?;
    match &cli.command {
        Commands::Panel { session, sheet } => {
            panel_cmd::cmd_panel(&api, session.as_deref(), sheet.as_deref())
        }
        Commands::Start { session, sheet } => Ok(track_cmd::cmd_start(
            &api,
            session.as_deref().unwrap_or_default(),
            sheet.as_deref().unwrap_or_default(),
        )),
        Commands::Stop { session } => Ok(track_cmd::cmd_stop(&api, session)),
        Commands::Preview { session_id, json } => Ok(preview_cmd::cmd_preview(
            &api,
            session_id.as_deref().unwrap_or_default(),
            *json,
        )),
        Commands::Status { session_id, json } => {
            status_cmd::cmd_status(&api, session_id, *json)
        }
        Commands::Health => status_cmd::cmd_health(&api),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let exit_code = or_exit(run(&cli));
    std::process::exit(exit_code);
}

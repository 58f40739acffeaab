use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blackboard_shared::config::DEFAULT_API_URL;
use blackboard_shared::ClientConfig;

mod handlers;
mod state;

use crate::handlers::router;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding index.html, the wasm bundle and assets.
    #[arg(long)]
    public_dir: Option<PathBuf>,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    /// Base URL of the calculation service handed to the page.
    #[arg(long, env = "BLACKBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl Args {
    fn public_dir(&self) -> PathBuf {
        self.public_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"))
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::resolve(
            Some(ClientConfig {
                api_url: self.api_url.clone(),
            }),
            None,
        )
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let public_dir = args.public_dir();
    if !public_dir.join("index.html").is_file() {
        tracing::warn!(public_dir = %public_dir.display(), "index.html not found");
    }
    let state = AppState::new(args.client_config(), public_dir);
    tracing::info!(api_url = %state.config.api_url, "calculation service configured");

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!(port = args.port, "Blackboard running at http://localhost:{}", args.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server");
    axum::serve(listener, app).await.expect("Server crashed");
}

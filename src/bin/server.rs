use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use axum_server::Handle;
use clap::Parser;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use finlife_web::{
    AppState, HostPageData, PushConfig, add_tracing_layer, build_router, graceful_shutdown,
    setup_logging,
};

/// The server for the FinLife quick-operation and notification host page.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON file with the categories and wallets shown in the
    /// quick-operation modal. Without it the modal has no options.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// The port to serve the page from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The directory with static files and the service worker script `sw.js`.
    #[arg(long, default_value = "static/")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let host_page = match &args.catalog {
        Some(path) => match HostPageData::load(path) {
            Ok(host_page) => host_page,
            Err(error) => {
                tracing::error!("Could not load the catalog: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::warn!("No catalog given, the quick-operation modal will have no options");
            HostPageData::default()
        }
    };

    let state = AppState::new(host_page, &PushConfig::from_env(), args.static_dir);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

use albums_core::seed::{default_seed, load_seed};
use albums_core::{create_router, AlbumStore, IdStrategy, SharedAlbumStore};
use clap::Parser;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

/// Album catalog server - serves the album REST API.
#[derive(Parser)]
#[command(name = "albums-server")]
struct Args {
    /// Port for the album API.
    #[arg(long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Address to bind the server to.
    #[arg(long, default_value = "0.0.0.0", env = "ALBUMS_BIND")]
    bind: String,

    /// YAML file with the albums to start from, instead of the built-in six.
    #[arg(long, env = "ALBUMS_SEED_PATH")]
    seed_path: Option<PathBuf>,

    /// Never hand out an id twice, even after the highest album is deleted.
    #[arg(long, env = "ALBUMS_MONOTONIC_IDS")]
    monotonic_ids: bool,

    /// Path to the built albums-web dist directory (serves the browser client).
    #[arg(long, env = "ALBUMS_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    info!("albums-server starting");

    let seed = match &args.seed_path {
        Some(path) => {
            info!("Loading seed albums from {}", path.display());
            load_seed(path).unwrap_or_else(|e| {
                error!("Failed to load seed file {}: {e}", path.display());
                std::process::exit(1);
            })
        }
        None => default_seed(),
    };

    let id_strategy = if args.monotonic_ids {
        IdStrategy::Monotonic
    } else {
        IdStrategy::MaxPlusOne
    };

    info!(
        "Seeded {} albums (id strategy: {:?})",
        seed.len(),
        id_strategy
    );
    let store = SharedAlbumStore::new(AlbumStore::new(seed, id_strategy));

    let router = create_router(store);
    let app = if let Some(ref web_dir) = args.web_dir {
        info!("Serving web client from {}", web_dir.display());
        let spa_fallback =
            ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router.fallback_service(spa_fallback)
    } else {
        router
    };

    let addr = format!("{}:{}", args.bind, args.port);

    info!("Binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("albums-server listening on http://{addr}");
    info!("GET    /albums         - List all albums");
    info!("GET    /albums/:id     - Get album by ID");
    info!("POST   /albums         - Create new album");
    info!("PUT    /albums/:id     - Update album");
    info!("DELETE /albums/:id     - Delete album");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}

//! Scenarium Engine - Main entry point.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod catalog;
mod likes;

use app::App;
use catalog::ScenarioCatalog;

/// Engine settings read from the environment.
struct EngineConfig {
    host: String,
    port: u16,
    /// Optional override of the bundled dataset.
    data_path: Option<PathBuf>,
}

impl EngineConfig {
    fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        // SERVER_PORT wins over the generic PORT some hosts inject.
        let port = std::env::var("SERVER_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(3000);
        let data_path = std::env::var("SCENARIO_DATA_PATH").ok().map(PathBuf::from);

        Self {
            host,
            port,
            data_path,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_files();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scenarium_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scenarium Engine");

    let config = EngineConfig::from_env();

    // An explicit dataset path wins, otherwise the bundled data is used.
    let catalog = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading scenarios from SCENARIO_DATA_PATH");
            ScenarioCatalog::load(path).await?
        }
        None => ScenarioCatalog::builtin()?,
    };
    tracing::info!("Loaded {} scenarios", catalog.len());

    // Create application state
    let app = Arc::new(App::new(catalog));

    // Build router
    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Loads `.env.local` then `.env` from the workspace root, if present.
///
/// The engine is normally launched from `crates/engine`, so the root is two
/// levels up from the manifest.
fn load_dotenv_files() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    for candidate in [root.join(".env.local"), root.join(".env")] {
        if candidate.is_file() {
            let _ = dotenvy::from_path(candidate);
        }
    }
}

/// Builds a CORS layer from `CORS_ALLOWED_ORIGINS`, if it names any origin.
///
/// The variable holds either `*` or a comma-separated origin list; unset,
/// empty, or unparseable values leave CORS off entirely.
fn cors_layer_from_env() -> Option<CorsLayer> {
    let raw = std::env::var("CORS_ALLOWED_ORIGINS").ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // JSON bodies trigger CORS preflights from browser clients.
        .allow_headers([header::CONTENT_TYPE]);

    if raw == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .filter_map(|piece| {
            let origin = piece.trim();
            if origin.is_empty() {
                return None;
            }
            HeaderValue::from_str(origin).ok()
        })
        .collect();
    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}

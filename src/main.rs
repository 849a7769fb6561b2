use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use record_service::api::handlers::{handle_company_records, handle_home, handle_list_companies};
use record_service::dataset::loader::{load_dataset, DEFAULT_DATA_FILE};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:5000".parse()?;
    let mut data_path = PathBuf::from(DEFAULT_DATA_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data <path>]", args[0]);
                eprintln!("Defaults: --bind 0.0.0.0:5000 --data {}", DEFAULT_DATA_FILE);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Loading dataset from {}", data_path.display());

    // 1. Dataset: loaded once, immutable for the process lifetime.
    let dataset = Arc::new(load_dataset(&data_path)?);

    // 2. CORS: any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_home))
        .route("/companies", get(handle_list_companies))
        .route("/company/:name", get(handle_company_records))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(dataset));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! GitPulse - GitHub commit activity dashboard
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=ghp_... gitpulse            # Start on port 5000
//! gitpulse --port 8080 --db /tmp/pulse.db  # Override port and database
//! ```

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use axum::routing::get;
use clap::Parser;
use rust_embed::Embed;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitpulse::config::Config;
use gitpulse::db::Registry;
use gitpulse::github::{GitHubClient, SharedCommitSource};
use gitpulse::routes::{self, AppState};

/// Embedded dashboard static files
#[derive(Embed)]
#[folder = "static"]
struct Assets;

/// GitPulse - Track team commit activity across GitHub repositories
#[derive(Parser)]
#[command(name = "gitpulse")]
#[command(about = "GitHub commit activity dashboard", long_about = None)]
struct Cli {
    /// Path to the SQLite database (overrides GITPULSE_DB)
    #[arg(long, value_name = "PATH")]
    db: Option<std::path::PathBuf>,

    /// Port to run the server on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

/// Serve embedded static files
async fn serve_static(req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().trim_start_matches('/');

    // Default to index.html for root or non-file paths (SPA routing)
    let path = if path.is_empty() || !path.contains('.') {
        "index.html"
    } else {
        path
    };

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data.into_owned()))
                .unwrap()
        }
        None => match Assets::get("index.html") {
            Some(content) => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html")
                .body(Body::from(content.data.into_owned()))
                .unwrap(),
            None => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::from("Not Found"))
                .unwrap(),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(db) = cli.db {
        config.database_path = db;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    if config.github_token.is_none() {
        tracing::warn!(
            "GITHUB_TOKEN is not set; unauthenticated GitHub requests are heavily rate-limited"
        );
    }

    let registry = match Registry::open(&config.database_path) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            eprintln!("✗ Failed to open database: {}", e);
            eprintln!("  Path: {}", config.database_path.display());
            std::process::exit(1);
        }
    };

    let github: SharedCommitSource = Arc::new(GitHubClient::new(
        &config.github_api_url,
        config.github_token.as_deref(),
    ));

    let state = AppState {
        registry,
        commits: github,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router with API routes and static file serving
    let app = Router::new()
        .merge(routes::create_router(state))
        .fallback(get(serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", config.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        db = %config.database_path.display(),
        "GitPulse running"
    );
    println!("🚀 GitPulse running on http://127.0.0.1:{}", config.port);

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
